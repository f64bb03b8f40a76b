//! Toolbar of node types that can be dragged onto the canvas.

use egui::{self, RichText, Stroke};
use flowdesk::canvas::PaletteItem;

use crate::theme::FlowEditorTheme;

pub fn show_palette(ui: &mut egui::Ui, theme: &FlowEditorTheme) {
    ui.horizontal(|ui| {
        for item in PaletteItem::ALL {
            let id = egui::Id::new(("palette", item.label()));
            ui.dnd_drag_source(id, item, |ui| {
                let color = (theme.kind_color)(item.kind());
                egui::Frame::new()
                    .fill(theme.card_color)
                    .stroke(Stroke::new(1.0, color))
                    .corner_radius(8.0)
                    .inner_margin(egui::Margin::symmetric(10, 6))
                    .show(ui, |ui| {
                        let text = RichText::new(item.label()).color(color).strong();
                        ui.add(egui::Label::new(text).selectable(false));
                    });
            });
        }
    });
}
