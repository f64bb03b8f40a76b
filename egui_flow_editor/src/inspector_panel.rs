//! Properties panel for the selected node.

use egui::{self, RichText};
use flowdesk::canvas::FlowEditor;
use flowdesk::graph::keys;
use flowdesk::inspector::{Insight, PanelField};
use serde_json::Value;

use crate::theme::FlowEditorTheme;

/// Edits requested from the panel, applied by the caller after rendering.
#[derive(Clone, Debug, PartialEq)]
pub enum InspectorAction {
    SetAttribute(&'static str, Value),
    GenerateInsight,
    Close,
}

/// Renders nothing and returns no actions while nothing is selected.
pub fn show_inspector(
    ui: &mut egui::Ui,
    editor: &FlowEditor,
    theme: &FlowEditorTheme,
) -> Vec<InspectorAction> {
    let mut actions = Vec::new();
    let Some(panel) = editor.inspector().panel() else {
        return actions;
    };

    ui.horizontal(|ui| {
        ui.heading("Properties");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("\u{2715}").clicked() {
                actions.push(InspectorAction::Close);
            }
        });
    });
    ui.separator();

    ui.label(RichText::new("LABEL").small().strong().color(theme.caption_color));
    let mut label = panel.node.label().to_string();
    if ui.text_edit_singleline(&mut label).changed() {
        actions.push(InspectorAction::SetAttribute(keys::LABEL, Value::String(label)));
    }
    ui.add_space(8.0);

    if let Some(provider) = panel.connected_provider {
        ui.label(RichText::new(format!("\u{2714} Connected: {}", provider)).strong());
    }

    for field in &panel.fields {
        match field {
            PanelField::Text { key, title, value } => {
                ui.label(field_title(title, theme));
                let mut text = value.clone();
                if ui.text_edit_singleline(&mut text).changed() {
                    actions.push(InspectorAction::SetAttribute(*key, Value::String(text)));
                }
            }
            PanelField::Choice {
                key,
                title,
                options,
                value,
            } => {
                ui.label(field_title(title, theme));
                let mut current = value.clone();
                egui::ComboBox::from_id_salt(("inspector", *key))
                    .selected_text(value.as_str())
                    .width(ui.available_width())
                    .show_ui(ui, |ui| {
                        for option in options {
                            ui.selectable_value(&mut current, option.to_string(), *option);
                        }
                    });
                if &current != value {
                    actions.push(InspectorAction::SetAttribute(*key, Value::String(current)));
                }
            }
        }
        ui.add_space(8.0);
    }

    ui.separator();
    ui.label(RichText::new("AI INSIGHT").small().strong().color(theme.selection_color));
    match panel.insight {
        Insight::Empty => {
            ui.label(
                RichText::new("Click to generate a description for this step based on the context.")
                    .italics()
                    .color(theme.caption_color),
            );
            if ui.button("Generate").clicked() {
                actions.push(InspectorAction::GenerateInsight);
            }
        }
        Insight::Pending(_) => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Generating...");
            });
        }
        Insight::Ready(text) => {
            ui.label(text.as_str());
        }
    }
    actions
}

fn field_title(title: &str, theme: &FlowEditorTheme) -> RichText {
    RichText::new(title.to_uppercase())
        .small()
        .strong()
        .color(theme.caption_color)
}
