//! Node card drawing.

use egui::{self, Align2, Color32, CornerRadius, FontId, Pos2, Rect, Stroke, StrokeKind, Vec2};
use flowdesk::graph::FlowNode;

use crate::theme::FlowEditorTheme;

/// Screen-space placement of one card.
pub(crate) struct NodeLayout {
    pub rect: Rect,
    pub zoom: f32,
}

impl NodeLayout {
    pub fn input_port(&self) -> Pos2 {
        Pos2::new(self.rect.min.x, self.rect.center().y)
    }

    pub fn output_port(&self) -> Pos2 {
        Pos2::new(self.rect.max.x, self.rect.center().y)
    }
}

/// Card body, accent strip, kind tag, label, caption and provider badge.
pub(crate) fn draw_node_card(
    painter: &egui::Painter,
    layout: &NodeLayout,
    theme: &FlowEditorTheme,
    node: &FlowNode,
    is_selected: bool,
    is_dragging: bool,
) {
    let zoom = layout.zoom;
    let rounding = theme.card_rounding * zoom;
    let accent = (theme.kind_color)(node.kind());

    if is_dragging {
        painter.rect_filled(
            layout.rect.translate(Vec2::new(0.0, 6.0 * zoom)),
            rounding,
            Color32::from_black_alpha(24),
        );
    }
    painter.rect_filled(layout.rect, rounding, theme.card_color);
    if is_selected {
        painter.rect_stroke(
            layout.rect,
            rounding,
            Stroke::new(2.0 * zoom, theme.selection_color),
            StrokeKind::Outside,
        );
    } else {
        painter.rect_stroke(
            layout.rect,
            rounding,
            Stroke::new(1.0, theme.port_stroke),
            StrokeKind::Inside,
        );
    }

    let strip = Rect::from_min_size(
        layout.rect.min,
        Vec2::new(layout.rect.width(), theme.accent_height * zoom),
    );
    let r = rounding.min(255.0) as u8;
    painter.rect_filled(
        strip,
        CornerRadius {
            nw: r,
            ne: r,
            sw: 0,
            se: 0,
        },
        accent,
    );

    let pad = 16.0 * zoom;
    let mut cursor = layout.rect.min + Vec2::new(pad, pad + theme.accent_height * zoom);

    // kind tag
    let tag_font = FontId::proportional(10.0 * zoom);
    let tag_text = node.kind().display_name().to_uppercase();
    let tag_galley = painter.layout_no_wrap(tag_text, tag_font, accent);
    let tag_rect = Rect::from_min_size(cursor, tag_galley.size() + Vec2::new(12.0, 6.0) * zoom);
    painter.rect_filled(tag_rect, 6.0 * zoom, accent.gamma_multiply(0.12));
    painter.galley(tag_rect.min + Vec2::new(6.0, 3.0) * zoom, tag_galley, accent);
    cursor.y = tag_rect.max.y + 10.0 * zoom;

    painter.text(
        cursor,
        Align2::LEFT_TOP,
        node.label(),
        FontId::proportional(14.0 * zoom),
        theme.title_color,
    );
    cursor.y += 20.0 * zoom;

    painter.text(
        cursor,
        Align2::LEFT_TOP,
        node.caption(),
        FontId::proportional(11.0 * zoom),
        theme.caption_color,
    );

    if let Some(badge) = node.provider_badge() {
        let font = FontId::proportional(10.0 * zoom);
        let galley = painter.layout_no_wrap(badge.name.to_string(), font, Color32::WHITE);
        let size = galley.size() + Vec2::new(16.0, 8.0) * zoom;
        let min = Pos2::new(layout.rect.min.x + pad, layout.rect.max.y - pad - size.y);
        let badge_rect = Rect::from_min_size(min, size);
        painter.line_segment(
            [
                Pos2::new(layout.rect.min.x + pad, badge_rect.min.y - 8.0 * zoom),
                Pos2::new(layout.rect.max.x - pad, badge_rect.min.y - 8.0 * zoom),
            ],
            Stroke::new(1.0, theme.port_stroke),
        );
        painter.rect_filled(badge_rect, 8.0 * zoom, (theme.badge_color)(badge.group));
        painter.galley(badge_rect.min + Vec2::new(8.0, 4.0) * zoom, galley, Color32::WHITE);
    }
}

/// Input and output port circles. The input port only shows on hover.
pub(crate) fn draw_ports(
    painter: &egui::Painter,
    layout: &NodeLayout,
    theme: &FlowEditorTheme,
    show_input: bool,
) {
    let r = theme.port_radius * layout.zoom;
    let mut ports = vec![layout.output_port()];
    if show_input {
        ports.push(layout.input_port());
    }
    for p in ports {
        painter.circle_filled(p, r, theme.port_fill);
        painter.circle_stroke(p, r, Stroke::new(2.0 * layout.zoom, theme.port_stroke));
        painter.circle_filled(p, r * 0.3, theme.caption_color);
    }
}
