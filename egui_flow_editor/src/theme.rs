//! Colours and sizes of the flow canvas.

use egui::Color32;
use flowdesk::graph::NodeKind;
use flowdesk::graph::integration::ProviderGroup;

pub struct FlowEditorTheme {
    /// Accent strip and icon tint per node kind.
    pub kind_color: Box<dyn Fn(NodeKind) -> Color32>,
    /// Provider badge fill per provider group.
    pub badge_color: Box<dyn Fn(ProviderGroup) -> Color32>,
    pub background_color: Color32,
    pub grid_color: Color32,
    pub grid_spacing: f32,
    pub card_color: Color32,
    pub card_rounding: f32,
    pub accent_height: f32,
    pub title_color: Color32,
    pub caption_color: Color32,
    pub selection_color: Color32,
    pub port_fill: Color32,
    pub port_stroke: Color32,
    pub port_radius: f32,
    pub connection_color: Color32,
    pub connection_width: f32,
}

impl Default for FlowEditorTheme {
    fn default() -> Self {
        Self {
            kind_color: Box::new(default_kind_color),
            badge_color: Box::new(default_badge_color),
            background_color: Color32::from_rgb(248, 250, 252),
            grid_color: Color32::from_rgb(226, 232, 240),
            grid_spacing: 24.0,
            card_color: Color32::WHITE,
            card_rounding: 12.0,
            accent_height: 4.0,
            title_color: Color32::from_rgb(30, 41, 59),
            caption_color: Color32::from_rgb(148, 163, 184),
            selection_color: Color32::from_rgb(6, 182, 212),
            port_fill: Color32::WHITE,
            port_stroke: Color32::from_rgb(226, 232, 240),
            port_radius: 10.0,
            connection_color: Color32::from_rgb(148, 163, 184),
            connection_width: 2.0,
        }
    }
}

fn default_kind_color(kind: NodeKind) -> Color32 {
    match kind {
        NodeKind::Trigger => Color32::from_rgb(251, 191, 36),     // amber
        NodeKind::Action => Color32::from_rgb(6, 182, 212),       // cyan
        NodeKind::Condition => Color32::from_rgb(168, 85, 247),   // purple
        NodeKind::AiProcess => Color32::from_rgb(16, 185, 129),   // emerald
        NodeKind::Integration => Color32::from_rgb(99, 102, 241), // indigo
    }
}

fn default_badge_color(group: ProviderGroup) -> Color32 {
    match group {
        ProviderGroup::Crm => Color32::from_rgb(79, 70, 229),
        ProviderGroup::Portal => Color32::from_rgb(13, 148, 136),
        ProviderGroup::Channel => Color32::from_rgb(219, 39, 119),
    }
}
