use serde::{Deserialize, Serialize};

use crate::graph::{IntegrationCategory, IntegrationConfig, NodeConfig, NodeKind, Tone};

/// Toolbar entry that can be dragged onto the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaletteItem {
    Trigger,
    Action,
    Condition,
    AiAgent,
    CrmSync,
}

impl PaletteItem {
    /// Toolbar order.
    pub const ALL: [PaletteItem; 5] = [
        PaletteItem::Trigger,
        PaletteItem::Action,
        PaletteItem::Condition,
        PaletteItem::AiAgent,
        PaletteItem::CrmSync,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PaletteItem::Trigger => "Trigger",
            PaletteItem::Action => "Action",
            PaletteItem::Condition => "Condition",
            PaletteItem::AiAgent => "AI Agent",
            PaletteItem::CrmSync => "CRM Sync",
        }
    }

    pub fn kind(self) -> NodeKind {
        match self {
            PaletteItem::Trigger => NodeKind::Trigger,
            PaletteItem::Action => NodeKind::Action,
            PaletteItem::Condition => NodeKind::Condition,
            PaletteItem::AiAgent => NodeKind::AiProcess,
            PaletteItem::CrmSync => NodeKind::Integration,
        }
    }

    /// Unknown labels fall back to `Action`.
    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|item| item.label() == label)
            .unwrap_or(PaletteItem::Action)
    }

    /// Label and configuration of the node created when this item is dropped.
    pub fn node_template(self, tone: Tone) -> (String, NodeConfig) {
        match self.kind() {
            NodeKind::Integration => (
                "Sync to Alto".to_string(),
                NodeConfig::Integration(IntegrationConfig::new(
                    "Alto",
                    IntegrationCategory::Listing,
                )),
            ),
            kind => (format!("New {}", self.label()), NodeConfig::default_for(kind, tone)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_and_unknown_is_action() {
        for item in PaletteItem::ALL {
            assert_eq!(PaletteItem::from_label(item.label()), item);
        }
        assert_eq!(PaletteItem::from_label("Webhook"), PaletteItem::Action);
    }

    #[test]
    fn crm_sync_preconfigures_alto_listing() {
        let (label, config) = PaletteItem::CrmSync.node_template(Tone::Formal);
        assert_eq!(label, "Sync to Alto");
        let NodeConfig::Integration(cfg) = config else {
            panic!("expected integration config");
        };
        assert_eq!(cfg.category, IntegrationCategory::Listing);
        assert_eq!(cfg.action, "Get Listing");
    }
}
