//! Flow graph data model.

pub mod edge;
pub mod flow_graph;
pub mod geometry;
pub mod integration;
pub mod node;
pub mod templates;
pub mod tone;
pub mod wire;

pub use edge::{EdgeId, FlowEdge};
pub use flow_graph::FlowGraph;
pub use geometry::{Point, Rect, Vec2};
pub use integration::{IntegrationCategory, ProviderBadge, detect_provider};
pub use node::{FlowNode, IntegrationConfig, NodeConfig, NodeId, NodeKind, keys};
pub use tone::{Tone, WorkflowCategory};
pub use wire::{WireNode, WireNodeConfig};

impl FlowNode {
    /// Provider badge for the card, from the label and attributes.
    pub fn provider_badge(&self) -> Option<&'static ProviderBadge> {
        let haystack = format!("{} {}", self.label(), serde_json::Value::Object(self.attributes()));
        detect_provider(&haystack)
    }
}
