//! JSON shape of nodes as exchanged with the assistant service and the
//! flow store. Conversion to the typed model happens here and nowhere else.

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::geometry::Point;
use super::integration::IntegrationCategory;
use super::node::{FlowNode, NodeConfig, NodeId, NodeKind, keys};
use super::tone::Tone;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WireNode {
    pub id: NodeId,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub label: String,
    pub position: Point,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<WireNodeConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WireNodeConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<Tone>,
}

impl FlowNode {
    /// `flow_tone` applies to AI nodes that carry no tone of their own.
    pub fn from_wire(wire: WireNode, flow_tone: Tone) -> Self {
        let tone = wire.config.and_then(|c| c.tone).unwrap_or(flow_tone);
        let mut node = FlowNode::new(
            wire.id,
            wire.label,
            wire.position,
            NodeConfig::default_for(wire.kind, tone),
        );
        if let Some(mut data) = wire.data {
            if node.kind() == NodeKind::Integration {
                node.resolve_integration_target(&mut data);
            }
            for (key, value) in data {
                if key == keys::LABEL {
                    debug!("Ignoring data.label on node {}", node.id());
                    continue;
                }
                node.apply_attribute(&key, value);
            }
        }
        node
    }

    /// Takes `category` and `action` out of `data` and resolves them against
    /// the catalogue. A missing category is inferred from the action. Values
    /// the catalogue does not know are kept raw rather than replaced.
    fn resolve_integration_target(&mut self, data: &mut Map<String, Value>) {
        let category = data.remove(keys::CATEGORY);
        let action = data.remove(keys::ACTION);
        let action_name = action.as_ref().and_then(Value::as_str);
        let resolved = match &category {
            Some(value) => value.as_str().and_then(IntegrationCategory::from_name),
            None => action_name.and_then(IntegrationCategory::for_action),
        };

        let Some(resolved) = resolved else {
            debug!("Node {}: integration target not in catalogue", self.id());
            if let Some(category) = category {
                self.keep_raw(keys::CATEGORY, category);
            }
            if let Some(action) = action {
                self.keep_raw(keys::ACTION, action);
            }
            return;
        };
        let fits = action_name.is_some_and(|a| resolved.has_action(a));
        // category first: applying it resets action
        self.apply_attribute(keys::CATEGORY, Value::String(resolved.name().to_string()));
        if let Some(action) = action {
            if fits {
                self.apply_attribute(keys::ACTION, action);
            } else {
                self.keep_raw(keys::ACTION, action);
            }
        }
    }

    pub fn to_wire(&self) -> WireNode {
        let data = self.attributes();
        let config = match self.config() {
            NodeConfig::AiProcess { tone } => Some(WireNodeConfig { tone: Some(*tone) }),
            _ => None,
        };
        WireNode {
            id: self.id().clone(),
            kind: self.kind(),
            label: self.label().to_string(),
            position: self.position(),
            data: (!data.is_empty()).then_some(data),
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_original_node_shape() {
        let wire: WireNode = serde_json::from_value(json!({
            "id": "1",
            "type": "integration",
            "label": "Book it",
            "position": { "x": 10.0, "y": 20.0 },
            "data": { "provider": "Alto", "action": "Book Viewing", "category": "Appointments" }
        }))
        .unwrap();
        let node = FlowNode::from_wire(wire, Tone::Formal);
        assert_eq!(node.kind(), NodeKind::Integration);
        // the explicit action survives the category cascade
        assert_eq!(node.attribute(keys::ACTION), Some(json!("Book Viewing")));
        assert_eq!(node.position(), Point::new(10.0, 20.0));
    }

    #[test]
    fn ai_node_takes_flow_tone_unless_configured() {
        let plain: WireNode = serde_json::from_value(json!({
            "id": "2", "type": "ai_process", "label": "Parse", "position": { "x": 0, "y": 0 }
        }))
        .unwrap();
        let node = FlowNode::from_wire(plain, Tone::Playful);
        assert_eq!(node.config(), &NodeConfig::AiProcess { tone: Tone::Playful });

        let toned: WireNode = serde_json::from_value(json!({
            "id": "3", "type": "ai_process", "label": "Parse",
            "position": { "x": 0, "y": 0 }, "config": { "tone": "Formal" }
        }))
        .unwrap();
        let node = FlowNode::from_wire(toned, Tone::Playful);
        assert_eq!(node.config(), &NodeConfig::AiProcess { tone: Tone::Formal });
        assert_eq!(node.to_wire().config.and_then(|c| c.tone), Some(Tone::Formal));
    }

    fn integration_wire(data: Value) -> WireNode {
        serde_json::from_value(json!({
            "id": "4", "type": "integration", "label": "Publish",
            "position": { "x": 0, "y": 0 }, "data": data
        }))
        .unwrap()
    }

    #[test]
    fn unknown_category_is_kept_verbatim() {
        let node = FlowNode::from_wire(
            integration_wire(json!({
                "provider": "Rightmove", "category": "Portal", "action": "Publish Listing"
            })),
            Tone::Professional,
        );
        assert_eq!(node.attribute(keys::CATEGORY), Some(json!("Portal")));
        assert_eq!(node.attribute(keys::ACTION), Some(json!("Publish Listing")));
        assert_eq!(node.attribute(keys::PROVIDER), Some(json!("Rightmove")));

        // stored and reloaded unchanged
        let reloaded = FlowNode::from_wire(node.to_wire(), Tone::Professional);
        assert_eq!(reloaded.attributes(), node.attributes());
    }

    #[test]
    fn category_is_inferred_from_action_alone() {
        let node = FlowNode::from_wire(
            integration_wire(json!({ "action": "Get Listing" })),
            Tone::Professional,
        );
        assert_eq!(node.attribute(keys::CATEGORY), Some(json!("Listing")));
        assert_eq!(node.attribute(keys::ACTION), Some(json!("Get Listing")));
        assert!(node.extra().is_empty());
    }

    #[test]
    fn known_category_keeps_foreign_action() {
        let node = FlowNode::from_wire(
            integration_wire(json!({ "category": "Leads", "action": "Publish Listing" })),
            Tone::Professional,
        );
        assert_eq!(node.attribute(keys::CATEGORY), Some(json!("Leads")));
        assert_eq!(node.attribute(keys::ACTION), Some(json!("Publish Listing")));
    }
}
