//! Flow nodes: identity, kind, and typed per-kind configuration.

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

use super::geometry::Point;
use super::integration::IntegrationCategory;
use super::tone::Tone;

/// Attribute keys understood by the typed node configuration.
pub mod keys {
    pub const LABEL: &str = "label";
    pub const SOURCE: &str = "source";
    pub const TONE: &str = "tone";
    pub const PROVIDER: &str = "provider";
    pub const CATEGORY: &str = "category";
    pub const ACTION: &str = "action";
}

/// Opaque node identifier. Generated ids are never reused.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn generate() -> Self {
        Self(format!("node-{}", Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Trigger,
    Action,
    Condition,
    AiProcess,
    Integration,
}

impl NodeKind {
    pub const ALL: [NodeKind; 5] = [
        NodeKind::Trigger,
        NodeKind::Action,
        NodeKind::Condition,
        NodeKind::AiProcess,
        NodeKind::Integration,
    ];

    /// Wire name, also used as the theme lookup key.
    pub fn type_id(self) -> &'static str {
        match self {
            NodeKind::Trigger => "trigger",
            NodeKind::Action => "action",
            NodeKind::Condition => "condition",
            NodeKind::AiProcess => "ai_process",
            NodeKind::Integration => "integration",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            NodeKind::Trigger => "Trigger",
            NodeKind::Action => "Action",
            NodeKind::Condition => "Condition",
            NodeKind::AiProcess => "AI Process",
            NodeKind::Integration => "Integration",
        }
    }
}

/// CRM call performed by an integration node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntegrationConfig {
    pub provider: String,
    pub category: IntegrationCategory,
    pub action: String,
}

impl IntegrationConfig {
    pub fn new(provider: impl Into<String>, category: IntegrationCategory) -> Self {
        Self {
            provider: provider.into(),
            category,
            action: category.default_action().to_string(),
        }
    }

    /// Changes the category and resets the action to the category default.
    pub fn set_category(&mut self, category: IntegrationCategory) {
        self.category = category;
        self.action = category.default_action().to_string();
    }

    /// Returns false if `action` does not belong to the current category.
    pub fn set_action(&mut self, action: &str) -> bool {
        if !self.category.has_action(action) {
            return false;
        }
        self.action = action.to_string();
        true
    }
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        Self::new("Alto", IntegrationCategory::Leads)
    }
}

/// Kind-specific configuration. The variant determines the node kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeConfig {
    Trigger { source: Option<String> },
    Action,
    Condition,
    AiProcess { tone: Tone },
    Integration(IntegrationConfig),
}

impl NodeConfig {
    pub fn default_for(kind: NodeKind, tone: Tone) -> Self {
        match kind {
            NodeKind::Trigger => NodeConfig::Trigger { source: None },
            NodeKind::Action => NodeConfig::Action,
            NodeKind::Condition => NodeConfig::Condition,
            NodeKind::AiProcess => NodeConfig::AiProcess { tone },
            NodeKind::Integration => NodeConfig::Integration(IntegrationConfig::default()),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            NodeConfig::Trigger { .. } => NodeKind::Trigger,
            NodeConfig::Action => NodeKind::Action,
            NodeConfig::Condition => NodeKind::Condition,
            NodeConfig::AiProcess { .. } => NodeKind::AiProcess,
            NodeConfig::Integration(_) => NodeKind::Integration,
        }
    }
}

/// A positioned step of a flow.
///
/// `position` is in graph space. Only the graph (driven by the controller or
/// the inspector) mutates a node; rendering reads it.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowNode {
    id: NodeId,
    label: String,
    position: Point,
    config: NodeConfig,
    extra: BTreeMap<String, Value>,
}

impl FlowNode {
    pub fn new(id: NodeId, label: impl Into<String>, position: Point, config: NodeConfig) -> Self {
        Self {
            id,
            label: label.into(),
            position,
            config,
            extra: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.config.kind()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    /// Attributes no typed config field models.
    pub fn extra(&self) -> &BTreeMap<String, Value> {
        &self.extra
    }

    pub(crate) fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Merges `{key: value}` into the node.
    ///
    /// Typed keys are validated against the node kind; an integration
    /// `category` change also resets `action`. Keys the kind does not model
    /// are kept verbatim in `extra`. Returns false if the value was rejected.
    pub(crate) fn apply_attribute(&mut self, key: &str, value: Value) -> bool {
        match (key, &mut self.config) {
            (keys::LABEL, _) => match value {
                Value::String(label) => {
                    self.label = label;
                    true
                }
                other => {
                    warn!("Node {}: label must be a string, got {}", self.id, other);
                    false
                }
            },
            (keys::SOURCE, NodeConfig::Trigger { source }) => match value {
                Value::Null => {
                    *source = None;
                    true
                }
                Value::String(s) => {
                    *source = Some(s);
                    true
                }
                other => {
                    warn!("Node {}: trigger source must be a string, got {}", self.id, other);
                    false
                }
            },
            (keys::TONE, NodeConfig::AiProcess { tone }) => {
                match value.as_str().map(str::parse::<Tone>) {
                    Some(Ok(parsed)) => {
                        *tone = parsed;
                        true
                    }
                    _ => {
                        warn!("Node {}: unsupported tone {}", self.id, value);
                        false
                    }
                }
            }
            (keys::PROVIDER, NodeConfig::Integration(cfg)) => match value {
                Value::String(provider) => {
                    cfg.provider = provider;
                    true
                }
                other => {
                    warn!("Node {}: provider must be a string, got {}", self.id, other);
                    false
                }
            },
            (keys::CATEGORY, NodeConfig::Integration(cfg)) => {
                match value.as_str().and_then(IntegrationCategory::from_name) {
                    Some(category) => {
                        cfg.set_category(category);
                        self.extra.remove(keys::CATEGORY);
                        self.extra.remove(keys::ACTION);
                        true
                    }
                    None => {
                        warn!("Node {}: unknown integration category {}", self.id, value);
                        false
                    }
                }
            }
            (keys::ACTION, NodeConfig::Integration(cfg)) => {
                let accepted = value.as_str().is_some_and(|a| cfg.set_action(a));
                if accepted {
                    self.extra.remove(keys::CATEGORY);
                    self.extra.remove(keys::ACTION);
                } else {
                    warn!(
                        "Node {}: action {} is not part of category {}",
                        self.id, value, cfg.category
                    );
                }
                accepted
            }
            _ => {
                self.extra.insert(key.to_string(), value);
                true
            }
        }
    }

    /// Keeps a value the typed config cannot represent, such as an
    /// integration category missing from the catalogue.
    pub(crate) fn keep_raw(&mut self, key: &str, value: Value) {
        self.extra.insert(key.to_string(), value);
    }

    /// Reads back a single attribute. A raw value kept in `extra` shadows the
    /// typed field of the same key.
    pub fn attribute(&self, key: &str) -> Option<Value> {
        if key == keys::LABEL {
            return Some(Value::String(self.label.clone()));
        }
        self.extra
            .get(key)
            .cloned()
            .or_else(|| self.typed_attributes().remove(key))
    }

    /// All attributes as an open map: `extra` merged over the typed fields.
    pub fn attributes(&self) -> Map<String, Value> {
        let mut map = self.typed_attributes();
        map.extend(self.extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        map
    }

    /// String form of an attribute, empty if absent or not a string.
    pub fn attribute_text(&self, key: &str) -> String {
        self.attribute(key)
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_default()
    }

    fn typed_attributes(&self) -> Map<String, Value> {
        let mut map = Map::new();
        match &self.config {
            NodeConfig::Trigger { source: Some(source) } => {
                map.insert(keys::SOURCE.into(), Value::String(source.clone()));
            }
            NodeConfig::AiProcess { tone } => {
                map.insert(keys::TONE.into(), Value::String(tone.as_str().into()));
            }
            NodeConfig::Integration(cfg) => {
                map.insert(keys::PROVIDER.into(), Value::String(cfg.provider.clone()));
                map.insert(keys::CATEGORY.into(), Value::String(cfg.category.name().into()));
                map.insert(keys::ACTION.into(), Value::String(cfg.action.clone()));
            }
            _ => {}
        }
        map
    }

    /// One-line caption shown under the label on the node card.
    pub fn caption(&self) -> String {
        match &self.config {
            NodeConfig::Integration(_) => format!(
                "{} \u{2022} {}",
                self.attribute_text(keys::CATEGORY),
                self.attribute_text(keys::ACTION)
            ),
            NodeConfig::AiProcess { tone } => format!("Processing with {} tone.", tone),
            _ => "Awaiting configuration.".to_string(),
        }
    }
}
