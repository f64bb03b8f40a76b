//! Side panel bound to the selected node.
//!
//! The inspector keeps a snapshot of the selected node and re-reads it from
//! the graph after every edit it issues, so the panel never lags behind the
//! graph within one interaction.

use log::{debug, info};
use serde_json::Value;

use crate::assistant::DescriptionRequest;
use crate::graph::{
    FlowGraph, FlowNode, IntegrationCategory, NodeConfig, NodeId, Tone, WorkflowCategory, keys,
};

/// Shown when the assistant answered with an empty description.
pub const EMPTY_DESCRIPTION: &str = "No description generated.";

/// Tags an in-flight description request with the node it was issued for.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RequestTicket {
    pub id: u64,
    pub node_id: NodeId,
}

/// AI description state for the selected node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Insight {
    #[default]
    Empty,
    Pending(RequestTicket),
    Ready(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelField {
    Text {
        key: &'static str,
        title: &'static str,
        value: String,
    },
    Choice {
        key: &'static str,
        title: &'static str,
        options: Vec<&'static str>,
        value: String,
    },
}

impl PanelField {
    pub fn key(&self) -> &'static str {
        match self {
            PanelField::Text { key, .. } | PanelField::Choice { key, .. } => key,
        }
    }
}

/// Everything the panel renders for the current selection.
#[derive(Clone, Debug, PartialEq)]
pub struct InspectorPanel<'a> {
    pub node: &'a FlowNode,
    /// `Connected: <provider>` banner for integration nodes.
    pub connected_provider: Option<&'a str>,
    pub fields: Vec<PanelField>,
    pub insight: &'a Insight,
}

#[derive(Clone, Debug, Default)]
pub struct Inspector {
    selected: Option<FlowNode>,
    insight: Insight,
    next_ticket: u64,
}

impl Inspector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `id`, replacing any previous selection. Returns false (and
    /// clears the selection) if the node does not exist.
    pub fn select(&mut self, graph: &FlowGraph, id: &NodeId) -> bool {
        self.insight = Insight::Empty;
        self.selected = graph.node(id).cloned();
        if self.selected.is_none() {
            debug!("Cannot select unknown node {}", id);
        }
        self.selected.is_some()
    }

    pub fn deselect(&mut self) {
        self.selected = None;
        self.insight = Insight::Empty;
    }

    pub fn selected(&self) -> Option<&FlowNode> {
        self.selected.as_ref()
    }

    pub fn selected_id(&self) -> Option<&NodeId> {
        self.selected.as_ref().map(FlowNode::id)
    }

    pub fn insight(&self) -> &Insight {
        &self.insight
    }

    /// Writes `{key: value}` to the selected node and re-reads it.
    pub fn set_attribute(&mut self, graph: &mut FlowGraph, key: &str, value: Value) -> bool {
        let Some(id) = self.selected_id().cloned() else {
            return false;
        };
        match graph.update_node_attribute(&id, key, value) {
            Some(node) => {
                self.selected = Some(node.clone());
                true
            }
            None => {
                debug!("Selected node {} vanished from the graph", id);
                self.deselect();
                false
            }
        }
    }

    /// Re-reads the selected node, e.g. after it was dragged.
    pub fn refresh(&mut self, graph: &FlowGraph) {
        if let Some(id) = self.selected_id().cloned() {
            self.selected = graph.node(&id).cloned();
            if self.selected.is_none() {
                self.insight = Insight::Empty;
            }
        }
    }

    /// `None` while nothing is selected.
    pub fn panel(&self) -> Option<InspectorPanel<'_>> {
        let node = self.selected.as_ref()?;
        let mut fields = Vec::new();
        let mut connected_provider = None;
        match node.config() {
            NodeConfig::Trigger { source } => fields.push(PanelField::Text {
                key: keys::SOURCE,
                title: "Source",
                value: source.clone().unwrap_or_default(),
            }),
            NodeConfig::AiProcess { tone } => fields.push(PanelField::Choice {
                key: keys::TONE,
                title: "Tone",
                options: Tone::ALL.iter().map(|t| t.as_str()).collect(),
                value: tone.as_str().to_string(),
            }),
            NodeConfig::Integration(cfg) => {
                connected_provider = Some(cfg.provider.as_str());
                fields.push(PanelField::Choice {
                    key: keys::CATEGORY,
                    title: "Category",
                    options: IntegrationCategory::ALL.iter().map(|c| c.name()).collect(),
                    value: node.attribute_text(keys::CATEGORY),
                });
                fields.push(PanelField::Choice {
                    key: keys::ACTION,
                    title: "Action",
                    options: cfg.category.actions().to_vec(),
                    value: node.attribute_text(keys::ACTION),
                });
            }
            NodeConfig::Action | NodeConfig::Condition => {}
        }
        Some(InspectorPanel {
            node,
            connected_provider,
            fields,
            insight: &self.insight,
        })
    }

    /// Starts a description request for the selected node. Returns `None`
    /// if nothing is selected or a request is already pending.
    pub fn begin_insight(
        &mut self,
        category: WorkflowCategory,
        tone: Tone,
    ) -> Option<(RequestTicket, DescriptionRequest)> {
        let node = self.selected.as_ref()?;
        if matches!(self.insight, Insight::Pending(_)) {
            return None;
        }
        self.next_ticket += 1;
        let ticket = RequestTicket {
            id: self.next_ticket,
            node_id: node.id().clone(),
        };
        let request = DescriptionRequest {
            node_label: node.label().to_string(),
            context: category.to_string(),
            tone,
        };
        self.insight = Insight::Pending(ticket.clone());
        Some((ticket, request))
    }

    /// Applies a description if `ticket` is still the pending request for
    /// the current selection; otherwise the response is dropped.
    pub fn apply_insight(&mut self, ticket: &RequestTicket, description: String) -> bool {
        match &self.insight {
            Insight::Pending(pending) if pending == ticket => {
                self.insight = if description.trim().is_empty() {
                    Insight::Ready(EMPTY_DESCRIPTION.to_string())
                } else {
                    Insight::Ready(description)
                };
                true
            }
            _ => {
                info!(
                    "Discarding stale description for node {} (request {})",
                    ticket.node_id, ticket.id
                );
                false
            }
        }
    }
}
