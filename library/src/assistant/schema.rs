//! Request and response bodies of the assistant endpoints.

use serde::{Deserialize, Serialize};

use crate::error::{FlowError, FlowResult};
use crate::graph::{FlowEdge, FlowGraph, FlowNode, Tone, WireNode};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionRequest {
    pub node_label: String,
    pub context: String,
    pub tone: Tone,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DescriptionResponse {
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlowGenerationRequest {
    pub requirement: String,
    pub category: String,
}

/// Body of `generate-flow` before validation. Every field is optional so a
/// payload without `nodes` or `edges` is reported as an invalid response
/// rather than a JSON error.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawGeneratedFlow {
    #[serde(default)]
    flow_name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    summary: Option<serde_json::Value>,
    #[serde(default)]
    nodes: Option<Vec<WireNode>>,
    #[serde(default)]
    edges: Option<Vec<FlowEdge>>,
}

/// A validated generated flow.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedFlow {
    pub flow_name: String,
    pub description: String,
    pub summary: String,
    pub nodes: Vec<WireNode>,
    pub edges: Vec<FlowEdge>,
}

impl TryFrom<RawGeneratedFlow> for GeneratedFlow {
    type Error = FlowError;

    fn try_from(raw: RawGeneratedFlow) -> FlowResult<Self> {
        let (Some(nodes), Some(edges)) = (raw.nodes, raw.edges) else {
            return Err(FlowError::InvalidResponse(
                "generated flow is missing nodes or edges".to_string(),
            ));
        };
        // the service sometimes returns the summary as a list of steps
        let summary = match raw.summary {
            Some(serde_json::Value::String(s)) => s,
            Some(serde_json::Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join("\n"),
            Some(other) if !other.is_null() => other.to_string(),
            _ => String::new(),
        };
        Ok(Self {
            flow_name: raw.flow_name.unwrap_or_else(|| "Untitled Flow".to_string()),
            description: raw.description.unwrap_or_default(),
            summary,
            nodes,
            edges,
        })
    }
}

impl GeneratedFlow {
    pub fn parse(body: &str) -> FlowResult<Self> {
        let raw: RawGeneratedFlow = serde_json::from_str(body)
            .map_err(|e| FlowError::InvalidResponse(format!("generate-flow: {}", e)))?;
        raw.try_into()
    }

    /// Typed graph; AI nodes without their own tone get `tone`.
    pub fn to_graph(&self, tone: Tone) -> FlowGraph {
        let nodes = self
            .nodes
            .iter()
            .cloned()
            .map(|wire| FlowNode::from_wire(wire, tone))
            .collect();
        FlowGraph::from_parts(nodes, self.edges.clone())
    }

    /// Chat reply announcing the generated flow.
    pub fn announcement(&self) -> String {
        format!(
            "Perfect! I've created your workflow: \"{}\"\n\n{}\n\nThe flow includes:\n{}",
            self.flow_name, self.description, self.summary
        )
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowAnalysisRequest {
    pub node_labels: Vec<String>,
}

impl FlowAnalysisRequest {
    pub fn for_graph(graph: &FlowGraph) -> Self {
        Self {
            node_labels: graph.nodes().iter().map(|n| n.label().to_string()).collect(),
        }
    }
}

/// Critical missing steps and suggested improvements for a flow.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowAnalysis {
    #[serde(default)]
    pub missing: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_request_uses_camel_case() {
        let body = serde_json::to_value(DescriptionRequest {
            node_label: "Parse Intent".into(),
            context: "Sales Residential".into(),
            tone: Tone::Friendly,
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "nodeLabel": "Parse Intent",
                "context": "Sales Residential",
                "tone": "Friendly"
            })
        );
    }

    #[test]
    fn summary_list_is_joined() {
        let flow = GeneratedFlow::parse(
            r#"{ "flowName": "F", "summary": ["a", "b"], "nodes": [], "edges": [] }"#,
        )
        .unwrap();
        assert_eq!(flow.summary, "a\nb");
    }
}
