//! Built-in starting flows.

use super::edge::{EdgeId, FlowEdge};
use super::flow_graph::FlowGraph;
use super::geometry::Point;
use super::node::{FlowNode, NodeConfig, NodeId};
use super::tone::Tone;

fn edge(id: &str, source: &str, target: &str) -> FlowEdge {
    FlowEdge::new(EdgeId::new(id), NodeId::new(source), NodeId::new(target))
}

/// A single "Start" trigger.
pub fn blank() -> FlowGraph {
    FlowGraph::from_parts(
        vec![FlowNode::new(
            NodeId::new("1"),
            "Start",
            Point::new(250.0, 50.0),
            NodeConfig::Trigger { source: None },
        )],
        Vec::new(),
    )
}

/// Portal lead capture: trigger, intent parsing, qualification branch.
pub fn lead_capture(tone: Tone) -> FlowGraph {
    let nodes = vec![
        FlowNode::new(
            NodeId::new("1"),
            "New Lead (Portal)",
            Point::new(250.0, 0.0),
            NodeConfig::Trigger {
                source: Some("Rightmove".to_string()),
            },
        ),
        FlowNode::new(
            NodeId::new("2"),
            "Parse Intent",
            Point::new(250.0, 100.0),
            NodeConfig::AiProcess { tone },
        ),
        FlowNode::new(
            NodeId::new("3"),
            "Is Qualified?",
            Point::new(250.0, 200.0),
            NodeConfig::Condition,
        ),
        FlowNode::new(
            NodeId::new("4"),
            "Auto-Reply SMS",
            Point::new(100.0, 300.0),
            NodeConfig::Action,
        ),
        FlowNode::new(
            NodeId::new("5"),
            "Notify Agent",
            Point::new(400.0, 300.0),
            NodeConfig::Action,
        ),
    ];
    let edges = vec![
        edge("e1-2", "1", "2"),
        edge("e2-3", "2", "3"),
        edge("e3-4", "3", "4"),
        edge("e3-5", "3", "5"),
    ];
    FlowGraph::from_parts(nodes, edges)
}
