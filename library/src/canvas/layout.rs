//! Node card geometry in graph space and pointer hit-testing.

use crate::graph::{FlowGraph, FlowNode, NodeId, Point, Rect, Vec2};

/// Rendered size of a node card and its ports, in graph units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeMetrics {
    pub width: f32,
    pub height: f32,
    /// Radius around a port centre that counts as a port hit.
    pub port_radius: f32,
}

impl Default for NodeMetrics {
    fn default() -> Self {
        Self {
            width: 280.0,
            height: 160.0,
            port_radius: 10.0,
        }
    }
}

impl NodeMetrics {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn half_size(&self) -> Vec2 {
        self.size() * 0.5
    }

    pub fn rect(&self, node: &FlowNode) -> Rect {
        Rect::from_min_size(node.position(), self.size())
    }

    /// Output port, right-centre of the card.
    pub fn output_port(&self, node: &FlowNode) -> Point {
        node.position() + Vec2::new(self.width, self.height * 0.5)
    }

    /// Input port, left-centre of the card.
    pub fn input_port(&self, node: &FlowNode) -> Point {
        node.position() + Vec2::new(0.0, self.height * 0.5)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PortSide {
    Input,
    Output,
}

/// What lies under a graph-space point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HitTarget {
    Canvas,
    NodeBody(NodeId),
    Port(NodeId, PortSide),
}

/// Topmost (last inserted) node wins; ports take precedence over the body
/// of the same node.
pub fn hit_test(graph: &FlowGraph, metrics: &NodeMetrics, at: Point) -> HitTarget {
    for node in graph.nodes().iter().rev() {
        if at.distance(metrics.input_port(node)) <= metrics.port_radius {
            return HitTarget::Port(node.id().clone(), PortSide::Input);
        }
        if at.distance(metrics.output_port(node)) <= metrics.port_radius {
            return HitTarget::Port(node.id().clone(), PortSide::Output);
        }
        if metrics.rect(node).contains(at) {
            return HitTarget::NodeBody(node.id().clone());
        }
    }
    HitTarget::Canvas
}
