//! The node/edge aggregate.

use log::debug;
use serde_json::Value;
use std::collections::HashSet;

use super::edge::{EdgeId, FlowEdge};
use super::geometry::{Point, Vec2};
use super::node::{FlowNode, NodeConfig, NodeId};

/// Insertion-ordered nodes and edges of one flow.
///
/// Nodes are rendered in insertion order, so the last node is topmost.
/// Nothing is ever removed implicitly.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlowGraph {
    nodes: Vec<FlowNode>,
    edges: Vec<FlowEdge>,
}

impl FlowGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from an external population (template, generated flow,
    /// store). Edges are taken as-is, dangling or not.
    pub fn from_parts(nodes: Vec<FlowNode>, edges: Vec<FlowEdge>) -> Self {
        Self { nodes, edges }
    }

    pub fn add_node(
        &mut self,
        label: impl Into<String>,
        position: Point,
        config: NodeConfig,
    ) -> &FlowNode {
        let node = FlowNode::new(NodeId::generate(), label, position, config);
        debug!("Adding {:?} node {} at {:?}", node.kind(), node.id(), position);
        self.nodes.push(node);
        &self.nodes[self.nodes.len() - 1]
    }

    /// Appends an edge without checking that either endpoint exists.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId) -> &FlowEdge {
        let edge = FlowEdge::new(EdgeId::generate(), source, target);
        if edge.is_self_loop() {
            debug!("Edge {} is a self-loop on {}", edge.id, edge.source);
        }
        self.edges.push(edge);
        &self.edges[self.edges.len() - 1]
    }

    /// No-op if `id` is unknown. Returns whether a node was updated.
    pub fn update_node_position(&mut self, id: &NodeId, position: Point) -> bool {
        match self.node_mut(id) {
            Some(node) => {
                node.set_position(position);
                true
            }
            None => false,
        }
    }

    pub(crate) fn translate_node(&mut self, id: &NodeId, delta: Vec2) -> bool {
        match self.node_mut(id) {
            Some(node) => {
                let moved = node.position() + delta;
                node.set_position(moved);
                true
            }
            None => false,
        }
    }

    /// Merges `{key: value}` into the node's attributes, applying the
    /// integration category cascade. Returns the updated node, or `None` if
    /// `id` is unknown.
    pub fn update_node_attribute(
        &mut self,
        id: &NodeId,
        key: &str,
        value: Value,
    ) -> Option<&FlowNode> {
        let node = self.node_mut(id)?;
        node.apply_attribute(key, value);
        Some(&*node)
    }

    pub fn node(&self, id: &NodeId) -> Option<&FlowNode> {
        self.nodes.iter().find(|n| n.id() == id)
    }

    fn node_mut(&mut self, id: &NodeId) -> Option<&mut FlowNode> {
        self.nodes.iter_mut().find(|n| n.id() == id)
    }

    pub fn edge(&self, id: &EdgeId) -> Option<&FlowEdge> {
        self.edges.iter().find(|e| &e.id == id)
    }

    pub fn nodes(&self) -> &[FlowNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[FlowEdge] {
        &self.edges
    }

    /// Both endpoints of `edge`, or `None` if it is dangling.
    pub fn endpoints(&self, edge: &FlowEdge) -> Option<(&FlowNode, &FlowNode)> {
        Some((self.node(&edge.source)?, self.node(&edge.target)?))
    }

    pub fn dangling_edges(&self) -> impl Iterator<Item = &FlowEdge> {
        self.edges.iter().filter(|e| self.endpoints(e).is_none())
    }

    /// Edges repeating an earlier edge's `(source, target)` pair.
    pub fn duplicate_edges(&self) -> Vec<&FlowEdge> {
        let mut seen = HashSet::new();
        self.edges
            .iter()
            .filter(|e| !seen.insert((&e.source, &e.target)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
