//! Edge curves between node connector points.

use log::trace;

use super::layout::NodeMetrics;
use crate::graph::{EdgeId, FlowGraph, FlowNode, Point};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RouteStyle {
    /// Lower bound of the horizontal control-point offset.
    pub min_control_offset: f32,
    /// Line segments used when flattening a curve.
    pub segments: usize,
}

impl Default for RouteStyle {
    fn default() -> Self {
        Self {
            min_control_offset: 60.0,
            segments: 20,
        }
    }
}

/// Cubic bezier in graph space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicCurve {
    pub start: Point,
    pub c1: Point,
    pub c2: Point,
    pub end: Point,
}

impl CubicCurve {
    pub fn point_at(&self, t: f32) -> Point {
        let t2 = t * t;
        let t3 = t2 * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let mt3 = mt2 * mt;

        let x = mt3 * self.start.x
            + 3.0 * mt2 * t * self.c1.x
            + 3.0 * mt * t2 * self.c2.x
            + t3 * self.end.x;
        let y = mt3 * self.start.y
            + 3.0 * mt2 * t * self.c1.y
            + 3.0 * mt * t2 * self.c2.y
            + t3 * self.end.y;
        Point::new(x, y)
    }

    /// Polyline approximation with `segments + 1` points, endpoints included.
    pub fn flatten(&self, segments: usize) -> Vec<Point> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| self.point_at(i as f32 / segments as f32))
            .collect()
    }
}

pub fn source_connector_point(node: &FlowNode, metrics: &NodeMetrics) -> Point {
    metrics.output_port(node)
}

pub fn target_connector_point(node: &FlowNode, metrics: &NodeMetrics) -> Point {
    metrics.input_port(node)
}

/// S-curve whose control points sit `max(|dx| / 2, min_control_offset)`
/// horizontally away from each end.
pub fn route_edge(start: Point, end: Point, style: &RouteStyle) -> CubicCurve {
    let dx = ((end.x - start.x).abs() * 0.5).max(style.min_control_offset);
    CubicCurve {
        start,
        c1: Point::new(start.x + dx, start.y),
        c2: Point::new(end.x - dx, end.y),
        end,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EdgeRoute {
    pub edge_id: EdgeId,
    pub curve: CubicCurve,
}

/// Routes every edge whose endpoints both resolve; dangling edges are skipped.
pub fn route_edges(graph: &FlowGraph, metrics: &NodeMetrics, style: &RouteStyle) -> Vec<EdgeRoute> {
    graph
        .edges()
        .iter()
        .filter_map(|edge| {
            let Some((source, target)) = graph.endpoints(edge) else {
                trace!("Skipping dangling edge {}", edge.id);
                return None;
            };
            Some(EdgeRoute {
                edge_id: edge.id.clone(),
                curve: route_edge(
                    source_connector_point(source, metrics),
                    target_connector_point(target, metrics),
                    style,
                ),
            })
        })
        .collect()
}
