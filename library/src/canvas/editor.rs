//! The editor aggregate: graph, viewport, gesture state and inspector behind
//! a single event entry point.

use log::debug;
use serde_json::Value;

use super::controller::{
    InteractionController, InteractionMode, Modifiers, PointerButton, PointerOutcome,
};
use super::layout::{HitTarget, NodeMetrics, hit_test};
use super::palette::PaletteItem;
use super::routing::{EdgeRoute, RouteStyle, route_edges};
use super::viewport::{Viewport, ViewportLimits};
use crate::graph::{FlowGraph, NodeId, Point, Tone, WorkflowCategory};
use crate::inspector::Inspector;

/// Input delivered to the canvas, positions in screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CanvasEvent {
    PointerDown { pos: Point, button: PointerButton },
    PointerMove { pos: Point },
    PointerUp,
    Wheel { delta_y: f32, modifiers: Modifiers },
    Drop { pos: Point, item: PaletteItem },
}

/// What an event changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditorChange {
    None,
    Selected(NodeId),
    NodeMoved,
    ViewChanged,
    Created(NodeId),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EditorSettings {
    pub metrics: NodeMetrics,
    pub limits: ViewportLimits,
    pub route_style: RouteStyle,
    pub zoom_sensitivity: f32,
    pub zoom_step: f32,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            metrics: NodeMetrics::default(),
            limits: ViewportLimits::default(),
            route_style: RouteStyle::default(),
            zoom_sensitivity: 0.001,
            zoom_step: 0.1,
        }
    }
}

#[derive(Clone, Debug)]
pub struct FlowEditor {
    graph: FlowGraph,
    viewport: Viewport,
    controller: InteractionController,
    inspector: Inspector,
    settings: EditorSettings,
    pub tone: Tone,
    pub category: WorkflowCategory,
}

impl Default for FlowEditor {
    fn default() -> Self {
        Self::new(FlowGraph::new(), EditorSettings::default())
    }
}

impl FlowEditor {
    pub fn new(graph: FlowGraph, settings: EditorSettings) -> Self {
        Self {
            graph,
            viewport: Viewport::new(settings.limits),
            controller: InteractionController::new(),
            inspector: Inspector::new(),
            settings,
            tone: Tone::default(),
            category: WorkflowCategory::default(),
        }
    }

    pub fn graph(&self) -> &FlowGraph {
        &self.graph
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    pub fn inspector(&self) -> &Inspector {
        &self.inspector
    }

    pub fn inspector_mut(&mut self) -> &mut Inspector {
        &mut self.inspector
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn metrics(&self) -> &NodeMetrics {
        &self.settings.metrics
    }

    /// Replaces the whole graph (template, generated or stored flow). The
    /// view and the selection start over.
    pub fn replace_graph(&mut self, graph: FlowGraph) {
        debug!("Loading graph with {} nodes, {} edges", graph.len(), graph.edges().len());
        self.graph = graph;
        self.controller.pointer_up();
        self.inspector.deselect();
        self.viewport.reset();
    }

    pub fn handle(&mut self, event: CanvasEvent) -> EditorChange {
        match event {
            CanvasEvent::PointerDown { pos, button } => {
                let hit = self.hit_test(pos);
                match self.controller.pointer_down(pos, button, hit) {
                    PointerOutcome::StartedDrag(id) => {
                        self.inspector.select(&self.graph, &id);
                        EditorChange::Selected(id)
                    }
                    PointerOutcome::StartedPan | PointerOutcome::Ignored => EditorChange::None,
                }
            }
            CanvasEvent::PointerMove { pos } => {
                if !self.controller.pointer_move(pos, &mut self.graph, &mut self.viewport) {
                    return EditorChange::None;
                }
                if let InteractionMode::DraggingNode(_) = self.controller.mode() {
                    self.inspector.refresh(&self.graph);
                    EditorChange::NodeMoved
                } else {
                    EditorChange::ViewChanged
                }
            }
            CanvasEvent::PointerUp => {
                self.controller.pointer_up();
                EditorChange::None
            }
            CanvasEvent::Wheel { delta_y, modifiers } => {
                let zoomed = self.controller.wheel(
                    delta_y,
                    modifiers,
                    &mut self.viewport,
                    self.settings.zoom_sensitivity,
                );
                if zoomed {
                    EditorChange::ViewChanged
                } else {
                    EditorChange::None
                }
            }
            CanvasEvent::Drop { pos, item } => {
                let id = self.controller.drop_item(
                    pos,
                    item,
                    &mut self.graph,
                    &self.viewport,
                    &self.settings.metrics,
                    self.tone,
                );
                EditorChange::Created(id)
            }
        }
    }

    /// Hit-test a screen-space point.
    pub fn hit_test(&self, screen: Point) -> HitTarget {
        hit_test(&self.graph, &self.settings.metrics, self.viewport.to_graph_space(screen))
    }

    pub fn zoom_in(&mut self) {
        self.viewport.zoom_step(self.settings.zoom_step);
    }

    pub fn zoom_out(&mut self) {
        self.viewport.zoom_step(-self.settings.zoom_step);
    }

    pub fn reset_view(&mut self) {
        self.viewport.reset();
    }

    pub fn select(&mut self, id: &NodeId) -> bool {
        self.inspector.select(&self.graph, id)
    }

    pub fn deselect(&mut self) {
        self.inspector.deselect();
    }

    /// Inspector edit on the selected node.
    pub fn set_attribute(&mut self, key: &str, value: Value) -> bool {
        self.inspector.set_attribute(&mut self.graph, key, value)
    }

    /// Graph-space curves for every routable edge.
    pub fn edge_routes(&self) -> Vec<EdgeRoute> {
        route_edges(&self.graph, &self.settings.metrics, &self.settings.route_style)
    }
}
