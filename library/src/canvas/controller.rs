//! Pointer state machine: idle, canvas panning, node dragging.

use log::{debug, trace};

use super::layout::{HitTarget, NodeMetrics};
use super::palette::PaletteItem;
use super::viewport::Viewport;
use crate::graph::{FlowGraph, NodeId, Point, Tone};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
}

/// Modifier keys held during a wheel event. `command` is the platform
/// command key (Cmd on macOS).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub command: bool,
}

impl Modifiers {
    pub fn zoom_gesture(self) -> bool {
        self.ctrl || self.command
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum InteractionMode {
    #[default]
    Idle,
    PanningCanvas,
    DraggingNode(NodeId),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PointerOutcome {
    Ignored,
    StartedPan,
    StartedDrag(NodeId),
}

/// Owns the current gesture and its screen-space anchor.
///
/// Wheel input never starts or ends a gesture; pointer input never zooms.
#[derive(Clone, Debug, Default)]
pub struct InteractionController {
    mode: InteractionMode,
    anchor: Point,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &InteractionMode {
        &self.mode
    }

    pub fn is_idle(&self) -> bool {
        self.mode == InteractionMode::Idle
    }

    /// `hit` is what lies under `screen`. A press while a gesture is already
    /// running is ignored.
    pub fn pointer_down(
        &mut self,
        screen: Point,
        button: PointerButton,
        hit: HitTarget,
    ) -> PointerOutcome {
        if !self.is_idle() {
            return PointerOutcome::Ignored;
        }
        match (hit, button) {
            (HitTarget::NodeBody(id), PointerButton::Primary) => {
                trace!("Drag start on {} at {:?}", id, screen);
                self.anchor = screen;
                self.mode = InteractionMode::DraggingNode(id.clone());
                PointerOutcome::StartedDrag(id)
            }
            (HitTarget::Canvas, PointerButton::Primary | PointerButton::Middle) => {
                self.anchor = screen;
                self.mode = InteractionMode::PanningCanvas;
                PointerOutcome::StartedPan
            }
            _ => PointerOutcome::Ignored,
        }
    }

    /// Applies the movement since the last anchor. Returns true if the graph
    /// or viewport changed.
    pub fn pointer_move(
        &mut self,
        screen: Point,
        graph: &mut FlowGraph,
        viewport: &mut Viewport,
    ) -> bool {
        let delta = screen - self.anchor;
        self.anchor = screen;
        if delta.is_zero() {
            return false;
        }
        match &self.mode {
            InteractionMode::Idle => false,
            InteractionMode::PanningCanvas => {
                viewport.pan_by(delta);
                true
            }
            InteractionMode::DraggingNode(id) => {
                let moved = graph.translate_node(id, delta / viewport.zoom());
                if !moved {
                    debug!("Dragged node {} no longer exists", id);
                }
                moved
            }
        }
    }

    /// Ends any gesture. Nothing is rolled back.
    pub fn pointer_up(&mut self) {
        if !self.is_idle() {
            trace!("Gesture {:?} ended", self.mode);
        }
        self.mode = InteractionMode::Idle;
    }

    /// Zooms only while a zoom modifier is held. Returns true if it zoomed.
    pub fn wheel(
        &self,
        delta_y: f32,
        modifiers: Modifiers,
        viewport: &mut Viewport,
        sensitivity: f32,
    ) -> bool {
        if !modifiers.zoom_gesture() {
            return false;
        }
        viewport.zoom_by(delta_y, sensitivity);
        true
    }

    /// Creates a node for `item` centred on the drop point.
    pub fn drop_item(
        &self,
        screen: Point,
        item: PaletteItem,
        graph: &mut FlowGraph,
        viewport: &Viewport,
        metrics: &NodeMetrics,
        tone: Tone,
    ) -> NodeId {
        let position = viewport.to_graph_space(screen) - metrics.half_size();
        let (label, config) = item.node_template(tone);
        graph.add_node(label, position, config).id().clone()
    }
}
