//! Pan/zoom mapping between screen space and graph space.

use crate::graph::{Point, Vec2};

/// Allowed zoom range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportLimits {
    pub min_zoom: f32,
    pub max_zoom: f32,
}

impl Default for ViewportLimits {
    fn default() -> Self {
        Self {
            min_zoom: 0.4,
            max_zoom: 2.0,
        }
    }
}

/// `screen = graph * zoom + pan`.
///
/// `zoom` is clamped to the limits after every modification. Panning never
/// touches `zoom` and zooming never touches `pan`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pan: Vec2,
    zoom: f32,
    limits: ViewportLimits,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(ViewportLimits::default())
    }
}

impl Viewport {
    pub fn new(limits: ViewportLimits) -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: 1.0_f32.clamp(limits.min_zoom, limits.max_zoom),
            limits,
        }
    }

    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn limits(&self) -> ViewportLimits {
        self.limits
    }

    pub fn to_graph_space(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.pan.x) / self.zoom,
            (screen.y - self.pan.y) / self.zoom,
        )
    }

    pub fn to_screen_space(&self, graph: Point) -> Point {
        Point::new(
            graph.x * self.zoom + self.pan.x,
            graph.y * self.zoom + self.pan.y,
        )
    }

    /// Screen-space panning; the delta is not scaled by zoom.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.pan += delta;
    }

    /// Wheel zoom: `zoom - delta_y * sensitivity`, clamped.
    pub fn zoom_by(&mut self, delta_y: f32, sensitivity: f32) {
        self.set_zoom(self.zoom - delta_y * sensitivity);
    }

    /// Button zoom by a fixed step (positive zooms in).
    pub fn zoom_step(&mut self, step: f32) {
        self.set_zoom(self.zoom + step);
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        if zoom.is_nan() {
            return;
        }
        self.zoom = zoom.clamp(self.limits.min_zoom, self.limits.max_zoom);
    }

    pub fn reset(&mut self) {
        self.pan = Vec2::ZERO;
        self.set_zoom(1.0);
    }
}
