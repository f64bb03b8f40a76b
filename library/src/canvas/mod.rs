//! Canvas interaction: viewport, hit-testing, gestures, edge routing.

pub mod controller;
pub mod editor;
pub mod layout;
pub mod palette;
pub mod routing;
pub mod viewport;

pub use controller::{
    InteractionController, InteractionMode, Modifiers, PointerButton, PointerOutcome,
};
pub use editor::{CanvasEvent, EditorChange, EditorSettings, FlowEditor};
pub use layout::{HitTarget, NodeMetrics, PortSide, hit_test};
pub use palette::PaletteItem;
pub use routing::{CubicCurve, EdgeRoute, RouteStyle, route_edge, route_edges};
pub use viewport::{Viewport, ViewportLimits};
