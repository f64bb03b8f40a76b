//! egui front end for `flowdesk` flows.
//!
//! [`FlowCanvas`] draws a [`flowdesk::FlowEditor`] and turns egui input into
//! canvas events. The inspector and palette widgets return the edits the
//! user asked for; the host applies them.

pub mod drawing;
pub mod inspector_panel;
mod node_rendering;
pub mod palette;
pub mod theme;
pub mod widget;

pub use inspector_panel::{InspectorAction, show_inspector};
pub use palette::show_palette;
pub use theme::FlowEditorTheme;
pub use widget::{CanvasResponse, FlowCanvas};
