pub mod assistant;
pub mod canvas;
pub mod error;
pub mod graph;
pub mod inspector;
pub mod store;

pub use canvas::{CanvasEvent, EditorChange, EditorSettings, FlowEditor, PaletteItem};
pub use error::{FlowError, FlowResult};
pub use graph::{FlowEdge, FlowGraph, FlowNode, NodeId, NodeKind};
pub use inspector::{Inspector, RequestTicket};
pub use store::{FlowStore, StoredFlow};
