//! Persistence of the current flow as a single JSON file.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{FlowError, FlowResult};
use crate::graph::{FlowEdge, FlowGraph, FlowNode, Tone, WireNode, WorkflowCategory};

/// A saved flow in wire format.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredFlow {
    pub name: String,
    #[serde(default)]
    pub category: WorkflowCategory,
    #[serde(default)]
    pub tone: Tone,
    pub nodes: Vec<WireNode>,
    pub edges: Vec<FlowEdge>,
}

impl StoredFlow {
    pub fn from_graph(
        name: impl Into<String>,
        category: WorkflowCategory,
        tone: Tone,
        graph: &FlowGraph,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            tone,
            nodes: graph.nodes().iter().map(FlowNode::to_wire).collect(),
            edges: graph.edges().to_vec(),
        }
    }

    pub fn to_graph(&self) -> FlowGraph {
        let nodes = self
            .nodes
            .iter()
            .cloned()
            .map(|wire| FlowNode::from_wire(wire, self.tone))
            .collect();
        FlowGraph::from_parts(nodes, self.edges.clone())
    }
}

/// File-backed store for one flow, handed explicitly to whoever needs it.
#[derive(Clone, Debug)]
pub struct FlowStore {
    path: PathBuf,
}

impl FlowStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok(None)` if nothing has been saved yet.
    pub fn load(&self) -> FlowResult<Option<StoredFlow>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No stored flow at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        let flow = serde_json::from_str(&text)
            .map_err(|e| FlowError::Store(format!("{}: {}", self.path.display(), e)))?;
        Ok(Some(flow))
    }

    /// Writes through a temporary file so a crash never leaves a torn flow.
    pub fn save(&self, flow: &StoredFlow) -> FlowResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(flow)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        info!("Saved flow '{}' to {}", flow.name, self.path.display());
        Ok(())
    }

    pub fn clear(&self) -> FlowResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Cleared stored flow at {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
