//! Graph editor document types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Position;

/// Errors raised while importing a graph document
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("graph document is missing the `{0}` array")]
    MissingField(&'static str),
}

/// A node in the editable graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Unique identifier
    pub id: String,

    /// Position on the canvas
    #[serde(flatten)]
    pub position: Position,

    /// Display label
    #[serde(default)]
    pub label: String,
}

/// An edge between two nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    /// Unique identifier
    pub id: String,

    /// Source node id
    pub from: String,

    /// Target node id
    pub to: String,

    /// Weight; absent when the graph is unweighted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    /// Whether this edge is directed
    #[serde(default)]
    pub directed: bool,
}

impl GraphEdge {
    /// True if this edge joins `a` and `b`, honoring directedness:
    /// an undirected edge matches either orientation.
    pub fn joins(&self, a: &str, b: &str) -> bool {
        if self.directed {
            self.from == a && self.to == b
        } else {
            (self.from == a && self.to == b) || (self.from == b && self.to == a)
        }
    }
}

/// Complete export/import format for the graph editor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    /// All nodes
    pub nodes: Vec<GraphNode>,

    /// All edges
    pub edges: Vec<GraphEdge>,

    /// Directed mode flag
    #[serde(default)]
    pub directed: bool,

    /// Weighted mode flag
    #[serde(default)]
    pub weighted: bool,
}

impl GraphDocument {
    /// Parse from JSON, validating that `nodes` and `edges` arrays are
    /// present before anything else replaces in-memory state.
    pub fn from_json(json: &str) -> Result<Self, ImportError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        for field in ["nodes", "edges"] {
            if !value.get(field).map(|v| v.is_array()).unwrap_or(false) {
                return Err(ImportError::MissingField(field));
            }
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
