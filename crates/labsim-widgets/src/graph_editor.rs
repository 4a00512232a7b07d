//! Graph editor: canvas interaction state over a [`GraphModel`].

use rand::Rng;

use labsim_core::structures::{GraphModel, Neighbor};
use labsim_types::{GraphDocument, Position};

use crate::input::{non_blank, InputError};

/// Active canvas tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GraphTool {
    /// Click empty space to add a node, click nodes to select and connect,
    /// drag to move
    #[default]
    Build,

    /// Click removes the node (and its edges) under the cursor
    Erase,
}

/// Interaction state for the graph editor canvas. Clicks, drags and edit
/// commits arrive as events from the host; adjacency views are recomputed
/// from the model on demand, so they can never go stale.
#[derive(Debug, Clone, Default)]
pub struct GraphEditor {
    model: GraphModel,
    tool: GraphTool,

    /// Node awaiting its edge partner, if any
    selected: Option<String>,

    /// Node being dragged, if any
    dragging: Option<String>,

    /// Edge whose weight is being edited, if any
    weight_edit: Option<String>,

    message: Option<String>,
}

impl GraphEditor {
    pub fn new() -> Self {
        Self {
            model: GraphModel::with_seed_nodes(4),
            ..Self::default()
        }
    }

    pub fn model(&self) -> &GraphModel {
        &self.model
    }

    pub fn tool(&self) -> GraphTool {
        self.tool
    }

    pub fn set_tool(&mut self, tool: GraphTool) {
        self.tool = tool;
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn set_directed(&mut self, directed: bool) {
        self.model.set_directed(directed);
    }

    pub fn set_weighted(&mut self, weighted: bool) {
        self.model.set_weighted(weighted);
    }

    /// Handle a canvas click.
    ///
    /// Build tool: empty space adds a node; the first node click selects
    /// it, a second click on another node toggles the edge between them,
    /// and clicking the selected node again deselects. Erase tool: removes
    /// the node under the cursor.
    pub fn click_at(&mut self, position: Position) {
        match self.tool {
            GraphTool::Build => self.build_click(position),
            GraphTool::Erase => {
                if let Some(id) = self.model.node_at(position).map(|n| n.id.clone()) {
                    self.model.remove_node(&id);
                    if self.selected.as_deref() == Some(id.as_str()) {
                        self.selected = None;
                    }
                }
            }
        }
    }

    fn build_click(&mut self, position: Position) {
        let hit = self.model.node_at(position).map(|n| n.id.clone());
        match (hit, self.selected.take()) {
            (None, _) => {
                self.model.add_node(position);
            }
            (Some(id), None) => {
                self.selected = Some(id);
            }
            (Some(id), Some(selected)) if id == selected => {
                // same node again: deselect, nothing else
            }
            (Some(id), Some(selected)) => {
                if let Err(err) = self.model.toggle_edge(&selected, &id) {
                    self.message = Some(err.to_string());
                }
            }
        }
    }

    /// Begin dragging the node under the cursor. Returns whether a drag
    /// started.
    pub fn begin_drag(&mut self, position: Position) -> bool {
        self.dragging = self.model.node_at(position).map(|n| n.id.clone());
        self.dragging.is_some()
    }

    pub fn drag_to(&mut self, position: Position) {
        if let Some(id) = self.dragging.clone() {
            self.model.move_node(&id, position);
        }
    }

    pub fn end_drag(&mut self) {
        self.dragging = None;
    }

    /// Enter weight editing for an edge. Returns the current weight text to
    /// prefill the input with, or `None` if the edge does not exist.
    pub fn begin_weight_edit(&mut self, edge_id: &str) -> Option<String> {
        let edge = self.model.edge(edge_id)?;
        let prefill = edge.weight.unwrap_or(1.0).to_string();
        self.weight_edit = Some(edge_id.to_string());
        Some(prefill)
    }

    pub fn editing_weight(&self) -> Option<&str> {
        self.weight_edit.as_deref()
    }

    /// Commit the typed weight. Invalid text or a non-finite value sets a
    /// message and stays in edit mode so the player can correct it.
    pub fn commit_weight_edit(&mut self, text: &str) {
        let Some(edge_id) = self.weight_edit.clone() else {
            return;
        };
        let parsed = non_blank(text).and_then(|t| {
            t.parse::<f64>()
                .map_err(|_| InputError::NotNumeric(t.to_string()))
        });
        match parsed {
            Ok(weight) => match self.model.set_edge_weight(&edge_id, weight) {
                Ok(()) => {
                    self.weight_edit = None;
                    self.message = None;
                }
                Err(err) => self.message = Some(err.to_string()),
            },
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    pub fn cancel_weight_edit(&mut self) {
        self.weight_edit = None;
    }

    /// Adjacency list snapshot for the side panel
    pub fn adjacency(&self) -> Vec<(String, Vec<Neighbor>)> {
        self.model.adjacency()
    }

    /// Adjacency matrix snapshot, with row/column node ids
    pub fn adjacency_matrix(&self) -> (Vec<Vec<f64>>, Vec<String>) {
        self.model.adjacency_matrix()
    }

    /// Serialize the current graph for download
    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        self.model.export_document().to_json()
    }

    /// Import a pasted/uploaded document. A malformed document sets a
    /// message and leaves the current graph untouched.
    pub fn import_json(&mut self, json: &str) {
        match GraphDocument::from_json(json) {
            Ok(doc) => {
                self.model.import_document(doc);
                self.selected = None;
                self.weight_edit = None;
                self.message = None;
            }
            Err(err) => self.message = Some(format!("import failed: {err}")),
        }
    }

    /// Replace the graph with a random one
    pub fn randomize<R: Rng>(&mut self, rng: &mut R, nodes: usize, edge_probability: f64) {
        self.model.randomize(rng, nodes, edge_probability);
        self.selected = None;
        self.weight_edit = None;
    }

    pub fn clear(&mut self) {
        self.model.clear();
        self.selected = None;
        self.weight_edit = None;
        self.message = None;
    }
}
