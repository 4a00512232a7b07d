//! Editable graph model with live adjacency views.

use rand::Rng;
use thiserror::Error;

use labsim_types::{GraphDocument, GraphEdge, GraphNode, Position};

/// Node hit-test radius in canvas units
const NODE_HIT_RADIUS: f32 = 22.0;

/// Canvas extent used when scattering random graphs
const CANVAS_W: f32 = 780.0;
const CANVAS_H: f32 = 300.0;

/// Errors from graph editing operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("edge weight must be a finite number, got {0}")]
    InvalidWeight(f64),

    #[error("no node with id `{0}`")]
    NodeNotFound(String),

    #[error("no edge with id `{0}`")]
    EdgeNotFound(String),
}

/// One entry of a node's adjacency list
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
    /// Neighboring node id
    pub to: String,

    /// Edge weight, when the graph is weighted
    pub weight: Option<f64>,
}

/// The graph being edited: nodes, edges, and the current mode flags.
/// Edge endpoints always reference existing nodes; removing a node
/// cascades to its incident edges.
#[derive(Debug, Clone, Default)]
pub struct GraphModel {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    directed: bool,
    weighted: bool,
    id_counter: u64,
}

impl GraphModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `n` nodes on a grid, like a freshly opened editor
    pub fn with_seed_nodes(n: usize) -> Self {
        let mut model = Self::new();
        for i in 0..n {
            let position = Position::new(
                60.0 + (i % 8) as f32 * 90.0,
                40.0 + (i / 8) as f32 * 80.0,
            );
            model.add_node(position);
        }
        model
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    pub fn directed(&self) -> bool {
        self.directed
    }

    pub fn weighted(&self) -> bool {
        self.weighted
    }

    /// Mode flags apply to edges created from now on; existing edges keep
    /// the directedness they were created with.
    pub fn set_directed(&mut self, directed: bool) {
        self.directed = directed;
    }

    pub fn set_weighted(&mut self, weighted: bool) {
        self.weighted = weighted;
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(&self, id: &str) -> Option<&GraphEdge> {
        self.edges.iter().find(|e| e.id == id)
    }

    fn next_id(&mut self, prefix: &str) -> String {
        self.id_counter += 1;
        format!("{prefix}-{}", self.id_counter)
    }

    /// Add a node at a position; the label is its running ordinal
    pub fn add_node(&mut self, position: Position) -> String {
        let id = self.next_id("n");
        let label = (self.nodes.len() + 1).to_string();
        self.nodes.push(GraphNode {
            id: id.clone(),
            position,
            label,
        });
        id
    }

    /// Remove a node and every edge touching it
    pub fn remove_node(&mut self, id: &str) -> bool {
        let before = self.nodes.len();
        self.nodes.retain(|n| n.id != id);
        if self.nodes.len() == before {
            return false;
        }
        self.edges.retain(|e| e.from != id && e.to != id);
        true
    }

    /// Move a node to a new position (dragging)
    pub fn move_node(&mut self, id: &str, position: Position) -> bool {
        match self.nodes.iter_mut().find(|n| n.id == id) {
            Some(node) => {
                node.position = position;
                true
            }
            None => false,
        }
    }

    /// Find the node under a point, if any
    pub fn node_at(&self, point: Position) -> Option<&GraphNode> {
        self.nodes
            .iter()
            .find(|n| n.position.distance_sq(&point) <= NODE_HIT_RADIUS * NODE_HIT_RADIUS)
    }

    /// Create or remove an edge between `a` and `b` under the current mode.
    /// If a matching edge already exists it is removed (undirected mode
    /// matches either orientation, so at most one logical undirected edge
    /// per pair); otherwise a new edge is created, with default weight 1
    /// when the graph is weighted. Returns the new edge id on creation.
    pub fn toggle_edge(&mut self, a: &str, b: &str) -> Result<Option<String>, GraphError> {
        if self.node(a).is_none() {
            return Err(GraphError::NodeNotFound(a.to_string()));
        }
        if self.node(b).is_none() {
            return Err(GraphError::NodeNotFound(b.to_string()));
        }

        let directed = self.directed;
        let existing = self.edges.iter().find(|e| {
            (e.from == a && e.to == b && e.directed == directed)
                || (!directed && e.joins(a, b))
        });

        if let Some(edge) = existing {
            let id = edge.id.clone();
            self.edges.retain(|e| e.id != id);
            return Ok(None);
        }

        let id = self.next_id("e");
        self.edges.push(GraphEdge {
            id: id.clone(),
            from: a.to_string(),
            to: b.to_string(),
            weight: self.weighted.then_some(1.0),
            directed,
        });
        Ok(Some(id))
    }

    pub fn remove_edge(&mut self, id: &str) -> bool {
        let before = self.edges.len();
        self.edges.retain(|e| e.id != id);
        self.edges.len() != before
    }

    /// Set an edge's weight; rejects non-finite values, leaving the edge
    /// unchanged
    pub fn set_edge_weight(&mut self, id: &str, weight: f64) -> Result<(), GraphError> {
        if !weight.is_finite() {
            return Err(GraphError::InvalidWeight(weight));
        }
        match self.edges.iter_mut().find(|e| e.id == id) {
            Some(edge) => {
                edge.weight = Some(weight);
                Ok(())
            }
            None => Err(GraphError::EdgeNotFound(id.to_string())),
        }
    }

    /// Per-node one-hop neighbor lists in node insertion order. Undirected
    /// edges appear in both endpoints' lists.
    pub fn adjacency(&self) -> Vec<(String, Vec<Neighbor>)> {
        let mut lists: Vec<(String, Vec<Neighbor>)> = self
            .nodes
            .iter()
            .map(|n| (n.id.clone(), Vec::new()))
            .collect();

        for edge in &self.edges {
            if let Some((_, list)) = lists.iter_mut().find(|(id, _)| *id == edge.from) {
                list.push(Neighbor {
                    to: edge.to.clone(),
                    weight: edge.weight,
                });
            }
            if !edge.directed {
                if let Some((_, list)) = lists.iter_mut().find(|(id, _)| *id == edge.to) {
                    list.push(Neighbor {
                        to: edge.from.clone(),
                        weight: edge.weight,
                    });
                }
            }
        }
        lists
    }

    /// N×N matrix in current node order: weight (1.0 when unweighted) where
    /// an edge exists, 0.0 elsewhere; symmetric entries for undirected
    /// edges. Also returns the row/column node ids.
    pub fn adjacency_matrix(&self) -> (Vec<Vec<f64>>, Vec<String>) {
        let ids: Vec<String> = self.nodes.iter().map(|n| n.id.clone()).collect();
        let index = |id: &str| ids.iter().position(|x| x == id);

        let n = ids.len();
        let mut matrix = vec![vec![0.0; n]; n];
        for edge in &self.edges {
            if let (Some(i), Some(j)) = (index(&edge.from), index(&edge.to)) {
                let w = edge.weight.unwrap_or(1.0);
                matrix[i][j] = w;
                if !edge.directed {
                    matrix[j][i] = w;
                }
            }
        }
        (matrix, ids)
    }

    /// Replace the contents with a random graph: `n` scattered nodes, each
    /// candidate pair connected with probability `p`.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R, n: usize, p: f64) {
        self.nodes.clear();
        self.edges.clear();

        let ids: Vec<String> = (0..n)
            .map(|_| {
                let position = Position::new(
                    40.0 + rng.gen::<f32>() * (CANVAS_W - 80.0),
                    30.0 + rng.gen::<f32>() * (CANVAS_H - 60.0),
                );
                self.add_node(position)
            })
            .collect();

        for i in 0..n {
            let j_start = if self.directed { 0 } else { i + 1 };
            for j in j_start..n {
                if i == j {
                    continue;
                }
                if rng.gen::<f64>() < p {
                    let id = self.next_id("e");
                    self.edges.push(GraphEdge {
                        id,
                        from: ids[i].clone(),
                        to: ids[j].clone(),
                        weight: self
                            .weighted
                            .then(|| (rng.gen::<f64>() * 10.0).ceil().max(1.0)),
                        directed: self.directed,
                    });
                }
            }
        }
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }

    /// Snapshot for export
    pub fn export_document(&self) -> GraphDocument {
        GraphDocument {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
            directed: self.directed,
            weighted: self.weighted,
        }
    }

    /// Replace the in-memory state with an imported document. The id
    /// counter is advanced past any imported `<prefix>-<n>` ids so newly
    /// created items cannot collide with imported ones.
    pub fn import_document(&mut self, doc: GraphDocument) {
        self.nodes = doc.nodes;
        self.edges = doc.edges;
        self.directed = doc.directed;
        self.weighted = doc.weighted;

        let max_suffix = self
            .nodes
            .iter()
            .map(|n| n.id.as_str())
            .chain(self.edges.iter().map(|e| e.id.as_str()))
            .filter_map(|id| id.rsplit('-').next()?.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        self.id_counter = self.id_counter.max(max_suffix);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    fn two_nodes() -> (GraphModel, String, String) {
        let mut model = GraphModel::new();
        let a = model.add_node(Position::new(0.0, 0.0));
        let b = model.add_node(Position::new(100.0, 0.0));
        (model, a, b)
    }

    #[test]
    fn test_toggle_edge_twice_returns_to_empty() {
        let (mut model, a, b) = two_nodes();
        assert!(model.toggle_edge(&a, &b).unwrap().is_some());
        assert_eq!(model.edges().len(), 1);

        // undirected equivalence: toggling from the other endpoint removes it
        assert!(model.toggle_edge(&b, &a).unwrap().is_none());
        assert!(model.edges().is_empty());
    }

    #[test]
    fn test_directed_mode_allows_both_orientations() {
        let (mut model, a, b) = two_nodes();
        model.set_directed(true);
        model.toggle_edge(&a, &b).unwrap();
        model.toggle_edge(&b, &a).unwrap();
        assert_eq!(model.edges().len(), 2);

        // toggling again removes only the matching orientation
        model.toggle_edge(&a, &b).unwrap();
        assert_eq!(model.edges().len(), 1);
        assert_eq!(model.edges()[0].from, b);
    }

    #[test]
    fn test_remove_node_cascades() {
        let (mut model, a, b) = two_nodes();
        model.toggle_edge(&a, &b).unwrap();
        assert!(model.remove_node(&a));
        assert!(model.edges().is_empty());
        assert_eq!(model.nodes().len(), 1);
        assert_eq!(model.nodes()[0].id, b);
    }

    #[test]
    fn test_toggle_edge_unknown_node() {
        let (mut model, a, _) = two_nodes();
        let err = model.toggle_edge(&a, "n-999").unwrap_err();
        assert_eq!(err, GraphError::NodeNotFound("n-999".into()));
    }

    #[test]
    fn test_set_edge_weight_validation() {
        let (mut model, a, b) = two_nodes();
        model.set_weighted(true);
        let edge_id = model.toggle_edge(&a, &b).unwrap().unwrap();
        assert_eq!(model.edge(&edge_id).unwrap().weight, Some(1.0));

        model.set_edge_weight(&edge_id, 4.5).unwrap();
        assert_eq!(model.edge(&edge_id).unwrap().weight, Some(4.5));

        let err = model.set_edge_weight(&edge_id, f64::NAN).unwrap_err();
        assert!(matches!(err, GraphError::InvalidWeight(_)));
        // prior weight retained
        assert_eq!(model.edge(&edge_id).unwrap().weight, Some(4.5));

        assert!(matches!(
            model.set_edge_weight("e-999", 1.0),
            Err(GraphError::EdgeNotFound(_))
        ));
    }

    #[test]
    fn test_adjacency_undirected_populates_both_sides() {
        let (mut model, a, b) = two_nodes();
        model.toggle_edge(&a, &b).unwrap();

        let adjacency = model.adjacency();
        assert_eq!(adjacency[0].1, vec![Neighbor { to: b.clone(), weight: None }]);
        assert_eq!(adjacency[1].1, vec![Neighbor { to: a.clone(), weight: None }]);
    }

    #[test]
    fn test_adjacency_matrix_symmetric_for_undirected() {
        let (mut model, a, b) = two_nodes();
        model.set_weighted(true);
        let edge_id = model.toggle_edge(&a, &b).unwrap().unwrap();
        model.set_edge_weight(&edge_id, 3.0).unwrap();

        let (matrix, ids) = model.adjacency_matrix();
        assert_eq!(ids, vec![a, b]);
        assert_eq!(matrix[0][1], 3.0);
        assert_eq!(matrix[1][0], 3.0);
        assert_eq!(matrix[0][0], 0.0);
    }

    #[test]
    fn test_adjacency_matrix_directed_one_sided() {
        let (mut model, a, b) = two_nodes();
        model.set_directed(true);
        model.toggle_edge(&a, &b).unwrap();

        let (matrix, _) = model.adjacency_matrix();
        assert_eq!(matrix[0][1], 1.0);
        assert_eq!(matrix[1][0], 0.0);
    }

    #[test]
    fn test_node_at_hit_radius() {
        let (model, a, _) = two_nodes();
        assert_eq!(model.node_at(Position::new(10.0, 10.0)).unwrap().id, a);
        assert!(model.node_at(Position::new(50.0, 50.0)).is_none());
    }

    #[test]
    fn test_import_resyncs_id_counter() {
        let (mut source, a, b) = two_nodes();
        source.toggle_edge(&a, &b).unwrap();
        let doc = source.export_document();

        let mut model = GraphModel::new();
        model.import_document(doc);
        let fresh = model.add_node(Position::zero());
        assert!(model.nodes().iter().filter(|n| n.id == fresh).count() == 1);
        assert_ne!(fresh, a);
        assert_ne!(fresh, b);
    }

    #[test]
    fn test_randomize_replaces_contents() {
        let mut model = GraphModel::with_seed_nodes(3);
        let mut rng = StepRng::new(0, 1 << 31);
        model.randomize(&mut rng, 6, 1.0);
        assert_eq!(model.nodes().len(), 6);
        // p = 1.0 on an undirected graph: every unordered pair connected
        assert_eq!(model.edges().len(), 15);
    }
}
