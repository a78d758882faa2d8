use serde::Serialize;

/// A featurized graph node derived from exactly one source atom.
///
/// Node ids are the 0-based parse index of the source atom, so the node list
/// of a [`StructureGraph`] is always in atom parse order. The four chemical
/// feature fields are resolved through the periodic table feature store; they
/// are `None` (serialized as JSON `null`) only when the builder runs under the
/// null-features policy for an unknown element, or for elements without a
/// defined electronegativity.
///
/// Field declaration order is the serialization order and must not change:
/// the output format promises byte-identical artifacts for identical graphs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    pub id: usize,
    pub element: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub van_der_waals_radius: Option<f64>,
    pub atomic_number: Option<u8>,
    pub valence_electrons: Option<u8>,
    pub electronegativity: Option<f64>,
}

/// An undirected edge between two nodes within the distance cutoff.
///
/// Invariant: `source_id < target_id`, so each unordered pair appears exactly
/// once and in a canonical orientation. `distance` is the Euclidean distance
/// between the two source atoms in Angstroms.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphEdge {
    pub source_id: usize,
    pub target_id: usize,
    pub distance: f64,
}

/// The in-memory graph for one structure file.
///
/// Owns its node and edge lists; exists only transiently between building and
/// serialization. Nodes are in atom parse order; edges ascend by
/// `(source_id, target_id)`.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct StructureGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl StructureGraph {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the number of edges incident to the node with the given id.
    pub fn degree(&self, id: usize) -> usize {
        self.edges
            .iter()
            .filter(|e| e.source_id == id || e.target_id == id)
            .count()
    }
}
