use crate::core::chem::elements;
use crate::core::models::atom::Atom;
use crate::core::models::graph::{GraphEdge, GraphNode, StructureGraph};
use crate::graph::config::{ConfigError, GraphConfig, UnknownElementPolicy};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Unknown element symbol '{symbol}' for atom serial {serial}")]
    UnknownElement { symbol: String, serial: usize },
}

/// Builds the spatial neighbor graph for one structure.
///
/// Every atom becomes exactly one node, in parse order, regardless of
/// connectivity; isolated atoms simply have no incident edges. An edge exists
/// between two distinct atoms iff their Euclidean distance is less than or
/// equal to the cutoff. The boundary is inclusive, compared on the same `f64`
/// distance value that ends up on the edge, so the emitted edge set is exactly
/// reproducible.
///
/// The pairwise scan is O(n²). Structure files carry hundreds to a few
/// thousand atoms, where the scan is far from dominating the pipeline, and it
/// guarantees the inclusive-boundary result set without a spatial index.
///
/// # Errors
///
/// Returns [`GraphError::Config`] for an invalid cutoff, and
/// [`GraphError::UnknownElement`] for a symbol absent from the feature store
/// when the policy is [`UnknownElementPolicy::Abort`].
pub fn build(atoms: &[Atom], config: &GraphConfig) -> Result<StructureGraph, GraphError> {
    config.validate()?;

    let mut nodes = Vec::with_capacity(atoms.len());
    for (id, atom) in atoms.iter().enumerate() {
        nodes.push(featurize_atom(id, atom, config.on_unknown_element)?);
    }

    let mut edges = Vec::new();
    for i in 0..atoms.len() {
        for j in (i + 1)..atoms.len() {
            let distance = (atoms[j].position - atoms[i].position).norm();
            if distance <= config.cutoff {
                edges.push(GraphEdge {
                    source_id: i,
                    target_id: j,
                    distance,
                });
            }
        }
    }
    // The scan already yields (source, target) pairs in ascending order; the
    // sort pins the canonical edge order even if the scan strategy changes.
    edges.sort_by_key(|e| (e.source_id, e.target_id));

    Ok(StructureGraph { nodes, edges })
}

fn featurize_atom(
    id: usize,
    atom: &Atom,
    policy: UnknownElementPolicy,
) -> Result<GraphNode, GraphError> {
    let features = match elements::lookup(&atom.element) {
        Some(features) => Some(features),
        None => match policy {
            UnknownElementPolicy::Abort => {
                return Err(GraphError::UnknownElement {
                    symbol: atom.element.clone(),
                    serial: atom.serial,
                });
            }
            UnknownElementPolicy::NullFeatures => None,
        },
    };

    Ok(GraphNode {
        id,
        element: atom.element.clone(),
        x: atom.position.x,
        y: atom.position.y,
        z: atom.position.z,
        van_der_waals_radius: features.map(|f| f.vdw_radius),
        atomic_number: features.map(|f| f.atomic_number),
        valence_electrons: features.map(|f| f.valence_electrons),
        electronegativity: features.and_then(|f| f.electronegativity),
    })
}
