use crate::core::models::graph::StructureGraph;

/// Serializes a graph into its canonical artifact byte sequence.
///
/// The format is compact JSON with two top-level keys, `nodes` and `edges`.
/// Output is deterministic: node order is atom parse order, edge order is
/// ascending `(source_id, target_id)`, object keys follow struct declaration
/// order, and floating-point values use serde_json's shortest round-trip
/// representation. Serializing the same graph twice therefore yields
/// byte-identical output, and a parser reading the artifact recovers the
/// exact `f64` values.
///
/// Writing the bytes anywhere is the pipeline driver's job; this function has
/// no side effects.
///
/// # Errors
///
/// Returns a [`serde_json::Error`] if serialization fails, which for this
/// data model only happens on downstream I/O through `serde_json` internals.
pub fn to_json_bytes(graph: &StructureGraph) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(graph)
}
