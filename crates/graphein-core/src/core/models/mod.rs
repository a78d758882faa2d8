//! Data structures representing parsed structures and their derived graphs.
//!
//! The models are deliberately small: an [`atom::Atom`] is an immutable record
//! produced by the structure parser, and the [`graph`] types are the featurized
//! node/edge records that the neighbor graph builder derives from a slice of
//! atoms. Both exist only for the duration of one file's processing.

pub mod atom;
pub mod graph;
