//! # Graphein Core Library
//!
//! A library for converting molecular structure files into featurized distance
//! graphs suitable for downstream machine-learning and analysis pipelines.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (`Atom`, graph
//!   records), the compile-time periodic table feature store (`chem`), and
//!   structure file I/O (`io`).
//!
//! - **[`graph`]: The Logic Core.** Builds the spatial neighbor graph from a parsed
//!   atom list under a distance cutoff, resolves per-node chemical features, and
//!   serializes the result deterministically.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level, user-facing layer.
//!   It ties the `graph` and `core` layers together into the per-file conversion
//!   pipeline and the failure-isolating parallel batch driver.

pub mod core;
pub mod graph;
pub mod workflows;
