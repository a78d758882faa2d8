//! Chemical reference data shared read-only across the whole process.
//!
//! The single public surface is the periodic table feature store in
//! [`elements`]: a compile-time map from canonical element symbol to the
//! per-element feature values attached to graph nodes. There is no runtime
//! initialization and no mutation, so any number of worker threads may read
//! it concurrently.

pub mod elements;
