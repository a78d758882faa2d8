//! Provides input functionality for molecular structure file formats.
//!
//! This module contains the trait-based interface for reading atomic records
//! from structure files and the fixed-width PDB parser implementing it.
//! Parsing is strictly line-oriented, never mutates shared state, and each
//! call is independent, so different files may be parsed concurrently.

pub mod pdb;
pub mod traits;
