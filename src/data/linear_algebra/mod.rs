//! # Linear algebra primitives
//!
//! Cost and allocation tables are small and dense; they are stored as dense matrices.
pub mod matrix;
