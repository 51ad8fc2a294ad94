//! # Strategies
//!
//! Decisions that don't affect correctness, but do affect the path to an optimum.
pub mod pivot_rule;
