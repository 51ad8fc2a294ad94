//! # Number types
//!
//! The transportation simplex computes with floating point numbers. The algorithms are written
//! against the `Quantity` trait, such that `f32` and `f64` can both be used without adaptation.
//!
//! A downside of floats is that rounding errors accumulate: values that should be exactly zero end
//! up as tiny residues. The thresholds in `tolerance` decide when such a residue is treated as zero.
pub mod tolerance;
pub mod traits;
