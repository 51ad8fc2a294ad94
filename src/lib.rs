//! # A transportation problem solver
//!
//! Balanced transportation problems are solved using the transportation simplex: an initial basic
//! feasible solution (northwest corner, least cost or Vogel's approximation) is improved with the
//! modified distribution (MODI) method and stepping stone loops until it is optimal.
#![warn(missing_docs)]

#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod algorithm;
pub mod data;
pub mod io;

#[cfg(test)]
mod tests;
