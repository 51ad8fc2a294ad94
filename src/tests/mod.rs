//! # Problems shared between the tests of several modules.
//!
//! Convention for function names:
//!
//! * `fn problem()`
//! * `fn northwest_corner_allocation()`
//! * `fn optimal_allocation()`
//! * `const OPTIMAL_COST`
//! * `fn problems()`, for a family of related problems
pub mod problem_3;
