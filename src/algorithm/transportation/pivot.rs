//! # Pivoting
//!
//! Move to an adjacent basic solution by shifting flow around a stepping stone loop.
use crate::algorithm::transportation::stepping_stone::SteppingStoneLoop;
use crate::data::linear_algebra::matrix::{Cell, Dense};
use crate::data::number_types::tolerance::Tolerance;
use crate::data::number_types::traits::Quantity;

/// Summary of a basis change.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pivot<F> {
    /// Cell that entered the basis.
    pub entering: Cell,
    /// Cell that left the basis; its allocation is now exactly zero.
    pub leaving: Cell,
    /// Amount shifted around the loop.
    pub theta: F,
}

/// Shift the largest feasible amount around a loop.
///
/// `theta` is the smallest allocation among the decreasing corners. It is added to the increasing
/// corners and subtracted from the decreasing ones, so row and column sums don't change. The first
/// decreasing corner (in loop order) attaining the minimum leaves the basis.
///
/// Results that are indistinguishable from zero are set to exactly zero, such that no tiny
/// residues remain in the allocation.
///
/// # Arguments
///
/// * `allocation`: Current basic solution, updated in place.
/// * `stepping_stone`: Loop starting at the entering cell.
/// * `tolerance`: Decides which values are cleaned up to zero.
///
/// # Return value
///
/// The entering and leaving cells, and the amount that was shifted.
pub fn pivot<F: Quantity>(
    allocation: &mut Dense<F>,
    stepping_stone: &SteppingStoneLoop,
    tolerance: &Tolerance<F>,
) -> Pivot<F> {
    debug_assert!(stepping_stone.len() >= 4 && stepping_stone.len() % 2 == 0);

    let cells = stepping_stone.cells();
    let mut leaving = cells[1];
    let mut theta = allocation[leaving];
    for cell in stepping_stone.decreasing().skip(1) {
        if allocation[cell] < theta {
            leaving = cell;
            theta = allocation[cell];
        }
    }

    for cell in stepping_stone.increasing() {
        allocation[cell] = tolerance.clean(allocation[cell] + theta);
    }
    for cell in stepping_stone.decreasing() {
        allocation[cell] = tolerance.clean(allocation[cell] - theta).max(F::zero());
    }
    allocation[leaving] = F::zero();

    Pivot { entering: stepping_stone.entering(), leaving, theta }
}
