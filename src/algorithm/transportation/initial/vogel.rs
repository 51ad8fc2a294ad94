//! # Vogel's approximation method
//!
//! For every active row and column, the penalty is the difference between its two cheapest active
//! cells: what is lost when the cheapest cell can't be used. The line with the largest penalty is
//! served first, through its cheapest cell. A line with a single active cell has that cell's cost
//! as its penalty.
//!
//! Typically gives a much better starting point than the northwest corner rule, at a higher cost
//! per step.
use crate::algorithm::transportation::basis::Axis;
use crate::algorithm::transportation::initial::{InitialBasis, Remaining};
use crate::data::linear_algebra::matrix::{Cell, Dense};
use crate::data::number_types::traits::Quantity;
use crate::data::transportation::TransportationProblem;

/// The cheapest active cell in the line with the largest penalty.
///
/// Ties between penalties are broken in favor of rows, then the lowest index. Ties between cells in
/// a line are broken by taking the lowest index.
pub struct Vogel;

impl<F: Quantity> InitialBasis<F> for Vogel {
    fn new(_problem: &TransportationProblem<F>) -> Self {
        Self
    }

    fn select_cell(&mut self, remaining: &Remaining<F>, cost: &Dense<F>) -> Option<Cell> {
        let mut largest: Option<(F, Cell)> = None;
        for axis in [Axis::Row, Axis::Column] {
            for line in remaining.active(axis) {
                let costs = remaining.active(axis.other())
                    .map(|position| (axis.cell(line, position), cost[axis.cell(line, position)]));
                if let Some((penalty, cheapest)) = penalty(costs) {
                    if largest.map_or(true, |(existing, _)| penalty > existing) {
                        largest = Some((penalty, cheapest));
                    }
                }
            }
        }

        largest.map(|(_, cell)| cell)
    }
}

/// Penalty of a line and its cheapest cell.
///
/// # Arguments
///
/// * `costs`: Active cells of a line with their costs.
///
/// # Return value
///
/// `None` if there are no cells.
fn penalty<F: Quantity>(costs: impl Iterator<Item=(Cell, F)>) -> Option<(F, Cell)> {
    let mut cheapest: Option<(Cell, F)> = None;
    let mut second = None;
    for (cell, value) in costs {
        match cheapest {
            Some((_, lowest)) if value >= lowest => {
                if second.map_or(true, |existing| value < existing) {
                    second = Some(value);
                }
            },
            Some((_, lowest)) => {
                second = Some(lowest);
                cheapest = Some((cell, value));
            },
            None => cheapest = Some((cell, value)),
        }
    }

    cheapest.map(|(cell, lowest)| (second.map_or(lowest, |second| second - lowest), cell))
}
