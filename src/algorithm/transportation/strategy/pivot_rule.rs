//! # Pivot rules
//!
//! Strategies for choosing the cell that enters the basis.
use crate::data::linear_algebra::matrix::{Cell, Dense};
use crate::data::number_types::tolerance::Tolerance;
use crate::data::number_types::traits::Quantity;

/// Deciding how to pivot.
///
/// During the transportation simplex, one needs to decide which non-basic cell to bring into the
/// basis. Once that cell is chosen, the stepping stone loop and the leaving cell follow from it.
pub trait PivotRule<F> {
    /// Create a new instance.
    fn new() -> Self;

    /// Select a cell with a negative reduced cost.
    ///
    /// # Arguments
    ///
    /// * `reduced_costs`: Reduced cost of every cell; positive infinity for cells that may not
    /// enter.
    /// * `tolerance`: Reduced costs down to `-tolerance.zero` are not considered negative.
    ///
    /// # Return value
    ///
    /// The selected cell and its reduced cost, or `None` if no cell improves the solution (it is
    /// optimal).
    fn select_entering(
        &mut self,
        reduced_costs: &Dense<F>,
        tolerance: &Tolerance<F>,
    ) -> Option<(Cell, F)>;
}

/// Pivot on the cell with the most negative reduced cost.
///
/// Ties are broken by taking the first such cell in row-major order.
pub struct MostNegative;
impl<F: Quantity> PivotRule<F> for MostNegative {
    fn new() -> Self {
        Self
    }

    fn select_entering(
        &mut self,
        reduced_costs: &Dense<F>,
        tolerance: &Tolerance<F>,
    ) -> Option<(Cell, F)> {
        let mut smallest: Option<(Cell, F)> = None;
        for (cell, &cost) in reduced_costs.iter_indexed().filter(|&(_, &cost)| tolerance.is_negative(cost)) {
            match smallest.as_mut() {
                Some((existing_cell, existing_cost)) => if cost < *existing_cost {
                    *existing_cell = cell;
                    *existing_cost = cost;
                },
                None => smallest = Some((cell, cost)),
            }
        }

        smallest
    }
}

/// Pivot on the first cell in row-major order that has a negative reduced cost.
///
/// Together with letting the first blocking cell on the loop leave, this resembles Bland's rule and
/// is less prone to cycling on degenerate problems than `MostNegative`, at the expense of
/// typically needing more pivots.
pub struct FirstNegative;
impl<F: Quantity> PivotRule<F> for FirstNegative {
    fn new() -> Self {
        Self
    }

    fn select_entering(
        &mut self,
        reduced_costs: &Dense<F>,
        tolerance: &Tolerance<F>,
    ) -> Option<(Cell, F)> {
        reduced_costs.iter_indexed()
            .map(|(cell, &cost)| (cell, cost))
            .find(|&(_, cost)| tolerance.is_negative(cost))
    }
}
