//! # Algorithms
use crate::algorithm::error::SolveError;
use crate::algorithm::transportation::Config;
use crate::algorithm::transportation::initial::InitialBasis;
use crate::algorithm::transportation::strategy::pivot_rule::PivotRule;
use crate::data::number_types::traits::Quantity;
use crate::data::transportation::solution::Solution;

pub mod error;
pub mod transportation;

/// A problem formulation that can be solved to optimality with the transportation simplex.
///
/// The method first builds a basic feasible solution and then improves it, one basis change at a
/// time, until no cell has a negative reduced cost.
pub trait SolveTransportation<F: Quantity> {
    /// Solve with the default strategies.
    ///
    /// These are the northwest corner rule for the initial basic solution and entering the cell with
    /// the most negative reduced cost.
    ///
    /// # Arguments
    ///
    /// * `config`: Tolerances, iteration cap and the treatment of degenerate bases.
    ///
    /// # Return value
    ///
    /// An optimal allocation, possibly with warnings attached.
    ///
    /// # Errors
    ///
    /// When the problem is unbalanced under the configured tolerance, when the cap on the number of
    /// pivots is reached, or when the basis became malformed.
    fn solve(&self, config: &Config<F>) -> Result<Solution<F>, SolveError>;

    /// Solve with specific strategies.
    ///
    /// See `solve`.
    fn solve_with<IB: InitialBasis<F>, PR: PivotRule<F>>(
        &self,
        config: &Config<F>,
    ) -> Result<Solution<F>, SolveError>;
}
