//! # The transportation simplex
//!
//! A specialization of the primal simplex method for balanced transportation problems. Bases are
//! spanning trees of the bipartite graph of supply and demand nodes, so no matrix needs to be
//! factorized:
//!
//! * the potentials (dual values) of a basis follow from walking the tree,
//! * the column of an entering cell is the stepping stone loop it closes with the tree,
//! * a pivot shifts flow around that loop.
use log::{debug, info, trace, warn};

use crate::algorithm::error::{NonConvergenceError, SolveError, Warning};
use crate::algorithm::SolveTransportation;
use crate::algorithm::transportation::basis::Basis;
use crate::algorithm::transportation::initial::{BasicSolution, InitialBasis};
use crate::algorithm::transportation::initial::northwest_corner::NorthwestCorner;
use crate::algorithm::transportation::pivot::{pivot, Pivot};
use crate::algorithm::transportation::potentials::Potentials;
use crate::algorithm::transportation::stepping_stone::find_loop;
use crate::algorithm::transportation::strategy::pivot_rule::{MostNegative, PivotRule};
use crate::data::linear_algebra::matrix::Cell;
use crate::data::number_types::tolerance::Tolerance;
use crate::data::number_types::traits::Quantity;
use crate::data::transportation::error::BalanceError;
use crate::data::transportation::solution::Solution;
use crate::data::transportation::TransportationProblem;

pub mod basis;
pub mod initial;
pub mod pivot;
pub mod potentials;
pub mod stepping_stone;
pub mod strategy;


/// Settings of a single solve.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Config<F> {
    /// Balance and zero tolerances.
    pub tolerance: Tolerance<F>,
    /// Maximum number of pivots; `None` uses `default_iteration_cap`.
    pub max_iterations: Option<usize>,
    /// What cells make up the basis between pivots.
    pub degeneracy: DegeneracyHandling,
}

impl<F: Quantity> Default for Config<F> {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::default(),
            max_iterations: None,
            degeneracy: DegeneracyHandling::default(),
        }
    }
}

/// How the basis is tracked when basic cells have a zero allocation.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum DegeneracyHandling {
    /// Maintain the spanning tree explicitly: the entering cell joins the basis and exactly one
    /// cell leaves it, even when basic cells carry a zero amount.
    ///
    /// All potentials are always determined.
    #[default]
    KeepZeroBasics,
    /// Take the cells with a positive allocation as the basis before every iteration.
    ///
    /// On degenerate solutions this basis is too small, some potentials can't be determined and
    /// the cells depending on them are never considered. The result is then flagged with a
    /// `Warning::DegenerateBasis`, and need not be optimal.
    PositiveSupport,
}

/// Cap on the number of pivots used when none is configured.
pub fn default_iteration_cap(nr_rows: usize, nr_columns: usize) -> usize {
    100 + 10 * nr_rows * nr_columns
}

impl<F: Quantity> SolveTransportation<F> for TransportationProblem<F> {
    fn solve(&self, config: &Config<F>) -> Result<Solution<F>, SolveError> {
        self.solve_with::<NorthwestCorner, MostNegative>(config)
    }

    fn solve_with<IB: InitialBasis<F>, PR: PivotRule<F>>(
        &self,
        config: &Config<F>,
    ) -> Result<Solution<F>, SolveError> {
        primal::<_, IB, PR>(self, config)
    }
}

/// Run the transportation simplex.
///
/// Builds an initial basic feasible solution and pivots until no cell has a negative reduced cost.
fn primal<F, IB, PR>(
    problem: &TransportationProblem<F>,
    config: &Config<F>,
) -> Result<Solution<F>, SolveError>
where
    F: Quantity,
    IB: InitialBasis<F>,
    PR: PivotRule<F>,
{
    let tolerance = &config.tolerance;
    let (total_supply, total_demand) = (problem.total_supply(), problem.total_demand());
    if !tolerance.are_balanced(total_supply, total_demand) {
        return Err(BalanceError::new(total_supply, total_demand).into());
    }

    let (nr_rows, nr_columns) = (problem.nr_supply_nodes(), problem.nr_demand_nodes());
    let max_iterations = config.max_iterations
        .unwrap_or_else(|| default_iteration_cap(nr_rows, nr_columns));
    info!("Solving transportation problem with {} supply and {} demand nodes", nr_rows, nr_columns);

    let BasicSolution { mut allocation, mut basis } = IB::compute(problem, tolerance);
    let mut total_cost = problem.total_cost(&allocation);
    debug!("Initial basic solution with {} basic cells, total cost {}", basis.len(), total_cost);

    let mut rule = PR::new();
    let mut warnings = Vec::new();
    let mut nr_pivots = 0;
    loop {
        if config.degeneracy == DegeneracyHandling::PositiveSupport {
            basis = Basis::from_positive_support(&allocation, tolerance);
        }

        let potentials = Potentials::compute(problem.cost(), &basis);
        trace!("Potentials: u = {:?}, v = {:?}", potentials.rows(), potentials.columns());
        if !potentials.is_complete() {
            let warning = Warning::DegenerateBasis {
                iteration: nr_pivots,
                undetermined_rows: potentials.undetermined_rows(),
                undetermined_columns: potentials.undetermined_columns(),
            };
            warn!("{}", warning);
            warnings.push(warning);
        }

        let reduced_costs = potentials.reduced_costs(problem.cost(), &basis);
        let Some((entering, reduced_cost)) = rule.select_entering(&reduced_costs, tolerance) else {
            info!("Optimal after {} pivots, total cost {}", nr_pivots, total_cost);
            return Ok(Solution::new(allocation, basis, potentials, total_cost, nr_pivots, warnings));
        };

        if nr_pivots >= max_iterations {
            warn!("No optimum after {} pivots", nr_pivots);
            return Err(NonConvergenceError { max_iterations }.into());
        }

        let stepping_stone = find_loop(&basis, entering)?;
        let Pivot { leaving, theta, .. } = pivot(&mut allocation, &stepping_stone, tolerance);
        basis.insert(entering);
        basis.remove(leaving);
        nr_pivots += 1;

        let new_total_cost = problem.total_cost(&allocation);
        debug_assert!(problem.is_feasible(&allocation, tolerance));
        debug_assert!(new_total_cost <= total_cost + tolerance.balance * total_cost.abs().max(F::one()));
        debug!(
            "Pivot {}: {:?} enters (reduced cost {}), {:?} leaves, theta {}, total cost {}",
            nr_pivots, entering, reduced_cost, leaving, theta, new_total_cost,
        );
        total_cost = new_total_cost;
    }
}

/// Whether a basic solution can be improved by a single pivot.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Optimality<F> {
    /// No cell has a negative reduced cost.
    Optimal,
    /// Bringing `entering` into the basis decreases the total cost.
    Improvable {
        /// Cell with the most negative reduced cost, first in row-major order on ties.
        entering: Cell,
        /// Change in total cost per unit shipped through `entering`.
        reduced_cost: F,
    },
}

/// Test a basis for optimality.
///
/// Computes the potentials of the basis and the reduced costs of all non-basic cells. Cells with
/// undetermined potentials are not considered.
///
/// # Arguments
///
/// * `problem`: Problem the basis belongs to.
/// * `basis`: Basis of a basic feasible solution.
/// * `tolerance`: Reduced costs down to `-tolerance.zero` count as nonnegative.
pub fn check_optimality<F: Quantity>(
    problem: &TransportationProblem<F>,
    basis: &Basis,
    tolerance: &Tolerance<F>,
) -> Optimality<F> {
    let potentials = Potentials::compute(problem.cost(), basis);
    let reduced_costs = potentials.reduced_costs(problem.cost(), basis);

    match MostNegative.select_entering(&reduced_costs, tolerance) {
        Some((entering, reduced_cost)) => Optimality::Improvable { entering, reduced_cost },
        None => Optimality::Optimal,
    }
}
