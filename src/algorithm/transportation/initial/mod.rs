//! # Initial basic solutions
//!
//! The transportation simplex starts from a basic feasible solution. All methods here build one
//! the same way: repeatedly pick a cell in a row and column that are still active, ship as much as
//! possible through it and cross out one line. They differ only in which cell they pick.
//!
//! Crossing out exactly one line per step (both for the very last cell) results in `m + n - 1`
//! basic cells forming a spanning tree, also when some of them are allocated a zero amount.
use enum_map::{enum_map, EnumMap};

use crate::algorithm::transportation::basis::{Axis, Basis};
use crate::data::linear_algebra::matrix::{Cell, Dense};
use crate::data::number_types::tolerance::Tolerance;
use crate::data::number_types::traits::Quantity;
use crate::data::transportation::TransportationProblem;

pub mod least_cost;
pub mod northwest_corner;
pub mod vogel;

/// A feasible allocation together with its basis.
#[derive(Clone, Debug, PartialEq)]
pub struct BasicSolution<F> {
    /// Amount shipped through each cell.
    pub allocation: Dense<F>,
    /// Cells in the basis; all cells with a positive allocation and possibly some zero ones.
    pub basis: Basis,
}

/// Supply and demand that has not yet been allocated.
///
/// Working copies, owned by the construction of a single initial solution.
#[derive(Clone, Debug)]
pub struct Remaining<F> {
    supply: Vec<F>,
    demand: Vec<F>,
    /// Rows and columns that have not been crossed out.
    active: EnumMap<Axis, Vec<bool>>,
    nr_active: EnumMap<Axis, usize>,
}

impl<F: Quantity> Remaining<F> {
    fn new(problem: &TransportationProblem<F>) -> Self {
        let (nr_rows, nr_columns) = (problem.nr_supply_nodes(), problem.nr_demand_nodes());

        Self {
            supply: problem.supply().to_vec(),
            demand: problem.demand().to_vec(),
            active: enum_map! {
                Axis::Row => vec![true; nr_rows],
                Axis::Column => vec![true; nr_columns],
            },
            nr_active: enum_map! {
                Axis::Row => nr_rows,
                Axis::Column => nr_columns,
            },
        }
    }

    /// Supply of row `i` that is not yet allocated.
    pub fn supply(&self, i: usize) -> F {
        self.supply[i]
    }

    /// Demand of column `j` that is not yet allocated.
    pub fn demand(&self, j: usize) -> F {
        self.demand[j]
    }

    /// Whether a row or column has not been crossed out.
    pub fn is_active(&self, axis: Axis, line: usize) -> bool {
        self.active[axis][line]
    }

    /// Whether both the row and the column of a cell have not been crossed out.
    pub fn is_cell_active(&self, (i, j): Cell) -> bool {
        self.is_active(Axis::Row, i) && self.is_active(Axis::Column, j)
    }

    /// Indices of all rows or columns that have not been crossed out, in increasing order.
    pub fn active(&self, axis: Axis) -> impl Iterator<Item=usize> + '_ {
        self.active[axis].iter().enumerate()
            .filter(|&(_, &active)| active)
            .map(|(line, _)| line)
    }

    /// Number of rows or columns that have not been crossed out.
    pub fn nr_active(&self, axis: Axis) -> usize {
        self.nr_active[axis]
    }

    fn cross_out(&mut self, axis: Axis, line: usize) {
        debug_assert!(self.active[axis][line]);

        self.active[axis][line] = false;
        self.nr_active[axis] -= 1;
    }
}

/// A method to find an initial basic feasible solution.
pub trait InitialBasis<F: Quantity> {
    /// Create a new instance for a specific problem.
    fn new(problem: &TransportationProblem<F>) -> Self;

    /// Pick the next cell to allocate to.
    ///
    /// # Arguments
    ///
    /// * `remaining`: What is left to allocate; has at least one active row and one active column.
    /// * `cost`: Unit costs.
    ///
    /// # Return value
    ///
    /// A cell of which both the row and the column are active.
    fn select_cell(&mut self, remaining: &Remaining<F>, cost: &Dense<F>) -> Option<Cell>;

    /// Build a basic feasible solution.
    ///
    /// Each selected cell receives the minimum of its row's remaining supply and its column's
    /// remaining demand. Then, the row is crossed out if its supply is exhausted, unless it is the
    /// last active row. Otherwise, the column is crossed out. When a row and a column are exhausted
    /// at the same time, the row is hence crossed out first. Both are crossed out for the last cell.
    ///
    /// The last active row and the last active column are never crossed out while other lines
    /// remain. Totals that only balance within the tolerance can leave a row with supply when its
    /// column is the last one; that row is crossed out and the remainder stays unallocated.
    ///
    /// # Arguments
    ///
    /// * `problem`: A balanced problem.
    /// * `tolerance`: Remaining supply that is indistinguishable from zero counts as exhausted.
    fn compute(problem: &TransportationProblem<F>, tolerance: &Tolerance<F>) -> BasicSolution<F>
    where
        Self: Sized,
    {
        let (nr_rows, nr_columns) = (problem.nr_supply_nodes(), problem.nr_demand_nodes());
        let mut remaining = Remaining::new(problem);
        let mut allocation = Dense::constant(F::zero(), nr_rows, nr_columns);
        let mut basis = Basis::new(nr_rows, nr_columns);
        let mut strategy = Self::new(problem);

        while remaining.nr_active(Axis::Row) > 0 && remaining.nr_active(Axis::Column) > 0 {
            let Some((i, j)) = strategy.select_cell(&remaining, problem.cost()) else { break };
            debug_assert!(remaining.is_cell_active((i, j)));

            let amount = remaining.supply[i].min(remaining.demand[j]);
            allocation[(i, j)] = amount;
            basis.insert((i, j));
            remaining.supply[i] = remaining.supply[i] - amount;
            remaining.demand[j] = remaining.demand[j] - amount;

            let last_row = remaining.nr_active(Axis::Row) == 1;
            let last_column = remaining.nr_active(Axis::Column) == 1;
            if last_row && last_column {
                remaining.cross_out(Axis::Row, i);
                remaining.cross_out(Axis::Column, j);
            } else if !last_row && (last_column || tolerance.is_zero(remaining.supply[i])) {
                remaining.cross_out(Axis::Row, i);
            } else {
                remaining.cross_out(Axis::Column, j);
            }
        }

        debug_assert!(basis.has_spanning_tree_size());
        BasicSolution { allocation, basis }
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::transportation::initial::{BasicSolution, InitialBasis};
    use crate::algorithm::transportation::initial::least_cost::LeastCost;
    use crate::algorithm::transportation::initial::northwest_corner::NorthwestCorner;
    use crate::algorithm::transportation::initial::vogel::Vogel;
    use crate::algorithm::transportation::potentials::Potentials;
    use crate::data::number_types::tolerance::Tolerance;
    use crate::data::number_types::traits::Quantity;
    use crate::data::transportation::TransportationProblem;
    use crate::tests::{problem_1, problem_2, problem_3, problem_4};

    /// Feasible, and the basis is a spanning tree (all potentials can be determined).
    fn assert_basic_feasible<F: Quantity>(problem: &TransportationProblem<F>, solution: &BasicSolution<F>) {
        let tolerance = Tolerance::default();
        assert!(problem.is_feasible(&solution.allocation, &tolerance));
        assert!(solution.basis.has_spanning_tree_size());
        assert!(Potentials::compute(problem.cost(), &solution.basis).is_complete());
        assert!(solution.allocation.iter_indexed()
            .all(|(cell, &value)| value == F::zero() || solution.basis.contains(cell)));
    }

    fn all_methods<F: Quantity>(problem: &TransportationProblem<F>) {
        let tolerance = Tolerance::default();
        assert_basic_feasible(problem, &NorthwestCorner::compute(problem, &tolerance));
        assert_basic_feasible(problem, &LeastCost::compute(problem, &tolerance));
        assert_basic_feasible(problem, &Vogel::compute(problem, &tolerance));
    }

    #[test]
    fn feasible_spanning_trees() {
        all_methods(&problem_1::problem());
        all_methods(&problem_2::problem());
        all_methods(&problem_3::problem());
    }

    #[test]
    fn zero_supply_and_demand() {
        let problem = TransportationProblem::from_rows(
            vec![vec![1., 2., 3.], vec![4., 5., 6.], vec![7., 8., 9.]],
            vec![0., 5., 5.],
            vec![5., 0., 5.],
            &Tolerance::default(),
        ).unwrap();
        all_methods(&problem);
    }

    #[test]
    fn balanced_within_tolerance() {
        for problem in problem_4::problems() {
            all_methods(&problem);
        }
    }
}
