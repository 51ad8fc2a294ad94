//! # Least cost method
//!
//! Greedily ship through the cheapest cell that is still available.
use std::cmp::Ordering;

use crate::algorithm::transportation::initial::{InitialBasis, Remaining};
use crate::data::linear_algebra::matrix::{Cell, Dense};
use crate::data::number_types::traits::Quantity;
use crate::data::transportation::TransportationProblem;

/// The cheapest active cell; ties are broken in row-major order.
pub struct LeastCost {
    /// All cells, sorted by cost.
    order: Vec<Cell>,
    /// Cells before this index in `order` are known to be inactive.
    next: usize,
}

impl<F: Quantity> InitialBasis<F> for LeastCost {
    fn new(problem: &TransportationProblem<F>) -> Self {
        let cost = problem.cost();
        let mut order = cost.iter_indexed().map(|(cell, _)| cell).collect::<Vec<_>>();
        // Stable, so equal costs stay in row-major order.
        order.sort_by(|&left, &right| cost[left].partial_cmp(&cost[right]).unwrap_or(Ordering::Equal));

        Self { order, next: 0 }
    }

    fn select_cell(&mut self, remaining: &Remaining<F>, _cost: &Dense<F>) -> Option<Cell> {
        // Crossed out lines stay crossed out, so skipped cells never need to be revisited.
        let offset = self.order[self.next..].iter()
            .position(|&cell| remaining.is_cell_active(cell))?;
        self.next += offset;

        Some(self.order[self.next])
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::transportation::initial::InitialBasis;
    use crate::algorithm::transportation::initial::least_cost::LeastCost;
    use crate::data::linear_algebra::matrix::Dense;
    use crate::data::number_types::tolerance::Tolerance;
    use crate::tests::{problem_1, problem_2};

    #[test]
    fn cheapest_first() {
        let solution = LeastCost::compute(&problem_1::problem(), &Tolerance::default());

        // (0, 0) and (1, 1) both cost 4, (0, 0) comes first.
        assert_eq!(solution.allocation, Dense::from_rows(vec![
            vec![15., 0., 5.],
            vec![0., 25., 5.],
        ]).unwrap());
    }

    #[test]
    fn textbook() {
        let problem = problem_2::problem();
        let solution = LeastCost::compute(&problem, &Tolerance::default());

        assert_eq!(solution.allocation, Dense::from_rows(vec![
            vec![0., 0., 0., 7.],
            vec![2., 0., 7., 0.],
            vec![3., 8., 0., 7.],
        ]).unwrap());
        assert_eq!(problem.total_cost(&solution.allocation), 814.);
    }
}
