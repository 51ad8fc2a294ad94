//! # Northwest corner rule
//!
//! Start in the top left cell and walk towards the bottom right: down when a row's supply is
//! exhausted, right otherwise. Costs are ignored entirely.
use crate::algorithm::transportation::basis::Axis;
use crate::algorithm::transportation::initial::{InitialBasis, Remaining};
use crate::data::linear_algebra::matrix::{Cell, Dense};
use crate::data::number_types::traits::Quantity;
use crate::data::transportation::TransportationProblem;

/// The top left cell of the rows and columns that are not crossed out yet.
pub struct NorthwestCorner {
    row: usize,
    column: usize,
}

impl<F: Quantity> InitialBasis<F> for NorthwestCorner {
    fn new(_problem: &TransportationProblem<F>) -> Self {
        Self { row: 0, column: 0 }
    }

    fn select_cell(&mut self, remaining: &Remaining<F>, cost: &Dense<F>) -> Option<Cell> {
        // Lines are only crossed out at the cursor, so everything before it is inactive.
        self.row = (self.row..cost.nr_rows()).find(|&i| remaining.is_active(Axis::Row, i))?;
        self.column = (self.column..cost.nr_columns()).find(|&j| remaining.is_active(Axis::Column, j))?;

        Some((self.row, self.column))
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::transportation::basis::Basis;
    use crate::algorithm::transportation::initial::InitialBasis;
    use crate::algorithm::transportation::initial::northwest_corner::NorthwestCorner;
    use crate::data::linear_algebra::matrix::Dense;
    use crate::data::number_types::tolerance::Tolerance;
    use crate::data::transportation::TransportationProblem;
    use crate::tests::{problem_1, problem_3, problem_4};

    #[test]
    fn staircase() {
        let solution = NorthwestCorner::compute(&problem_1::problem(), &Tolerance::default());

        assert_eq!(solution.allocation, problem_1::northwest_corner_allocation());
        assert_eq!(solution.basis, Basis::from_cells(2, 3, vec![(0, 0), (0, 1), (1, 1), (1, 2)]));
    }

    /// When a row and a column are exhausted at the same time, the row is crossed out first.
    #[test]
    fn row_priority_on_ties() {
        let problem = TransportationProblem::from_rows(
            vec![vec![1., 2.], vec![3., 1.]],
            vec![10., 20.],
            vec![10., 20.],
            &Tolerance::default(),
        ).unwrap();
        let solution = NorthwestCorner::compute(&problem, &Tolerance::default());

        assert_eq!(solution.allocation, Dense::from_rows(vec![vec![10., 0.], vec![0., 20.]]).unwrap());
        // Moving down after the tie puts the zero in (1, 0), not in (0, 1).
        assert_eq!(solution.basis, Basis::from_cells(2, 2, vec![(0, 0), (1, 0), (1, 1)]));

        // Reproducible
        assert_eq!(NorthwestCorner::compute(&problem, &Tolerance::default()), solution);
    }

    #[test]
    fn degenerate_diagonal() {
        let solution = NorthwestCorner::compute(&problem_3::problem(), &Tolerance::default());

        assert_eq!(solution.allocation, Dense::from_rows(vec![
            vec![10., 0., 0.],
            vec![0., 20., 0.],
            vec![0., 0., 30.],
        ]).unwrap());
        assert_eq!(solution.basis, Basis::from_cells(3, 3, vec![(0, 0), (1, 0), (1, 1), (2, 1), (2, 2)]));
    }

    /// Supply left in a row when only one column remains is not shipped; the row is crossed out.
    #[test]
    fn excess_before_last_column() {
        let solution = NorthwestCorner::compute(&problem_4::excess_before_last_column(), &Tolerance::default());

        assert_eq!(solution.allocation, Dense::from_rows(vec![vec![4., 6.], vec![0., 0.]]).unwrap());
        assert_eq!(solution.basis, Basis::from_cells(2, 2, vec![(0, 0), (0, 1), (1, 1)]));
    }

    #[test]
    fn single_cell() {
        let problem = TransportationProblem::from_rows(
            vec![vec![5.]], vec![10.], vec![10.], &Tolerance::default(),
        ).unwrap();
        let solution = NorthwestCorner::compute(&problem, &Tolerance::default());

        assert_eq!(solution.allocation, Dense::from_rows(vec![vec![10.]]).unwrap());
        assert_eq!(solution.basis.len(), 1);
    }
}
