//! # Potentials
//!
//! Dual values `u` (one per row) and `v` (one per column) such that `u[i] + v[j] = cost[i][j]` for
//! every basic cell. With these, the reduced cost of a non-basic cell is
//! `cost[i][j] - (u[i] + v[j])`: the change in total cost when one unit is shipped through it.
//!
//! This is the "modified distribution" (MODI) method.
use crate::algorithm::transportation::basis::Basis;
use crate::data::linear_algebra::matrix::Dense;
use crate::data::number_types::traits::Quantity;

/// Row and column potentials of a basis.
///
/// A potential is `None` when the basis doesn't connect its row or column to row 0.
#[derive(Clone, Debug, PartialEq)]
pub struct Potentials<F> {
    rows: Vec<Option<F>>,
    columns: Vec<Option<F>>,
}

impl<F: Quantity> Potentials<F> {
    /// Solve `u[i] + v[j] = cost[i][j]` over the basic cells, with `u[0] = 0`.
    ///
    /// Values are propagated along basic cells in passes over the basis in row-major order, at most
    /// `m + n` of them. This reaches every row and column connected to row 0 through basic cells,
    /// which is all of them when the basis is a spanning tree.
    ///
    /// # Arguments
    ///
    /// * `cost`: Unit costs.
    /// * `basis`: Basic cells of the current solution.
    pub fn compute(cost: &Dense<F>, basis: &Basis) -> Self {
        debug_assert_eq!(cost.nr_rows(), basis.nr_rows());
        debug_assert_eq!(cost.nr_columns(), basis.nr_columns());

        let (nr_rows, nr_columns) = (cost.nr_rows(), cost.nr_columns());
        let mut rows = vec![None; nr_rows];
        let mut columns = vec![None; nr_columns];
        if let Some(first) = rows.first_mut() {
            *first = Some(F::zero());
        }

        for _ in 0..(nr_rows + nr_columns) {
            let mut changed = false;
            for (i, j) in basis.iter() {
                match (rows[i], columns[j]) {
                    (Some(u), None) => {
                        columns[j] = Some(cost[(i, j)] - u);
                        changed = true;
                    },
                    (None, Some(v)) => {
                        rows[i] = Some(cost[(i, j)] - v);
                        changed = true;
                    },
                    _ => (),
                }
            }

            if !changed {
                break;
            }
        }

        Self { rows, columns }
    }

    /// Reduced cost of every cell.
    ///
    /// # Return value
    ///
    /// Matrix with `cost[i][j] - (u[i] + v[j])` for non-basic cells of which both potentials are
    /// known, and positive infinity for basic cells and cells with an undetermined potential. The
    /// latter are hence never selected to enter the basis.
    pub fn reduced_costs(&self, cost: &Dense<F>, basis: &Basis) -> Dense<F> {
        let rows = (0..cost.nr_rows())
            .map(|i| {
                (0..cost.nr_columns())
                    .map(|j| match (basis.contains((i, j)), self.rows[i], self.columns[j]) {
                        (false, Some(u), Some(v)) => cost[(i, j)] - (u + v),
                        _ => F::infinity(),
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        Dense::new(rows, cost.nr_columns())
    }

    /// Whether all potentials are determined.
    pub fn is_complete(&self) -> bool {
        self.rows.iter().chain(&self.columns).all(Option::is_some)
    }

    /// Potential `u[i]` of a row.
    pub fn row(&self, i: usize) -> Option<F> {
        self.rows[i]
    }

    /// Potential `v[j]` of a column.
    pub fn column(&self, j: usize) -> Option<F> {
        self.columns[j]
    }

    /// All row potentials.
    pub fn rows(&self) -> &[Option<F>] {
        &self.rows
    }

    /// All column potentials.
    pub fn columns(&self) -> &[Option<F>] {
        &self.columns
    }

    /// Indices of the rows without a potential.
    pub fn undetermined_rows(&self) -> Vec<usize> {
        undetermined(&self.rows)
    }

    /// Indices of the columns without a potential.
    pub fn undetermined_columns(&self) -> Vec<usize> {
        undetermined(&self.columns)
    }
}

fn undetermined<F>(values: &[Option<F>]) -> Vec<usize> {
    values.iter().enumerate()
        .filter(|(_, value)| value.is_none())
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod test {
    use crate::algorithm::transportation::basis::Basis;
    use crate::algorithm::transportation::potentials::Potentials;
    use crate::data::linear_algebra::matrix::Dense;

    fn cost() -> Dense<f64> {
        Dense::from_rows(vec![vec![4., 6., 8.], vec![5., 4., 7.]]).unwrap()
    }

    #[test]
    fn spanning_tree() {
        // Northwest corner basis of the 2 x 3 example
        let basis = Basis::from_cells(2, 3, vec![(0, 0), (0, 1), (1, 1), (1, 2)]);
        let potentials = Potentials::compute(&cost(), &basis);

        assert!(potentials.is_complete());
        assert_eq!(potentials.rows(), &[Some(0.), Some(-2.)]);
        assert_eq!(potentials.columns(), &[Some(4.), Some(6.), Some(9.)]);

        let reduced = potentials.reduced_costs(&cost(), &basis);
        assert_eq!(reduced.row(0), &[f64::INFINITY, f64::INFINITY, -1.]);
        assert_eq!(reduced.row(1), &[3., f64::INFINITY, f64::INFINITY]);
    }

    #[test]
    fn needs_several_passes() {
        // In row-major order, (1, 0) can only be resolved after (1, 1), which depends on (2, 1).
        let cost = Dense::from_rows(vec![
            vec![5., 1., 1.],
            vec![1., 5., 1.],
            vec![1., 1., 5.],
        ]).unwrap();
        let basis = Basis::from_cells(3, 3, vec![(0, 2), (1, 0), (1, 1), (2, 1), (2, 2)]);
        let potentials = Potentials::compute(&cost, &basis);

        assert_eq!(potentials.rows(), &[Some(0.), Some(8.), Some(4.)]);
        assert_eq!(potentials.columns(), &[Some(-7.), Some(-3.), Some(1.)]);

        let reduced = potentials.reduced_costs(&cost, &basis);
        assert_eq!(reduced[(1, 2)], -8.);
        assert_eq!(reduced[(0, 0)], 12.);
    }

    #[test]
    fn degenerate() {
        let cost = Dense::from_rows(vec![vec![1., 2.], vec![3., 1.]]).unwrap();
        let basis = Basis::from_cells(2, 2, vec![(0, 0), (1, 1)]);
        let potentials = Potentials::compute(&cost, &basis);

        assert!(!potentials.is_complete());
        assert_eq!(potentials.row(0), Some(0.));
        assert_eq!(potentials.column(0), Some(1.));
        assert_eq!(potentials.undetermined_rows(), vec![1]);
        assert_eq!(potentials.undetermined_columns(), vec![1]);

        let reduced = potentials.reduced_costs(&cost, &basis);
        assert!(reduced.iter_indexed().all(|(_, &value)| value == f64::INFINITY));
    }
}
