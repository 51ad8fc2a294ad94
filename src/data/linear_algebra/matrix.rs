//! # Matrix implementations
//!
//! A dense, row-major matrix. Used for costs, allocations and reduced costs.
use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::{Index, IndexMut};

use itertools::Itertools;

use crate::data::number_types::traits::Quantity;

/// Coordinate of a matrix entry: (row index, column index).
pub type Cell = (usize, usize);

/// Uses a `Vec<Vec<F>>` as underlying data structure. Dimensions are fixed at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct Dense<F> {
    data: Vec<Vec<F>>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F> Dense<F> {
    /// Create a new instance from rows that are known to be of equal length.
    ///
    /// # Arguments
    ///
    /// * `data`: Rows, each of length `nr_columns`.
    /// * `nr_columns`: Number of columns, needed when there are no rows.
    pub fn new(data: Vec<Vec<F>>, nr_columns: usize) -> Self {
        debug_assert!(data.iter().all(|row| row.len() == nr_columns));

        Self { nr_rows: data.len(), data, nr_columns }
    }

    /// Create a new instance from rows, verifying that they are all of the same length.
    ///
    /// # Errors
    ///
    /// If a row has a length different from the first row.
    pub fn from_rows(data: Vec<Vec<F>>) -> Result<Self, RaggedRows> {
        let nr_columns = data.first().map_or(0, Vec::len);
        if let Some((row, values)) = data.iter().find_position(|row| row.len() != nr_columns) {
            return Err(RaggedRows { row, length: values.len(), expected: nr_columns });
        }

        Ok(Self::new(data, nr_columns))
    }

    /// Number of rows.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Number of columns.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// All values in row `i`.
    pub fn row(&self, i: usize) -> &[F] {
        debug_assert!(i < self.nr_rows);

        &self.data[i]
    }

    /// All values in column `j`, from top to bottom.
    pub fn column(&self, j: usize) -> impl Iterator<Item=&F> + '_ {
        debug_assert!(j < self.nr_columns);

        self.data.iter().map(move |row| &row[j])
    }

    /// Iterate over all entries in row-major order, together with their coordinates.
    pub fn iter_indexed(&self) -> impl Iterator<Item=(Cell, &F)> + '_ {
        self.data.iter().enumerate()
            .flat_map(|(i, row)| row.iter().enumerate().map(move |(j, value)| ((i, j), value)))
    }

    /// Get the data of this matrix.
    pub fn into_rows(self) -> Vec<Vec<F>> {
        self.data
    }
}

impl<F: Clone> Dense<F> {
    /// Create a matrix of dimension `nr_rows` x `nr_columns` filled with a single value.
    pub fn constant(value: F, nr_rows: usize, nr_columns: usize) -> Self {
        Self::new(vec![vec![value; nr_columns]; nr_rows], nr_columns)
    }
}

impl<F: Quantity> Dense<F> {
    /// Sum of the values in each row.
    pub fn row_sums(&self) -> Vec<F> {
        self.data.iter().map(|row| row.iter().copied().sum()).collect()
    }

    /// Sum of the values in each column.
    pub fn column_sums(&self) -> Vec<F> {
        (0..self.nr_columns).map(|j| self.column(j).copied().sum()).collect()
    }

    /// Sum of the entrywise products with another matrix of the same dimensions.
    pub fn inner_product(&self, other: &Self) -> F {
        debug_assert_eq!(self.nr_rows, other.nr_rows);
        debug_assert_eq!(self.nr_columns, other.nr_columns);

        self.data.iter().flatten()
            .zip(other.data.iter().flatten())
            .map(|(&left, &right)| left * right)
            .sum()
    }
}

impl<F> Index<Cell> for Dense<F> {
    type Output = F;

    fn index(&self, (i, j): Cell) -> &Self::Output {
        debug_assert!(i < self.nr_rows && j < self.nr_columns);

        &self.data[i][j]
    }
}

impl<F> IndexMut<Cell> for Dense<F> {
    fn index_mut(&mut self, (i, j): Cell) -> &mut Self::Output {
        debug_assert!(i < self.nr_rows && j < self.nr_columns);

        &mut self.data[i][j]
    }
}

impl<F: Display> Display for Dense<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in &self.data {
            writeln!(f, "{}", row.iter().join("\t"))?;
        }
        Ok(())
    }
}

/// A row of a matrix under construction had a different length than the first row.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RaggedRows {
    /// Index of the offending row.
    pub row: usize,
    /// Length of the offending row.
    pub length: usize,
    /// Length of the first row.
    pub expected: usize,
}

impl Display for RaggedRows {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row {} has {} values, while the first row has {}",
            self.row, self.length, self.expected,
        )
    }
}

impl Error for RaggedRows {}

#[cfg(test)]
mod test {
    use crate::data::linear_algebra::matrix::{Dense, RaggedRows};

    fn matrix() -> Dense<f64> {
        Dense::from_rows(vec![
            vec![4., 6., 8.],
            vec![5., 4., 7.],
        ]).unwrap()
    }

    #[test]
    fn dimensions() {
        let m = matrix();
        assert_eq!(m.nr_rows(), 2);
        assert_eq!(m.nr_columns(), 3);
        assert_eq!(m.row(1), &[5., 4., 7.]);
        assert_eq!(m.column(2).copied().collect::<Vec<_>>(), vec![8., 7.]);
        assert_eq!(m[(0, 1)], 6.);

        let empty = Dense::<f64>::from_rows(vec![]).unwrap();
        assert_eq!(empty.nr_rows(), 0);
        assert_eq!(empty.nr_columns(), 0);
    }

    #[test]
    fn ragged() {
        let result = Dense::from_rows(vec![vec![1., 2.], vec![3.], vec![4., 5.]]);
        assert_eq!(result, Err(RaggedRows { row: 1, length: 1, expected: 2 }));
    }

    #[test]
    fn sums() {
        let m = matrix();
        assert_eq!(m.row_sums(), vec![18., 16.]);
        assert_eq!(m.column_sums(), vec![9., 10., 15.]);

        let mut allocation = Dense::constant(0f64, 2, 3);
        allocation[(0, 0)] = 15.;
        allocation[(1, 2)] = 10.;
        assert_eq!(m.inner_product(&allocation), 130.);
    }

    #[test]
    fn iter_indexed() {
        let m = matrix();
        let cells = m.iter_indexed().map(|(cell, _)| cell).collect::<Vec<_>>();
        assert_eq!(cells, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
        assert_eq!(m.iter_indexed().map(|(_, &v)| v).sum::<f64>(), 34.);
    }

    #[test]
    fn display() {
        let m = Dense::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(m.to_string(), "1\t2\n3\t4\n");
    }
}
