//! # Basis
//!
//! The cells that support a basic solution. Seen as a graph with a node for every row and every
//! column, each basic cell `(i, j)` is an edge between row `i` and column `j`. A nondegenerate basis
//! of a balanced problem has `m + n - 1` cells and forms a spanning tree of that graph.
use enum_map::{Enum, enum_map, EnumMap};

use crate::data::linear_algebra::matrix::{Cell, Dense};
use crate::data::number_types::tolerance::Tolerance;
use crate::data::number_types::traits::Quantity;

/// Direction of a move through the table.
///
/// A row move stays in the same row and changes column, a column move stays in the same column
/// and changes row.
#[derive(Enum, Debug, Copy, Clone, Eq, PartialEq)]
pub enum Axis {
    #[allow(missing_docs)]
    Row,
    #[allow(missing_docs)]
    Column,
}

impl Axis {
    /// The perpendicular direction.
    pub fn other(self) -> Self {
        match self {
            Axis::Row => Axis::Column,
            Axis::Column => Axis::Row,
        }
    }

    /// Split a cell into the index of the line along this axis, and the position on that line.
    ///
    /// For `Axis::Row`, that is `(i, j)`; for `Axis::Column`, `(j, i)`.
    pub fn split(self, (i, j): Cell) -> (usize, usize) {
        match self {
            Axis::Row => (i, j),
            Axis::Column => (j, i),
        }
    }

    /// Inverse of `split`.
    pub fn cell(self, line: usize, position: usize) -> Cell {
        match self {
            Axis::Row => (line, position),
            Axis::Column => (position, line),
        }
    }
}

/// Set of basic cells.
///
/// Membership can be tested in constant time, and for each row (column) the basic cells can be
/// listed in order of increasing column (row) index.
#[derive(Clone, Debug, PartialEq)]
pub struct Basis {
    member: Dense<bool>,
    /// For each axis and each line along it, the sorted positions of the basic cells on that line.
    lines: EnumMap<Axis, Vec<Vec<usize>>>,
    len: usize,
}

impl Basis {
    /// Create an empty basis for a table of dimension `nr_rows` x `nr_columns`.
    pub fn new(nr_rows: usize, nr_columns: usize) -> Self {
        Self {
            member: Dense::constant(false, nr_rows, nr_columns),
            lines: enum_map! {
                Axis::Row => vec![Vec::new(); nr_rows],
                Axis::Column => vec![Vec::new(); nr_columns],
            },
            len: 0,
        }
    }

    /// Create a basis from a collection of cells.
    ///
    /// Duplicate cells are only included once.
    pub fn from_cells(
        nr_rows: usize,
        nr_columns: usize,
        cells: impl IntoIterator<Item=Cell>,
    ) -> Self {
        let mut basis = Self::new(nr_rows, nr_columns);
        for cell in cells {
            basis.insert(cell);
        }
        basis
    }

    /// Derive a basis from an allocation: all cells with a positive value.
    ///
    /// Degenerate allocations lead to a basis with fewer than `m + n - 1` cells.
    pub fn from_positive_support<F: Quantity>(allocation: &Dense<F>, tolerance: &Tolerance<F>) -> Self {
        let cells = allocation.iter_indexed()
            .filter(|&(_, &value)| tolerance.is_positive(value))
            .map(|(cell, _)| cell);
        Self::from_cells(allocation.nr_rows(), allocation.nr_columns(), cells)
    }

    /// Number of rows of the table this basis belongs to.
    pub fn nr_rows(&self) -> usize {
        self.member.nr_rows()
    }

    /// Number of columns of the table this basis belongs to.
    pub fn nr_columns(&self) -> usize {
        self.member.nr_columns()
    }

    /// Number of basic cells.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no basic cells.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether there are as many basic cells as a spanning tree has edges, `m + n - 1`.
    pub fn has_spanning_tree_size(&self) -> bool {
        self.len + 1 == self.nr_rows() + self.nr_columns()
    }

    /// Whether a cell is basic.
    pub fn contains(&self, cell: Cell) -> bool {
        self.member[cell]
    }

    /// Make a cell basic.
    ///
    /// # Return value
    ///
    /// Whether the cell was not yet basic.
    pub fn insert(&mut self, cell: Cell) -> bool {
        if self.member[cell] {
            return false;
        }

        self.member[cell] = true;
        for (axis, lines) in &mut self.lines {
            let (line, position) = axis.split(cell);
            if let Err(index) = lines[line].binary_search(&position) {
                lines[line].insert(index, position);
            }
        }
        self.len += 1;

        true
    }

    /// Make a cell non-basic.
    ///
    /// # Return value
    ///
    /// Whether the cell was basic.
    pub fn remove(&mut self, cell: Cell) -> bool {
        if !self.member[cell] {
            return false;
        }

        self.member[cell] = false;
        for (axis, lines) in &mut self.lines {
            let (line, position) = axis.split(cell);
            if let Ok(index) = lines[line].binary_search(&position) {
                lines[line].remove(index);
            }
        }
        self.len -= 1;

        true
    }

    /// Positions of the basic cells on a line, in increasing order.
    ///
    /// # Arguments
    ///
    /// * `axis`: `Axis::Row` to get the columns of the basic cells in row `line`, `Axis::Column` to
    /// get the rows of the basic cells in column `line`.
    /// * `line`: Row or column index.
    pub fn line(&self, axis: Axis, line: usize) -> &[usize] {
        &self.lines[axis][line]
    }

    /// Iterate over the basic cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item=Cell> + '_ {
        self.lines[Axis::Row].iter().enumerate()
            .flat_map(|(i, columns)| columns.iter().map(move |&j| (i, j)))
    }
}
