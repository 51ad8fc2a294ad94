//! # Stepping stone loops
//!
//! When a cell enters the basis, shipping through it has to be compensated along a closed path
//! that alternates between moving within a row and moving within a column, turning only at basic
//! cells. If the basis is a spanning tree, this loop is unique.
use std::collections::HashSet;

use log::trace;

use crate::algorithm::error::NoLoopFoundError;
use crate::algorithm::transportation::basis::{Axis, Basis};
use crate::data::linear_algebra::matrix::Cell;

/// A closed, alternating path through basic cells.
///
/// The first cell is the entering cell; the edge from the last cell back to the first is implied.
/// Cells at even positions gain flow when pivoting, cells at odd positions lose it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SteppingStoneLoop {
    cells: Vec<Cell>,
}

impl SteppingStoneLoop {
    /// The cell entering the basis.
    pub fn entering(&self) -> Cell {
        self.cells[0]
    }

    /// All corners of the loop, starting with the entering cell.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of corners; even and at least four.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false, a loop has at least four corners.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Corners that gain flow: the entering cell and every other corner after it.
    pub fn increasing(&self) -> impl Iterator<Item=Cell> + '_ {
        self.cells.iter().copied().step_by(2)
    }

    /// Corners that lose flow.
    pub fn decreasing(&self) -> impl Iterator<Item=Cell> + '_ {
        self.cells.iter().copied().skip(1).step_by(2)
    }
}

/// Position in the depth first search: a corner and which of its neighbors to try next.
#[derive(Copy, Clone, Debug)]
struct Frame {
    /// Direction of the move away from this corner.
    axis: Axis,
    /// Index into the basic cells on the line along `axis` of the next candidate.
    next_candidate: usize,
}

/// Find the loop that the entering cell closes with the basis.
///
/// Depth first search, starting with a row move from the entering cell and then alternating
/// between column and row moves. A move goes to a basic cell on the same line, other than the one
/// being left, that is not yet on the path. Candidates are tried in order of increasing index. The
/// search succeeds when a column move can return to the entering cell after at least three moves.
///
/// An explicit stack of frames is used instead of recursion.
///
/// # Arguments
///
/// * `basis`: Current basis, not containing `entering`.
/// * `entering`: Cell about to enter the basis.
///
/// # Errors
///
/// If the search exhausts all paths without returning to the entering cell. This doesn't happen
/// when the basis is a spanning tree.
pub fn find_loop(basis: &Basis, entering: Cell) -> Result<SteppingStoneLoop, NoLoopFoundError> {
    debug_assert!(!basis.contains(entering));

    let mut path = vec![entering];
    let mut on_path = HashSet::new();
    on_path.insert(entering);
    let mut stack = vec![Frame { axis: Axis::Row, next_candidate: 0 }];

    while let Some(depth) = stack.len().checked_sub(1) {
        let Frame { axis, next_candidate } = stack[depth];
        let corner = path[depth];
        let (line, position) = axis.split(corner);

        if next_candidate == 0 && path.len() > 3 && axis == Axis::Column && axis.split(entering).0 == line {
            trace!("Stepping stone loop for {:?}: {:?}", entering, path);
            return Ok(SteppingStoneLoop { cells: path });
        }

        let candidates = basis.line(axis, line);
        let found = candidates.iter().enumerate()
            .skip(next_candidate)
            .find(|&(_, &candidate)| {
                candidate != position && !on_path.contains(&axis.cell(line, candidate))
            });

        match found {
            Some((index, &candidate)) => {
                stack[depth].next_candidate = index + 1;
                let next = axis.cell(line, candidate);
                on_path.insert(next);
                path.push(next);
                stack.push(Frame { axis: axis.other(), next_candidate: 0 });
            },
            None => {
                stack.pop();
                if let Some(dead_end) = path.pop() {
                    on_path.remove(&dead_end);
                }
            },
        }
    }

    Err(NoLoopFoundError { entering })
}
