//! # Failures and warnings of the solver
//!
//! All errors are unrecoverable at the point where they are raised: the caller receives one of
//! these instead of a partial, possibly inconsistent, allocation. Warnings don't stop the solver;
//! they are collected in the `Solution`.
use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::data::linear_algebra::matrix::Cell;
use crate::data::transportation::error::BalanceError;

/// A `SolveError` is created when the transportation simplex could not produce an optimal
/// allocation.
///
/// It is the highest error in the algorithm error hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveError {
    /// Total supply and total demand differ beyond the configured tolerance.
    ///
    /// Detected before any allocation is attempted.
    Balance(BalanceError),
    /// No stepping stone loop could be closed for an entering cell.
    ///
    /// This indicates a malformed basis.
    NoLoopFound(NoLoopFoundError),
    /// The iteration cap was reached before an optimum was found.
    NonConvergence(NonConvergenceError),
}

impl Display for SolveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::Balance(error) => error.fmt(f),
            SolveError::NoLoopFound(error) => error.fmt(f),
            SolveError::NonConvergence(error) => error.fmt(f),
        }
    }
}

impl Error for SolveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SolveError::Balance(error) => Some(error),
            SolveError::NoLoopFound(error) => Some(error),
            SolveError::NonConvergence(error) => Some(error),
        }
    }
}

impl From<BalanceError> for SolveError {
    fn from(error: BalanceError) -> Self {
        SolveError::Balance(error)
    }
}

impl From<NoLoopFoundError> for SolveError {
    fn from(error: NoLoopFoundError) -> Self {
        SolveError::NoLoopFound(error)
    }
}

impl From<NonConvergenceError> for SolveError {
    fn from(error: NonConvergenceError) -> Self {
        SolveError::NonConvergence(error)
    }
}

/// The depth first search over the basis did not return to the entering cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct NoLoopFoundError {
    /// Cell that was supposed to enter the basis.
    pub entering: Cell,
}

impl Display for NoLoopFoundError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (i, j) = self.entering;
        write!(f, "NoLoopFoundError: no stepping stone loop through entering cell ({}, {})", i, j)
    }
}

impl Error for NoLoopFoundError {}

/// The number of pivots exceeded the cap.
///
/// Without an anti-cycling pivot rule, degenerate problems can make the method cycle.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct NonConvergenceError {
    /// The cap that was reached.
    pub max_iterations: usize,
}

impl Display for NonConvergenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "NonConvergenceError: no optimum after {} pivots", self.max_iterations)
    }
}

impl Error for NonConvergenceError {}

/// Non-fatal observations made while solving; the result should be scrutinized.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Warning {
    /// The potentials could not all be determined from the basis.
    ///
    /// Reduced costs of cells in an undetermined row or column are not computed, so these cells are
    /// never selected to enter the basis. Optimality is not guaranteed.
    DegenerateBasis {
        /// Number of pivots done before the potentials were computed.
        iteration: usize,
        /// Supply nodes without a row potential.
        undetermined_rows: Vec<usize>,
        /// Demand nodes without a column potential.
        undetermined_columns: Vec<usize>,
    },
}

impl Display for Warning {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Warning::DegenerateBasis { iteration, undetermined_rows, undetermined_columns } => write!(
                f,
                "DegenerateBasisWarning: at iteration {}, potentials of rows [{}] and columns [{}] are undetermined",
                iteration, undetermined_rows.iter().join(", "), undetermined_columns.iter().join(", "),
            ),
        }
    }
}
