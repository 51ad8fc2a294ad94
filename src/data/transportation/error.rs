//! # Inconsistent problem data
//!
//! Errors describing why a set of costs, supplies and demands does not form a balanced
//! transportation problem.
use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};

use crate::data::linear_algebra::matrix::{Cell, RaggedRows};

/// A `ProblemError` is created when the data describing a problem is inconsistent.
///
/// It is created before any allocation is attempted.
#[derive(Debug, Clone, PartialEq)]
pub enum ProblemError {
    /// There are no supply nodes or no demand nodes.
    Empty,
    /// The rows of the cost matrix are not all of the same length.
    Ragged(RaggedRows),
    /// The cost matrix does not have one row per supply node and one column per demand node.
    Dimension {
        /// Dimensions of the cost matrix.
        cost: (usize, usize),
        /// Number of supply nodes.
        nr_supply_nodes: usize,
        /// Number of demand nodes.
        nr_demand_nodes: usize,
    },
    /// A value is negative, infinite or not a number.
    InvalidValue {
        /// Where the value was found.
        location: ValueLocation,
        /// The value, converted for reporting.
        value: f64,
    },
    /// Total supply does not equal total demand.
    Balance(BalanceError),
}

/// Position of a value within the problem data.
#[allow(missing_docs)]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ValueLocation {
    Cost(Cell),
    Supply(usize),
    Demand(usize),
}

impl Display for ValueLocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ValueLocation::Cost((i, j)) => write!(f, "cost ({}, {})", i, j),
            ValueLocation::Supply(i) => write!(f, "supply {}", i),
            ValueLocation::Demand(j) => write!(f, "demand {}", j),
        }
    }
}

impl Display for ProblemError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ProblemError::Empty => f.write_str("ProblemError: no supply or no demand nodes"),
            ProblemError::Ragged(error) => write!(f, "ProblemError: cost matrix is not rectangular, {}", error),
            ProblemError::Dimension { cost: (nr_rows, nr_columns), nr_supply_nodes, nr_demand_nodes } => write!(
                f,
                "ProblemError: cost matrix is {} x {}, but there are {} supply and {} demand nodes",
                nr_rows, nr_columns, nr_supply_nodes, nr_demand_nodes,
            ),
            ProblemError::InvalidValue { location, value } => write!(
                f, "ProblemError: {} has value {}, expected a finite non-negative number", location, value,
            ),
            ProblemError::Balance(error) => error.fmt(f),
        }
    }
}

impl Error for ProblemError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ProblemError::Ragged(error) => Some(error),
            ProblemError::Balance(error) => Some(error),
            _ => None,
        }
    }
}

impl From<RaggedRows> for ProblemError {
    fn from(error: RaggedRows) -> Self {
        ProblemError::Ragged(error)
    }
}

impl From<BalanceError> for ProblemError {
    fn from(error: BalanceError) -> Self {
        ProblemError::Balance(error)
    }
}

/// Total supply and total demand differ by more than the tolerance.
///
/// Unbalanced problems are not supported; they would need a dummy supply or demand node.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BalanceError {
    /// Sum of all supplies.
    pub total_supply: f64,
    /// Sum of all demands.
    pub total_demand: f64,
}

impl BalanceError {
    /// Create a new instance from the two totals, in any float type.
    pub fn new<F: num_traits::ToPrimitive>(total_supply: F, total_demand: F) -> Self {
        Self {
            total_supply: total_supply.to_f64().unwrap_or(f64::NAN),
            total_demand: total_demand.to_f64().unwrap_or(f64::NAN),
        }
    }
}

impl Display for BalanceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BalanceError: total supply {} does not equal total demand {}",
            self.total_supply, self.total_demand,
        )
    }
}

impl Error for BalanceError {}
