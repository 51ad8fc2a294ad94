//! # Representation of optimal solutions
//!
//! Once a transportation problem is solved, the allocation is returned together with some
//! information about how it was found. This struct would probably be used to print the optimal
//! shipment plan for the user.
use std::fmt;
use std::fmt::{Display, Formatter};
use std::iter::once;

use itertools::Itertools;

use crate::algorithm::error::Warning;
use crate::algorithm::transportation::basis::Basis;
use crate::algorithm::transportation::potentials::Potentials;
use crate::data::linear_algebra::matrix::Dense;
use crate::data::number_types::traits::Quantity;

/// A cost-optimal shipment plan.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<F> {
    /// Amount shipped from each supply node (row) to each demand node (column).
    allocation: Dense<F>,
    /// Basis of the final basic solution; may contain cells with a zero allocation.
    basis: Basis,
    /// Potentials proving optimality (as far as they could be determined).
    potentials: Potentials<F>,
    /// Value of the objective function for this solution.
    total_cost: F,
    /// Number of basis changes done after the initial basic solution was built.
    nr_pivots: usize,
    /// Anything noticed during solving that makes this result suspicious.
    warnings: Vec<Warning>,
}

impl<F: Quantity> Solution<F> {
    /// Create a new `Solution` instance.
    ///
    /// A plain constructor.
    pub fn new(
        allocation: Dense<F>,
        basis: Basis,
        potentials: Potentials<F>,
        total_cost: F,
        nr_pivots: usize,
        warnings: Vec<Warning>,
    ) -> Self {
        Self { allocation, basis, potentials, total_cost, nr_pivots, warnings }
    }

    /// Amount shipped from each supply node (row) to each demand node (column).
    pub fn allocation(&self) -> &Dense<F> {
        &self.allocation
    }

    /// Take the allocation out of this solution.
    pub fn into_allocation(self) -> Dense<F> {
        self.allocation
    }

    /// Basis of the final basic solution.
    pub fn basis(&self) -> &Basis {
        &self.basis
    }

    /// Dual values of the final basis.
    pub fn potentials(&self) -> &Potentials<F> {
        &self.potentials
    }

    /// Sum over all cells of cost times allocation.
    pub fn total_cost(&self) -> F {
        self.total_cost
    }

    /// Number of pivots that were done.
    pub fn nr_pivots(&self) -> usize {
        self.nr_pivots
    }

    /// Warnings raised while solving.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Whether the result should be scrutinized because of a warning.
    pub fn is_flagged(&self) -> bool {
        !self.warnings.is_empty()
    }
}

impl<F: Quantity> Display for Solution<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let nr_columns = self.allocation.nr_columns();

        let header = once(String::new())
            .chain((0..nr_columns).map(|j| format!("D{}", j + 1)))
            .chain(once("supply".to_string()))
            .collect::<Vec<_>>();
        let body = self.allocation.row_sums().into_iter().enumerate()
            .map(|(i, supply)| {
                once(format!("S{}", i + 1))
                    .chain(self.allocation.row(i).iter().map(ToString::to_string))
                    .chain(once(supply.to_string()))
                    .collect::<Vec<_>>()
            });
        let footer = once("demand".to_string())
            .chain(self.allocation.column_sums().iter().map(ToString::to_string))
            .collect::<Vec<_>>();
        let table = once(header).chain(body).chain(once(footer)).collect::<Vec<_>>();

        let width = table.iter().flatten().map(String::len).max().unwrap_or(0);
        for line in &table {
            let text = line.iter().map(|cell| format!("{:>width$}", cell, width = width)).join(" ");
            writeln!(f, "{}", text.trim_end())?;
        }
        write!(f, "total cost: {}", self.total_cost)?;

        for warning in &self.warnings {
            write!(f, "\n{}", warning)?;
        }
        Ok(())
    }
}
