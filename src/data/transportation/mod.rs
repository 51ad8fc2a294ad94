//! # Transportation problems
//!
//! Goods are shipped from `m` supply nodes to `n` demand nodes. Shipping a unit from supply node
//! `i` to demand node `j` costs `cost[i][j]`. Each supply node ships exactly its supply, each demand
//! node receives exactly its demand, and the total cost is to be minimized.
//!
//! Only balanced problems are represented: total supply equals total demand.
use crate::data::linear_algebra::matrix::Dense;
use crate::data::number_types::tolerance::Tolerance;
use crate::data::number_types::traits::Quantity;
use crate::data::transportation::error::{BalanceError, ProblemError, ValueLocation};

pub mod error;
pub mod solution;

/// A balanced transportation problem.
///
/// Immutable once created; all values are finite and non-negative.
#[derive(Clone, Debug, PartialEq)]
pub struct TransportationProblem<F> {
    /// Unit shipping cost, one row per supply node and one column per demand node.
    cost: Dense<F>,
    /// Amount available at each supply node.
    supply: Vec<F>,
    /// Amount required at each demand node.
    demand: Vec<F>,
}

impl<F: Quantity> TransportationProblem<F> {
    /// Create a new problem, validating the data.
    ///
    /// # Arguments
    ///
    /// * `cost`: Matrix of dimension `supply.len()` x `demand.len()`.
    /// * `supply`: Amount available at each supply node.
    /// * `demand`: Amount required at each demand node.
    /// * `tolerance`: Used to decide whether the totals of `supply` and `demand` are equal.
    ///
    /// # Errors
    ///
    /// Checked in this order: there should be at least one supply and one demand node, the cost
    /// matrix should have matching dimensions, all values should be finite and non-negative and
    /// the totals should be balanced.
    pub fn new(
        cost: Dense<F>,
        supply: Vec<F>,
        demand: Vec<F>,
        tolerance: &Tolerance<F>,
    ) -> Result<Self, ProblemError> {
        if supply.is_empty() || demand.is_empty() {
            return Err(ProblemError::Empty);
        }
        if cost.nr_rows() != supply.len() || cost.nr_columns() != demand.len() {
            return Err(ProblemError::Dimension {
                cost: (cost.nr_rows(), cost.nr_columns()),
                nr_supply_nodes: supply.len(),
                nr_demand_nodes: demand.len(),
            });
        }

        let invalid = cost.iter_indexed()
            .map(|(cell, &value)| (ValueLocation::Cost(cell), value))
            .chain(supply.iter().enumerate().map(|(i, &value)| (ValueLocation::Supply(i), value)))
            .chain(demand.iter().enumerate().map(|(j, &value)| (ValueLocation::Demand(j), value)))
            .find(|&(_, value)| !value.is_finite() || value < F::zero());
        if let Some((location, value)) = invalid {
            return Err(ProblemError::InvalidValue {
                location,
                value: value.to_f64().unwrap_or(f64::NAN),
            });
        }

        let total_supply = supply.iter().copied().sum();
        let total_demand = demand.iter().copied().sum();
        if !tolerance.are_balanced(total_supply, total_demand) {
            return Err(BalanceError::new(total_supply, total_demand).into());
        }

        Ok(Self { cost, supply, demand })
    }

    /// Create a new problem from cost rows.
    ///
    /// See `new`; additionally fails if the cost rows are not all of the same length.
    pub fn from_rows(
        cost: Vec<Vec<F>>,
        supply: Vec<F>,
        demand: Vec<F>,
        tolerance: &Tolerance<F>,
    ) -> Result<Self, ProblemError> {
        Self::new(Dense::from_rows(cost)?, supply, demand, tolerance)
    }

    /// Unit shipping costs.
    pub fn cost(&self) -> &Dense<F> {
        &self.cost
    }

    /// Amount available at each supply node.
    pub fn supply(&self) -> &[F] {
        &self.supply
    }

    /// Amount required at each demand node.
    pub fn demand(&self) -> &[F] {
        &self.demand
    }

    /// Number of supply nodes, `m`.
    pub fn nr_supply_nodes(&self) -> usize {
        self.supply.len()
    }

    /// Number of demand nodes, `n`.
    pub fn nr_demand_nodes(&self) -> usize {
        self.demand.len()
    }

    /// Sum of all supplies.
    pub fn total_supply(&self) -> F {
        self.supply.iter().copied().sum()
    }

    /// Sum of all demands.
    pub fn total_demand(&self) -> F {
        self.demand.iter().copied().sum()
    }

    /// Cost of shipping according to an allocation.
    ///
    /// # Arguments
    ///
    /// * `allocation`: Amount shipped for each supply and demand node pair.
    ///
    /// # Return value
    ///
    /// The sum over all cells of `cost[i][j] * allocation[i][j]`.
    pub fn total_cost(&self, allocation: &Dense<F>) -> F {
        self.cost.inner_product(allocation)
    }

    /// Whether an allocation is non-negative and ships exactly the supplies and demands.
    ///
    /// Row and column sums may deviate by as much as the totals of the problem are allowed to:
    /// `balance * max(1, |total supply|, |total demand|)`.
    pub fn is_feasible(&self, allocation: &Dense<F>, tolerance: &Tolerance<F>) -> bool {
        let scale = self.total_supply().abs().max(self.total_demand().abs()).max(F::one());
        let matches = |sum: F, target: F| (sum - target).abs() <= tolerance.balance * scale;

        allocation.nr_rows() == self.nr_supply_nodes()
            && allocation.nr_columns() == self.nr_demand_nodes()
            && allocation.iter_indexed().all(|(_, &value)| value >= F::zero())
            && allocation.row_sums().into_iter().zip(&self.supply)
                .all(|(sum, &supply)| matches(sum, supply))
            && allocation.column_sums().into_iter().zip(&self.demand)
                .all(|(sum, &demand)| matches(sum, demand))
    }
}
