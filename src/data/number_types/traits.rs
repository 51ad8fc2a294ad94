//! # Traits
//!
//! Numbers that shipments and unit costs can be expressed in.
use std::fmt::{Debug, Display};
use std::iter::Sum;

use num_traits::Float;

/// A shipped amount or a unit cost.
///
/// Automatically implemented for all types satisfying the trait's bounds, which in practice are
/// `f32` and `f64`.
pub trait Quantity: Float + Sum + Debug + Display + 'static {
    /// Convert a literal constant into this type.
    ///
    /// Meant for tolerances and similar constants, which are representable in all float types.
    /// Should a conversion fail anyway, the machine epsilon of the type is used.
    fn from_literal(value: f64) -> Self {
        Self::from(value).unwrap_or_else(Self::epsilon)
    }
}
impl<T: Float + Sum + Debug + Display + 'static> Quantity for T {}

#[cfg(test)]
mod test {
    use crate::data::number_types::traits::Quantity;

    #[test]
    fn from_literal() {
        assert_eq!(f64::from_literal(1e-6), 1e-6);
        assert_eq!(f32::from_literal(0.5), 0.5f32);
        assert_relative_eq!(f32::from_literal(1e-9), 1e-9f32);
    }
}
