//! Three supply nodes, three demand nodes, with supplies matching demands one to one.
//!
//! The northwest corner solution is the expensive diagonal with only three positive cells: a
//! degenerate basic solution. Its basis contains two cells with a zero allocation.
use crate::data::linear_algebra::matrix::Dense;
use crate::data::number_types::tolerance::Tolerance;
use crate::data::transportation::TransportationProblem;

pub const OPTIMAL_COST: f64 = 60.;

pub fn problem() -> TransportationProblem<f64> {
    TransportationProblem::from_rows(
        vec![
            vec![5., 1., 1.],
            vec![1., 5., 1.],
            vec![1., 1., 5.],
        ],
        vec![10., 20., 30.],
        vec![10., 20., 30.],
        &Tolerance::default(),
    ).unwrap()
}

pub fn northwest_corner_allocation() -> Dense<f64> {
    Dense::from_rows(vec![
        vec![10., 0., 0.],
        vec![0., 20., 0.],
        vec![0., 0., 30.],
    ]).unwrap()
}

pub fn optimal_allocation() -> Dense<f64> {
    Dense::from_rows(vec![
        vec![0., 0., 10.],
        vec![0., 0., 20.],
        vec![10., 20., 0.],
    ]).unwrap()
}
