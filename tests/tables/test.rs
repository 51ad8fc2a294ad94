use std::path::Path;

use approx::assert_relative_eq;

use transportation_simplex::algorithm::error::SolveError;
use transportation_simplex::algorithm::SolveTransportation;
use transportation_simplex::algorithm::transportation::{check_optimality, Config, DegeneracyHandling, Optimality};
use transportation_simplex::algorithm::transportation::initial::vogel::Vogel;
use transportation_simplex::algorithm::transportation::strategy::pivot_rule::FirstNegative;
use transportation_simplex::data::number_types::tolerance::Tolerance;
use transportation_simplex::data::transportation::error::ProblemError;
use transportation_simplex::data::transportation::TransportationProblem;
use transportation_simplex::io::error::ImportError;
use transportation_simplex::io::import;

use super::get_test_file_path;

fn read(name: &str) -> TransportationProblem<f64> {
    import(&get_test_file_path(name), &Tolerance::default()).unwrap()
}

#[test]
fn two_by_three() {
    let problem = read("two_by_three.csv");
    assert_eq!(problem.supply(), &[20., 30.]);
    assert_eq!(problem.demand(), &[15., 25., 10.]);

    let solution = problem.solve(&Config::default()).unwrap();
    assert_relative_eq!(solution.total_cost(), 235.);
    assert_eq!(solution.nr_pivots(), 1);
    assert_eq!(solution.allocation().row(0), &[15., 0., 5.]);
    assert_eq!(solution.allocation().row(1), &[0., 25., 5.]);
    assert!(problem.is_feasible(solution.allocation(), &Tolerance::default()));
}

#[test]
fn textbook() {
    let problem = read("textbook.tsv");
    assert_eq!(problem.nr_supply_nodes(), 3);
    assert_eq!(problem.nr_demand_nodes(), 4);

    let solution = problem.solve_with::<Vogel, FirstNegative>(&Config::default()).unwrap();
    assert_relative_eq!(solution.total_cost(), 743.);
    assert_eq!(
        check_optimality(&problem, solution.basis(), &Tolerance::default()),
        Optimality::Optimal,
    );
}

#[test]
fn degenerate() {
    let problem = read("diagonal.txt");

    let solution = problem.solve(&Config::default()).unwrap();
    assert_relative_eq!(solution.total_cost(), 60.);
    assert!(solution.warnings().is_empty());

    let config = Config { degeneracy: DegeneracyHandling::PositiveSupport, ..Config::default() };
    let solution = problem.solve(&config).unwrap();
    assert_relative_eq!(solution.total_cost(), 300.);
    assert!(solution.is_flagged());
}

#[test]
fn unbalanced() {
    let result = import::<f64>(&get_test_file_path("unbalanced.tp"), &Tolerance::default());
    assert!(matches!(result, Err(ImportError::Problem(ProblemError::Balance(_)))));

    // Accepted with a loose tolerance when reading, rejected by the solver's default one
    let problem = import::<f64>(&get_test_file_path("unbalanced.tp"), &Tolerance::new(0.1, 1e-9)).unwrap();
    assert!(matches!(problem.solve(&Config::default()), Err(SolveError::Balance(_))));
}

#[test]
fn unknown_extension() {
    let result = import::<f64>(Path::new("problem.mps"), &Tolerance::default());
    assert!(matches!(result, Err(ImportError::FileExtension(_))));
}

#[test]
fn missing_file() {
    let result = import::<f64>(&get_test_file_path("does_not_exist.csv"), &Tolerance::default());
    assert!(matches!(result, Err(ImportError::IO(_))));
}
