use std::path::Path;
use std::process::exit;

use clap::{Parser, ValueEnum};

use transportation_simplex::algorithm::SolveTransportation;
use transportation_simplex::algorithm::transportation::{Config, DegeneracyHandling};
use transportation_simplex::algorithm::transportation::initial::least_cost::LeastCost;
use transportation_simplex::algorithm::transportation::initial::northwest_corner::NorthwestCorner;
use transportation_simplex::algorithm::transportation::initial::vogel::Vogel;
use transportation_simplex::algorithm::transportation::strategy::pivot_rule::{FirstNegative, MostNegative};
use transportation_simplex::data::number_types::tolerance::{DEFAULT_BALANCE_TOLERANCE, DEFAULT_ZERO_TOLERANCE, Tolerance};
use transportation_simplex::io::import;

/// A transportation problem solver written in rust.
#[derive(Parser)]
#[command(version, about)]
struct Opts {
    /// File containing the cost table with supplies and demands
    problem_file: String,
    /// Method used to build the initial basic feasible solution
    #[arg(long, value_enum, default_value_t = Initial::Northwest)]
    initial: Initial,
    /// Rule used to select the cell entering the basis
    #[arg(long, value_enum, default_value_t = Rule::MostNegative)]
    rule: Rule,
    /// Maximum number of pivots, derived from the problem size if not given
    #[arg(long)]
    max_iterations: Option<usize>,
    /// Cells that make up the basis between pivots
    #[arg(long, value_enum, default_value_t = Degeneracy::KeepZeroBasics)]
    degeneracy: Degeneracy,
    /// Accepted relative difference between total supply and total demand
    #[arg(long, default_value_t = DEFAULT_BALANCE_TOLERANCE)]
    balance_tolerance: f64,
    /// Values at most this far from zero are treated as zero
    #[arg(long, default_value_t = DEFAULT_ZERO_TOLERANCE)]
    zero_tolerance: f64,
}

#[derive(Copy, Clone, ValueEnum)]
enum Initial {
    Northwest,
    LeastCost,
    Vogel,
}

#[derive(Copy, Clone, ValueEnum)]
enum Rule {
    MostNegative,
    FirstNegative,
}

#[derive(Copy, Clone, ValueEnum)]
enum Degeneracy {
    KeepZeroBasics,
    PositiveSupport,
}

fn main() {
    env_logger::init();
    let opts = Opts::parse();

    let tolerance = Tolerance::new(opts.balance_tolerance, opts.zero_tolerance);
    let path = Path::new(&opts.problem_file);
    println!("Reading problem file: \"{}\"...", path.to_string_lossy());

    let problem = match import(path, &tolerance) {
        Ok(problem) => problem,
        Err(error) => {
            eprintln!("Couldn't read the problem: {}", error);
            exit(1);
        },
    };

    let config = Config {
        tolerance,
        max_iterations: opts.max_iterations,
        degeneracy: match opts.degeneracy {
            Degeneracy::KeepZeroBasics => DegeneracyHandling::KeepZeroBasics,
            Degeneracy::PositiveSupport => DegeneracyHandling::PositiveSupport,
        },
    };

    println!("Solving...");
    let result = match (opts.initial, opts.rule) {
        (Initial::Northwest, Rule::MostNegative) => problem.solve_with::<NorthwestCorner, MostNegative>(&config),
        (Initial::Northwest, Rule::FirstNegative) => problem.solve_with::<NorthwestCorner, FirstNegative>(&config),
        (Initial::LeastCost, Rule::MostNegative) => problem.solve_with::<LeastCost, MostNegative>(&config),
        (Initial::LeastCost, Rule::FirstNegative) => problem.solve_with::<LeastCost, FirstNegative>(&config),
        (Initial::Vogel, Rule::MostNegative) => problem.solve_with::<Vogel, MostNegative>(&config),
        (Initial::Vogel, Rule::FirstNegative) => problem.solve_with::<Vogel, FirstNegative>(&config),
    };

    match result {
        Ok(solution) => {
            println!("Solution computed after {} pivots:", solution.nr_pivots());
            println!("{}", solution);
        },
        Err(error) => {
            eprintln!("Couldn't solve the problem: {}", error);
            exit(1);
        },
    }
}
