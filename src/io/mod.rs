//! # Reading of transportation problems
//!
//! Problems are stored as plain text tables. Each supply node is a row of unit costs, one per
//! demand node, followed by its supply. The final row holds the demand of each demand node:
//!
//! ```text
//! # Two warehouses, three shops
//! ,    D1, D2, D3, supply
//! S1,  4,  6,  8,  20
//! S2,  5,  4,  7,  30
//! demand, 15, 25, 10
//! ```
//!
//! Values are separated by commas, semicolons or whitespace and `#` starts a comment. A first line
//! without any number is a header and is skipped, as is a leading label on any line.
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use log::debug;

use crate::data::number_types::tolerance::Tolerance;
use crate::data::number_types::traits::Quantity;
use crate::data::transportation::TransportationProblem;
use crate::io::error::{ImportError, ParseError};

pub mod error;

/// Import a problem from a file.
///
/// Supports the `txt`, `csv`, `tsv` and `tp` extensions, which all share the format described in
/// the module documentation.
///
/// # Arguments
///
/// * `file_path`: Location of the file.
/// * `tolerance`: Used to decide whether the totals of supply and demand are equal.
///
/// # Errors
///
/// When a file extension is unknown, a file cannot be found or read, the table can't be parsed or
/// it doesn't describe a valid balanced problem.
pub fn import<F: Quantity + FromStr>(
    file_path: &Path,
    tolerance: &Tolerance<F>,
) -> Result<TransportationProblem<F>, ImportError> {
    // Choose the right parser before reading anything
    match file_path.extension() {
        Some(extension) => match extension.to_str() {
            Some("txt" | "csv" | "tsv" | "tp") => (),
            Some(extension_string) => return Err(ImportError::FileExtension(format!(
                "Could not recognise file extension \"{}\" of file: {:?}",
                extension_string, file_path
            ))),
            None => return Err(ImportError::FileExtension(format!(
                "Could not convert OsStr to &str, probably invalid unicode: {:?}",
                extension
            ))),
        },
        None => return Err(ImportError::FileExtension(format!(
            "Could not read extension from file path: {:?}",
            file_path
        ))),
    }

    let mut program = String::new();
    File::open(file_path)
        .map_err(ImportError::IO)?
        .read_to_string(&mut program)
        .map_err(ImportError::IO)?;

    parse(&program, tolerance)
}

/// Parse a problem from the text of a table.
///
/// # Arguments
///
/// * `program`: Contents of a file in the format described in the module documentation.
/// * `tolerance`: Used to decide whether the totals of supply and demand are equal.
///
/// # Errors
///
/// A `ParseError` when a value is not a number, rows have the wrong length or there are too few
/// rows. A `ProblemError` when the values don't describe a valid balanced problem.
pub fn parse<F: Quantity + FromStr>(
    program: &str,
    tolerance: &Tolerance<F>,
) -> Result<TransportationProblem<F>, ImportError> {
    let mut rows = Vec::new();
    let mut seen_content = false;
    for (line_number, line) in (1..).zip(program.lines()) {
        let tokens = tokens(line);
        if tokens.is_empty() {
            continue;
        }

        let is_header = !seen_content && tokens.iter().all(|token| token.parse::<F>().is_err());
        seen_content = true;
        if is_header {
            continue;
        }

        let values = match tokens.split_first() {
            Some((label, rest)) if label.parse::<F>().is_err() => rest,
            _ => &tokens[..],
        };
        let values = values.iter()
            .map(|token| token.parse::<F>().map_err(|_| ParseError::with_file_location(
                format!("Could not parse value \"{}\" as a number", token),
                (line_number, line),
            )))
            .collect::<Result<Vec<_>, _>>()?;
        rows.push((line_number, line, values));
    }

    let Some((_, _, demand)) = rows.pop() else {
        return Err(ParseError::new("No rows found").into());
    };
    if rows.is_empty() {
        return Err(ParseError::new("Expected at least one supply row followed by a demand row").into());
    }

    let nr_demand_nodes = demand.len();
    let mut cost = Vec::with_capacity(rows.len());
    let mut supply = Vec::with_capacity(rows.len());
    for (line_number, line, mut values) in rows {
        if values.len() != nr_demand_nodes + 1 {
            return Err(ParseError::with_file_location(
                format!(
                    "Expected {} values ({} costs and a supply), found {}",
                    nr_demand_nodes + 1, nr_demand_nodes, values.len(),
                ),
                (line_number, line),
            ).into());
        }

        supply.extend(values.pop());
        cost.push(values);
    }
    debug!("Read table with {} supply and {} demand nodes", supply.len(), nr_demand_nodes);

    Ok(TransportationProblem::from_rows(cost, supply, demand, tolerance)?)
}

/// Split a line into its tokens, ignoring comments.
fn tokens(line: &str) -> Vec<&str> {
    let content = match line.split_once('#') {
        Some((content, _comment)) => content,
        None => line,
    };

    content
        .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .collect()
}

#[cfg(test)]
mod test {
    use crate::data::number_types::tolerance::Tolerance;
    use crate::data::transportation::error::ProblemError;
    use crate::io::error::ImportError;
    use crate::io::{parse, tokens};
    use crate::tests::problem_1;

    #[test]
    fn split_tokens() {
        assert_eq!(tokens("S1, 4; 6\t8  20 # comment, 5"), vec!["S1", "4", "6", "8", "20"]);
        assert!(tokens("   # only a comment").is_empty());
        assert!(tokens(",,;").is_empty());
    }

    #[test]
    fn plain() {
        let program = "\
4 6 8 20
5 4 7 30
15 25 10
";
        assert_eq!(parse::<f64>(program, &Tolerance::default()).unwrap(), problem_1::problem());
    }

    #[test]
    fn labels_header_and_comments() {
        let program = "\
# Two warehouses, three shops
,    D1, D2, D3, supply

S1,  4,  6,  8,  20
S2;  5;  4;  7;  30   # semicolons work too
demand, 15, 25, 10
";
        assert_eq!(parse::<f64>(program, &Tolerance::default()).unwrap(), problem_1::problem());
    }

    #[test]
    fn bad_value() {
        let program = "4 6 8 20\n5 four 7 30\n15 25 10\n";
        match parse::<f64>(program, &Tolerance::default()) {
            Err(ImportError::Parse(error)) => assert_eq!(error.line_number(), Some(2)),
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn wrong_row_length() {
        let program = "4 6 8 20\n5 4 30\n15 25 10\n";
        match parse::<f64>(program, &Tolerance::default()) {
            Err(ImportError::Parse(error)) => assert_eq!(error.line_number(), Some(2)),
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn too_few_rows() {
        assert!(matches!(parse::<f64>("", &Tolerance::default()), Err(ImportError::Parse(_))));
        assert!(matches!(parse::<f64>("15 25 10", &Tolerance::default()), Err(ImportError::Parse(_))));
    }

    #[test]
    fn unbalanced() {
        let program = "4 6 8 20\n5 4 7 30\n15 25 11\n";
        assert!(matches!(
            parse::<f64>(program, &Tolerance::default()),
            Err(ImportError::Problem(ProblemError::Balance(_))),
        ));
    }
}
