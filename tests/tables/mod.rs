//! # Problem tables read from disk
//!
//! Small textbook problems stored in the supported text formats.
use std::path::{Path, PathBuf};

/// # Reading and solving
mod test;

/// Relative path of the folder where the problem files are stored.
///
/// The path is relative to the project root folder.
fn problem_file_directory() -> PathBuf {
    Path::new(file!()).parent().unwrap().to_path_buf()
}

/// Compute the path of the problem file, based on its name.
///
/// # Arguments
///
/// * `name`: File name including extension.
///
/// # Return value
///
/// File path relative to the project root folder.
fn get_test_file_path(name: &str) -> PathBuf {
    problem_file_directory().join(name)
}
