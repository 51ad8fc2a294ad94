//! # Error reporting for reading of transportation problem files
//!
//! A collection of enums and structures describing any problems encountered during reading and
//! parsing.
use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::io;

use crate::data::transportation::error::ProblemError;

/// An `ImportError` is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Debug)]
pub enum ImportError {
    /// The file extension of the provided file path is not known or supported.
    ///
    /// The contained `String` is a message for the end user.
    FileExtension(String),
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    IO(io::Error),
    /// Contents of the file could not be parsed into a table of numbers.
    ///
    /// # Note
    ///
    /// If the numbers don't describe a valid problem, that will not be represented with this error.
    /// This variant should only be created for syntactically incorrect files.
    Parse(ParseError),
    /// The table was read, but doesn't describe a valid transportation problem.
    ///
    /// For example, a cost might be negative or supply and demand might not balance.
    Problem(ProblemError),
}

impl Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ImportError::FileExtension(message) => message.fmt(f),
            ImportError::IO(error) => error.fmt(f),
            ImportError::Parse(error) => error.fmt(f),
            ImportError::Problem(error) => error.fmt(f),
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ImportError::FileExtension(_) => None,
            ImportError::IO(error) => Some(error),
            ImportError::Parse(error) => Some(error),
            ImportError::Problem(error) => Some(error),
        }
    }
}

impl From<ParseError> for ImportError {
    fn from(error: ParseError) -> Self {
        ImportError::Parse(error)
    }
}

impl From<ProblemError> for ImportError {
    fn from(error: ProblemError) -> Self {
        ImportError::Problem(error)
    }
}

/// A `ParseError` represents all errors encountered during parsing.
///
/// When the error can be attributed to a single line, the line number and the line itself are
/// included.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ParseError {
    description: String,
    file_location: Option<(u64, String)>,
}

impl ParseError {
    /// Create a new `ParseError` with only a description.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    ///
    /// # Return value
    ///
    /// * A `ParseError` instance without a file location.
    pub fn new(description: impl Into<String>) -> ParseError {
        ParseError { description: description.into(), file_location: None }
    }

    /// Create a new `ParseError` instance with a `FileLocation`.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    /// * `file_location`: A reference to a line number and line that caused the error.
    ///
    /// # Return value
    ///
    /// A new `ParseError` instance with a `FileLocation` cause.
    pub fn with_file_location(
        description: impl Into<String>,
        file_location: FileLocation,
    ) -> ParseError {
        let (line_number, line) = file_location;
        ParseError {
            description: description.into(),
            file_location: Some((line_number, line.to_string())),
        }
    }

    /// Line number (counting from one) at which the error was caused, if known.
    pub fn line_number(&self) -> Option<u64> {
        self.file_location.as_ref().map(|&(line_number, _)| line_number)
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ParseError: {}", self.description)?;
        if let Some((line_number, line)) = &self.file_location {
            write!(f, "\n\tCaused at line\t{}:\t{}", line_number, line)?;
        }

        Ok(())
    }
}

impl Error for ParseError {}

/// A `FileLocation` references a line in the file by the line number of the file as originally
/// read from the disk. It contains a reference to the line itself.
pub type FileLocation<'a> = (u64, &'a str);
