//! Error types for the data-loader crate.
//!
//! Loading a catalogue is the only fallible operation in this crate.
//! Lookups never fail: a missing title is `None`, not an error.

use thiserror::Error;

/// Errors that can occur while loading and validating a film catalogue
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// Catalogue file could not be found or opened
    #[error("Failed to open catalogue: {path}")]
    FileNotFound { path: String },

    /// Reading the catalogue failed part way
    #[error("I/O error reading catalogue: {0}")]
    IoError(#[from] std::io::Error),

    /// Line in the catalogue couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// A numeric field had a value outside its documented domain
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Two records share a title once case is ignored
    #[error("Duplicate title in catalogue: {title}")]
    DuplicateTitle { title: String },

    /// A record cannot enter the catalogue
    #[error("Invalid catalogue: {0}")]
    ValidationError(String),
}

/// Type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
