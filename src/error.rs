//! Error types for catalog operations.
//!
//! This module provides the [`CatalogError`] type for all catalog operations
//! and the [`Result`] convenience type.

use thiserror::Error;

/// Error type for all catalog operations.
///
/// Represents the error conditions that can occur while creating records,
/// encoding or decoding the delimited line format, or persisting a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Error indicating a record that fails validation: an empty field, a
    /// non-positive year, or a field value containing the record delimiter.
    #[error("Invalid book: {0}")]
    InvalidBook(String),

    /// Error during decoding of a serialized record line.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Error indicating a malformed line in the data file, with its
    /// 1-based line number.
    #[error("Malformed record on line {line}: {reason}")]
    MalformedLine {
        /// 1-based line number within the data file.
        line: usize,
        /// Description of the malformation.
        reason: String,
    },

    /// IO error from the underlying source/destination.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Convenience type alias for [`std::result::Result`] with [`CatalogError`].
pub type Result<T> = std::result::Result<T, CatalogError>;
