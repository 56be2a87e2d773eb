//! Reading catalog records from line-oriented text streams.
//!
//! This module provides [`CatalogReader`] for reading delimited book records
//! from any source that implements [`std::io::BufRead`], one record per line.
//!
//! # Examples
//!
//! Reading records from a buffer:
//!
//! ```
//! use libris::CatalogReader;
//! use std::io::Cursor;
//!
//! let data = "Dune,Herbert,SciFi,1965,1\nEmma,Austen,Romance,1815,1\n";
//! let mut reader = CatalogReader::new(Cursor::new(data));
//!
//! while let Some(book) = reader.read_book()? {
//!     println!("{} ({})", book.title, book.year);
//! }
//! assert_eq!(reader.books_read(), 2);
//! # Ok::<(), libris::CatalogError>(())
//! ```

use crate::book::Book;
use crate::csv;
use crate::error::{CatalogError, Result};
use std::io::BufRead;

/// Strategy for handling malformed record lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecoveryMode {
    /// Strict mode: fail on the first malformed line (default).
    #[default]
    Strict,
    /// Lenient mode: skip malformed lines and record a message for each.
    Lenient,
}

/// Reader for the delimited catalog text format.
///
/// `CatalogReader` reads one record at a time from any source implementing
/// [`std::io::BufRead`]. Blank lines are ignored. How malformed lines are
/// handled depends on the [`RecoveryMode`]:
///
/// - [`RecoveryMode::Strict`] returns [`CatalogError::MalformedLine`] carrying
///   the 1-based line number.
/// - [`RecoveryMode::Lenient`] skips the line, records a recovery message
///   retrievable from [`recovery_messages`](CatalogReader::recovery_messages),
///   and keeps reading.
#[derive(Debug)]
pub struct CatalogReader<R: BufRead> {
    reader: R,
    recovery_mode: RecoveryMode,
    line_number: usize,
    books_read: usize,
    recovery_messages: Vec<String>,
}

impl<R: BufRead> CatalogReader<R> {
    /// Create a new reader in strict mode.
    pub fn new(reader: R) -> Self {
        CatalogReader {
            reader,
            recovery_mode: RecoveryMode::Strict,
            line_number: 0,
            books_read: 0,
            recovery_messages: Vec::new(),
        }
    }

    /// Set the recovery mode for handling malformed lines.
    ///
    /// # Examples
    ///
    /// ```
    /// use libris::{CatalogReader, RecoveryMode};
    /// use std::io::Cursor;
    ///
    /// let reader = CatalogReader::new(Cursor::new(""))
    ///     .with_recovery_mode(RecoveryMode::Lenient);
    /// ```
    #[must_use]
    pub fn with_recovery_mode(mut self, mode: RecoveryMode) -> Self {
        self.recovery_mode = mode;
        self
    }

    /// Read the next record.
    ///
    /// Returns `Ok(Some(book))` if a record was read, `Ok(None)` at end of
    /// input.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MalformedLine`] in strict mode when a line
    /// cannot be decoded, or [`CatalogError::IoError`] if reading fails.
    pub fn read_book(&mut self) -> Result<Option<Book>> {
        let mut line = String::new();
        loop {
            line.clear();
            let bytes_read = self.reader.read_line(&mut line)?;
            if bytes_read == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            let trimmed = line.trim_end_matches(['\n', '\r']);
            if trimmed.is_empty() {
                continue;
            }

            match csv::book_from_line(trimmed) {
                Ok(book) => {
                    self.books_read += 1;
                    return Ok(Some(book));
                },
                Err(e) => {
                    let reason = match e {
                        CatalogError::ParseError(msg) => msg,
                        other => other.to_string(),
                    };
                    match self.recovery_mode {
                        RecoveryMode::Strict => {
                            return Err(CatalogError::MalformedLine {
                                line: self.line_number,
                                reason,
                            });
                        },
                        RecoveryMode::Lenient => {
                            self.recovery_messages
                                .push(format!("line {}: {reason}", self.line_number));
                        },
                    }
                },
            }
        }
    }

    /// Read all remaining records.
    ///
    /// # Errors
    ///
    /// Returns the first error from [`read_book`](CatalogReader::read_book).
    pub fn read_all(&mut self) -> Result<Vec<Book>> {
        let mut books = Vec::new();
        while let Some(book) = self.read_book()? {
            books.push(book);
        }
        Ok(books)
    }

    /// Number of records successfully read so far.
    #[must_use]
    pub fn books_read(&self) -> usize {
        self.books_read
    }

    /// Whether any malformed lines were skipped in lenient mode.
    #[must_use]
    pub fn has_recovered(&self) -> bool {
        !self.recovery_messages.is_empty()
    }

    /// Messages describing the malformed lines skipped in lenient mode.
    #[must_use]
    pub fn recovery_messages(&self) -> &[String] {
        &self.recovery_messages
    }
}
