//! Writing catalog records to line-oriented text streams.
//!
//! This module provides [`CatalogWriter`] for serializing [`Book`] records
//! to the delimited text format, one record per line, to any destination
//! implementing [`std::io::Write`].
//!
//! # Examples
//!
//! Writing records to a buffer:
//!
//! ```
//! use libris::{Book, CatalogWriter};
//!
//! let mut buffer = Vec::new();
//! let mut writer = CatalogWriter::new(&mut buffer);
//! writer.write_book(&Book::new("Dune", "Herbert", "SciFi", 1965)?)?;
//! writer.flush()?;
//!
//! assert_eq!(buffer, b"Dune,Herbert,SciFi,1965,1\n");
//! # Ok::<(), libris::CatalogError>(())
//! ```

use crate::book::Book;
use crate::csv;
use crate::error::Result;
use std::io::Write;

/// Writer for the delimited catalog text format.
#[derive(Debug)]
pub struct CatalogWriter<W: Write> {
    writer: W,
    books_written: usize,
}

impl<W: Write> CatalogWriter<W> {
    /// Create a new catalog writer over any [`std::io::Write`] destination.
    pub fn new(writer: W) -> Self {
        CatalogWriter {
            writer,
            books_written: 0,
        }
    }

    /// Write a single record followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be encoded or an I/O error
    /// occurs during writing.
    pub fn write_book(&mut self, book: &Book) -> Result<()> {
        let line = csv::book_to_line(book)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.books_written += 1;
        Ok(())
    }

    /// Write a sequence of records in order.
    ///
    /// # Errors
    ///
    /// Returns the first error from [`write_book`](CatalogWriter::write_book);
    /// records after the failing one are not written.
    pub fn write_books(&mut self, books: &[Book]) -> Result<()> {
        for book in books {
            self.write_book(book)?;
        }
        Ok(())
    }

    /// Flush the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing the destination fails.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Number of records written so far.
    #[must_use]
    pub fn books_written(&self) -> usize {
        self.books_written
    }

    /// Consume the writer, returning the underlying destination.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::Availability;

    #[test]
    fn test_write_one_record_per_line() {
        let mut buffer = Vec::new();
        let mut writer = CatalogWriter::new(&mut buffer);
        writer
            .write_book(&Book::new("Dune", "Herbert", "SciFi", 1965).unwrap())
            .unwrap();
        writer
            .write_book(&Book::new("Emma", "Austen", "Romance", 1815).unwrap())
            .unwrap();
        assert_eq!(writer.books_written(), 2);

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, "Dune,Herbert,SciFi,1965,1\nEmma,Austen,Romance,1815,1\n");
    }

    #[test]
    fn test_write_retired_record() {
        let mut book = Book::new("Dune", "Herbert", "SciFi", 1965).unwrap();
        book.retire();

        let mut buffer = Vec::new();
        CatalogWriter::new(&mut buffer).write_book(&book).unwrap();
        assert_eq!(buffer, b"Dune,Herbert,SciFi,1965,0\n");
    }

    #[test]
    fn test_invalid_record_is_not_written() {
        let book = Book {
            title: "a,b".to_string(),
            author: "x".to_string(),
            genre: "y".to_string(),
            year: 1,
            availability: Availability::Available,
        };

        let mut buffer = Vec::new();
        let mut writer = CatalogWriter::new(&mut buffer);
        assert!(writer.write_book(&book).is_err());
        assert_eq!(writer.books_written(), 0);
        assert!(buffer.is_empty());
    }
}
