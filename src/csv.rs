//! The delimited line format for catalog records.
//!
//! One record per line, five comma-separated fields in fixed order:
//!
//! ```text
//! title,author,genre,year,available
//! ```
//!
//! `available` is the literal `1` (available) or `0` (retired). There is no
//! header line and no quoting or escaping; field values are kept free of the
//! delimiter at record-construction and encode time instead.
//!
//! Encoding and decoding are pure functions (record ↔ line) with no I/O,
//! so the format can be tested independently of the file layer.
//!
//! # Examples
//!
//! ```
//! use libris::{csv, Book};
//!
//! let book = Book::new("Dune", "Frank Herbert", "SciFi", 1965)?;
//! let line = csv::book_to_line(&book)?;
//! assert_eq!(line, "Dune,Frank Herbert,SciFi,1965,1");
//! assert_eq!(csv::book_from_line(&line)?, book);
//! # Ok::<(), libris::CatalogError>(())
//! ```

use crate::book::{Availability, Book};
use crate::error::{CatalogError, Result};

/// Field delimiter within a record line.
pub const DELIMITER: char = ',';

/// Number of fields in a record line.
pub const FIELD_COUNT: usize = 5;

/// Encode a record as a single delimited line, without a trailing newline.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidBook`] if any text field is empty or
/// contains the delimiter or a line break. Records built through
/// [`Book::new`] always encode cleanly; this guards hand-assembled ones.
pub fn book_to_line(book: &Book) -> Result<String> {
    for (name, value) in [
        ("title", &book.title),
        ("author", &book.author),
        ("genre", &book.genre),
    ] {
        if value.is_empty() {
            return Err(CatalogError::InvalidBook(format!("{name} must not be empty")));
        }
        if value.contains(DELIMITER) || value.contains('\n') || value.contains('\r') {
            return Err(CatalogError::InvalidBook(format!(
                "{name} must not contain the record delimiter or a line break"
            )));
        }
    }

    Ok(format!(
        "{}{DELIMITER}{}{DELIMITER}{}{DELIMITER}{}{DELIMITER}{}",
        book.title,
        book.author,
        book.genre,
        book.year,
        book.availability.as_flag()
    ))
}

/// Decode a single delimited line into a record.
///
/// The line must not include its terminating newline.
///
/// # Errors
///
/// Returns [`CatalogError::ParseError`] if the line does not split into
/// exactly [`FIELD_COUNT`] fields, a text field is empty, the year is not a
/// positive integer, or the availability flag is not `1` or `0`.
pub fn book_from_line(line: &str) -> Result<Book> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() != FIELD_COUNT {
        return Err(CatalogError::ParseError(format!(
            "expected {FIELD_COUNT} comma-separated fields, found {}",
            fields.len()
        )));
    }

    for (name, value) in [
        ("title", fields[0]),
        ("author", fields[1]),
        ("genre", fields[2]),
    ] {
        if value.is_empty() {
            return Err(CatalogError::ParseError(format!("empty {name} field")));
        }
    }

    let year: i32 = fields[3]
        .parse()
        .map_err(|_| CatalogError::ParseError(format!("invalid year '{}'", fields[3])))?;
    if year <= 0 {
        return Err(CatalogError::ParseError(format!(
            "year must be positive, got {year}"
        )));
    }

    let availability = Availability::from_flag(fields[4]).ok_or_else(|| {
        CatalogError::ParseError(format!("invalid availability flag '{}'", fields[4]))
    })?;

    Ok(Book {
        title: fields[0].to_string(),
        author: fields[1].to_string(),
        genre: fields[2].to_string(),
        year,
        availability,
    })
}
