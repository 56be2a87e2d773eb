//! Book record structures and operations.
//!
//! This module provides the core record types for working with catalog entries:
//! - [`Book`] — a single catalog record
//! - [`Availability`] — the record's lifecycle state
//! - [`BookUpdate`] — a partial update applied to an existing record
//! - [`SearchField`] — the searchable fields of a record
//!
//! # Examples
//!
//! Create a record and inspect it:
//!
//! ```
//! use libris::Book;
//!
//! let book = Book::new("Dune", "Frank Herbert", "SciFi", 1965)?;
//! assert!(book.is_available());
//! assert_eq!(book.year, 1965);
//! # Ok::<(), libris::CatalogError>(())
//! ```

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of a [`Book`] record.
///
/// A record starts out `Available` and moves to `Retired` when it is
/// decommissioned. Retired records stay in the catalog; they are never
/// physically removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Availability {
    /// The book is on the shelf.
    #[default]
    Available,
    /// The book has been decommissioned (soft-deleted).
    Retired,
}

impl Availability {
    /// Serialized form of this state: `'1'` for available, `'0'` for retired.
    #[must_use]
    pub fn as_flag(self) -> char {
        match self {
            Availability::Available => '1',
            Availability::Retired => '0',
        }
    }

    /// Parse the serialized `1`/`0` flag. Returns `None` for anything else.
    #[must_use]
    pub fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            "1" => Some(Availability::Available),
            "0" => Some(Availability::Retired),
            _ => None,
        }
    }
}

/// A single book record.
///
/// Field values never contain the record delimiter (`,`) or line breaks;
/// [`Book::new`] rejects them at construction time so that every record can
/// be round-tripped through the delimited line format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Title, the record's human-facing key (not enforced unique).
    pub title: String,
    /// Author name.
    pub author: String,
    /// Genre, also used as the list filter.
    pub genre: String,
    /// Publication year, always positive.
    pub year: i32,
    /// Lifecycle state.
    pub availability: Availability,
}

impl Book {
    /// Create a new available book record.
    ///
    /// # Examples
    ///
    /// ```
    /// use libris::Book;
    ///
    /// let book = Book::new("Emma", "Jane Austen", "Romance", 1815)?;
    /// assert_eq!(book.author, "Jane Austen");
    /// # Ok::<(), libris::CatalogError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidBook`] if any text field is empty or
    /// contains the record delimiter or a line break, or if `year` is not
    /// positive.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        year: i32,
    ) -> Result<Self> {
        let title = title.into();
        let author = author.into();
        let genre = genre.into();

        validate_text_field("title", &title)?;
        validate_text_field("author", &author)?;
        validate_text_field("genre", &genre)?;
        if year <= 0 {
            return Err(CatalogError::InvalidBook(format!(
                "year must be positive, got {year}"
            )));
        }

        Ok(Book {
            title,
            author,
            genre,
            year,
            availability: Availability::Available,
        })
    }

    /// Whether the book is currently available.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.availability == Availability::Available
    }

    /// Mark the book as retired. Idempotent.
    pub fn retire(&mut self) {
        self.availability = Availability::Retired;
    }

    /// The value of the given searchable field.
    #[must_use]
    pub fn field(&self, field: SearchField) -> &str {
        match field {
            SearchField::Title => &self.title,
            SearchField::Author => &self.author,
            SearchField::Genre => &self.genre,
        }
    }
}

fn validate_text_field(name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(CatalogError::InvalidBook(format!("{name} must not be empty")));
    }
    if value.contains(crate::csv::DELIMITER) || value.contains('\n') || value.contains('\r') {
        return Err(CatalogError::InvalidBook(format!(
            "{name} must not contain the record delimiter or a line break"
        )));
    }
    Ok(())
}

/// A partial update applied to an existing record by [`Catalog::update`].
///
/// Each field is optional; `None` leaves the corresponding record field
/// unchanged. Built fluently:
///
/// ```
/// use libris::BookUpdate;
///
/// let update = BookUpdate::new().author("F. Herbert").year(1966);
/// assert!(update.title.is_none());
/// ```
///
/// [`Catalog::update`]: crate::Catalog::update
#[derive(Debug, Clone, Default)]
pub struct BookUpdate {
    /// Replacement title, if any.
    pub title: Option<String>,
    /// Replacement author, if any.
    pub author: Option<String>,
    /// Replacement genre, if any.
    pub genre: Option<String>,
    /// Replacement year, if any.
    pub year: Option<i32>,
}

impl BookUpdate {
    /// Create an empty update that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        BookUpdate::default()
    }

    /// Set the replacement title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the replacement author.
    #[must_use]
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the replacement genre.
    #[must_use]
    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// Set the replacement year.
    #[must_use]
    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Whether the update changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.genre.is_none() && self.year.is_none()
    }

    /// Apply the update to a record, replacing only the supplied fields.
    pub fn apply_to(&self, book: &mut Book) {
        if let Some(title) = &self.title {
            book.title = title.clone();
        }
        if let Some(author) = &self.author {
            book.author = author.clone();
        }
        if let Some(genre) = &self.genre {
            book.genre = genre.clone();
        }
        if let Some(year) = self.year {
            book.year = year;
        }
    }
}

/// The record fields a catalog search can match against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchField {
    /// Match against the title (the default).
    #[default]
    Title,
    /// Match against the author.
    Author,
    /// Match against the genre.
    Genre,
}

impl SearchField {
    /// Canonical lowercase name of the field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Author => "author",
            SearchField::Genre => "genre",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchField {
    type Err = CatalogError;

    /// Parse a user-entered field name, case-insensitively.
    ///
    /// `"name"` is accepted as an alias for the title field.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "title" | "name" => Ok(SearchField::Title),
            "author" => Ok(SearchField::Author),
            "genre" => Ok(SearchField::Genre),
            other => Err(CatalogError::ParseError(format!(
                "unknown search field '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_book_is_available() {
        let book = Book::new("Dune", "Frank Herbert", "SciFi", 1965).unwrap();
        assert!(book.is_available());
        assert_eq!(book.availability, Availability::Available);
    }

    #[test]
    fn test_new_rejects_empty_fields() {
        assert!(Book::new("", "Author", "Genre", 2000).is_err());
        assert!(Book::new("Title", "", "Genre", 2000).is_err());
        assert!(Book::new("Title", "Author", "", 2000).is_err());
    }

    #[test]
    fn test_new_rejects_non_positive_year() {
        assert!(Book::new("Title", "Author", "Genre", 0).is_err());
        assert!(Book::new("Title", "Author", "Genre", -5).is_err());
    }

    #[test]
    fn test_new_rejects_embedded_delimiter() {
        assert!(Book::new("Dune, Messiah", "Author", "Genre", 1969).is_err());
        assert!(Book::new("Title", "Last, First", "Genre", 2000).is_err());
        assert!(Book::new("Title", "Author", "Sci\nFi", 2000).is_err());
    }

    #[test]
    fn test_retire_is_idempotent() {
        let mut book = Book::new("Dune", "Frank Herbert", "SciFi", 1965).unwrap();
        book.retire();
        assert!(!book.is_available());
        book.retire();
        assert_eq!(book.availability, Availability::Retired);
    }

    #[test]
    fn test_availability_flag_round_trip() {
        assert_eq!(Availability::Available.as_flag(), '1');
        assert_eq!(Availability::Retired.as_flag(), '0');
        assert_eq!(Availability::from_flag("1"), Some(Availability::Available));
        assert_eq!(Availability::from_flag("0"), Some(Availability::Retired));
        assert_eq!(Availability::from_flag("yes"), None);
    }

    #[test]
    fn test_update_applies_only_supplied_fields() {
        let mut book = Book::new("Dune", "Frank Herbert", "SciFi", 1965).unwrap();
        let update = BookUpdate::new().author("F. Herbert");
        update.apply_to(&mut book);
        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "F. Herbert");
        assert_eq!(book.genre, "SciFi");
        assert_eq!(book.year, 1965);
    }

    #[test]
    fn test_empty_update_changes_nothing() {
        let mut book = Book::new("Dune", "Frank Herbert", "SciFi", 1965).unwrap();
        let original = book.clone();
        assert!(BookUpdate::new().is_empty());
        BookUpdate::new().apply_to(&mut book);
        assert_eq!(book, original);
    }

    #[test]
    fn test_search_field_from_str() {
        assert_eq!("title".parse::<SearchField>().unwrap(), SearchField::Title);
        assert_eq!("Name".parse::<SearchField>().unwrap(), SearchField::Title);
        assert_eq!("AUTHOR".parse::<SearchField>().unwrap(), SearchField::Author);
        assert_eq!("genre".parse::<SearchField>().unwrap(), SearchField::Genre);
        assert!("isbn".parse::<SearchField>().is_err());
    }

    #[test]
    fn test_search_field_default_is_title() {
        assert_eq!(SearchField::default(), SearchField::Title);
    }
}
