//! The in-memory book catalog and its persistence operations.
//!
//! [`Catalog`] is the exclusive owner of all [`Book`] records: it locates,
//! adds, retires, edits, and persists them. Records are kept in insertion
//! order; queries return copies, never views, and the stored order is never
//! reordered in place.
//!
//! # Examples
//!
//! ```
//! use libris::{Book, BookUpdate, Catalog, SearchField};
//!
//! let mut catalog = Catalog::new();
//! catalog.add(Book::new("Dune", "Frank Herbert", "SciFi", 1965)?);
//! catalog.add(Book::new("Emma", "Jane Austen", "Romance", 1815)?);
//!
//! assert!(catalog.retire("Dune"));
//! assert!(catalog.update("Emma", &BookUpdate::new().year(1816)));
//!
//! let hits = catalog.find("Herbert", SearchField::Author);
//! assert_eq!(hits.len(), 1);
//! assert!(!hits[0].is_available());
//! # Ok::<(), libris::CatalogError>(())
//! ```

use crate::book::{Book, BookUpdate, SearchField};
use crate::error::Result;
use crate::reader::{CatalogReader, RecoveryMode};
use crate::writer::CatalogWriter;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Default data-file name, relative to the process working directory.
pub const DEFAULT_DATA_FILE: &str = "library.txt";

/// Outcome of a lenient load: how many records were loaded and which lines
/// were skipped as malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// Number of records loaded into the catalog.
    pub loaded: usize,
    /// One message per skipped line, each carrying its 1-based line number.
    pub skipped: Vec<String>,
}

/// An ordered, in-memory collection of book records with whole-file
/// persistence.
///
/// The catalog holds its records as owned state; create as many independent
/// instances as needed. Lookups by title match the first record whose title
/// equals the query — no field is enforced unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Append a record to the end of the collection.
    pub fn add(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Retire the first record whose title exactly equals `title`.
    ///
    /// This is a soft delete: the record stays in the catalog with its
    /// availability set to retired. Returns `false` when no record matches.
    /// Retiring an already retired record succeeds again.
    pub fn retire(&mut self, title: &str) -> bool {
        match self.books.iter_mut().find(|b| b.title == title) {
            Some(book) => {
                book.retire();
                true
            },
            None => false,
        }
    }

    /// Find all records whose chosen field contains `keyword`.
    ///
    /// The match is a case-sensitive substring match, runs over every record
    /// including retired ones, and returns matches in insertion order as a
    /// copied sequence. An empty result means no matches.
    #[must_use]
    pub fn find(&self, keyword: &str, field: SearchField) -> Vec<Book> {
        self.books
            .iter()
            .filter(|book| book.field(field).contains(keyword))
            .cloned()
            .collect()
    }

    /// All records ordered by ascending year, as a copy.
    ///
    /// The sort is stable: records with equal years keep their insertion
    /// order. The catalog's own order is untouched.
    #[must_use]
    pub fn sorted_by_year(&self) -> Vec<Book> {
        let mut sorted = self.books.clone();
        sorted.sort_by_key(|book| book.year);
        sorted
    }

    /// Apply a partial update to the first record whose title exactly equals
    /// `title`.
    ///
    /// Fields left `None` in the update keep their current values. Returns
    /// `false` when no record matches.
    pub fn update(&mut self, title: &str, update: &BookUpdate) -> bool {
        match self.books.iter_mut().find(|b| b.title == title) {
            Some(book) => {
                update.apply_to(book);
                true
            },
            None => false,
        }
    }

    /// All records, optionally restricted to an exact genre match.
    ///
    /// `None` lists every record. Retired records are included either way,
    /// distinguishable by their availability.
    #[must_use]
    pub fn list(&self, genre_filter: Option<&str>) -> Vec<Book> {
        self.books
            .iter()
            .filter(|book| genre_filter.map_or(true, |genre| book.genre == genre))
            .cloned()
            .collect()
    }

    /// The records in insertion order.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Iterate over the records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.books.iter()
    }

    /// Number of records, retired ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the catalog holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Save every record to [`DEFAULT_DATA_FILE`], overwriting it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn save(&self) -> Result<()> {
        self.save_to_path(DEFAULT_DATA_FILE)
    }

    /// Save every record to `path`, one line each, overwriting any existing
    /// file. Retired records are written too.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = CatalogWriter::new(BufWriter::new(file));
        writer.write_books(&self.books)?;
        writer.flush()
    }

    /// Replace the collection with the contents of [`DEFAULT_DATA_FILE`].
    ///
    /// # Errors
    ///
    /// See [`load_from_path`](Catalog::load_from_path).
    pub fn load(&mut self) -> Result<usize> {
        self.load_from_path(DEFAULT_DATA_FILE)
    }

    /// Replace the collection with the contents of `path`, strictly.
    ///
    /// Returns the number of records loaded. The whole file is parsed before
    /// the in-memory collection is replaced, so on any error the prior
    /// collection is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::IoError`] if the file cannot be opened, or
    /// [`CatalogError::MalformedLine`] on the first undecodable line. A
    /// missing file surfaces with [`std::io::ErrorKind::NotFound`], distinct
    /// from a successful empty load.
    ///
    /// [`CatalogError::IoError`]: crate::CatalogError::IoError
    /// [`CatalogError::MalformedLine`]: crate::CatalogError::MalformedLine
    pub fn load_from_path<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let file = File::open(path)?;
        let mut reader = CatalogReader::new(BufReader::new(file));
        let books = reader.read_all()?;
        self.books = books;
        Ok(self.books.len())
    }

    /// Replace the collection with the contents of `path`, skipping
    /// malformed lines.
    ///
    /// Each skipped line is reported in the returned [`LoadReport`] with its
    /// 1-based line number.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::IoError`] if the file cannot be opened or
    /// read; the prior collection is left untouched.
    ///
    /// [`CatalogError::IoError`]: crate::CatalogError::IoError
    pub fn load_from_path_lenient<P: AsRef<Path>>(&mut self, path: P) -> Result<LoadReport> {
        let file = File::open(path)?;
        let mut reader =
            CatalogReader::new(BufReader::new(file)).with_recovery_mode(RecoveryMode::Lenient);
        let books = reader.read_all()?;
        self.books = books;
        Ok(LoadReport {
            loaded: self.books.len(),
            skipped: reader.recovery_messages().to_vec(),
        })
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::Availability;

    fn sample_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add(Book::new("Dune", "Frank Herbert", "SciFi", 1965).unwrap());
        catalog.add(Book::new("Emma", "Jane Austen", "Romance", 1815).unwrap());
        catalog.add(Book::new("Hyperion", "Dan Simmons", "SciFi", 1989).unwrap());
        catalog
    }

    #[test]
    fn test_add_then_find() {
        let mut catalog = Catalog::new();
        let book = Book::new("Dune", "Frank Herbert", "SciFi", 1965).unwrap();
        catalog.add(book.clone());

        let hits = catalog.find("Dune", SearchField::Title);
        assert_eq!(hits, vec![book]);
    }

    #[test]
    fn test_find_is_substring_and_case_sensitive() {
        let catalog = sample_catalog();
        assert_eq!(catalog.find("Her", SearchField::Author).len(), 1);
        assert_eq!(catalog.find("her", SearchField::Author).len(), 0);
        assert_eq!(catalog.find("SciFi", SearchField::Genre).len(), 2);
    }

    #[test]
    fn test_find_includes_retired_records() {
        let mut catalog = sample_catalog();
        catalog.retire("Dune");
        let hits = catalog.find("Dune", SearchField::Title);
        assert_eq!(hits.len(), 1);
        assert!(!hits[0].is_available());
    }

    #[test]
    fn test_retire_keeps_record_in_list() {
        let mut catalog = sample_catalog();
        assert!(catalog.retire("Dune"));

        let all = catalog.list(None);
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].availability, Availability::Retired);
        assert!(all[1].is_available());

        // soft delete is idempotent on the flag
        assert!(catalog.retire("Dune"));
        assert!(!catalog.list(None)[0].is_available());
    }

    #[test]
    fn test_retire_unknown_title() {
        let mut catalog = sample_catalog();
        let before = catalog.clone();
        assert!(!catalog.retire("no-such-title"));
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_retire_matches_first_of_duplicate_titles() {
        let mut catalog = Catalog::new();
        catalog.add(Book::new("Dune", "Frank Herbert", "SciFi", 1965).unwrap());
        catalog.add(Book::new("Dune", "B. Villeneuve", "Film", 2021).unwrap());

        assert!(catalog.retire("Dune"));
        assert!(!catalog.books()[0].is_available());
        assert!(catalog.books()[1].is_available());
    }

    #[test]
    fn test_sorted_by_year_is_stable_and_non_mutating() {
        let mut catalog = Catalog::new();
        catalog.add(Book::new("First", "A", "G", 1990).unwrap());
        catalog.add(Book::new("Second", "B", "G", 1970).unwrap());
        catalog.add(Book::new("Third", "C", "G", 1990).unwrap());

        let sorted = catalog.sorted_by_year();
        let years: Vec<i32> = sorted.iter().map(|b| b.year).collect();
        assert_eq!(years, vec![1970, 1990, 1990]);
        // equal years keep insertion order
        assert_eq!(sorted[1].title, "First");
        assert_eq!(sorted[2].title, "Third");
        // the stored order is untouched
        assert_eq!(catalog.books()[0].title, "First");
    }

    #[test]
    fn test_update_partial() {
        let mut catalog = sample_catalog();
        assert!(catalog.update("Dune", &BookUpdate::new().author("F. Herbert")));

        let book = &catalog.books()[0];
        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "F. Herbert");
        assert_eq!(book.genre, "SciFi");
        assert_eq!(book.year, 1965);
    }

    #[test]
    fn test_update_can_rename() {
        let mut catalog = sample_catalog();
        assert!(catalog.update("Dune", &BookUpdate::new().title("Dune Messiah").year(1969)));
        assert!(catalog.find("Dune Messiah", SearchField::Title).len() == 1);
        assert!(!catalog.update("Dune", &BookUpdate::new().year(1970)));
    }

    #[test]
    fn test_update_unknown_title() {
        let mut catalog = sample_catalog();
        assert!(!catalog.update("no-such-title", &BookUpdate::new().year(2000)));
    }

    #[test]
    fn test_list_filters_by_exact_genre() {
        let catalog = sample_catalog();
        assert_eq!(catalog.list(None).len(), 3);
        assert_eq!(catalog.list(Some("SciFi")).len(), 2);
        assert_eq!(catalog.list(Some("Romance")).len(), 1);
        assert_eq!(catalog.list(Some("Sci")).len(), 0);
    }

    #[test]
    fn test_len_and_iteration_order() {
        let catalog = sample_catalog();
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());

        let titles: Vec<&str> = catalog.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Dune", "Emma", "Hyperion"]);
    }
}
