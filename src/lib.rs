#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Libris
//!
//! A small library for managing a book catalog in memory with flat-file
//! persistence in a delimited text format, one record per line.
//!
//! ## Quick Start
//!
//! ### Working with the catalog
//!
//! ```
//! use libris::{Book, Catalog, SearchField};
//!
//! let mut catalog = Catalog::new();
//! catalog.add(Book::new("Dune", "Frank Herbert", "SciFi", 1965)?);
//! catalog.add(Book::new("Emma", "Jane Austen", "Romance", 1815)?);
//!
//! // soft delete: the record stays, marked retired
//! catalog.retire("Dune");
//!
//! for book in catalog.find("Austen", SearchField::Author) {
//!     println!("{} ({})", book.title, book.year);
//! }
//! # Ok::<(), libris::CatalogError>(())
//! ```
//!
//! ### Saving and loading
//!
//! ```no_run
//! use libris::Catalog;
//!
//! let mut catalog = Catalog::new();
//! catalog.load()?; // reads library.txt from the working directory
//! catalog.save()?; // overwrites it with the current records
//! # Ok::<(), libris::CatalogError>(())
//! ```
//!
//! ### Streaming records
//!
//! ```
//! use libris::{CatalogReader, RecoveryMode};
//! use std::io::Cursor;
//!
//! let data = "Dune,Herbert,SciFi,1965,1\nnot a record\n";
//! let mut reader = CatalogReader::new(Cursor::new(data))
//!     .with_recovery_mode(RecoveryMode::Lenient);
//!
//! while let Some(book) = reader.read_book()? {
//!     println!("{}", book.title);
//! }
//! assert!(reader.has_recovered());
//! # Ok::<(), libris::CatalogError>(())
//! ```
//!
//! ## Modules
//!
//! - [`book`] — Core record types (`Book`, `Availability`, `BookUpdate`, `SearchField`)
//! - [`catalog`] — The in-memory store and its whole-file save/load
//! - [`csv`] — The delimited line format as pure encode/decode functions
//! - [`reader`] — Streaming record reader with malformed-line recovery
//! - [`writer`] — Streaming record writer
//! - [`error`] — Error types and result type

pub mod book;
pub mod catalog;
pub mod csv;
pub mod error;
pub mod reader;
pub mod writer;

pub use book::{Availability, Book, BookUpdate, SearchField};
pub use catalog::{Catalog, LoadReport, DEFAULT_DATA_FILE};
pub use error::{CatalogError, Result};
pub use reader::{CatalogReader, RecoveryMode};
pub use writer::CatalogWriter;
