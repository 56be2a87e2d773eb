//! Interactive console front end for the book catalog.
//!
//! A thin menu layer over the `libris` library: it collects and validates
//! user input, maps it onto the public [`Catalog`] API, and renders the
//! results. All catalog state lives in the library; this binary never touches
//! the data file directly.

use anyhow::{bail, Context, Result};
use libris::{Book, BookUpdate, Catalog, CatalogError, SearchField, DEFAULT_DATA_FILE};
use std::io::{self, BufRead, Write};

fn main() -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut catalog = Catalog::new();

    load_catalog(&mut catalog);

    loop {
        print_menu();
        let choice = prompt(&mut input, "Select an option: ")?;
        match choice.as_str() {
            "1" => add_book(&mut input, &mut catalog)?,
            "2" => retire_book(&mut input, &mut catalog)?,
            "3" => find_books(&mut input, &catalog)?,
            "4" => list_books(&mut input, &catalog)?,
            "5" => list_by_year(&catalog),
            "6" => save_catalog(&catalog),
            "7" => load_catalog(&mut catalog),
            "8" => edit_book(&mut input, &mut catalog)?,
            "0" => {
                println!("Goodbye.");
                return Ok(());
            },
            _ => println!("Unrecognized option, try again."),
        }
    }
}

fn print_menu() {
    println!();
    println!("=== Library catalog ===");
    println!("1. Add a book");
    println!("2. Retire a book");
    println!("3. Find books");
    println!("4. List books (optional genre filter)");
    println!("5. List books by year");
    println!("6. Save to {DEFAULT_DATA_FILE}");
    println!("7. Load from {DEFAULT_DATA_FILE}");
    println!("8. Edit a book");
    println!("0. Quit");
}

fn add_book<R: BufRead>(input: &mut R, catalog: &mut Catalog) -> Result<()> {
    let title = prompt_field(input, "Title: ")?;
    let author = prompt_field(input, "Author: ")?;
    let genre = prompt_field(input, "Genre: ")?;
    let year = prompt_year(input)?;

    match Book::new(title, author, genre, year) {
        Ok(book) => {
            catalog.add(book);
            println!("Book added.");
        },
        Err(e) => println!("Could not add the book: {e}"),
    }
    Ok(())
}

fn retire_book<R: BufRead>(input: &mut R, catalog: &mut Catalog) -> Result<()> {
    let title = prompt_nonempty(input, "Title to retire: ")?;
    if catalog.retire(&title) {
        println!("Book retired.");
    } else {
        println!("No book titled '{title}'.");
    }
    Ok(())
}

fn find_books<R: BufRead>(input: &mut R, catalog: &Catalog) -> Result<()> {
    let keyword = prompt_nonempty(input, "Keyword: ")?;
    let field = loop {
        let name = prompt(input, "Search by [title/author/genre] (default title): ")?;
        if name.is_empty() {
            break SearchField::default();
        }
        match name.parse::<SearchField>() {
            Ok(field) => break field,
            Err(_) => println!("Choose title, author, or genre."),
        }
    };

    let found = catalog.find(&keyword, field);
    if found.is_empty() {
        println!("No books match.");
    } else {
        println!("Found {} book(s):", found.len());
        print_books(&found);
    }
    Ok(())
}

fn list_books<R: BufRead>(input: &mut R, catalog: &Catalog) -> Result<()> {
    let genre = prompt(input, "Genre filter (blank for all): ")?;
    let filter = if genre.is_empty() {
        None
    } else {
        Some(genre.as_str())
    };

    let books = catalog.list(filter);
    if books.is_empty() {
        println!("No books to list.");
    } else {
        print_books(&books);
    }
    Ok(())
}

fn list_by_year(catalog: &Catalog) {
    let books = catalog.sorted_by_year();
    if books.is_empty() {
        println!("No books to list.");
    } else {
        print_books(&books);
    }
}

fn save_catalog(catalog: &Catalog) {
    match catalog.save() {
        Ok(()) => println!("Saved {} book(s) to {DEFAULT_DATA_FILE}.", catalog.len()),
        Err(e) => println!("Could not save: {e}"),
    }
}

fn load_catalog(catalog: &mut Catalog) {
    match catalog.load() {
        Ok(count) => println!("Loaded {count} book(s) from {DEFAULT_DATA_FILE}."),
        Err(CatalogError::IoError(e)) if e.kind() == io::ErrorKind::NotFound => {
            println!("No data file found, starting with an empty catalog.");
        },
        Err(e @ CatalogError::MalformedLine { .. }) => {
            println!("{e}.");
            match catalog.load_from_path_lenient(DEFAULT_DATA_FILE) {
                Ok(report) => {
                    println!(
                        "Loaded {} book(s); skipped {} malformed line(s):",
                        report.loaded,
                        report.skipped.len()
                    );
                    for message in &report.skipped {
                        println!("  {message}");
                    }
                },
                Err(e) => println!("Could not load {DEFAULT_DATA_FILE}: {e}"),
            }
        },
        Err(e) => println!("Could not load {DEFAULT_DATA_FILE}: {e}"),
    }
}

fn edit_book<R: BufRead>(input: &mut R, catalog: &mut Catalog) -> Result<()> {
    let title = prompt_nonempty(input, "Title to edit: ")?;
    let Some(current) = catalog.iter().find(|b| b.title == title).cloned() else {
        println!("No book titled '{title}'.");
        return Ok(());
    };

    println!(
        "Editing '{}'. Leave a field blank to keep its current value.",
        current.title
    );
    let mut update = BookUpdate::new();
    if let Some(new_title) = prompt_optional_field(input, &format!("Title [{}]: ", current.title))? {
        update = update.title(new_title);
    }
    if let Some(author) = prompt_optional_field(input, &format!("Author [{}]: ", current.author))? {
        update = update.author(author);
    }
    if let Some(genre) = prompt_optional_field(input, &format!("Genre [{}]: ", current.genre))? {
        update = update.genre(genre);
    }
    loop {
        let value = prompt(input, &format!("Year [{}]: ", current.year))?;
        if value.is_empty() {
            break;
        }
        match value.parse::<i32>() {
            Ok(year) if year > 0 => {
                update = update.year(year);
                break;
            },
            _ => println!("Enter a positive integer year or leave blank."),
        }
    }

    if catalog.update(&title, &update) {
        println!("Book updated.");
    } else {
        println!("No book titled '{title}'.");
    }
    Ok(())
}

/// Print a prompt and read one trimmed line.
fn prompt<R: BufRead>(input: &mut R, message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    let bytes_read = input
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    if bytes_read == 0 {
        bail!("input stream closed");
    }
    Ok(line.trim().to_string())
}

/// Re-prompt until the value is non-empty.
fn prompt_nonempty<R: BufRead>(input: &mut R, message: &str) -> Result<String> {
    loop {
        let value = prompt(input, message)?;
        if value.is_empty() {
            println!("The value must not be empty.");
        } else {
            return Ok(value);
        }
    }
}

/// Re-prompt until the value is non-empty and free of the record delimiter.
fn prompt_field<R: BufRead>(input: &mut R, message: &str) -> Result<String> {
    loop {
        let value = prompt_nonempty(input, message)?;
        if value.contains(',') {
            println!("The value must not contain a comma.");
        } else {
            return Ok(value);
        }
    }
}

/// Like [`prompt_field`], but a blank input means "keep the current value".
fn prompt_optional_field<R: BufRead>(input: &mut R, message: &str) -> Result<Option<String>> {
    loop {
        let value = prompt(input, message)?;
        if value.is_empty() {
            return Ok(None);
        }
        if value.contains(',') {
            println!("The value must not contain a comma.");
        } else {
            return Ok(Some(value));
        }
    }
}

fn prompt_year<R: BufRead>(input: &mut R) -> Result<i32> {
    loop {
        let value = prompt(input, "Year: ")?;
        match value.parse::<i32>() {
            Ok(year) if year > 0 => return Ok(year),
            _ => println!("Enter a positive integer year."),
        }
    }
}

fn print_books(books: &[Book]) {
    println!("{:-<78}", "");
    println!(
        "{:<28} {:<22} {:<12} {:>6}  {}",
        "Title", "Author", "Genre", "Year", "Status"
    );
    println!("{:-<78}", "");
    for book in books {
        let status = if book.is_available() {
            "available"
        } else {
            "retired"
        };
        println!(
            "{:<28} {:<22} {:<12} {:>6}  {}",
            book.title, book.author, book.genre, book.year, status
        );
    }
}
