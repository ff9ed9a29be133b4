//! Book library
//!
//! Discovers the book sources once at startup and hands out books by short
//! code. Words are parsed lazily, per book, on first access.

mod book;

use std::collections::HashMap;
use std::path::Path;

use glob::Pattern;

use crate::config::Config;
use crate::error::{GntError, Result};
use crate::reference::Passage;
use crate::verse::Verse;

pub use book::Book;

/// Immutable set of discovered books
#[derive(Debug, Default)]
pub struct Library {
    books: Vec<Book>,
    by_code: HashMap<String, usize>,
}

impl Library {
    /// Build from already-constructed books. Short codes must be unique.
    pub fn from_books(books: Vec<Book>) -> Result<Self> {
        let mut by_code: HashMap<String, usize> = HashMap::new();
        for (i, book) in books.iter().enumerate() {
            if let Some(&prev) = by_code.get(book.short_name()) {
                return Err(GntError::DuplicateBook {
                    code: book.short_name().to_string(),
                    first: books[prev].path().to_path_buf(),
                    second: book.path().to_path_buf(),
                });
            }
            by_code.insert(book.short_name().to_string(), i);
        }
        Ok(Self { books, by_code })
    }

    /// Find all sources in `dir` whose file name matches `pattern`.
    ///
    /// Discovery order is file name order. Matching files whose names carry
    /// no number/code are skipped.
    pub fn discover<P: AsRef<Path>>(dir: P, pattern: &str) -> Result<Self> {
        let dir = dir.as_ref();
        let pattern = Pattern::new(pattern)?;

        let entries = std::fs::read_dir(dir).map_err(|source| GntError::Read {
            path: dir.to_path_buf(),
            source,
        })?;
        let mut paths: Vec<_> = entries
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().map(|t| t.is_file()).unwrap_or(false))
            .filter(|e| pattern.matches(&e.file_name().to_string_lossy()))
            .map(|e| e.path())
            .collect();
        paths.sort();

        let mut books = Vec::with_capacity(paths.len());
        for path in paths {
            match Book::from_path(&path) {
                Some(book) => books.push(book),
                None => tracing::warn!("Skipping {}: no book number/code in name", path.display()),
            }
        }

        tracing::info!("Discovered {} books in {}", books.len(), dir.display());
        Self::from_books(books)
    }

    /// Discover books using the configured source directory and pattern
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::discover(&config.source_dir, &config.file_pattern)
    }

    /// Look up a book by short code
    pub fn get(&self, short_name: &str) -> Result<&Book> {
        self.by_code
            .get(short_name)
            .map(|&i| &self.books[i])
            .ok_or_else(|| GntError::BookNotFound(short_name.to_string()))
    }

    /// All books, in discovery order (not necessarily canonical order)
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Concatenate the verses of the named books, in the order given
    pub fn verses_from_books(&self, short_names: &[String]) -> Result<Vec<&Verse>> {
        let mut verses = Vec::new();
        for name in short_names {
            verses.extend(self.get(name)?.verses()?.iter());
        }
        Ok(verses)
    }

    /// Find the verse for a passage, resolving its book through the canonical order
    pub fn find_verse(&self, passage: &Passage, books_in_order: &[String]) -> Result<Option<&Verse>> {
        let code = passage.book_abbrev(books_in_order)?;
        let verses = self.get(code)?.verses()?;
        Ok(verses.iter().find(|v| v.passage() == passage))
    }
}
