//! Books command
//!
//! Lists the discovered book sources.

use anyhow::Result;
use console::style;

use crate::config::Config;
use crate::library::Library;

/// Options for the books command
#[derive(Debug, Clone, Default)]
pub struct BooksOptions {
    /// Sort by canonical order instead of discovery order
    pub canonical: bool,
}

/// Execute the books command
pub fn execute_books(options: BooksOptions, config: &Config) -> Result<()> {
    let library = Library::from_config(config)?;

    if library.is_empty() {
        println!(
            "{} No books matching {} in {}",
            style("•").dim(),
            config.file_pattern,
            config.source_dir.display()
        );
        return Ok(());
    }

    let mut books: Vec<_> = library.books().iter().collect();
    if options.canonical {
        // Books missing from the canonical list go last
        books.sort_by_key(|b| {
            config
                .books_in_order
                .iter()
                .position(|c| c == b.short_name())
                .unwrap_or(usize::MAX)
        });
    }

    println!("{} {} books:\n", style("→").cyan(), books.len());
    for book in books {
        let marker = if config.books_in_order.iter().any(|c| c == book.short_name()) {
            style(" ").dim()
        } else {
            style("?").yellow()
        };
        println!(
            "  {} {} {:<4} {}",
            marker,
            book.number(),
            book.short_name(),
            style(book.path().display()).dim()
        );
    }

    Ok(())
}
