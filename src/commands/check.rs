//! Check command
//!
//! Parses every book source and reports word and verse counts. Stops at the
//! first malformed line.

use anyhow::{Context, Result};
use console::style;

use crate::config::Config;
use crate::library::Library;

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Also check that every canonical book has a source
    pub complete: bool,
}

/// Totals from a successful check
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckSummary {
    pub books: usize,
    pub verses: usize,
    pub words: usize,
    pub missing: Vec<String>,
}

/// Parse the whole library
pub fn check_library(library: &Library, config: &Config) -> Result<CheckSummary> {
    let mut summary = CheckSummary::default();

    for book in library.books() {
        let verses = book
            .verses()
            .with_context(|| format!("Failed to load {}", book.short_name()))?;
        summary.books += 1;
        summary.verses += verses.len();
        summary.words += verses.iter().map(|v| v.words().len()).sum::<usize>();
    }

    summary.missing = config
        .books_in_order
        .iter()
        .filter(|code| library.get(code).is_err())
        .cloned()
        .collect();

    Ok(summary)
}

/// Execute the check command
pub fn execute_check(options: CheckOptions, config: &Config) -> Result<()> {
    println!("{} Checking {}...", style("→").cyan(), config.source_dir.display());

    let library = Library::from_config(config)?;
    let summary = check_library(&library, config)?;

    println!(
        "{} {} books, {} verses, {} words",
        style("✓").green(),
        summary.books,
        summary.verses,
        summary.words
    );

    if !summary.missing.is_empty() {
        println!(
            "{} No source for: {}",
            style("⚠").yellow(),
            summary.missing.join(", ")
        );
        if options.complete {
            anyhow::bail!("{} canonical books have no source", summary.missing.len());
        }
    }

    Ok(())
}
