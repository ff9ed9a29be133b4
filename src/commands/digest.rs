//! Digest command
//!
//! Renders the daily digest body, optionally with mail headers.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use console::style;

use crate::config::Config;
use crate::digest::{compose_message, human_date, render_digest};
use crate::library::Library;
use crate::select::Selector;

use super::resolve_date;

/// Options for the digest command
#[derive(Debug, Clone, Default)]
pub struct DigestOptions {
    /// Date to select for (default: today)
    pub date: Option<NaiveDate>,
    /// Prefix From/To/Subject headers
    pub headers: bool,
    /// Write to this file instead of stdout
    pub output: Option<PathBuf>,
}

/// Execute the digest command
pub fn execute_digest(options: DigestOptions, config: &Config) -> Result<()> {
    let today = resolve_date(options.date);
    let library = Library::from_config(config)?;
    let set = Selector::new(&library, config).readings_for(today)?;

    let body = render_digest(&set, &config.books_in_order, &config.digest)
        .context("Failed to render digest")?;

    let output = if options.headers {
        let date = human_date(today, config.digest.date_offset_days, &config.digest.date_format)?;
        compose_message(&config.digest, &date, &body)
    } else {
        body
    };

    match options.output {
        Some(path) => {
            std::fs::write(&path, output)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("{} Digest written to {}", style("✓").green(), path.display());
        }
        None => println!("{}", output),
    }

    if set.failures() > 0 {
        eprintln!(
            "{} {} reading(s) could not be selected",
            style("⚠").yellow(),
            set.failures()
        );
    }

    Ok(())
}
