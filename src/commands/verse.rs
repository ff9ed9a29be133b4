//! Verse command
//!
//! Prints one verse by passage identifier.

use anyhow::{anyhow, Result};
use console::style;

use crate::config::Config;
use crate::library::Library;
use crate::reference::Passage;

/// Options for the verse command
#[derive(Debug, Clone)]
pub struct VerseOptions {
    /// Six-digit passage identifier
    pub passage: String,
    /// Show lemma and parsing for each word
    pub parsing: bool,
}

/// Execute the verse command
pub fn execute_verse(options: VerseOptions, config: &Config) -> Result<()> {
    let passage: Passage = options.passage.parse()?;
    let library = Library::from_config(config)?;

    let verse = library
        .find_verse(&passage, &config.books_in_order)?
        .ok_or_else(|| anyhow!("No verse {} in the corpus", passage))?;

    println!(
        "{} {}",
        style(verse.human_ref(&config.books_in_order)?).bold(),
        verse.text()
    );

    if options.parsing {
        println!();
        for word in verse.words() {
            let parsing = if word.parsing.is_empty() {
                String::new()
            } else {
                word.parsing.describe()
            };
            println!(
                "  {:<16} {:<16} {} {}",
                word.text,
                word.lemma,
                style(word.part_of_speech.label()).cyan(),
                style(parsing).dim()
            );
        }
    }

    Ok(())
}
