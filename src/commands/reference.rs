//! Ref command
//!
//! Prints the human-readable reference of a passage identifier.

use anyhow::Result;

use crate::config::Config;
use crate::reference::Passage;

/// Options for the ref command
#[derive(Debug, Clone)]
pub struct ReferenceOptions {
    /// Six-digit passage identifier
    pub passage: String,
}

/// Execute the ref command
pub fn execute_reference(options: ReferenceOptions, config: &Config) -> Result<()> {
    let passage: Passage = options.passage.parse()?;
    println!("{}", passage.human_ref(&config.books_in_order)?);
    Ok(())
}
