//! Init command
//!
//! Writes a config file holding the default reading setup, ready for editing.

use std::path::PathBuf;

use anyhow::{bail, Result};
use console::style;

use crate::config::Config;

/// Options for the init command
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Config file to write
    pub path: PathBuf,
    /// Overwrite an existing file
    pub force: bool,
    /// Book source directory to record
    pub source_dir: Option<PathBuf>,
}

/// Execute the init command
pub fn execute_init(options: InitOptions) -> Result<()> {
    if options.path.exists() && !options.force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            options.path.display()
        );
    }

    let mut config = Config::default();
    if let Some(dir) = options.source_dir {
        config.source_dir = dir;
    }

    config.save(&options.path)?;
    println!("{} Created {}", style("✓").green(), options.path.display());
    println!("  Book sources: {}", config.source_dir.display());
    println!("  Book groups: {}", config.book_groups.len());

    Ok(())
}
