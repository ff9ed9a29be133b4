#![forbid(unsafe_code)]

//! # Daily GNT
//!
//! Daily readings from the Greek New Testament, built from the MorphGNT
//! morphologically tagged SBLGNT text.
//!
//! ## Features
//!
//! - **Line parser**: one MorphGNT line becomes a typed [`Word`]
//! - **Lazy library**: books are discovered once and parsed on first use
//! - **Serial reading**: a day-indexed walk through a fixed list of books
//! - **Book groups**: one random verse per named group each day
//! - **Digest**: handlebars-rendered HTML body for the daily message
//!
//! ## Example
//!
//! ```rust,no_run
//! use dgnt::{Config, Library, Selector};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     let library = Library::from_config(&config)?;
//!
//!     let today = chrono::Local::now().date_naive();
//!     let readings = Selector::new(&library, &config).readings_for(today)?;
//!
//!     let html = dgnt::render_digest(&readings, &config.books_in_order, &config.digest)?;
//!     println!("{}", html);
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod config;
pub mod digest;
pub mod error;
pub mod library;
pub mod parse;
pub mod reference;
pub mod select;
pub mod verse;

// Re-exports
pub use config::{BookGroup, Config, DigestConfig, SerialConfig};
pub use digest::{compose_message, human_date, render_digest, DigestContext, DigestRenderer};
pub use error::{GntError, Result};
pub use library::{Book, Library};
pub use parse::{Parsing, PartOfSpeech, Word};
pub use reference::{human_ref, Passage};
pub use select::{serial_index, Reading, ReadingSet, Selection, Selector};
pub use verse::{group_verses, Verse};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
