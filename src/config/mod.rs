//! Configuration
//!
//! Project configuration loading and defaults. Every field has a serde
//! default, so an empty `{}` file (or no file at all) gives the standard
//! daily reading setup.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{GntError, Result};

/// Default config file name
pub const DEFAULT_CONFIG_FILE: &str = ".dgnt.config.json";

/// Reading set key for the serial verse
pub const SERIAL_KEY: &str = "Serial";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding one MorphGNT file per book
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    /// File name pattern (glob syntax) for book sources
    #[serde(default = "default_file_pattern")]
    pub file_pattern: String,

    /// Canonical book order; passage book numbers index into this (1-based)
    #[serde(default = "default_books_in_order")]
    pub books_in_order: Vec<String>,

    /// Named groups for random sampling, in presentation order
    #[serde(default = "default_book_groups")]
    pub book_groups: Vec<BookGroup>,

    /// Serial reading configuration
    #[serde(default)]
    pub serial: SerialConfig,

    /// Digest rendering configuration
    #[serde(default)]
    pub digest: DigestConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            file_pattern: default_file_pattern(),
            books_in_order: default_books_in_order(),
            book_groups: default_book_groups(),
            serial: SerialConfig::default(),
            digest: DigestConfig::default(),
        }
    }
}

impl Config {
    /// Load config from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check that every referenced book code is canonical and group names are usable
    pub fn validate(&self) -> Result<()> {
        let canonical: HashSet<&str> = self.books_in_order.iter().map(String::as_str).collect();
        if canonical.len() != self.books_in_order.len() {
            return Err(GntError::Config("books_in_order contains duplicates".to_string()));
        }

        let mut names = HashSet::new();
        for group in &self.book_groups {
            if group.name == SERIAL_KEY {
                return Err(GntError::Config(format!(
                    "book group name '{}' is reserved",
                    SERIAL_KEY
                )));
            }
            if !names.insert(group.name.as_str()) {
                return Err(GntError::Config(format!(
                    "duplicate book group name '{}'",
                    group.name
                )));
            }
            check_codes(&canonical, &group.name, &group.books)?;
        }

        check_codes(&canonical, SERIAL_KEY, &self.serial.books)
    }
}

fn check_codes(canonical: &HashSet<&str>, owner: &str, codes: &[String]) -> Result<()> {
    match codes.iter().find(|c| !canonical.contains(c.as_str())) {
        Some(code) => Err(GntError::Config(format!(
            "'{}' refers to book '{}' which is not in books_in_order",
            owner, code
        ))),
        None => Ok(()),
    }
}

/// A named set of books used for random sampling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookGroup {
    pub name: String,
    pub books: Vec<String>,
}

impl BookGroup {
    pub fn new(name: &str, books: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            books: books.iter().map(|b| b.to_string()).collect(),
        }
    }
}

/// Day-indexed progression through a fixed list of books
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerialConfig {
    /// Day zero of the progression
    #[serde(default = "default_serial_start")]
    pub start: NaiveDate,

    /// Books read in this order (not canonical order)
    #[serde(default = "default_serial_books")]
    pub books: Vec<String>,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            start: default_serial_start(),
            books: default_serial_books(),
        }
    }
}

/// Digest rendering and message header settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigestConfig {
    /// Handlebars template; the built-in template is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<PathBuf>,

    /// Days added to today for the displayed date
    #[serde(default = "default_date_offset_days")]
    pub date_offset_days: i64,

    /// chrono format string for the displayed date
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Include a per-word lemma/parsing table under each verse
    #[serde(default)]
    pub word_table: bool,

    #[serde(default = "default_subject_prefix")]
    pub subject_prefix: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            template: None,
            date_offset_days: default_date_offset_days(),
            date_format: default_date_format(),
            word_table: false,
            subject_prefix: default_subject_prefix(),
            from: None,
            to: None,
        }
    }
}

fn default_source_dir() -> PathBuf {
    PathBuf::from("sblgnt")
}

fn default_file_pattern() -> String {
    "*-morphgnt.txt".to_string()
}

/// MorphGNT book codes in canonical New Testament order
pub fn default_books_in_order() -> Vec<String> {
    [
        "Mt", "Mk", "Lk", "Jn", "Ac", // Gospels and Acts
        "Ro", "1Co", "2Co", "Ga", "Eph", "Php", "Col", "1Th", "2Th", "1Ti", "2Ti", "Tit", "Phm",
        "Heb", "Jas", "1Pe", "2Pe", "1Jn", "2Jn", "3Jn", "Jud", "Re",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_book_groups() -> Vec<BookGroup> {
    vec![
        BookGroup::new(
            "Luke and Paul",
            &[
                "Lk", "Ac", "Ro", "1Co", "2Co", "Ga", "Eph", "Php", "Col", "1Th", "2Th", "1Ti",
                "2Ti", "Tit", "Phm",
            ],
        ),
        BookGroup::new("Matthew and James", &["Mt", "Heb", "Jas"]),
        BookGroup::new("Mark and Peter", &["Mk", "1Pe", "2Pe", "Jud"]),
        BookGroup::new("John", &["Jn", "1Jn", "2Jn", "3Jn", "Re"]),
    ]
}

fn default_serial_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2016, 8, 1).unwrap_or_default()
}

fn default_serial_books() -> Vec<String> {
    ["1Jn", "2Jn", "3Jn", "Jn", "Mk"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_date_offset_days() -> i64 {
    1
}

fn default_date_format() -> String {
    "%d %b %Y".to_string()
}

fn default_subject_prefix() -> String {
    "Daily Greek New Testament".to_string()
}
