//! Error types
//!
//! A single error enum for the library. Corpus errors (bad lines, unreadable
//! sources) abort a run; lookup and selection errors are reported per reading.

use std::path::PathBuf;

use thiserror::Error;

/// Library error type
#[derive(Debug, Error)]
pub enum GntError {
    /// A source line does not match the annotation grammar
    #[error("malformed line {line_number} in {}: {content:?}", .path.display())]
    MalformedLine {
        path: PathBuf,
        line_number: usize,
        content: String,
    },

    /// A line outside of any book source failed the grammar
    #[error("malformed annotation line: {0:?}")]
    MalformedText(String),

    /// No loaded book carries this short code
    #[error("book not found: {0}")]
    BookNotFound(String),

    /// Two sources share one short code
    #[error("duplicate book code {code}: {} and {}", .first.display(), .second.display())]
    DuplicateBook {
        code: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// A book source or source directory could not be read
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A book group has no verses to sample from
    #[error("book group '{0}' has no verses")]
    EmptyGroup(String),

    /// A passage's book number is outside the canonical book list
    #[error("unknown book number {number} in passage {passage}")]
    UnknownBookNumber { passage: String, number: usize },

    /// Not a 6-digit passage identifier
    #[error("invalid passage identifier: {0:?}")]
    InvalidPassage(String),

    /// Configuration is inconsistent
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("template error: {0}")]
    Template(String),

    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl GntError {
    /// Whether this error means the corpus itself is unusable.
    ///
    /// Such errors abort the whole run instead of failing a single reading.
    pub fn is_corpus_error(&self) -> bool {
        matches!(
            self,
            GntError::MalformedLine { .. }
                | GntError::DuplicateBook { .. }
                | GntError::Read { .. }
                | GntError::Io(_)
        )
    }
}

impl From<handlebars::RenderError> for GntError {
    fn from(err: handlebars::RenderError) -> Self {
        GntError::Template(err.to_string())
    }
}

impl From<handlebars::TemplateError> for GntError {
    fn from(err: handlebars::TemplateError) -> Self {
        GntError::Template(err.to_string())
    }
}

/// Library result type
pub type Result<T> = std::result::Result<T, GntError>;
