//! Passage identifiers and human-readable references
//!
//! A passage identifier is six ASCII digits: book, chapter and verse, two
//! digits each. The book part is a 1-based index into the canonical book
//! order, so `"010203"` is `Mt 2:3`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GntError, Result};

/// Six-digit book/chapter/verse identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Passage(String);

impl Passage {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 1-based book number
    pub fn book_number(&self) -> usize {
        two_digits(&self.0[0..2])
    }

    pub fn chapter(&self) -> usize {
        two_digits(&self.0[2..4])
    }

    pub fn verse(&self) -> usize {
        two_digits(&self.0[4..6])
    }

    /// Canonical book abbreviation for this passage
    pub fn book_abbrev<'a>(&self, books_in_order: &'a [String]) -> Result<&'a str> {
        let number = self.book_number();
        number
            .checked_sub(1)
            .and_then(|idx| books_in_order.get(idx))
            .map(String::as_str)
            .ok_or_else(|| GntError::UnknownBookNumber {
                passage: self.0.clone(),
                number,
            })
    }

    /// "Book Chapter:Verse", e.g. "1Jn 3:16"
    pub fn human_ref(&self, books_in_order: &[String]) -> Result<String> {
        let book = self.book_abbrev(books_in_order)?;
        Ok(format!("{} {}:{}", book, self.chapter(), self.verse()))
    }
}

// Both characters are validated ASCII digits on construction.
fn two_digits(s: &str) -> usize {
    s.bytes().fold(0, |acc, b| acc * 10 + usize::from(b - b'0'))
}

impl FromStr for Passage {
    type Err = GntError;

    fn from_str(s: &str) -> Result<Self> {
        if s.len() == 6 && s.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Passage(s.to_string()))
        } else {
            Err(GntError::InvalidPassage(s.to_string()))
        }
    }
}

impl TryFrom<String> for Passage {
    type Error = GntError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Passage> for String {
    fn from(p: Passage) -> Self {
        p.0
    }
}

impl fmt::Display for Passage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Format a raw passage identifier against the canonical book order
pub fn human_ref(passage: &str, books_in_order: &[String]) -> Result<String> {
    passage.parse::<Passage>()?.human_ref(books_in_order)
}
