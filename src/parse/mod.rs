//! Word parser
//!
//! Parses MorphGNT annotation lines into [`Word`] records. Each line has
//! seven space-separated groups:
//!
//! ```text
//! 230101 V- 3IAI-S-- ἦν ἦν ἦν εἰμί
//! ^      ^  ^        ^  ^  ^  ^
//! |      |  |        |  |  |  lemma
//! |      |  |        |  |  normalized word
//! |      |  |        |  word (punctuation stripped)
//! |      |  |        text including punctuation
//! |      |  parsing: person tense voice mood case number gender degree
//! |      part of speech
//! passage (book, chapter, verse)
//! ```
//!
//! A line either matches the whole grammar or is rejected.

mod morphology;

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::{GntError, Result};
use crate::reference::Passage;

pub use morphology::{Parsing, PartOfSpeech};

/// Full annotation line grammar.
/// Groups: passage, pos, parsing, text, word, normalized, lemma
static MORPH_LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        ^(?P<passage>[0-9]{6})
        \x20(?P<pos>A-|C-|D-|I-|N-|P-|RA|RD|RI|RP|RR|V-|X-)
        \x20(?P<parsing>[123-][PIFAXY-][AMP-][IDSONP-][NGDAV-][SP-][MFN-][CS-])
        \x20(?P<text>\S+)
        \x20(?P<word>\S+)
        \x20(?P<normalized>\S+)
        \x20(?P<lemma>\S+)$",
    )
    .unwrap()
});

/// One annotated token of the text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Word {
    pub passage: Passage,
    pub part_of_speech: PartOfSpeech,
    pub parsing: Parsing,
    /// Surface text including punctuation
    pub text: String,
    /// Surface text with punctuation stripped
    pub word: String,
    pub normalized: String,
    pub lemma: String,
}

impl Word {
    /// Parse one annotation line. A trailing line terminator is ignored.
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim_end_matches(['\n', '\r']);
        let caps = MORPH_LINE_PATTERN
            .captures(line)
            .ok_or_else(|| GntError::MalformedText(line.to_string()))?;

        // The pattern only admits values these conversions accept.
        let passage: Passage = caps["passage"].parse()?;
        let part_of_speech: PartOfSpeech = caps["pos"].parse()?;
        let parsing: Parsing = caps["parsing"].parse()?;

        Ok(Word {
            passage,
            part_of_speech,
            parsing,
            text: caps["text"].to_string(),
            word: caps["word"].to_string(),
            normalized: caps["normalized"].to_string(),
            lemma: caps["lemma"].to_string(),
        })
    }

    /// The four text fields in line order
    pub fn text_fields(&self) -> [&str; 4] {
        [&self.text, &self.word, &self.normalized, &self.lemma]
    }
}

impl FromStr for Word {
    type Err = GntError;

    fn from_str(s: &str) -> Result<Self> {
        Word::parse(s)
    }
}

/// Writes the word back out as an annotation line
impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.passage,
            self.part_of_speech,
            self.parsing,
            self.text_fields().join(" ")
        )
    }
}
