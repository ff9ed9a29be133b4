//! Verse grouping
//!
//! Groups a book's words into verses by passage identifier.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::parse::Word;
use crate::reference::Passage;

/// Words sharing one passage identifier, in source order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verse {
    passage: Passage,
    words: Vec<Word>,
}

impl Verse {
    pub fn passage(&self) -> &Passage {
        &self.passage
    }

    /// Never empty
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Surface text with punctuation, words joined by single spaces
    pub fn text(&self) -> String {
        self.words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn human_ref(&self, books_in_order: &[String]) -> Result<String> {
        self.passage.human_ref(books_in_order)
    }
}

impl fmt::Display for Verse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// Stable group-by on passage.
///
/// Verses come out in order of first appearance; words inside a verse keep
/// their source order even when a passage's words are not contiguous.
pub fn group_verses(words: Vec<Word>) -> Vec<Verse> {
    let mut index: HashMap<Passage, usize> = HashMap::new();
    let mut verses: Vec<Verse> = Vec::new();

    for word in words {
        match index.get(&word.passage) {
            Some(&i) => verses[i].words.push(word),
            None => {
                index.insert(word.passage.clone(), verses.len());
                verses.push(Verse {
                    passage: word.passage.clone(),
                    words: vec![word],
                });
            }
        }
    }

    verses
}
