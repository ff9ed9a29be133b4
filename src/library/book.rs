//! A single book source

use std::cell::OnceCell;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{GntError, Result};
use crate::parse::Word;
use crate::verse::{group_verses, Verse};

/// File name convention: `NN-Code-...`, e.g. `83-1Jn-morphgnt.txt`
static FILE_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([0-9]{2})-(.+?)-").unwrap());

/// One book of the corpus, backed by a file of annotation lines
#[derive(Debug)]
pub struct Book {
    number: String,
    short_name: String,
    path: PathBuf,
    verses: OnceCell<Vec<Verse>>,
}

impl Book {
    pub fn new(number: &str, short_name: &str, path: impl Into<PathBuf>) -> Self {
        Self {
            number: number.to_string(),
            short_name: short_name.to_string(),
            path: path.into(),
            verses: OnceCell::new(),
        }
    }

    /// Derive number and short code from the file name.
    /// Returns `None` when the name does not follow the convention.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy();
        let caps = FILE_NAME_PATTERN.captures(&name)?;
        Some(Self::new(&caps[1], &caps[2], path))
    }

    /// Two-digit number from the file name
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Lookup key, e.g. "Mt" or "1Co"
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse every line of the source.
    ///
    /// Blank lines are skipped. The first malformed line aborts the load.
    pub fn words(&self) -> Result<Vec<Word>> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| GntError::Read {
            path: self.path.clone(),
            source,
        })?;

        content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| {
                Word::parse(line).map_err(|_| GntError::MalformedLine {
                    path: self.path.clone(),
                    line_number: i + 1,
                    content: line.to_string(),
                })
            })
            .collect()
    }

    /// Verses of this book, parsed on first access and cached
    pub fn verses(&self) -> Result<&[Verse]> {
        if let Some(verses) = self.verses.get() {
            return Ok(verses.as_slice());
        }

        let words = self.words()?;
        tracing::debug!(
            "Loaded {} words from {} ({})",
            words.len(),
            self.short_name,
            self.path.display()
        );
        Ok(self.verses.get_or_init(|| group_verses(words)).as_slice())
    }

    /// Whether verses have been loaded yet
    pub fn is_loaded(&self) -> bool {
        self.verses.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_from_path() {
        let book = Book::from_path(Path::new("sblgnt/61-Mt-morphgnt.txt")).unwrap();
        assert_eq!(book.number(), "61");
        assert_eq!(book.short_name(), "Mt");

        let book = Book::from_path(Path::new("/data/83-1Jn-morphgnt.txt")).unwrap();
        assert_eq!(book.number(), "83");
        assert_eq!(book.short_name(), "1Jn");
    }

    #[test]
    fn test_from_path_rejects_other_names() {
        assert!(Book::from_path(Path::new("sblgnt/README.txt")).is_none());
        assert!(Book::from_path(Path::new("sblgnt/6-Mt-morphgnt.txt")).is_none());
    }

    #[test]
    fn test_lazy_load_and_cache() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("84-2Jn-morphgnt.txt");
        fs::write(
            &path,
            "240101 RA ----NSM- Ὁ Ὁ ὁ ὁ\n240101 A- ----NSM-C πρεσβύτερος πρεσβύτερος πρεσβύτερος πρεσβύτερος\n",
        )
        .unwrap();

        // Second line has nine parsing slots and must fail with context
        let book = Book::from_path(&path).unwrap();
        match book.verses() {
            Err(GntError::MalformedLine { line_number, content, .. }) => {
                assert_eq!(line_number, 2);
                assert!(content.contains("πρεσβύτερος"));
            }
            other => panic!("expected MalformedLine, got {:?}", other),
        }
        assert!(!book.is_loaded());

        fs::write(
            &path,
            "240101 RA ----NSM- Ὁ Ὁ ὁ ὁ\n240101 A- ----NSMC πρεσβύτερος πρεσβύτερος πρεσβύτερος πρεσβύτερος\n\n",
        )
        .unwrap();
        let verses = book.verses().unwrap();
        assert_eq!(verses.len(), 1);
        assert_eq!(verses[0].words().len(), 2);
        assert!(book.is_loaded());

        // Cached: removing the file does not matter any more
        fs::remove_file(&path).unwrap();
        assert_eq!(book.verses().unwrap().len(), 1);
        assert!(book.words().is_err());
    }

    #[test]
    fn test_unreadable_source_names_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("62-Mk-morphgnt.txt");
        fs::write(&path, b"\xff\xfe").unwrap();

        let book = Book::from_path(&path).unwrap();
        let err = book.verses().unwrap_err();
        assert!(matches!(err, GntError::Read { .. }));
        assert!(err.is_corpus_error());
        assert!(err.to_string().contains("62-Mk-morphgnt.txt"));
    }
}
