//! Daily reading integration tests
//!
//! Runs the library end to end against the fixture corpus in
//! `tests/fixtures/sblgnt` (first verses of Mt, Mk, Jn, 1-3 Jn).

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;

use dgnt::{
    render_digest, BookGroup, Config, GntError, Library, Selection, SerialConfig, Selector, Word,
};

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sblgnt")
}

fn fixture_config() -> Config {
    Config {
        source_dir: fixtures(),
        book_groups: vec![
            BookGroup::new("Matthew", &["Mt"]),
            BookGroup::new("Mark", &["Mk"]),
            BookGroup::new("John", &["Jn", "1Jn", "2Jn", "3Jn"]),
        ],
        ..Config::default()
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// =============================================================================
// Library loading
// =============================================================================

mod library_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_discovers_fixture_books() {
        let library = Library::from_config(&fixture_config()).unwrap();
        let codes: Vec<&str> = library.books().iter().map(|b| b.short_name()).collect();
        assert_eq!(codes, vec!["Mt", "Mk", "Jn", "1Jn", "2Jn", "3Jn"]);

        let numbers: Vec<&str> = library.books().iter().map(|b| b.number()).collect();
        assert_eq!(numbers, vec!["61", "62", "64", "83", "84", "85"]);
    }

    #[test]
    fn test_verses_partition_words() {
        let library = Library::from_config(&fixture_config()).unwrap();
        for book in library.books() {
            let words = book.words().unwrap();
            let verses = book.verses().unwrap();
            let regrouped: Vec<&Word> = verses.iter().flat_map(|v| v.words()).collect();
            assert_eq!(regrouped.len(), words.len(), "{}", book.short_name());
            assert!(regrouped.iter().zip(&words).all(|(a, b)| *a == b));
        }
    }

    #[test]
    fn test_fixture_lines_round_trip() {
        let library = Library::from_config(&fixture_config()).unwrap();
        let book = library.get("1Jn").unwrap();
        let raw = std::fs::read_to_string(book.path()).unwrap();
        for (line, word) in raw.lines().zip(book.words().unwrap()) {
            assert_eq!(word.to_string(), line);
        }
    }

    #[test]
    fn test_verse_counts() {
        let library = Library::from_config(&fixture_config()).unwrap();
        let counts: Vec<(&str, usize)> = library
            .books()
            .iter()
            .map(|b| (b.short_name(), b.verses().unwrap().len()))
            .collect();
        assert_eq!(
            counts,
            vec![("Mt", 2), ("Mk", 1), ("Jn", 1), ("1Jn", 3), ("2Jn", 2), ("3Jn", 1)]
        );
    }

    #[test]
    fn test_matthew_opening_verses() {
        let library = Library::from_config(&fixture_config()).unwrap();
        let verses = library.get("Mt").unwrap().verses().unwrap();
        assert_eq!(verses.len(), 2);
        assert_eq!(verses[0].words().len(), 2);
        assert_eq!(verses[1].words().len(), 2);
        assert_eq!(verses[0].text(), "Βίβλος γενέσεως");
    }
}

// =============================================================================
// Serial selection
// =============================================================================

mod serial_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // Default serial order 1Jn 2Jn 3Jn Jn Mk over the fixtures:
    // 230101 230102 230103 240101 240102 250101 040101 020101
    fn serial_passage(today: NaiveDate) -> Option<String> {
        let config = fixture_config();
        let library = Library::from_config(&config).unwrap();
        Selector::new(&library, &config)
            .serial_verse(today)
            .unwrap()
            .map(|v| v.passage().to_string())
    }

    #[test]
    fn test_serial_progression() {
        assert_eq!(serial_passage(date(2016, 8, 1)).as_deref(), Some("230101"));
        assert_eq!(serial_passage(date(2016, 8, 3)).as_deref(), Some("230103"));
        assert_eq!(serial_passage(date(2016, 8, 4)).as_deref(), Some("240101"));
        assert_eq!(serial_passage(date(2016, 8, 7)).as_deref(), Some("040101"));
        assert_eq!(serial_passage(date(2016, 8, 8)).as_deref(), Some("020101"));
    }

    #[test]
    fn test_serial_past_end_is_absent() {
        assert_eq!(serial_passage(date(2016, 8, 9)), None);
        assert_eq!(serial_passage(date(2026, 1, 1)), None);
    }

    #[test]
    fn test_serial_before_start_is_absent() {
        assert_eq!(serial_passage(date(2016, 7, 31)), None);
    }

    #[test]
    fn test_custom_serial_books() {
        let config = Config {
            serial: SerialConfig {
                start: date(2020, 1, 1),
                books: vec!["Mt".to_string(), "Mk".to_string()],
            },
            ..fixture_config()
        };
        let library = Library::from_config(&config).unwrap();
        let verse = Selector::new(&library, &config)
            .serial_verse(date(2020, 1, 3))
            .unwrap()
            .unwrap();
        assert_eq!(verse.human_ref(&config.books_in_order).unwrap(), "Mk 1:1");
    }
}

// =============================================================================
// Reading set
// =============================================================================

mod reading_set_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reading_set_order_and_contents() {
        let config = fixture_config();
        let library = Library::from_config(&config).unwrap();
        let set = Selector::new(&library, &config)
            .readings_with(date(2016, 8, 2), &mut StdRng::seed_from_u64(42))
            .unwrap();

        let names: Vec<&str> = set.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Serial", "Matthew", "Mark", "John"]);
        assert_eq!(set.failures(), 0);

        let serial = set.get("Serial").and_then(|s| s.verse()).unwrap();
        assert_eq!(serial.human_ref(&config.books_in_order).unwrap(), "1Jn 1:2");

        let mark = set.get("Mark").and_then(|s| s.verse()).unwrap();
        assert_eq!(mark.text(), "Ἀρχὴ τοῦ εὐαγγελίου Ἰησοῦ χριστοῦ");

        let john = set.get("John").and_then(|s| s.verse()).unwrap();
        let book = john.passage().book_number();
        assert!([4, 23, 24, 25].contains(&book));
    }

    #[test]
    fn test_default_groups_with_partial_corpus() {
        // Default groups name books the fixtures lack
        let config = Config {
            source_dir: fixtures(),
            ..Config::default()
        };
        let library = Library::from_config(&config).unwrap();
        let set = Selector::new(&library, &config)
            .readings_for(date(2016, 8, 1))
            .unwrap();

        assert!(set.get("Serial").and_then(|s| s.verse()).is_some());
        for name in ["Luke and Paul", "Matthew and James", "Mark and Peter", "John"] {
            assert!(
                matches!(set.get(name), Some(Selection::Failed(GntError::BookNotFound(_)))),
                "{name}"
            );
        }
    }

    #[test]
    fn test_render_fixture_digest() {
        let mut config = fixture_config();
        config.digest.word_table = true;
        let library = Library::from_config(&config).unwrap();
        let set = Selector::new(&library, &config)
            .readings_with(date(2016, 8, 7), &mut StdRng::seed_from_u64(3))
            .unwrap();

        let html = render_digest(&set, &config.books_in_order, &config.digest).unwrap();
        assert!(html.contains("08 Aug 2016"));
        assert!(html.contains("Serial: Jn 1:1"));
        assert!(html.contains("Ἐν ἀρχῇ ἦν ὁ λόγος,"));
        assert!(html.contains("Mark: Mk 1:1"));
    }
}
