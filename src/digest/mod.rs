//! Digest rendering
//!
//! Turns a [`ReadingSet`] into the HTML body of the daily message using a
//! handlebars template, and optionally prefixes mail headers.

use std::path::Path;

use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDate, TimeDelta};
use handlebars::Handlebars;
use serde::Serialize;

use crate::config::DigestConfig;
use crate::error::{GntError, Result};
use crate::parse::Word;
use crate::select::{Reading, ReadingSet, Selection, SelectionStatus};

const DIGEST_TEMPLATE: &str = "digest";

/// Built-in HTML template
pub const DEFAULT_TEMPLATE: &str = include_str!("../../templates/digest.html.hbs");

/// Displayed date: `today` shifted by `offset_days`, formatted with `format`.
///
/// The default offset of one day makes the date match the readers' (UTC+10)
/// morning when the digest is produced the previous evening.
pub fn human_date(today: NaiveDate, offset_days: i64, format: &str) -> Result<String> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(GntError::Config(format!("invalid date format: {:?}", format)));
    }
    let date = TimeDelta::try_days(offset_days)
        .and_then(|delta| today.checked_add_signed(delta))
        .ok_or_else(|| GntError::Config(format!("date offset out of range: {}", offset_days)))?;
    Ok(date.format(format).to_string())
}

/// Template data for the whole digest
#[derive(Debug, Serialize)]
pub struct DigestContext {
    pub date: String,
    pub readings: Vec<ReadingView>,
}

/// Template data for one reading
#[derive(Debug, Serialize)]
pub struct ReadingView {
    pub name: String,
    pub status: SelectionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub words: Vec<WordView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct WordView {
    pub text: String,
    pub lemma: String,
    pub part_of_speech: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsing: Option<String>,
}

impl From<&Word> for WordView {
    fn from(word: &Word) -> Self {
        Self {
            text: word.text.clone(),
            lemma: word.lemma.clone(),
            part_of_speech: word.part_of_speech.label(),
            parsing: (!word.parsing.is_empty()).then(|| word.parsing.describe()),
        }
    }
}

impl DigestContext {
    /// Build template data from a reading set.
    ///
    /// A reference that cannot be formatted only affects its own reading.
    pub fn build(
        set: &ReadingSet<'_>,
        books_in_order: &[String],
        date: String,
        word_table: bool,
    ) -> Self {
        let readings = set
            .iter()
            .map(|r| ReadingView::build(r, books_in_order, word_table))
            .collect();
        Self { date, readings }
    }
}

impl ReadingView {
    fn build(reading: &Reading<'_>, books_in_order: &[String], word_table: bool) -> Self {
        let mut view = ReadingView {
            name: reading.name.clone(),
            status: reading.selection.status(),
            passage: None,
            reference: None,
            text: None,
            words: Vec::new(),
            error: None,
        };

        match &reading.selection {
            Selection::Verse(verse) => {
                view.passage = Some(verse.passage().to_string());
                view.text = Some(verse.text());
                match verse.human_ref(books_in_order) {
                    Ok(r) => view.reference = Some(r),
                    Err(e) => view.error = Some(e.to_string()),
                }
                if word_table {
                    view.words = verse.words().iter().map(WordView::from).collect();
                }
            }
            Selection::Absent => {}
            Selection::Failed(e) => view.error = Some(e.to_string()),
        }

        view
    }
}

/// Handlebars renderer for the digest body
pub struct DigestRenderer<'reg> {
    registry: Handlebars<'reg>,
}

impl DigestRenderer<'_> {
    /// Renderer using the built-in template
    pub fn new() -> Result<Self> {
        Self::with_template(DEFAULT_TEMPLATE)
    }

    pub fn with_template(template: &str) -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.register_template_string(DIGEST_TEMPLATE, template)?;
        Ok(Self { registry })
    }

    /// Renderer using a template file, or the built-in one when `path` is `None`
    pub fn from_path(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                tracing::debug!("Using digest template {}", path.display());
                Self::with_template(&std::fs::read_to_string(path)?)
            }
            None => Self::new(),
        }
    }

    pub fn render(&self, context: &DigestContext) -> Result<String> {
        Ok(self.registry.render(DIGEST_TEMPLATE, context)?)
    }
}

/// Render the digest body for a reading set
pub fn render_digest(
    set: &ReadingSet<'_>,
    books_in_order: &[String],
    config: &DigestConfig,
) -> Result<String> {
    let date = human_date(set.date, config.date_offset_days, &config.date_format)?;
    let context = DigestContext::build(set, books_in_order, date, config.word_table);
    DigestRenderer::from_path(config.template.as_deref())?.render(&context)
}

/// Subject line for a given display date
pub fn subject(config: &DigestConfig, date: &str) -> String {
    format!("{} {}", config.subject_prefix, date)
}

/// Prefix the body with mail headers. Delivery is left to the caller.
pub fn compose_message(config: &DigestConfig, date: &str, body: &str) -> String {
    let mut message = String::new();
    if let Some(ref from) = config.from {
        message.push_str(&format!("From: {}\r\n", from));
    }
    if let Some(ref to) = config.to {
        message.push_str(&format!("To: {}\r\n", to));
    }
    message.push_str(&format!("Subject: {}\r\n", subject(config, date)));
    message.push_str("MIME-Version: 1.0\r\n");
    message.push_str("Content-Type: text/html; charset=UTF-8\r\n");
    message.push_str("\r\n");
    message.push_str(body);
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_books_in_order;
    use crate::library::Library;
    use std::fs;
    use tempfile::tempdir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_human_date() {
        assert_eq!(human_date(date(2016, 8, 3), 1, "%d %b %Y").unwrap(), "04 Aug 2016");
        assert_eq!(human_date(date(2016, 12, 31), 1, "%d %b %Y").unwrap(), "01 Jan 2017");
        assert_eq!(human_date(date(2016, 8, 3), 0, "%Y-%m-%d").unwrap(), "2016-08-03");
        assert_eq!(human_date(date(2016, 8, 3), -3, "%Y-%m-%d").unwrap(), "2016-07-31");
    }

    #[test]
    fn test_human_date_bad_format() {
        assert!(human_date(date(2016, 8, 3), 0, "%Q").is_err());
    }

    #[test]
    fn test_compose_message() {
        let config = DigestConfig {
            from: Some("sender@example.org".to_string()),
            to: Some("readers@example.org".to_string()),
            ..DigestConfig::default()
        };
        let message = compose_message(&config, "04 Aug 2016", "<p>hi</p>");
        assert!(message.starts_with("From: sender@example.org\r\nTo: readers@example.org\r\n"));
        assert!(message.contains("Subject: Daily Greek New Testament 04 Aug 2016\r\n"));
        assert!(message.contains("Content-Type: text/html; charset=UTF-8"));
        assert!(message.ends_with("\r\n\r\n<p>hi</p>"));
    }

    #[test]
    fn test_render_digest() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("83-1Jn-morphgnt.txt"),
            "230101 RR ----NSN- Ὃ Ὃ ὅ ὅς\n230101 V- 3IAI-S-- ἦν ἦν ἦν εἰμί\n",
        )
        .unwrap();
        let library = Library::discover(dir.path(), "*-morphgnt.txt").unwrap();
        let verse = &library.get("1Jn").unwrap().verses().unwrap()[0];

        let set = ReadingSet {
            date: date(2016, 8, 3),
            readings: vec![
                Reading {
                    name: "Serial".to_string(),
                    selection: Selection::Absent,
                },
                Reading {
                    name: "John".to_string(),
                    selection: Selection::Verse(verse),
                },
                Reading {
                    name: "Mark & Peter".to_string(),
                    selection: Selection::Failed(GntError::EmptyGroup("Mark & Peter".to_string())),
                },
            ],
        };

        let config = DigestConfig {
            word_table: true,
            ..DigestConfig::default()
        };
        let html = render_digest(&set, &default_books_in_order(), &config).unwrap();

        assert!(html.contains("04 Aug 2016"));
        assert!(html.contains("No verse today."));
        assert!(html.contains("John: 1Jn 1:1"));
        assert!(html.contains("Ὃ ἦν"));
        assert!(html.contains("3rd imperfect active indicative singular"));
        // Names are HTML-escaped
        assert!(html.contains("Mark &amp; Peter"));
        assert!(html.contains("has no verses"));

        let serial = html.find("Serial").unwrap();
        let john = html.find("John:").unwrap();
        assert!(serial < john);
    }

    #[test]
    fn test_word_view_omits_empty_parsing() {
        let particle: Word = "230102 C- -------- καὶ καὶ καί καί".parse().unwrap();
        let view = WordView::from(&particle);
        assert_eq!(view.part_of_speech, "conjunction");
        assert_eq!(view.parsing, None);
        assert!(!serde_json::to_string(&view).unwrap().contains("parsing"));

        let verb: Word = "230101 V- 3IAI-S-- ἦν ἦν ἦν εἰμί".parse().unwrap();
        assert_eq!(
            WordView::from(&verb).parsing.as_deref(),
            Some("3rd imperfect active indicative singular")
        );
    }

    #[test]
    fn test_custom_template() {
        let renderer = DigestRenderer::with_template(
            "{{date}}|{{#each readings}}{{name}}={{reference}};{{/each}}",
        )
        .unwrap();
        let context = DigestContext {
            date: "04 Aug 2016".to_string(),
            readings: vec![ReadingView {
                name: "Serial".to_string(),
                status: SelectionStatus::Selected,
                passage: Some("230103".to_string()),
                reference: Some("1Jn 1:3".to_string()),
                text: Some("ὃ".to_string()),
                words: Vec::new(),
                error: None,
            }],
        };
        assert_eq!(renderer.render(&context).unwrap(), "04 Aug 2016|Serial=1Jn 1:3;");
    }

    #[test]
    fn test_unknown_book_number_only_affects_reference() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("83-1Jn-morphgnt.txt"),
            "990101 RR ----NSN- Ὃ Ὃ ὅ ὅς\n",
        )
        .unwrap();
        let library = Library::discover(dir.path(), "*-morphgnt.txt").unwrap();
        let verse = &library.get("1Jn").unwrap().verses().unwrap()[0];
        let set = ReadingSet {
            date: date(2016, 8, 3),
            readings: vec![Reading {
                name: "John".to_string(),
                selection: Selection::Verse(verse),
            }],
        };
        let context = DigestContext::build(&set, &default_books_in_order(), "x".to_string(), false);
        let view = &context.readings[0];
        assert_eq!(view.text.as_deref(), Some("Ὃ"));
        assert!(view.reference.is_none());
        assert!(view.error.as_deref().unwrap_or("").contains("unknown book number 99"));
    }
}
