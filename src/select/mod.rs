//! Selection engine
//!
//! Picks the day's verses: one serial verse, indexed by days since a fixed
//! start date, and one random verse from each configured book group.

use chrono::NaiveDate;
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;

use crate::config::{BookGroup, Config, SerialConfig, SERIAL_KEY};
use crate::error::{GntError, Result};
use crate::library::Library;
use crate::verse::Verse;

/// Outcome of one reading-set entry
#[derive(Debug)]
pub enum Selection<'a> {
    Verse(&'a Verse),
    /// Serial index outside the serial verse sequence
    Absent,
    /// Selection failed for this entry only
    Failed(GntError),
}

impl<'a> Selection<'a> {
    pub fn verse(&self) -> Option<&'a Verse> {
        match self {
            Selection::Verse(v) => Some(*v),
            _ => None,
        }
    }

    pub fn status(&self) -> SelectionStatus {
        match self {
            Selection::Verse(_) => SelectionStatus::Selected,
            Selection::Absent => SelectionStatus::Absent,
            Selection::Failed(_) => SelectionStatus::Failed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionStatus {
    Selected,
    Absent,
    Failed,
}

/// One named entry of the reading set
#[derive(Debug)]
pub struct Reading<'a> {
    pub name: String,
    pub selection: Selection<'a>,
}

/// The day's readings: "Serial" first, then each book group in config order
#[derive(Debug)]
pub struct ReadingSet<'a> {
    pub date: NaiveDate,
    pub readings: Vec<Reading<'a>>,
}

impl<'a> ReadingSet<'a> {
    pub fn get(&self, name: &str) -> Option<&Selection<'a>> {
        self.readings
            .iter()
            .find(|r| r.name == name)
            .map(|r| &r.selection)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reading<'a>> {
        self.readings.iter()
    }

    /// Number of entries that failed
    pub fn failures(&self) -> usize {
        self.readings
            .iter()
            .filter(|r| matches!(r.selection, Selection::Failed(_)))
            .count()
    }
}

/// Whole days from `start` to `today`; negative before the start date
pub fn serial_index(today: NaiveDate, start: NaiveDate) -> i64 {
    (today - start).num_days()
}

/// Selects verses from a library according to a configuration
pub struct Selector<'a> {
    library: &'a Library,
    config: &'a Config,
}

impl<'a> Selector<'a> {
    pub fn new(library: &'a Library, config: &'a Config) -> Self {
        Self { library, config }
    }

    /// Serial verse for `today`, or `None` when the day index is outside the sequence
    pub fn serial_verse(&self, today: NaiveDate) -> Result<Option<&'a Verse>> {
        serial_verse(self.library, &self.config.serial, today)
    }

    /// Uniformly random verse from one group's books
    pub fn random_verse<R: Rng + ?Sized>(
        &self,
        group: &BookGroup,
        rng: &mut R,
    ) -> Result<&'a Verse> {
        random_verse(self.library, group, rng)
    }

    /// Build the reading set for `today` with the given random source.
    ///
    /// Lookup failures are recorded per entry; corpus errors abort.
    pub fn readings_with<R: Rng + ?Sized>(
        &self,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<ReadingSet<'a>> {
        let mut readings = Vec::with_capacity(self.config.book_groups.len() + 1);

        let serial = match self.serial_verse(today) {
            Ok(Some(verse)) => Selection::Verse(verse),
            Ok(None) => Selection::Absent,
            Err(e) => failed(SERIAL_KEY, e)?,
        };
        readings.push(Reading {
            name: SERIAL_KEY.to_string(),
            selection: serial,
        });

        for group in &self.config.book_groups {
            let selection = match self.random_verse(group, rng) {
                Ok(verse) => Selection::Verse(verse),
                Err(e) => failed(&group.name, e)?,
            };
            readings.push(Reading {
                name: group.name.clone(),
                selection,
            });
        }

        Ok(ReadingSet {
            date: today,
            readings,
        })
    }

    /// Build the reading set for `today` with a freshly seeded random source
    pub fn readings_for(&self, today: NaiveDate) -> Result<ReadingSet<'a>> {
        self.readings_with(today, &mut rand::rng())
    }
}

fn failed<'a>(name: &str, err: GntError) -> Result<Selection<'a>> {
    if err.is_corpus_error() {
        return Err(err);
    }
    tracing::warn!("Reading '{}' failed: {}", name, err);
    Ok(Selection::Failed(err))
}

/// Index the concatenated serial books by the day count since the start date
pub fn serial_verse<'a>(
    library: &'a Library,
    serial: &SerialConfig,
    today: NaiveDate,
) -> Result<Option<&'a Verse>> {
    let index = serial_index(today, serial.start);
    let verses = library.verses_from_books(&serial.books)?;

    let verse = usize::try_from(index).ok().and_then(|i| verses.get(i).copied());
    if verse.is_none() {
        tracing::debug!(
            "Serial index {} outside {} serial verses",
            index,
            verses.len()
        );
    }
    Ok(verse)
}

/// Sample one verse uniformly from the concatenated verses of the group's books
pub fn random_verse<'a, R: Rng + ?Sized>(
    library: &'a Library,
    group: &BookGroup,
    rng: &mut R,
) -> Result<&'a Verse> {
    let verses = library.verses_from_books(&group.books)?;
    verses
        .choose(rng)
        .copied()
        .ok_or_else(|| GntError::EmptyGroup(group.name.clone()))
}
