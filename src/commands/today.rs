//! Today command
//!
//! Prints the day's reading set: the serial verse and one random verse per
//! book group.

use anyhow::Result;
use chrono::NaiveDate;
use console::style;

use crate::config::Config;
use crate::digest::{human_date, DigestContext};
use crate::library::Library;
use crate::select::{Selection, Selector};

use super::resolve_date;

/// Options for the today command
#[derive(Debug, Clone, Default)]
pub struct TodayOptions {
    /// Date to select for (default: today)
    pub date: Option<NaiveDate>,
    /// Output as JSON
    pub json: bool,
}

/// Execute the today command
pub fn execute_today(options: TodayOptions, config: &Config) -> Result<()> {
    let today = resolve_date(options.date);
    let library = Library::from_config(config)?;
    let set = Selector::new(&library, config).readings_for(today)?;

    let date = human_date(today, config.digest.date_offset_days, &config.digest.date_format)?;

    if options.json {
        let context = DigestContext::build(&set, &config.books_in_order, date, true);
        println!("{}", serde_json::to_string_pretty(&context)?);
        return Ok(());
    }

    println!("{} {}\n", style("→").cyan(), style(date).bold());
    for reading in set.iter() {
        match &reading.selection {
            Selection::Verse(verse) => {
                let reference = verse
                    .human_ref(&config.books_in_order)
                    .unwrap_or_else(|_| verse.passage().to_string());
                println!("  {} {}", style(&reading.name).bold(), style(reference).dim());
                println!("    {}", verse.text());
            }
            Selection::Absent => {
                println!("  {} {}", style(&reading.name).bold(), style("(no verse today)").dim());
            }
            Selection::Failed(e) => {
                println!("  {} {} {}", style(&reading.name).bold(), style("✗").red(), e);
            }
        }
    }

    Ok(())
}
