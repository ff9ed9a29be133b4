//! Commands
//!
//! CLI command implementations. Each command is in its own submodule with an
//! options struct and an `execute_*` function.

pub mod books;
pub mod check;
pub mod digest;
pub mod init;
pub mod reference;
pub mod today;
pub mod verse;

pub use books::{execute_books, BooksOptions};
pub use check::{execute_check, CheckOptions};
pub use digest::{execute_digest, DigestOptions};
pub use init::{execute_init, InitOptions};
pub use reference::{execute_reference, ReferenceOptions};
pub use today::{execute_today, TodayOptions};
pub use verse::{execute_verse, VerseOptions};

use chrono::{Local, NaiveDate};

/// The given date, or the local calendar date
pub fn resolve_date(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}
