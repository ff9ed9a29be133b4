#![forbid(unsafe_code)]
//! Daily GNT Command Line Interface

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use dgnt::commands::{
    execute_books, execute_check, execute_digest, execute_init, execute_reference, execute_today,
    execute_verse, BooksOptions, CheckOptions, DigestOptions, InitOptions, ReferenceOptions,
    TodayOptions, VerseOptions,
};
use dgnt::config::DEFAULT_CONFIG_FILE;
use dgnt::Config;

#[derive(Parser)]
#[command(name = "dgnt")]
#[command(about = "Daily Greek New Testament readings")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Book source directory (overrides config)
    #[arg(long, global = true, env = "DGNT_SOURCE_DIR")]
    source_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config file
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Show today's readings
    Today {
        /// Select for this date instead of today (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render the daily digest
    Digest {
        /// Select for this date instead of today (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Include From/To/Subject headers
        #[arg(long)]
        headers: bool,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Format a passage identifier as a reference
    Ref {
        /// Six-digit passage identifier, e.g. 010203
        passage: String,
    },

    /// Show one verse
    Verse {
        /// Six-digit passage identifier, e.g. 230101
        passage: String,

        /// Show lemma and parsing for each word
        #[arg(short, long)]
        parsing: bool,
    },

    /// List discovered books
    Books {
        /// Sort by canonical order
        #[arg(long)]
        canonical: bool,
    },

    /// Parse every book and report counts
    Check {
        /// Fail when a canonical book has no source
        #[arg(long)]
        complete: bool,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose { "dgnt=debug" } else { "dgnt=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Load config; init writes a fresh one and never reads it
    let creating = matches!(cli.command, Commands::Init { .. });
    let mut config = if creating {
        Config::default()
    } else if cli.config.exists() {
        Config::load(&cli.config)?
    } else {
        // Only the default config file may be absent
        if cli.config != PathBuf::from(DEFAULT_CONFIG_FILE) {
            eprintln!(
                "{} Config file not found: {}",
                style("✗").red(),
                cli.config.display()
            );
            std::process::exit(1);
        }
        Config::default()
    };
    if let Some(dir) = cli.source_dir.clone() {
        config.source_dir = dir;
    }

    match cli.command {
        Commands::Init { force } => {
            let options = InitOptions {
                path: cli.config,
                force,
                source_dir: cli.source_dir,
            };
            execute_init(options)?;
        }

        Commands::Today { date, json } => {
            let options = TodayOptions { date, json };
            execute_today(options, &config)?;
        }

        Commands::Digest { date, headers, output } => {
            let options = DigestOptions { date, headers, output };
            execute_digest(options, &config)?;
        }

        Commands::Ref { passage } => {
            let options = ReferenceOptions { passage };
            execute_reference(options, &config)?;
        }

        Commands::Verse { passage, parsing } => {
            let options = VerseOptions { passage, parsing };
            execute_verse(options, &config)?;
        }

        Commands::Books { canonical } => {
            let options = BooksOptions { canonical };
            execute_books(options, &config)?;
        }

        Commands::Check { complete } => {
            let options = CheckOptions { complete };
            execute_check(options, &config)?;
        }
    }

    Ok(())
}
