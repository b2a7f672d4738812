//! kanagram command-line front end
//!
//! Fuzzy search over Japanese-mixed candidate lists.
//!
//! ## Usage
//!
//! ```bash
//! kanagram normalize トウキョウタワー
//! kanagram ngrams 東京タワー -n 2
//! kanagram compare 富士山 ふじさん
//! kanagram search ふじ --file places.txt --partial --threshold 0.2
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `KANAGRAM_NGRAM_SIZE`: characters per n-gram (default: 2)
//! - `KANAGRAM_THRESHOLD`: minimum similarity 0.0-1.0 (default: 0.3)
//! - `KANAGRAM_METRIC`: `jaccard` or `dice` (default: jaccard)
//! - `RUST_LOG`: logging filter (overrides `--log-level`)

use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use kanagram_core::SearchEngine;
use tracing::{error, info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod commands;
mod config;

use commands::SearchOptions;
use config::MatchArgs;

#[derive(Parser, Debug)]
#[command(name = "kanagram")]
#[command(about = "Fuzzy search for Japanese-mixed text")]
#[command(version)]
struct Args {
    /// Log level (debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print each text next to its normalized form
    Normalize {
        #[arg(required = true)]
        texts: Vec<String>,
    },

    /// Print the n-grams of a text (not normalized)
    Ngrams {
        text: String,

        /// Characters per n-gram
        #[arg(short, default_value_t = 2)]
        n: usize,
    },

    /// Print Jaccard and Dice similarity of two texts
    Compare {
        a: String,
        b: String,

        /// Characters per n-gram
        #[arg(short, default_value_t = 2)]
        n: usize,
    },

    /// Rank candidates (one per line) against a query
    Search {
        query: String,

        /// Candidate file; reads stdin when omitted
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Score exact and substring matches before n-gram similarity
        #[arg(long)]
        partial: bool,

        #[command(flatten)]
        matching: MatchArgs,

        /// Keep at most this many results
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(log_level: &str) {
    let level = match log_level {
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        "trace" => Level::TRACE,
        _ => Level::WARN,
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));

    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(&args.log_level);

    info!("kanagram {}", env!("CARGO_PKG_VERSION"));

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = run(args, |key| std::env::var(key).ok(), &mut out) {
        error!("{e}");
        std::process::exit(1);
    }
}

/// Execute one command. `env` supplies environment variables for match
/// settings.
fn run<E>(args: Args, env: E, out: &mut dyn Write) -> Result<(), Box<dyn Error>>
where
    E: Fn(&str) -> Option<String>,
{
    match args.command {
        Command::Normalize { texts } => commands::run_normalize(&texts, out)?,
        Command::Ngrams { text, n } => commands::run_ngrams(&text, n, out)?,
        Command::Compare { a, b, n } => commands::run_compare(&a, &b, n, out)?,
        Command::Search {
            query,
            file,
            partial,
            matching,
            limit,
            json,
        } => {
            let config = matching.resolve(env)?;
            let engine = SearchEngine::with_config(config)?;
            let candidates = commands::load_candidates(file.as_deref())?;
            let options = SearchOptions {
                partial,
                limit,
                json,
            };
            commands::run_search(&engine, &query, &candidates, options, out)?;
        }
    }

    out.flush()?;
    Ok(())
}
