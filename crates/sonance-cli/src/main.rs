//! sonance - content-based track recommendations from the command line
//!
//! Usage:
//!   sonance --catalog songs.csv recommend --seed 6f807x0ima9a1j3VPbc7VN
//!   sonance --catalog songs.csv recommend --query "Blinding Lights; Rolling in the Deep"
//!   sonance --catalog songs.csv search "someone like you adele"
//!   sonance --catalog songs.csv describe
//!   sonance --catalog songs.csv export-scaler scaler.json

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod output;

use commands::{describe, export_scaler, recommend, search};

/// sonance - find tracks that sound like the ones you like
#[derive(Parser)]
#[command(name = "sonance")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Catalog CSV (one row per track)
    #[arg(
        long,
        global = true,
        env = "SONANCE_CATALOG",
        value_name = "CSV",
        default_value = "spotify_songs.csv"
    )]
    catalog: PathBuf,

    /// Impute missing feature cells with the column mean instead of dropping the row
    #[arg(long, global = true)]
    impute: bool,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend tracks similar to the seeds
    Recommend {
        /// Seed track identifier (repeatable)
        #[arg(long = "seed", value_name = "ID")]
        seeds: Vec<String>,

        /// Free-text seeds, e.g. "Blinding Lights by The Weeknd; Hello - Adele"
        #[arg(long, value_name = "TEXT")]
        query: Option<String>,

        /// Number of recommendations
        #[arg(short = 'n', long, default_value = "10")]
        top_n: usize,

        /// Scaler artifact to use instead of fitting on the catalog
        #[arg(long, value_name = "FILE")]
        scaler: Option<PathBuf>,
    },

    /// Find tracks by title and artist
    Search {
        /// Text to look for
        query: String,

        /// Maximum matches
        #[arg(long, default_value = "5")]
        limit: usize,

        /// Minimum match score (0-100)
        #[arg(long, default_value = "70")]
        cutoff: f32,
    },

    /// Show catalog size and feature statistics
    Describe,

    /// Fit the standardizer on the catalog and write it as JSON
    ExportScaler {
        /// Output file
        #[arg(value_name = "OUT")]
        out: PathBuf,
    },
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Commands::Recommend {
            seeds,
            query,
            top_n,
            scaler,
        } => recommend::run(&recommend::Options {
            catalog: &cli.catalog,
            impute: cli.impute,
            seeds,
            query: query.as_deref(),
            top_n: *top_n,
            scaler: scaler.as_deref(),
            json: cli.json,
        }),

        Commands::Search {
            query,
            limit,
            cutoff,
        } => search::run(&cli.catalog, cli.impute, query, *limit, *cutoff, cli.json),

        Commands::Describe => describe::run(&cli.catalog, cli.impute, cli.json),

        Commands::ExportScaler { out } => {
            export_scaler::run(&cli.catalog, cli.impute, out, cli.json)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&e.to_string());
            e.exit_code()
        }
    }
}
