//! Command line argument parsing for the Phraze CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Phraze - fuzzy phrase matching and suggestions
#[derive(Parser, Debug, Clone)]
#[command(name = "phraze")]
#[command(about = "Fuzzy phrase matching and suggestions")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct PhrazeArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl PhrazeArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Rank dictionary phrases by edit distance from a query
    Suggest(SuggestArgs),

    /// Check whether a query matches a dictionary phrase exactly
    Check(CheckArgs),
}

/// Arguments for the suggest command
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Query phrase to find suggestions for
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Path to the dictionary file (one phrase per line)
    #[arg(short, long, value_name = "FILE")]
    pub dictionary: PathBuf,

    /// Maximum phrase distance for suggestions
    #[arg(short, long, default_value_t = 2)]
    pub threshold: usize,

    /// Cost of inserting or deleting a whole word
    #[arg(long, default_value_t = 2, value_name = "COST")]
    pub indel_cost: usize,

    /// Treat phrases with differing word counts as incomparable
    #[arg(long)]
    pub reject_mismatch: bool,

    /// Use the fast approximate distance instead of the full computation
    #[arg(long)]
    pub approximate: bool,

    /// Evaluate candidates in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Thread pool size for --parallel (defaults to the number of CPU cores)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,
}

/// Arguments for the check command
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Query phrase to look up
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Path to the dictionary file (one phrase per line)
    #[arg(short, long, value_name = "FILE")]
    pub dictionary: PathBuf,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
