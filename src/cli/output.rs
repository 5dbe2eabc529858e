//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::PhrazeArgs;
use crate::error::Result;
use crate::suggest::Suggestion;

/// Result structure for the suggest command.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestResult {
    pub query: String,
    pub threshold: usize,
    pub suggestions: Vec<Suggestion>,
    pub duration_ms: u64,
}

/// Result structure for the check command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResult {
    pub query: String,
    pub known: bool,
}

/// Serialize a command result as JSON to stdout, honoring `--pretty`.
pub fn print_json<T: Serialize>(result: &T, args: &PhrazeArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}
