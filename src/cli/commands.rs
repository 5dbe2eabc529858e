//! Command implementations for the Phraze CLI.

use std::time::Instant;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::distance::{PhraseDistanceConfig, WordCountPolicy};
use crate::error::Result;
use crate::suggest::{
    DistanceMode, ParallelRankConfig, ParallelRanker, PhraseCorrector, PhraseDictionary,
    RankerConfig, SuggestionRanker,
};

/// Execute a CLI command.
pub fn execute_command(args: PhrazeArgs) -> Result<()> {
    match &args.command {
        Command::Suggest(suggest_args) => suggest(suggest_args.clone(), &args),
        Command::Check(check_args) => check(check_args.clone(), &args),
    }
}

/// Rank dictionary phrases against the query and print the results.
fn suggest(args: SuggestArgs, cli_args: &PhrazeArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Loading dictionary from: {}", args.dictionary.display());
    }

    let dictionary = PhraseDictionary::load_from_file(&args.dictionary)?;

    let config = RankerConfig {
        threshold: args.threshold,
        distance: PhraseDistanceConfig {
            word_indel_cost: args.indel_cost,
            word_count_policy: if args.reject_mismatch {
                WordCountPolicy::Reject
            } else {
                WordCountPolicy::Penalize
            },
        },
        mode: if args.approximate {
            DistanceMode::FastApproximate
        } else {
            DistanceMode::FullDp
        },
    };

    let start = Instant::now();
    let suggestions = if args.parallel {
        let parallel_config = ParallelRankConfig {
            thread_pool_size: args.threads,
        };
        ParallelRanker::new(config, parallel_config)?.rank(&args.query, &dictionary)
    } else {
        SuggestionRanker::with_config(config).rank(&args.query, &dictionary)
    };
    let duration_ms = start.elapsed().as_millis() as u64;

    let result = SuggestResult {
        query: args.query,
        threshold: args.threshold,
        suggestions,
        duration_ms,
    };

    match cli_args.output_format {
        OutputFormat::Json => print_json(&result, cli_args)?,
        OutputFormat::Human => {
            for suggestion in &result.suggestions {
                println!("{}\t{}", suggestion.phrase, suggestion.distance);
            }
            if cli_args.verbosity() > 0 {
                if result.suggestions.is_empty() {
                    println!("No suggestions within distance {}", result.threshold);
                } else {
                    println!(
                        "{} suggestion(s) in {} ms",
                        result.suggestions.len(),
                        result.duration_ms
                    );
                }
            }
        }
    }

    Ok(())
}

/// Check whether the query matches a dictionary entry exactly after
/// normalization.
fn check(args: CheckArgs, cli_args: &PhrazeArgs) -> Result<()> {
    let dictionary = PhraseDictionary::load_from_file(&args.dictionary)?;
    let corrector = PhraseCorrector::new(dictionary);

    let result = CheckResult {
        known: corrector.is_known(&args.query),
        query: args.query,
    };

    match cli_args.output_format {
        OutputFormat::Json => print_json(&result, cli_args)?,
        OutputFormat::Human => {
            if result.known {
                println!("known");
            } else {
                println!("unknown");
            }
        }
    }

    Ok(())
}
