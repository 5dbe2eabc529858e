//! Parallel ranking example - fanning candidate evaluation out over a thread pool.

use phraze::error::Result;
use phraze::suggest::{ParallelRankConfig, ParallelRanker, PhraseDictionary, RankerConfig};

fn main() -> Result<()> {
    println!("=== Parallel Suggestion Example ===\n");

    // Build a synthetic dictionary large enough for parallelism to matter
    let words = ["thank", "you", "miss", "good", "morning", "evening", "later"];
    let mut phrases = Vec::new();
    for i in 0..5000 {
        let phrase: Vec<&str> = (0..3).map(|j| words[(i + j * 2) % words.len()]).collect();
        phrases.push(phrase.join(" "));
    }
    let dictionary = PhraseDictionary::from_phrases(phrases);

    let ranker = ParallelRanker::new(
        RankerConfig::default(),
        ParallelRankConfig {
            thread_pool_size: Some(4),
        },
    )?;

    let suggestions = ranker.rank("thank you mis", &dictionary);
    println!("{} suggestion(s) within threshold", suggestions.len());
    for suggestion in suggestions.iter().take(5) {
        println!("  {} (distance {})", suggestion.phrase, suggestion.distance);
    }

    Ok(())
}
