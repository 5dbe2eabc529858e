//! "Did you mean?" example - correcting a mistyped phrase against a dictionary.

use phraze::error::Result;
use phraze::suggest::{PhraseCorrector, PhraseDictionary};

fn main() -> Result<()> {
    println!("=== Did You Mean? Example ===\n");

    let dictionary = PhraseDictionary::from_phrases([
        "thank you miss",
        "thank you sir",
        "good morning",
        "good evening",
        "see you later",
    ]);
    let corrector = PhraseCorrector::new(dictionary);

    for query in ["thank you mis", "god morning", "see you later", "elephant"] {
        if corrector.is_known(query) {
            println!("'{query}' is already in the dictionary");
            continue;
        }

        match corrector.best(query) {
            Some(suggestion) => println!(
                "'{query}' -> did you mean '{}'? (distance {})",
                suggestion.phrase, suggestion.distance
            ),
            None => println!("'{query}' -> no suggestion"),
        }
    }

    Ok(())
}
