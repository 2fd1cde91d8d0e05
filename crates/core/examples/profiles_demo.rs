//! Demonstrates how the three profile presets rewrite the same text

use prosaic_core::{Engine, Profile, ToneChoice};

const LINE: &str = "----------------------------------------";

const INPUT: &str = "Moreover, the analysis demonstrates that the market is large. \
                     Additionally, we are going to establish a comprehensive strategy.";

fn main() {
    println!("=== Profile Comparison ===\n");
    println!("Input: {}\n", INPUT);

    for (name, profile) in [
        ("balanced", Profile::balanced()),
        ("formal", Profile::formal()),
        ("casual", Profile::casual()),
    ] {
        println!("Profile: {}", name);
        println!("{}", LINE);

        let engine = Engine::new(profile);
        // One seed per profile so reruns of the demo are stable.
        let outcome = engine.humanize_seeded(INPUT, 50, ToneChoice::Auto, 7);

        println!("Output:  {}", outcome.text);
        println!("Changes: {}", outcome.changes.len());
        println!();
    }

    println!("Formality dial, balanced profile:");
    println!("{}", LINE);
    let engine = Engine::new(Profile::balanced());
    for formality in [10u8, 50, 90] {
        let outcome = engine.humanize_seeded(INPUT, formality, ToneChoice::Auto, 7);
        println!("formality {:>3}: {}", formality, outcome.text);
    }
}
