//! Basic usage example of the prosaic engine

use prosaic_core::{humanize, Engine, Profile, Tone, ToneChoice};

const LINE: &str = "----------------------------------------";

fn main() {
    println!("=== Prosaic Engine Examples ===\n");

    // Example 1: One-off rewriting with the default engine
    example_simple_humanize();

    // Example 2: Reusable engine with a seed for reproducible output
    example_seeded_run();

    // Example 3: Standalone tone adjustment
    example_adjust_tone();
}

fn example_simple_humanize() {
    println!("Example 1: Simple Humanize");
    println!("{}", LINE);

    let input = "Moreover, the analysis demonstrates that the market is large. \
                 Therefore, the strategy should improve.";

    let outcome = humanize(input);

    println!("Input:  {}", input);
    println!("Output: {}", outcome.text);
    println!("\nChanges:");
    for (i, change) in outcome.changes.iter().enumerate() {
        println!("  {}. {}", i + 1, change);
    }
    println!("\n");
}

fn example_seeded_run() {
    println!("Example 2: Seeded, Reproducible Run");
    println!("{}", LINE);

    let engine = Engine::new(Profile::balanced());
    let input = "Additionally, the research team will establish a comprehensive strategy.";

    let first = engine.humanize_seeded(input, 30, ToneChoice::Auto, 42);
    let second = engine.humanize_seeded(input, 30, ToneChoice::Auto, 42);

    println!("Input:   {}", input);
    println!("Run 1:   {}", first.text);
    println!("Run 2:   {}", second.text);
    println!("Same?    {}", first.text == second.text);
    println!("\n");
}

fn example_adjust_tone() {
    println!("Example 3: Standalone Tone Adjustment");
    println!("{}", LINE);

    let engine = Engine::new(Profile::formal());
    let input = "The market is large. We don't expect that to change.";

    let adjusted = engine.adjust_tone(input, Tone::Formal);

    println!("Input:    {}", input);
    println!("Adjusted: {}", adjusted.text);
    println!("Changes:  {:?}", adjusted.changes);
    println!("\n");
}
