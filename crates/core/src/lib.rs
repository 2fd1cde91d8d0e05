//! # Prosaic
//!
//! A heuristic text-naturalization engine: rewrites machine-generated prose
//! into text that reads as human-authored while preserving meaning, and
//! reports every surface change it made so callers can render a diff.
//!
//! ## Core Concepts
//!
//! - **Lexicon**: static phrase/synonym/filler vocabulary driving substitution
//! - **Stages**: independent, composable passes applied per sentence
//! - **Profile**: data-only configuration selecting stages and probabilities
//! - **Engine**: orchestrates segmentation, tone detection, the stage
//!   pipeline and change aggregation
//!
//! ## Example
//!
//! ```rust
//! use prosaic_core::{Engine, Profile, ToneChoice};
//!
//! let engine = Engine::new(Profile::balanced());
//! let outcome = engine.humanize_seeded(
//!     "Moreover, the analysis demonstrates significant results.",
//!     50,
//!     ToneChoice::Auto,
//!     42,
//! );
//! println!("{}", outcome.text);
//! for change in &outcome.changes {
//!     println!("changed: {}", change);
//! }
//! ```
//!
//! Every probabilistic decision draws from an explicit random source, so
//! the seeded entry points are pure functions of their arguments.

pub mod cache;
pub mod engine;
pub mod error;
pub mod lexicon;
pub mod outcome;
pub mod pipeline;
pub mod profile;
pub mod stages;
pub mod tokenizers;
pub mod tone;

// Re-export main types
pub use cache::SynonymCache;
pub use engine::{Engine, DEFAULT_FORMALITY, NO_OUTPUT_MESSAGE, NO_TEXT_MESSAGE};
pub use error::{EngineError, StageError};
pub use lexicon::Lexicon;
pub use outcome::HumanizeOutcome;
pub use pipeline::StagePipeline;
pub use profile::Profile;
pub use tone::{Tone, ToneChoice};

/// Rewrite text with the default engine and a fresh random seed.
///
/// Convenience for one-off callers; anything that runs repeatedly should
/// build an [`Engine`] once and reuse it so the synonym cache pays off.
pub fn humanize(text: &str) -> HumanizeOutcome {
    Engine::default().humanize(text, DEFAULT_FORMALITY, ToneChoice::Auto)
}
