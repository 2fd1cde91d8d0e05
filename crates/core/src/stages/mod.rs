//! Transformation stages
//!
//! Each stage is one self-contained pass over a single sentence. Stages are
//! independent and composable; the pipeline fixes their order. A stage never
//! panics on malformed input — it returns `Err(StageError)` and the pipeline
//! passes the sentence through unchanged.

use crate::cache::SynonymCache;
use crate::error::StageError;
use crate::lexicon::Lexicon;
use crate::tone::Tone;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

mod length;
mod phrase;
mod punctuation;
mod register;
mod slang;
mod structure;
mod synonym;
mod tone_shift;

pub use length::LengthVariation;
pub use phrase::PhraseReplacement;
pub use punctuation::PunctuationVariation;
pub use register::RegisterInjection;
pub use slang::SlangInjection;
pub use structure::StructuralReordering;
pub use synonym::SynonymSubstitution;
pub use tone_shift::ToneAdjustment;

/// Everything a stage needs besides the sentence itself: the detected tone,
/// the formality dial, the lexical tables, the engine's synonym cache and
/// the per-call random source.
pub struct StageContext<'a> {
    pub tone: Tone,
    pub formality: u8,
    pub lexicon: &'a Lexicon,
    pub cache: &'a SynonymCache,
    pub rng: &'a mut StdRng,
}

impl StageContext<'_> {
    /// Draw once against a probability in [0, 1].
    pub fn chance(&mut self, probability: f64) -> bool {
        self.rng.gen::<f64>() < probability
    }

    /// Uniform choice from a slice.
    pub fn pick<'t, T>(&mut self, items: &'t [T]) -> Option<&'t T> {
        items.choose(self.rng)
    }
}

/// A sentence after one stage, plus the surface changes that stage made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageOutput {
    pub text: String,
    pub changes: Vec<String>,
}

impl StageOutput {
    /// The stage made no change.
    pub fn unchanged(sentence: &str) -> Self {
        Self {
            text: sentence.to_string(),
            changes: Vec::new(),
        }
    }

    pub fn new(text: String, changes: Vec<String>) -> Self {
        Self { text, changes }
    }
}

/// One transformation pass over a single sentence.
pub trait Stage: Send + Sync {
    /// Apply this stage. Implementations must be safe to call on text other
    /// stages have already rewritten, and must return `Err` rather than
    /// panic when the input defeats them.
    fn apply(&self, sentence: &str, ctx: &mut StageContext<'_>)
        -> Result<StageOutput, StageError>;

    /// Stage name, used in logs.
    fn name(&self) -> &'static str;
}

/// Replace the first word-bounded, case-insensitive occurrence of `target`
/// in `text`, matching the case of the original's first character.
///
/// Returns `None` when `target` does not occur as a whole word.
pub(crate) fn replace_word_preserving_case(
    text: &str,
    target: &str,
    replacement: &str,
) -> Option<String> {
    let text_lower = text.to_lowercase();
    let target_lower = target.to_lowercase();
    let mut search_from = 0;

    // Lowercasing can shift byte offsets for non-ASCII text, so every slice
    // position is boundary-checked before use.
    while let Some(pos) = text_lower
        .get(search_from..)
        .and_then(|s| s.find(&target_lower))
    {
        let abs = search_from + pos;
        let end = abs + target_lower.len();

        if end > text.len() || !text.is_char_boundary(abs) || !text.is_char_boundary(end) {
            search_from = next_boundary(&text_lower, abs + 1);
            continue;
        }

        let before_ok = abs == 0
            || !text[..abs]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_alphanumeric());
        let after_ok = end >= text.len()
            || !text[end..].chars().next().is_some_and(|c| c.is_alphanumeric());

        if before_ok && after_ok {
            let original_first = text[abs..].chars().next()?;
            let adjusted = if original_first.is_uppercase() {
                capitalize(replacement)
            } else {
                replacement.to_string()
            };
            let mut out = String::with_capacity(text.len());
            out.push_str(&text[..abs]);
            out.push_str(&adjusted);
            out.push_str(&text[end..]);
            return Some(out);
        }
        search_from = next_boundary(&text_lower, abs + 1);
    }

    None
}

fn next_boundary(s: &str, mut index: usize) -> usize {
    while index < s.len() && !s.is_char_boundary(index) {
        index += 1;
    }
    index.min(s.len())
}

/// Uppercase the first character.
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    /// Build a context over the builtin lexicon for stage tests.
    pub(crate) fn test_context<'a>(
        tone: Tone,
        lexicon: &'a Lexicon,
        cache: &'a SynonymCache,
        rng: &'a mut StdRng,
    ) -> StageContext<'a> {
        StageContext {
            tone,
            formality: 50,
            lexicon,
            cache,
            rng,
        }
    }

    #[test]
    fn test_chance_extremes() {
        let lexicon = Lexicon::builtin();
        let cache = SynonymCache::default();
        let mut rng = StdRng::seed_from_u64(7);
        let mut ctx = test_context(Tone::Mixed, &lexicon, &cache, &mut rng);

        for _ in 0..100 {
            assert!(ctx.chance(1.0));
        }
        for _ in 0..100 {
            assert!(!ctx.chance(0.0));
        }
    }

    #[test]
    fn test_replace_word_preserving_case() {
        let out = replace_word_preserving_case("Said nothing.", "said", "replied");
        assert_eq!(out.unwrap(), "Replied nothing.");

        let out = replace_word_preserving_case("she said nothing", "said", "replied");
        assert_eq!(out.unwrap(), "she replied nothing");
    }

    #[test]
    fn test_replace_word_respects_boundaries() {
        // "aid" must not match inside "said".
        assert!(replace_word_preserving_case("she said", "aid", "help").is_none());
    }
}
