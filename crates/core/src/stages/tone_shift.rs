//! Tone adjustment stage

use super::{replace_word_preserving_case, Stage, StageContext, StageOutput};
use crate::error::StageError;
use crate::tone::Tone;

/// Shifts register toward the detected or requested tone.
///
/// Formal text gets a hedged copula: the first whole-word "is" becomes
/// "appears to be" or "seems to be", at most once. Casual text may get an
/// informal tag phrase appended. Other tones pass through.
#[derive(Debug, Clone, Copy)]
pub struct ToneAdjustment {
    pub hedge_probability: f64,
    pub casual_tag_probability: f64,
}

impl ToneAdjustment {
    pub fn new(hedge_probability: f64, casual_tag_probability: f64) -> Self {
        Self {
            hedge_probability,
            casual_tag_probability,
        }
    }
}

impl Stage for ToneAdjustment {
    fn apply(
        &self,
        sentence: &str,
        ctx: &mut StageContext<'_>,
    ) -> Result<StageOutput, StageError> {
        match ctx.tone {
            Tone::Formal => {
                if !ctx.chance(self.hedge_probability) {
                    return Ok(StageOutput::unchanged(sentence));
                }
                let Some(&hedge) = ctx.pick(ctx.lexicon.hedges()) else {
                    return Ok(StageOutput::unchanged(sentence));
                };
                match replace_word_preserving_case(sentence, "is", hedge) {
                    Some(text) => Ok(StageOutput::new(text, vec!["is".to_string()])),
                    None => Ok(StageOutput::unchanged(sentence)),
                }
            }
            Tone::Casual => {
                if !ctx.chance(self.casual_tag_probability) {
                    return Ok(StageOutput::unchanged(sentence));
                }
                let Some(&tag) = ctx.pick(ctx.lexicon.casual_tags()) else {
                    return Ok(StageOutput::unchanged(sentence));
                };
                let trimmed = sentence.trim_end();
                let body = trimmed.trim_end_matches(['.', '!', '?']);
                let text = format!("{}{}", body, tag);
                Ok(StageOutput::new(
                    text,
                    vec![tag.trim_start_matches(", ").to_string()],
                ))
            }
            _ => Ok(StageOutput::unchanged(sentence)),
        }
    }

    fn name(&self) -> &'static str {
        "tone_adjustment"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::SynonymCache;
    use crate::lexicon::Lexicon;
    use crate::stages::tests::test_context;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_formal_hedges_first_copula_once() {
        let lexicon = Lexicon::builtin();
        let cache = SynonymCache::default();
        let mut rng = StdRng::seed_from_u64(2);
        let mut ctx = test_context(Tone::Formal, &lexicon, &cache, &mut rng);

        let out = ToneAdjustment::new(1.0, 0.0)
            .apply("The market is large and the team is small.", &mut ctx)
            .unwrap();

        let hedged = out.text.contains("appears to be") || out.text.contains("seems to be");
        assert!(hedged, "got: {}", out.text);
        // Only the first copula is rewritten.
        assert!(out.text.contains("the team is small"));
        assert_eq!(out.changes, vec!["is".to_string()]);
    }

    #[test]
    fn test_casual_appends_tag() {
        let lexicon = Lexicon::builtin();
        let cache = SynonymCache::default();
        let mut rng = StdRng::seed_from_u64(2);
        let mut ctx = test_context(Tone::Casual, &lexicon, &cache, &mut rng);

        let out = ToneAdjustment::new(0.0, 1.0)
            .apply("That ride was fun.", &mut ctx)
            .unwrap();

        assert!(out.text.len() > "That ride was fun.".len());
        assert_eq!(out.changes.len(), 1);
    }

    #[test]
    fn test_mixed_tone_passes_through() {
        let lexicon = Lexicon::builtin();
        let cache = SynonymCache::default();
        let mut rng = StdRng::seed_from_u64(2);
        let mut ctx = test_context(Tone::Mixed, &lexicon, &cache, &mut rng);

        let out = ToneAdjustment::new(1.0, 1.0)
            .apply("The market is large.", &mut ctx)
            .unwrap();
        assert_eq!(out.text, "The market is large.");
        assert!(out.changes.is_empty());
    }

    #[test]
    fn test_formal_without_copula_is_unchanged() {
        let lexicon = Lexicon::builtin();
        let cache = SynonymCache::default();
        let mut rng = StdRng::seed_from_u64(2);
        let mut ctx = test_context(Tone::Formal, &lexicon, &cache, &mut rng);

        let out = ToneAdjustment::new(1.0, 0.0)
            .apply("The markets grew quickly.", &mut ctx)
            .unwrap();
        assert_eq!(out.text, "The markets grew quickly.");
        assert!(out.changes.is_empty());
    }
}
