//! Error/slang injection stage

use super::{replace_word_preserving_case, Stage, StageContext, StageOutput};
use crate::error::StageError;
use crate::tokenizers::{join_tokens, WordTokenizer};
use crate::tone::Tone;

/// Substitutes whole words for slang contractions or letter-swapped typos.
///
/// Only fires for non-formal tone; formality-favoring profiles construct it
/// with zero probability, which makes the whole stage a no-op pass-through.
#[derive(Debug, Clone, Copy)]
pub struct SlangInjection {
    pub probability: f64,
}

impl SlangInjection {
    pub fn new(probability: f64) -> Self {
        Self { probability }
    }

    /// A disabled instance; always passes input through.
    pub fn disabled() -> Self {
        Self { probability: 0.0 }
    }
}

impl Stage for SlangInjection {
    fn apply(
        &self,
        sentence: &str,
        ctx: &mut StageContext<'_>,
    ) -> Result<StageOutput, StageError> {
        if self.probability <= 0.0 || ctx.tone == Tone::Formal {
            return Ok(StageOutput::unchanged(sentence));
        }

        let mut text = sentence.to_string();
        let mut changes = Vec::new();

        // Multi-word slang first, on the raw sentence.
        for (source, slangy) in ctx.lexicon.slang_entries() {
            if !source.contains(' ') || !text.to_lowercase().contains(source) {
                continue;
            }
            if !ctx.chance(self.probability) {
                continue;
            }
            if let Some(replaced) = replace_word_preserving_case(&text, source, slangy) {
                text = replaced;
                changes.push(source.to_string());
            }
        }

        // Single-word slang and typos, token by token.
        let tokenizer = WordTokenizer::new();
        let mut tokens = tokenizer.tokenize(&text);
        for token in tokens.iter_mut() {
            if token.is_punct {
                continue;
            }
            let replacement = ctx
                .lexicon
                .slang_for(&token.text)
                .or_else(|| ctx.lexicon.typo_for(&token.text));
            let Some(replacement) = replacement else {
                continue;
            };
            if !ctx.chance(self.probability) {
                continue;
            }
            changes.push(std::mem::replace(&mut token.text, replacement.to_string()));
        }

        Ok(StageOutput::new(join_tokens(&tokens), changes))
    }

    fn name(&self) -> &'static str {
        "slang_injection"
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
    fn test_forced_slang_contracts_phrases() {
        let lexicon = Lexicon::builtin();
        let cache = SynonymCache::default();
        let mut rng = StdRng::seed_from_u64(17);
        let mut ctx = test_context(Tone::Casual, &lexicon, &cache, &mut rng);

        let out = SlangInjection::new(1.0)
            .apply("We are going to win.", &mut ctx)
            .unwrap();

        assert!(out.text.contains("gonna"), "got: {}", out.text);
        assert!(out.changes.contains(&"going to".to_string()));
    }

    #[test]
    fn test_formal_tone_is_a_no_op() {
        let lexicon = Lexicon::builtin();
        let cache = SynonymCache::default();
        let mut rng = StdRng::seed_from_u64(17);
        let mut ctx = test_context(Tone::Formal, &lexicon, &cache, &mut rng);

        let out = SlangInjection::new(1.0)
            .apply("We are going to win.", &mut ctx)
            .unwrap();
        assert_eq!(out.text, "We are going to win.");
        assert!(out.changes.is_empty());
    }

    #[test]
    fn test_disabled_instance_passes_through() {
        let lexicon = Lexicon::builtin();
        let cache = SynonymCache::default();
        let mut rng = StdRng::seed_from_u64(17);
        let mut ctx = test_context(Tone::Casual, &lexicon, &cache, &mut rng);

        let out = SlangInjection::disabled()
            .apply("We are going to win because of the market.", &mut ctx)
            .unwrap();
        assert_eq!(out.text, "We are going to win because of the market.");
    }

    #[test]
    fn test_forced_typo_substitution() {
        let lexicon = Lexicon::builtin();
        let cache = SynonymCache::default();
        let mut rng = StdRng::seed_from_u64(17);
        let mut ctx = test_context(Tone::Casual, &lexicon, &cache, &mut rng);

        let out = SlangInjection::new(1.0)
            .apply("Just watch the storm.", &mut ctx)
            .unwrap();

        // "just" and "the" both have typo forms.
        assert!(!out.changes.is_empty());
    }
}
