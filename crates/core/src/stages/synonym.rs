//! Synonym substitution stage

use super::{capitalize, Stage, StageContext, StageOutput};
use crate::error::StageError;
use crate::tokenizers::{join_tokens, WordTokenizer};

/// Swaps non-stopword tokens for class-scoped synonyms.
///
/// Noun synonyms are only considered for noun-like tokens and verb synonyms
/// for verb-like ones. Candidate lists are memoized per distinct word in the
/// engine's cache. A change is recorded only when the chosen word differs
/// case-insensitively from the original.
#[derive(Debug, Clone, Copy)]
pub struct SynonymSubstitution {
    pub probability: f64,
}

impl SynonymSubstitution {
    pub fn new(probability: f64) -> Self {
        Self { probability }
    }
}

impl Stage for SynonymSubstitution {
    fn apply(
        &self,
        sentence: &str,
        ctx: &mut StageContext<'_>,
    ) -> Result<StageOutput, StageError> {
        if self.probability <= 0.0 {
            return Ok(StageOutput::unchanged(sentence));
        }

        let tokenizer = WordTokenizer::new();
        let mut tokens = tokenizer.tokenize(sentence);
        if tokens.is_empty() {
            return Err(StageError::MalformedInput(
                "no tokens in sentence".to_string(),
            ));
        }

        let mut changes = Vec::new();

        for token in tokens.iter_mut() {
            if token.is_punct || ctx.lexicon.is_stopword(&token.text) {
                continue;
            }
            if !ctx.chance(self.probability) {
                continue;
            }

            let key = token.text.to_lowercase();
            let lexicon = ctx.lexicon;
            let class = token.class;
            let candidates = ctx.cache.get_or_insert_with(&key, || {
                lexicon
                    .synonyms_for(&key, class)
                    .map(|c| c.to_vec())
                    .unwrap_or_default()
            });
            if candidates.is_empty() {
                continue;
            }

            let Some(chosen) = ctx.pick(&candidates) else {
                continue;
            };
            if chosen.eq_ignore_ascii_case(&token.text) {
                continue;
            }

            let original = std::mem::take(&mut token.text);
            token.text = if original.chars().next().is_some_and(char::is_uppercase) {
                capitalize(chosen)
            } else {
                chosen.clone()
            };
            changes.push(original);
        }

        Ok(StageOutput::new(join_tokens(&tokens), changes))
    }

    fn name(&self) -> &'static str {
        "synonym_substitution"
    }
}
