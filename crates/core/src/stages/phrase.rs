//! Phrase replacement stage

use super::{Stage, StageContext, StageOutput};
use crate::error::StageError;

/// Replaces AI-sounding connective phrases with human alternatives.
///
/// Every phrase-map key found as a literal substring has its first
/// occurrence replaced by a uniformly chosen alternative. Several distinct
/// phrases can fire in one sentence.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhraseReplacement;

impl PhraseReplacement {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for PhraseReplacement {
    fn apply(
        &self,
        sentence: &str,
        ctx: &mut StageContext<'_>,
    ) -> Result<StageOutput, StageError> {
        let mut text = sentence.to_string();
        let mut changes = Vec::new();

        for (phrase, alternatives) in ctx.lexicon.phrases() {
            // Keys are matched against the untouched sentence so one
            // substitution cannot re-trigger on another's output.
            if !sentence.contains(phrase.as_str()) {
                continue;
            }
            let Some(pos) = text.find(phrase.as_str()) else {
                continue;
            };
            let Some(alternative) = ctx.pick(alternatives) else {
                continue;
            };
            // No change is recorded when the pick equals the source.
            if alternative.eq_ignore_ascii_case(phrase) {
                continue;
            }
            text.replace_range(pos..pos + phrase.len(), alternative);
            changes.push(phrase.clone());
        }

        Ok(StageOutput::new(text, changes))
    }

    fn name(&self) -> &'static str {
        "phrase_replacement"
    }
}
