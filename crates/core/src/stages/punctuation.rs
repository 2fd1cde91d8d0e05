//! Punctuation variation stage

use super::{Stage, StageContext, StageOutput};
use crate::error::StageError;

/// Probabilistically swaps the sentence's terminal mark for a variant from
/// the lexicon table. Formal configurations restrict the variant set to
/// formal-appropriate marks.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationVariation {
    pub probability: f64,
    pub formal_only: bool,
}

impl PunctuationVariation {
    pub fn new(probability: f64, formal_only: bool) -> Self {
        Self {
            probability,
            formal_only,
        }
    }
}

impl Stage for PunctuationVariation {
    fn apply(
        &self,
        sentence: &str,
        ctx: &mut StageContext<'_>,
    ) -> Result<StageOutput, StageError> {
        let trimmed = sentence.trim_end();
        let Some(last) = trimmed.chars().last() else {
            return Err(StageError::MalformedInput("blank sentence".to_string()));
        };
        if !matches!(last, '.' | '!' | '?') {
            return Ok(StageOutput::unchanged(sentence));
        }

        let variants: Vec<&str> = ctx
            .lexicon
            .punctuation_variants(last, self.formal_only)
            .into_iter()
            .filter(|v| *v != last.to_string().as_str())
            .collect();
        if variants.is_empty() || !ctx.chance(self.probability) {
            return Ok(StageOutput::unchanged(sentence));
        }

        let Some(&variant) = ctx.pick(&variants) else {
            return Ok(StageOutput::unchanged(sentence));
        };

        let cut = trimmed.len() - last.len_utf8();
        let text = format!("{}{}", &trimmed[..cut], variant);
        Ok(StageOutput::new(text, vec![last.to_string()]))
    }

    fn name(&self) -> &'static str {
        "punctuation_variation"
    }
}
