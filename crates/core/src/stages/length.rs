//! Length variation stage

use super::{Stage, StageContext, StageOutput};
use crate::error::StageError;
use crate::tokenizers::{join_tokens, WordTokenizer};
use rand::Rng;

/// Probabilistically truncates long sentences at a random cut point or pads
/// short ones with a tone-appropriate filler. Output is never empty.
#[derive(Debug, Clone, Copy)]
pub struct LengthVariation {
    pub truncate_probability: f64,
    /// Word count above which truncation is considered.
    pub long_tokens: usize,
    pub pad_probability: f64,
    /// Word count below which padding is considered.
    pub short_tokens: usize,
}

impl LengthVariation {
    pub fn new(
        truncate_probability: f64,
        long_tokens: usize,
        pad_probability: f64,
        short_tokens: usize,
    ) -> Self {
        Self {
            truncate_probability,
            long_tokens,
            pad_probability,
            short_tokens,
        }
    }

    fn truncate(
        &self,
        sentence: &str,
        ctx: &mut StageContext<'_>,
        word_count: usize,
    ) -> Result<StageOutput, StageError> {
        if word_count < 2 {
            return Ok(StageOutput::unchanged(sentence));
        }

        let tokenizer = WordTokenizer::new();
        let tokens = tokenizer.tokenize(sentence);

        // Keep at least half the words so the sentence stays recognizable.
        let low = (word_count / 2).max(1);
        let keep = ctx.rng.gen_range(low..word_count);

        let terminal = tokens
            .last()
            .filter(|t| t.is_punct && matches!(t.text.as_str(), "." | "!" | "?"))
            .cloned();

        let mut kept = Vec::new();
        let mut changes = Vec::new();
        let mut words_seen = 0;
        for token in &tokens {
            if !token.is_punct {
                words_seen += 1;
                if words_seen > keep {
                    changes.push(token.text.clone());
                    continue;
                }
            } else if words_seen >= keep {
                continue;
            }
            kept.push(token.clone());
        }

        if let Some(terminal) = terminal {
            kept.push(terminal);
        }
        if kept.is_empty() {
            return Err(StageError::EmptyOutput);
        }

        Ok(StageOutput::new(join_tokens(&kept), changes))
    }

    fn pad(&self, sentence: &str, ctx: &mut StageContext<'_>) -> StageOutput {
        let fillers = ctx.lexicon.fillers_for(ctx.tone);
        let Some(filler) = ctx.pick(fillers) else {
            return StageOutput::unchanged(sentence);
        };
        let filler = filler.clone();

        let trimmed = sentence.trim_end();
        let text = match trimmed.chars().last() {
            Some(last) if matches!(last, '.' | '!' | '?') => {
                let cut = trimmed.len() - last.len_utf8();
                format!("{}, {}{}", &trimmed[..cut], filler, last)
            }
            _ => format!("{}, {}", trimmed, filler),
        };

        StageOutput::new(text, vec![filler])
    }
}

impl Stage for LengthVariation {
    fn apply(
        &self,
        sentence: &str,
        ctx: &mut StageContext<'_>,
    ) -> Result<StageOutput, StageError> {
        let word_count = sentence.split_whitespace().count();
        if word_count == 0 {
            return Err(StageError::MalformedInput("blank sentence".to_string()));
        }

        if word_count > self.long_tokens && ctx.chance(self.truncate_probability) {
            return self.truncate(sentence, ctx, word_count);
        }
        if word_count < self.short_tokens && ctx.chance(self.pad_probability) {
            return Ok(self.pad(sentence, ctx));
        }

        Ok(StageOutput::unchanged(sentence))
    }

    fn name(&self) -> &'static str {
        "length_variation"
    }
}
