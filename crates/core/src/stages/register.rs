//! Register / human-touch injection stage

use super::{Stage, StageContext, StageOutput};
use crate::error::StageError;
use crate::tokenizers::{join_tokens, WordToken, WordTokenizer};
use crate::tone::Tone;
use rand::Rng;

/// Injects the small irregularities human writers leave behind: a filler
/// phrase at a random position, a personal observation or connector up
/// front, an emoticon or interjection at the end of casual text.
///
/// When `scale_with_formality` is set, insertion probabilities shrink
/// monotonically as the formality dial rises; otherwise they are fixed and
/// only the tone gates what gets inserted.
#[derive(Debug, Clone, Copy)]
pub struct RegisterInjection {
    pub filler_probability: f64,
    pub observation_probability: f64,
    pub emoticon_probability: f64,
    pub scale_with_formality: bool,
}

impl RegisterInjection {
    pub fn new(
        filler_probability: f64,
        observation_probability: f64,
        emoticon_probability: f64,
        scale_with_formality: bool,
    ) -> Self {
        Self {
            filler_probability,
            observation_probability,
            emoticon_probability,
            scale_with_formality,
        }
    }

    fn scaled(&self, probability: f64, formality: u8) -> f64 {
        if self.scale_with_formality {
            probability * (1.0 - f64::from(formality.min(100)) / 100.0)
        } else {
            probability
        }
    }
}

impl Stage for RegisterInjection {
    fn apply(
        &self,
        sentence: &str,
        ctx: &mut StageContext<'_>,
    ) -> Result<StageOutput, StageError> {
        let mut text = sentence.to_string();
        let mut changes = Vec::new();
        let formality = ctx.formality;

        // Filler at a uniformly chosen token position.
        let filler_p = self.scaled(self.filler_probability, formality);
        if ctx.chance(filler_p) {
            let fillers = ctx.lexicon.fillers_for(ctx.tone);
            if let Some(filler) = ctx.pick(fillers) {
                let filler = filler.clone();
                text = insert_at_random_position(&text, &filler, ctx);
                changes.push(filler);
            }
        }

        // Personal observation or connector up front.
        let observation_p = self.scaled(self.observation_probability, formality);
        if ctx.chance(observation_p) {
            let use_connector = ctx.chance(0.5);
            let opener = if use_connector {
                ctx.pick(ctx.lexicon.connectors()).map(|c| format!("{},", c))
            } else {
                ctx.pick(ctx.lexicon.observations()).cloned()
            };
            if let Some(opener) = opener {
                text = prepend_opener(&opener, &text);
                changes.push(opener.trim_end_matches(',').to_string());
            }
        }

        // Trailing emoticon or interjection, casual-leaning text only.
        let emoticon_p = self.scaled(self.emoticon_probability, formality);
        if ctx.tone != Tone::Formal && ctx.chance(emoticon_p) {
            let tail = if ctx.chance(0.5) {
                ctx.pick(ctx.lexicon.emoticons())
            } else {
                ctx.pick(ctx.lexicon.interjections())
            };
            if let Some(&tail) = tail {
                text = format!("{} {}", text, tail);
                changes.push(tail.to_string());
            }
        }

        Ok(StageOutput::new(text, changes))
    }

    fn name(&self) -> &'static str {
        "register_injection"
    }
}

/// Insert a phrase as its own token somewhere inside the sentence body.
fn insert_at_random_position(sentence: &str, phrase: &str, ctx: &mut StageContext<'_>) -> String {
    let tokenizer = WordTokenizer::new();
    let mut tokens = tokenizer.tokenize(sentence);

    let mut body_len = tokens.len();
    while body_len > 0 && tokens[body_len - 1].is_punct {
        body_len -= 1;
    }

    let position = ctx.rng.gen_range(0..=body_len);
    tokens.insert(
        position,
        WordToken::word(phrase, crate::tokenizers::WordClass::Other),
    );
    join_tokens(&tokens)
}

/// Prepend an opener, lowering the old initial word when it is an ordinary
/// sentence starter rather than a proper noun or "I".
fn prepend_opener(opener: &str, sentence: &str) -> String {
    let mut rest = sentence.to_string();
    if let Some(first_word) = sentence.split_whitespace().next() {
        let keeps_capital = first_word == "I"
            || first_word.chars().skip(1).any(char::is_uppercase);
        if !keeps_capital {
            if let Some(first) = rest.chars().next() {
                let lowered: String = first.to_lowercase().collect();
                rest.replace_range(..first.len_utf8(), &lowered);
            }
        }
    }
    format!("{} {}", opener, rest)
}
