//! Structural reordering stage

use super::{Stage, StageContext, StageOutput};
use crate::error::StageError;
use crate::tokenizers::{join_tokens, WordClass, WordTokenizer};
use rand::seq::SliceRandom;
use std::collections::HashSet;

/// How many nouns/verbs are pulled to the front of a reordered sentence.
const SAMPLE_SIZE: usize = 2;

/// Probabilistically rewrites long sentences into a content-word-first
/// order: a small sample of nouns and verbs leads (noun-first or verb-first
/// by configuration), the shuffled remainder follows, terminal punctuation
/// stays put.
#[derive(Debug, Clone, Copy)]
pub struct StructuralReordering {
    pub probability: f64,
    /// Sentences at or below this many words are left alone.
    pub min_tokens: usize,
    /// Lead with sampled nouns when set, verbs otherwise.
    pub noun_first: bool,
}

impl StructuralReordering {
    pub fn new(probability: f64, min_tokens: usize, noun_first: bool) -> Self {
        Self {
            probability,
            min_tokens,
            noun_first,
        }
    }
}

impl Stage for StructuralReordering {
    fn apply(
        &self,
        sentence: &str,
        ctx: &mut StageContext<'_>,
    ) -> Result<StageOutput, StageError> {
        let tokenizer = WordTokenizer::new();
        let tokens = tokenizer.tokenize(sentence);

        let word_count = tokens.iter().filter(|t| !t.is_punct).count();
        if word_count <= self.min_tokens || !ctx.chance(self.probability) {
            return Ok(StageOutput::unchanged(sentence));
        }

        // Trailing punctuation is not part of the reorder pool.
        let mut body_len = tokens.len();
        while body_len > 0 && tokens[body_len - 1].is_punct {
            body_len -= 1;
        }
        let (body, suffix) = tokens.split_at(body_len);

        let nouns: Vec<usize> = indexes_of(body, WordClass::Noun);
        let verbs: Vec<usize> = indexes_of(body, WordClass::Verb);

        let sampled_nouns: Vec<usize> = nouns
            .choose_multiple(ctx.rng, SAMPLE_SIZE.min(nouns.len()))
            .copied()
            .collect();
        let sampled_verbs: Vec<usize> = verbs
            .choose_multiple(ctx.rng, SAMPLE_SIZE.min(verbs.len()))
            .copied()
            .collect();

        let mut order: Vec<usize> = if self.noun_first {
            sampled_nouns.iter().chain(&sampled_verbs).copied().collect()
        } else {
            sampled_verbs.iter().chain(&sampled_nouns).copied().collect()
        };

        let head: HashSet<usize> = order.iter().copied().collect();
        let mut remainder: Vec<usize> =
            (0..body.len()).filter(|i| !head.contains(i)).collect();
        remainder.shuffle(ctx.rng);
        order.extend(remainder);

        let mut changes = Vec::new();
        for (new_pos, &orig_pos) in order.iter().enumerate() {
            if new_pos != orig_pos && !body[orig_pos].is_punct {
                changes.push(body[orig_pos].text.clone());
            }
        }

        let mut reordered: Vec<_> = order.iter().map(|&i| body[i].clone()).collect();
        reordered.extend_from_slice(suffix);

        Ok(StageOutput::new(join_tokens(&reordered), changes))
    }

    fn name(&self) -> &'static str {
        "structural_reordering"
    }
}

fn indexes_of(body: &[crate::tokenizers::WordToken], class: WordClass) -> Vec<usize> {
    body.iter()
        .enumerate()
        .filter(|(_, t)| !t.is_punct && t.class == class)
        .map(|(i, _)| i)
        .collect()
}
