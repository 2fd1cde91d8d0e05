//! Engine configuration profiles
//!
//! A [`Profile`] is pure data: which stages are active, their firing
//! probabilities and their thresholds. The near-duplicate engine variants of
//! the original system differ only in these numbers, so they are presets
//! over one parameterized engine rather than separate implementations.

use serde::{Deserialize, Serialize};

/// Data-only configuration for a humanization engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Run the AI-phrase replacement stage.
    pub phrase_replacement: bool,

    /// Per-token synonym substitution chance. Zero disables the stage.
    pub synonym_probability: f64,

    /// Chance of reordering a sentence above the length threshold.
    pub reorder_probability: f64,

    /// Sentences at or below this many words are never reordered.
    pub reorder_min_tokens: usize,

    /// Lead reordered sentences with nouns (verbs otherwise).
    pub noun_first: bool,

    /// Chance of truncating a long sentence.
    pub truncate_probability: f64,

    /// Word count above which truncation is considered.
    pub long_sentence_tokens: usize,

    /// Chance of padding a short sentence with a filler.
    pub pad_probability: f64,

    /// Word count below which padding is considered.
    pub short_sentence_tokens: usize,

    /// Chance of inserting a filler phrase mid-sentence.
    pub filler_probability: f64,

    /// Chance of prepending a personal observation or connector.
    pub observation_probability: f64,

    /// Chance of appending an emoticon or interjection (non-formal tone).
    pub emoticon_probability: f64,

    /// Scale insertion probabilities down as the formality dial rises.
    pub scale_with_formality: bool,

    /// Chance of hedging the first copula under formal tone.
    pub hedge_probability: f64,

    /// Chance of appending an informal tag under casual tone.
    pub casual_tag_probability: f64,

    /// Chance of slang/typo substitution. Zero makes the stage a no-op.
    pub slang_probability: f64,

    /// Chance of swapping terminal punctuation.
    pub punctuation_probability: f64,

    /// Restrict punctuation variants to formal-appropriate marks.
    pub formal_punctuation_only: bool,
}

impl Default for Profile {
    fn default() -> Self {
        Self::balanced()
    }
}

impl Profile {
    /// Middle-of-the-road rewriting: every stage active at moderate rates,
    /// insertion chances scaled by the formality dial.
    pub fn balanced() -> Self {
        Self {
            phrase_replacement: true,
            synonym_probability: 0.85,
            reorder_probability: 0.3,
            reorder_min_tokens: 8,
            noun_first: true,
            truncate_probability: 0.2,
            long_sentence_tokens: 18,
            pad_probability: 0.25,
            short_sentence_tokens: 5,
            filler_probability: 0.3,
            observation_probability: 0.2,
            emoticon_probability: 0.1,
            scale_with_formality: true,
            hedge_probability: 0.35,
            casual_tag_probability: 0.3,
            slang_probability: 0.15,
            punctuation_probability: 0.2,
            formal_punctuation_only: false,
        }
    }

    /// Formality-favoring rewriting: no slang, restrained insertions,
    /// punctuation kept to formal marks, longer reorder threshold.
    pub fn formal() -> Self {
        Self {
            phrase_replacement: true,
            synonym_probability: 0.7,
            reorder_probability: 0.15,
            reorder_min_tokens: 12,
            noun_first: true,
            truncate_probability: 0.1,
            long_sentence_tokens: 22,
            pad_probability: 0.15,
            short_sentence_tokens: 4,
            filler_probability: 0.1,
            observation_probability: 0.05,
            emoticon_probability: 0.0,
            scale_with_formality: false,
            hedge_probability: 0.5,
            casual_tag_probability: 0.0,
            slang_probability: 0.0,
            punctuation_probability: 0.15,
            formal_punctuation_only: true,
        }
    }

    /// Aggressive conversational rewriting: high substitution rates, slang
    /// and emoticons on, verb-first reorders of even medium sentences.
    pub fn casual() -> Self {
        Self {
            phrase_replacement: true,
            synonym_probability: 0.95,
            reorder_probability: 0.4,
            reorder_min_tokens: 6,
            noun_first: false,
            truncate_probability: 0.3,
            long_sentence_tokens: 14,
            pad_probability: 0.35,
            short_sentence_tokens: 6,
            filler_probability: 0.5,
            observation_probability: 0.35,
            emoticon_probability: 0.4,
            scale_with_formality: false,
            hedge_probability: 0.2,
            casual_tag_probability: 0.45,
            slang_probability: 0.4,
            punctuation_probability: 0.35,
            formal_punctuation_only: false,
        }
    }

    /// Everything off. Useful as a base for tests that force single stages.
    pub fn quiet() -> Self {
        Self {
            phrase_replacement: false,
            synonym_probability: 0.0,
            reorder_probability: 0.0,
            reorder_min_tokens: usize::MAX,
            noun_first: true,
            truncate_probability: 0.0,
            long_sentence_tokens: usize::MAX,
            pad_probability: 0.0,
            short_sentence_tokens: 0,
            filler_probability: 0.0,
            observation_probability: 0.0,
            emoticon_probability: 0.0,
            scale_with_formality: false,
            hedge_probability: 0.0,
            casual_tag_probability: 0.0,
            slang_probability: 0.0,
            punctuation_probability: 0.0,
            formal_punctuation_only: false,
        }
    }

    pub fn with_phrase_replacement(mut self, enabled: bool) -> Self {
        self.phrase_replacement = enabled;
        self
    }

    pub fn with_synonym_probability(mut self, probability: f64) -> Self {
        self.synonym_probability = probability;
        self
    }

    pub fn with_reorder(mut self, probability: f64, min_tokens: usize) -> Self {
        self.reorder_probability = probability;
        self.reorder_min_tokens = min_tokens;
        self
    }

    pub fn with_slang_probability(mut self, probability: f64) -> Self {
        self.slang_probability = probability;
        self
    }

    pub fn with_hedge_probability(mut self, probability: f64) -> Self {
        self.hedge_probability = probability;
        self
    }

    pub fn with_scale_with_formality(mut self, scale: bool) -> Self {
        self.scale_with_formality = scale;
        self
    }

    pub fn with_punctuation(mut self, probability: f64, formal_only: bool) -> Self {
        self.punctuation_probability = probability;
        self.formal_punctuation_only = formal_only;
        self
    }
}
