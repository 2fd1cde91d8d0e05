//! Tone detection
//!
//! Assigns one coarse tone label to a whole input text from a compound
//! sentiment score plus keyword heuristics. The label is computed once per
//! call and passed down to every stage.

use crate::lexicon::Lexicon;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse register/sentiment classification of input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Negative,
    Formal,
    Casual,
    Mixed,
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Tone::Positive => "positive",
            Tone::Negative => "negative",
            Tone::Formal => "formal",
            Tone::Casual => "casual",
            Tone::Mixed => "mixed",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "positive" => Ok(Tone::Positive),
            "negative" => Ok(Tone::Negative),
            "formal" => Ok(Tone::Formal),
            "casual" => Ok(Tone::Casual),
            "mixed" => Ok(Tone::Mixed),
            other => Err(format!("unknown tone: {}", other)),
        }
    }
}

/// Caller-facing tone control: detect automatically or force a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToneChoice {
    #[default]
    Auto,
    Fixed(Tone),
}

impl FromStr for ToneChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("auto") {
            Ok(ToneChoice::Auto)
        } else {
            Tone::from_str(s).map(ToneChoice::Fixed)
        }
    }
}

/// Normalization constant for the compound score, following the usual
/// sentiment-intensity convention.
const NORMALIZATION_ALPHA: f64 = 15.0;

const POSITIVE_THRESHOLD: f64 = 0.5;
const NEGATIVE_THRESHOLD: f64 = -0.5;

/// Whole-text tone classifier.
///
/// Sentiment-first: a compound score above the positive threshold wins,
/// below the negative threshold likewise; otherwise formal keywords are
/// checked before casual ones and the first match decides. No signal at
/// all yields [`Tone::Mixed`]. Never fails — with the sentiment backend
/// disabled the classifier degrades to keyword-only mode.
#[derive(Debug, Clone, Copy)]
pub struct ToneClassifier {
    use_sentiment: bool,
}

impl ToneClassifier {
    pub fn new() -> Self {
        Self {
            use_sentiment: true,
        }
    }

    /// Keyword-only degraded mode.
    pub fn without_sentiment() -> Self {
        Self {
            use_sentiment: false,
        }
    }

    /// Classify the whole input text.
    pub fn detect(&self, text: &str, lexicon: &Lexicon) -> Tone {
        if self.use_sentiment {
            let score = compound_score(text, lexicon);
            if score > POSITIVE_THRESHOLD {
                return Tone::Positive;
            }
            if score < NEGATIVE_THRESHOLD {
                return Tone::Negative;
            }
        }

        // Formal signal is checked before casual; first match wins.
        for word in words_of(text) {
            if lexicon.is_formal_keyword(&word) {
                return Tone::Formal;
            }
        }
        for word in words_of(text) {
            if lexicon.is_casual_keyword(&word) {
                return Tone::Casual;
            }
        }

        Tone::Mixed
    }
}

impl Default for ToneClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Compound sentiment score in [-1, 1]: the valence sum normalized as
/// `s / sqrt(s^2 + alpha)`.
pub fn compound_score(text: &str, lexicon: &Lexicon) -> f64 {
    let sum: f64 = words_of(text)
        .map(|word| lexicon.valence(&word) as f64)
        .sum();

    if sum == 0.0 {
        return 0.0;
    }
    sum / (sum * sum + NORMALIZATION_ALPHA).sqrt()
}

fn words_of(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().map(|w| {
        w.trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase()
    })
}
