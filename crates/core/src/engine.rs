//! The humanization engine
//!
//! Orchestrates a full run: segmentation, tone detection, per-sentence
//! stage application, sentence finalization, the whole-text register pass
//! and change aggregation. The public entry points never return an error —
//! total failure is folded into the result string so callers always have
//! something to render.

use crate::cache::SynonymCache;
use crate::error::EngineError;
use crate::lexicon::Lexicon;
use crate::outcome::HumanizeOutcome;
use crate::pipeline::StagePipeline;
use crate::profile::Profile;
use crate::stages::{replace_word_preserving_case, Stage, StageContext, ToneAdjustment};
use crate::tokenizers::segment_sentences;
use crate::tone::{Tone, ToneChoice, ToneClassifier};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// Returned when the input is empty or whitespace-only.
pub const NO_TEXT_MESSAGE: &str = "No text provided to humanize.";

/// Returned when segmentation yields no usable sentence.
pub const NO_OUTPUT_MESSAGE: &str = "Humanization resulted in no output. Original text returned.";

/// Default position of the formality dial.
pub const DEFAULT_FORMALITY: u8 = 50;

/// The text-naturalization engine.
///
/// One instance holds the lexical tables, the configured stage pipeline and
/// the synonym cache. Calls are synchronous and call-scoped; the cache is
/// the only state shared between them and is internally synchronized, so an
/// engine can serve concurrent callers behind a shared reference.
pub struct Engine {
    lexicon: Lexicon,
    profile: Profile,
    classifier: ToneClassifier,
    pipeline: StagePipeline,
    cache: SynonymCache,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("profile", &self.profile)
            .field("stages", &self.pipeline.stage_names())
            .finish_non_exhaustive()
    }
}

impl Engine {
    /// Build an engine over the builtin lexicon. Never fails.
    pub fn new(profile: Profile) -> Self {
        Self::with_lexicon(Lexicon::builtin(), profile)
    }

    /// Build an engine over a caller-provided lexicon.
    pub fn with_lexicon(lexicon: Lexicon, profile: Profile) -> Self {
        let pipeline = StagePipeline::from_profile(&profile);
        debug!(stages = ?pipeline.stage_names(), "engine constructed");
        Self {
            lexicon,
            profile,
            classifier: ToneClassifier::new(),
            pipeline,
            cache: SynonymCache::default(),
        }
    }

    /// Build an engine from an external resource directory.
    ///
    /// Fails fatally when the directory or a required table is missing —
    /// callers must not proceed without their named resources.
    pub fn from_dir(dir: impl AsRef<std::path::Path>, profile: Profile) -> Result<Self, EngineError> {
        let lexicon = Lexicon::from_dir(dir)?;
        Ok(Self::with_lexicon(lexicon, profile))
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Rewrite `text` toward a human register.
    ///
    /// `formality` runs 0–100 (50 is neutral); `tone` either forces a label
    /// or asks the classifier. Randomness is drawn fresh from the OS, so two
    /// identical calls usually differ — use [`Engine::humanize_seeded`] when
    /// reproducibility matters.
    pub fn humanize(&self, text: &str, formality: u8, tone: ToneChoice) -> HumanizeOutcome {
        let mut rng = StdRng::from_entropy();
        self.humanize_with_rng(text, formality, tone, &mut rng)
    }

    /// Deterministic variant of [`Engine::humanize`]: the same seed, text,
    /// formality and tone always produce the same outcome.
    pub fn humanize_seeded(
        &self,
        text: &str,
        formality: u8,
        tone: ToneChoice,
        seed: u64,
    ) -> HumanizeOutcome {
        let mut rng = StdRng::seed_from_u64(seed);
        self.humanize_with_rng(text, formality, tone, &mut rng)
    }

    fn humanize_with_rng(
        &self,
        text: &str,
        formality: u8,
        tone: ToneChoice,
        rng: &mut StdRng,
    ) -> HumanizeOutcome {
        if text.trim().is_empty() {
            return HumanizeOutcome::message(NO_TEXT_MESSAGE);
        }

        match self.run_pipeline(text, formality.min(100), tone, rng) {
            Ok(outcome) => outcome,
            Err(err) => HumanizeOutcome::message(format!(
                "Humanization failed ({}). Original text: {}",
                err, text
            )),
        }
    }

    fn run_pipeline(
        &self,
        text: &str,
        formality: u8,
        tone_choice: ToneChoice,
        rng: &mut StdRng,
    ) -> Result<HumanizeOutcome, EngineError> {
        let sentences = segment_sentences(text);
        if sentences.is_empty() {
            return Ok(HumanizeOutcome::message(NO_OUTPUT_MESSAGE));
        }

        let tone = match tone_choice {
            ToneChoice::Auto => self.classifier.detect(text, &self.lexicon),
            ToneChoice::Fixed(tone) => tone,
        };
        debug!(%tone, sentences = sentences.len(), "pipeline start");

        let mut rewritten = Vec::with_capacity(sentences.len());
        let mut changes = Vec::new();

        for sentence in &sentences {
            let mut ctx = StageContext {
                tone,
                formality,
                lexicon: &self.lexicon,
                cache: &self.cache,
                rng: &mut *rng,
            };
            let (out, sentence_changes) = self.pipeline.run_sentence(sentence, &mut ctx);
            let (out, finalize_changes) = finalize_sentence(out);
            rewritten.push(out);
            changes.extend(sentence_changes);
            changes.extend(finalize_changes);
        }

        let mut final_text = rewritten.join(" ").trim().to_string();
        if final_text.is_empty() {
            return Ok(HumanizeOutcome::message(NO_OUTPUT_MESSAGE));
        }

        // Whole-text register pass, only when the caller moved a dial.
        if formality != DEFAULT_FORMALITY || tone_choice != ToneChoice::Auto {
            let (adjusted, register_changes) =
                register_pass(&final_text, formality, tone, &self.lexicon);
            final_text = adjusted;
            changes.extend(register_changes);
        }

        Ok(HumanizeOutcome::new(final_text, changes))
    }

    /// Re-apply just the register shift to already-humanized text.
    ///
    /// Runs the tone-adjustment stage over each sentence plus the whole-text
    /// contraction pass, leaving every other stage out.
    pub fn adjust_tone(&self, text: &str, tone: Tone) -> HumanizeOutcome {
        let mut rng = StdRng::from_entropy();
        self.adjust_tone_with_rng(text, tone, &mut rng)
    }

    /// Deterministic variant of [`Engine::adjust_tone`].
    pub fn adjust_tone_seeded(&self, text: &str, tone: Tone, seed: u64) -> HumanizeOutcome {
        let mut rng = StdRng::seed_from_u64(seed);
        self.adjust_tone_with_rng(text, tone, &mut rng)
    }

    fn adjust_tone_with_rng(&self, text: &str, tone: Tone, rng: &mut StdRng) -> HumanizeOutcome {
        if text.trim().is_empty() {
            return HumanizeOutcome::message(NO_TEXT_MESSAGE);
        }

        let stage = ToneAdjustment::new(
            self.profile.hedge_probability,
            self.profile.casual_tag_probability,
        );

        let mut rewritten = Vec::new();
        let mut changes = Vec::new();
        for sentence in segment_sentences(text) {
            let mut ctx = StageContext {
                tone,
                formality: DEFAULT_FORMALITY,
                lexicon: &self.lexicon,
                cache: &self.cache,
                rng: &mut *rng,
            };
            match stage.apply(&sentence, &mut ctx) {
                Ok(output) => {
                    rewritten.push(output.text);
                    changes.extend(output.changes);
                }
                Err(_) => rewritten.push(sentence),
            }
        }

        let joined = rewritten.join(" ").trim().to_string();
        if joined.is_empty() {
            return HumanizeOutcome::message(NO_OUTPUT_MESSAGE);
        }

        let (final_text, register_changes) =
            register_pass(&joined, DEFAULT_FORMALITY, tone, &self.lexicon);
        changes.extend(register_changes);

        HumanizeOutcome::new(final_text, changes)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Profile::default())
    }
}

/// Capitalize the sentence and make sure it ends with terminal punctuation,
/// recording the added mark as a change.
fn finalize_sentence(sentence: String) -> (String, Vec<String>) {
    let mut text = sentence;
    let mut changes = Vec::new();

    if let Some(first) = text.chars().next() {
        if first.is_lowercase() {
            let upper: String = first.to_uppercase().collect();
            text.replace_range(..first.len_utf8(), &upper);
        }
    }

    let ends_terminated = text
        .trim_end()
        .chars()
        .last()
        .is_some_and(|c| matches!(c, '.' | '!' | '?'));
    if !ends_terminated && !text.trim_end().is_empty() {
        text = format!("{}.", text.trim_end());
        changes.push(".".to_string());
    }

    (text, changes)
}

/// Whole-text register shift: expand contractions toward formal writing,
/// contract toward casual. Neutral settings leave the text alone.
fn register_pass(
    text: &str,
    formality: u8,
    tone: Tone,
    lexicon: &Lexicon,
) -> (String, Vec<String>) {
    let formal_leaning = tone == Tone::Formal || (tone != Tone::Casual && formality > 66);
    let casual_leaning = tone == Tone::Casual || (tone != Tone::Formal && formality < 34);

    let mut out = text.to_string();
    let mut changes = Vec::new();

    if formal_leaning {
        for (contracted, expanded) in lexicon.contractions() {
            while let Some(replaced) = replace_word_preserving_case(&out, contracted, expanded) {
                out = replaced;
                changes.push(contracted.to_string());
            }
        }
    } else if casual_leaning {
        for (contracted, expanded) in lexicon.contractions() {
            while let Some(replaced) = replace_word_preserving_case(&out, expanded, contracted) {
                out = replaced;
                changes.push(expanded.to_string());
            }
        }
    }

    (out, changes)
}
