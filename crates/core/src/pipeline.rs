//! Stage pipeline
//!
//! Holds the transformation stages in their fixed order and applies them to
//! one sentence at a time. Failure isolation lives here: a stage that
//! returns an error is logged and skipped, and the sentence flows on to the
//! next stage unchanged. That pass-through-on-error behavior is the
//! pipeline's policy, not something individual stages decide.

use crate::profile::Profile;
use crate::stages::{
    LengthVariation, PhraseReplacement, PunctuationVariation, RegisterInjection, SlangInjection,
    Stage, StageContext, StructuralReordering, SynonymSubstitution, ToneAdjustment,
};
use tracing::warn;

/// An ordered sequence of transformation stages.
pub struct StagePipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl StagePipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Append a stage.
    pub fn with_stage(mut self, stage: Box<dyn Stage>) -> Self {
        self.stages.push(stage);
        self
    }

    /// Build the canonical stage sequence for a profile:
    /// phrase replacement, synonym substitution, structural reordering,
    /// length variation, register injection, tone adjustment, slang
    /// injection, punctuation variation.
    pub fn from_profile(profile: &Profile) -> Self {
        let mut pipeline = Self::new();

        if profile.phrase_replacement {
            pipeline = pipeline.with_stage(Box::new(PhraseReplacement::new()));
        }
        pipeline = pipeline
            .with_stage(Box::new(SynonymSubstitution::new(
                profile.synonym_probability,
            )))
            .with_stage(Box::new(StructuralReordering::new(
                profile.reorder_probability,
                profile.reorder_min_tokens,
                profile.noun_first,
            )))
            .with_stage(Box::new(LengthVariation::new(
                profile.truncate_probability,
                profile.long_sentence_tokens,
                profile.pad_probability,
                profile.short_sentence_tokens,
            )))
            .with_stage(Box::new(RegisterInjection::new(
                profile.filler_probability,
                profile.observation_probability,
                profile.emoticon_probability,
                profile.scale_with_formality,
            )))
            .with_stage(Box::new(ToneAdjustment::new(
                profile.hedge_probability,
                profile.casual_tag_probability,
            )));

        let slang = if profile.slang_probability > 0.0 {
            SlangInjection::new(profile.slang_probability)
        } else {
            SlangInjection::disabled()
        };
        pipeline
            .with_stage(Box::new(slang))
            .with_stage(Box::new(PunctuationVariation::new(
                profile.punctuation_probability,
                profile.formal_punctuation_only,
            )))
    }

    /// Run one sentence through every stage in order, accumulating the
    /// surface changes. A stage error leaves the sentence as the previous
    /// stage produced it and does not abort the remaining stages.
    pub fn run_sentence(&self, sentence: &str, ctx: &mut StageContext<'_>) -> (String, Vec<String>) {
        let mut text = sentence.to_string();
        let mut changes = Vec::new();

        for stage in &self.stages {
            match stage.apply(&text, ctx) {
                Ok(output) => {
                    if output.text.trim().is_empty() {
                        warn!(stage = stage.name(), "stage emptied sentence, ignoring");
                        continue;
                    }
                    text = output.text;
                    changes.extend(output.changes);
                }
                Err(err) => {
                    warn!(
                        stage = stage.name(),
                        error = %err,
                        "stage failed, passing sentence through"
                    );
                }
            }
        }

        (text, changes)
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Names of the stages, in execution order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }
}

impl Default for StagePipeline {
    fn default() -> Self {
        Self::from_profile(&Profile::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::SynonymCache;
    use crate::error::StageError;
    use crate::lexicon::Lexicon;
    use crate::outcome::HumanizeOutcome;
    use crate::stages::StageOutput;
    use crate::tone::Tone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// A stage that always errors, for isolation tests.
    struct FailingStage;

    impl Stage for FailingStage {
        fn apply(
            &self,
            _sentence: &str,
            _ctx: &mut StageContext<'_>,
        ) -> Result<StageOutput, StageError> {
            Err(StageError::MalformedInput("forced failure".to_string()))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    fn run(pipeline: &StagePipeline, sentence: &str, tone: Tone) -> (String, Vec<String>) {
        let lexicon = Lexicon::builtin();
        let cache = SynonymCache::default();
        let mut rng = StdRng::seed_from_u64(99);
        let mut ctx = StageContext {
            tone,
            formality: 50,
            lexicon: &lexicon,
            cache: &cache,
            rng: &mut rng,
        };
        pipeline.run_sentence(sentence, &mut ctx)
    }

    #[test]
    fn test_canonical_stage_order() {
        let pipeline = StagePipeline::from_profile(&Profile::balanced());
        assert_eq!(
            pipeline.stage_names(),
            vec![
                "phrase_replacement",
                "synonym_substitution",
                "structural_reordering",
                "length_variation",
                "register_injection",
                "tone_adjustment",
                "slang_injection",
                "punctuation_variation",
            ]
        );
    }

    #[test]
    fn test_disabled_phrase_stage_is_omitted() {
        let profile = Profile::balanced().with_phrase_replacement(false);
        let pipeline = StagePipeline::from_profile(&profile);
        assert!(!pipeline.stage_names().contains(&"phrase_replacement"));
    }

    #[test]
    fn test_failing_stage_is_isolated() {
        let pipeline = StagePipeline::new()
            .with_stage(Box::new(FailingStage))
            .with_stage(Box::new(PhraseReplacement::new()));

        let lexicon = Lexicon::with_phrases(vec![(
            "Moreover".to_string(),
            vec!["Furthermore".to_string()],
        )]);
        let cache = SynonymCache::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut ctx = StageContext {
            tone: Tone::Mixed,
            formality: 50,
            lexicon: &lexicon,
            cache: &cache,
            rng: &mut rng,
        };

        // The failure must not stop the phrase stage from running.
        let (text, changes) = pipeline.run_sentence("Moreover, this is good.", &mut ctx);
        assert_eq!(text, "Furthermore, this is good.");
        assert_eq!(changes, vec!["Moreover".to_string()]);
    }

    #[test]
    fn test_failure_alone_passes_sentence_through() {
        let pipeline = StagePipeline::new().with_stage(Box::new(FailingStage));
        let (text, changes) = run(&pipeline, "Untouched sentence.", Tone::Mixed);
        assert_eq!(text, "Untouched sentence.");
        assert!(changes.is_empty());
    }

    #[test]
    fn test_quiet_profile_changes_nothing_but_phrases() {
        let pipeline = StagePipeline::from_profile(&Profile::quiet());
        let (text, changes) = run(&pipeline, "Plain words in a plain order.", Tone::Mixed);
        assert_eq!(text, "Plain words in a plain order.");
        assert!(changes.is_empty());
    }

    #[test]
    fn test_changes_deduplicate_at_outcome_level() {
        // Duplicate change names across sentences collapse in the outcome.
        let outcome = HumanizeOutcome::new(
            "x".to_string(),
            vec!["is".to_string(), "is".to_string()],
        );
        assert_eq!(outcome.changes.len(), 1);
    }
}
