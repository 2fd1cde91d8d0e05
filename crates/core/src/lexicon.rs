//! Lexical resource tables
//!
//! All substitution vocabulary lives here: the AI-phrase map, word-class
//! scoped synonyms, tone-bucketed fillers, slang and typo tables,
//! punctuation variants and the keyword lists the tone classifier reads.
//! Pure data — loaded once at engine construction, immutable afterwards.

use crate::error::EngineError;
use crate::tokenizers::WordClass;
use crate::tone::Tone;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

// ============================================================================
// Built-in tables
// ============================================================================

/// AI-sounding connective phrases and their human-register alternatives.
/// Alternatives never include the source phrase itself.
const PHRASE_MAP: &[(&str, &[&str])] = &[
    ("Moreover", &["Furthermore", "In addition", "Besides", "Likewise", "Also"]),
    ("Additionally", &["Furthermore", "Moreover", "Plus", "In addition", "Besides"]),
    ("Furthermore", &["Moreover", "Also", "In addition", "Besides", "And"]),
    ("However", &["Nonetheless", "Nevertheless", "Yet", "Still", "Conversely"]),
    ("Therefore", &["Thus", "Hence", "Consequently", "As a result", "For that reason"]),
    ("In conclusion", &["To wrap up", "All told", "In the end", "Ultimately"]),
    ("In summary", &["To sum up", "All in all", "Briefly", "In short"]),
    ("It is important to note", &["Worth mentioning", "Keep in mind", "Note"]),
    ("It is worth noting", &["Worth mentioning", "Interestingly", "Notably"]),
    ("delve into", &["dig into", "look at", "explore", "get into"]),
    ("leverage", &["use", "draw on", "rely on", "put to work"]),
    ("utilize", &["use", "employ", "apply", "work with"]),
    ("facilitate", &["help", "ease", "enable", "support"]),
    ("comprehensive", &["thorough", "complete", "full", "broad"]),
    ("crucial", &["key", "vital", "central", "essential"]),
    ("seamless", &["smooth", "effortless", "fluid"]),
    ("robust", &["solid", "sturdy", "reliable", "dependable"]),
    ("Dividing", &["Segmenting", "Partitioning", "Splitting", "Separating", "Categorizing"]),
    ("Selecting", &["Choosing", "Identifying", "Picking", "Determining", "Targeting"]),
    ("Establishing", &["Creating", "Defining", "Building", "Forming", "Setting up"]),
    ("visualize", &["illustrate", "depict", "represent", "demonstrate", "show"]),
];

const NOUN_SYNONYMS: &[(&str, &[&str])] = &[
    ("analysis", &["review", "examination", "breakdown", "assessment"]),
    ("approach", &["method", "strategy", "route", "tactic"]),
    ("aspect", &["facet", "side", "angle", "dimension"]),
    ("benefit", &["advantage", "gain", "upside", "payoff"]),
    ("challenge", &["difficulty", "hurdle", "obstacle", "problem"]),
    ("company", &["firm", "business", "organization", "outfit"]),
    ("concept", &["idea", "notion", "principle"]),
    ("customer", &["client", "buyer", "consumer", "patron"]),
    ("data", &["figures", "numbers", "records", "information"]),
    ("goal", &["aim", "target", "objective", "ambition"]),
    ("idea", &["thought", "notion", "concept", "suggestion"]),
    ("impact", &["effect", "influence", "consequence"]),
    ("issue", &["problem", "matter", "concern", "question"]),
    ("market", &["marketplace", "sector", "industry"]),
    ("method", &["approach", "technique", "procedure", "way"]),
    ("outcome", &["result", "consequence", "upshot", "effect"]),
    ("problem", &["issue", "difficulty", "trouble", "snag"]),
    ("process", &["procedure", "workflow", "operation", "routine"]),
    ("product", &["item", "offering", "good"]),
    ("project", &["effort", "initiative", "undertaking", "venture"]),
    ("research", &["study", "investigation", "inquiry"]),
    ("result", &["outcome", "finding", "consequence", "upshot"]),
    ("solution", &["answer", "fix", "remedy", "resolution"]),
    ("strategy", &["plan", "approach", "game plan", "tactic"]),
    ("study", &["research", "survey", "investigation", "analysis"]),
    ("system", &["setup", "framework", "arrangement", "structure"]),
    ("team", &["group", "crew", "unit", "squad"]),
    ("technology", &["tech", "tooling", "machinery"]),
    ("thing", &["matter", "object", "affair", "detail"]),
    ("way", &["manner", "method", "route", "approach"]),
];

const VERB_SYNONYMS: &[(&str, &[&str])] = &[
    ("achieve", &["reach", "attain", "accomplish", "manage"]),
    ("analyze", &["examine", "study", "review", "inspect"]),
    ("build", &["construct", "create", "assemble", "put together"]),
    ("create", &["make", "produce", "build", "generate"]),
    ("demonstrate", &["show", "prove", "illustrate", "reveal"]),
    ("develop", &["build", "create", "grow", "shape"]),
    ("enable", &["allow", "let", "permit", "make possible"]),
    ("enhance", &["improve", "boost", "strengthen", "sharpen"]),
    ("ensure", &["make sure", "guarantee", "see to it", "confirm"]),
    ("examine", &["inspect", "study", "review", "look at"]),
    ("explain", &["clarify", "describe", "spell out", "lay out"]),
    ("help", &["assist", "aid", "support"]),
    ("identify", &["spot", "pinpoint", "recognize", "find"]),
    ("implement", &["carry out", "put in place", "roll out", "apply"]),
    ("improve", &["better", "refine", "polish", "upgrade"]),
    ("increase", &["raise", "grow", "boost", "expand"]),
    ("indicate", &["suggest", "point to", "signal", "show"]),
    ("obtain", &["get", "acquire", "secure", "gain"]),
    ("provide", &["give", "offer", "supply", "deliver"]),
    ("reduce", &["cut", "lower", "shrink", "trim"]),
    ("require", &["need", "call for", "demand"]),
    ("show", &["demonstrate", "reveal", "display", "illustrate"]),
    ("suggest", &["propose", "hint", "imply", "recommend"]),
    ("support", &["back", "uphold", "bolster", "reinforce"]),
    ("understand", &["grasp", "follow", "make sense of", "get"]),
    ("use", &["apply", "employ", "work with", "draw on"]),
];

const GENERAL_SYNONYMS: &[(&str, &[&str])] = &[
    ("also", &["too", "as well", "besides"]),
    ("big", &["large", "vast", "substantial", "sizable"]),
    ("different", &["distinct", "varied", "unlike"]),
    ("easy", &["simple", "straightforward", "painless"]),
    ("fast", &["quick", "rapid", "swift", "speedy"]),
    ("good", &["fine", "solid", "decent", "strong"]),
    ("great", &["excellent", "remarkable", "superb"]),
    ("hard", &["difficult", "tough", "tricky", "demanding"]),
    ("important", &["key", "vital", "significant", "central"]),
    ("interesting", &["intriguing", "compelling", "engaging"]),
    ("large", &["big", "sizable", "substantial", "extensive"]),
    ("many", &["numerous", "plenty of", "a lot of"]),
    ("new", &["fresh", "recent", "novel"]),
    ("often", &["frequently", "regularly", "commonly"]),
    ("quickly", &["swiftly", "rapidly", "briskly"]),
    ("really", &["truly", "genuinely", "certainly"]),
    ("significant", &["notable", "considerable", "meaningful"]),
    ("small", &["tiny", "slight", "modest", "compact"]),
    ("very", &["quite", "remarkably", "particularly"]),
];

/// Words skipped by synonym substitution.
const STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "been", "but", "by", "can",
    "could", "did", "do", "does", "for", "from", "had", "has", "have", "he",
    "her", "him", "his", "i", "if", "in", "into", "is", "it", "its", "may",
    "me", "might", "must", "no", "not", "of", "on", "or", "our", "she",
    "should", "so", "than", "that", "the", "their", "them", "then", "there",
    "these", "they", "this", "those", "to", "up", "was", "we", "were", "what",
    "when", "which", "who", "will", "with", "would", "you", "your",
];

const CASUAL_FILLERS: &[&str] = &[
    "you know", "honestly", "to be fair", "kind of", "pretty much",
    "at the end of the day", "if you ask me",
];

const FORMAL_FILLERS: &[&str] = &[
    "in particular", "notably", "to a degree", "in practice",
    "on balance", "as such",
];

const NEUTRAL_FILLERS: &[&str] = &[
    "of course", "naturally", "in a way", "after all",
];

/// Personal-observation openers for the human-touch stage.
const OBSERVATIONS: &[&str] = &[
    "From what I've seen,",
    "In my experience,",
    "Honestly,",
    "If I'm being honest,",
    "The way I see it,",
];

/// Sentence connectors, kept from the source vocabulary.
const CONNECTORS: &[&str] = &[
    "For instance", "Specifically", "In contrast", "Indeed", "Alternatively",
];

const SLANG: &[(&str, &str)] = &[
    ("going to", "gonna"),
    ("want to", "wanna"),
    ("got to", "gotta"),
    ("kind of", "kinda"),
    ("sort of", "sorta"),
    ("because", "cause"),
    ("about", "bout"),
    ("them", "em"),
];

/// Letter-swapped typo forms, applied sparingly by the slang stage.
const TYPOS: &[(&str, &str)] = &[
    ("the", "teh"),
    ("and", "adn"),
    ("with", "wiht"),
    ("just", "jsut"),
    ("that", "taht"),
    ("have", "ahve"),
];

const EMOTICONS: &[&str] = &[":)", ":D", ";)", "haha", "lol"];

const INTERJECTIONS: &[&str] = &["well,", "look,", "I mean,", "right,"];

/// Hedged copula rewrites used by the tone-adjustment stage.
const HEDGES: &[&str] = &["appears to be", "seems to be"];

const CASUAL_TAGS: &[&str] = &[", you know?", ", right?", ", honestly."];

/// Terminal punctuation variants. The bool marks formal-appropriate forms.
const PUNCT_VARIANTS: &[(char, &[(&str, bool)])] = &[
    ('.', &[("!", false), ("...", false), ("?", false), (".", true)]),
    ('!', &[(".", true), ("!?", false), ("!!", false)]),
    ('?', &[("?!", false), ("...", false), (".", true)]),
];

/// Small valence table for the sentiment score. Weights follow the
/// AFINN convention: -3..=3.
const VALENCE: &[(&str, i8)] = &[
    ("amazing", 3), ("awesome", 3), ("excellent", 3), ("fantastic", 3),
    ("love", 3), ("wonderful", 3), ("best", 3), ("brilliant", 3),
    ("good", 2), ("great", 2), ("happy", 2), ("impressive", 2),
    ("positive", 2), ("success", 2), ("successful", 2), ("valuable", 2),
    ("beneficial", 2), ("enjoy", 2), ("improved", 2), ("win", 2),
    ("useful", 1), ("helpful", 1), ("fine", 1), ("solid", 1), ("like", 1),
    ("bad", -2), ("poor", -2), ("negative", -2), ("problem", -1),
    ("difficult", -1), ("fail", -2), ("failure", -2), ("worse", -2),
    ("wrong", -2), ("sad", -2), ("angry", -2), ("hate", -3),
    ("terrible", -3), ("awful", -3), ("horrible", -3), ("worst", -3),
    ("disaster", -3), ("useless", -2), ("broken", -2), ("annoying", -2),
];

const FORMAL_KEYWORDS: &[&str] = &[
    "research", "study", "analysis", "therefore", "however", "furthermore",
    "moreover", "consequently", "methodology", "hypothesis", "thus",
];

const CASUAL_KEYWORDS: &[&str] = &[
    "cool", "nice", "fun", "easy", "awesome", "stuff", "guys", "okay",
    "yeah", "pretty",
];

/// Contraction pairs for the whole-text register pass:
/// (contracted, expanded).
const CONTRACTIONS: &[(&str, &str)] = &[
    ("don't", "do not"),
    ("doesn't", "does not"),
    ("didn't", "did not"),
    ("can't", "cannot"),
    ("won't", "will not"),
    ("isn't", "is not"),
    ("aren't", "are not"),
    ("wasn't", "was not"),
    ("weren't", "were not"),
    ("it's", "it is"),
    ("that's", "that is"),
    ("there's", "there is"),
    ("we're", "we are"),
    ("they're", "they are"),
    ("you're", "you are"),
    ("i'm", "I am"),
    ("we've", "we have"),
    ("you've", "you have"),
    ("they've", "they have"),
    ("shouldn't", "should not"),
    ("couldn't", "could not"),
    ("wouldn't", "would not"),
];

// ============================================================================
// Lexicon
// ============================================================================

/// The immutable lexical resource consumed by every stage.
///
/// Construct with [`Lexicon::builtin`] for the embedded tables, or
/// [`Lexicon::from_dir`] to load the phrase map (and optionally synonym and
/// filler tables) from JSON files.
#[derive(Debug, Clone)]
pub struct Lexicon {
    phrases: Vec<(String, Vec<String>)>,
    noun_synonyms: HashMap<String, Vec<String>>,
    verb_synonyms: HashMap<String, Vec<String>>,
    general_synonyms: HashMap<String, Vec<String>>,
    casual_fillers: Vec<String>,
    formal_fillers: Vec<String>,
    neutral_fillers: Vec<String>,
    observations: Vec<String>,
    connectors: Vec<String>,
}

fn to_map(table: &[(&str, &[&str])]) -> HashMap<String, Vec<String>> {
    table
        .iter()
        .map(|(k, vs)| {
            (
                k.to_string(),
                vs.iter().map(|v| v.to_string()).collect(),
            )
        })
        .collect()
}

fn to_string_vec(table: &[&str]) -> Vec<String> {
    table.iter().map(|s| s.to_string()).collect()
}

impl Lexicon {
    /// Build the lexicon from the embedded tables. Never fails.
    pub fn builtin() -> Self {
        Self {
            phrases: PHRASE_MAP
                .iter()
                .map(|(k, vs)| {
                    (
                        k.to_string(),
                        vs.iter().map(|v| v.to_string()).collect(),
                    )
                })
                .collect(),
            noun_synonyms: to_map(NOUN_SYNONYMS),
            verb_synonyms: to_map(VERB_SYNONYMS),
            general_synonyms: to_map(GENERAL_SYNONYMS),
            casual_fillers: to_string_vec(CASUAL_FILLERS),
            formal_fillers: to_string_vec(FORMAL_FILLERS),
            neutral_fillers: to_string_vec(NEUTRAL_FILLERS),
            observations: to_string_vec(OBSERVATIONS),
            connectors: to_string_vec(CONNECTORS),
        }
    }

    /// Builtin tables with the phrase map replaced. Useful for callers that
    /// ship their own phrase vocabulary without a resource directory.
    pub fn with_phrases(phrases: Vec<(String, Vec<String>)>) -> Self {
        let mut lexicon = Self::builtin();
        lexicon.phrases = phrases;
        lexicon
    }

    /// Load lexical tables from a resource directory.
    ///
    /// `phrase_map.json` is required; construction fails with
    /// [`EngineError::MissingResource`] when the directory or that file is
    /// absent. `synonyms.json` and `fillers.json` are optional overrides —
    /// when missing, the embedded tables are kept.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, EngineError> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(EngineError::MissingResource(dir.display().to_string()));
        }

        let mut lexicon = Self::builtin();

        let phrase_path = dir.join("phrase_map.json");
        if !phrase_path.is_file() {
            return Err(EngineError::MissingResource(
                phrase_path.display().to_string(),
            ));
        }
        let phrases: HashMap<String, Vec<String>> = read_json(&phrase_path)?;
        lexicon.phrases = phrases.into_iter().collect();
        // Keep iteration order stable across loads.
        lexicon.phrases.sort_by(|a, b| a.0.cmp(&b.0));

        let synonym_path = dir.join("synonyms.json");
        if synonym_path.is_file() {
            let tables: SynonymTables = read_json(&synonym_path)?;
            if let Some(nouns) = tables.noun {
                lexicon.noun_synonyms = nouns;
            }
            if let Some(verbs) = tables.verb {
                lexicon.verb_synonyms = verbs;
            }
            if let Some(general) = tables.general {
                lexicon.general_synonyms = general;
            }
        }

        let filler_path = dir.join("fillers.json");
        if filler_path.is_file() {
            let tables: FillerTables = read_json(&filler_path)?;
            if let Some(casual) = tables.casual {
                lexicon.casual_fillers = casual;
            }
            if let Some(formal) = tables.formal {
                lexicon.formal_fillers = formal;
            }
            if let Some(neutral) = tables.neutral {
                lexicon.neutral_fillers = neutral;
            }
            if let Some(observations) = tables.observations {
                lexicon.observations = observations;
            }
            if let Some(connectors) = tables.connectors {
                lexicon.connectors = connectors;
            }
        }

        Ok(lexicon)
    }

    /// The AI-phrase substitution table, in stable order.
    pub fn phrases(&self) -> &[(String, Vec<String>)] {
        &self.phrases
    }

    /// Class-scoped synonym lookup. Noun tables are consulted only for
    /// noun-like tokens, verb tables only for verb-like ones; everything
    /// else falls back to the general table.
    pub fn synonyms_for(&self, word: &str, class: WordClass) -> Option<&[String]> {
        let table = match class {
            WordClass::Noun => &self.noun_synonyms,
            WordClass::Verb => &self.verb_synonyms,
            WordClass::Other => &self.general_synonyms,
        };
        table.get(&word.to_lowercase()).map(|v| v.as_slice())
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        STOPWORDS.contains(&word.to_lowercase().as_str())
    }

    /// Filler phrases appropriate for the given tone.
    pub fn fillers_for(&self, tone: Tone) -> &[String] {
        match tone {
            Tone::Casual | Tone::Positive => &self.casual_fillers,
            Tone::Formal => &self.formal_fillers,
            Tone::Negative | Tone::Mixed => &self.neutral_fillers,
        }
    }

    pub fn observations(&self) -> &[String] {
        &self.observations
    }

    pub fn connectors(&self) -> &[String] {
        &self.connectors
    }

    /// The full slang table as (source, contraction) pairs.
    pub fn slang_entries(&self) -> &'static [(&'static str, &'static str)] {
        SLANG
    }

    pub fn slang_for(&self, word: &str) -> Option<&'static str> {
        SLANG
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(word))
            .map(|(_, v)| *v)
    }

    pub fn typo_for(&self, word: &str) -> Option<&'static str> {
        TYPOS
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(word))
            .map(|(_, v)| *v)
    }

    pub fn emoticons(&self) -> &'static [&'static str] {
        EMOTICONS
    }

    pub fn interjections(&self) -> &'static [&'static str] {
        INTERJECTIONS
    }

    pub fn hedges(&self) -> &'static [&'static str] {
        HEDGES
    }

    pub fn casual_tags(&self) -> &'static [&'static str] {
        CASUAL_TAGS
    }

    /// Terminal punctuation variants for `mark`. When `formal_only` is set,
    /// only formal-appropriate marks are returned.
    pub fn punctuation_variants(&self, mark: char, formal_only: bool) -> Vec<&'static str> {
        PUNCT_VARIANTS
            .iter()
            .find(|(m, _)| *m == mark)
            .map(|(_, variants)| {
                variants
                    .iter()
                    .filter(|(_, formal)| !formal_only || *formal)
                    .map(|(v, _)| *v)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Valence weight for a word, 0 when unknown.
    pub fn valence(&self, word: &str) -> i8 {
        VALENCE
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(word))
            .map(|(_, v)| *v)
            .unwrap_or(0)
    }

    pub fn is_formal_keyword(&self, word: &str) -> bool {
        FORMAL_KEYWORDS.contains(&word.to_lowercase().as_str())
    }

    pub fn is_casual_keyword(&self, word: &str) -> bool {
        CASUAL_KEYWORDS.contains(&word.to_lowercase().as_str())
    }

    /// Contraction pairs as (contracted, expanded).
    pub fn contractions(&self) -> &'static [(&'static str, &'static str)] {
        CONTRACTIONS
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

// ============================================================================
// Resource file formats
// ============================================================================

#[derive(Debug, Deserialize)]
struct SynonymTables {
    noun: Option<HashMap<String, Vec<String>>>,
    verb: Option<HashMap<String, Vec<String>>>,
    general: Option<HashMap<String, Vec<String>>>,
}

#[derive(Debug, Deserialize)]
struct FillerTables {
    casual: Option<Vec<String>>,
    formal: Option<Vec<String>>,
    neutral: Option<Vec<String>>,
    observations: Option<Vec<String>>,
    connectors: Option<Vec<String>>,
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, EngineError> {
    let raw = std::fs::read_to_string(path).map_err(|source| EngineError::ResourceIo {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| EngineError::InvalidResource {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_phrases() {
        let lexicon = Lexicon::builtin();
        assert!(!lexicon.phrases().is_empty());
        assert!(lexicon
            .phrases()
            .iter()
            .any(|(phrase, _)| phrase == "Moreover"));
    }

    #[test]
    fn test_alternatives_never_contain_source() {
        let lexicon = Lexicon::builtin();
        for (phrase, alternatives) in lexicon.phrases() {
            for alt in alternatives {
                assert!(
                    !alt.eq_ignore_ascii_case(phrase),
                    "{} maps to itself",
                    phrase
                );
            }
        }
    }

    #[test]
    fn test_synonyms_are_class_scoped() {
        let lexicon = Lexicon::builtin();
        assert!(lexicon.synonyms_for("market", WordClass::Noun).is_some());
        assert!(lexicon.synonyms_for("market", WordClass::Verb).is_none());
        assert!(lexicon.synonyms_for("improve", WordClass::Verb).is_some());
    }

    #[test]
    fn test_stopwords() {
        let lexicon = Lexicon::builtin();
        assert!(lexicon.is_stopword("the"));
        assert!(lexicon.is_stopword("The"));
        assert!(!lexicon.is_stopword("market"));
    }

    #[test]
    fn test_fillers_by_tone() {
        let lexicon = Lexicon::builtin();
        assert!(!lexicon.fillers_for(Tone::Casual).is_empty());
        assert!(!lexicon.fillers_for(Tone::Formal).is_empty());
        assert_ne!(
            lexicon.fillers_for(Tone::Casual),
            lexicon.fillers_for(Tone::Formal)
        );
    }

    #[test]
    fn test_formal_punctuation_variants_are_restricted() {
        let lexicon = Lexicon::builtin();
        let all = lexicon.punctuation_variants('.', false);
        let formal = lexicon.punctuation_variants('.', true);
        assert!(all.len() > formal.len());
        assert!(formal.iter().all(|v| *v == "."));
    }

    #[test]
    fn test_valence_signs() {
        let lexicon = Lexicon::builtin();
        assert!(lexicon.valence("excellent") > 0);
        assert!(lexicon.valence("terrible") < 0);
        assert_eq!(lexicon.valence("table"), 0);
    }

    #[test]
    fn test_from_dir_missing_is_fatal() {
        let err = Lexicon::from_dir("/nonexistent/resource/dir").unwrap_err();
        assert!(matches!(err, EngineError::MissingResource(_)));
    }
}
