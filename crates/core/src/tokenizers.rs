//! Sentence segmentation and word tokenization
//!
//! Provides the sentence segmenter used by the orchestrator and the word
//! tokenizer/tagger used by the token-level stages. Both are deterministic:
//! identical input and mode always produce identical output.

use once_cell::sync::Lazy;
use regex::Regex;

/// Sentence boundary: terminal punctuation, optional closing quotes or
/// brackets, then whitespace or end of input.
static SENTENCE_BOUNDARY: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r#"[.!?]["'\u{201D}\u{2019})\]]*(\s+|$)"#).ok());

/// Split raw input into an ordered list of sentence strings.
///
/// Terminal punctuation stays attached to its sentence and empty or
/// whitespace-only segments are dropped. Never fails: when the boundary
/// pattern is unavailable the splitter degrades to a plain `.` split.
pub fn segment_sentences(text: &str) -> Vec<String> {
    match SENTENCE_BOUNDARY.as_ref() {
        Some(boundary) => segment_with(boundary, text),
        None => segment_naive(text),
    }
}

fn segment_with(boundary: &Regex, text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in boundary.find_iter(text) {
        let sentence = text[start..m.end()].trim();
        if !sentence.is_empty() {
            sentences.push(sentence.to_string());
        }
        start = m.end();
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }

    sentences
}

/// Degraded splitter: break on `.` alone.
fn segment_naive(text: &str) -> Vec<String> {
    text.split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| format!("{}.", s))
        .collect()
}

// ============================================================================
// Word tokenization and tagging
// ============================================================================

/// Coarse grammatical class assigned to each token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordClass {
    /// Noun-like content word
    Noun,
    /// Verb-like content word
    Verb,
    /// Function word, punctuation, number, or anything unclassified
    Other,
}

/// A word or punctuation unit with its coarse tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordToken {
    pub text: String,
    pub class: WordClass,
    pub is_punct: bool,
}

impl WordToken {
    pub fn word(text: impl Into<String>, class: WordClass) -> Self {
        Self {
            text: text.into(),
            class,
            is_punct: false,
        }
    }

    pub fn punctuation(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class: WordClass::Other,
            is_punct: true,
        }
    }
}

/// Tagging behavior for [`WordTokenizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaggerMode {
    /// Suffix/closed-class heuristic tagging
    #[default]
    Heuristic,
    /// Degraded mode: whitespace splitting, every token tagged Other
    Disabled,
}

/// Splits a sentence into word and punctuation tokens and tags each one.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer {
    pub mode: TaggerMode,
}

impl WordTokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: TaggerMode) -> Self {
        self.mode = mode;
        self
    }

    /// Tokenize a single sentence.
    pub fn tokenize(&self, sentence: &str) -> Vec<WordToken> {
        match self.mode {
            TaggerMode::Heuristic => tokenize_scan(sentence),
            TaggerMode::Disabled => sentence
                .split_whitespace()
                .map(|w| WordToken::word(w, WordClass::Other))
                .collect(),
        }
    }
}

/// Character-class scan: contiguous word characters form word tokens,
/// each punctuation character its own token, whitespace separates.
/// An apostrophe between letters stays inside the word ("don't").
fn tokenize_scan(sentence: &str) -> Vec<WordToken> {
    let chars: Vec<char> = sentence.chars().collect();
    let mut tokens = Vec::new();
    let mut current = String::new();

    fn flush(current: &mut String, tokens: &mut Vec<WordToken>) {
        if !current.is_empty() {
            let class = tag_word(current);
            tokens.push(WordToken::word(current.clone(), class));
            current.clear();
        }
    }

    for (i, &ch) in chars.iter().enumerate() {
        if ch.is_alphanumeric() {
            current.push(ch);
        } else if ch == '\'' || ch == '\u{2019}' {
            let prev_word = i > 0 && chars[i - 1].is_alphanumeric();
            let next_word = i + 1 < chars.len() && chars[i + 1].is_alphanumeric();
            if prev_word && next_word {
                current.push(ch);
            } else {
                flush(&mut current, &mut tokens);
                tokens.push(WordToken::punctuation(ch.to_string()));
            }
        } else if ch.is_whitespace() {
            flush(&mut current, &mut tokens);
        } else {
            flush(&mut current, &mut tokens);
            tokens.push(WordToken::punctuation(ch.to_string()));
        }
    }
    flush(&mut current, &mut tokens);

    tokens
}

/// Closed-class words always tagged Other.
const FUNCTION_WORDS: &[&str] = &[
    "a", "an", "and", "as", "at", "but", "by", "for", "from", "if", "in",
    "into", "it", "its", "no", "not", "of", "on", "or", "so", "than", "that",
    "the", "their", "them", "then", "there", "these", "they", "this",
    "those", "to", "up", "we", "what", "when", "which", "who", "with", "you",
    "your", "he", "she", "him", "her", "his", "i", "me", "my", "our",
];

const VERB_WORDS: &[&str] = &[
    "is", "are", "was", "were", "be", "been", "being", "am", "has", "have",
    "had", "do", "does", "did", "can", "could", "will", "would", "may",
    "might", "must", "shall", "should", "get", "got", "make", "makes",
    "made", "go", "goes", "went", "take", "takes", "took", "use", "show",
    "help", "need", "want", "become", "became", "seem", "seems",
];

const VERB_SUFFIXES: &[&str] = &["ize", "ise", "ate", "ify", "ing", "ed"];

const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "ness", "ity", "ance", "ence", "ship", "ism",
    "ist", "age", "ology", "er", "or",
];

/// Assign a coarse tag to a single word.
pub fn tag_word(word: &str) -> WordClass {
    if !word.chars().next().is_some_and(|c| c.is_alphabetic()) {
        return WordClass::Other;
    }

    let lower = word.to_lowercase();
    if FUNCTION_WORDS.contains(&lower.as_str()) {
        return WordClass::Other;
    }
    if VERB_WORDS.contains(&lower.as_str()) {
        return WordClass::Verb;
    }
    if lower.len() > 4 && VERB_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return WordClass::Verb;
    }
    if lower.len() > 4 && NOUN_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return WordClass::Noun;
    }

    // Content words default to noun-like, matching coarse taggers.
    WordClass::Noun
}

/// Reassemble tokens into a sentence: words joined with single spaces,
/// punctuation attached to the preceding token.
pub fn join_tokens(tokens: &[WordToken]) -> String {
    let mut out = String::new();
    for token in tokens {
        if token.is_punct {
            out.push_str(&token.text);
        } else {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&token.text);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_basic() {
        let sentences = segment_sentences("First sentence. Second one! Third?");
        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[0], "First sentence.");
        assert_eq!(sentences[1], "Second one!");
        assert_eq!(sentences[2], "Third?");
    }

    #[test]
    fn test_segment_drops_empty_entries() {
        let sentences = segment_sentences("One.   . Two.");
        assert!(sentences.iter().all(|s| !s.trim().is_empty()));
    }

    #[test]
    fn test_segment_rejoin_preserves_text() {
        let text = "The study was thorough. Results were strong.";
        let sentences = segment_sentences(text);
        assert_eq!(sentences.join(" "), text);
    }

    #[test]
    fn test_segment_keeps_unterminated_tail() {
        let sentences = segment_sentences("Complete sentence. trailing fragment");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[1], "trailing fragment");
    }

    #[test]
    fn test_segment_naive_fallback() {
        let sentences = segment_naive("One. Two. Three.");
        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[0], "One.");
    }

    #[test]
    fn test_tokenize_words_and_punctuation() {
        let tokenizer = WordTokenizer::new();
        let tokens = tokenizer.tokenize("Hello, world.");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Hello", ",", "world", "."]);
        assert!(tokens[1].is_punct);
    }

    #[test]
    fn test_tokenize_keeps_contractions_whole() {
        let tokenizer = WordTokenizer::new();
        let tokens = tokenizer.tokenize("don't stop");
        assert_eq!(tokens[0].text, "don't");
    }

    #[test]
    fn test_disabled_mode_tags_everything_other() {
        let tokenizer = WordTokenizer::new().with_mode(TaggerMode::Disabled);
        let tokens = tokenizer.tokenize("The market is large.");
        assert!(tokens.iter().all(|t| t.class == WordClass::Other));
    }

    #[test]
    fn test_tagger_is_deterministic() {
        let tokenizer = WordTokenizer::new();
        let a = tokenizer.tokenize("The analysis shows strong results.");
        let b = tokenizer.tokenize("The analysis shows strong results.");
        assert_eq!(a, b);
    }

    #[test]
    fn test_tag_word_classes() {
        assert_eq!(tag_word("the"), WordClass::Other);
        assert_eq!(tag_word("is"), WordClass::Verb);
        assert_eq!(tag_word("organization"), WordClass::Noun);
        assert_eq!(tag_word("running"), WordClass::Verb);
        assert_eq!(tag_word("market"), WordClass::Noun);
        assert_eq!(tag_word("42"), WordClass::Other);
    }

    #[test]
    fn test_join_tokens_attaches_punctuation() {
        let tokenizer = WordTokenizer::new();
        let tokens = tokenizer.tokenize("Hello, world.");
        assert_eq!(join_tokens(&tokens), "Hello, world.");
    }
}
