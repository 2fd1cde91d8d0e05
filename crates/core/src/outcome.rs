//! Result types returned by the engine

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// The result of a humanization run: the rewritten text plus the set of
/// tokens and phrases the pipeline altered, for diff display.
///
/// The change list has set semantics. Duplicates are removed and the order
/// carries no meaning; it is kept sorted so results are stable.
#[derive(Debug, Clone, Serialize)]
pub struct HumanizeOutcome {
    /// The rewritten text. Non-empty unless the input was empty.
    pub text: String,

    /// Deduplicated list of altered tokens/phrases.
    pub changes: Vec<String>,
}

impl HumanizeOutcome {
    /// Build an outcome, deduplicating the raw change list.
    pub fn new(text: String, changes: Vec<String>) -> Self {
        let deduped: BTreeSet<String> = changes.into_iter().collect();
        Self {
            text,
            changes: deduped.into_iter().collect(),
        }
    }

    /// An outcome carrying a fixed message and no changes.
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            changes: Vec::new(),
        }
    }

    /// Whether the run recorded any change at all.
    pub fn is_unchanged(&self) -> bool {
        self.changes.is_empty()
    }
}

impl fmt::Display for HumanizeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
