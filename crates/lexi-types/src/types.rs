use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// Normalized word used as lookup and dedup key.
///
/// Built by `lexi_core::normalize`; this crate only carries the value.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordKey(String);

impl WordKey {
    /// Wrap an already normalized string
    pub fn from_normalized(word: String) -> Self {
        Self(word)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for WordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for WordKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One word queued for resolution, with the languages to try in order
#[derive(Debug, Clone)]
pub struct LookupRequest {
    pub word: WordKey,
    pub languages: Arc<[Language]>,
}

impl LookupRequest {
    pub fn new(word: WordKey, languages: Arc<[Language]>) -> Self {
        Self { word, languages }
    }
}

/// Normalized result of a successful dictionary lookup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionRecord {
    pub word: WordKey,
    /// Canonical written form, script-aware backends only
    pub expression: String,
    /// Phonetic reading, script-aware backends only
    pub reading: String,
    pub definition: String,
    pub part_of_speech: String,
    pub example: String,
}

impl DefinitionRecord {
    pub fn is_empty(&self) -> bool {
        self.definition.trim().is_empty()
    }
}

/// Result of resolving one [`LookupRequest`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Found(DefinitionRecord),
    NotFound,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedWord {
    pub word: WordKey,
    pub reason: String,
}

/// Batch result split by outcome
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FetchReport {
    pub found: Vec<DefinitionRecord>,
    pub not_found: Vec<WordKey>,
    pub failed: Vec<FailedWord>,
}

impl FetchReport {
    pub fn from_outcomes(outcomes: impl IntoIterator<Item = (WordKey, FetchOutcome)>) -> Self {
        let mut report = Self::default();
        for (word, outcome) in outcomes {
            report.push(word, outcome);
        }
        report
    }

    pub fn push(&mut self, word: WordKey, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Found(record) => self.found.push(record),
            FetchOutcome::NotFound => self.not_found.push(word),
            FetchOutcome::Failed(reason) => self.failed.push(FailedWord { word, reason }),
        }
    }

    /// Number of words accounted for
    pub fn total(&self) -> usize {
        self.found.len() + self.not_found.len() + self.failed.len()
    }

    /// Words that produced no definition, for blacklist/failed-word reporting
    pub fn missing_words(&self) -> impl Iterator<Item = &WordKey> {
        self.not_found
            .iter()
            .chain(self.failed.iter().map(|failed| &failed.word))
    }

    /// Definitions only, dropping words without one
    pub fn into_definitions(self) -> Vec<DefinitionRecord> {
        self.found
    }
}
