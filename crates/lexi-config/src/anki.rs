use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AnkiConfig {
    /// Enable Anki integration
    pub enabled: bool,
    /// AnkiConnect URL
    pub url: String,
    /// Deck new notes are added to
    pub deck: String,
    /// Note type, needs `Front` and `Back` fields
    pub model: String,
    /// Per-request timeout for AnkiConnect calls
    pub timeout_ms: u64,
}

impl AnkiConfig {
    pub fn new() -> Self {
        let defaults = Self::default();
        Self {
            url: std::env::var("ANKI_URL").unwrap_or(defaults.url),
            deck: std::env::var("ANKI_DECK").unwrap_or(defaults.deck),
            ..defaults
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for AnkiConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            url: "http://localhost:8765".to_string(),
            deck: "Vocabulary".to_string(),
            model: "Basic".to_string(),
            timeout_ms: 5_000,
        }
    }
}
