use serde::{Deserialize, Serialize};

use self::anki::AnkiConfig;
use self::dictionary::DictionaryConfig;
use self::fetch::FetchConfig;
use self::source::SourceConfig;

pub mod anki;
pub mod dictionary;
pub mod fetch;
pub mod source;

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub fetch: FetchConfig,
    pub dictionary: DictionaryConfig,
    pub anki: AnkiConfig,
    pub source: SourceConfig,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        Config {
            fetch: FetchConfig::new(),
            dictionary: DictionaryConfig::new(),
            anki: AnkiConfig::new(),
            source: SourceConfig::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_json_may_omit_sections() {
        let config: Config = serde_json::from_str(
            r#"{
                "fetch": { "language_list": ["ja", "en"], "max_retries": 0 },
                "anki": { "deck": "Kobo" }
            }"#,
        )
        .unwrap();

        assert_eq!(config.fetch.language_list, vec!["ja", "en"]);
        assert_eq!(config.fetch.max_retries, 0);
        assert_eq!(config.fetch.thread_count, FetchConfig::default().thread_count);
        assert_eq!(config.anki.deck, "Kobo");
        assert_eq!(config.anki.model, "Basic");
        assert_eq!(config.dictionary, DictionaryConfig::default());
        assert_eq!(config.source.kobo_mount, None);
    }
}
