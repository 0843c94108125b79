use serde::{Deserialize, Serialize};

fn default_entries_url() -> String {
    "https://api.dictionaryapi.dev/api/v2".to_string()
}

fn default_search_url() -> String {
    "https://jisho.org/api/v1".to_string()
}

/// Base URLs of the remote dictionary services
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Serves `GET /entries/{lang}/{word}`
    #[serde(default = "default_entries_url")]
    pub entries_url: String,
    /// Serves `GET /search/words?keyword={word}`
    #[serde(default = "default_search_url")]
    pub search_url: String,
}

impl DictionaryConfig {
    pub fn new() -> Self {
        let entries_url =
            std::env::var("LEXI_ENTRIES_URL").unwrap_or_else(|_| default_entries_url());
        let search_url = std::env::var("LEXI_SEARCH_URL").unwrap_or_else(|_| default_search_url());

        Self {
            entries_url,
            search_url,
        }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            entries_url: default_entries_url(),
            search_url: default_search_url(),
        }
    }
}
