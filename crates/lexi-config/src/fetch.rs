use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_language_list() -> Vec<String> {
    vec!["en".to_string()]
}

fn default_thread_count() -> usize {
    10
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_max_retries() -> u32 {
    3
}

/// Settings for one batch of definition lookups
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FetchConfig {
    /// Language codes to try, in priority order
    #[serde(default = "default_language_list")]
    pub language_list: Vec<String>,
    /// Number of concurrent lookup workers
    #[serde(default = "default_thread_count")]
    pub thread_count: usize,
    /// Per-request timeout
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Extra attempts for the same language after a connection failure
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Pause between retries, zero retries immediately
    #[serde(default)]
    pub retry_delay_ms: u64,
}

impl FetchConfig {
    pub fn new() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for the `LEXI_*` keys
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let language_list = lookup("LEXI_LANGUAGES")
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|code| !code.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or(defaults.language_list);

        let thread_count = lookup("LEXI_THREADS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.thread_count);

        let timeout_ms = lookup("LEXI_TIMEOUT_MS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.timeout_ms);

        let max_retries = lookup("LEXI_RETRIES")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_retries);

        let retry_delay_ms = lookup("LEXI_RETRY_DELAY_MS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.retry_delay_ms);

        Self {
            language_list,
            thread_count,
            timeout_ms,
            max_retries,
            retry_delay_ms,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            language_list: default_language_list(),
            thread_count: default_thread_count(),
            timeout_ms: default_timeout_ms(),
            max_retries: default_max_retries(),
            retry_delay_ms: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn env_values_override_defaults() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("LEXI_LANGUAGES", "fr, en,,ja"),
            ("LEXI_THREADS", "4"),
            ("LEXI_RETRIES", "not-a-number"),
        ]);

        let config = FetchConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.language_list, vec!["fr", "en", "ja"]);
        assert_eq!(config.thread_count, 4);
        assert_eq!(config.max_retries, default_max_retries());
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.retry_delay(), Duration::ZERO);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: FetchConfig = serde_json::from_str(r#"{"thread_count": 2}"#).unwrap();
        assert_eq!(config.thread_count, 2);
        assert_eq!(config.language_list, vec!["en"]);
        assert_eq!(config.max_retries, 3);
    }
}
