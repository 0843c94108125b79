use std::sync::Arc;
use std::time::Duration;

use lexi_config::fetch::FetchConfig;
use lexi_types::Language;

use crate::error::InvalidRequest;
use crate::resolver::RetryPolicy;

/// Validated, read-only settings for one batch run
#[derive(Debug, Clone)]
pub struct FetchPlan {
    pub languages: Arc<[Language]>,
    pub workers: usize,
    pub timeout: Duration,
    pub retry: RetryPolicy,
}

impl FetchPlan {
    /// Check `config` against the language allowlist and size the worker pool for `word_count`
    pub fn new(config: &FetchConfig, word_count: usize) -> Result<Self, InvalidRequest> {
        let languages = parse_languages(&config.language_list)?;

        if config.thread_count == 0 {
            return Err(InvalidRequest::ZeroThreads);
        }
        if config.timeout_ms == 0 {
            return Err(InvalidRequest::ZeroTimeout);
        }
        if word_count == 0 {
            return Err(InvalidRequest::NoWords);
        }

        Ok(Self {
            languages: languages.into(),
            // never more workers than words
            workers: config.thread_count.min(word_count),
            timeout: config.timeout(),
            retry: RetryPolicy {
                max_retries: config.max_retries,
                delay: config.retry_delay(),
            },
        })
    }
}

/// Parse configured codes in order, rejecting the list if any code is unsupported
pub fn parse_languages(codes: &[String]) -> Result<Vec<Language>, InvalidRequest> {
    if codes.is_empty() {
        return Err(InvalidRequest::EmptyLanguageList);
    }

    codes
        .iter()
        .map(|code| code.parse::<Language>().map_err(InvalidRequest::from))
        .collect()
}
