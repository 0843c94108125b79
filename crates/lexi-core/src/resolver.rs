use std::time::Duration;

use lexi_types::{DefinitionRecord, FetchOutcome, Language, LookupRequest, WordKey};

use crate::dictionary::{DictionaryBackend, Lookup};
use crate::error::InvalidRequest;

/// How often a language is retried after a connection failure
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Attempts after the first one
    pub max_retries: u32,
    /// Pause before each retry
    pub delay: Duration,
}

/// Try each language of `request` in order, first definition wins.
///
/// Connection failures are retried on the same language, then the next language is tried.
/// Exhausting every language yields `NotFound`.
pub async fn resolve<B>(
    backend: &B,
    request: &LookupRequest,
    timeout: Duration,
    retry: RetryPolicy,
) -> FetchOutcome
where
    B: DictionaryBackend + ?Sized,
{
    if request.languages.is_empty() {
        tracing::warn!("No languages given for '{}'", request.word);
        return FetchOutcome::Failed(InvalidRequest::EmptyLanguageList.to_string());
    }

    for &lang in request.languages.iter() {
        if let Some(record) = lookup_with_retry(backend, &request.word, lang, timeout, retry).await
        {
            tracing::debug!("'{}' resolved via {}", request.word, lang);
            return FetchOutcome::Found(record);
        }
    }

    FetchOutcome::NotFound
}

async fn lookup_with_retry<B>(
    backend: &B,
    word: &WordKey,
    lang: Language,
    timeout: Duration,
    retry: RetryPolicy,
) -> Option<DefinitionRecord>
where
    B: DictionaryBackend + ?Sized,
{
    let attempts = retry.max_retries.saturating_add(1);

    for attempt in 1..=attempts {
        match backend.lookup(word, lang, timeout).await {
            Ok(Lookup::Found(record)) if !record.is_empty() => return Some(record),
            Ok(Lookup::Found(_)) => {
                tracing::debug!("'{}' [{}] returned an empty definition", word, lang);
                return None;
            }
            Ok(Lookup::NotFound(reason)) => {
                tracing::debug!("'{}' [{}] not found: {}", word, lang, reason);
                return None;
            }
            Err(e) => {
                tracing::warn!(
                    "'{}' [{}] attempt {}/{} via {} failed: {}",
                    word,
                    lang,
                    attempt,
                    attempts,
                    backend.name(),
                    e
                );
                if attempt < attempts && !retry.delay.is_zero() {
                    tokio::time::sleep(retry.delay).await;
                }
            }
        }
    }

    None
}
