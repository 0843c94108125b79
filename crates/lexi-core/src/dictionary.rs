use std::fmt;
use std::time::Duration;

use lexi_types::{DefinitionRecord, Language, WordKey};

/// Result of one lookup that reached the remote service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(DefinitionRecord),
    NotFound(NotFoundReason),
}

impl Lookup {
    /// `Found` unless the record has no definition text
    pub fn from_record(record: DefinitionRecord) -> Self {
        if record.is_empty() {
            Lookup::NotFound(NotFoundReason::NoEntry)
        } else {
            Lookup::Found(record)
        }
    }
}

/// Why a lookup produced no definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotFoundReason {
    /// Response parsed but carried no usable definition
    NoEntry,
    /// Non-2xx HTTP status
    Status(u16),
    /// Body did not match the expected shape
    ParseFailure(String),
}

impl fmt::Display for NotFoundReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotFoundReason::NoEntry => f.write_str("no entry"),
            NotFoundReason::Status(code) => write!(f, "HTTP {code}"),
            NotFoundReason::ParseFailure(detail) => write!(f, "unparseable response: {detail}"),
        }
    }
}

/// Transport failure or timeout, the only retryable lookup failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("connection error: {0}")]
pub struct ConnectionError(pub String);

/// One remote dictionary, or a router over several
#[async_trait::async_trait]
pub trait DictionaryBackend: Send + Sync {
    /// Backend name for logs
    fn name(&self) -> &str;

    /// Look up `word` in `lang`, giving up after `timeout`
    async fn lookup(
        &self,
        word: &WordKey,
        lang: Language,
        timeout: Duration,
    ) -> Result<Lookup, ConnectionError>;
}
