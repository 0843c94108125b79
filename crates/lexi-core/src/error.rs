use lexi_types::UnsupportedLanguage;

/// Batch rejected before any lookup was attempted
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidRequest {
    #[error("language list is empty")]
    EmptyLanguageList,

    #[error(transparent)]
    UnsupportedLanguage(#[from] UnsupportedLanguage),

    #[error("thread count must be at least 1")]
    ZeroThreads,

    #[error("timeout must be greater than zero")]
    ZeroTimeout,

    #[error("no words to look up")]
    NoWords,
}
