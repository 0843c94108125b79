mod language;
mod types;

pub use language::{BackendKind, Language, UnsupportedLanguage};
pub use types::{
    DefinitionRecord, FailedWord, FetchOutcome, FetchReport, LookupRequest, WordKey,
};
