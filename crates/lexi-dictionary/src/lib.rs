mod client;
mod generic;
mod http;
mod script_aware;


pub use client::DictionaryClient;
pub use generic::{GenericEntryBackend, parse_entries};
pub use http::BackendConfigError;
pub use script_aware::ScriptAwareBackend;
