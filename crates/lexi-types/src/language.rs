use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Response shape a language code is served with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// `/entries/{lang}/{word}` sense-group lists
    GenericEntry,
    /// Search results that split written form from reading
    ScriptAware,
}

/// Supported dictionary languages.
///
/// This is the allowlist every configured code is checked against before a batch starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Language {
    English,
    Hindi,
    Spanish,
    French,
    Japanese,
    Russian,
    German,
    Italian,
    Korean,
    BrazilianPortuguese,
    Arabic,
    Turkish,
}

impl Language {
    pub const ALL: [Language; 12] = [
        Language::English,
        Language::Hindi,
        Language::Spanish,
        Language::French,
        Language::Japanese,
        Language::Russian,
        Language::German,
        Language::Italian,
        Language::Korean,
        Language::BrazilianPortuguese,
        Language::Arabic,
        Language::Turkish,
    ];

    /// Code used in request paths
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::Japanese => "ja",
            Language::Russian => "ru",
            Language::German => "de",
            Language::Italian => "it",
            Language::Korean => "ko",
            Language::BrazilianPortuguese => "pt-BR",
            Language::Arabic => "ar",
            Language::Turkish => "tr",
        }
    }

    pub fn backend_kind(self) -> BackendKind {
        match self {
            Language::Japanese => BackendKind::ScriptAware,
            _ => BackendKind::GenericEntry,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language code: {0:?}")]
pub struct UnsupportedLanguage(pub String);

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let code = code.trim();
        Language::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| UnsupportedLanguage(code.to_string()))
    }
}

impl TryFrom<String> for Language {
    type Error = UnsupportedLanguage;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        code.parse()
    }
}

impl From<Language> for String {
    fn from(lang: Language) -> Self {
        lang.code().to_string()
    }
}
