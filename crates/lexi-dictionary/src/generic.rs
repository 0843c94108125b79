use std::time::Duration;

use async_trait::async_trait;
use lexi_core::{ConnectionError, DictionaryBackend, Lookup, NotFoundReason};
use lexi_types::{DefinitionRecord, Language, WordKey};
use reqwest::Url;
use serde::Deserialize;

use crate::http::{BackendConfigError, get_body, join_segments, parse_base_url};

/// Backend for `GET {base}/entries/{lang}/{word}` sense-group lists
#[derive(Clone)]
pub struct GenericEntryBackend {
    client: reqwest::Client,
    base_url: Url,
}

impl GenericEntryBackend {
    pub fn new(client: reqwest::Client, base_url: &str) -> Result<Self, BackendConfigError> {
        Ok(Self {
            client,
            base_url: parse_base_url(base_url)?,
        })
    }

    pub fn entry_url(&self, word: &WordKey, lang: Language) -> Url {
        join_segments(&self.base_url, &["entries", lang.code(), word.as_str()])
    }
}

#[async_trait]
impl DictionaryBackend for GenericEntryBackend {
    fn name(&self) -> &str {
        "entries"
    }

    async fn lookup(
        &self,
        word: &WordKey,
        lang: Language,
        timeout: Duration,
    ) -> Result<Lookup, ConnectionError> {
        let url = self.entry_url(word, lang);
        Ok(match get_body(&self.client, url, timeout).await? {
            Ok(body) => parse_entries(&body, word),
            Err(reason) => Lookup::NotFound(reason),
        })
    }
}

// JSON structures of the entries endpoint
#[derive(Debug, Deserialize)]
struct SenseGroup {
    #[serde(default)]
    phonetics: Vec<Phonetic>,
    meanings: Vec<Meaning>,
}

#[derive(Debug, Deserialize)]
struct Phonetic {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Meaning {
    #[serde(rename = "partOfSpeech", default)]
    part_of_speech: String,
    definitions: Vec<MeaningDefinition>,
}

#[derive(Debug, Deserialize)]
struct MeaningDefinition {
    definition: String,
    example: Option<String>,
}

/// Map an entries response body onto a lookup result for `word`
pub fn parse_entries(body: &str, word: &WordKey) -> Lookup {
    let groups: Vec<SenseGroup> = match serde_json::from_str(body) {
        Ok(groups) => groups,
        Err(e) => {
            tracing::debug!("Unexpected entries response for '{}': {}", word, e);
            return Lookup::NotFound(NotFoundReason::ParseFailure(e.to_string()));
        }
    };

    match groups.first() {
        Some(group) => Lookup::from_record(group.to_record(word)),
        None => Lookup::NotFound(NotFoundReason::NoEntry),
    }
}

impl SenseGroup {
    fn to_record(&self, word: &WordKey) -> DefinitionRecord {
        let mut lines = Vec::new();
        let mut parts_of_speech: Vec<&str> = Vec::new();
        let mut example = None;

        for meaning in &self.meanings {
            let Some(first) = meaning
                .definitions
                .iter()
                .find(|d| !d.definition.trim().is_empty())
            else {
                continue;
            };

            let mut line = format!(
                "<b>{}. </b> <small>{} - </small>{}",
                lines.len() + 1,
                meaning.part_of_speech,
                first.definition.trim()
            );
            if let Some(text) = first.example.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
                line.push_str(&format!(" <i>{text}</i>"));
                example.get_or_insert(text);
            }
            lines.push(line);

            let pos = meaning.part_of_speech.as_str();
            if !pos.is_empty() && !parts_of_speech.contains(&pos) {
                parts_of_speech.push(pos);
            }
        }

        // pronunciation without any definition is not a result
        if lines.is_empty() {
            return DefinitionRecord {
                word: word.clone(),
                ..Default::default()
            };
        }

        let phonetics: Vec<&str> = self
            .phonetics
            .iter()
            .filter_map(|p| p.text.as_deref())
            .filter(|t| !t.is_empty())
            .collect();
        if !phonetics.is_empty() {
            lines.insert(0, format!("<small>{}</small>", phonetics.join(", ")));
        }

        DefinitionRecord {
            word: word.clone(),
            expression: String::new(),
            reading: String::new(),
            definition: lines.join("<br>"),
            part_of_speech: parts_of_speech.join(", "),
            example: example.unwrap_or_default().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use lexi_core::normalize;

    use super::*;

    const CAT: &str = r#"[
        {
            "word": "cat",
            "phonetics": [{ "text": "/kæt/", "audio": "" }, { "audio": "cat-us.mp3" }, { "text": "/kat/" }],
            "meanings": [
                {
                    "partOfSpeech": "noun",
                    "definitions": [
                        { "definition": "An animal of the family Felidae.", "example": "The cat sat on the mat." },
                        { "definition": "A person." }
                    ]
                },
                {
                    "partOfSpeech": "verb",
                    "definitions": [{ "definition": "To hoist an anchor.", "synonyms": [] }]
                },
                {
                    "partOfSpeech": "noun",
                    "definitions": [{ "definition": "A catamaran.", "example": "We sailed the cat." }]
                }
            ]
        },
        {
            "word": "cat",
            "phonetics": [],
            "meanings": [{ "partOfSpeech": "noun", "definitions": [{ "definition": "Ignored second group." }] }]
        }
    ]"#;

    fn found(lookup: Lookup) -> DefinitionRecord {
        match lookup {
            Lookup::Found(record) => record,
            other => panic!("expected a record, got {other:?}"),
        }
    }

    #[test]
    fn renders_first_sense_group() {
        let record = found(parse_entries(CAT, &normalize("cat")));

        assert_eq!(record.word.as_str(), "cat");
        assert_eq!(
            record.definition,
            "<small>/kæt/, /kat/</small>\
             <br><b>1. </b> <small>noun - </small>An animal of the family Felidae. <i>The cat sat on the mat.</i>\
             <br><b>2. </b> <small>verb - </small>To hoist an anchor.\
             <br><b>3. </b> <small>noun - </small>A catamaran. <i>We sailed the cat.</i>"
        );
        assert_eq!(record.part_of_speech, "noun, verb");
        assert_eq!(record.example, "The cat sat on the mat.");
        assert!(record.expression.is_empty());
        assert!(record.reading.is_empty());
    }

    #[test]
    fn phonetics_only_is_not_found() {
        let body = r#"[{
            "phonetics": [{ "text": "/zɪz/" }],
            "meanings": [{ "partOfSpeech": "noun", "definitions": [{ "definition": "" }] }]
        }]"#;

        assert_eq!(
            parse_entries(body, &normalize("zzz")),
            Lookup::NotFound(NotFoundReason::NoEntry)
        );
    }

    #[test]
    fn missing_phonetics_are_tolerated() {
        let body = r#"[{ "meanings": [{ "partOfSpeech": "noun", "definitions": [{ "definition": "A dog." }] }] }]"#;
        let record = found(parse_entries(body, &normalize("dog")));
        assert_eq!(record.definition, "<b>1. </b> <small>noun - </small>A dog.");
        assert!(record.example.is_empty());
    }

    #[test]
    fn empty_list_is_not_found() {
        assert_eq!(
            parse_entries("[]", &normalize("xyzzy")),
            Lookup::NotFound(NotFoundReason::NoEntry)
        );
    }

    #[test]
    fn malformed_payloads_are_parse_failures() {
        for body in [
            r#"{"title":"No Definitions Found","message":"Sorry pal"}"#,
            r#"[{ "phonetics": [] }]"#,
            r#"[{ "meanings": [{ "partOfSpeech": "noun", "definitions": [{ "example": "no text" }] }] }]"#,
            "not json",
        ] {
            assert!(
                matches!(
                    parse_entries(body, &normalize("cat")),
                    Lookup::NotFound(NotFoundReason::ParseFailure(_))
                ),
                "{body}"
            );
        }
    }

    #[test]
    fn entry_url_encodes_word() {
        let backend =
            GenericEntryBackend::new(reqwest::Client::new(), "https://api.example.org/api/v2/")
                .unwrap();

        assert_eq!(
            backend.entry_url(&normalize("ice cream"), Language::English).as_str(),
            "https://api.example.org/api/v2/entries/en/ice%20cream"
        );
        assert_eq!(
            backend.entry_url(&normalize("Café"), Language::French).as_str(),
            "https://api.example.org/api/v2/entries/fr/caf%C3%A9"
        );
    }
}
