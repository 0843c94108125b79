use lexi_core::{Lookup, NotFoundReason};
use lexi_types::{DefinitionRecord, WordKey};
use serde::Deserialize;

use crate::reading::join_readings;

// JSON structures of the word search endpoint
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub data: Vec<SearchEntry>,
}

#[derive(Debug, Deserialize)]
pub struct SearchEntry {
    pub slug: String,
    #[serde(default)]
    pub japanese: Vec<JapaneseForm>,
    pub senses: Vec<Sense>,
}

#[derive(Debug, Deserialize)]
pub struct JapaneseForm {
    pub word: Option<String>,
    pub reading: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Sense {
    #[serde(default)]
    pub english_definitions: Vec<String>,
    #[serde(default)]
    pub parts_of_speech: Vec<String>,
}

impl SearchEntry {
    fn expression(&self) -> String {
        if !self.slug.is_empty() {
            return self.slug.clone();
        }
        self.japanese
            .iter()
            .find_map(|f| f.word.clone().or_else(|| f.reading.clone()))
            .unwrap_or_default()
    }

    fn readings(&self) -> impl Iterator<Item = &str> {
        self.japanese.iter().filter_map(|f| f.reading.as_deref())
    }
}

impl SearchResponse {
    /// Definition and part of speech from the first entry's first sense, readings from every
    /// entry in result order
    pub fn to_record(&self, word: &WordKey) -> Option<DefinitionRecord> {
        let first = self.data.first()?;

        let (definition, part_of_speech) = first
            .senses
            .first()
            .map(|sense| {
                (
                    sense.english_definitions.join("; "),
                    sense.parts_of_speech.join(", "),
                )
            })
            .unwrap_or_default();

        Some(DefinitionRecord {
            word: word.clone(),
            expression: first.expression(),
            reading: join_readings(self.data.iter().flat_map(SearchEntry::readings)),
            definition,
            part_of_speech,
            example: String::new(),
        })
    }
}

/// Map a search response body onto a lookup result for `word`
pub fn parse_search_response(body: &str, word: &WordKey) -> Lookup {
    let response: SearchResponse = match serde_json::from_str(body) {
        Ok(response) => response,
        Err(e) => {
            tracing::debug!("Unexpected search response for '{}': {}", word, e);
            return Lookup::NotFound(NotFoundReason::ParseFailure(e.to_string()));
        }
    };

    match response.to_record(word) {
        Some(record) => Lookup::from_record(record),
        None => Lookup::NotFound(NotFoundReason::NoEntry),
    }
}
