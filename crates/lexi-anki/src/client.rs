use std::collections::HashMap;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::json;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct AnkiConnectClient {
    base_url: String,
    client: reqwest::Client,
    timeout: Duration,
}

impl AnkiConnectClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Give up on a request after `timeout`, a stalled Anki must not hang the run
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check if AnkiConnect is available
    pub async fn check_connection(&self) -> Result<u32> {
        let response: AnkiResponse<u32> = self.invoke("version", json!({})).await?;
        response.into_result()
    }

    /// Get list of deck names
    pub async fn deck_names(&self) -> Result<Vec<String>> {
        let response: AnkiResponse<Vec<String>> = self.invoke("deckNames", json!({})).await?;
        response.into_result()
    }

    /// Note ids matching an Anki search query
    pub async fn find_notes(&self, query: &str) -> Result<Vec<u64>> {
        let response: AnkiResponse<Vec<u64>> =
            self.invoke("findNotes", json!({ "query": query })).await?;
        response.into_result()
    }

    pub async fn notes_info(&self, ids: &[u64]) -> Result<Vec<NoteInfo>> {
        let response: AnkiResponse<Vec<NoteInfo>> =
            self.invoke("notesInfo", json!({ "notes": ids })).await?;
        response.into_result()
    }

    /// First field of every note in `deck`, or of the whole collection
    pub async fn known_fronts(&self, deck: Option<&str>) -> Result<Vec<String>> {
        let query = match deck {
            Some(deck) => format!("\"deck:{}\"", deck.replace('"', "\\\"")),
            None => String::new(),
        };

        let ids = self.find_notes(&query).await?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let notes = self.notes_info(&ids).await?;
        Ok(notes
            .iter()
            .filter_map(NoteInfo::first_field)
            .map(str::to_string)
            .collect())
    }

    /// Add a note to Anki
    pub async fn add_note(
        &self,
        deck: &str,
        model: &str,
        front: &str,
        back: &str,
    ) -> Result<u64> {
        let params = json!({
            "note": {
                "deckName": deck,
                "modelName": model,
                "fields": {
                    "Front": front,
                    "Back": back
                },
                "tags": ["lexi"]
            }
        });

        let response: AnkiResponse<u64> = self.invoke("addNote", params).await?;
        response.into_result()
    }

    /// Invoke an AnkiConnect API action
    async fn invoke<T>(&self, action: &str, params: serde_json::Value) -> Result<AnkiResponse<T>>
    where
        T: for<'de> Deserialize<'de>,
    {
        let request = AnkiRequest {
            action: action.to_string(),
            version: 6,
            params,
        };

        let response = self
            .client
            .post(&self.base_url)
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to AnkiConnect")?;

        response
            .json::<AnkiResponse<T>>()
            .await
            .context("Failed to parse AnkiConnect response")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NoteInfo {
    #[serde(rename = "noteId")]
    pub note_id: u64,
    pub fields: HashMap<String, NoteFieldValue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NoteFieldValue {
    pub value: String,
    pub order: u32,
}

impl NoteInfo {
    /// Value of the lowest-ordered field, the word on a vocabulary card
    pub fn first_field(&self) -> Option<&str> {
        self.fields
            .values()
            .min_by_key(|field| field.order)
            .map(|field| field.value.as_str())
    }
}

#[derive(Serialize)]
struct AnkiRequest {
    action: String,
    version: u32,
    params: serde_json::Value,
}

#[derive(Deserialize)]
struct AnkiResponse<T> {
    result: Option<T>,
    error: Option<String>,
}

impl<T> AnkiResponse<T> {
    fn into_result(self) -> Result<T> {
        if let Some(error) = self.error {
            anyhow::bail!("AnkiConnect error: {}", error);
        }

        self.result
            .context("AnkiConnect returned null result")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_field_wins_over_result() {
        let response: AnkiResponse<u64> =
            serde_json::from_str(r#"{"result": null, "error": "cannot create note because it is a duplicate"}"#)
                .unwrap();
        let err = response.into_result().unwrap_err();
        assert!(err.to_string().contains("duplicate"));

        let response: AnkiResponse<u64> =
            serde_json::from_str(r#"{"result": 1496198395707, "error": null}"#).unwrap();
        assert_eq!(response.into_result().unwrap(), 1496198395707);
    }

    #[test]
    fn first_field_uses_field_order() {
        let note: NoteInfo = serde_json::from_str(
            r#"{
                "noteId": 1502298033753,
                "modelName": "Basic",
                "tags": ["lexi"],
                "fields": {
                    "Back": { "value": "a small feline", "order": 1 },
                    "Front": { "value": "cat", "order": 0 }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(note.first_field(), Some("cat"));
    }
}
