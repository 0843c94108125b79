mod client;
mod template;

pub use client::{AnkiConnectClient, NoteFieldValue, NoteInfo};
pub use template::CardTemplate;

use anyhow::Result;
use lexi_types::{DefinitionRecord, FailedWord, WordKey};

/// Outcome of writing a batch of records
#[derive(Debug, Default)]
pub struct AddSummary {
    pub added: Vec<(WordKey, u64)>,
    pub failed: Vec<FailedWord>,
}

/// Add a card to Anki using the provided client and template
pub async fn add_card(
    client: &AnkiConnectClient,
    template: &CardTemplate,
    record: &DefinitionRecord,
) -> Result<u64> {
    let front = template.format_front(record);
    let back = template.format_back(record);

    client
        .add_note(&template.deck, &template.model, &front, &back)
        .await
}

/// One note per record; a rejected note does not stop the rest
pub async fn add_records(
    client: &AnkiConnectClient,
    template: &CardTemplate,
    records: &[DefinitionRecord],
) -> AddSummary {
    let mut summary = AddSummary::default();

    for record in records {
        match add_card(client, template, record).await {
            Ok(note_id) => {
                tracing::debug!("Added '{}' to Anki: note_id={}", record.word, note_id);
                summary.added.push((record.word.clone(), note_id));
            }
            Err(e) => {
                tracing::warn!("Failed to add '{}' to Anki: {:#}", record.word, e);
                summary.failed.push(FailedWord {
                    word: record.word.clone(),
                    reason: format!("{e:#}"),
                });
            }
        }
    }

    tracing::info!(
        "Added {} notes to deck '{}' ({} rejected)",
        summary.added.len(),
        template.deck,
        summary.failed.len()
    );

    summary
}
