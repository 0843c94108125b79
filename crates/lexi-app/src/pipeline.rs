use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use lexi_anki::AnkiConnectClient;
use lexi_config::Config;
use lexi_core::{DictionaryBackend, FetchScheduler, normalize_set, prepare_words};
use lexi_types::{FetchReport, WordKey};
use tokio_util::sync::CancellationToken;

/// Where raw words are read from
#[derive(Debug, Clone)]
pub enum WordSource {
    Kobo(PathBuf),
    File(PathBuf),
    Inline(Vec<String>),
}

impl WordSource {
    pub async fn read(&self) -> anyhow::Result<Vec<String>> {
        match self {
            WordSource::Kobo(mount) => {
                let db_path = lexi_source::kobo_db_path(mount)?;
                Ok(lexi_source::read_kobo_words(&db_path).await?)
            }
            WordSource::File(path) => Ok(lexi_source::read_word_file(path).await?),
            WordSource::Inline(words) => Ok(words.clone()),
        }
    }
}

/// Normalized words to skip: the blacklist plus cards already in Anki
pub async fn excluded_words(
    config: &Config,
    anki: Option<&AnkiConnectClient>,
) -> anyhow::Result<HashSet<WordKey>> {
    let mut raw = Vec::new();

    if let Some(path) = &config.source.blacklist_path {
        raw.extend(lexi_source::load_blacklist(path).await?);
    }

    if let Some(client) = anki {
        let known = client
            .known_fronts(Some(&config.anki.deck))
            .await
            .context("Failed to list existing Anki notes")?;
        tracing::info!("{} words already in deck '{}'", known.len(), config.anki.deck);
        raw.extend(known);
    }

    Ok(normalize_set(raw))
}

/// Lookup stage: new words in, report out
pub struct Pipeline<B: ?Sized> {
    scheduler: FetchScheduler<B>,
}

impl<B> Pipeline<B>
where
    B: DictionaryBackend + ?Sized + 'static,
{
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            scheduler: FetchScheduler::new(backend),
        }
    }

    /// `None` when nothing is left to look up after filtering
    pub async fn resolve(
        &self,
        config: &Config,
        raw: Vec<String>,
        exclude: &HashSet<WordKey>,
        cancel: CancellationToken,
    ) -> anyhow::Result<Option<FetchReport>> {
        let words = prepare_words(&raw, exclude);
        if words.is_empty() {
            tracing::info!("No new words among {} saved entries", raw.len());
            return Ok(None);
        }

        let report = self
            .scheduler
            .fetch_all_with_cancel(&words, &config.fetch, cancel)
            .await?;

        Ok(Some(report))
    }
}
