use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use lexi_anki::{AnkiConnectClient, CardTemplate};
use lexi_config::anki::AnkiConfig;
use lexi_dictionary::DictionaryClient;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

mod cli;
mod pipeline;
mod profile;
mod report;

#[cfg(test)]
mod tests;

use self::cli::Args;
use self::pipeline::{Pipeline, WordSource, excluded_words};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.log_json);

    let mut config = profile::load_profile(&args.profile)?;
    args.apply_to(&mut config);

    // reject bad language settings before touching the reader or Anki
    lexi_core::parse_languages(&config.fetch.language_list)?;

    if args.save_profile {
        profile::save_profile(&args.profile, &config)?;
    }

    let source = word_source(&args, &config)?;
    let raw = source.read().await?;

    let anki = if config.anki.enabled {
        connect_anki(&config.anki, args.add).await?
    } else {
        None
    };
    let exclude = excluded_words(&config, anki.as_ref()).await?;

    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown requested, finishing in-flight lookups");
            ctrl_c.cancel();
        }
    });

    let client = DictionaryClient::new(&config.dictionary)?;
    let pipeline = Pipeline::new(Arc::new(client));
    let Some(report) = pipeline.resolve(&config, raw, &exclude, cancel).await? else {
        println!("Nothing new to look up.");
        return Ok(());
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report::render_summary(&report));
    }

    if args.add {
        if let Some(client) = anki.as_ref() {
            let template =
                CardTemplate::vocabulary(config.anki.deck.clone(), config.anki.model.clone());
            let summary = lexi_anki::add_records(client, &template, &report.found).await;
            println!(
                "Added {} notes to '{}', {} rejected",
                summary.added.len(),
                config.anki.deck,
                summary.failed.len()
            );
        } else {
            tracing::warn!("Anki integration disabled, nothing added");
        }
    }

    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry.with(fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }
}

fn word_source(args: &Args, config: &lexi_config::Config) -> anyhow::Result<WordSource> {
    if let Some(path) = &args.words_file {
        return Ok(WordSource::File(path.clone()));
    }
    if !args.inline_words.is_empty() {
        return Ok(WordSource::Inline(args.inline_words.clone()));
    }
    config
        .source
        .kobo_mount
        .clone()
        .map(WordSource::Kobo)
        .context("No words given: pass --kobo, --words or words as arguments")
}

/// Client for AnkiConnect; unreachable is only fatal when notes must be added
async fn connect_anki(
    config: &AnkiConfig,
    required: bool,
) -> anyhow::Result<Option<AnkiConnectClient>> {
    let (url, deck) = (&config.url, &config.deck);
    let client = AnkiConnectClient::new(url.clone()).with_timeout(config.timeout());

    match client.check_connection().await {
        Ok(version) => {
            tracing::info!("Connected to AnkiConnect v{version}");
            match client.deck_names().await {
                Ok(decks) if !decks.iter().any(|d| d == deck) => {
                    tracing::warn!("Deck '{deck}' does not exist yet");
                }
                Ok(_) => {}
                Err(e) => tracing::warn!("Could not list decks: {e:#}"),
            }
            Ok(Some(client))
        }
        Err(e) if required => {
            Err(e.context(format!("AnkiConnect unreachable at {url}, needed for --add")))
        }
        Err(e) => {
            tracing::warn!("AnkiConnect unreachable, not skipping known words: {e:#}");
            Ok(None)
        }
    }
}
