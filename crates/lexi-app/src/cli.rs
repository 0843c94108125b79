use std::path::PathBuf;

use clap::Parser;
use lexi_config::Config;

/// Look up definitions for words saved on an e-reader and add them to Anki
#[derive(Parser, Debug)]
#[command(name = "lexi", version)]
pub struct Args {
    /// Mount point of the Kobo reader
    #[arg(long, conflicts_with_all = ["words_file", "inline_words"])]
    pub kobo: Option<PathBuf>,

    /// Text file with one word per line
    #[arg(long = "words", value_name = "FILE", conflicts_with = "inline_words")]
    pub words_file: Option<PathBuf>,

    /// Words given directly on the command line
    #[arg(value_name = "WORD")]
    pub inline_words: Vec<String>,

    /// Profile name or path to a profile JSON file
    #[arg(long, short = 'p', default_value = "main")]
    pub profile: String,

    /// Store the effective settings in the profile before running
    #[arg(long)]
    pub save_profile: bool,

    /// Comma-separated language codes to try, in order
    #[arg(long, short = 'l', value_delimiter = ',')]
    pub languages: Option<Vec<String>>,

    /// Concurrent lookup workers
    #[arg(long, short = 't')]
    pub threads: Option<usize>,

    /// Per-request timeout in milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Retries per language after a connection failure
    #[arg(long)]
    pub retries: Option<u32>,

    /// JSON array of words never to look up
    #[arg(long)]
    pub blacklist: Option<PathBuf>,

    /// Anki deck to compare against and add to
    #[arg(long)]
    pub deck: Option<String>,

    /// Do not talk to Anki at all
    #[arg(long, conflicts_with = "add")]
    pub no_anki: bool,

    /// Add every defined word to Anki after the lookup
    #[arg(long)]
    pub add: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl Args {
    /// Command-line values take precedence over the profile
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(languages) = &self.languages {
            config.fetch.language_list = languages
                .iter()
                .map(|code| code.trim().to_string())
                .filter(|code| !code.is_empty())
                .collect();
        }
        if let Some(threads) = self.threads {
            config.fetch.thread_count = threads;
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.fetch.timeout_ms = timeout_ms;
        }
        if let Some(retries) = self.retries {
            config.fetch.max_retries = retries;
        }
        if let Some(kobo) = &self.kobo {
            config.source.kobo_mount = Some(kobo.clone());
        }
        if let Some(blacklist) = &self.blacklist {
            config.source.blacklist_path = Some(blacklist.clone());
        }
        if let Some(deck) = &self.deck {
            config.anki.deck = deck.clone();
        }
        if self.no_anki {
            config.anki.enabled = false;
        }
    }
}
