use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use lexi_config::Config;
use lexi_core::{ConnectionError, DictionaryBackend, Lookup, NotFoundReason, normalize};
use lexi_types::{DefinitionRecord, Language, WordKey};
use tokio_util::sync::CancellationToken;

use crate::pipeline::{Pipeline, WordSource, excluded_words};

/// Knows "cat" and "dog" in English only
#[derive(Default)]
struct PetDictionary {
    lookups: AtomicUsize,
}

#[async_trait::async_trait]
impl DictionaryBackend for PetDictionary {
    fn name(&self) -> &str {
        "pets"
    }

    async fn lookup(
        &self,
        word: &WordKey,
        lang: Language,
        _timeout: Duration,
    ) -> Result<Lookup, ConnectionError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        match (lang, word.as_str()) {
            (Language::English, "cat" | "dog") => Ok(Lookup::from_record(DefinitionRecord {
                word: word.clone(),
                expression: word.as_str().to_string(),
                definition: format!("A {word}."),
                ..Default::default()
            })),
            _ => Ok(Lookup::NotFound(NotFoundReason::Status(404))),
        }
    }
}

fn config(languages: &[&str]) -> Config {
    let mut config = Config::default();
    config.fetch.language_list = languages.iter().map(|l| l.to_string()).collect();
    config.fetch.thread_count = 4;
    config
}

fn raw(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[tokio::test]
async fn duplicates_collapse_and_unknown_words_are_reported() {
    let backend = Arc::new(PetDictionary::default());
    let pipeline = Pipeline::new(backend.clone());

    let report = pipeline
        .resolve(
            &config(&["en"]),
            raw(&["cat", "CAT.", "xyzzy"]),
            &HashSet::new(),
            CancellationToken::new(),
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(report.found.len(), 1);
    assert_eq!(report.found[0].word, normalize("cat"));
    assert_eq!(report.not_found, vec![normalize("xyzzy")]);
    assert!(report.failed.is_empty());
    assert_eq!(backend.lookups.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn falls_back_through_languages() {
    let backend = Arc::new(PetDictionary::default());
    let pipeline = Pipeline::new(backend.clone());

    let report = pipeline
        .resolve(
            &config(&["fr", "en"]),
            raw(&["dog"]),
            &HashSet::new(),
            CancellationToken::new(),
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(report.found.len(), 1);
    assert_eq!(backend.lookups.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn excluded_words_are_not_looked_up() {
    let backend = Arc::new(PetDictionary::default());
    let pipeline = Pipeline::new(backend.clone());
    let exclude: HashSet<WordKey> = [normalize("cat")].into_iter().collect();

    let report = pipeline
        .resolve(
            &config(&["en"]),
            raw(&["Cat", "dog"]),
            &exclude,
            CancellationToken::new(),
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(report.total(), 1);
    assert_eq!(report.found[0].word, normalize("dog"));
    assert_eq!(backend.lookups.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn nothing_new_skips_the_lookup() {
    let backend = Arc::new(PetDictionary::default());
    let pipeline = Pipeline::new(backend.clone());
    let exclude: HashSet<WordKey> = [normalize("cat")].into_iter().collect();

    let report = pipeline
        .resolve(
            &config(&["en"]),
            raw(&["cat", "  ", "CAT!"]),
            &exclude,
            CancellationToken::new(),
        )
        .await
        .unwrap();

    assert!(report.is_none());
    assert_eq!(backend.lookups.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn bad_language_list_is_an_error() {
    let backend = Arc::new(PetDictionary::default());
    let pipeline = Pipeline::new(backend.clone());

    let result = pipeline
        .resolve(
            &config(&["xx"]),
            raw(&["cat"]),
            &HashSet::new(),
            CancellationToken::new(),
        )
        .await;

    assert!(result.is_err());
    assert_eq!(backend.lookups.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn blacklist_is_normalized() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blacklist.json");
    std::fs::write(&path, r#"["The", "and."]"#).unwrap();

    let mut config = config(&["en"]);
    config.source.blacklist_path = Some(path);

    let exclude = excluded_words(&config, None).await.unwrap();

    assert_eq!(exclude.len(), 2);
    assert!(exclude.contains(&normalize("the")));
    assert!(exclude.contains(&normalize("and")));
}

#[tokio::test]
async fn word_file_source() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.txt");
    std::fs::write(&path, "cat\n\n# saved on the train\ndog\n").unwrap();

    let words = WordSource::File(path).read().await.unwrap();

    assert_eq!(words, vec!["cat", "dog"]);
}

#[tokio::test]
async fn missing_kobo_database_is_an_error() {
    let dir = tempfile::tempdir().unwrap();

    assert!(WordSource::Kobo(dir.path().to_path_buf()).read().await.is_err());
}
