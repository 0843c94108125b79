//! Scripted in-memory backends shared by the unit tests

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use lexi_types::{DefinitionRecord, Language, WordKey};

use crate::dictionary::{ConnectionError, DictionaryBackend, Lookup, NotFoundReason};
use crate::normalize::normalize;

pub fn record(word: &str, definition: &str) -> DefinitionRecord {
    DefinitionRecord {
        word: normalize(word),
        definition: definition.to_string(),
        ..Default::default()
    }
}

type Response = Result<Lookup, ConnectionError>;

/// Replays queued responses per language, answers `NotFound` once a queue runs dry
#[derive(Default)]
pub struct ScriptedBackend {
    responses: Mutex<HashMap<Language, VecDeque<Response>>>,
    calls: Mutex<Vec<Language>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, lang: Language, response: Response) -> Self {
        self.responses
            .lock()
            .unwrap()
            .entry(lang)
            .or_default()
            .push_back(response);
        self
    }

    pub fn calls(&self) -> Vec<Language> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl DictionaryBackend for ScriptedBackend {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn lookup(&self, _word: &WordKey, lang: Language, _timeout: Duration) -> Response {
        self.calls.lock().unwrap().push(lang);
        self.responses
            .lock()
            .unwrap()
            .get_mut(&lang)
            .and_then(VecDeque::pop_front)
            .unwrap_or(Ok(Lookup::NotFound(NotFoundReason::NoEntry)))
    }
}

/// Defines every word listed in `known`, tracks how many lookups run at once
pub struct WordListBackend {
    known: Vec<String>,
    delay: Duration,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    lookups: Mutex<Vec<WordKey>>,
}

impl WordListBackend {
    pub fn new(known: &[&str], delay: Duration) -> Self {
        Self {
            known: known.iter().map(|w| w.to_string()).collect(),
            delay,
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            lookups: Mutex::new(Vec::new()),
        }
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn lookups(&self) -> Vec<WordKey> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl DictionaryBackend for WordListBackend {
    fn name(&self) -> &str {
        "word-list"
    }

    async fn lookup(&self, word: &WordKey, _lang: Language, _timeout: Duration) -> Response {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        self.lookups.lock().unwrap().push(word.clone());

        tokio::time::sleep(self.delay).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if word.as_str() == "panic" {
            panic!("backend blew up on '{word}'");
        }

        if self.known.iter().any(|k| k == word.as_str()) {
            Ok(Lookup::from_record(record(
                word.as_str(),
                &format!("definition of {word}"),
            )))
        } else {
            Ok(Lookup::NotFound(NotFoundReason::Status(404)))
        }
    }
}
