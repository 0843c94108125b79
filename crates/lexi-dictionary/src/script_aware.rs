use std::time::Duration;

use async_trait::async_trait;
use lexi_core::{ConnectionError, DictionaryBackend, Lookup};
use lexi_lang_japanese::parse_search_response;
use lexi_types::{Language, WordKey};
use reqwest::Url;

use crate::http::{BackendConfigError, get_body, join_segments, parse_base_url};

/// Backend for word searches that return written form and reading separately
#[derive(Clone)]
pub struct ScriptAwareBackend {
    client: reqwest::Client,
    base_url: Url,
}

impl ScriptAwareBackend {
    pub fn new(client: reqwest::Client, base_url: &str) -> Result<Self, BackendConfigError> {
        Ok(Self {
            client,
            base_url: parse_base_url(base_url)?,
        })
    }

    pub fn search_url(&self, word: &WordKey) -> Url {
        let mut url = join_segments(&self.base_url, &["search", "words"]);
        url.query_pairs_mut().append_pair("keyword", word.as_str());
        url
    }
}

#[async_trait]
impl DictionaryBackend for ScriptAwareBackend {
    fn name(&self) -> &str {
        "search"
    }

    async fn lookup(
        &self,
        word: &WordKey,
        lang: Language,
        timeout: Duration,
    ) -> Result<Lookup, ConnectionError> {
        tracing::trace!("Searching '{}' [{}]", word, lang);
        let url = self.search_url(word);
        Ok(match get_body(&self.client, url, timeout).await? {
            Ok(body) => parse_search_response(&body, word),
            Err(reason) => Lookup::NotFound(reason),
        })
    }
}
