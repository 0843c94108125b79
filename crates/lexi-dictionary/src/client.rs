use std::time::Duration;

use async_trait::async_trait;
use lexi_config::dictionary::DictionaryConfig;
use lexi_core::{ConnectionError, DictionaryBackend, Lookup};
use lexi_types::{BackendKind, Language, WordKey};

use crate::generic::GenericEntryBackend;
use crate::http::{BackendConfigError, build_client};
use crate::script_aware::ScriptAwareBackend;

/// Routes each language to the backend serving its response shape
pub struct DictionaryClient {
    generic: GenericEntryBackend,
    script_aware: ScriptAwareBackend,
}

impl DictionaryClient {
    pub fn new(config: &DictionaryConfig) -> Result<Self, BackendConfigError> {
        let http = build_client()?;

        Ok(Self {
            generic: GenericEntryBackend::new(http.clone(), &config.entries_url)?,
            script_aware: ScriptAwareBackend::new(http, &config.search_url)?,
        })
    }

    pub fn backend_for(&self, lang: Language) -> &dyn DictionaryBackend {
        match lang.backend_kind() {
            BackendKind::GenericEntry => &self.generic,
            BackendKind::ScriptAware => &self.script_aware,
        }
    }
}

#[async_trait]
impl DictionaryBackend for DictionaryClient {
    fn name(&self) -> &str {
        "dictionary"
    }

    async fn lookup(
        &self,
        word: &WordKey,
        lang: Language,
        timeout: Duration,
    ) -> Result<Lookup, ConnectionError> {
        self.backend_for(lang).lookup(word, lang, timeout).await
    }
}
