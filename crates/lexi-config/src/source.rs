use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where raw words come from and which ones to skip
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SourceConfig {
    /// Mount point of the e-reader, holds `.kobo/KoboReader.sqlite`
    pub kobo_mount: Option<PathBuf>,
    /// JSON array of words never to look up
    pub blacklist_path: Option<PathBuf>,
}

impl SourceConfig {
    pub fn new() -> Self {
        Self {
            kobo_mount: std::env::var_os("KOBO_MOUNT").map(PathBuf::from),
            blacklist_path: std::env::var_os("LEXI_BLACKLIST").map(PathBuf::from),
        }
    }
}
