use std::path::Path;

use crate::error::SourceError;

/// Words the user never wants looked up, stored as a JSON array of strings
pub async fn load_blacklist(path: &Path) -> Result<Vec<String>, SourceError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let words: Vec<String> =
        serde_json::from_str(&content).map_err(|source| SourceError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!("Loaded {} blacklisted words", words.len());
    Ok(words)
}
