use std::path::Path;

use crate::error::SourceError;

/// One word per line, blank lines and `#` comments skipped
pub async fn read_word_file(path: &Path) -> Result<Vec<String>, SourceError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}
