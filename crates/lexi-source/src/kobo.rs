use std::path::{Path, PathBuf};

use sqlx::Connection;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};

use crate::error::SourceError;

/// Location of the reader database below the device mount point
pub const KOBO_DB_RELATIVE_PATH: &str = ".kobo/KoboReader.sqlite";

/// Database path for a mounted reader, if the file exists
pub fn kobo_db_path(mount: &Path) -> Result<PathBuf, SourceError> {
    let path = mount.join(KOBO_DB_RELATIVE_PATH);
    if path.is_file() {
        Ok(path)
    } else {
        Err(SourceError::DatabaseNotFound(path))
    }
}

/// Words saved on the reader, in database order
pub async fn read_kobo_words(db_path: &Path) -> Result<Vec<String>, SourceError> {
    tracing::info!("Reading saved words from {}", db_path.display());

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .read_only(true);
    let mut conn = SqliteConnection::connect_with(&options).await?;

    let words: Vec<Option<String>> = sqlx::query_scalar("SELECT Text FROM WordList")
        .fetch_all(&mut conn)
        .await?;

    conn.close().await?;

    let words: Vec<String> = words.into_iter().flatten().collect();
    tracing::info!("Found {} saved words", words.len());
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn create_reader_db(mount: &Path, words: &[Option<&str>]) {
        std::fs::create_dir_all(mount.join(".kobo")).unwrap();

        let options = SqliteConnectOptions::new()
            .filename(mount.join(KOBO_DB_RELATIVE_PATH))
            .create_if_missing(true);
        let mut conn = SqliteConnection::connect_with(&options).await.unwrap();

        sqlx::query(
            "CREATE TABLE WordList (Text TEXT, VolumeId TEXT, DictSuffix TEXT, DateCreated TEXT)",
        )
        .execute(&mut conn)
        .await
        .unwrap();

        for word in words {
            sqlx::query("INSERT INTO WordList (Text, VolumeId, DictSuffix) VALUES (?, 'book', '-en')")
                .bind(*word)
                .execute(&mut conn)
                .await
                .unwrap();
        }

        conn.close().await.unwrap();
    }

    #[tokio::test]
    async fn reads_saved_words() {
        let mount = tempfile::tempdir().unwrap();
        create_reader_db(mount.path(), &[Some("Cat"), None, Some("serendipity.")]).await;

        let path = kobo_db_path(mount.path()).unwrap();
        let words = read_kobo_words(&path).await.unwrap();

        assert_eq!(words, vec!["Cat", "serendipity."]);
    }

    #[test]
    fn missing_database_is_reported() {
        let mount = tempfile::tempdir().unwrap();

        match kobo_db_path(mount.path()) {
            Err(SourceError::DatabaseNotFound(path)) => {
                assert!(path.ends_with("KoboReader.sqlite"));
            }
            other => panic!("expected DatabaseNotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_kobo_database_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("other.sqlite");
        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true);
        SqliteConnection::connect_with(&options)
            .await
            .unwrap()
            .close()
            .await
            .unwrap();

        assert!(matches!(
            read_kobo_words(&path).await,
            Err(SourceError::Database(_))
        ));
    }
}
