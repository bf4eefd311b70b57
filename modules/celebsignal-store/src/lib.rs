//! Durable `CELEB_DATA` table shared by the scrape and analyze phases.
//!
//! The scrape phase rebuilds the table wholesale with [`SubjectStore::replace_all`];
//! the analyze phase only ever touches the `SENTIMENT` column, keyed by exact `NAME`.
//! Rows come back in insertion order (`rowid`).

use std::path::Path;
use std::str::FromStr;

use celebsignal_common::{CelebSignalError, Label, Result, SubjectRecord};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

const CREATE_TABLE: &str = "CREATE TABLE CELEB_DATA(
    NAME TEXT,
    PHOTO TEXT,
    PROFESSION TEXT,
    BEST_WORK TEXT,
    SENTIMENT TEXT DEFAULT ''
)";

#[derive(Debug, sqlx::FromRow)]
struct SubjectRow {
    name: String,
    photo_url: String,
    profession: String,
    best_work: String,
    sentiment: Option<String>,
}

impl TryFrom<SubjectRow> for SubjectRecord {
    type Error = CelebSignalError;

    fn try_from(row: SubjectRow) -> Result<Self> {
        let sentiment = match row.sentiment.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(text) => Some(Label::from_str(text).map_err(|e| {
                CelebSignalError::Storage(format!("row {:?}: {e}", row.name))
            })?),
        };

        Ok(SubjectRecord {
            name: row.name,
            photo_url: row.photo_url,
            profession: row.profession,
            best_work: row.best_work,
            sentiment,
        })
    }
}

fn storage(err: sqlx::Error) -> CelebSignalError {
    CelebSignalError::Storage(err.to_string())
}

#[derive(Clone)]
pub struct SubjectStore {
    pool: SqlitePool,
}

impl SubjectStore {
    /// Open (creating if needed) the SQLite file at `path`.
    pub async fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                CelebSignalError::Storage(format!(
                    "could not create database directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let store = Self::connect(options).await?;
        tracing::debug!(path = %path.display(), "Opened subject store");
        Ok(store)
    }

    /// A private in-memory database; gone once the store is dropped.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:").map_err(storage)?;
        Self::connect(options).await
    }

    // One connection: the pipeline is sequential, and an in-memory database
    // only lives as long as its single connection.
    async fn connect(options: SqliteConnectOptions) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(storage)?;
        Ok(Self { pool })
    }

    /// Drop and recreate the table, then insert `records` with no sentiment.
    /// All of it happens in one transaction: either the new batch is stored or
    /// the previous table is left as it was.
    pub async fn replace_all(&self, records: &[SubjectRecord]) -> Result<()> {
        let mut tx = self.pool.begin().await.map_err(storage)?;

        sqlx::query("DROP TABLE IF EXISTS CELEB_DATA")
            .execute(&mut *tx)
            .await
            .map_err(storage)?;
        sqlx::query(CREATE_TABLE)
            .execute(&mut *tx)
            .await
            .map_err(storage)?;

        for record in records {
            sqlx::query(
                "INSERT INTO CELEB_DATA (NAME, PHOTO, PROFESSION, BEST_WORK) VALUES (?, ?, ?, ?)",
            )
            .bind(&record.name)
            .bind(&record.photo_url)
            .bind(&record.profession)
            .bind(&record.best_work)
            .execute(&mut *tx)
            .await
            .map_err(storage)?;
        }

        tx.commit().await.map_err(storage)?;
        tracing::info!(count = records.len(), "Replaced subject table");
        Ok(())
    }

    pub async fn list_names(&self) -> Result<Vec<String>> {
        sqlx::query_scalar::<_, String>("SELECT NAME FROM CELEB_DATA ORDER BY rowid")
            .fetch_all(&self.pool)
            .await
            .map_err(storage)
    }

    /// Set the label for `name`. Returns `false` when no row has that name,
    /// in which case the table is untouched.
    pub async fn update_sentiment(&self, name: &str, label: Label) -> Result<bool> {
        let result = sqlx::query("UPDATE CELEB_DATA SET SENTIMENT = ? WHERE NAME = ?")
            .bind(label.as_str())
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(storage)?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn fetch_all(&self) -> Result<Vec<SubjectRecord>> {
        let rows = sqlx::query_as::<_, SubjectRow>(
            "SELECT NAME AS name,
                    PHOTO AS photo_url,
                    PROFESSION AS profession,
                    BEST_WORK AS best_work,
                    SENTIMENT AS sentiment
             FROM CELEB_DATA
             ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(storage)?;

        rows.into_iter().map(SubjectRecord::try_from).collect()
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subjects(names: &[&str]) -> Vec<SubjectRecord> {
        names
            .iter()
            .map(|n| SubjectRecord::new(*n, format!("https://img/{n}.jpg"), "Actor", "Some Film"))
            .collect()
    }

    #[tokio::test]
    async fn list_names_preserves_insertion_order() {
        let store = SubjectStore::in_memory().await.unwrap();
        let names = ["Zoe Saldana", "Adam Driver", "Mia Farrow", "Ben Kingsley"];
        store.replace_all(&subjects(&names)).await.unwrap();

        assert_eq!(store.list_names().await.unwrap(), names);
    }

    #[tokio::test]
    async fn replace_all_discards_previous_batch_and_labels() {
        let store = SubjectStore::in_memory().await.unwrap();
        store.replace_all(&subjects(&["Old One", "Old Two"])).await.unwrap();
        assert!(store.update_sentiment("Old One", Label::Negative).await.unwrap());

        store.replace_all(&subjects(&["New One"])).await.unwrap();

        let rows = store.fetch_all().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "New One");
        assert_eq!(rows[0].sentiment, None);
    }

    #[tokio::test]
    async fn update_sentiment_sets_only_the_matching_row() {
        let store = SubjectStore::in_memory().await.unwrap();
        store.replace_all(&subjects(&["A", "B"])).await.unwrap();

        assert!(store.update_sentiment("B", Label::Neutral).await.unwrap());

        let rows = store.fetch_all().await.unwrap();
        assert_eq!(rows[0].sentiment, None);
        assert_eq!(rows[1].sentiment, Some(Label::Neutral));
    }

    #[tokio::test]
    async fn update_for_unknown_name_leaves_store_unchanged() {
        let store = SubjectStore::in_memory().await.unwrap();
        store.replace_all(&subjects(&["A", "B", "C"])).await.unwrap();
        store.update_sentiment("A", Label::Positive).await.unwrap();
        let before = store.fetch_all().await.unwrap();

        let matched = store.update_sentiment("Nobody", Label::Negative).await.unwrap();

        assert!(!matched);
        assert_eq!(store.fetch_all().await.unwrap(), before);
    }

    #[tokio::test]
    async fn update_matches_names_exactly() {
        let store = SubjectStore::in_memory().await.unwrap();
        store.replace_all(&subjects(&["Emma Stone"])).await.unwrap();

        assert!(!store.update_sentiment("emma stone", Label::Positive).await.unwrap());
        assert!(!store.update_sentiment("Emma Stone ", Label::Positive).await.unwrap());
        assert!(store.update_sentiment("Emma Stone", Label::Positive).await.unwrap());
    }

    #[tokio::test]
    async fn reading_before_any_scrape_is_a_storage_error() {
        let store = SubjectStore::in_memory().await.unwrap();
        let err = store.list_names().await.unwrap_err();
        assert!(matches!(err, CelebSignalError::Storage(_)));
    }

    #[tokio::test]
    async fn rows_persist_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("celebData.db");

        let store = SubjectStore::open(&path).await.unwrap();
        store.replace_all(&subjects(&["A", "B"])).await.unwrap();
        store.update_sentiment("A", Label::NotAvailable).await.unwrap();
        store.close().await;

        let reopened = SubjectStore::open(&path).await.unwrap();
        let rows = reopened.fetch_all().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].sentiment, Some(Label::NotAvailable));
        assert_eq!(rows[0].photo_url, "https://img/A.jpg");
    }
}
