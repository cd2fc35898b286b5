use chrono::Utc;
use rusqlite::{Result as SqlResult, params};
use std::path::Path;
use std::sync::Mutex;
use uuid::Uuid;

use crate::common::{FeedbackRecord, NewFeedback};
use crate::config::StorageTarget;

use super::database::Database;
use super::models::FeedbackRow;
use super::{FeedbackStore, StoreError, ensure_parent_dir};

/// SQLite-backed feedback store
pub struct FeedbackDatabase {
    db: Mutex<Option<Database>>,
}

impl FeedbackDatabase {
    /// Open the store described by the configured target
    pub fn open(target: &StorageTarget) -> Result<Self, StoreError> {
        match target {
            StorageTarget::Memory => Self::in_memory(),
            StorageTarget::File(path) => {
                ensure_parent_dir(path)?;
                Self::with_path(path)
            }
        }
    }

    /// Initialize feedback database at custom path
    pub fn with_path<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        Self::init(Database::new(path)?)
    }

    /// Initialize a private in-memory database
    pub fn in_memory() -> Result<Self, StoreError> {
        Self::init(Database::in_memory()?)
    }

    fn init(db: Database) -> Result<Self, StoreError> {
        Self::init_schema(&db)?;
        Ok(Self {
            db: Mutex::new(Some(db)),
        })
    }

    fn init_schema(db: &Database) -> SqlResult<()> {
        let conn = db.connection();
        conn.execute(
            "CREATE TABLE IF NOT EXISTS feedback (
                seq INTEGER PRIMARY KEY AUTOINCREMENT,
                id TEXT NOT NULL UNIQUE,
                name TEXT NOT NULL CHECK (length(name) > 0),
                message TEXT NOT NULL CHECK (length(message) > 0),
                created_at INTEGER NOT NULL
            )",
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_feedback_created_at ON feedback(created_at)",
            [],
        )?;

        Ok(())
    }

    fn with_db<T>(
        &self,
        f: impl FnOnce(&mut Database) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut guard = self.db.lock().map_err(|_| StoreError::Poisoned)?;
        let db = guard.as_mut().ok_or(StoreError::Closed)?;
        f(db)
    }

    /// Get feedback count
    pub fn count(&self) -> Result<usize, StoreError> {
        self.with_db(|db| {
            let count: i64 =
                db.connection()
                    .query_row("SELECT COUNT(*) FROM feedback", [], |row| row.get(0))?;
            Ok(count as usize)
        })
    }
}

impl FeedbackStore for FeedbackDatabase {
    fn insert(&self, feedback: NewFeedback) -> Result<FeedbackRecord, StoreError> {
        self.with_db(|db| {
            let tx = db.connection_mut().transaction()?;

            // created_at never goes backwards, even if the wall clock does
            let newest: i64 = tx.query_row(
                "SELECT COALESCE(MAX(created_at), 0) FROM feedback",
                [],
                |row| row.get(0),
            )?;
            let created_at = Utc::now().timestamp_millis().max(newest);
            let id = Uuid::new_v4().to_string();

            tx.execute(
                "INSERT INTO feedback (id, name, message, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![id, feedback.name, feedback.message, created_at],
            )?;
            tx.commit()?;

            FeedbackRecord::try_from(FeedbackRow {
                id,
                name: feedback.name,
                message: feedback.message,
                created_at,
            })
        })
    }

    fn find_all_newest_first(&self) -> Result<Vec<FeedbackRecord>, StoreError> {
        self.with_db(|db| {
            let mut stmt = db.connection().prepare(
                "SELECT id, name, message, created_at
                 FROM feedback
                 ORDER BY created_at DESC, seq DESC",
            )?;

            let rows = stmt
                .query_map([], |row| {
                    Ok(FeedbackRow {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        message: row.get(2)?,
                        created_at: row.get(3)?,
                    })
                })?
                .collect::<SqlResult<Vec<_>>>()?;

            rows.into_iter().map(FeedbackRecord::try_from).collect()
        })
    }

    fn close(&self) -> Result<(), StoreError> {
        let mut guard = self.db.lock().map_err(|_| StoreError::Poisoned)?;
        match guard.take() {
            Some(db) => Ok(db.close()?),
            None => Ok(()),
        }
    }
}
