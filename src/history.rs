//! Translation History
//!
//! Bounded log of recent translations in SQLite. Oldest rows are evicted
//! once the store holds more than `limit` entries.

use crate::core::gloss::Language;
use crate::error::{SignError, SignResult};
use rusqlite::{params, Connection};
use serde::Serialize;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub input: String,
    pub language: Language,
    pub gloss: String,
    pub display: String,
    /// Tutor answer, for questions
    pub answer: Option<String>,
    /// RFC 3339
    pub timestamp: String,
}

impl HistoryEntry {
    pub fn new(
        input: impl Into<String>,
        language: Language,
        gloss: impl Into<String>,
        display: impl Into<String>,
    ) -> Self {
        Self {
            input: input.into(),
            language,
            gloss: gloss.into(),
            display: display.into(),
            answer: None,
            timestamp: chrono::Local::now().to_rfc3339(),
        }
    }

    pub fn with_answer(mut self, answer: impl Into<String>) -> Self {
        self.answer = Some(answer.into());
        self
    }
}

pub struct HistoryStore {
    conn: Mutex<Connection>,
    limit: usize,
}

impl HistoryStore {
    pub fn open(db_path: &Path, limit: usize) -> SignResult<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let store = Self::with_connection(Connection::open(db_path)?, limit)?;
        info!("🗂️ History store at {}", db_path.display());
        Ok(store)
    }

    pub fn in_memory(limit: usize) -> SignResult<Self> {
        Self::with_connection(Connection::open_in_memory()?, limit)
    }

    fn with_connection(conn: Connection, limit: usize) -> SignResult<Self> {
        if limit == 0 {
            return Err(SignError::History(
                "history limit must be at least 1".to_string(),
            ));
        }
        conn.execute(
            "CREATE TABLE IF NOT EXISTS history (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                input TEXT NOT NULL,
                language TEXT NOT NULL,
                gloss TEXT NOT NULL,
                display TEXT NOT NULL,
                answer TEXT,
                timestamp TEXT NOT NULL
            )",
            [],
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
            limit,
        })
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Insert and evict beyond the limit, atomically
    pub fn append(&self, entry: &HistoryEntry) -> SignResult<()> {
        let mut conn = self.conn.lock()?;
        let tx = conn.transaction()?;
        tx.execute(
            "INSERT INTO history (input, language, gloss, display, answer, timestamp)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                entry.input,
                entry.language.as_str(),
                entry.gloss,
                entry.display,
                entry.answer,
                entry.timestamp
            ],
        )?;
        let evicted = tx.execute(
            "DELETE FROM history WHERE id NOT IN
                (SELECT id FROM history ORDER BY id DESC LIMIT ?1)",
            params![self.limit as i64],
        )?;
        tx.commit()?;

        if evicted > 0 {
            debug!("Evicted {} old history entries", evicted);
        }
        Ok(())
    }

    /// Newest first
    pub fn recent(&self, limit: usize) -> SignResult<Vec<HistoryEntry>> {
        let conn = self.conn.lock()?;
        let mut stmt = conn.prepare(
            "SELECT input, language, gloss, display, answer, timestamp
             FROM history ORDER BY id DESC LIMIT ?1",
        )?;
        let rows = stmt.query_map(params![limit as i64], |row| {
            Ok(HistoryEntry {
                input: row.get(0)?,
                language: Language::from_name_lossy(&row.get::<_, String>(1)?),
                gloss: row.get(2)?,
                display: row.get(3)?,
                answer: row.get(4)?,
                timestamp: row.get(5)?,
            })
        })?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?);
        }
        Ok(entries)
    }

    pub fn len(&self) -> SignResult<usize> {
        let conn = self.conn.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM history", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    pub fn is_empty(&self) -> SignResult<bool> {
        Ok(self.len()? == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(n: usize) -> HistoryEntry {
        HistoryEntry::new(format!("input {n}"), Language::Isl, "GLOSS", "GLOSS")
    }

    #[test]
    fn test_recent_is_newest_first() {
        let store = HistoryStore::in_memory(10).unwrap();
        for n in 0..3 {
            store.append(&entry(n)).unwrap();
        }
        let recent = store.recent(10).unwrap();
        let inputs: Vec<&str> = recent.iter().map(|e| e.input.as_str()).collect();
        assert_eq!(inputs, vec!["input 2", "input 1", "input 0"]);
    }

    #[test]
    fn test_cap_evicts_oldest() {
        let store = HistoryStore::in_memory(3).unwrap();
        for n in 0..7 {
            store.append(&entry(n)).unwrap();
        }
        assert_eq!(store.len().unwrap(), 3);
        let recent = store.recent(10).unwrap();
        assert_eq!(recent.last().map(|e| e.input.as_str()), Some("input 4"));
    }

    #[test]
    fn test_answer_and_language_round_trip() {
        let store = HistoryStore::in_memory(5).unwrap();
        let asked = HistoryEntry::new("what is gravity", Language::Asl, "WHAT GRAVITY", "WHAT GRAVITY")
            .with_answer("Gravity pulls masses together.");
        store.append(&asked).unwrap();

        let recent = store.recent(1).unwrap();
        assert_eq!(recent[0], asked);
    }

    #[test]
    fn test_persists_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("history.db");
        {
            let store = HistoryStore::open(&path, 50).unwrap();
            store.append(&entry(1)).unwrap();
        }
        let store = HistoryStore::open(&path, 50).unwrap();
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_zero_limit_rejected() {
        assert!(matches!(
            HistoryStore::in_memory(0),
            Err(SignError::History(_))
        ));
    }
}
