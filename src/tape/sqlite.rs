use anyhow::{Context, Result};
use async_trait::async_trait;
use rusqlite::Connection;
use std::sync::Mutex;

use super::{Tape, TapeEntry};
use crate::engine::Computation;

/// SQLite-backed persistent tape.
pub struct SqliteTape {
    conn: Mutex<Connection>,
}

impl SqliteTape {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path).context("failed to open tape database")?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS tape (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                timestamp TEXT NOT NULL DEFAULT (datetime('now')),
                entry TEXT NOT NULL
            );",
        )
        .context("failed to create tape table")?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn in_memory() -> Result<Self> {
        Self::new(":memory:")
    }
}

#[async_trait]
impl Tape for SqliteTape {
    async fn record(&self, computation: &Computation) -> Result<()> {
        let json = serde_json::to_string(computation)?;
        let conn = self.conn.lock().unwrap();
        conn.execute("INSERT INTO tape (entry) VALUES (?1)", [&json])?;
        Ok(())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<TapeEntry>> {
        let conn = self.conn.lock().unwrap();
        // Newest `limit` rows, handed back in chronological order
        let mut stmt = conn.prepare(
            "SELECT timestamp, entry FROM (
                SELECT timestamp, entry, id FROM tape ORDER BY id DESC LIMIT ?1
            ) ORDER BY id ASC",
        )?;
        let rows = stmt
            .query_map([limit as i64], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;
        rows.into_iter()
            .map(|(timestamp, json)| -> Result<TapeEntry> {
                Ok(TapeEntry {
                    timestamp,
                    computation: serde_json::from_str(&json)?,
                })
            })
            .collect()
    }

    async fn clear(&self) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute("DELETE FROM tape", [])?;
        Ok(())
    }
}
