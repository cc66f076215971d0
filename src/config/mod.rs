//! Key-value settings backed by SQLite.
//!
//! Lives in the same database file as the [`SqliteTape`](crate::tape::sqlite::SqliteTape);
//! pass the same path to both.

use anyhow::{Context, Result, bail};
use rusqlite::Connection;
use std::sync::Mutex;

/// Print the display after every key instead of once per line.
pub const STEPS_KEY: &str = "display.steps";

/// Persistent key-value settings store.
pub struct Config {
    conn: Mutex<Connection>,
}

impl Config {
    /// Open or create the config table in the given database.
    /// Use `":memory:"` for tests.
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path).context("failed to open config database")?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS config (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
        )
        .context("failed to create config table")?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare("SELECT value FROM config WHERE key = ?1")?;
        let mut rows = stmt.query([key])?;
        match rows.next()? {
            Some(row) => Ok(Some(row.get(0)?)),
            None => Ok(None),
        }
    }

    /// Upsert.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO config (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            [key, value],
        )?;
        Ok(())
    }

    /// Read a flag stored as `"true"`/`"false"`.
    pub fn get_bool(&self, key: &str) -> Result<Option<bool>> {
        match self.get(key)?.as_deref() {
            None => Ok(None),
            Some("true") => Ok(Some(true)),
            Some("false") => Ok(Some(false)),
            Some(other) => bail!("config key {key} is not a boolean: {other}"),
        }
    }

    pub fn set_bool(&self, key: &str, value: bool) -> Result<()> {
        self.set(key, if value { "true" } else { "false" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mem_config() -> Config {
        Config::open(":memory:").unwrap()
    }

    #[test]
    fn get_returns_none_for_missing_key() {
        let config = mem_config();
        assert!(config.get("nonexistent").unwrap().is_none());
        assert!(config.get_bool(STEPS_KEY).unwrap().is_none());
    }

    #[test]
    fn set_overwrites_existing() {
        let config = mem_config();
        config.set("prompt", "old").unwrap();
        config.set("prompt", "new").unwrap();
        assert_eq!(config.get("prompt").unwrap().unwrap(), "new");
    }

    #[test]
    fn bool_round_trip() {
        let config = mem_config();
        config.set_bool(STEPS_KEY, true).unwrap();
        assert_eq!(config.get_bool(STEPS_KEY).unwrap(), Some(true));
        config.set_bool(STEPS_KEY, false).unwrap();
        assert_eq!(config.get_bool(STEPS_KEY).unwrap(), Some(false));
    }

    #[test]
    fn non_boolean_value_is_an_error() {
        let config = mem_config();
        config.set(STEPS_KEY, "sometimes").unwrap();
        assert!(config.get_bool(STEPS_KEY).is_err());
    }

    #[test]
    fn persists_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config-test.db");
        let path_str = path.to_str().unwrap();

        {
            let config = Config::open(path_str).unwrap();
            config.set_bool(STEPS_KEY, true).unwrap();
        }

        {
            let config = Config::open(path_str).unwrap();
            assert_eq!(config.get_bool(STEPS_KEY).unwrap(), Some(true));
        }
    }
}
