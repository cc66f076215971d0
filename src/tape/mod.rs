pub mod sqlite;

use anyhow::Result;
use async_trait::async_trait;

use crate::engine::Computation;

/// One line of the tape.
#[derive(Debug, Clone, PartialEq)]
pub struct TapeEntry {
    pub timestamp: String,
    pub computation: Computation,
}

/// Where finished computations are written. Could be SQLite, a file, etc.
#[async_trait]
pub trait Tape: Send + Sync {
    async fn record(&self, computation: &Computation) -> Result<()>;
    /// The last `limit` entries, oldest first.
    async fn recent(&self, limit: usize) -> Result<Vec<TapeEntry>>;
    async fn clear(&self) -> Result<()>;
}
