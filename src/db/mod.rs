//! Database module with the key-value store, palette history and migrations.
mod history;
mod kv;
mod migrations;

use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::Connection;

use crate::config::Config;

pub use history::{HISTORY_LIMIT, History};
pub use kv::{KeyValueStore, MemoryStore, SqliteStore};

/// History over whichever store the configuration selected.
pub type HistoryStore = History<Box<dyn KeyValueStore>>;

/// Opens (or creates) the SQLite database and runs migrations.
pub fn init(db_path: impl AsRef<Path>) -> Result<Connection> {
    let db_path = db_path.as_ref();
    let conn = Connection::open(db_path)
        .with_context(|| format!("opening database {}", db_path.display()))?;
    migrations::run_migrations(&conn)?;
    Ok(conn)
}

/// Opens the history backing store: SQLite on disk, or memory when ephemeral.
pub fn open_history(config: &Config) -> Result<HistoryStore> {
    let store: Box<dyn KeyValueStore> = if config.ephemeral {
        Box::new(MemoryStore::default())
    } else {
        Box::new(SqliteStore::new(init(&config.db_path)?))
    };
    History::load(store)
}
