//! Runtime configuration resolved from CLI options and platform directories.
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::cli::GlobalOpts;

const APP_DIR: &str = "chromagen";
const DB_FILE: &str = "chromagen.db";

#[derive(Clone, Debug)]
pub struct Config {
    pub data_dir: PathBuf,
    pub db_path: PathBuf,
    pub delay: Duration,
    pub ephemeral: bool,
}

impl Config {
    pub fn from_opts(opts: &GlobalOpts) -> Result<Self> {
        let data_dir = opts.data_dir.clone().unwrap_or_else(default_data_dir);
        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("creating data directory {}", data_dir.display()))?;
        Ok(Self {
            db_path: data_dir.join(DB_FILE),
            data_dir,
            delay: Duration::from_millis(opts.delay_ms),
            ephemeral: opts.ephemeral,
        })
    }
}

/// Returns the default data directory inside the user's local data dir.
/// Falls back to the working directory when no data dir is found.
pub fn default_data_dir() -> PathBuf {
    match dirs::data_local_dir() {
        Some(data_dir) => data_dir.join(APP_DIR),
        None => PathBuf::from("."),
    }
}
