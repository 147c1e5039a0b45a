//! File-backed tracing setup. The terminal belongs to the TUI, so nothing is
//! written to stdout or stderr.
use std::path::Path;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "chromagen.log";
const DEFAULT_FILTER: &str = "chromagen=info";

pub fn init(log_dir: &Path) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(appender)
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_lands_in_data_dir_and_init_runs_once() {
        let dir = tempfile::tempdir().unwrap();
        init(dir.path()).unwrap();
        tracing::info!("logging test");
        assert!(dir.path().join(LOG_FILE).is_file());

        let err = init(dir.path()).unwrap_err();
        assert!(!err.to_string().is_empty());
    }
}
