mod app;
mod cli;
mod color;
mod config;
mod db;
mod event;
mod export;
mod generator;
mod logging;
mod tui;
mod types;
mod ui;

use anyhow::Result;
use clap::Parser;
use tokio::runtime::Runtime;

use crate::config::Config;

fn main() -> Result<()> {
    let cli_opts = cli::Cli::parse();
    let config = Config::from_opts(&cli_opts.global)?;
    logging::init(&config.data_dir)?;
    tracing::info!(data_dir = %config.data_dir.display(), ephemeral = config.ephemeral, "starting");

    let runtime = Runtime::new()?;
    let mut history = db::open_history(&config)?;

    if let Some(command) = cli_opts.command {
        return cli::run(command, &config, &runtime, &mut history);
    }

    let export_dir = std::env::current_dir()?;
    let mut app = app::App::new(config, runtime.handle().clone(), history, export_dir);
    let mut terminal = tui::init()?;
    let result = event::run(&mut app, &mut terminal);
    app.quit();

    tui::restore()?;

    result
}
