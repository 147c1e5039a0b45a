//! CLI argument parsing and command handling.
use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand};
use tokio::runtime::Runtime;

use crate::config::Config;
use crate::db::{History, KeyValueStore};
use crate::types::Palette;
use crate::{export, generator};

#[derive(Parser)]
#[command(
    name = "chromagen",
    version,
    about = "ChromaGen - Turn a theme description into a five-color palette"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Directory holding the history database and log file.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
    /// Simulated generation latency in milliseconds.
    #[arg(long, global = true, default_value_t = generator::DEFAULT_DELAY.as_millis() as u64)]
    pub delay_ms: u64,
    /// Keep history in memory only.
    #[arg(long, global = true)]
    pub ephemeral: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a palette and record it in history.
    Generate {
        #[arg(required = true, num_args = 1..)]
        prompt: Vec<String>,
        #[arg(long)]
        json: bool,
    },
    /// List stored palettes, newest first.
    History {
        #[arg(long)]
        json: bool,
    },
    /// Print one stored palette.
    Show { id: String },
    /// Write a stored palette (default: the latest) to a JSON file.
    Export {
        id: Option<String>,
        #[arg(short = 'o', long = "out")]
        out: Option<PathBuf>,
    },
    /// Remove every stored palette.
    Clear,
}

/// Execute a CLI command against the given history.
pub fn run<S: KeyValueStore>(
    command: Command,
    config: &Config,
    runtime: &Runtime,
    history: &mut History<S>,
) -> Result<()> {
    match command {
        Command::Generate { prompt, json } => {
            handle_generate(prompt.join(" "), json, config, runtime, history)?
        }
        Command::History { json } => handle_history(json, history)?,
        Command::Show { id } => match history.get(&id) {
            Some(palette) => print_palette(palette),
            None => println!("Palette '{id}' not found."),
        },
        Command::Export { id, out } => handle_export(id, out, history)?,
        Command::Clear => {
            let count = history.len();
            history.clear()?;
            println!("Cleared {count} palette(s).");
        }
    }
    Ok(())
}

fn handle_generate<S: KeyValueStore>(
    prompt: String,
    json: bool,
    config: &Config,
    runtime: &Runtime,
    history: &mut History<S>,
) -> Result<()> {
    let Some(prompt) = generator::validate_prompt(&prompt) else {
        bail!("Prompt must not be empty.");
    };
    let palette = runtime.block_on(generator::generate_palette(prompt, config.delay));
    if json {
        println!("{}", export::to_json(&palette)?);
    } else {
        print_palette(&palette);
    }
    history.record(palette)?;
    Ok(())
}

fn handle_history<S: KeyValueStore>(json: bool, history: &History<S>) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(history.entries())?);
        return Ok(());
    }
    if history.is_empty() {
        println!("No palettes yet.");
        return Ok(());
    }
    for palette in history.entries() {
        let swatches: Vec<&str> = palette.colors.iter().map(|c| c.hex.as_str()).collect();
        println!(
            "{}  {:<32}  {}  {}",
            palette.id,
            palette.name,
            format_created(palette),
            swatches.join(" ")
        );
    }
    Ok(())
}

fn handle_export<S: KeyValueStore>(
    id: Option<String>,
    out: Option<PathBuf>,
    history: &History<S>,
) -> Result<()> {
    let palette = match id.as_deref() {
        Some(id) => history.get(id),
        None => history.latest(),
    };
    let Some(palette) = palette else {
        println!("No palette to export.");
        return Ok(());
    };
    let dir = match out {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let path = export::write(palette, &dir)?;
    println!("Exported '{}' to {}", palette.name, path.display());
    Ok(())
}

fn format_created(palette: &Palette) -> String {
    palette
        .created_local()
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn print_palette(palette: &Palette) {
    println!("{}", palette.name);
    println!("{}", palette.description);
    println!("id: {}  created: {}", palette.id, format_created(palette));
    println!();
    for info in &palette.colors {
        println!(
            "  {}  {:<18} {:<20} {}",
            info.hex,
            info.name,
            info.rgb_label().unwrap_or_default(),
            info.hsl_label().unwrap_or_default()
        );
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::db::MemoryStore;

    fn test_config(dir: &std::path::Path) -> Config {
        Config {
            data_dir: dir.to_path_buf(),
            db_path: dir.join("chromagen.db"),
            delay: Duration::ZERO,
            ephemeral: true,
        }
    }

    #[test]
    fn parses_multi_word_prompt_and_global_flags() {
        let cli = Cli::try_parse_from([
            "chromagen",
            "generate",
            "ocean",
            "sunset",
            "--delay-ms",
            "0",
            "--ephemeral",
        ])
        .unwrap();
        assert_eq!(cli.global.delay_ms, 0);
        assert!(cli.global.ephemeral);
        match cli.command {
            Some(Command::Generate { prompt, json }) => {
                assert_eq!(prompt, ["ocean", "sunset"]);
                assert!(!json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn generate_then_export_then_clear() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let runtime = Runtime::new().unwrap();
        let mut history = History::load(MemoryStore::default()).unwrap();

        let generate = Command::Generate {
            prompt: vec!["ocean".into(), "sunset".into()],
            json: false,
        };
        run(generate, &config, &runtime, &mut history).unwrap();
        assert_eq!(history.len(), 1);
        let name = history.latest().unwrap().name.clone();
        assert_eq!(name, "Ocean sunset Theme");

        let export = Command::Export {
            id: None,
            out: Some(dir.path().to_path_buf()),
        };
        run(export, &config, &runtime, &mut history).unwrap();
        assert!(dir.path().join("ocean_sunset_theme.json").is_file());

        run(Command::Clear, &config, &runtime, &mut history).unwrap();
        assert!(history.is_empty());
    }

    #[test]
    fn blank_generate_records_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let runtime = Runtime::new().unwrap();
        let mut history = History::load(MemoryStore::default()).unwrap();
        let generate = Command::Generate {
            prompt: vec!["  ".into()],
            json: true,
        };
        assert!(run(generate, &config, &runtime, &mut history).is_err());
        assert!(history.is_empty());
    }
}
