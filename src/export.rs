//! JSON export of a single palette.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::types::Palette;

/// Replaces every whitespace run with one `_` and lowercases the rest.
pub fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_space = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push('_');
            }
            in_space = true;
        } else {
            out.extend(ch.to_lowercase());
            in_space = false;
        }
    }
    out
}

pub fn file_name(palette: &Palette) -> String {
    format!("{}.json", slug(&palette.name))
}

pub fn to_json(palette: &Palette) -> Result<String> {
    Ok(serde_json::to_string_pretty(palette)?)
}

/// Writes `palette` into `dir` and returns the file path.
pub fn write(palette: &Palette, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(file_name(palette));
    std::fs::write(&path, to_json(palette)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), "palette exported");
    Ok(path)
}
