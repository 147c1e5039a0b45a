//! Newest-first palette history persisted as one JSON value.
use anyhow::Result;

use super::kv::KeyValueStore;
use crate::color;
use crate::types::Palette;

pub const HISTORY_KEY: &str = "chromagen_history";
pub const HISTORY_LIMIT: usize = 20;

pub struct History<S> {
    store: S,
    entries: Vec<Palette>,
}

impl<S: KeyValueStore> History<S> {
    /// Loads the stored history. A missing or unreadable value starts empty.
    pub fn load(store: S) -> Result<Self> {
        let entries = match store.get(HISTORY_KEY)? {
            Some(raw) => match serde_json::from_str::<Vec<Palette>>(&raw) {
                Ok(mut entries) => {
                    let stored = entries.len();
                    entries.retain(|palette| {
                        palette.colors.iter().all(|c| color::is_valid_hex(&c.hex))
                    });
                    if entries.len() < stored {
                        tracing::warn!(
                            dropped = stored - entries.len(),
                            "skipping stored palettes with malformed colors"
                        );
                    }
                    entries.truncate(HISTORY_LIMIT);
                    entries
                }
                Err(err) => {
                    tracing::warn!(%err, "discarding unreadable palette history");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        tracing::debug!(count = entries.len(), "history loaded");
        Ok(Self { store, entries })
    }

    pub fn entries(&self) -> &[Palette] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&Palette> {
        self.entries.first()
    }

    pub fn get(&self, id: &str) -> Option<&Palette> {
        self.entries.iter().find(|palette| palette.id == id)
    }

    /// Prepends `palette`, keeps the newest `HISTORY_LIMIT` and rewrites the store.
    /// Entries only change once the store has accepted the new list.
    pub fn record(&mut self, palette: Palette) -> Result<()> {
        let mut entries = Vec::with_capacity(HISTORY_LIMIT);
        entries.push(palette);
        entries.extend(
            self.entries
                .iter()
                .take(HISTORY_LIMIT.saturating_sub(1))
                .cloned(),
        );
        let raw = serde_json::to_string(&entries)?;
        self.store.set(HISTORY_KEY, &raw)?;
        self.entries = entries;
        Ok(())
    }

    pub fn clear(&mut self) -> Result<()> {
        self.store.remove(HISTORY_KEY)?;
        self.entries.clear();
        Ok(())
    }
}
