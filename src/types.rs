use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};

use crate::color;

pub type PaletteId = String;

/// Every palette carries exactly this many colors.
pub const PALETTE_SIZE: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorInfo {
    pub hex: String,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rgb: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hsl: Option<String>,
}

impl ColorInfo {
    /// Stored `rgb(...)` string, or one derived from the hex for older entries.
    pub fn rgb_label(&self) -> Option<String> {
        self.rgb
            .clone()
            .or_else(|| color::rgb_string(&self.hex).ok())
    }

    pub fn hsl_label(&self) -> Option<String> {
        self.hsl
            .clone()
            .or_else(|| color::hsl_string(&self.hex).ok())
    }
}

/// A generated palette; immutable once created, identified by `id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub id: PaletteId,
    pub name: String,
    pub description: String,
    pub colors: Vec<ColorInfo>,
    /// Epoch milliseconds.
    pub created_at: i64,
}

impl Palette {
    pub fn created_local(&self) -> Option<DateTime<Local>> {
        Local.timestamp_millis_opt(self.created_at).single()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GeneratorStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_json_uses_camel_case_and_skips_missing_strings() {
        let palette = Palette {
            id: "abc123xyz".to_string(),
            name: "Ocean Theme".to_string(),
            description: "test".to_string(),
            colors: vec![ColorInfo {
                hex: "#112233".to_string(),
                name: "Primary Base".to_string(),
                description: "d".to_string(),
                rgb: None,
                hsl: Some("hsl(210, 50%, 13%)".to_string()),
            }],
            created_at: 1_700_000_000_000,
        };
        let json = serde_json::to_value(&palette).unwrap();
        assert_eq!(json["createdAt"], 1_700_000_000_000i64);
        assert!(json["colors"][0].get("rgb").is_none());
        assert_eq!(json["colors"][0]["hsl"], "hsl(210, 50%, 13%)");

        let back: Palette = serde_json::from_value(json).unwrap();
        assert_eq!(back, palette);
    }

    #[test]
    fn labels_fall_back_to_the_hex() {
        let info = ColorInfo {
            hex: "#FF8000".to_string(),
            name: "Accent".to_string(),
            description: String::new(),
            rgb: None,
            hsl: None,
        };
        assert_eq!(info.rgb_label().as_deref(), Some("rgb(255, 128, 0)"));
        assert_eq!(info.hsl_label().as_deref(), Some("hsl(30, 100%, 50%)"));

        let broken = ColorInfo {
            hex: "nope".to_string(),
            ..info
        };
        assert_eq!(broken.rgb_label(), None);
    }
}
