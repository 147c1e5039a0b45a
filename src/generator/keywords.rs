//! Theme keyword lookups. Both tables are scanned in declaration order and
//! the first hit wins, so entry order is part of the contract.

pub const HUE_KEYWORDS: &[(&str, u16)] = &[
    ("red", 0),
    ("crimson", 348),
    ("ruby", 340),
    ("fire", 15),
    ("orange", 30),
    ("sunset", 25),
    ("coral", 16),
    ("yellow", 60),
    ("gold", 50),
    ("sun", 55),
    ("green", 120),
    ("forest", 130),
    ("nature", 110),
    ("lime", 90),
    ("emerald", 140),
    ("cyan", 180),
    ("sky", 195),
    ("teal", 170),
    ("aqua", 175),
    ("blue", 240),
    ("ocean", 210),
    ("sea", 220),
    ("royal", 230),
    ("purple", 270),
    ("violet", 280),
    ("lavender", 260),
    ("indigo", 255),
    ("pink", 300),
    ("rose", 330),
    ("magenta", 300),
    ("sakura", 350),
    ("brown", 25),
    ("coffee", 30),
    ("wood", 35),
];

/// Saturation/lightness pair in percent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mood {
    pub saturation: u8,
    pub lightness: u8,
}

pub const DEFAULT_MOOD: Mood = Mood {
    saturation: 70,
    lightness: 50,
};

pub const MOOD_KEYWORDS: &[(&[&str], Mood)] = &[
    (
        &["pastel", "soft"],
        Mood {
            saturation: 40,
            lightness: 75,
        },
    ),
    (
        &["neon", "cyber"],
        Mood {
            saturation: 100,
            lightness: 60,
        },
    ),
    (
        &["dark", "night"],
        Mood {
            saturation: 60,
            lightness: 25,
        },
    ),
    (
        &["vintage", "retro"],
        Mood {
            saturation: 40,
            lightness: 60,
        },
    ),
];

/// First hue keyword contained in the prompt, if any.
pub fn match_hue(prompt: &str) -> Option<(&'static str, u16)> {
    let lower = prompt.to_lowercase();
    HUE_KEYWORDS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .copied()
}

pub fn match_mood(prompt: &str) -> Mood {
    let lower = prompt.to_lowercase();
    MOOD_KEYWORDS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| lower.contains(keyword)))
        .map(|(_, mood)| *mood)
        .unwrap_or(DEFAULT_MOOD)
}
