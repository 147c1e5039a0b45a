//! Palette generation from a free-text theme description.
mod harmony;
mod keywords;

use std::time::Duration;

use chrono::Utc;
use rand::RngExt;

use crate::color::{self, Hsl};
use crate::types::{ColorInfo, Palette};

pub use harmony::{HARMONY, HarmonyRule, jitter, recipe};
pub use keywords::{match_hue, match_mood};

/// Simulated latency before a palette is delivered.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

const ID_LEN: usize = 9;
const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Pre-jitter base color and whether a theme keyword chose its hue.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BaseColor {
    pub hsl: Hsl,
    pub themed: bool,
}

/// Front-end check run before generating; the generator itself accepts any
/// string.
pub fn validate_prompt(prompt: &str) -> Option<&str> {
    (!prompt.trim().is_empty()).then_some(prompt)
}

pub fn base_color<R: RngExt>(prompt: &str, rng: &mut R) -> BaseColor {
    let (hue, themed) = match match_hue(prompt) {
        Some((_, hue)) => (hue, true),
        None => (rng.random_range(0..360u16), false),
    };
    let mood = match_mood(prompt);
    BaseColor {
        hsl: Hsl::new(
            f64::from(hue),
            f64::from(mood.saturation),
            f64::from(mood.lightness),
        ),
        themed,
    }
}

/// Builds a palette for `prompt` using `rng` for every random choice.
///
/// Never fails: any string, including the empty one, yields five colors.
pub fn generate_with<R: RngExt>(prompt: &str, rng: &mut R, created_at: i64) -> Palette {
    let base = base_color(prompt, rng);
    let colors = HARMONY
        .iter()
        .zip(recipe(base.hsl))
        .map(|(rule, hsl)| color_info(rule, jitter(hsl, rng)))
        .collect();
    let (suffix, kind) = if base.themed {
        ("Theme", "thematic")
    } else {
        ("Palette", "custom")
    };
    Palette {
        id: random_id(rng),
        name: format!("{} {suffix}", capitalize(prompt)),
        description: format!(
            "A {kind} palette generated for \"{prompt}\" featuring harmonious blends and accessible contrasts."
        ),
        colors,
        created_at,
    }
}

pub fn generate(prompt: &str) -> Palette {
    generate_with(prompt, &mut rand::rng(), Utc::now().timestamp_millis())
}

/// Waits out the simulated latency, then generates.
pub async fn generate_palette(prompt: &str, delay: Duration) -> Palette {
    tracing::debug!(?delay, "generating palette for {prompt:?}");
    tokio::time::sleep(delay).await;
    let palette = generate(prompt);
    tracing::info!(id = %palette.id, name = %palette.name, "palette generated");
    palette
}

fn color_info(rule: &HarmonyRule, hsl: Hsl) -> ColorInfo {
    // Display strings derive from the final hex, not the float input.
    let hex = color::hsl_to_hex(hsl.h, hsl.s, hsl.l);
    ColorInfo {
        rgb: color::rgb_string(&hex).ok(),
        hsl: color::hsl_string(&hex).ok(),
        hex,
        name: rule.label.to_string(),
        description: rule.description.to_string(),
    }
}

fn random_id<R: RngExt>(rng: &mut R) -> String {
    (0..ID_LEN)
        .map(|_| char::from(ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())]))
        .collect()
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::color::{hex_to_hsl, hex_to_rgb, hsl_string, is_valid_hex, rgb_string};
    use crate::types::PALETTE_SIZE;

    fn seeded(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn blank_prompts_fail_validation() {
        assert_eq!(validate_prompt(""), None);
        assert_eq!(validate_prompt(" \t\n"), None);
        assert_eq!(validate_prompt(" sea "), Some(" sea "));
    }

    #[test]
    fn ocean_sunset_takes_the_sunset_hue() {
        let base = base_color("ocean sunset", &mut seeded(1));
        assert!(base.themed);
        assert_eq!(base.hsl, Hsl::new(25.0, 70.0, 50.0));
    }

    #[test]
    fn pastel_prompt_sets_soft_mood_before_jitter() {
        let base = base_color("pastel dream", &mut seeded(2));
        assert!(!base.themed);
        assert_eq!(base.hsl.s, 40.0);
        assert_eq!(base.hsl.l, 75.0);
    }

    #[test]
    fn empty_prompt_still_builds_a_palette() {
        let palette = generate_with("", &mut seeded(3), 0);
        assert_eq!(palette.colors.len(), PALETTE_SIZE);
        assert_eq!(palette.name, " Palette");
        assert!(palette.description.contains("custom"));
        let base = base_color("", &mut seeded(3));
        assert!(!base.themed);
        assert!((0.0..360.0).contains(&base.hsl.h));
    }

    #[test]
    fn themed_palette_naming() {
        let palette = generate_with("deep forest mystery", &mut seeded(4), 42);
        assert_eq!(palette.name, "Deep forest mystery Theme");
        assert_eq!(
            palette.description,
            "A thematic palette generated for \"deep forest mystery\" featuring harmonious blends and accessible contrasts."
        );
        assert_eq!(palette.created_at, 42);
        let labels: Vec<_> = palette.colors.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            labels,
            [
                "Primary Base",
                "Deep Shade",
                "Soft Highlight",
                "Analogous Harmony",
                "Accent Contrast"
            ]
        );
    }

    #[test]
    fn untouched_prompt_case_in_title() {
        let palette = generate_with("éclair at noon", &mut seeded(5), 0);
        assert_eq!(palette.name, "Éclair at noon Palette");
    }

    #[test]
    fn colors_stay_near_their_recipe() {
        let palette = generate_with("ocean", &mut seeded(6), 0);
        let expected = recipe(Hsl::new(210.0, 70.0, 50.0));
        for (color, target) in palette.colors.iter().zip(expected) {
            let hsl = hex_to_hsl(&color.hex).unwrap();
            let hue_gap = (hsl.h - target.h).rem_euclid(360.0);
            let hue_gap = hue_gap.min(360.0 - hue_gap);
            assert!(hue_gap < 8.0, "{} drifted {hue_gap} degrees", color.name);
            assert!((hsl.l - target.l.clamp(0.0, 100.0)).abs() < 7.0);
        }
    }

    #[test]
    fn ids_are_base36() {
        let palette = generate_with("x", &mut seeded(7), 0);
        assert_eq!(palette.id.len(), ID_LEN);
        assert!(
            palette
                .id
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
        );
    }

    #[tokio::test(start_paused = true)]
    async fn async_generation_resolves_after_delay() {
        let palette = generate_palette("neon city", DEFAULT_DELAY).await;
        assert_eq!(palette.colors.len(), PALETTE_SIZE);
        assert_eq!(palette.name, "Neon city Palette");
    }

    proptest! {
        #[test]
        fn any_prompt_yields_consistent_colors(prompt in ".{0,40}", seed in any::<u64>()) {
            let palette = generate_with(&prompt, &mut seeded(seed), 0);
            prop_assert_eq!(palette.colors.len(), PALETTE_SIZE);
            for color in &palette.colors {
                prop_assert!(is_valid_hex(&color.hex));
                prop_assert_eq!(color.hex.to_uppercase(), color.hex.clone());
                prop_assert_eq!(Some(rgb_string(&color.hex).unwrap()), color.rgb.clone());
                prop_assert_eq!(Some(hsl_string(&color.hex).unwrap()), color.hsl.clone());
                prop_assert_eq!(hex_to_rgb(&color.hex).unwrap().to_hex(), color.hex.clone());
                prop_assert_eq!(hex_to_hsl(&color.hex).unwrap().to_hex(), color.hex.clone());
            }
        }
    }
}
