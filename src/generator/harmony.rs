//! Harmony recipe: five fixed transformations of one base color.
use rand::RngExt;

use crate::color::Hsl;

/// Maximum organic jitter per component (degrees for hue, points for s/l).
pub const JITTER: f64 = 5.0;

pub struct HarmonyRule {
    pub label: &'static str,
    pub description: &'static str,
    pub hue_delta: f64,
    pub saturation: fn(f64) -> f64,
    pub lightness: fn(f64) -> f64,
}

impl HarmonyRule {
    /// Applies the rule to the base color without jitter or clamping.
    pub fn apply(&self, base: Hsl) -> Hsl {
        Hsl::new(
            (base.h + self.hue_delta) % 360.0,
            (self.saturation)(base.s),
            (self.lightness)(base.l),
        )
    }
}

fn keep(value: f64) -> f64 {
    value
}

pub const HARMONY: [HarmonyRule; 5] = [
    HarmonyRule {
        label: "Primary Base",
        description: "The foundational color derived from your theme.",
        hue_delta: 0.0,
        saturation: keep,
        lightness: keep,
    },
    HarmonyRule {
        label: "Deep Shade",
        description: "A darker shade providing depth and contrast.",
        hue_delta: 0.0,
        saturation: |s| s + 10.0,
        lightness: |l| (l - 20.0).max(10.0),
    },
    HarmonyRule {
        label: "Soft Highlight",
        description: "A lighter tint for backgrounds or subtle elements.",
        hue_delta: 0.0,
        saturation: |s| (s - 20.0).max(0.0),
        lightness: |l| (l + 30.0).min(95.0),
    },
    HarmonyRule {
        label: "Analogous Harmony",
        description: "A neighboring hue that blends seamlessly.",
        hue_delta: 30.0,
        saturation: keep,
        lightness: keep,
    },
    HarmonyRule {
        label: "Accent Contrast",
        description: "The opposite color on the wheel for striking accents.",
        hue_delta: 180.0,
        saturation: keep,
        lightness: keep,
    },
];

/// Unjittered recipe colors for a base color, in palette order.
pub fn recipe(base: Hsl) -> [Hsl; 5] {
    HARMONY.each_ref().map(|rule| rule.apply(base))
}

/// Perturbs each component by up to `JITTER`, then wraps the hue and clamps
/// saturation and lightness.
pub fn jitter<R: RngExt>(color: Hsl, rng: &mut R) -> Hsl {
    Hsl::new(
        color.h + rng.random_range(-JITTER..JITTER),
        color.s + rng.random_range(-JITTER..JITTER),
        color.l + rng.random_range(-JITTER..JITTER),
    )
    .normalized()
}
