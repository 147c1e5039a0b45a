//! Color conversions between HSL, RGB and `#RRGGBB` hex strings.
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("expected 6 hex digits, got {0}")]
    InvalidLength(usize),
    #[error("invalid hex digits in '{0}'")]
    InvalidDigit(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue in degrees [0, 360), saturation and lightness in percent [0, 100].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Wraps the hue into [0, 360) and clamps saturation/lightness to [0, 100].
    pub fn normalized(self) -> Self {
        // rem_euclid can land on 360.0 itself for tiny negative inputs
        let h = self.h.rem_euclid(360.0);
        Self {
            h: if h >= 360.0 { 0.0 } else { h },
            s: self.s.clamp(0.0, 100.0),
            l: self.l.clamp(0.0, 100.0),
        }
    }

    /// Chroma-based HSL to RGB construction, one channel per offset `n`.
    pub fn to_rgb(self) -> Rgb {
        let Hsl { h, s, l } = self.normalized();
        let l = l / 100.0;
        let a = s * l.min(1.0 - l) / 100.0;
        let channel = |n: f64| {
            let k = (n + h / 30.0) % 12.0;
            let value = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
            (value * 255.0).round().clamp(0.0, 255.0) as u8
        };
        Rgb {
            r: channel(0.0),
            g: channel(8.0),
            b: channel(4.0),
        }
    }

    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }

    /// Integer-rounded `hsl(h, s%, l%)`; a hue rounding up to 360 reads as 0.
    pub fn css(self) -> String {
        let h = self.h.round() as u16 % 360;
        let s = self.s.round() as u8;
        let l = self.l.round() as u8;
        format!("hsl({h}, {s}%, {l}%)")
    }
}

impl Rgb {
    pub fn from_hex(value: &str) -> Result<Self, ColorError> {
        let hex = value.trim().strip_prefix('#').unwrap_or(value.trim());
        if hex.len() != 6 {
            return Err(ColorError::InvalidLength(hex.len()));
        }
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidDigit(value.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| ColorError::InvalidDigit(value.to_string()))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Exact (unrounded) HSL of this color.
    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        if max == min {
            return Hsl::new(0.0, 0.0, l * 100.0);
        }
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let sector = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        // Turn fraction first: `sector * 60.0` rounds differently on exact .5 hues.
        Hsl::new(sector / 6.0 * 360.0, s * 100.0, l * 100.0)
    }

    /// ITU-R BT.709 luma on the 0-255 scale.
    pub fn luma(self) -> f64 {
        0.2126 * f64::from(self.r) + 0.7152 * f64::from(self.g) + 0.0722 * f64::from(self.b)
    }

    /// YIQ brightness on the 0-255 scale.
    pub fn yiq(self) -> f64 {
        (f64::from(self.r) * 299.0 + f64::from(self.g) * 587.0 + f64::from(self.b) * 114.0)
            / 1000.0
    }
}

/// Strict `#RRGGBB` form, as stored in palettes.
pub fn is_valid_hex(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|digits| digits.len() == 6 && Rgb::from_hex(digits).is_ok())
}

pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    Hsl::new(h, s, l).to_hex()
}

pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    Rgb::from_hex(hex)
}

pub fn hex_to_hsl(hex: &str) -> Result<Hsl, ColorError> {
    Rgb::from_hex(hex).map(Rgb::to_hsl)
}

/// `rgb(r, g, b)` display string for a hex color.
pub fn rgb_string(hex: &str) -> Result<String, ColorError> {
    Rgb::from_hex(hex).map(Rgb::css)
}

/// `hsl(h, s%, l%)` display string, integer-rounded from the hex channels.
pub fn hsl_string(hex: &str) -> Result<String, ColorError> {
    hex_to_hsl(hex).map(Hsl::css)
}

/// Whether dark text reads better than light text on this background.
pub fn is_light(hex: &str) -> bool {
    Rgb::from_hex(hex).map(|rgb| rgb.luma() > 128.0).unwrap_or(false)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextTone {
    Black,
    White,
}

/// Text tone for labels drawn on top of `hex`, by YIQ brightness.
pub fn contrast_text(hex: &str) -> TextTone {
    match Rgb::from_hex(hex) {
        Ok(rgb) if rgb.yiq() >= 128.0 => TextTone::Black,
        _ => TextTone::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_hues_convert_to_expected_hex() {
        assert_eq!(hsl_to_hex(0.0, 100.0, 50.0), "#FF0000");
        assert_eq!(hsl_to_hex(120.0, 100.0, 50.0), "#00FF00");
        assert_eq!(hsl_to_hex(240.0, 100.0, 50.0), "#0000FF");
        assert_eq!(hsl_to_hex(0.0, 0.0, 100.0), "#FFFFFF");
        assert_eq!(hsl_to_hex(200.0, 35.0, 0.0), "#000000");
    }

    #[test]
    fn hex_output_is_uppercase_and_padded() {
        let hex = hsl_to_hex(210.0, 70.0, 10.0);
        assert!(is_valid_hex(&hex));
        assert_eq!(hex, hex.to_uppercase());
        assert_eq!(hex, "#081A2B");
    }

    #[test]
    fn parse_rejects_malformed_hex() {
        assert_eq!(Rgb::from_hex("#FFF"), Err(ColorError::InvalidLength(3)));
        assert!(matches!(
            Rgb::from_hex("#GG0000"),
            Err(ColorError::InvalidDigit(_))
        ));
        assert_eq!(
            Rgb::from_hex("ff8000"),
            Ok(Rgb {
                r: 255,
                g: 128,
                b: 0
            })
        );
    }

    #[test]
    fn display_strings_come_from_channels() {
        assert_eq!(rgb_string("#FF8000").unwrap(), "rgb(255, 128, 0)");
        assert_eq!(hsl_string("#FF8000").unwrap(), "hsl(30, 100%, 50%)");
        assert_eq!(hsl_string("#808080").unwrap(), "hsl(0, 0%, 50%)");
    }

    #[test]
    fn hue_rounding_up_to_a_full_turn_wraps_to_zero() {
        assert_eq!(hsl_string("#FF0001").unwrap(), "hsl(0, 100%, 50%)");
    }

    #[test]
    fn half_degree_hues_round_like_the_turn_fraction() {
        assert_eq!(hsl_string("#000D28").unwrap(), "hsl(220, 100%, 8%)");
    }

    #[test]
    fn strict_hex_requires_hash_and_six_digits() {
        assert!(is_valid_hex("#a1B2c3"));
        assert!(!is_valid_hex("a1B2c3"));
        assert!(!is_valid_hex("#a1B2c"));
        assert!(!is_valid_hex("# a1B2c"));
        assert!(!is_valid_hex("#a1B2cZ"));
    }

    #[test]
    fn every_channel_survives_hsl_round_trip() {
        for v in 0..=255u8 {
            for rgb in [
                Rgb { r: v, g: 0, b: 255 - v },
                Rgb { r: v, g: v / 2, b: 17 },
                Rgb { r: 3, g: v, b: v },
            ] {
                let hex = rgb.to_hex();
                assert_eq!(hex_to_hsl(&hex).unwrap().to_hex(), hex);
                assert_eq!(hex_to_rgb(&hex).unwrap().to_hex(), hex);
            }
        }
    }

    #[test]
    fn readability_helpers() {
        assert!(is_light("#FFFFFF"));
        assert!(!is_light("#000000"));
        assert!(!is_light("not a color"));
        assert_eq!(contrast_text("#FFFF00"), TextTone::Black);
        assert_eq!(contrast_text("#000080"), TextTone::White);
    }
}
