use ratatui::style::Color;

use crate::color::{self, Rgb, TextTone};

pub fn clamp_name(value: &str, width: usize) -> String {
    let value_len = value.chars().count();
    if value_len <= width {
        return format!("{value:<width$}", width = width);
    }
    let trimmed = value
        .chars()
        .take(width.saturating_sub(2))
        .collect::<String>();
    format!("{trimmed}..")
}

pub fn hex_to_color(value: &str) -> Option<Color> {
    let Rgb { r, g, b } = color::hex_to_rgb(value).ok()?;
    Some(Color::Rgb(r, g, b))
}

/// Swatch label color: black on light backgrounds, white otherwise.
pub fn label_color(hex: &str) -> Color {
    if color::is_light(hex) {
        Color::Black
    } else {
        Color::White
    }
}

pub fn tone_color(tone: TextTone) -> Color {
    match tone {
        TextTone::Black => Color::Black,
        TextTone::White => Color::White,
    }
}

/// Dimmer variant of `label_color` for secondary swatch text.
pub fn sublabel_color(hex: &str) -> Color {
    if color::is_light(hex) {
        Color::Rgb(64, 64, 64)
    } else {
        Color::Rgb(200, 200, 200)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_name_pads_or_truncates() {
        assert_eq!(clamp_name("Sea", 5), "Sea  ");
        assert_eq!(clamp_name("Sunset Theme", 8), "Sunset..");
    }

    #[test]
    fn swatch_text_follows_background() {
        assert_eq!(hex_to_color("#102030"), Some(Color::Rgb(16, 32, 48)));
        assert_eq!(hex_to_color("#1020"), None);
        assert_eq!(label_color("#F5F5DC"), Color::Black);
        assert_eq!(label_color("#1E1E5A"), Color::White);
    }
}
