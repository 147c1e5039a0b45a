use ratatui::style::Color;

/// Unified color theme for the application chrome (never the palette itself)
pub struct Theme;

impl Theme {
    /// Primary branding color
    pub fn primary() -> Color {
        Color::Rgb(99, 102, 241)
    }

    /// Secondary/border color
    pub fn secondary() -> Color {
        Color::Rgb(63, 63, 70)
    }

    /// Border of the focused pane
    pub fn focus() -> Color {
        Color::Rgb(168, 85, 247)
    }

    /// Selection/highlight
    pub fn highlight() -> Color {
        Color::Rgb(165, 180, 252)
    }

    /// Selection marker/arrow
    pub fn selection_marker() -> Color {
        Color::Rgb(236, 72, 153)
    }

    /// Errors
    pub fn error() -> Color {
        Color::Rgb(248, 113, 113)
    }

    /// Dimmed/inactive text
    pub fn dim() -> Color {
        Color::DarkGray
    }

    /// Normal text
    pub fn text() -> Color {
        Color::White
    }

    /// Loading placeholders
    pub fn placeholder() -> Color {
        Color::Rgb(24, 24, 27)
    }
}
