use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::helpers::{clamp_name, hex_to_color};
use super::theme::Theme;
use crate::app::{App, Focus};

const NAME_WIDTH: usize = 30;
/// Rows per entry: name, color strip, date line, spacer.
const ENTRY_HEIGHT: u16 = 4;

/// First row to show so the selected entry, minus its spacer, fits in `height`.
pub fn scroll_offset(selected: usize, height: u16) -> u16 {
    let selected = u16::try_from(selected).unwrap_or(u16::MAX);
    let bottom = selected
        .saturating_mul(ENTRY_HEIGHT)
        .saturating_add(ENTRY_HEIGHT - 1);
    bottom.saturating_sub(height)
}

pub fn build_history_text(app: &App) -> Text<'_> {
    let current_id = app.current.as_ref().map(|palette| palette.id.as_str());
    let browsing = app.focus == Focus::Browse;
    let mut lines = Vec::new();

    for (index, palette) in app.history.entries().iter().enumerate() {
        let selected = browsing && index == app.selected_history_index;
        let is_current = current_id == Some(palette.id.as_str());
        let marker_style = if selected {
            Style::default()
                .fg(Theme::selection_marker())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::dim())
        };
        let name_style = if is_current {
            Style::default()
                .fg(Theme::highlight())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::text())
        };
        lines.push(Line::from(vec![
            Span::styled(if selected { "> " } else { "  " }, marker_style),
            Span::styled(clamp_name(&palette.name, NAME_WIDTH), name_style),
        ]));

        let mut strip = vec![Span::raw("  ")];
        for color in &palette.colors {
            let fill = hex_to_color(&color.hex).unwrap_or(Theme::placeholder());
            strip.push(Span::styled("█████", Style::default().fg(fill)));
        }
        lines.push(Line::from(strip));

        let created = palette
            .created_local()
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        lines.push(Line::from(Span::styled(
            format!("  {created} • {} colors", palette.colors.len()),
            Style::default().fg(Theme::dim()),
        )));
        lines.push(Line::from(""));
    }

    Text::from(lines)
}
