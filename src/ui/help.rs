use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::theme::Theme;
use crate::db::HISTORY_LIMIT;

pub fn build_help_text() -> Text<'static> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "Key bindings",
        Style::default()
            .fg(Theme::highlight())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(section_title("Prompt"));
    lines.extend(section_lines(&[
        "Type: Describe a theme",
        "Enter: Generate palette",
        "Up/Down: Cycle suggestions (before the first palette)",
        "Tab: Switch to browse keys",
        "?: Help, when the prompt is empty",
        "Esc: Clear input, or quit when empty",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Browse"));
    lines.extend(section_lines(&[
        "Up/Down: Move through history",
        "Enter: Open selected palette",
        "e: Export current palette as JSON",
        "x: Clear history",
        "s: Show/hide history sidebar",
        "?: Toggle help",
        "Tab/i: Back to prompt",
        "q/Esc: Quit",
    ]));

    let limit_note = format!("History keeps the {HISTORY_LIMIT} most recent palettes");
    lines.push(Line::from(""));
    lines.push(section_title("Notes"));
    lines.extend(section_lines(&[
        limit_note.as_str(),
        "Exports land in the working directory, named after the palette",
        "Words like ocean, forest or sakura pick the hue",
        "pastel, neon, dark or retro set the mood",
    ]));

    Text::from(lines)
}

fn section_title(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default()
            .fg(Theme::focus())
            .add_modifier(Modifier::BOLD),
    ))
}

fn section_lines(items: &[&str]) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|item| {
            Line::from(Span::styled(
                format!("  - {item}"),
                Style::default().fg(Theme::text()),
            ))
        })
        .collect()
}
