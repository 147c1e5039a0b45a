use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Padding, Paragraph, Wrap},
};

use super::helpers::{hex_to_color, tone_color};
use super::theme::Theme;
use crate::color::contrast_text;
use crate::types::ColorInfo;

/// Usage examples: a card mock-up and a typography sample built from the
/// palette's own colors.
pub fn render_preview(frame: &mut Frame, area: Rect, colors: &[ColorInfo]) {
    let (Some(first), Some(last)) = (colors.first(), colors.last()) else {
        return;
    };
    let second = colors.get(1).unwrap_or(first);
    let third = colors.get(2).unwrap_or(first);

    let [card, typography] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .spacing(2)
            .areas(area.inner(ratatui::layout::Margin::new(1, 1)));

    let bg = |c: &ColorInfo| hex_to_color(&c.hex).unwrap_or(Theme::placeholder());

    let [banner, body] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(1)]).areas(card);
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled("  ●●", Style::default().fg(bg(third)))),
        ])
        .style(Style::default().bg(bg(second))),
        banner,
    );
    let bar = Style::default().fg(bg(last));
    let button = Style::default()
        .bg(bg(third))
        .fg(tone_color(contrast_text(&third.hex)))
        .add_modifier(Modifier::BOLD);
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled("▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀", bar)),
            Line::from(Span::styled("▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀", bar)),
            Line::from(Span::styled("▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀", bar)),
            Line::from(""),
            Line::from(Span::styled(" Action Button ", button)),
        ])
        .style(Style::default().bg(bg(first)))
        .block(Block::default().padding(Padding::horizontal(2))),
        body,
    );

    let mut dots = Vec::new();
    for color in colors {
        dots.push(Span::styled("● ", Style::default().fg(bg(color))));
    }
    let sample = Text::from(vec![
        Line::from(Span::styled(
            "Main Headline",
            Style::default().fg(bg(first)).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "This is how the second color reads as body text against the last color in your palette.",
            Style::default().fg(bg(second)),
        )),
        Line::from(""),
        Line::from(dots),
    ]);
    frame.render_widget(
        Paragraph::new(sample)
            .style(Style::default().bg(bg(last)))
            .wrap(Wrap { trim: true })
            .block(Block::default().padding(Padding::uniform(1))),
        typography,
    );
}
