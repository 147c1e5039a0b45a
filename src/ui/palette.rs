use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Padding, Paragraph, Wrap},
};

use super::helpers::{hex_to_color, label_color, sublabel_color};
use super::preview;
use super::theme::Theme;
use crate::app::{App, SUGGESTIONS};
use crate::types::{ColorInfo, PALETTE_SIZE, Palette};

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub fn render_palette(frame: &mut Frame, area: Rect, palette: &Palette) {
    let [info, swatches, usage] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Min(9),
        Constraint::Length(11),
    ])
    .areas(area);

    let info_text = Text::from(vec![
        Line::from(Span::styled(
            palette.name.as_str(),
            Style::default()
                .fg(Theme::text())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            palette.description.as_str(),
            Style::default().fg(Theme::dim()),
        )),
        Line::from(Span::styled(
            format!("{} Colors • Generated by ChromaGen", palette.colors.len()),
            Style::default().fg(Theme::dim()),
        )),
    ]);
    frame.render_widget(
        Paragraph::new(info_text)
            .wrap(Wrap { trim: true })
            .block(Block::default().padding(Padding::horizontal(1))),
        info,
    );

    let columns = Layout::horizontal(vec![
        Constraint::Ratio(1, palette.colors.len().max(1) as u32);
        palette.colors.len()
    ])
    .split(swatches);
    for (info, column) in palette.colors.iter().zip(columns.iter()) {
        frame.render_widget(swatch(info), *column);
    }

    preview::render_preview(frame, usage, &palette.colors);
}

fn swatch(info: &ColorInfo) -> Paragraph<'_> {
    let background = hex_to_color(&info.hex).unwrap_or(Theme::placeholder());
    let label = label_color(&info.hex);
    let sublabel = Style::default().fg(sublabel_color(&info.hex));
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            info.hex.as_str(),
            Style::default().fg(label).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(info.name.as_str(), Style::default().fg(label))),
        Line::from(""),
        Line::from(vec![
            Span::styled("RGB ", sublabel),
            Span::styled(info.rgb_label().unwrap_or_else(|| "-".to_string()), sublabel),
        ]),
        Line::from(vec![
            Span::styled("HSL ", sublabel),
            Span::styled(info.hsl_label().unwrap_or_else(|| "-".to_string()), sublabel),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            info.description.as_str(),
            sublabel.add_modifier(Modifier::ITALIC),
        )),
    ];
    Paragraph::new(Text::from(lines))
        .style(Style::default().bg(background))
        .wrap(Wrap { trim: true })
        .block(Block::default().padding(Padding::horizontal(1)))
}

pub fn render_loading(frame: &mut Frame, area: Rect, app: &App) {
    let [status, swatches] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(3)]).areas(area);
    let spinner = SPINNER[app.ticks % SPINNER.len()];
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!(" {spinner} "),
                Style::default().fg(Theme::selection_marker()),
            ),
            Span::styled("Processing...", Style::default().fg(Theme::highlight())),
        ])),
        status,
    );
    let columns = Layout::horizontal([Constraint::Ratio(1, PALETTE_SIZE as u32); PALETTE_SIZE])
        .spacing(1)
        .split(swatches);
    for column in columns.iter() {
        frame.render_widget(
            Block::default().style(Style::default().bg(Theme::placeholder())),
            *column,
        );
    }
}

pub fn build_intro_text(app: &App) -> Text<'_> {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Your imagination,",
            Style::default()
                .fg(Theme::text())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "  visualized in color.",
            Style::default()
                .fg(Theme::highlight())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Describe a mood, a scene, or a theme, and get a harmonious five-color palette.",
            Style::default().fg(Theme::dim()),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Try one (Up/Down):",
            Style::default().fg(Theme::dim()),
        )),
    ];
    for (index, suggestion) in SUGGESTIONS.iter().enumerate() {
        let selected = app.suggestion_index == Some(index);
        let marker_style = if selected {
            Style::default()
                .fg(Theme::selection_marker())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::dim())
        };
        let text_style = if selected {
            Style::default().fg(Theme::text())
        } else {
            Style::default().fg(Theme::dim())
        };
        lines.push(Line::from(vec![
            Span::styled(if selected { "  > " } else { "    " }, marker_style),
            Span::styled(*suggestion, text_style),
        ]));
    }
    Text::from(lines)
}

pub fn build_error_text() -> Text<'static> {
    Text::from(vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Something went wrong.",
            Style::default()
                .fg(Theme::error())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "  Please try again or use a different description.",
            Style::default().fg(Theme::dim()),
        )),
    ])
}
