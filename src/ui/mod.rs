mod help;
mod helpers;
mod history;
mod palette;
mod preview;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::app::{App, Focus};
use crate::db::HISTORY_LIMIT;
use crate::types::GeneratorStatus;
use theme::Theme;

const SIDEBAR_WIDTH: u16 = 38;
const INPUT_PLACEHOLDER: &str =
    "Describe your theme (e.g., 'Rainy London Street', '80s Synthwave')";

/// Renders the entire UI for a single frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    let header_lines = vec![Line::from(vec![
        Span::styled(
            "  ChromaGen  ",
            Style::default().fg(Color::White).bg(Theme::primary()),
        ),
        Span::raw(" "),
        Span::styled(
            "palette generator",
            Style::default()
                .fg(Theme::highlight())
                .add_modifier(Modifier::BOLD),
        ),
    ])];
    let header = Paragraph::new(Text::from(header_lines))
        .alignment(Alignment::Left)
        .block(pane(false));
    frame.render_widget(header, layout[0]);

    render_input(frame, layout[1], app);

    let (main_area, sidebar_area) = if app.sidebar_visible() {
        let split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(40), Constraint::Length(SIDEBAR_WIDTH)])
            .split(layout[2]);
        (split[0], Some(split[1]))
    } else {
        (layout[2], None)
    };

    let main_block = pane(false);
    let inner = main_block.inner(main_area);
    frame.render_widget(main_block, main_area);
    match (app.status, &app.current) {
        (GeneratorStatus::Loading, _) => palette::render_loading(frame, inner, app),
        (GeneratorStatus::Error, _) => {
            frame.render_widget(Paragraph::new(palette::build_error_text()), inner)
        }
        (_, Some(current)) => palette::render_palette(frame, inner, current),
        (_, None) => frame.render_widget(Paragraph::new(palette::build_intro_text(app)), inner),
    }

    if let Some(sidebar_area) = sidebar_area {
        let block = pane(app.focus == Focus::Browse).title(format!(
            " History {}/{HISTORY_LIMIT} ",
            app.history.len()
        ));
        let offset =
            history::scroll_offset(app.selected_history_index, block.inner(sidebar_area).height);
        let sidebar = Paragraph::new(history::build_history_text(app))
            .block(block)
            .scroll((offset, 0));
        frame.render_widget(sidebar, sidebar_area);
    }

    let footer = Paragraph::new(Text::from(status_line(app)))
        .alignment(Alignment::Left)
        .block(pane(false));
    frame.render_widget(footer, layout[3]);

    if app.show_help {
        render_help_popup(frame);
    }
}

fn pane(focused: bool) -> Block<'static> {
    let border = if focused {
        Theme::focus()
    } else {
        Theme::secondary()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(border))
}

fn render_input(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Input;
    let mut spans = vec![Span::styled(
        " ✦ ",
        Style::default().fg(Theme::selection_marker()),
    )];
    if app.input.is_empty() && !focused {
        spans.push(Span::styled(INPUT_PLACEHOLDER, Style::default().fg(Theme::dim())));
    } else {
        spans.push(Span::styled(
            app.input.as_str(),
            Style::default()
                .fg(Theme::text())
                .add_modifier(Modifier::BOLD),
        ));
        if focused {
            spans.push(Span::styled("▏", Style::default().fg(Theme::highlight())));
        }
        if app.input.is_empty() {
            spans.push(Span::styled(INPUT_PLACEHOLDER, Style::default().fg(Theme::dim())));
        }
    }
    let action = if app.is_loading() {
        " Processing... "
    } else {
        " Enter: Generate "
    };
    let input = Paragraph::new(Line::from(spans)).block(
        pane(focused)
            .title(" Describe your theme ")
            .title_bottom(Line::from(action).right_aligned()),
    );
    frame.render_widget(input, area);
}

fn status_line(app: &App) -> Line<'_> {
    if let Some(message) = &app.message {
        return Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Theme::highlight()),
        ));
    }
    let hints = match app.focus {
        Focus::Input => " Enter: Generate  Tab: Browse  ?: Help (empty prompt)  Esc: Clear/Quit",
        Focus::Browse => {
            " ↑/↓: History  Enter: Open  e: Export  x: Clear  s: Sidebar  ?: Help  q/Esc: Quit"
        }
    };
    let state = match app.status {
        GeneratorStatus::Idle => Span::styled(" IDLE ", Style::default().fg(Theme::dim())),
        GeneratorStatus::Loading => Span::styled(
            " LOADING ",
            Style::default().fg(Color::Black).bg(Theme::highlight()),
        ),
        GeneratorStatus::Success => Span::styled(
            " READY ",
            Style::default().fg(Color::Black).bg(Theme::focus()),
        ),
        GeneratorStatus::Error => Span::styled(
            " ERROR ",
            Style::default().fg(Color::Black).bg(Theme::error()),
        ),
    };
    Line::from(vec![
        state,
        Span::styled(hints, Style::default().fg(Theme::dim())),
    ])
}

fn render_help_popup(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, area);
    let popup = Paragraph::new(help::build_help_text())
        .alignment(Alignment::Left)
        .block(pane(true).title(" Help "));
    frame.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};
    use tokio::runtime::Runtime;

    use super::*;
    use crate::app::AppEvent;
    use crate::config::Config;
    use crate::db::{History, KeyValueStore, MemoryStore};
    use crate::generator;

    fn app(runtime: &Runtime) -> App {
        let dir = std::env::temp_dir();
        let config = Config {
            data_dir: dir.clone(),
            db_path: dir.join("unused.db"),
            delay: Duration::ZERO,
            ephemeral: true,
        };
        let store: Box<dyn KeyValueStore> = Box::new(MemoryStore::default());
        App::new(config, runtime.handle().clone(), History::load(store).unwrap(), dir)
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 48)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn intro_lists_suggestions() {
        let runtime = Runtime::new().unwrap();
        let screen = render(&app(&runtime));
        assert!(screen.contains("ChromaGen"));
        assert!(screen.contains("Sunset over Santorini"));
        assert!(!screen.contains("History"));
    }

    #[test]
    fn palette_view_shows_hex_codes_and_sidebar() {
        let runtime = Runtime::new().unwrap();
        let mut app = app(&runtime);
        let palette = generator::generate("ocean");
        app.history.record(palette.clone()).unwrap();
        app.current = Some(palette.clone());
        app.status = GeneratorStatus::Success;

        let screen = render(&app);
        for color in &palette.colors {
            assert!(screen.contains(&color.hex), "missing {}", color.hex);
        }
        assert!(screen.contains("History 1/20"));
        assert!(screen.contains("Action Button"));
    }

    #[test]
    fn sidebar_follows_selection_to_the_oldest_entry() {
        let runtime = Runtime::new().unwrap();
        let mut app = app(&runtime);
        for n in 0..HISTORY_LIMIT {
            app.history
                .record(generator::generate(&format!("Entry{n:02}")))
                .unwrap();
        }
        app.update(AppEvent::KeyPress(KeyCode::Tab));
        for _ in 1..HISTORY_LIMIT {
            app.update(AppEvent::KeyPress(KeyCode::Down));
        }
        assert_eq!(app.selected_history_index, HISTORY_LIMIT - 1);

        let screen = render(&app);
        assert!(screen.contains("> Entry00 Palette"));
        assert!(!screen.contains("Entry19 Palette"));
    }

    #[test]
    fn error_state_is_generic() {
        let runtime = Runtime::new().unwrap();
        let mut app = app(&runtime);
        app.status = GeneratorStatus::Error;
        assert!(render(&app).contains("Something went wrong."));
    }
}
