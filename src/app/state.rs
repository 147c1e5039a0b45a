use std::path::PathBuf;

use crossterm::event::KeyCode;
use tokio::runtime::Handle;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tokio::task::JoinHandle;

use crate::config::Config;
use crate::db::HistoryStore;
use crate::types::{GeneratorStatus, Palette};
use crate::{export, generator};

use super::{AppEvent, Focus, SUGGESTIONS};

/// The top-level application state.
pub struct App {
    pub running: bool,
    pub history: HistoryStore,
    pub input: String,
    pub status: GeneratorStatus,
    pub current: Option<Palette>,
    pub focus: Focus,
    pub show_help: bool,
    pub show_history: bool,
    pub selected_history_index: usize,
    pub suggestion_index: Option<usize>,
    pub message: Option<String>,
    pub ticks: usize,
    pub export_dir: PathBuf,
    config: Config,
    runtime: Handle,
    pending: Option<PendingGeneration>,
}

struct PendingGeneration {
    rx: oneshot::Receiver<Palette>,
    task: JoinHandle<()>,
}

impl App {
    pub fn new(config: Config, runtime: Handle, history: HistoryStore, export_dir: PathBuf) -> Self {
        Self {
            running: true,
            history,
            input: String::new(),
            status: GeneratorStatus::Idle,
            current: None,
            focus: Focus::Input,
            show_help: false,
            show_history: true,
            selected_history_index: 0,
            suggestion_index: None,
            message: None,
            ticks: 0,
            export_dir,
            config,
            runtime,
            pending: None,
        }
    }

    /// Central update function - process an event and mutate state.
    pub fn update(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => {
                self.ticks = self.ticks.wrapping_add(1);
                self.poll_generation();
            }
            AppEvent::KeyPress(key) => self.handle_key(key),
            AppEvent::Interrupt => self.quit(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == GeneratorStatus::Loading
    }

    pub fn sidebar_visible(&self) -> bool {
        self.show_history && !self.history.is_empty()
    }

    /// Stops the event loop and abandons any generation still in flight.
    pub fn quit(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.task.abort();
        }
        self.running = false;
    }

    fn handle_key(&mut self, key: KeyCode) {
        if self.show_help {
            if matches!(key, KeyCode::Char('?') | KeyCode::Esc) {
                self.show_help = false;
            }
            return;
        }
        match self.focus {
            Focus::Input => self.handle_input_key(key),
            Focus::Browse => self.handle_browse_key(key),
        }
    }

    fn handle_input_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter => self.submit(),
            KeyCode::Tab => self.focus = Focus::Browse,
            KeyCode::Esc => {
                if self.input.is_empty() {
                    self.quit();
                } else {
                    self.input.clear();
                    self.suggestion_index = None;
                }
            }
            KeyCode::Up => self.cycle_suggestion(false),
            KeyCode::Down => self.cycle_suggestion(true),
            KeyCode::Backspace | KeyCode::Delete => {
                self.input.pop();
                self.suggestion_index = None;
            }
            KeyCode::Char('?') if self.input.is_empty() => self.show_help = true,
            KeyCode::Char(ch) => {
                if ch.is_control() {
                    return;
                }
                self.input.push(ch);
                self.suggestion_index = None;
            }
            _ => {}
        }
    }

    fn handle_browse_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Tab | KeyCode::Char('i') => self.focus = Focus::Input,
            KeyCode::Up => self.move_selection_up(),
            KeyCode::Down => self.move_selection_down(),
            KeyCode::Enter => self.open_selected(),
            KeyCode::Char('s') => self.show_history = !self.show_history,
            KeyCode::Char('e') => self.export_current(),
            KeyCode::Char('x') => self.clear_history(),
            _ => {}
        }
    }

    fn cycle_suggestion(&mut self, forward: bool) {
        if self.current.is_some() || self.is_loading() {
            return;
        }
        let len = SUGGESTIONS.len();
        let next = match (self.suggestion_index, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(index), true) => (index + 1) % len,
            (Some(index), false) => (index + len - 1) % len,
        };
        self.suggestion_index = Some(next);
        self.input = SUGGESTIONS[next].to_string();
    }

    fn submit(&mut self) {
        if self.is_loading() {
            return;
        }
        let Some(prompt) = generator::validate_prompt(&self.input) else {
            self.message = Some("Describe a theme first.".to_string());
            return;
        };
        let prompt = prompt.to_string();
        let delay = self.config.delay;
        let (tx, rx) = oneshot::channel();
        let task = self.runtime.spawn(async move {
            let palette = generator::generate_palette(&prompt, delay).await;
            let _ = tx.send(palette);
        });
        self.pending = Some(PendingGeneration { rx, task });
        self.status = GeneratorStatus::Loading;
        self.message = None;
        self.suggestion_index = None;
    }

    fn poll_generation(&mut self) {
        let Some(pending) = self.pending.as_mut() else {
            return;
        };
        match pending.rx.try_recv() {
            Ok(palette) => {
                self.pending = None;
                self.finish_generation(palette);
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Closed) => {
                self.pending = None;
                tracing::error!("generation task ended without a palette");
                self.status = GeneratorStatus::Error;
            }
        }
    }

    fn finish_generation(&mut self, palette: Palette) {
        if let Err(err) = self.history.record(palette.clone()) {
            tracing::error!(%err, "failed to save history");
            self.message = Some(format!("Could not save history: {err}"));
        }
        self.current = Some(palette);
        self.status = GeneratorStatus::Success;
        self.selected_history_index = 0;
    }

    fn move_selection_up(&mut self) {
        self.selected_history_index = self.selected_history_index.saturating_sub(1);
    }

    fn move_selection_down(&mut self) {
        let len = self.history.len();
        if len > 0 && self.selected_history_index + 1 < len {
            self.selected_history_index += 1;
        }
    }

    fn open_selected(&mut self) {
        let Some(palette) = self.history.entries().get(self.selected_history_index) else {
            return;
        };
        self.current = Some(palette.clone());
        if !self.is_loading() {
            self.status = GeneratorStatus::Success;
        }
        self.focus = Focus::Input;
    }

    fn export_current(&mut self) {
        let Some(palette) = &self.current else {
            self.message = Some("Nothing to export yet.".to_string());
            return;
        };
        self.message = Some(match export::write(palette, &self.export_dir) {
            Ok(path) => format!("Exported to {}", path.display()),
            Err(err) => {
                tracing::error!(%err, "export failed");
                format!("Export failed: {err}")
            }
        });
    }

    fn clear_history(&mut self) {
        self.message = Some(match self.history.clear() {
            Ok(()) => "History cleared.".to_string(),
            Err(err) => {
                tracing::error!(%err, "failed to clear history");
                format!("Could not clear history: {err}")
            }
        });
        self.selected_history_index = 0;
    }
}
