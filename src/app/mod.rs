mod state;

use crossterm::event::KeyCode;

pub use state::App;

/// Possible input events the app reacts to.
pub enum AppEvent {
    Tick,
    KeyPress(KeyCode),
    /// Ctrl+C from any focus.
    Interrupt,
}

/// Where key presses go: the prompt line, or the browse keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Input,
    Browse,
}

/// Example prompts offered before the first palette is shown.
pub const SUGGESTIONS: [&str; 6] = [
    "Cyberpunk Neon City",
    "Pastel Dream in Paris",
    "Deep Forest Mystery",
    "Vintage 1970s Coffee Shop",
    "Minimalist Corporate Tech",
    "Sunset over Santorini",
];
