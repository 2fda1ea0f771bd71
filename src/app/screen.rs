//! Game lifecycle states and the render snapshot handed to the UI

use crate::game::board::BOARD_SIZE;
use crate::game::scoring::FoundWord;

/// Lifecycle of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Before the first game; placeholder board
    Idle,
    /// 3-2-1-Go with the preview shuffle running
    Countdown,
    Playing,
    Paused,
    /// Clock ran out; only a new game is accepted
    Ended,
}

impl GameState {
    /// Whether tile taps and submissions are accepted
    pub fn accepts_play(self) -> bool {
        matches!(self, GameState::Playing | GameState::Paused)
    }

    /// Whether the pause control is actionable
    pub fn pause_enabled(self) -> bool {
        matches!(self, GameState::Playing | GameState::Paused)
    }
}

/// Transient message shown in the selected-word line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    AlreadyUsed,
    NotAWord(String),
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::AlreadyUsed => "Word already used".to_string(),
            Notice::NotAWord(word) => format!("{} is not a valid word", word),
        }
    }
}

/// One board cell as the UI should draw it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileView {
    pub letter: char,
    pub selected: bool,
}

/// Everything the presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    pub state: GameState,
    pub tiles: [[TileView; BOARD_SIZE]; BOARD_SIZE],
    /// Tiles are drawn face-down while paused
    pub tiles_hidden: bool,
    /// Current word, or the active notice in its place
    pub selected_word: String,
    pub notice: Option<Notice>,
    pub timer_text: String,
    /// Timer should be drawn as the end-of-game marker
    pub timer_expired: bool,
    pub found_words: Vec<FoundWord>,
    pub total_score: u32,
    pub pause_label: &'static str,
    pub pause_enabled: bool,
    /// A dictionary lookup is outstanding
    pub lookup_pending: bool,
}

/// Countdown label for a remaining count: 3, 2, 1, then Go!
pub fn countdown_label(count: u32) -> String {
    if count > 0 {
        count.to_string()
    } else {
        "Go!".to_string()
    }
}

/// Format remaining seconds as M:SS
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
