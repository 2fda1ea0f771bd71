//! Terminal UI components using ratatui

mod input;
mod terminal;
mod ui;

pub use input::{key_input, mouse_input, Input};
pub use terminal::Tui;
pub use ui::{hit_test, render, Hit, UiState};
