//! Key and mouse mapping to game commands
//!
//! While paused the board is hidden and only New game, Resume and Quit get
//! through; everything that touches the selection is dropped here.

use super::ui::{hit_test, Hit, UiState};
use crate::app::{Command, GameView};
use crate::game::TilePos;
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// What a key press or click asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    Quit,
    Nothing,
}

pub fn key_input(code: KeyCode, view: &GameView, ui: &mut UiState) -> Input {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Input::Quit,
        KeyCode::Char('n') | KeyCode::Char('N') => Input::Command(Command::NewGame),
        KeyCode::Char('p') | KeyCode::Char('P') => Input::Command(Command::TogglePause),
        _ if view.tiles_hidden => Input::Nothing,
        KeyCode::Enter => Input::Command(Command::SubmitWord),
        KeyCode::Esc => Input::Command(Command::ClearSelection),
        KeyCode::Char(' ') => Input::Command(Command::SelectTile {
            row: ui.cursor.row,
            col: ui.cursor.col,
        }),
        KeyCode::Up => {
            ui.move_cursor(-1, 0);
            Input::Nothing
        }
        KeyCode::Down => {
            ui.move_cursor(1, 0);
            Input::Nothing
        }
        KeyCode::Left => {
            ui.move_cursor(0, -1);
            Input::Nothing
        }
        KeyCode::Right => {
            ui.move_cursor(0, 1);
            Input::Nothing
        }
        _ => Input::Nothing,
    }
}

/// Map a click on a frame of size `area`
pub fn mouse_input(mouse: MouseEvent, area: Rect, view: &GameView, ui: &mut UiState) -> Input {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return Input::Nothing;
    }
    match hit_test(area, mouse.column, mouse.row) {
        Hit::NewGame => Input::Command(Command::NewGame),
        Hit::Pause if view.pause_enabled => Input::Command(Command::TogglePause),
        Hit::Pause => Input::Nothing,
        _ if view.tiles_hidden => Input::Nothing,
        Hit::Tile { row, col } => {
            ui.cursor = TilePos { row, col };
            Input::Command(Command::SelectTile { row, col })
        }
        Hit::Submit => Input::Command(Command::SubmitWord),
        Hit::Outside => Input::Command(Command::ClearSelection),
    }
}
