//! UI rendering using ratatui
//!
//! Layout:
//! - Header: title, timer, game state
//! - Left: 4x4 board, current word, New game / Pause / Submit buttons
//! - Right: found words with points and the running total
//! - Footer: key hints

use crate::app::{Cue, GameState, GameView, TileView};
use crate::game::board::{TilePos, BOARD_SIZE};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

const TILE_WIDTH: u16 = 7;
const TILE_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = TILE_WIDTH * BOARD_SIZE as u16 + 2;
const BOARD_HEIGHT: u16 = TILE_HEIGHT * BOARD_SIZE as u16 + 2;
const BUTTON_WIDTH: u16 = 10;

/// Presentation-only state: keyboard cursor and the last cue flash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiState {
    pub cursor: TilePos,
    pub flash: Option<Cue>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            cursor: TilePos { row: 0, col: 0 },
            flash: None,
        }
    }
}

impl UiState {
    /// Move the keyboard cursor, clamped to the board
    pub fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let max = BOARD_SIZE as isize - 1;
        self.cursor = TilePos {
            row: (self.cursor.row as isize + d_row).clamp(0, max) as usize,
            col: (self.cursor.col as isize + d_col).clamp(0, max) as usize,
        };
    }
}

/// What a mouse click landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Tile { row: usize, col: usize },
    NewGame,
    Pause,
    Submit,
    /// Anywhere else on screen
    Outside,
}

struct Areas {
    header: Rect,
    board: Rect,
    word: Rect,
    new_game: Rect,
    pause: Rect,
    submit: Rect,
    sidebar: Rect,
    footer: Rect,
}

fn areas(area: Rect) -> Areas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Board + sidebar
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(BOARD_WIDTH), Constraint::Min(20)])
        .split(rows[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BOARD_HEIGHT), // Board
            Constraint::Length(3),            // Current word
            Constraint::Length(3),            // Buttons
            Constraint::Min(0),
        ])
        .split(columns[0]);

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Min(0),
        ])
        .split(left[2]);

    Areas {
        header: rows[0],
        board: left[0],
        word: left[1],
        new_game: buttons[0],
        pause: buttons[1],
        submit: buttons[2],
        sidebar: columns[1],
        footer: rows[2],
    }
}

/// Rectangle of one tile inside the board's inner area
fn tile_rect(board_inner: Rect, row: usize, col: usize) -> Rect {
    Rect {
        x: board_inner.x + col as u16 * TILE_WIDTH,
        y: board_inner.y + row as u16 * TILE_HEIGHT,
        width: TILE_WIDTH,
        height: TILE_HEIGHT,
    }
    .intersection(board_inner)
}

/// Map a click at (x, y) on a frame of size `area` to a control
pub fn hit_test(area: Rect, x: u16, y: u16) -> Hit {
    let areas = areas(area);
    let pos = Position { x, y };
    let board_inner = Block::default().borders(Borders::ALL).inner(areas.board);

    if board_inner.contains(pos) {
        let row = ((y - board_inner.y) / TILE_HEIGHT) as usize;
        let col = ((x - board_inner.x) / TILE_WIDTH) as usize;
        if row < BOARD_SIZE && col < BOARD_SIZE {
            return Hit::Tile { row, col };
        }
    }
    if areas.new_game.contains(pos) {
        Hit::NewGame
    } else if areas.pause.contains(pos) {
        Hit::Pause
    } else if areas.submit.contains(pos) {
        Hit::Submit
    } else {
        Hit::Outside
    }
}

/// Draw one frame
pub fn render(frame: &mut Frame, view: &GameView, ui: &UiState) {
    let areas = areas(frame.area());

    render_header(frame, areas.header, view, ui);
    render_board(frame, areas.board, view, ui);
    render_word(frame, areas.word, view);
    render_button(frame, areas.new_game, "New game", true);
    render_button(frame, areas.pause, view.pause_label, view.pause_enabled);
    render_button(
        frame,
        areas.submit,
        "Submit",
        view.state.accepts_play() && !view.tiles_hidden && !view.lookup_pending,
    );
    render_found_words(frame, areas.sidebar, view);

    let footer = Paragraph::new(
        "Click/Space Select  Enter Submit  Arrows Move  N New game  P Pause  Esc Clear  Q Quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(footer, areas.footer);
}

/// Header: title | timer | state
fn render_header(frame: &mut Frame, area: Rect, view: &GameView, ui: &UiState) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Min(10),
            Constraint::Length(12),
        ])
        .split(inner);

    let title = Paragraph::new("SANARUUTU")
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Left);
    frame.render_widget(title, header_layout[0]);

    let timer = Paragraph::new(view.timer_text.clone())
        .style(Style::default().fg(timer_color(view, ui.flash)).bold())
        .alignment(Alignment::Center);
    frame.render_widget(timer, header_layout[1]);

    let state = Paragraph::new(state_label(view.state))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right);
    frame.render_widget(state, header_layout[2]);
}

fn timer_color(view: &GameView, flash: Option<Cue>) -> Color {
    if view.timer_expired {
        return Color::Red;
    }
    match flash {
        Some(Cue::Positive) => Color::Green,
        Some(Cue::Negative) | Some(Cue::TimeUp) => Color::Red,
        None => match view.state {
            GameState::Countdown => Color::Magenta,
            GameState::Paused => Color::DarkGray,
            _ => Color::White,
        },
    }
}

fn state_label(state: GameState) -> &'static str {
    match state {
        GameState::Idle => "",
        GameState::Countdown => "Get ready",
        GameState::Playing => "Playing",
        GameState::Paused => "Paused",
        GameState::Ended => "Game over",
    }
}

fn render_board(frame: &mut Frame, area: Rect, view: &GameView, ui: &UiState) {
    let block = Block::default().borders(Borders::ALL).title("Board");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    for (row, tiles) in view.tiles.iter().enumerate() {
        for (col, tile) in tiles.iter().enumerate() {
            let has_cursor = ui.cursor == TilePos { row, col } && view.state.accepts_play();
            render_tile(
                frame,
                tile_rect(inner, row, col),
                tile,
                view.tiles_hidden,
                has_cursor,
            );
        }
    }
}

fn render_tile(frame: &mut Frame, area: Rect, tile: &TileView, hidden: bool, has_cursor: bool) {
    let border = if has_cursor {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default().borders(Borders::ALL).border_style(border);

    let (text, style) = if hidden {
        (String::new(), Style::default())
    } else if tile.selected {
        (
            tile.letter.to_string(),
            Style::default().fg(Color::Black).bg(Color::Yellow).bold(),
        )
    } else {
        (tile.letter.to_string(), Style::default().fg(Color::White).bold())
    };

    let widget = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(widget, area);
}

/// Current word, or the active notice in its place
fn render_word(frame: &mut Frame, area: Rect, view: &GameView) {
    let color = if view.notice.is_some() {
        Color::Red
    } else if view.lookup_pending {
        Color::DarkGray
    } else {
        Color::White
    };
    let word = Paragraph::new(view.selected_word.clone())
        .style(Style::default().fg(color).bold())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Word"));
    frame.render_widget(word, area);
}

fn render_button(frame: &mut Frame, area: Rect, label: &str, enabled: bool) {
    let style = if enabled {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let button = Paragraph::new(label.to_string())
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(style));
    frame.render_widget(button, area);
}

/// Found words with points, plus the running total
fn render_found_words(frame: &mut Frame, area: Rect, view: &GameView) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title("Found Words");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let items: Vec<ListItem> = view
        .found_words
        .iter()
        .map(|found| {
            ListItem::new(format!("{} - {}", found.word, found.points))
                .style(Style::default().fg(Color::Green))
        })
        .collect();
    frame.render_widget(List::new(items), layout[0]);

    let total = Paragraph::new(format!("Total Score: {}", view.total_score))
        .style(Style::default().fg(Color::Magenta).bold());
    frame.render_widget(total, layout[1]);
}
