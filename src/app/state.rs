//! Game controller: lifecycle state machine, round clock, word submission
//!
//! The controller is synchronous and owns its timers on a virtual clock.
//! Callers feed it [`Command`]s and elapsed time, drain the [`Effect`]s it
//! queues (cues to play, dictionary lookups to run), and hand lookup results
//! back through [`GameController::resolve_lookup`].

use super::command::{Command, Cue, Effect, LookupRequest, LookupResult, LookupTicket};
use super::screen::{countdown_label, format_clock, GameState, GameView, Notice, TileView};
use super::timers::{Scheduler, TimerId, TimerKind};
use crate::game::board::{Board, TilePos};
use crate::game::dice::DiceBoardGenerator;
use crate::game::scoring::{FoundWords, MIN_WORD_LENGTH};
use crate::game::selection::{SelectOutcome, SelectionState};
use log::{debug, info};
use std::time::Duration;

/// Default round duration in seconds
pub const DEFAULT_ROUND_SECONDS: u32 = 90;

/// Numbered countdown steps before "Go!"
pub const DEFAULT_COUNTDOWN_TICKS: u32 = 3;

/// Period of the round clock and the countdown
const CLOCK_PERIOD: Duration = Duration::from_secs(1);

/// Period of the preview shuffle during the countdown
pub const DEFAULT_SHUFFLE_PERIOD: Duration = Duration::from_millis(100);

/// How long duplicate/invalid notices stay up
pub const DEFAULT_NOTICE_LIFETIME: Duration = Duration::from_secs(2);

/// Shown in place of the clock once the round is over
pub const TIME_UP_TEXT: &str = "Time's up!";

/// Tunable timings for a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    pub round_seconds: u32,
    pub countdown_ticks: u32,
    pub shuffle_period: Duration,
    pub notice_lifetime: Duration,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            round_seconds: DEFAULT_ROUND_SECONDS,
            countdown_ticks: DEFAULT_COUNTDOWN_TICKS,
            shuffle_period: DEFAULT_SHUFFLE_PERIOD,
            notice_lifetime: DEFAULT_NOTICE_LIFETIME,
        }
    }
}

/// What happened to a submit command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Not playing, or a lookup is still outstanding
    Ignored,
    /// Fewer than three letters; no lookup made
    TooShort,
    /// Already found this round; no lookup made
    Duplicate,
    /// Lookup requested
    Pending(LookupTicket),
}

/// Owns one player's game: board, selection, found words, clock and timers.
pub struct GameController {
    settings: GameSettings,
    state: GameState,
    generator: DiceBoardGenerator,
    board: Board,
    selection: SelectionState,
    found: FoundWords,
    /// Seconds left in the round
    remaining: u32,
    /// Countdown steps left; 0 shows "Go!"
    countdown: u32,
    notice: Option<Notice>,
    notice_timer: Option<TimerId>,
    /// Outstanding dictionary lookup, at most one
    pending: Option<LookupRequest>,
    /// Incremented on every new game; tags lookups
    round: u64,
    lookup_seq: u64,
    end_cue_fired: bool,
    scheduler: Scheduler,
    effects: Vec<Effect>,
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(GameSettings::default())
    }
}

impl GameController {
    /// Create an idle controller with an OS-seeded board generator
    pub fn new(settings: GameSettings) -> Self {
        Self::with_generator(settings, DiceBoardGenerator::new())
    }

    /// Create an idle controller with a specific generator (for testing/seeding)
    pub fn with_generator(settings: GameSettings, generator: DiceBoardGenerator) -> Self {
        Self {
            settings,
            state: GameState::Idle,
            generator,
            board: Board::placeholder(),
            selection: SelectionState::new(),
            found: FoundWords::new(),
            remaining: settings.round_seconds,
            countdown: settings.countdown_ticks,
            notice: None,
            notice_timer: None,
            pending: None,
            round: 0,
            lookup_seq: 0,
            end_cue_fired: false,
            scheduler: Scheduler::new(),
            effects: Vec::new(),
        }
    }

    /// Apply a command from the presentation layer
    pub fn dispatch(&mut self, command: Command) {
        match command {
            Command::NewGame => self.new_game(),
            Command::TogglePause => {
                self.toggle_pause();
            }
            Command::SelectTile { row, col } => {
                self.select_tile(row, col);
            }
            Command::SubmitWord => {
                self.submit_word();
            }
            Command::ClearSelection => self.clear_selection(),
        }
    }

    /// Start a new game from any state: cancel every timer, clear the round,
    /// and begin the countdown.
    pub fn new_game(&mut self) {
        self.scheduler.cancel_all();
        self.round += 1;
        self.lookup_seq = 0;
        self.pending = None;
        self.selection.reset();
        self.found.clear();
        self.notice = None;
        self.notice_timer = None;
        self.remaining = self.settings.round_seconds;
        self.countdown = self.settings.countdown_ticks;
        self.end_cue_fired = false;
        self.state = GameState::Countdown;

        self.scheduler.every(TimerKind::Countdown, CLOCK_PERIOD);
        self.scheduler
            .every(TimerKind::ShufflePreview, self.settings.shuffle_period);
        info!("round {} countdown started", self.round);
    }

    /// Switch between Playing and Paused. Returns false when not applicable.
    pub fn toggle_pause(&mut self) -> bool {
        self.state = match self.state {
            GameState::Playing => GameState::Paused,
            GameState::Paused => GameState::Playing,
            other => {
                debug!("pause ignored in {:?}", other);
                return false;
            }
        };
        debug!("pause toggled: {:?} at {}s", self.state, self.remaining);
        true
    }

    /// Tap the tile at (row, col)
    pub fn select_tile(&mut self, row: usize, col: usize) -> Option<SelectOutcome> {
        if !self.state.accepts_play() {
            debug!("tile ({}, {}) ignored in {:?}", row, col, self.state);
            return None;
        }
        let tile = *self.board.tile_at(row, col)?;

        // The word line shows the path again as soon as a tile is tapped
        if self.notice.is_some() {
            self.clear_notice();
        }

        let outcome = self.selection.select(tile);
        if outcome == SelectOutcome::NotAdjacent {
            debug!("tile ({}, {}) is not adjacent to the previous one", row, col);
        }
        Some(outcome)
    }

    /// Drop the current selection path
    pub fn clear_selection(&mut self) {
        self.selection.reset();
    }

    /// Submit the current selection as a word.
    ///
    /// Short and duplicate words are rejected locally. Anything else queues
    /// an [`Effect::Lookup`]; the selection stays in place until the result
    /// comes back, and further submits are ignored until then.
    pub fn submit_word(&mut self) -> SubmitOutcome {
        if !self.state.accepts_play() {
            return SubmitOutcome::Ignored;
        }
        if let Some(pending) = &self.pending {
            debug!("submit ignored, lookup for {} still pending", pending.word);
            return SubmitOutcome::Ignored;
        }

        let word = self.selection.current_word().to_uppercase();

        if word.chars().count() < MIN_WORD_LENGTH {
            debug!("word {:?} is shorter than {} letters", word, MIN_WORD_LENGTH);
            self.effects.push(Effect::Cue(Cue::Negative));
            self.selection.reset();
            return SubmitOutcome::TooShort;
        }

        if self.found.contains(&word) {
            debug!("word {} has already been found", word);
            self.show_notice(Notice::AlreadyUsed);
            self.effects.push(Effect::Cue(Cue::Negative));
            self.selection.reset();
            return SubmitOutcome::Duplicate;
        }

        self.lookup_seq += 1;
        let ticket = LookupTicket {
            round: self.round,
            seq: self.lookup_seq,
        };
        let request = LookupRequest { ticket, word };
        self.pending = Some(request.clone());
        self.effects.push(Effect::Lookup(request));
        SubmitOutcome::Pending(ticket)
    }

    /// Apply a dictionary answer. Results for an earlier round, or arriving
    /// after the round ended, change nothing. Returns whether it was applied.
    pub fn resolve_lookup(&mut self, result: LookupResult) -> bool {
        match &self.pending {
            Some(pending) if pending.ticket == result.ticket => {}
            _ => {
                debug!("discarding stale lookup result for {}", result.word);
                return false;
            }
        }
        self.pending = None;

        if self.state == GameState::Ended {
            debug!("round over, ignoring lookup result for {}", result.word);
            return false;
        }

        if result.exists && self.found.insert(&result.word) {
            info!("found {} (total {})", result.word, self.found.total_score());
            self.effects.push(Effect::Cue(Cue::Positive));
        } else if result.exists {
            self.show_notice(Notice::AlreadyUsed);
            self.effects.push(Effect::Cue(Cue::Negative));
        } else {
            debug!("{} is not a valid word", result.word);
            self.show_notice(Notice::NotAWord(result.word));
            self.effects.push(Effect::Cue(Cue::Negative));
        }

        self.selection.reset();
        true
    }

    /// Move the virtual clock forward, firing any timers that come due
    pub fn advance(&mut self, elapsed: Duration) {
        let until = self.scheduler.now() + elapsed;
        while let Some(kind) = self.scheduler.next_due(until) {
            self.on_timer(kind);
        }
        self.scheduler.settle(until);
    }

    fn on_timer(&mut self, kind: TimerKind) {
        match kind {
            TimerKind::Countdown => self.countdown_tick(),
            TimerKind::ShufflePreview => {
                if self.state == GameState::Countdown {
                    self.board = self.generator.generate();
                }
            }
            TimerKind::GameClock => self.clock_tick(),
            TimerKind::NoticeClear => {
                self.notice_timer = None;
                self.notice = None;
            }
        }
    }

    fn countdown_tick(&mut self) {
        if self.state != GameState::Countdown {
            return;
        }
        if self.countdown == 0 {
            self.start_playing();
        } else {
            self.countdown -= 1;
        }
    }

    fn start_playing(&mut self) {
        self.scheduler.cancel_kind(TimerKind::Countdown);
        self.scheduler.cancel_kind(TimerKind::ShufflePreview);

        self.board = self.generator.generate();
        self.selection.reset();
        self.remaining = self.settings.round_seconds;
        self.state = GameState::Playing;
        self.scheduler.every(TimerKind::GameClock, CLOCK_PERIOD);
        info!("round {} started with board {}", self.round, self.board.as_string());
    }

    /// Fires every second; does nothing while paused
    fn clock_tick(&mut self) {
        if self.state != GameState::Playing {
            return;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.end_game();
        }
    }

    /// End the round. The end-of-game marker overrides any notice.
    fn end_game(&mut self) {
        if self.end_cue_fired {
            return;
        }
        self.scheduler.cancel_kind(TimerKind::GameClock);
        self.clear_notice();
        self.selection.reset();
        self.state = GameState::Ended;
        self.end_cue_fired = true;
        self.effects.push(Effect::Cue(Cue::TimeUp));
        info!(
            "round {} over: {} words, {} points",
            self.round,
            self.found.len(),
            self.found.total_score()
        );
    }

    fn show_notice(&mut self, notice: Notice) {
        if let Some(id) = self.notice_timer.take() {
            self.scheduler.cancel(id);
        }
        self.notice = Some(notice);
        self.notice_timer = Some(
            self.scheduler
                .after(TimerKind::NoticeClear, self.settings.notice_lifetime),
        );
    }

    fn clear_notice(&mut self) {
        if let Some(id) = self.notice_timer.take() {
            self.scheduler.cancel(id);
        }
        self.notice = None;
    }

    /// Take the queued side effects
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    /// Snapshot of everything the UI draws
    pub fn view(&self) -> GameView {
        let tiles = std::array::from_fn(|row| {
            std::array::from_fn(|col| {
                let tile = self.board.tile(TilePos { row, col });
                TileView {
                    letter: tile.letter,
                    selected: self.selection.contains(tile.pos),
                }
            })
        });

        let selected_word = match &self.notice {
            Some(notice) => notice.message(),
            None => self.selection.current_word(),
        };

        let timer_text = match self.state {
            GameState::Idle => format_clock(self.settings.round_seconds),
            GameState::Countdown => countdown_label(self.countdown),
            GameState::Playing | GameState::Paused => format_clock(self.remaining),
            GameState::Ended => TIME_UP_TEXT.to_string(),
        };

        GameView {
            state: self.state,
            tiles,
            tiles_hidden: self.state == GameState::Paused,
            selected_word,
            notice: self.notice.clone(),
            timer_text,
            timer_expired: self.state == GameState::Ended,
            found_words: self.found.iter().cloned().collect(),
            total_score: self.found.total_score(),
            pause_label: if self.state == GameState::Paused {
                "Resume"
            } else {
                "Pause"
            },
            pause_enabled: self.state.pause_enabled(),
            lookup_pending: self.pending.is_some(),
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn found_words(&self) -> &FoundWords {
        &self.found
    }

    pub fn total_score(&self) -> u32 {
        self.found.total_score()
    }

    /// Seconds left on the round clock
    pub fn remaining_seconds(&self) -> u32 {
        self.remaining
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// The outstanding lookup, if any
    pub fn pending_lookup(&self) -> Option<&LookupRequest> {
        self.pending.as_ref()
    }

    /// Whether the given timer kind is currently scheduled
    pub fn timer_active(&self, kind: TimerKind) -> bool {
        self.scheduler.is_active(kind)
    }
}
