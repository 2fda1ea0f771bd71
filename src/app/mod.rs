//! Game lifecycle: controller, timers, commands, and the async runner

pub mod command;
pub mod runner;
pub mod screen;
pub mod state;
pub mod timers;

pub use command::{Command, Cue, Effect, LookupRequest, LookupResult, LookupTicket};
pub use runner::Runner;
pub use screen::{GameState, GameView, Notice, TileView};
pub use state::{GameController, GameSettings, SubmitOutcome, DEFAULT_ROUND_SECONDS};
