//! Game rules: board, dice, tile selection, scoring, dictionary lookups

pub mod board;
pub mod dice;
pub mod dictionary;
pub mod scoring;
pub mod selection;

pub use board::{is_adjacent, Board, Tile, TilePos, BOARD_SIZE};
pub use dice::DiceBoardGenerator;
pub use dictionary::{DictionaryClient, WordRepository};
pub use scoring::{score, total_score, FoundWord, FoundWords, MIN_WORD_LENGTH};
pub use selection::{SelectOutcome, SelectionState};
