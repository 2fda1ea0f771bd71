//! Typed messages in and out of the game controller

/// Input from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    NewGame,
    TogglePause,
    SelectTile { row: usize, col: usize },
    SubmitWord,
    /// Click outside the board: drop the selection path
    ClearSelection,
}

/// Feedback sound/flash the presentation layer should play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Word accepted
    Positive,
    /// Word rejected for any reason
    Negative,
    /// Round over
    TimeUp,
}

/// Identifies one dictionary lookup within one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LookupTicket {
    pub round: u64,
    pub seq: u64,
}

/// A dictionary lookup the controller wants performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub ticket: LookupTicket,
    pub word: String,
}

impl LookupRequest {
    /// Pair this request with the dictionary's answer
    pub fn resolve(self, exists: bool) -> LookupResult {
        LookupResult {
            ticket: self.ticket,
            word: self.word,
            exists,
        }
    }
}

/// Outcome of a lookup, fed back into the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    pub ticket: LookupTicket,
    pub word: String,
    pub exists: bool,
}

/// Side effects produced by the controller, drained by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Cue(Cue),
    Lookup(LookupRequest),
}
