//! The in-progress word: an ordered path of adjacent tiles

use super::board::{is_adjacent, Tile, TilePos};

/// What a tap did to the selection path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Tile was added to the end of the path
    Appended,
    /// Tile was already selected; its occurrence was removed
    Removed { index: usize },
    /// Tile does not touch the last selected tile; nothing changed
    NotAdjacent,
}

/// Ordered tiles making up the word being composed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    path: Vec<Tile>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a tap on `tile`.
    ///
    /// Tapping a tile already in the path removes its last occurrence only.
    /// Otherwise the tile is appended if it touches the current last tile.
    pub fn select(&mut self, tile: Tile) -> SelectOutcome {
        if let Some(index) = self.path.iter().rposition(|t| t.pos == tile.pos) {
            self.path.remove(index);
            return SelectOutcome::Removed { index };
        }

        if let Some(last) = self.path.last() {
            if !is_adjacent(last, &tile) {
                return SelectOutcome::NotAdjacent;
            }
        }

        self.path.push(tile);
        SelectOutcome::Appended
    }

    /// Drop the whole path
    pub fn reset(&mut self) {
        self.path.clear();
    }

    /// Letters of the path in order
    pub fn current_word(&self) -> String {
        self.path.iter().map(|t| t.letter).collect()
    }

    /// Whether `pos` is part of the path
    pub fn contains(&self, pos: TilePos) -> bool {
        self.path.iter().any(|t| t.pos == pos)
    }

    /// The selected tiles in order
    pub fn path(&self) -> &[Tile] {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::Board;

    fn board() -> Board {
        Board::from_letters([
            'K', 'I', 'S', 'A', //
            'T', 'A', 'L', 'O', //
            'E', 'K', 'A', 'T', //
            'S', 'U', 'O', 'N',
        ])
    }

    fn at(board: &Board, row: usize, col: usize) -> Tile {
        *board.tile_at(row, col).unwrap()
    }

    #[test]
    fn test_select_builds_word_in_order() {
        let b = board();
        let mut sel = SelectionState::new();
        assert_eq!(sel.select(at(&b, 0, 0)), SelectOutcome::Appended);
        assert_eq!(sel.select(at(&b, 0, 1)), SelectOutcome::Appended);
        assert_eq!(sel.select(at(&b, 0, 2)), SelectOutcome::Appended);
        assert_eq!(sel.current_word(), "KIS");
        assert_eq!(sel.len(), 3);
    }

    #[test]
    fn test_first_tile_can_be_anywhere() {
        let b = board();
        let mut sel = SelectionState::new();
        assert_eq!(sel.select(at(&b, 3, 3)), SelectOutcome::Appended);
        assert_eq!(sel.current_word(), "N");
    }

    #[test]
    fn test_non_adjacent_tile_is_ignored() {
        let b = board();
        let mut sel = SelectionState::new();
        sel.select(at(&b, 0, 0));
        sel.select(at(&b, 1, 1));

        let before = sel.clone();
        assert_eq!(sel.select(at(&b, 3, 3)), SelectOutcome::NotAdjacent);
        assert_eq!(sel, before);
        assert_eq!(sel.current_word(), "KA");
    }

    #[test]
    fn test_diagonal_step_is_allowed() {
        let b = board();
        let mut sel = SelectionState::new();
        sel.select(at(&b, 1, 1));
        assert_eq!(sel.select(at(&b, 2, 2)), SelectOutcome::Appended);
        assert_eq!(sel.select(at(&b, 1, 3)), SelectOutcome::Appended);
        assert_eq!(sel.current_word(), "AAO");
    }

    #[test]
    fn test_retap_last_tile_removes_one_letter() {
        let b = board();
        let mut sel = SelectionState::new();
        sel.select(at(&b, 0, 0));
        sel.select(at(&b, 0, 1));
        sel.select(at(&b, 0, 2));

        assert_eq!(sel.select(at(&b, 0, 2)), SelectOutcome::Removed { index: 2 });
        assert_eq!(sel.current_word(), "KI");
        assert_eq!(sel.len(), 2);
    }

    #[test]
    fn test_retap_earlier_tile_removes_only_that_occurrence() {
        let b = board();
        let mut sel = SelectionState::new();
        sel.select(at(&b, 0, 0));
        sel.select(at(&b, 0, 1));
        sel.select(at(&b, 0, 2));

        assert_eq!(sel.select(at(&b, 0, 1)), SelectOutcome::Removed { index: 1 });
        assert_eq!(sel.current_word(), "KS");
        assert!(!sel.contains(TilePos { row: 0, col: 1 }));
    }

    #[test]
    fn test_removed_tile_can_be_reselected() {
        let b = board();
        let mut sel = SelectionState::new();
        sel.select(at(&b, 0, 0));
        sel.select(at(&b, 0, 1));
        sel.select(at(&b, 0, 1));
        assert_eq!(sel.select(at(&b, 0, 1)), SelectOutcome::Appended);
        assert_eq!(sel.current_word(), "KI");
    }

    #[test]
    fn test_same_letter_on_different_tiles_is_independent() {
        let b = board();
        let mut sel = SelectionState::new();
        // (1,1) and (2,2) both show 'A'
        sel.select(at(&b, 1, 1));
        sel.select(at(&b, 2, 2));
        assert_eq!(sel.current_word(), "AA");

        // Retapping (2,2) removes only that tile
        sel.select(at(&b, 2, 2));
        assert_eq!(sel.path(), &[at(&b, 1, 1)]);
    }

    #[test]
    fn test_reset_clears_path() {
        let b = board();
        let mut sel = SelectionState::new();
        sel.select(at(&b, 0, 0));
        sel.select(at(&b, 1, 0));
        sel.reset();
        assert!(sel.is_empty());
        assert_eq!(sel.current_word(), "");
    }

    #[test]
    fn test_word_length_matches_path_length() {
        let b = board();
        let mut sel = SelectionState::new();
        for (row, col) in [(0, 0), (0, 1), (1, 1), (2, 2), (3, 3), (3, 3), (2, 3)] {
            sel.select(at(&b, row, col));
            assert_eq!(sel.current_word().chars().count(), sel.len());
        }
    }
}
