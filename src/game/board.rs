//! Board geometry: tiles, grid positions, and the adjacency rule

/// Number of rows and columns on the board
pub const BOARD_SIZE: usize = 4;

/// Number of tiles on a full board
pub const TILE_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Fixed arrangement shown before the first game is started.
const PLACEHOLDER_LETTERS: [char; TILE_COUNT] = [
    'B', 'O', 'G', 'G', //
    'L', 'E', ' ', ' ', //
    'W', 'A', 'R', 'R', //
    'I', 'O', 'R', 'S',
];

/// A cell coordinate on the board. Identity of a tile within one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TilePos {
    pub row: usize,
    pub col: usize,
}

impl TilePos {
    /// Create a position, returning `None` when it falls outside the grid
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Row-major index of this position
    pub fn index(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    fn from_index(index: usize) -> Self {
        Self {
            row: index / BOARD_SIZE,
            col: index % BOARD_SIZE,
        }
    }
}

/// A single board cell with the letter it shows for the current board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub pos: TilePos,
    pub letter: char,
}

/// True when the two tiles touch horizontally, vertically or diagonally.
///
/// A tile counts as adjacent to itself; callers exclude self-comparison.
pub fn is_adjacent(a: &Tile, b: &Tile) -> bool {
    a.pos.row.abs_diff(b.pos.row) <= 1 && a.pos.col.abs_diff(b.pos.col) <= 1
}

/// A full 4x4 board, one tile per cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    tiles: [Tile; TILE_COUNT],
}

impl Board {
    /// Build a board from 16 letters laid out row-major
    pub fn from_letters(letters: [char; TILE_COUNT]) -> Self {
        let tiles = std::array::from_fn(|i| Tile {
            pos: TilePos::from_index(i),
            letter: letters[i],
        });
        Self { tiles }
    }

    /// The fixed pre-game arrangement
    pub fn placeholder() -> Self {
        Self::from_letters(PLACEHOLDER_LETTERS)
    }

    /// Look up the tile at a position
    pub fn tile(&self, pos: TilePos) -> &Tile {
        &self.tiles[pos.index()]
    }

    /// Look up the tile at raw coordinates, if they are on the board
    pub fn tile_at(&self, row: usize, col: usize) -> Option<&Tile> {
        TilePos::new(row, col).map(|pos| self.tile(pos))
    }

    /// All tiles in row-major order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// The board letters as a string, row-major
    pub fn as_string(&self) -> String {
        self.tiles.iter().map(|t| t.letter).collect()
    }
}
