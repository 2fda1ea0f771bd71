//! Dice-based board generation
//!
//! A board is rolled from a fixed set of 16 dice: shuffle the dice,
//! roll each one, and lay the faces out row-major.

use super::board::{Board, TILE_COUNT};
use once_cell::sync::Lazy;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Finnish letter-frequency dice, one string of faces per die.
const FINNISH_DICE: [&str; TILE_COUNT] = [
    "AISPUJ", "AEENEA", "ÄIÖNST", "ANPRSK", "APHSKO", "DESRIL", "EIENUS", "HIKNMU", "AKAÄLÄ",
    "SIOTMU", "AJTOTO", "EITOSS", "ELYTTR", "AKITMV", "AILKVY", "ALRNNU",
];

/// Dice faces split into chars once; several faces are multi-byte.
static DICE: Lazy<Vec<Die>> = Lazy::new(|| FINNISH_DICE.iter().map(|s| Die::new(s)).collect());

/// One die: the candidate letters for a single board cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Die {
    faces: Vec<char>,
}

impl Die {
    fn new(faces: &str) -> Self {
        Self {
            faces: faces.chars().collect(),
        }
    }

    /// The letters this die can show
    pub fn faces(&self) -> &[char] {
        &self.faces
    }

    fn roll<R: Rng>(&self, rng: &mut R) -> char {
        self.faces[rng.random_range(0..self.faces.len())]
    }
}

/// The canonical dice set
pub fn dice() -> &'static [Die] {
    &DICE
}

/// Produces full boards from the dice set.
#[derive(Debug)]
pub struct DiceBoardGenerator {
    rng: StdRng,
}

impl Default for DiceBoardGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl DiceBoardGenerator {
    /// Generator seeded from the operating system
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Generator with a fixed seed (for testing/replay)
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Roll a new board
    pub fn generate(&mut self) -> Board {
        Self::generate_with_rng(&mut self.rng)
    }

    /// Roll a new board using a specific RNG.
    pub fn generate_with_rng<R: Rng>(rng: &mut R) -> Board {
        Board::from_letters(Self::roll_letters(rng).map(|(_, letter)| letter))
    }

    /// Shuffle the dice and roll each one, keeping track of which die
    /// landed in which cell.
    fn roll_letters<R: Rng>(rng: &mut R) -> [(usize, char); TILE_COUNT] {
        let mut order: [usize; TILE_COUNT] = std::array::from_fn(|i| i);
        order.shuffle(rng);
        order.map(|die| (die, DICE[die].roll(rng)))
    }
}
