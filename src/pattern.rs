use std::{fmt, str::FromStr};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::{Board, Cell, LifeError, SIDE};

const FILL_RATE: f64 = 0.5;

const BLINKER: &[(usize, usize)] = &[(3, 4), (4, 4), (5, 4)];
const TOAD: &[(usize, usize)] = &[(3, 3), (3, 4), (3, 5), (4, 2), (4, 3), (4, 4)];
const BEACON: &[(usize, usize)] = &[
    (1, 5),
    (1, 6),
    (2, 5),
    (2, 6),
    (3, 3),
    (3, 4),
    (4, 3),
    (4, 4),
];
const TEST: &[(usize, usize)] = &[(0, 0), (SIDE - 1, 0), (SIDE - 1, 1)];

/// Named starting configuration of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// Period-2 oscillator: vertical line of three.
    Blinker,
    /// Period-2 oscillator: two offset lines of three.
    Toad,
    /// Period-2 oscillator: two diagonally touching blocks.
    Beacon,
    /// Every cell alive with probability 1/2.
    Random,
    /// Small fixed layout that wraps around the bottom-left corner.
    Test,
}

impl Pattern {
    pub const ALL: [Pattern; 5] = [
        Pattern::Blinker,
        Pattern::Toad,
        Pattern::Beacon,
        Pattern::Random,
        Pattern::Test,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pattern::Blinker => "blinker",
            Pattern::Toad => "toad",
            Pattern::Beacon => "beacon",
            Pattern::Random => "random",
            Pattern::Test => "test",
        }
    }

    /// Live cells of a fixed pattern, `None` for [`Pattern::Random`].
    pub fn cells(self) -> Option<&'static [(usize, usize)]> {
        match self {
            Pattern::Blinker => Some(BLINKER),
            Pattern::Toad => Some(TOAD),
            Pattern::Beacon => Some(BEACON),
            Pattern::Test => Some(TEST),
            Pattern::Random => None,
        }
    }

    /// Overwrite every cell of `board` with this pattern.
    ///
    /// `seed` only affects [`Pattern::Random`]; if `None`, a random seed is generated.
    pub fn fill(self, board: &mut Board, seed: Option<u64>) {
        match self.cells() {
            Some(cells) => {
                board.clear();
                for &(row, col) in cells {
                    board.set(row, col, Cell::Alive);
                }
            }
            None => {
                let mut rng = if let Some(x) = seed {
                    ChaCha8Rng::seed_from_u64(x)
                } else {
                    ChaCha8Rng::from_entropy()
                };
                for row in 0..SIDE {
                    for col in 0..SIDE {
                        board.set(row, col, Cell::from(rng.gen_bool(FILL_RATE)));
                    }
                }
            }
        }
        debug!(pattern = self.name(), population = board.population(), "board filled");
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = LifeError;

    /// Case-insensitive lookup by name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| LifeError::UnknownPattern(s.to_owned()))
    }
}

impl Board {
    pub fn from_pattern(pattern: Pattern, seed: Option<u64>) -> Self {
        let mut board = Board::blank();
        pattern.fill(&mut board, seed);
        board
    }
}
