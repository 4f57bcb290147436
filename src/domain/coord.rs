//! Square coordinates.
//!
//! Row 0 is rank 8 and row 7 is rank 1; column 0 is file 'a' and
//! column 7 is file 'h'. The mapping is fixed.

use std::fmt;
use std::str::FromStr;

use shakmaty::{File, Rank, Square};

use crate::domain::error::BoardError;

pub const BOARD_SIZE: usize = 8;

/// A validated (row, col) pair, always inside the board
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// Build a coordinate, rejecting anything outside 0..=7
    pub fn new(row: i32, col: i32) -> Result<Self, BoardError> {
        let in_range = |v: i32| (0..BOARD_SIZE as i32).contains(&v);
        if in_range(row) && in_range(col) {
            Ok(Self {
                row: row as usize,
                col: col as usize,
            })
        } else {
            Err(BoardError::OutOfRange { row, col })
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// File letter, 'a' for column 0
    pub fn file_char(&self) -> char {
        (b'a' + self.col as u8) as char
    }

    /// Rank number, 8 for row 0
    pub fn rank_number(&self) -> u8 {
        (BOARD_SIZE - self.row) as u8
    }

    /// All 64 squares in row-major order, row 0 first
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord { row, col }))
    }

    /// Convert to shakmaty Square
    pub fn to_square(&self) -> Square {
        let file = File::new(self.col as u32);
        let rank = Rank::new(7 - self.row as u32); // row 0 = rank 8, row 7 = rank 1
        Square::from_coords(file, rank)
    }

    pub fn from_square(square: Square) -> Self {
        let col = u32::from(square.file()) as usize;
        let rank = u32::from(square.rank()) as usize;
        Self { row: 7 - rank, col }
    }
}

impl From<Square> for Coord {
    fn from(square: Square) -> Self {
        Coord::from_square(square)
    }
}

impl FromStr for Coord {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Square>()
            .map(Coord::from_square)
            .map_err(|_| BoardError::InvalidNotation(s.to_string()))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_number())
    }
}
