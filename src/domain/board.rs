//! Positional board model.
//!
//! A fixed 8x8 grid of optional pieces. There is no side to move, no
//! history and no legality checking; callers place pieces wherever they
//! like.

use crate::domain::chess::{Piece, PieceColor, PieceType};
use crate::domain::coord::{BOARD_SIZE, Coord};
use crate::domain::error::BoardError;

type Grid = [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE];

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    squares: Grid,
}

impl Board {
    /// Empty board
    pub fn new() -> Self {
        Self {
            squares: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Board set up in the standard starting position
    pub fn new_setup() -> Self {
        let mut board = Self::new();
        board.setup_standard_position();
        board
    }

    pub fn get_piece(&self, row: i32, col: i32) -> Result<Option<Piece>, BoardError> {
        Coord::new(row, col).map(|coord| self.piece_at(coord))
    }

    /// Write a piece into a square, or empty it with `None`
    pub fn set_piece(
        &mut self,
        row: i32,
        col: i32,
        piece: Option<Piece>,
    ) -> Result<(), BoardError> {
        let coord = Coord::new(row, col)?;
        self.put_piece(coord, piece);
        Ok(())
    }

    pub fn piece_at(&self, coord: Coord) -> Option<Piece> {
        self.squares[coord.row()][coord.col()]
    }

    pub fn put_piece(&mut self, coord: Coord, piece: Option<Piece>) {
        self.squares[coord.row()][coord.col()] = piece;
    }

    pub fn clear(&mut self) {
        self.squares = [[None; BOARD_SIZE]; BOARD_SIZE];
    }

    /// Overwrite the whole grid with the starting position
    pub fn setup_standard_position(&mut self) {
        self.clear();

        for (col, piece_type) in PieceType::BACK_RANK.into_iter().enumerate() {
            self.squares[0][col] = Some(Piece::new(PieceColor::Black, piece_type));
            self.squares[1][col] = Some(Piece::new(PieceColor::Black, PieceType::Pawn));
            self.squares[6][col] = Some(Piece::new(PieceColor::White, PieceType::Pawn));
            self.squares[7][col] = Some(Piece::new(PieceColor::White, piece_type));
        }
    }

    /// Every square with its occupant, row-major from row 0
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Option<Piece>)> + '_ {
        Coord::all().map(|coord| (coord, self.piece_at(coord)))
    }

    pub fn occupied_count(&self) -> usize {
        self.squares.iter().flatten().filter(|sq| sq.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.occupied_count() == 0
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Copy piece placement from a shakmaty board
impl From<&shakmaty::Board> for Board {
    fn from(source: &shakmaty::Board) -> Self {
        let mut board = Board::new();
        for coord in Coord::all() {
            let piece = source.piece_at(coord.to_square()).map(Piece::from);
            board.put_piece(coord, piece);
        }
        board
    }
}
