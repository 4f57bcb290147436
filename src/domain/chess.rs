//! Piece identity and the glyph table.
//! No terminal dependencies - this is the domain layer.

use std::fmt;

use shakmaty::{Color as SColor, Role};

/// Glyph drawn for a square with no piece on it
pub const BLANK_GLYPH: &str = " ";

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    pub const ALL: [PieceColor; 2] = [PieceColor::White, PieceColor::Black];

    pub fn name(self) -> &'static str {
        match self {
            PieceColor::White => "white",
            PieceColor::Black => "black",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PieceType {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceType {
    pub const ALL: [PieceType; 6] = [
        PieceType::King,
        PieceType::Queen,
        PieceType::Rook,
        PieceType::Bishop,
        PieceType::Knight,
        PieceType::Pawn,
    ];

    /// Back rank in file order a..h
    pub const BACK_RANK: [PieceType; 8] = [
        PieceType::Rook,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Queen,
        PieceType::King,
        PieceType::Bishop,
        PieceType::Knight,
        PieceType::Rook,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PieceType::King => "king",
            PieceType::Queen => "queen",
            PieceType::Rook => "rook",
            PieceType::Bishop => "bishop",
            PieceType::Knight => "knight",
            PieceType::Pawn => "pawn",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: PieceColor,
    pub piece_type: PieceType,
}

impl Piece {
    pub const fn new(color: PieceColor, piece_type: PieceType) -> Self {
        Self { color, piece_type }
    }

    /// Unicode glyph for this piece
    pub fn symbol(&self) -> &'static str {
        match (self.color, self.piece_type) {
            (PieceColor::White, PieceType::King) => "♔",
            (PieceColor::White, PieceType::Queen) => "♕",
            (PieceColor::White, PieceType::Rook) => "♖",
            (PieceColor::White, PieceType::Bishop) => "♗",
            (PieceColor::White, PieceType::Knight) => "♘",
            (PieceColor::White, PieceType::Pawn) => "♙",
            (PieceColor::Black, PieceType::King) => "♚",
            (PieceColor::Black, PieceType::Queen) => "♛",
            (PieceColor::Black, PieceType::Rook) => "♜",
            (PieceColor::Black, PieceType::Bishop) => "♝",
            (PieceColor::Black, PieceType::Knight) => "♞",
            (PieceColor::Black, PieceType::Pawn) => "♟",
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Piece({}, {})", self.piece_type.name(), self.color.name())
    }
}

/// Convert shakmaty piece to our domain Piece
impl From<shakmaty::Piece> for Piece {
    fn from(piece: shakmaty::Piece) -> Self {
        let piece_type = match piece.role {
            Role::Pawn => PieceType::Pawn,
            Role::Knight => PieceType::Knight,
            Role::Bishop => PieceType::Bishop,
            Role::Rook => PieceType::Rook,
            Role::Queen => PieceType::Queen,
            Role::King => PieceType::King,
        };
        let color = match piece.color {
            SColor::White => PieceColor::White,
            SColor::Black => PieceColor::Black,
        };
        Piece { color, piece_type }
    }
}

impl From<Piece> for shakmaty::Piece {
    fn from(piece: Piece) -> Self {
        let role = match piece.piece_type {
            PieceType::Pawn => Role::Pawn,
            PieceType::Knight => Role::Knight,
            PieceType::Bishop => Role::Bishop,
            PieceType::Rook => Role::Rook,
            PieceType::Queen => Role::Queen,
            PieceType::King => Role::King,
        };
        let color = match piece.color {
            PieceColor::White => SColor::White,
            PieceColor::Black => SColor::Black,
        };
        shakmaty::Piece { color, role }
    }
}
