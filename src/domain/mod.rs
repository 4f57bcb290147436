pub mod board;
pub mod chess;
pub mod coord;
pub mod error;

pub use board::Board;
pub use chess::{BLANK_GLYPH, Piece, PieceColor, PieceType};
pub use coord::Coord;
pub use error::BoardError;
