//! View models for rendering the board.
//!
//! These types are DTOs prepared from a Board snapshot for a backend to
//! paint. They hold no reference to the board and are rebuilt on every
//! render.

use crate::domain::Coord;

/// Background class of a square
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SquareShade {
    Light,
    Dark,
}

/// Display data for a single square
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DisplayCell {
    pub coord: Coord,
    pub shade: SquareShade,
    /// Piece symbol, or the blank glyph for an empty square
    pub glyph: &'static str,
}

/// One rank of the board, left to right from file 'a'
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RenderedRow {
    pub rank: u8,
    pub cells: Vec<DisplayCell>,
}

/// The full 8x8 grid, row 0 (rank 8) first
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RenderedBoard {
    pub file_labels: Vec<char>,
    pub rows: Vec<RenderedRow>,
}

impl RenderedBoard {
    /// All 64 cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &DisplayCell> {
        self.rows.iter().flat_map(|row| row.cells.iter())
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&DisplayCell> {
        self.rows.get(row).and_then(|r| r.cells.get(col))
    }

    /// Whether no square holds a piece
    pub fn is_empty(&self) -> bool {
        self.cells().all(|cell| cell.glyph == crate::domain::BLANK_GLYPH)
    }
}
