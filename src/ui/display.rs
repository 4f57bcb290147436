//! Display generation for the board.
//!
//! This module transforms a Board into display-ready view models.
//! It lives in the UI layer and depends on the domain, not vice versa.

use crate::domain::coord::BOARD_SIZE;
use crate::domain::{BLANK_GLYPH, Board, Coord};
use crate::ui::theme::square_shade;
use crate::ui::view_models::{DisplayCell, RenderedBoard, RenderedRow};

/// Project a board into rows of styled cells, row 0 first.
/// Reads the board only; calling it twice on the same board gives equal output.
pub fn render(board: &Board) -> RenderedBoard {
    let cells: Vec<DisplayCell> = board
        .iter()
        .map(|(coord, piece)| DisplayCell {
            coord,
            shade: square_shade(coord.row(), coord.col()),
            glyph: piece.map_or(BLANK_GLYPH, |p| p.symbol()),
        })
        .collect();

    let rows = cells
        .chunks(BOARD_SIZE)
        .map(|chunk| RenderedRow {
            rank: chunk[0].coord.rank_number(),
            cells: chunk.to_vec(),
        })
        .collect();

    RenderedBoard {
        file_labels: file_labels(),
        rows,
    }
}

fn file_labels() -> Vec<char> {
    Coord::all()
        .take(BOARD_SIZE)
        .map(|coord| coord.file_char())
        .collect()
}
