mod panel;
mod square;

pub use panel::{StyledLine, render_panel};
pub use square::{render_file_header, render_rank_row, render_square};
