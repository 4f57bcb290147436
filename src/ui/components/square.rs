//! Square rendering component.

use crate::ui::ansi::{BOLD, RESET, bg, fg};
use crate::ui::components::StyledLine;
use crate::ui::theme::{LABEL_WIDTH, SQUARE_WIDTH, Theme};
use crate::ui::view_models::{DisplayCell, RenderedRow};

/// Render a single board square with its glyph centered
pub fn render_square(cell: &DisplayCell, theme: &Theme) -> String {
    format!(
        "{}{} {} {}",
        bg(theme.background(cell.shade)),
        fg(theme.piece),
        cell.glyph,
        RESET
    )
}

/// Rank label followed by the eight squares of the row
pub fn render_rank_row(row: &RenderedRow, theme: &Theme) -> StyledLine {
    let mut text = format!("{BOLD}{:<width$}{RESET}", row.rank, width = LABEL_WIDTH);
    for cell in &row.cells {
        text.push_str(&render_square(cell, theme));
    }
    StyledLine {
        text,
        width: LABEL_WIDTH + row.cells.len() * SQUARE_WIDTH,
    }
}

/// File letters aligned over the square columns
pub fn render_file_header(labels: &[char]) -> StyledLine {
    let mut text = format!("{BOLD}{:width$}", "", width = LABEL_WIDTH);
    for label in labels {
        text.push_str(&format!(" {} ", label));
    }
    text.push_str(RESET);
    StyledLine {
        text,
        width: LABEL_WIDTH + labels.len() * SQUARE_WIDTH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Board;
    use crate::ui::ansi::strip;
    use crate::ui::display::render;
    use crate::ui::theme::{DARK_SQUARE, LIGHT_SQUARE, Rgb};

    #[test]
    fn test_square_uses_shade_background() {
        let theme = Theme::default();
        let rendered = render(&Board::new_setup());

        let light = render_square(rendered.cell(0, 0).unwrap(), &theme);
        assert!(light.starts_with(&bg(Rgb::from_hex(LIGHT_SQUARE))));
        assert_eq!(strip(&light), " ♜ ");

        let dark = render_square(rendered.cell(0, 1).unwrap(), &theme);
        assert!(dark.starts_with(&bg(Rgb::from_hex(DARK_SQUARE))));
        assert_eq!(strip(&dark), " ♞ ");
    }

    #[test]
    fn test_rank_row_text() {
        let theme = Theme::default();
        let rendered = render(&Board::new_setup());

        let top = render_rank_row(&rendered.rows[0], &theme);
        assert_eq!(strip(&top.text), "8  ♜  ♞  ♝  ♛  ♚  ♝  ♞  ♜ ");
        assert_eq!(top.width, 26);
        assert_eq!(strip(&top.text).chars().count(), top.width);

        let middle = render_rank_row(&rendered.rows[3], &theme);
        assert_eq!(strip(&middle.text).trim(), "5");
    }

    #[test]
    fn test_file_header() {
        let header = render_file_header(&['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h']);
        assert_eq!(strip(&header.text), "   a  b  c  d  e  f  g  h ");
        assert_eq!(header.width, 26);
    }
}
