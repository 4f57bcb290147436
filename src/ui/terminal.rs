//! Terminal output backend.
//!
//! A backend receives a finished frame and owns every terminal concern
//! below that point. `AnsiTerminal` writes 24-bit ANSI color to any
//! `Write`, so tests can paint into a buffer.

use std::io::{self, Stdout, Write};

use anyhow::Context;

use crate::domain::Board;
use crate::ui::components::{render_file_header, render_panel, render_rank_row};
use crate::ui::display::render;
use crate::ui::theme::Theme;
use crate::ui::view_models::RenderedBoard;

/// Everything a backend needs to paint the board panel
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    pub board: &'a RenderedBoard,
    pub title: &'a str,
    pub subtitle: &'a str,
}

pub trait Backend {
    fn paint(&mut self, frame: &Frame<'_>) -> io::Result<()>;
}

pub struct AnsiTerminal<W: Write> {
    out: W,
    theme: Theme,
}

impl AnsiTerminal<Stdout> {
    pub fn stdout(theme: Theme) -> Self {
        Self::new(io::stdout(), theme)
    }
}

impl<W: Write> AnsiTerminal<W> {
    pub fn new(out: W, theme: Theme) -> Self {
        Self { out, theme }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Panel lines for a frame, escape codes included
    pub fn frame_lines(&self, frame: &Frame<'_>) -> Vec<String> {
        let mut body = Vec::with_capacity(frame.board.rows.len() + 1);
        body.push(render_file_header(&frame.board.file_labels));
        body.extend(
            frame
                .board
                .rows
                .iter()
                .map(|row| render_rank_row(row, &self.theme)),
        );
        render_panel(&body, frame.title, frame.subtitle, &self.theme)
    }
}

impl<W: Write> Backend for AnsiTerminal<W> {
    fn paint(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        for line in self.frame_lines(frame) {
            writeln!(self.out, "{}", line)?;
        }
        self.out.flush()
    }
}

/// Render the board and hand it to the backend inside a titled panel
pub fn display<B: Backend>(
    backend: &mut B,
    board: &Board,
    title: &str,
    subtitle: &str,
) -> anyhow::Result<()> {
    let rendered = render(board);
    let frame = Frame {
        board: &rendered,
        title,
        subtitle,
    };
    backend.paint(&frame).context("Failed to paint board")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Piece, PieceColor, PieceType};
    use crate::ui::ansi::{bg, strip};
    use crate::ui::theme::{DARK_SQUARE, LIGHT_SQUARE, Rgb};

    fn paint_to_string(board: &Board, title: &str, subtitle: &str) -> String {
        let mut terminal = AnsiTerminal::new(Vec::new(), Theme::default());
        display(&mut terminal, board, title, subtitle).unwrap();
        String::from_utf8(terminal.into_inner()).unwrap()
    }

    /// Backend that keeps the frames it was given
    #[derive(Default)]
    struct Recorder {
        frames: Vec<(RenderedBoard, String, String)>,
    }

    impl Backend for Recorder {
        fn paint(&mut self, frame: &Frame<'_>) -> io::Result<()> {
            self.frames.push((
                frame.board.clone(),
                frame.title.to_string(),
                frame.subtitle.to_string(),
            ));
            Ok(())
        }
    }

    struct Broken;

    impl Backend for Broken {
        fn paint(&mut self, _frame: &Frame<'_>) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_standard_board_output() {
        let output = paint_to_string(
            &Board::new_setup(),
            "Chess Board Editor",
            "Press Ctrl+C to exit",
        );
        let lines: Vec<_> = output.lines().map(strip).collect();

        // border, file header, 8 ranks, border
        assert_eq!(lines.len(), 11);
        assert!(lines[0].contains(" Chess Board Editor "));
        assert!(lines[10].contains(" Press Ctrl+C to exit "));
        assert!(lines[1].contains("a  b  c  d  e  f  g  h"));
        assert!(lines[2].contains("8  ♜  ♞  ♝  ♛  ♚  ♝  ♞  ♜"));
        assert!(lines[3].contains("7  ♟  ♟"));
        assert!(lines[8].contains("2  ♙  ♙"));
        assert!(lines[9].contains("1  ♖  ♘  ♗  ♕  ♔  ♗  ♘  ♖"));

        let widths: Vec<_> = lines.iter().map(|l| l.chars().count()).collect();
        assert!(widths.iter().all(|&w| w == widths[0]));

        assert!(output.contains(&bg(Rgb::from_hex(LIGHT_SQUARE))));
        assert!(output.contains(&bg(Rgb::from_hex(DARK_SQUARE))));
    }

    #[test]
    fn test_display_hands_frame_to_backend() {
        let mut board = Board::new();
        board
            .set_piece(0, 0, Some(Piece::new(PieceColor::White, PieceType::King)))
            .unwrap();
        let mut recorder = Recorder::default();
        display(&mut recorder, &board, "title", "sub").unwrap();
        display(&mut recorder, &board, "title", "sub").unwrap();

        assert_eq!(recorder.frames.len(), 2);
        let (rendered, title, subtitle) = &recorder.frames[0];
        assert_eq!(rendered, &render(&board));
        assert_eq!(rendered.cell(0, 0).unwrap().glyph, "♔");
        assert_eq!(title, "title");
        assert_eq!(subtitle, "sub");
        assert_eq!(recorder.frames[0], recorder.frames[1]);
    }

    #[test]
    fn test_paint_failure_propagates() {
        let err = display(&mut Broken, &Board::new(), "t", "s").unwrap_err();
        assert!(err.to_string().contains("Failed to paint board"));
    }

    #[test]
    fn test_empty_board_still_draws_every_square() {
        let output = paint_to_string(&Board::new(), "", "");
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 11);
        let backgrounds = output.matches("\x1b[48;2;").count();
        assert_eq!(backgrounds, 64);
    }
}
