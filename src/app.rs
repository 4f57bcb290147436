//! Application setup: build the board and paint it.

use crate::config::EditorConfig;
use crate::domain::Board;
use crate::ui::ansi::{BOLD, RESET};
use crate::ui::{AnsiTerminal, Backend, display};

/// Paint the standard starting position to stdout
pub fn run(config: &EditorConfig) -> anyhow::Result<()> {
    println!("\n{BOLD}Welcome to Chess Board Editor!{RESET}\n");
    let mut terminal = AnsiTerminal::stdout(config.theme.clone());
    run_with(&mut terminal, config)?;
    Ok(())
}

/// Build the starting position and hand it to the given backend
pub fn run_with<B: Backend>(backend: &mut B, config: &EditorConfig) -> anyhow::Result<Board> {
    let mut board = Board::new();
    board.setup_standard_position();
    display(backend, &board, &config.title, &config.subtitle)?;
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::ansi::strip;

    #[test]
    fn test_run_paints_starting_position() {
        let config = EditorConfig::default();
        let mut terminal = AnsiTerminal::new(Vec::new(), config.theme.clone());
        let board = run_with(&mut terminal, &config).unwrap();
        assert_eq!(board, Board::new_setup());

        let output = String::from_utf8(terminal.into_inner()).unwrap();
        let first = strip(output.lines().next().unwrap());
        assert!(first.contains(" Chess Board Editor "));
        assert!(strip(&output).contains("1  ♖  ♘  ♗  ♕  ♔  ♗  ♘  ♖"));
    }
}
