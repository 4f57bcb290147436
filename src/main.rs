use chess_board_editor::app;
use chess_board_editor::config::EditorConfig;

fn main() -> anyhow::Result<()> {
    let config = EditorConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Failed to load config: {:#}", e);
        EditorConfig::default()
    });
    app::run(&config)
}
