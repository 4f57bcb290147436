//! Bordered panel with a title in the top border and a subtitle in the bottom.

use crate::ui::ansi::{BOLD, DIM, RESET, fg};
use crate::ui::theme::Theme;

/// A pre-styled line together with its printable width
#[derive(Clone, Debug)]
pub struct StyledLine {
    pub text: String,
    pub width: usize,
}

// Blank columns between the border and the content
const PADDING: usize = 1;

/// Wrap body lines in a rounded box, widening it to fit the labels
pub fn render_panel(
    body: &[StyledLine],
    title: &str,
    subtitle: &str,
    theme: &Theme,
) -> Vec<String> {
    let label_width = |label: &str| match label.chars().count() {
        0 => 0,
        n => n + 4,
    };
    let content_width = body.iter().map(|line| line.width).max().unwrap_or(0);
    let inner = (content_width + PADDING * 2)
        .max(label_width(title))
        .max(label_width(subtitle));

    let border = fg(theme.border);
    let title_style = format!("{BOLD}{}", fg(theme.title));
    let subtitle_style = format!("{DIM}{}", fg(theme.subtitle));

    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(border_line('╭', '╮', title, &title_style, inner, &border));
    for line in body {
        let fill = inner - PADDING * 2 - line.width;
        lines.push(format!(
            "{border}│{RESET}{pad}{}{:fill$}{pad}{border}│{RESET}",
            line.text,
            "",
            pad = " ".repeat(PADDING),
        ));
    }
    lines.push(border_line('╰', '╯', subtitle, &subtitle_style, inner, &border));
    lines
}

fn border_line(
    left: char,
    right: char,
    label: &str,
    style: &str,
    inner: usize,
    border: &str,
) -> String {
    if label.is_empty() {
        return format!("{border}{left}{}{right}{RESET}", "─".repeat(inner));
    }
    let label_len = label.chars().count() + 2;
    let before = (inner - label_len) / 2;
    let after = inner - label_len - before;
    format!(
        "{border}{left}{}{RESET}{style} {label} {RESET}{border}{}{right}{RESET}",
        "─".repeat(before),
        "─".repeat(after),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::ansi::strip;

    fn plain(text: &str) -> StyledLine {
        StyledLine {
            text: text.to_string(),
            width: text.chars().count(),
        }
    }

    #[test]
    fn test_panel_box() {
        let lines = render_panel(&[plain("abc"), plain("de")], "", "", &Theme::default());
        let stripped: Vec<_> = lines.iter().map(|l| strip(l)).collect();
        assert_eq!(stripped, vec!["╭─────╮", "│ abc │", "│ de  │", "╰─────╯"]);
    }

    #[test]
    fn test_labels_are_centered_in_borders() {
        let lines = render_panel(&[plain("0123456789")], "Hi", "bye", &Theme::default());
        let stripped: Vec<_> = lines.iter().map(|l| strip(l)).collect();
        assert_eq!(stripped[0], "╭──── Hi ────╮");
        assert_eq!(stripped[1], "│ 0123456789 │");
        assert_eq!(stripped[2], "╰─── bye ────╯");
    }

    #[test]
    fn test_long_title_widens_panel() {
        let lines = render_panel(&[plain("x")], "A long title", "", &Theme::default());
        let stripped: Vec<_> = lines.iter().map(|l| strip(l)).collect();
        let widths: Vec<_> = stripped.iter().map(|l| l.chars().count()).collect();
        assert!(widths.iter().all(|&w| w == widths[0]));
        assert_eq!(stripped[0], "╭─ A long title ─╮");
    }
}
