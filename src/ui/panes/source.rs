//! C++ source pane
//!
//! Displays the input program with line numbers and basic syntax
//! highlighting. When translation failed, the offending line is drawn in
//! the error style.

use super::code::{highlight_line, render_code_pane, Syntax};
use crate::parser::TYPE_KEYWORDS;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

const CPP: Syntax = Syntax {
    comment: "//",
    word_style: cpp_word_style,
};

fn cpp_word_style(word: &str, is_call: bool) -> Style {
    match word {
        w if TYPE_KEYWORDS.contains(&w) || w == "void" => {
            Style::default().fg(DEFAULT_THEME.type_name)
        }
        "if" | "else" | "for" | "while" | "return" | "using" | "namespace" => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        "cout" | "cin" | "endl" | "std" => Style::default().fg(DEFAULT_THEME.secondary),
        "true" | "false" => Style::default().fg(DEFAULT_THEME.number),
        _ if is_call => Style::default().fg(DEFAULT_THEME.function),
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}

/// Highlight one line of C++
pub fn highlight_cpp(line: &str) -> Line<'static> {
    if line.trim_start().starts_with('#') {
        return Line::from(Span::styled(
            line.to_string(),
            Style::default().fg(DEFAULT_THEME.directive),
        ));
    }
    highlight_line(line, &CPP)
}

/// Render the source pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source_code: &str,
    error_line: Option<usize>,
    is_focused: bool,
    scroll: &mut usize,
) {
    let lines = source_code.lines().map(highlight_cpp).collect();
    render_code_pane(
        frame,
        area,
        " C++ Source ",
        lines,
        error_line,
        is_focused,
        scroll,
    );
}
