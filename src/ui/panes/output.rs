//! Python output pane

use super::code::{highlight_line, pane_block, render_code_pane, Syntax};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

const PYTHON: Syntax = Syntax {
    comment: "#",
    word_style: python_word_style,
};

fn python_word_style(word: &str, is_call: bool) -> Style {
    match word {
        "def" | "if" | "elif" | "else" | "while" | "for" | "in" | "return" | "pass" => {
            Style::default()
                .fg(DEFAULT_THEME.keyword)
                .add_modifier(Modifier::BOLD)
        }
        "print" | "input" | "range" | "int" => Style::default().fg(DEFAULT_THEME.secondary),
        "True" | "False" | "None" => Style::default().fg(DEFAULT_THEME.number),
        "__name__" => Style::default().fg(DEFAULT_THEME.type_name),
        _ if is_call => Style::default().fg(DEFAULT_THEME.function),
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}

/// Highlight one line of Python
pub fn highlight_python(line: &str) -> Line<'static> {
    highlight_line(line, &PYTHON)
}

/// Render the output pane. `None` means translation failed and there is
/// nothing to show.
pub fn render_output_pane(
    frame: &mut Frame,
    area: Rect,
    output: Option<&str>,
    is_focused: bool,
    scroll: &mut usize,
) {
    const TITLE: &str = " Python Output ";

    match output {
        Some(text) => {
            let lines = text.lines().map(highlight_python).collect();
            render_code_pane(frame, area, TITLE, lines, None, is_focused, scroll);
        }
        None => {
            *scroll = 0;
            let message = Paragraph::new(Line::styled(
                " No output: translation failed",
                Style::default().fg(DEFAULT_THEME.comment),
            ))
            .block(pane_block(TITLE, is_focused));
            frame.render_widget(message, area);
        }
    }
}
