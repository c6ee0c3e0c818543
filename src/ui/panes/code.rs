//! Shared pieces of the two code panes: a per-line highlighter driven by a
//! small [`Syntax`] table and a scrolled, line-numbered pane renderer.

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// What the highlighter needs to know about a language
pub(super) struct Syntax {
    /// Starts a comment running to the end of the line
    pub comment: &'static str,
    /// Style for a word; the flag is set when the word is directly followed by `(`
    pub word_style: fn(&str, bool) -> Style,
}

/// Character-by-character highlighting of a single line.
pub(super) fn highlight_line(line: &str, syntax: &Syntax) -> Line<'static> {
    let chars: Vec<char> = line.chars().collect();
    let comment: Vec<char> = syntax.comment.chars().collect();
    let mut spans = Vec::new();
    let mut word = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if chars[i..].starts_with(&comment) {
            flush_word(&mut spans, &mut word, false, syntax);
            spans.push(Span::styled(
                chars[i..].iter().collect::<String>(),
                Style::default().fg(DEFAULT_THEME.comment),
            ));
            return Line::from(spans);
        }

        if c == '"' || c == '\'' {
            flush_word(&mut spans, &mut word, false, syntax);
            let mut end = i + 1;
            while end < chars.len() && chars[end] != c {
                end += if chars[end] == '\\' { 2 } else { 1 };
            }
            let end = (end + 1).min(chars.len());
            spans.push(Span::styled(
                chars[i..end].iter().collect::<String>(),
                Style::default().fg(DEFAULT_THEME.string),
            ));
            i = end;
            continue;
        }

        let in_number = word.starts_with(|ch: char| ch.is_ascii_digit());
        if c.is_alphanumeric() || c == '_' || (c == '.' && in_number) {
            word.push(c);
            i += 1;
            continue;
        }

        flush_word(&mut spans, &mut word, c == '(', syntax);
        let style = match c {
            '{' | '}' | '(' | ')' | '[' | ']' => Style::default().fg(DEFAULT_THEME.primary),
            _ => Style::default().fg(DEFAULT_THEME.fg),
        };
        spans.push(Span::styled(c.to_string(), style));
        i += 1;
    }

    flush_word(&mut spans, &mut word, false, syntax);
    Line::from(spans)
}

fn flush_word(spans: &mut Vec<Span<'static>>, word: &mut String, is_call: bool, syntax: &Syntax) {
    if word.is_empty() {
        return;
    }
    let style = if word.starts_with(|c: char| c.is_ascii_digit()) {
        Style::default().fg(DEFAULT_THEME.number)
    } else {
        (syntax.word_style)(word, is_call)
    };
    spans.push(Span::styled(std::mem::take(word), style));
}

pub(super) fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Rows available for code inside a bordered pane
pub fn visible_height(area: Rect) -> usize {
    area.height.saturating_sub(2).max(1) as usize
}

/// Render highlighted `lines` with line numbers, starting at `*scroll`.
///
/// `*scroll` is clamped so the last page stays full. `marked_line` (1-based)
/// is drawn in the error style.
pub(super) fn render_code_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    lines: Vec<Line<'static>>,
    marked_line: Option<usize>,
    is_focused: bool,
    scroll: &mut usize,
) {
    let height = visible_height(area);
    let max_scroll = lines.len().saturating_sub(height);
    *scroll = (*scroll).min(max_scroll);

    let visible_lines: Vec<Line> = lines
        .into_iter()
        .enumerate()
        .skip(*scroll)
        .take(height)
        .map(|(idx, mut content)| {
            let line_num = idx + 1;
            let is_marked = marked_line == Some(line_num);

            let num_style = if is_marked {
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            if is_marked {
                let marked = Style::default()
                    .bg(DEFAULT_THEME.error)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD);
                for span in &mut content.spans {
                    span.style = marked;
                }
            }

            let mut spans = vec![Span::styled(format!("{:4} ", line_num), num_style)];
            spans.extend(content.spans);
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(pane_block(title, is_focused));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(_: &str, _: bool) -> Style {
        Style::default()
    }

    const PLAIN: Syntax = Syntax {
        comment: "//",
        word_style: plain,
    };

    fn text(line: &Line) -> Vec<String> {
        line.spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn test_words_strings_and_comments_split() {
        let line = highlight_line("x = \"a b\"; // done", &PLAIN);
        assert_eq!(
            text(&line),
            vec!["x", " ", "=", " ", "\"a b\"", ";", " ", "// done"]
        );
    }

    #[test]
    fn test_decimal_stays_one_word() {
        let line = highlight_line("3.14+x", &PLAIN);
        assert_eq!(text(&line), vec!["3.14", "+", "x"]);
        assert_eq!(line.spans[0].style.fg, Some(DEFAULT_THEME.number));
    }

    #[test]
    fn test_unterminated_string_runs_to_end() {
        let line = highlight_line("\"abc\\", &PLAIN);
        assert_eq!(text(&line), vec!["\"abc\\"]);
    }

    #[test]
    fn test_non_ascii_is_safe() {
        let line = highlight_line("é = \"ü\" // ß", &PLAIN);
        assert_eq!(text(&line).concat(), "é = \"ü\" // ß");
    }
}
