//! Viewer state and event loop

use crate::ui::panes;
use crate::TranspileError;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
    backend::Backend,
};
use std::io;
use std::time::Duration;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Output,
}

impl FocusedPane {
    /// With two panes, next and previous are the same move
    pub fn toggle(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Source,
        }
    }
}

/// A failed translation as the viewer shows it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorState {
    pub message: String,
    /// 1-based source line
    pub line: usize,
}

/// The main application state
pub struct App {
    /// The C++ input
    pub source_code: String,

    /// Generated Python, absent when translation failed
    pub output: Option<String>,

    pub error: Option<ErrorState>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets, clamped on every render
    pub source_scroll: usize,
    pub output_scroll: usize,

    /// Rows per page, refreshed on every render
    pub page_height: usize,

    /// Whether the error line has been scrolled into view yet
    error_centered: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    pub fn new(source_code: String, result: &Result<String, TranspileError>) -> Self {
        let (output, error, status_message) = match result {
            Ok(python) => {
                let message = format!(
                    "Translated {} lines of C++ into {} lines of Python",
                    source_code.lines().count(),
                    python.lines().count()
                );
                (Some(python.clone()), None, message)
            }
            Err(err) => {
                let state = ErrorState {
                    message: err.to_string(),
                    line: err.location().line,
                };
                (None, Some(state), err.to_string())
            }
        };

        App {
            source_code,
            output,
            error,
            focused_pane: FocusedPane::Source,
            source_scroll: 0,
            output_scroll: 0,
            page_height: 1,
            error_centered: false,
            should_quit: false,
            status_message,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI: source | output side by side, status bar at the bottom
    pub fn render(&mut self, frame: &mut Frame) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(main_chunks[0]);

        self.page_height = panes::visible_height(columns[0]);

        if let (Some(error), false) = (&self.error, self.error_centered) {
            self.source_scroll = error
                .line
                .saturating_sub(1)
                .saturating_sub(self.page_height / 2);
            self.error_centered = true;
        }

        panes::render_source_pane(
            frame,
            columns[0],
            &self.source_code,
            self.error.as_ref().map(|e| e.line),
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        panes::render_output_pane(
            frame,
            columns[1],
            self.output.as_deref(),
            self.focused_pane == FocusedPane::Output,
            &mut self.output_scroll,
        );

        panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.error.as_ref(),
        );
    }

    fn focused_scroll(&mut self) -> &mut usize {
        match self.focused_pane {
            FocusedPane::Source => &mut self.source_scroll,
            FocusedPane::Output => &mut self.output_scroll,
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let page = self.page_height;
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.toggle();
            }
            KeyCode::Up => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(1);
            }
            KeyCode::PageUp => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(page);
            }
            KeyCode::PageDown => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(page);
            }
            KeyCode::Home => *self.focused_scroll() = 0,
            // Clamped to the last full page on the next render
            KeyCode::End => *self.focused_scroll() = usize::MAX,
            _ => {}
        }
    }
}
