//! TUI pane rendering modules
//!
//! - [`source`]: the C++ input with syntax highlighting and the error line
//! - [`output`]: the generated Python
//! - [`status`]: status bar with keybindings and the translation outcome
//! - `code`: highlighter and line-numbered renderer shared by both code panes

mod code;

pub mod output;
pub mod source;
pub mod status;

pub use code::visible_height;
pub use output::render_output_pane;
pub use source::render_source_pane;
pub use status::render_status_bar;
