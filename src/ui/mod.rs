//! Terminal viewer built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! - **[`app`]**: viewer state, keyboard event loop, pane focus and scrolling
//! - **[`panes`]**: render functions for the source, output and status panes
//! - **[`theme`]**: color palette shared by all panes
//!
//! Construct an [`App`] from the source text and the result of
//! [`transpile`](crate::transpile), then call [`App::run`].
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
