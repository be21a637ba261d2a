//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four parts:
//!
//! - **[`app`]** — application state, event loop, and the [`app::Screen`] render sink
//! - **[`keymap`]** — keyboard to button mapping
//! - **[`panes`]** — render functions for the display, keypad and status bar
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`Calculator`] and
//! call [`App::run`] to start the event loop.
//!
//! [`Calculator`]: crate::calculator::Calculator
//! [`App::run`]: app::App::run

pub mod app;
pub mod keymap;
pub mod panes;
pub mod theme;

pub use app::{App, Screen};
