//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`display`]: Expression and result lines
//! - [`keypad`]: Clickable button grid
//! - [`status`]: Status bar with keybindings and the last warning
//!
//! Each pane module exports a primary `render_*` function. The keypad also
//! records button rectangles so mouse clicks can be mapped back to symbols.

pub mod display;
pub mod keypad;
pub mod status;

pub use display::render_display_pane;
pub use keypad::{render_keypad_pane, KeypadLayout};
pub use status::render_status_bar;
