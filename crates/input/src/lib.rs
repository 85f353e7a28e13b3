//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]. There is no
//! auto-repeat handling here: each key press is one command, and the terminal's
//! own key repeat is left to the driver.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
