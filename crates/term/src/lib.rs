//! Terminal rendering for the game.
//!
//! Rendering is split in two: [`GameView`] turns an engine snapshot into a
//! framebuffer of styled glyphs without any I/O, and [`TerminalRenderer`]
//! pushes framebuffers to the terminal through crossterm.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
