//! Terminal rendering for blockfall.
//!
//! Rendering goes through a plain framebuffer rather than a widget toolkit:
//! [`GameView`] draws a [`core::GameSnapshot`] into a [`FrameBuffer`], and
//! [`TerminalRenderer`] flushes it through `crossterm`.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{notice_text, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
