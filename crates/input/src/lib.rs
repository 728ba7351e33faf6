//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] intents.
//! There is no auto-repeat handling here: the terminal's own key repeat
//! produces one intent per repeat event.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, is_intent_event, should_quit};
