//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`InputAction`]s and turns those into engine
//! [`GameCommand`](crate::types::GameCommand)s through a small column/card [`Selection`].
//! Nothing here draws or touches the terminal.

pub mod map;
pub mod selection;

pub use spider_solitaire_core as core;
pub use spider_solitaire_types as types;

pub use map::{handle_key_event, should_quit, InputAction};
pub use selection::{Held, Selection};
