//! Terminal "table renderer" module.
//!
//! A small rendering layer for playing in a terminal. It avoids widget/layout libraries
//! and instead draws into a character [`Canvas`] that is flushed to the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep drawing pure: [`GameView`] only fills a [`Canvas`]
//! - Only rewrite the part of each row that changed between frames

pub mod canvas;
pub mod game_view;
pub mod labels;
pub mod renderer;

pub use spider_solitaire_core as core;
pub use spider_solitaire_types as types;

pub use canvas::{Attrs, Canvas, Cell, Ink, Paint};
pub use game_view::{card_face, CursorView, GameView, Viewport};
pub use labels::{format_time, labels, Labels};
pub use renderer::{encode_frame, TerminalRenderer};
