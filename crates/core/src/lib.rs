//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the Spider Solitaire rules: dealing, move legality, sequence
//! removal, scoring, and undo/redo. It has **no dependencies** on rendering, input or
//! storage, which makes it:
//!
//! - **Deterministic**: the same seed deals the same game
//! - **Testable**: every rule is a plain function over plain data
//! - **Portable**: the terminal front end is only one possible caller
//!
//! # Module Structure
//!
//! - [`deck`]: 104-card deck construction and shuffling per difficulty
//! - [`tableau`]: ten columns, stock, completed sequences, invariant checks
//! - [`moves`]: run detection and move validation
//! - [`sequences`]: King..Ace run detection and removal
//! - [`history`]: linear undo/redo over snapshots
//! - [`scoring`]: score bonuses and the win condition
//! - [`session`]: [`GameSession`], the caller-facing engine
//! - [`saved`]: the persisted record of a session
//!
//! # Game Rules
//!
//! - **Layout**: 54 cards in ten columns (6,6,6,6,5,5,5,5,5,5), the rest form the stock
//! - **Moves**: a face-up same-suit descending run moves onto an empty column or onto a
//!   card one rank higher of any suit
//! - **Deal**: one face-up card onto each column, only when no column is empty
//! - **Sequences**: a King..Ace run of one suit is removed automatically for +100
//! - **Win**: eight completed sequences
//!
//! # Example
//!
//! ```
//! use spider_solitaire_core::GameSession;
//! use spider_solitaire_types::Difficulty;
//!
//! let mut game = GameSession::new();
//! game.start_game_with_seed(Difficulty::OneSuit, 12345);
//!
//! assert_eq!(game.stock_len(), 50);
//! assert!(game.deal());
//! assert_eq!(game.moves(), 1);
//!
//! assert!(game.undo());
//! assert_eq!(game.stock_len(), 50);
//! ```

pub mod deck;
pub mod history;
pub mod moves;
pub mod saved;
pub mod scoring;
pub mod sequences;
pub mod session;
pub mod tableau;

pub use spider_solitaire_types as types;

// Re-export commonly used types for convenience
pub use deck::{build_deck, seeded_deck, shuffled_deck};
pub use history::{History, Snapshot};
pub use moves::{
    accepts, is_movable_run, legal_moves, movable_run_start, validate_move, IllegalMove,
};
pub use saved::{RestoreError, SavedGame};
pub use sequences::{find_complete_run, is_complete_run, Removal};
pub use session::{DealRefused, GameSession};
pub use tableau::{CompletedSequence, Tableau, TableauError};
