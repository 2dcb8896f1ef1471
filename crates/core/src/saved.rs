//! Saved game record - what survives a restart
//!
//! The record holds the tableau, the tallies and the player's preferences. Undo history
//! is deliberately left out: a restored session starts with a single history entry.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::session::GameSession;
use crate::tableau::{CompletedSequence, Tableau, TableauError};
use crate::types::{Card, Difficulty, Language, COLUMN_COUNT};

/// Persisted form of a [`GameSession`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedGame {
    pub columns: Vec<Vec<Card>>,
    pub stock_pile: Vec<Card>,
    pub completed_sequences: Vec<CompletedSequence>,
    pub score: u32,
    pub moves: u32,
    pub time: u32,
    #[serde(rename = "isGameStarted")]
    pub started: bool,
    pub difficulty: Difficulty,
    pub sound_enabled: bool,
    pub language: Language,
}

/// Reasons a saved record cannot become a session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RestoreError {
    #[error("expected {} columns, found {}", COLUMN_COUNT, .0)]
    ColumnCount(usize),

    #[error("invalid tableau: {0}")]
    Tableau(#[from] TableauError),
}

impl SavedGame {
    /// Worth offering to resume: a started game with cards still on the table
    pub fn is_resumable(&self) -> bool {
        self.started && self.columns.iter().any(|column| !column.is_empty())
    }

    /// Rebuild a session.
    ///
    /// A record that was never started only carries preferences. A started record must
    /// describe a reachable tableau, otherwise the whole record is refused.
    pub fn into_session(self) -> Result<GameSession, RestoreError> {
        if !self.started {
            let mut session = GameSession::new();
            if self.sound_enabled != session.sound_enabled() {
                session.toggle_sound();
            }
            session.set_language_to(self.language);
            return Ok(session);
        }

        let found = self.columns.len();
        let columns: [Vec<Card>; COLUMN_COUNT] = self
            .columns
            .try_into()
            .map_err(|_| RestoreError::ColumnCount(found))?;
        let tableau = Tableau::from_parts(columns, self.stock_pile, self.completed_sequences);
        tableau.validate(self.difficulty)?;

        Ok(GameSession::from_restored(
            tableau,
            self.difficulty,
            self.score,
            self.moves,
            self.time,
            self.sound_enabled,
            self.language,
        ))
    }
}

impl GameSession {
    /// Capture the persisted record for this session
    pub fn to_saved(&self) -> SavedGame {
        let tableau = self.tableau();
        SavedGame {
            columns: tableau.columns().to_vec(),
            stock_pile: tableau.stock().to_vec(),
            completed_sequences: tableau.completed().to_vec(),
            score: self.score(),
            moves: self.moves(),
            time: self.time_secs(),
            started: self.started(),
            difficulty: self.difficulty(),
            sound_enabled: self.sound_enabled(),
            language: self.language(),
        }
    }

    /// Restore a session from a persisted record
    pub fn from_saved(saved: SavedGame) -> Result<Self, RestoreError> {
        saved.into_session()
    }
}
