//! Game session - ties together tableau, rules, history and scoring
//!
//! A [`GameSession`] is one independent game. Every operation validates first and either
//! applies completely (including sequence detection and the history snapshot) or leaves
//! the session untouched and returns `false`.

use rand::Rng;
use thiserror::Error;
use tracing::{debug, info};

use crate::deck::{seeded_deck, shuffled_deck};
use crate::history::{History, Snapshot};
use crate::moves;
use crate::scoring;
use crate::sequences::remove_complete_runs;
use crate::tableau::Tableau;
use crate::types::{Card, Difficulty, GameCommand, GameEvent, Language, COLUMN_COUNT, DEAL_SIZE};

/// Why a deal was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealRefused {
    #[error("stock has {remaining} cards, a deal needs {}", DEAL_SIZE)]
    NotEnoughStock { remaining: usize },

    #[error("column {0} is empty")]
    EmptyColumn(usize),
}

/// Complete state of one game
#[derive(Debug, Clone)]
pub struct GameSession {
    tableau: Tableau,
    history: History,
    difficulty: Difficulty,
    /// Manual score changes on top of the base score for the completed sequences
    adjustment: i64,
    moves: u32,
    /// Whole seconds of play
    time_secs: u32,
    started: bool,
    complete: bool,
    sound_enabled: bool,
    language: Language,
    /// Events since the last drain (consumed by observers)
    events: Vec<GameEvent>,
}

impl GameSession {
    /// Create a session with no game in progress
    pub fn new() -> Self {
        Self {
            tableau: Tableau::new(),
            history: History::default(),
            difficulty: Difficulty::default(),
            adjustment: 0,
            moves: 0,
            time_secs: 0,
            started: false,
            complete: false,
            sound_enabled: true,
            language: Language::default(),
            events: Vec::new(),
        }
    }

    /// Shuffle a fresh deck with `rng` and deal a new game
    pub fn start_game<R: Rng + ?Sized>(&mut self, difficulty: Difficulty, rng: &mut R) {
        self.start_with_deck(difficulty, shuffled_deck(difficulty, rng));
    }

    /// Deal a new game from a seeded shuffle
    pub fn start_game_with_seed(&mut self, difficulty: Difficulty, seed: u64) {
        self.start_with_deck(difficulty, seeded_deck(difficulty, seed));
    }

    /// Deal a new game from an already ordered deck
    pub fn start_with_deck(&mut self, difficulty: Difficulty, deck: Vec<Card>) {
        self.tableau = Tableau::deal_layout(deck);
        self.difficulty = difficulty;
        self.adjustment = 0;
        self.moves = 0;
        self.time_secs = 0;
        self.started = true;
        self.complete = false;
        let snapshot = self.snapshot();
        self.history.reset(snapshot);
        self.events.clear();
        self.events.push(GameEvent::Started(difficulty));

        info!(
            suits = difficulty.suit_count(),
            stock = self.tableau.stock_len(),
            "new game dealt"
        );
    }

    /// Move the run starting at `index` of column `from` onto column `to`.
    ///
    /// Returns false (and changes nothing) if the move is illegal.
    pub fn move_cards(&mut self, from: usize, index: usize, to: usize) -> bool {
        let outcome = match moves::apply_move(&mut self.tableau, from, index, to) {
            Ok(outcome) => outcome,
            Err(reason) => {
                debug!(from, index, to, %reason, "move rejected");
                return false;
            }
        };

        self.moves += 1;
        self.events.push(GameEvent::CardsMoved {
            from,
            to,
            count: outcome.count,
        });
        if outcome.revealed {
            self.events.push(GameEvent::CardRevealed { column: from });
        }

        self.settle();
        let snapshot = self.snapshot();
        self.history.record(snapshot);
        true
    }

    /// Check whether a deal is currently allowed
    pub fn check_deal(&self) -> Result<(), DealRefused> {
        let remaining = self.tableau.stock_len();
        if remaining < DEAL_SIZE {
            return Err(DealRefused::NotEnoughStock { remaining });
        }
        if let Some(col) = self.tableau.columns().iter().position(Vec::is_empty) {
            return Err(DealRefused::EmptyColumn(col));
        }
        Ok(())
    }

    pub fn can_deal(&self) -> bool {
        self.check_deal().is_ok()
    }

    /// Deal one face-up card from the stock onto every column, left to right.
    ///
    /// Refused as a whole when the stock is short or any column is empty.
    pub fn deal(&mut self) -> bool {
        if let Err(reason) = self.check_deal() {
            debug!(%reason, "deal refused");
            return false;
        }

        for col in 0..COLUMN_COUNT {
            let Some(mut card) = self.tableau.pop_stock() else {
                break;
            };
            card.face_up = true;
            self.tableau.column_mut(col).push(card);
        }

        self.moves += 1;
        self.events.push(GameEvent::Dealt);
        debug!(stock = self.tableau.stock_len(), "dealt a row");

        self.settle();
        let snapshot = self.snapshot();
        self.history.record(snapshot);
        true
    }

    /// Step back one snapshot. Returns false if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo().cloned() else {
            return false;
        };
        self.restore(snapshot);
        self.events.push(GameEvent::Undone);
        true
    }

    /// Step forward one snapshot. Returns false if there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo().cloned() else {
            return false;
        };
        self.restore(snapshot);
        self.events.push(GameEvent::Redone);
        true
    }

    /// Abandon the current game. Sound and language preferences are kept.
    pub fn reset(&mut self) {
        let sound_enabled = self.sound_enabled;
        let language = self.language;
        *self = Self::new();
        self.sound_enabled = sound_enabled;
        self.language = language;
    }

    /// Count one second of play. Ignored before start and after the win.
    pub fn increment_time(&mut self) -> bool {
        if !self.started || self.complete {
            return false;
        }
        self.time_secs = self.time_secs.saturating_add(1);
        true
    }

    /// Flip the sound flag and return the new value
    pub fn toggle_sound(&mut self) -> bool {
        self.sound_enabled = !self.sound_enabled;
        self.sound_enabled
    }

    /// Set the language from a code. Unknown codes are ignored.
    pub fn set_language(&mut self, code: &str) -> bool {
        match Language::from_code(code) {
            Some(language) => {
                self.language = language;
                true
            }
            None => {
                debug!(code, "unknown language code");
                false
            }
        }
    }

    pub fn set_language_to(&mut self, language: Language) {
        self.language = language;
    }

    /// Add a signed adjustment to the score (floored at zero).
    ///
    /// Adjustments are kept apart from the sequence bonuses, so undo and redo leave them
    /// in place.
    pub fn update_score(&mut self, points: i64) {
        let target = scoring::apply_delta(self.score(), points);
        self.adjustment = scoring::adjustment_for(self.completed_count(), target);
    }

    /// Apply a command. Returns whether it was accepted.
    pub fn apply(&mut self, command: GameCommand) -> bool {
        match command {
            GameCommand::StartGame(difficulty) => {
                self.start_game(difficulty, &mut rand::thread_rng());
                true
            }
            GameCommand::Move { from, index, to } => self.move_cards(from, index, to),
            GameCommand::Deal => self.deal(),
            GameCommand::Undo => self.undo(),
            GameCommand::Redo => self.redo(),
            GameCommand::Reset => {
                self.reset();
                true
            }
            GameCommand::IncrementTime => self.increment_time(),
            GameCommand::ToggleSound => {
                self.toggle_sound();
                true
            }
            GameCommand::SetLanguage(language) => {
                self.set_language_to(language);
                true
            }
        }
    }

    /// Take the events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn tableau(&self) -> &Tableau {
        &self.tableau
    }

    pub fn columns(&self) -> &[Vec<Card>; COLUMN_COUNT] {
        self.tableau.columns()
    }

    pub fn stock_len(&self) -> usize {
        self.tableau.stock_len()
    }

    pub fn completed_count(&self) -> usize {
        self.tableau.completed_count()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn score(&self) -> u32 {
        scoring::score_for(self.completed_count(), self.adjustment)
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn time_secs(&self) -> u32 {
        self.time_secs
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn complete(&self) -> bool {
        self.complete
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Remove finished runs, award bonuses and check for the win
    fn settle(&mut self) {
        for removal in remove_complete_runs(&mut self.tableau) {
            self.events.push(GameEvent::SequenceCompleted {
                column: removal.column,
                suit: removal.suit,
            });
            if removal.revealed {
                self.events.push(GameEvent::CardRevealed {
                    column: removal.column,
                });
            }
            info!(
                column = removal.column,
                suit = removal.suit.as_str(),
                completed = self.tableau.completed_count(),
                "sequence completed"
            );
        }

        if !self.complete && scoring::is_won(self.tableau.completed_count()) {
            self.complete = true;
            self.events.push(GameEvent::Won);
            info!(
                score = self.score(),
                moves = self.moves,
                time = self.time_secs,
                "game won"
            );
        }
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            tableau: self.tableau.clone(),
            complete: self.complete,
        }
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.tableau = snapshot.tableau;
        self.complete = snapshot.complete;
    }

    /// Rebuild a session around a restored tableau with a one-entry history
    pub(crate) fn from_restored(
        tableau: Tableau,
        difficulty: Difficulty,
        score: u32,
        moves: u32,
        time_secs: u32,
        sound_enabled: bool,
        language: Language,
    ) -> Self {
        let completed = tableau.completed_count();
        let mut session = Self {
            tableau,
            history: History::default(),
            difficulty,
            adjustment: scoring::adjustment_for(completed, score),
            moves,
            time_secs,
            started: true,
            complete: scoring::is_won(completed),
            sound_enabled,
            language,
            events: Vec::new(),
        };
        let snapshot = session.snapshot();
        session.history.reset(snapshot);
        session
    }

    /// Mutable tableau access for rule tests
    #[cfg(test)]
    pub(crate) fn tableau_mut(&mut self) -> &mut Tableau {
        &mut self.tableau
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
