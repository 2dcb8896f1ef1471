//! Shared builders for integration tests.
//!
//! Arbitrary table positions are built through the saved-game record, which is the only
//! public way to put a session into a chosen state.

#![allow(dead_code)]

use spider_solitaire::core::{build_deck, CompletedSequence, GameSession, SavedGame};
use spider_solitaire::types::{Card, Difficulty, Language, COLUMN_COUNT, KING};

/// A one-suit deck to draw specific ranks from.
pub struct Pool {
    cards: Vec<Card>,
}

impl Pool {
    pub fn one_suit() -> Self {
        Self {
            cards: build_deck(Difficulty::OneSuit),
        }
    }

    /// Remove a card of `rank`, face down
    pub fn take(&mut self, rank: u8) -> Card {
        let pos = self
            .cards
            .iter()
            .position(|card| card.rank == rank)
            .expect("rank available in pool");
        self.cards.remove(pos)
    }

    /// Face-up descending run from `high` down to `low`
    pub fn run(&mut self, high: u8, low: u8) -> Vec<Card> {
        (low..=high).rev().map(|rank| self.take(rank).face_up()).collect()
    }

    pub fn full_run(&mut self) -> Vec<Card> {
        self.run(KING, 1)
    }

    pub fn take_n(&mut self, n: usize) -> Vec<Card> {
        self.cards.drain(..n).collect()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Spread what is left face down over `columns`, turning each top card up
    pub fn spread_rest(&mut self, columns: &mut [Vec<Card>], targets: &[usize]) {
        for (i, card) in self.cards.drain(..).enumerate() {
            columns[targets[i % targets.len()]].push(card);
        }
        for &col in targets {
            if let Some(top) = columns[col].last_mut() {
                top.face_up = true;
            }
        }
    }
}

pub fn empty_columns() -> Vec<Vec<Card>> {
    vec![Vec::new(); COLUMN_COUNT]
}

/// Restore a started one-suit session from explicit parts
pub fn arranged(
    columns: Vec<Vec<Card>>,
    stock: Vec<Card>,
    completed: Vec<Vec<Card>>,
) -> GameSession {
    let completed: Vec<CompletedSequence> =
        serde_json::from_value(serde_json::to_value(&completed).unwrap()).unwrap();
    let score = 500 + 100 * completed.len() as u32;
    let saved = SavedGame {
        columns,
        stock_pile: stock,
        completed_sequences: completed,
        score,
        moves: 0,
        time: 0,
        started: true,
        difficulty: Difficulty::OneSuit,
        sound_enabled: true,
        language: Language::En,
    };
    GameSession::from_saved(saved).expect("arranged position is valid")
}

/// Column 0: face-up King..2. Column 1: a face-down 7 under a face-up Ace.
/// Everything else spread over columns 2..9, nothing in stock.
pub fn one_move_from_sequence() -> GameSession {
    let mut pool = Pool::one_suit();
    let mut columns = empty_columns();
    columns[0] = pool.run(KING, 2);
    let hidden = pool.take(7);
    let ace = pool.take(1).face_up();
    columns[1] = vec![hidden, ace];
    pool.spread_rest(&mut columns, &[2, 3, 4, 5, 6, 7, 8, 9]);
    arranged(columns, Vec::new(), Vec::new())
}

/// Seven sequences complete, the eighth one Ace away
pub fn one_move_from_win() -> GameSession {
    let mut pool = Pool::one_suit();
    let completed: Vec<Vec<Card>> = (0..7).map(|_| pool.full_run()).collect();
    let mut columns = empty_columns();
    columns[0] = pool.run(KING, 2);
    columns[1] = vec![pool.take(1).face_up()];
    assert_eq!(pool.len(), 0);
    arranged(columns, Vec::new(), completed)
}
