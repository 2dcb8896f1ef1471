//! Tableau module - the ten columns, the stock pile and the completed sequences
//!
//! Columns are stored bottom to top: the last card of a column is the accessible one.
//! The stock is dealt from its end. Everything here is plain owned data, so cloning a
//! tableau produces a fully independent copy.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{
    Card, Difficulty, Suit, ACE, COLUMN_COUNT, DECK_SIZE, KING, RUN_LENGTH, SHORT_COLUMN_CARDS,
    TALL_COLUMNS, TALL_COLUMN_CARDS,
};

/// A removed King..Ace run of one suit
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletedSequence {
    cards: Vec<Card>,
}

impl CompletedSequence {
    pub(crate) fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn suit(&self) -> Option<Suit> {
        self.cards.first().map(|card| card.suit)
    }
}

/// Invariant violations found by [`Tableau::validate`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableauError {
    #[error("expected {expected} cards in play, found {found}")]
    CardCount { expected: usize, found: usize },

    #[error("card {id} has rank {rank}, expected 1..=13")]
    InvalidRank { id: u16, rank: u8 },

    #[error("card {id} is {suit:?}, which is not played at {suit_count} suit(s)")]
    SuitNotInPlay { id: u16, suit: Suit, suit_count: u8 },

    #[error("card id {0} appears more than once")]
    DuplicateId(u16),

    #[error("stock card {0} is face up")]
    FaceUpInStock(u16),

    #[error("completed sequence {0} is not a King to Ace run of one suit")]
    InvalidSequence(usize),

    #[error("top card of column {0} is face down")]
    HiddenTop(usize),

    #[error("column {0} still holds a complete King to Ace run")]
    UnremovedRun(usize),
}

/// Columns, stock and completed sequences of one game
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Tableau {
    columns: [Vec<Card>; COLUMN_COUNT],
    stock: Vec<Card>,
    completed: Vec<CompletedSequence>,
}

impl Tableau {
    /// Create an empty tableau (no game in progress)
    pub fn new() -> Self {
        Self::default()
    }

    /// Lay out a shuffled deck: six cards in each of the first four columns, five in the
    /// rest, only the last card of each column face up. The remainder becomes the stock.
    pub fn deal_layout(deck: Vec<Card>) -> Self {
        let mut tableau = Self::new();
        let mut draw = deck.into_iter();

        for (col, column) in tableau.columns.iter_mut().enumerate() {
            let col_size = if col < TALL_COLUMNS {
                TALL_COLUMN_CARDS
            } else {
                SHORT_COLUMN_CARDS
            };
            for row in 0..col_size {
                let Some(mut card) = draw.next() else {
                    break;
                };
                card.face_up = row == col_size - 1;
                column.push(card);
            }
        }

        tableau.stock = draw
            .map(|mut card| {
                card.face_up = false;
                card
            })
            .collect();
        tableau
    }

    /// Reassemble a tableau from persisted parts (unchecked; call [`Tableau::validate`])
    pub fn from_parts(
        columns: [Vec<Card>; COLUMN_COUNT],
        stock: Vec<Card>,
        completed: Vec<CompletedSequence>,
    ) -> Self {
        Self {
            columns,
            stock,
            completed,
        }
    }

    pub fn columns(&self) -> &[Vec<Card>; COLUMN_COUNT] {
        &self.columns
    }

    /// Get a column by index. Returns None if out of range.
    pub fn column(&self, col: usize) -> Option<&[Card]> {
        self.columns.get(col).map(Vec::as_slice)
    }

    pub fn card(&self, col: usize, index: usize) -> Option<Card> {
        self.columns.get(col).and_then(|c| c.get(index)).copied()
    }

    pub fn top_card(&self, col: usize) -> Option<Card> {
        self.columns.get(col).and_then(|c| c.last()).copied()
    }

    pub fn stock(&self) -> &[Card] {
        &self.stock
    }

    pub fn stock_len(&self) -> usize {
        self.stock.len()
    }

    pub fn completed(&self) -> &[CompletedSequence] {
        &self.completed
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn has_empty_column(&self) -> bool {
        self.columns.iter().any(Vec::is_empty)
    }

    /// No cards anywhere: the state before a game starts
    pub fn is_empty(&self) -> bool {
        self.stock.is_empty() && self.completed.is_empty() && self.columns.iter().all(Vec::is_empty)
    }

    /// Cards in columns and stock plus 13 per completed sequence
    pub fn card_count(&self) -> usize {
        let in_columns: usize = self.columns.iter().map(Vec::len).sum();
        let in_sequences: usize = self.completed.iter().map(|s| s.cards.len()).sum();
        in_columns + self.stock.len() + in_sequences
    }

    /// Turn the top card of `col` face up. Returns true if a card was flipped.
    pub fn reveal_top(&mut self, col: usize) -> bool {
        match self.columns.get_mut(col).and_then(|c| c.last_mut()) {
            Some(card) if !card.face_up => {
                card.face_up = true;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn column_mut(&mut self, col: usize) -> &mut Vec<Card> {
        &mut self.columns[col]
    }

    pub(crate) fn pop_stock(&mut self) -> Option<Card> {
        self.stock.pop()
    }

    pub(crate) fn push_completed(&mut self, sequence: CompletedSequence) {
        self.completed.push(sequence);
    }

    /// Check the invariants every reachable game state satisfies
    pub fn validate(&self, difficulty: Difficulty) -> Result<(), TableauError> {
        let found = self.card_count();
        if found != DECK_SIZE {
            return Err(TableauError::CardCount {
                expected: DECK_SIZE,
                found,
            });
        }

        let suits = difficulty.suits();
        let mut seen = HashSet::with_capacity(DECK_SIZE);
        let all_cards = self
            .columns
            .iter()
            .flatten()
            .chain(self.stock.iter())
            .chain(self.completed.iter().flat_map(|s| s.cards.iter()));
        for card in all_cards {
            if !(ACE..=KING).contains(&card.rank) {
                return Err(TableauError::InvalidRank {
                    id: card.id,
                    rank: card.rank,
                });
            }
            if !suits.contains(&card.suit) {
                return Err(TableauError::SuitNotInPlay {
                    id: card.id,
                    suit: card.suit,
                    suit_count: difficulty.suit_count(),
                });
            }
            if !seen.insert(card.id) {
                return Err(TableauError::DuplicateId(card.id));
            }
        }

        if let Some(card) = self.stock.iter().find(|card| card.face_up) {
            return Err(TableauError::FaceUpInStock(card.id));
        }

        for (i, sequence) in self.completed.iter().enumerate() {
            if sequence.cards.len() != RUN_LENGTH
                || !crate::sequences::is_complete_run(&sequence.cards)
            {
                return Err(TableauError::InvalidSequence(i));
            }
        }

        for (col, column) in self.columns.iter().enumerate() {
            if column.last().is_some_and(|card| !card.face_up) {
                return Err(TableauError::HiddenTop(col));
            }
            if crate::sequences::find_complete_run(column).is_some() {
                return Err(TableauError::UnremovedRun(col));
            }
        }

        Ok(())
    }
}
