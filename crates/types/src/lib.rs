//! Core types shared across the application
//! This module contains pure data types and the Spider rule constants.

use serde::{Deserialize, Serialize};

/// Tableau dimensions
pub const COLUMN_COUNT: usize = 10;
pub const RANKS_PER_SUIT: u8 = 13;
pub const ACE: u8 = 1;
pub const KING: u8 = 13;

/// A completed sequence is a full King..Ace run of one suit
pub const RUN_LENGTH: usize = RANKS_PER_SUIT as usize;

/// Total cards in play regardless of difficulty
pub const DECK_SIZE: usize = 104;

/// Initial layout: the first four columns get one extra card
pub const TALL_COLUMNS: usize = 4;
pub const TALL_COLUMN_CARDS: usize = 6;
pub const SHORT_COLUMN_CARDS: usize = 5;
pub const INITIAL_LAYOUT_CARDS: usize =
    TALL_COLUMNS * TALL_COLUMN_CARDS + (COLUMN_COUNT - TALL_COLUMNS) * SHORT_COLUMN_CARDS;

/// One card per column on every deal
pub const DEAL_SIZE: usize = COLUMN_COUNT;

/// Scoring (no move penalty)
pub const INITIAL_SCORE: u32 = 500;
pub const SEQUENCE_BONUS: u32 = 100;
pub const SEQUENCES_TO_WIN: usize = DECK_SIZE / RUN_LENGTH;

/// Card suits in canonical order. Difficulty `n` plays with the first `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub const CANONICAL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    pub fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }

    /// Single-glyph symbol for terminal rendering
    pub fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Suit::Spades => "spades",
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
        }
    }
}

/// A playing card.
///
/// Cards are plain values: the face-up flag is flipped on the copy that lives in the
/// tableau, so a snapshot taken earlier never observes the change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Unique within one deal of 104 cards
    pub id: u16,
    pub suit: Suit,
    /// 1 (Ace) through 13 (King)
    pub rank: u8,
    pub face_up: bool,
}

impl Card {
    pub fn new(id: u16, suit: Suit, rank: u8) -> Self {
        Self {
            id,
            suit,
            rank,
            face_up: false,
        }
    }

    pub fn face_up(mut self) -> Self {
        self.face_up = true;
        self
    }

    /// `true` when `next` may sit directly on top of `self` inside a movable run
    pub fn continues_run(&self, next: &Card) -> bool {
        self.face_up && next.face_up && self.suit == next.suit && self.rank == next.rank + 1
    }

    /// Short rank label: A, 2..10, J, Q, K
    pub fn rank_label(&self) -> &'static str {
        match self.rank {
            1 => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            13 => "K",
            _ => "?",
        }
    }
}

/// Number of distinct suits in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Difficulty {
    #[default]
    OneSuit,
    TwoSuits,
    FourSuits,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::OneSuit,
        Difficulty::TwoSuits,
        Difficulty::FourSuits,
    ];

    pub fn suit_count(self) -> u8 {
        match self {
            Difficulty::OneSuit => 1,
            Difficulty::TwoSuits => 2,
            Difficulty::FourSuits => 4,
        }
    }

    pub fn from_suit_count(count: u8) -> Option<Self> {
        match count {
            1 => Some(Difficulty::OneSuit),
            2 => Some(Difficulty::TwoSuits),
            4 => Some(Difficulty::FourSuits),
            _ => None,
        }
    }

    /// Suits in play for this difficulty
    pub fn suits(self) -> &'static [Suit] {
        &Suit::CANONICAL[..self.suit_count() as usize]
    }

    /// Full copies of the suit subset needed to reach 104 cards
    pub fn deck_copies(self) -> usize {
        let per_copy = RUN_LENGTH * self.suit_count() as usize;
        DECK_SIZE.div_ceil(per_copy)
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Difficulty::from_suit_count(value)
            .ok_or_else(|| format!("unsupported suit count {value}, expected 1, 2 or 4"))
    }
}

impl From<Difficulty> for u8 {
    fn from(value: Difficulty) -> Self {
        value.suit_count()
    }
}

/// UI language. The engine only stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Language {
    #[default]
    En,
    Es,
    Zh,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Es, Language::Zh];

    /// Parse from a language code (case-insensitive)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "en" => Some(Language::En),
            "es" => Some(Language::Es),
            "zh" => Some(Language::Zh),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Zh => "zh",
        }
    }

    /// Next language in menu order, wrapping around
    pub fn next(self) -> Self {
        match self {
            Language::En => Language::Es,
            Language::Es => Language::Zh,
            Language::Zh => Language::En,
        }
    }
}

impl TryFrom<String> for Language {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Language::from_code(&value).ok_or_else(|| format!("unknown language code {value:?}"))
    }
}

impl From<Language> for String {
    fn from(value: Language) -> Self {
        value.code().to_string()
    }
}

/// Operations a caller can request from a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    StartGame(Difficulty),
    Move {
        from: usize,
        index: usize,
        to: usize,
    },
    Deal,
    Undo,
    Redo,
    Reset,
    IncrementTime,
    ToggleSound,
    SetLanguage(Language),
}

impl GameCommand {
    /// Whether an accepted command changes the persisted game record
    pub fn is_persistent(&self) -> bool {
        !matches!(self, GameCommand::IncrementTime)
    }
}

/// Events emitted by accepted operations (consumed by observers such as sound cues).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Started(Difficulty),
    CardsMoved { from: usize, to: usize, count: usize },
    CardRevealed { column: usize },
    Dealt,
    SequenceCompleted { column: usize, suit: Suit },
    Won,
    Undone,
    Redone,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_constants() {
        assert_eq!(INITIAL_LAYOUT_CARDS, 54);
        assert_eq!(SEQUENCES_TO_WIN, 8);
        assert_eq!(DECK_SIZE - INITIAL_LAYOUT_CARDS, 50);
    }

    #[test]
    fn test_difficulty_suits_and_copies() {
        assert_eq!(Difficulty::OneSuit.suits(), &[Suit::Spades]);
        assert_eq!(Difficulty::TwoSuits.suits(), &[Suit::Spades, Suit::Hearts]);
        assert_eq!(Difficulty::FourSuits.suits().len(), 4);

        assert_eq!(Difficulty::OneSuit.deck_copies(), 8);
        assert_eq!(Difficulty::TwoSuits.deck_copies(), 4);
        assert_eq!(Difficulty::FourSuits.deck_copies(), 2);
    }

    #[test]
    fn test_difficulty_from_suit_count() {
        assert_eq!(Difficulty::from_suit_count(2), Some(Difficulty::TwoSuits));
        assert_eq!(Difficulty::from_suit_count(3), None);
        assert_eq!(Difficulty::from_suit_count(0), None);
    }

    #[test]
    fn test_difficulty_serializes_as_suit_count() {
        let json = serde_json::to_string(&Difficulty::FourSuits).unwrap();
        assert_eq!(json, "4");
        let back: Difficulty = serde_json::from_str("2").unwrap();
        assert_eq!(back, Difficulty::TwoSuits);
        assert!(serde_json::from_str::<Difficulty>("3").is_err());
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::from_code("ES"), Some(Language::Es));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::Zh.next(), Language::En);

        let json = serde_json::to_string(&Language::Zh).unwrap();
        assert_eq!(json, "\"zh\"");
        assert!(serde_json::from_str::<Language>("\"xx\"").is_err());
    }

    #[test]
    fn test_card_continues_run() {
        let seven = Card::new(0, Suit::Hearts, 7).face_up();
        let six = Card::new(1, Suit::Hearts, 6).face_up();
        let six_spades = Card::new(2, Suit::Spades, 6).face_up();

        assert!(seven.continues_run(&six));
        assert!(!seven.continues_run(&six_spades));
        assert!(!six.continues_run(&seven));
        assert!(!seven.continues_run(&Card::new(3, Suit::Hearts, 6)));
    }

    #[test]
    fn test_card_serializes_camel_case() {
        let card = Card::new(7, Suit::Clubs, 12).face_up();
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, r#"{"id":7,"suit":"clubs","rank":12,"faceUp":true}"#);
    }
}
