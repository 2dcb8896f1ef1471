//! Deck module - builds the 104-card Spider deck for a difficulty
//!
//! Every difficulty plays with 104 cards: eight copies of one suit, four copies of two
//! suits, or two full four-suit decks. Shuffling is a Fisher-Yates permutation driven by a
//! caller-supplied RNG, so seeded games are reproducible.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::types::{Card, Difficulty, DECK_SIZE, RANKS_PER_SUIT};

/// Build the unshuffled deck for `difficulty`.
///
/// Cards come out in copy, suit, rank order, all face down. Ids are assigned in that order
/// and are unique within the deck.
pub fn build_deck(difficulty: Difficulty) -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);

    for _ in 0..difficulty.deck_copies() {
        for &suit in difficulty.suits() {
            for rank in 1..=RANKS_PER_SUIT {
                let id = deck.len() as u16;
                deck.push(Card::new(id, suit, rank));
            }
        }
    }

    // Whole copies can only overshoot for suit counts that do not divide 104.
    deck.truncate(DECK_SIZE);
    deck
}

/// Build and shuffle a deck using `rng`
pub fn shuffled_deck<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Vec<Card> {
    let mut deck = build_deck(difficulty);
    deck.shuffle(rng);
    deck
}

/// Build and shuffle a deck from a fixed seed
pub fn seeded_deck(difficulty: Difficulty, seed: u64) -> Vec<Card> {
    let mut rng = StdRng::seed_from_u64(seed);
    shuffled_deck(difficulty, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Suit;
    use std::collections::{HashMap, HashSet};

    #[test]
    fn test_every_difficulty_builds_104_cards() {
        for difficulty in Difficulty::ALL {
            let deck = build_deck(difficulty);
            assert_eq!(deck.len(), DECK_SIZE, "{difficulty:?}");
            assert!(deck.iter().all(|card| !card.face_up));
        }
    }

    #[test]
    fn test_suit_distribution() {
        let count_suits = |deck: &[Card]| {
            let mut counts: HashMap<Suit, usize> = HashMap::new();
            for card in deck {
                *counts.entry(card.suit).or_default() += 1;
            }
            counts
        };

        let one = count_suits(&build_deck(Difficulty::OneSuit));
        assert_eq!(one.len(), 1);
        assert_eq!(one[&Suit::Spades], 104);

        let two = count_suits(&build_deck(Difficulty::TwoSuits));
        assert_eq!(two[&Suit::Spades], 52);
        assert_eq!(two[&Suit::Hearts], 52);

        let four = count_suits(&build_deck(Difficulty::FourSuits));
        assert!(four.values().all(|&n| n == 26));
    }

    #[test]
    fn test_each_rank_appears_eight_times_per_difficulty() {
        for difficulty in Difficulty::ALL {
            let deck = build_deck(difficulty);
            for rank in 1..=RANKS_PER_SUIT {
                let n = deck.iter().filter(|card| card.rank == rank).count();
                assert_eq!(n, 8, "rank {rank} in {difficulty:?}");
            }
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let deck = build_deck(Difficulty::FourSuits);
        let ids: HashSet<u16> = deck.iter().map(|card| card.id).collect();
        assert_eq!(ids.len(), DECK_SIZE);
    }

    #[test]
    fn test_seeded_deck_is_deterministic() {
        let a = seeded_deck(Difficulty::TwoSuits, 42);
        let b = seeded_deck(Difficulty::TwoSuits, 42);
        let c = seeded_deck(Difficulty::TwoSuits, 43);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut shuffled = seeded_deck(Difficulty::FourSuits, 7);
        assert_ne!(shuffled, build_deck(Difficulty::FourSuits));
        shuffled.sort_by_key(|card| card.id);
        assert_eq!(shuffled, build_deck(Difficulty::FourSuits));
    }
}
