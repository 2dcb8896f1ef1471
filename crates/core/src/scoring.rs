//! Scoring module - score, bonuses and the win condition
//!
//! Spider scoring here is simple: 500 to start, +100 per completed sequence, nothing taken
//! off for moves. A session keeps its manual adjustments apart from that base, so the
//! score can always be rebuilt from the completed count. The total floors at zero.

use crate::types::{INITIAL_SCORE, SEQUENCES_TO_WIN, SEQUENCE_BONUS};

/// Bonus for `completed` sequences found in one detection pass
pub fn sequence_bonus(completed: usize) -> u32 {
    SEQUENCE_BONUS.saturating_mul(completed as u32)
}

/// Apply a signed adjustment, never going below zero
pub fn apply_delta(score: u32, points: i64) -> u32 {
    let next = i64::from(score).saturating_add(points);
    next.clamp(0, i64::from(u32::MAX)) as u32
}

/// Score a game would have with `completed` sequences and no manual adjustments
pub fn expected_score(completed: usize) -> u32 {
    INITIAL_SCORE.saturating_add(sequence_bonus(completed))
}

/// Score with `completed` sequences plus a manual `adjustment`
pub fn score_for(completed: usize, adjustment: i64) -> u32 {
    apply_delta(expected_score(completed), adjustment)
}

/// Adjustment that makes `score_for(completed, _)` come out at `score`
pub fn adjustment_for(completed: usize, score: u32) -> i64 {
    i64::from(score) - i64::from(expected_score(completed))
}

/// The game is won once exactly eight sequences are complete
pub fn is_won(completed: usize) -> bool {
    completed == SEQUENCES_TO_WIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_bonus() {
        assert_eq!(sequence_bonus(0), 0);
        assert_eq!(sequence_bonus(1), 100);
        assert_eq!(sequence_bonus(3), 300);
    }

    #[test]
    fn test_apply_delta_clamps_at_zero() {
        assert_eq!(apply_delta(500, 100), 600);
        assert_eq!(apply_delta(500, -200), 300);
        assert_eq!(apply_delta(50, -200), 0);
        assert_eq!(apply_delta(u32::MAX, 1), u32::MAX);
    }

    #[test]
    fn test_expected_score() {
        assert_eq!(expected_score(0), 500);
        assert_eq!(expected_score(8), 1300);
    }

    #[test]
    fn test_adjustment_round_trips_through_score() {
        assert_eq!(score_for(2, 0), 700);
        assert_eq!(score_for(0, -900), 0);
        for (completed, score) in [(0, 0), (0, 500), (3, 450), (8, 2000)] {
            assert_eq!(score_for(completed, adjustment_for(completed, score)), score);
        }
    }

    #[test]
    fn test_is_won() {
        assert!(!is_won(0));
        assert!(!is_won(7));
        assert!(is_won(8));
    }
}
