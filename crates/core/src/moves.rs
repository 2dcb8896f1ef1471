//! Move validation - column-to-column run transfers
//!
//! A run may leave its column when every card from the picked index to the top is face up,
//! of one suit, and descends by exactly one rank. It may land on an empty column or on a
//! card exactly one rank higher than the run's first card, whatever that card's suit.

use thiserror::Error;

use crate::tableau::Tableau;
use crate::types::{Card, COLUMN_COUNT};

/// Why a move was refused. Only used for diagnostics; callers see a plain rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("source and destination are both column {0}")]
    SameColumn(usize),

    #[error("column {0} does not exist")]
    NoSuchColumn(usize),

    #[error("column {column} has no card at index {index}")]
    NoSuchCard { column: usize, index: usize },

    #[error("card {index} of column {column} is face down")]
    FaceDown { column: usize, index: usize },

    #[error("cards from index {index} of column {column} do not form a same-suit descending run")]
    BrokenRun { column: usize, index: usize },

    #[error("column {column} cannot take a run starting at rank {rank}")]
    Blocked { column: usize, rank: u8 },
}

/// Result of an applied move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Number of cards transferred
    pub count: usize,
    /// Whether the source column's new top card was turned face up
    pub revealed: bool,
}

/// Check that `cards` (bottom to top) is a movable run: all face up, one suit, each card
/// one rank below the card beneath it. A single face-up card is a run.
pub fn is_movable_run(cards: &[Card]) -> bool {
    match cards.first() {
        None => false,
        Some(first) => {
            first.face_up && cards.windows(2).all(|pair| pair[0].continues_run(&pair[1]))
        }
    }
}

/// `true` if a run whose first card is `lead` may be placed on `destination`
pub fn accepts(destination: &[Card], lead: &Card) -> bool {
    match destination.last() {
        None => true,
        Some(top) => top.face_up && top.rank == lead.rank + 1,
    }
}

/// Index of the deepest card in `column` that starts a movable run reaching the top
pub fn movable_run_start(column: &[Card]) -> Option<usize> {
    let top = column.last()?;
    if !top.face_up {
        return None;
    }
    let mut start = column.len() - 1;
    while start > 0 && column[start - 1].continues_run(&column[start]) {
        start -= 1;
    }
    Some(start)
}

/// Validate a move without applying it. Returns the number of cards that would move.
pub fn validate_move(
    tableau: &Tableau,
    from: usize,
    index: usize,
    to: usize,
) -> Result<usize, IllegalMove> {
    if from == to {
        return Err(IllegalMove::SameColumn(from));
    }
    let source = tableau.column(from).ok_or(IllegalMove::NoSuchColumn(from))?;
    let destination = tableau.column(to).ok_or(IllegalMove::NoSuchColumn(to))?;

    let lead = source.get(index).ok_or(IllegalMove::NoSuchCard {
        column: from,
        index,
    })?;
    if !lead.face_up {
        return Err(IllegalMove::FaceDown {
            column: from,
            index,
        });
    }

    let run = &source[index..];
    if !is_movable_run(run) {
        return Err(IllegalMove::BrokenRun {
            column: from,
            index,
        });
    }

    if !accepts(destination, lead) {
        return Err(IllegalMove::Blocked {
            column: to,
            rank: lead.rank,
        });
    }

    Ok(run.len())
}

/// Validate and apply a move. On error the tableau is untouched.
pub(crate) fn apply_move(
    tableau: &mut Tableau,
    from: usize,
    index: usize,
    to: usize,
) -> Result<MoveOutcome, IllegalMove> {
    let count = validate_move(tableau, from, index, to)?;

    let moved = tableau.column_mut(from).split_off(index);
    tableau.column_mut(to).extend(moved);
    let revealed = tableau.reveal_top(from);

    Ok(MoveOutcome { count, revealed })
}

/// Every legal (from, index, to) triple, using the deepest movable start of each column.
///
/// Shorter runs from the same column are also legal; this lists the canonical one only.
pub fn legal_moves(tableau: &Tableau) -> Vec<(usize, usize, usize)> {
    let mut moves = Vec::new();
    for from in 0..COLUMN_COUNT {
        let Some(source) = tableau.column(from) else {
            continue;
        };
        let Some(start) = movable_run_start(source) else {
            continue;
        };
        for to in 0..COLUMN_COUNT {
            if validate_move(tableau, from, start, to).is_ok() {
                moves.push((from, start, to));
            }
        }
    }
    moves
}
