//! Sequence detection - removes completed King..Ace runs from the tableau
//!
//! A pass looks at every column once. Within a column the scan starts at the highest
//! possible start index (`len - 13`) and walks down, so the most recently built run is
//! found first. At most one run is removed per column per pass.

use arrayvec::ArrayVec;

use crate::tableau::{CompletedSequence, Tableau};
use crate::types::{Card, Suit, ACE, COLUMN_COUNT, KING, RUN_LENGTH};

/// One run removed during a detection pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Removal {
    pub column: usize,
    pub suit: Suit,
    /// The card left on top of the column was face down and has been turned up
    pub revealed: bool,
}

/// `true` if `cards` is exactly a face-up King..Ace run of one suit
pub fn is_complete_run(cards: &[Card]) -> bool {
    cards.len() == RUN_LENGTH
        && cards[0].rank == KING
        && cards[RUN_LENGTH - 1].rank == ACE
        && cards[0].face_up
        && cards.windows(2).all(|pair| pair[0].continues_run(&pair[1]))
}

/// Start index of a complete run in `column`, preferring the highest start
pub fn find_complete_run(column: &[Card]) -> Option<usize> {
    if column.len() < RUN_LENGTH {
        return None;
    }
    (0..=column.len() - RUN_LENGTH)
        .rev()
        .find(|&start| is_complete_run(&column[start..start + RUN_LENGTH]))
}

/// Run one detection pass over every column.
///
/// Each removed slice is appended to the tableau's completed sequences and the cards on
/// either side of it are joined back together. Returns what was removed, in column order.
pub fn remove_complete_runs(tableau: &mut Tableau) -> ArrayVec<Removal, COLUMN_COUNT> {
    let mut removals = ArrayVec::new();

    for col in 0..COLUMN_COUNT {
        let Some(start) = tableau.column(col).and_then(find_complete_run) else {
            continue;
        };

        let column = tableau.column_mut(col);
        let run: Vec<Card> = column.drain(start..start + RUN_LENGTH).collect();
        let suit = run[0].suit;
        tableau.push_completed(CompletedSequence::new(run));
        let revealed = tableau.reveal_top(col);

        removals.push(Removal {
            column: col,
            suit,
            revealed,
        });
    }

    removals
}
