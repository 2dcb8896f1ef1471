//! Column cursor and pick/drop selection.
//!
//! The player moves a cursor across the ten columns, widens the selection up the column
//! while the cards still form a movable run, picks the run up, moves the cursor to the
//! destination and drops it. A drop becomes a [`GameCommand::Move`]; the engine decides
//! whether it is legal.

use crate::core::{movable_run_start, GameSession};
use crate::map::InputAction;
use crate::types::{GameCommand, COLUMN_COUNT};

/// A run that has been picked up and is waiting for a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Held {
    pub column: usize,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    cursor: usize,
    /// Cards selected from the top of the cursor column (at least one)
    depth: usize,
    held: Option<Held>,
}

impl Default for Selection {
    fn default() -> Self {
        Self::new()
    }
}

impl Selection {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            depth: 1,
            held: None,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn held(&self) -> Option<Held> {
        self.held
    }

    /// Index of the first selected card in the cursor column, if the column has cards
    pub fn selected_index(&self, session: &GameSession) -> Option<usize> {
        let len = session.columns()[self.cursor].len();
        (len > 0).then(|| len.saturating_sub(self.depth))
    }

    /// Forget any held run and shrink the selection back to one card
    pub fn clear(&mut self) {
        self.held = None;
        self.depth = 1;
    }

    /// Resolve an input action against the current table.
    ///
    /// Returns the engine command to apply, if the action produced one.
    pub fn handle(&mut self, action: InputAction, session: &GameSession) -> Option<GameCommand> {
        self.clamp(session);

        match action {
            InputAction::CursorLeft => {
                self.cursor = (self.cursor + COLUMN_COUNT - 1) % COLUMN_COUNT;
                self.depth = 1;
                None
            }
            InputAction::CursorRight => {
                self.cursor = (self.cursor + 1) % COLUMN_COUNT;
                self.depth = 1;
                None
            }
            InputAction::Deeper => {
                if self.held.is_none() {
                    self.depth = (self.depth + 1).min(self.max_depth(session));
                }
                None
            }
            InputAction::Shallower => {
                if self.held.is_none() {
                    self.depth = self.depth.saturating_sub(1).max(1);
                }
                None
            }
            InputAction::Select => self.select(session),
            InputAction::Cancel => {
                self.clear();
                None
            }
            InputAction::Deal => self.issue(GameCommand::Deal),
            InputAction::Undo => self.issue(GameCommand::Undo),
            InputAction::Redo => self.issue(GameCommand::Redo),
            InputAction::NewGame(difficulty) => self.issue(GameCommand::StartGame(difficulty)),
            InputAction::Reset => self.issue(GameCommand::Reset),
            InputAction::ToggleSound => Some(GameCommand::ToggleSound),
            InputAction::CycleLanguage => Some(GameCommand::SetLanguage(session.language().next())),
        }
    }

    fn select(&mut self, session: &GameSession) -> Option<GameCommand> {
        match self.held {
            None => {
                let index = self.selected_index(session)?;
                if session.started() && index >= self.run_start(session)? {
                    self.held = Some(Held {
                        column: self.cursor,
                        index,
                    });
                }
                None
            }
            Some(held) if held.column == self.cursor => {
                self.clear();
                None
            }
            Some(held) => {
                self.clear();
                Some(GameCommand::Move {
                    from: held.column,
                    index: held.index,
                    to: self.cursor,
                })
            }
        }
    }

    fn issue(&mut self, command: GameCommand) -> Option<GameCommand> {
        self.clear();
        Some(command)
    }

    fn run_start(&self, session: &GameSession) -> Option<usize> {
        movable_run_start(&session.columns()[self.cursor])
    }

    fn max_depth(&self, session: &GameSession) -> usize {
        let column = &session.columns()[self.cursor];
        match self.run_start(session) {
            Some(start) => column.len() - start,
            None => 1,
        }
    }

    /// Keep the selection valid after the table changed underneath it
    fn clamp(&mut self, session: &GameSession) {
        if self.held.is_none() {
            self.depth = self.depth.clamp(1, self.max_depth(session));
        }
    }
}
