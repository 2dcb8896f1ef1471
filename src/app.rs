//! Application state for the terminal front end.
//!
//! [`App`] owns the game session, the cursor selection and the save store. It turns input
//! actions into engine commands, saves after accepted commands and reports which events
//! deserve an audible cue. It never touches the terminal, so it can be driven from tests.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::AppConfig;
use crate::core::GameSession;
use crate::input::{InputAction, Selection};
use crate::store::{resume_session, GameStore};
use crate::term::CursorView;
use crate::types::{GameCommand, GameEvent};

pub struct App {
    session: GameSession,
    selection: Selection,
    store: Box<dyn GameStore>,
    rng: StdRng,
    config: AppConfig,
    /// Events from the last accepted command(s), waiting for the caller
    pending: Vec<GameEvent>,
}

impl App {
    /// Resume whatever `store` holds, or deal a fresh game at the configured difficulty.
    pub fn new(config: AppConfig, store: Box<dyn GameStore>) -> Self {
        let resume = resume_session(store.as_ref());
        let resumed = resume.is_resumed();
        let mut session = resume.into_session();
        if let Some(language) = config.language {
            session.set_language_to(language);
        }

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut app = Self {
            session,
            selection: Selection::new(),
            store,
            rng,
            config,
            pending: Vec::new(),
        };

        if !resumed {
            let difficulty = app.config.difficulty;
            app.apply(GameCommand::StartGame(difficulty));
        }
        app
    }

    /// Resolve a key action through the selection and apply the resulting command.
    ///
    /// Returns whether a command was produced and accepted.
    pub fn handle(&mut self, action: InputAction) -> bool {
        match self.selection.handle(action, &self.session) {
            Some(command) => self.apply(command),
            None => false,
        }
    }

    /// Apply an engine command, autosaving if it was accepted.
    pub fn apply(&mut self, command: GameCommand) -> bool {
        let accepted = match command {
            GameCommand::StartGame(difficulty) => {
                self.session.start_game(difficulty, &mut self.rng);
                true
            }
            other => self.session.apply(other),
        };

        self.pending.extend(self.session.drain_events());
        if accepted && command.is_persistent() && self.config.autosave {
            self.save_quietly();
        }
        accepted
    }

    /// One second of wall-clock time passed
    pub fn tick(&mut self) -> bool {
        self.apply(GameCommand::IncrementTime)
    }

    /// Events since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending)
    }

    /// Whether the terminal should beep for these events
    pub fn wants_cue(&self, events: &[GameEvent]) -> bool {
        self.session.sound_enabled() && events.iter().any(|event| is_cued(*event))
    }

    /// Persist the current session.
    pub fn save(&self) -> crate::store::Result<()> {
        self.store.save_session(&self.session)
    }

    fn save_quietly(&self) {
        if let Err(err) = self.save() {
            tracing::warn!("Failed to save game: {err}");
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn cursor_view(&self) -> CursorView {
        CursorView {
            column: self.selection.cursor(),
            depth: self.selection.depth(),
            held: self.selection.held().map(|held| (held.column, held.index)),
        }
    }
}

/// Events that get a terminal bell
fn is_cued(event: GameEvent) -> bool {
    matches!(
        event,
        GameEvent::Dealt | GameEvent::SequenceCompleted { .. } | GameEvent::Won
    )
}
