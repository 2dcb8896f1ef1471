//! Persistence for saved games.
//!
//! A store holds a single [`SavedGame`]. The engine itself never touches storage: the
//! front end saves after accepted commands and calls [`resume_session`] at startup.

mod error;
mod file;
mod memory;

pub use error::{Result, StoreError};
pub use file::{FileGameStore, SAVE_VERSION};
pub use memory::MemoryGameStore;

use spider_solitaire_core::{GameSession, SavedGame};

/// Contract for saving and loading the one in-progress game
pub trait GameStore: Send + Sync {
    /// Load the saved game, `None` if nothing was saved
    fn load(&self) -> Result<Option<SavedGame>>;

    /// Replace the saved game
    fn save(&self, saved: &SavedGame) -> Result<()>;

    /// Forget the saved game
    fn clear(&self) -> Result<()>;

    /// Save the current state of `session`
    fn save_session(&self, session: &GameSession) -> Result<()> {
        self.save(&session.to_saved())
    }
}

/// What a startup load produced
#[derive(Debug)]
pub enum Resume {
    /// A started game was restored
    Resumed(GameSession),
    /// Nothing worth resuming. Preferences from the record (if any) are applied.
    Fresh(GameSession),
}

impl Resume {
    pub fn into_session(self) -> GameSession {
        match self {
            Resume::Resumed(session) | Resume::Fresh(session) => session,
        }
    }

    pub fn is_resumed(&self) -> bool {
        matches!(self, Resume::Resumed(_))
    }
}

/// Load whatever `store` holds and turn it into a session.
///
/// Unreadable or invalid saves are logged and replaced by a fresh session; they never
/// stop the game from starting.
pub fn resume_session(store: &dyn GameStore) -> Resume {
    let saved = match store.load() {
        Ok(Some(saved)) => saved,
        Ok(None) => return Resume::Fresh(GameSession::new()),
        Err(err) => {
            tracing::warn!("Ignoring unreadable saved game: {err}");
            return Resume::Fresh(GameSession::new());
        }
    };

    let resumable = saved.is_resumable();
    match saved.into_session() {
        Ok(session) if resumable => {
            tracing::info!(
                moves = session.moves(),
                completed = session.completed_count(),
                "Resumed saved game"
            );
            Resume::Resumed(session)
        }
        Ok(session) => {
            // Started flag off or an empty table: keep preferences, deal fresh later.
            let mut fresh = GameSession::new();
            if fresh.sound_enabled() != session.sound_enabled() {
                fresh.toggle_sound();
            }
            fresh.set_language_to(session.language());
            Resume::Fresh(fresh)
        }
        Err(err) => {
            tracing::warn!("Ignoring invalid saved game: {err}");
            Resume::Fresh(GameSession::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spider_solitaire_types::{Difficulty, Language};

    fn playing() -> GameSession {
        let mut session = GameSession::new();
        session.start_game_with_seed(Difficulty::TwoSuits, 5);
        session.deal();
        session
    }

    #[test]
    fn test_empty_store_starts_fresh() {
        let resume = resume_session(&MemoryGameStore::new());
        assert!(!resume.is_resumed());
        assert!(!resume.into_session().started());
    }

    #[test]
    fn test_started_game_is_resumed() {
        let session = playing();
        let store = MemoryGameStore::new();
        store.save_session(&session).unwrap();

        let resume = resume_session(&store);
        assert!(resume.is_resumed());
        let restored = resume.into_session();
        assert_eq!(restored.tableau(), session.tableau());
        assert_eq!(restored.moves(), 1);
    }

    #[test]
    fn test_unstarted_record_keeps_preferences() {
        let mut session = GameSession::new();
        session.toggle_sound();
        session.set_language("zh");
        let store = MemoryGameStore::with_saved(session.to_saved());

        let resume = resume_session(&store);
        assert!(!resume.is_resumed());
        let fresh = resume.into_session();
        assert!(!fresh.sound_enabled());
        assert_eq!(fresh.language(), Language::Zh);
    }

    #[test]
    fn test_invalid_record_starts_fresh() {
        let mut saved = playing().to_saved();
        saved.stock_pile.clear();
        let store = MemoryGameStore::with_saved(saved);

        let resume = resume_session(&store);
        assert!(!resume.is_resumed());
        assert!(!resume.into_session().started());
    }

    #[test]
    fn test_clear() {
        let store = MemoryGameStore::with_saved(playing().to_saved());
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }
}
