//! In-memory GameStore implementation for tests and ephemeral runs.

use std::sync::RwLock;

use spider_solitaire_core::SavedGame;

use crate::error::{Result, StoreError};
use crate::GameStore;

/// Holds at most one saved game in memory.
#[derive(Default)]
pub struct MemoryGameStore {
    slot: RwLock<Option<SavedGame>>,
}

impl MemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a record already saved.
    pub fn with_saved(saved: SavedGame) -> Self {
        Self {
            slot: RwLock::new(Some(saved)),
        }
    }
}

impl GameStore for MemoryGameStore {
    fn load(&self) -> Result<Option<SavedGame>> {
        let slot = self.slot.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(slot.clone())
    }

    fn save(&self, saved: &SavedGame) -> Result<()> {
        let mut slot = self.slot.write().map_err(|_| StoreError::LockPoisoned)?;
        *slot = Some(saved.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut slot = self.slot.write().map_err(|_| StoreError::LockPoisoned)?;
        *slot = None;
        Ok(())
    }
}
