//! File-based GameStore implementation.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use spider_solitaire_core::SavedGame;

use crate::error::{Result, StoreError};
use crate::GameStore;

/// Current layout of the save file
pub const SAVE_VERSION: u32 = 1;

/// On-disk wrapper around the saved record.
///
/// ```json
/// { "version": 1, "state": { "columns": [...], "stockPile": [...], ... } }
/// ```
#[derive(Debug, Serialize, Deserialize)]
struct Envelope<T> {
    version: u32,
    state: T,
}

/// Stores one saved game as a pretty-printed JSON file.
///
/// Writes go to a sibling temp file which is then renamed over the target, so a crash
/// mid-write leaves the previous save intact.
pub struct FileGameStore {
    path: PathBuf,
}

impl FileGameStore {
    /// Create a store writing to `path`. Parent directories are created on demand.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

impl GameStore for FileGameStore {
    fn load(&self) -> Result<Option<SavedGame>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&self.path)?;
        let envelope: Envelope<serde_json::Value> = serde_json::from_slice(&bytes)?;
        if envelope.version != SAVE_VERSION {
            return Err(StoreError::UnsupportedVersion {
                found: envelope.version,
                expected: SAVE_VERSION,
            });
        }
        let saved: SavedGame = serde_json::from_value(envelope.state)?;

        tracing::debug!("Loaded saved game from {}", self.path.display());

        Ok(Some(saved))
    }

    fn save(&self, saved: &SavedGame) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let envelope = Envelope {
            version: SAVE_VERSION,
            state: saved,
        };
        let bytes = serde_json::to_vec_pretty(&envelope)?;

        // Write to temp file, then atomic rename
        let temp_path = self.temp_path();
        fs::write(&temp_path, bytes)?;
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!("Saved game to {}", self.path.display());

        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            tracing::debug!("Deleted saved game at {}", self.path.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spider_solitaire_core::GameSession;
    use spider_solitaire_types::Difficulty;
    use tempfile::TempDir;

    fn saved() -> SavedGame {
        let mut session = GameSession::new();
        session.start_game_with_seed(Difficulty::FourSuits, 77);
        session.deal();
        session.to_saved()
    }

    #[test]
    fn test_missing_file_loads_none() {
        let dir = TempDir::new().unwrap();
        let store = FileGameStore::new(dir.path().join("save.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = FileGameStore::new(dir.path().join("nested/save.json"));
        let record = saved();

        store.save(&record).unwrap();
        assert!(!store.temp_path().exists());
        assert_eq!(store.load().unwrap(), Some(record));
    }

    #[test]
    fn test_file_is_wrapped_in_versioned_envelope() {
        let dir = TempDir::new().unwrap();
        let store = FileGameStore::new(dir.path().join("save.json"));
        store.save(&saved()).unwrap();

        let json: serde_json::Value =
            serde_json::from_slice(&fs::read(store.path()).unwrap()).unwrap();
        assert_eq!(json["version"], 1);
        assert_eq!(json["state"]["difficulty"], 4);
        assert_eq!(json["state"]["isGameStarted"], true);
    }

    #[test]
    fn test_other_version_is_refused() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("save.json");
        fs::write(&path, r#"{"version": 9, "state": {}}"#).unwrap();

        let err = FileGameStore::new(&path).load().unwrap_err();
        assert!(matches!(
            err,
            StoreError::UnsupportedVersion { found: 9, expected: 1 }
        ));
    }

    #[test]
    fn test_garbage_is_a_json_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("save.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            FileGameStore::new(&path).load(),
            Err(StoreError::Json(_))
        ));
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = TempDir::new().unwrap();
        let store = FileGameStore::new(dir.path().join("save.json"));
        store.save(&saved()).unwrap();
        store.clear().unwrap();
        assert!(!store.path().exists());
        // Clearing twice is fine.
        store.clear().unwrap();
    }
}
