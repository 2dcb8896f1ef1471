//! Runtime configuration read from the environment.
//!
//! | Variable            | Meaning                                | Default                    |
//! |---------------------|----------------------------------------|----------------------------|
//! | `SPIDER_DIFFICULTY` | Suits for new games (1, 2 or 4)        | 1                          |
//! | `SPIDER_SEED`       | Seed for deterministic shuffles        | random                     |
//! | `SPIDER_SAVE_PATH`  | Save file                              | `<data dir>/savegame.json` |
//! | `SPIDER_LOG_DIR`    | Log directory                          | `<cache dir>/logs`         |
//! | `SPIDER_LANGUAGE`   | `en`, `es` or `zh`, overrides the save | saved language             |
//! | `SPIDER_AUTOSAVE`   | Save after every accepted command      | true                       |

use std::path::PathBuf;

use crate::types::{Difficulty, Language};

const APP_NAME: &str = "spider-solitaire";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub difficulty: Difficulty,
    pub seed: Option<u64>,
    pub save_path: PathBuf,
    pub log_dir: PathBuf,
    pub language: Option<Language>,
    pub autosave: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl AppConfig {
    /// Read configuration from process environment variables (after `.env`, if any).
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Invalid values fall back to
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let difficulty = var("SPIDER_DIFFICULTY")
            .and_then(|s| s.parse::<u8>().ok())
            .and_then(Difficulty::from_suit_count)
            .unwrap_or_default();

        let seed = var("SPIDER_SEED").and_then(|s| s.parse().ok());

        let save_path = var("SPIDER_SAVE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir().join("savegame.json"));

        let log_dir = var("SPIDER_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_log_dir);

        let language = var("SPIDER_LANGUAGE").and_then(|s| Language::from_code(&s.to_lowercase()));

        let autosave = var("SPIDER_AUTOSAVE")
            .and_then(|s| parse_flag(&s))
            .unwrap_or(true);

        Self {
            difficulty,
            seed,
            save_path,
            log_dir,
            language,
            autosave,
        }
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Platform data directory (`~/.local/share/spider-solitaire` on Linux)
pub fn data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}

/// Platform log directory (`~/.cache/spider-solitaire/logs` on Linux)
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join(APP_NAME))
        .join("logs")
}
