use std::collections::HashMap;
use std::path::PathBuf;

use spider_solitaire::types::{Difficulty, Language};
use spider_solitaire::AppConfig;

fn lookup(pairs: &[(&str, &str)]) -> AppConfig {
    let vars: HashMap<&str, &str> = pairs.iter().copied().collect();
    AppConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()))
}

#[test]
fn config_reads_every_variable() {
    let cfg = lookup(&[
        ("SPIDER_DIFFICULTY", "4"),
        ("SPIDER_SEED", "12345"),
        ("SPIDER_SAVE_PATH", "/tmp/spider/save.json"),
        ("SPIDER_LOG_DIR", "/tmp/spider/logs"),
        ("SPIDER_LANGUAGE", "ZH"),
        ("SPIDER_AUTOSAVE", "off"),
    ]);

    assert_eq!(cfg.difficulty, Difficulty::FourSuits);
    assert_eq!(cfg.seed, Some(12345));
    assert_eq!(cfg.save_path, PathBuf::from("/tmp/spider/save.json"));
    assert_eq!(cfg.log_dir, PathBuf::from("/tmp/spider/logs"));
    assert_eq!(cfg.language, Some(Language::Zh));
    assert!(!cfg.autosave);
}

#[test]
fn config_invalid_values_fall_back() {
    let cfg = lookup(&[
        ("SPIDER_DIFFICULTY", "3"),
        ("SPIDER_SEED", "-1"),
        ("SPIDER_LANGUAGE", "fr"),
        ("SPIDER_AUTOSAVE", "sometimes"),
        ("SPIDER_SAVE_PATH", "   "),
    ]);

    assert_eq!(cfg.difficulty, Difficulty::OneSuit);
    assert_eq!(cfg.seed, None);
    assert_eq!(cfg.language, None);
    assert!(cfg.autosave);
    assert!(cfg.save_path.ends_with("savegame.json"));
}
