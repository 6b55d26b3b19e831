use std::path::PathBuf;

use running_planner::config::{load_or_default, Config};
use running_planner::plan::PlanConfig;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("running_planner_{}_{name}.toml", std::process::id()))
}

#[test]
fn missing_file_yields_defaults_without_creating_it() {
    let path = temp_path("missing");
    let _ = std::fs::remove_file(&path);
    let cfg = load_or_default(&path).expect("defaults");
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.defaults.total_weeks, 20);
    assert_eq!(cfg.defaults.recovery_interval, 4);
    assert!(cfg.defaults.round_to_integer);
    assert!(!path.exists());
}

#[test]
fn saved_defaults_load_back() {
    let path = temp_path("roundtrip");
    let mut cfg = Config::default();
    cfg.language = "ko".into();
    cfg.defaults.remember(&PlanConfig {
        total_weeks: 12,
        initial_volume: 30,
        increment_percent: 5,
        recovery_interval: 0,
        recovery_decrement_percent: 20,
        round_to_integer: false,
    });
    cfg.save(&path).expect("save");
    let loaded = load_or_default(&path).expect("load");
    let _ = std::fs::remove_file(&path);
    assert_eq!(loaded, cfg);
}

#[test]
fn partial_file_fills_missing_keys() {
    let path = temp_path("partial");
    std::fs::write(&path, "language = \"en\"\n[defaults]\ntotal_weeks = 8\n").expect("write");
    let loaded = load_or_default(&path).expect("load");
    let _ = std::fs::remove_file(&path);
    assert_eq!(loaded.language, "en");
    assert_eq!(loaded.defaults.total_weeks, 8);
    assert_eq!(loaded.defaults.initial_volume, 20);
}

#[test]
fn malformed_file_is_an_error() {
    let path = temp_path("malformed");
    std::fs::write(&path, "defaults = 3 = 4").expect("write");
    let result = load_or_default(&path);
    let _ = std::fs::remove_file(&path);
    assert!(result.is_err());
}
