use flappy_bird::score::{load_high_score, save_high_score};

use std::path::PathBuf;

/// Unique scratch path per test so parallel test threads don't clash.
fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("flappy_score_{}_{}", std::process::id(), name))
}

#[test]
fn missing_file_defaults_to_zero() {
    let path = temp_file("missing");
    let _ = std::fs::remove_file(&path);
    assert_eq!(load_high_score(&path), 0);
}

#[test]
fn garbage_file_defaults_to_zero() {
    let path = temp_file("garbage");
    std::fs::write(&path, "not a number").unwrap();
    assert_eq!(load_high_score(&path), 0);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn surrounding_whitespace_is_tolerated() {
    let path = temp_file("whitespace");
    std::fs::write(&path, "  12\n").unwrap();
    assert_eq!(load_high_score(&path), 12);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn save_then_load_round_trips() {
    let path = temp_file("roundtrip");
    save_high_score(&path, 42);
    assert_eq!(load_high_score(&path), 42);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn save_overwrites_previous_value() {
    let path = temp_file("overwrite");
    save_high_score(&path, 7);
    save_high_score(&path, 100);
    assert_eq!(load_high_score(&path), 100);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn file_holds_plain_decimal_ascii() {
    let path = temp_file("format");
    save_high_score(&path, 305);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "305");
    let _ = std::fs::remove_file(&path);
}
