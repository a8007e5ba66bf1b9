/// High-score persistence — a dotfile holding one decimal integer.
///
/// Reads that fail for any reason (missing file, unreadable, not a number)
/// fall back to 0; writes are best-effort.  The game never stops over a
/// persistence problem.

use std::path::{Path, PathBuf};

pub fn default_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".flappy_bird_score")
}

pub fn load_high_score(path: &Path) -> u32 {
    std::fs::read_to_string(path)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0)
}

pub fn save_high_score(path: &Path, score: u32) {
    let _ = std::fs::write(path, score.to_string());
}
