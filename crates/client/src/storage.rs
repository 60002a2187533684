//! Client-local persistent storage.
//!
//! Values are JSON files in the platform config directory:
//! - Linux: `~/.config/algocdk/`
//! - macOS: `~/Library/Application Support/algocdk/`
//! - Windows: `%APPDATA%\algocdk\`

use serde::{de::DeserializeOwned, Serialize};
use std::path::PathBuf;

/// Save a value under a key.
///
/// Returns `true` if the write succeeded.
pub fn save<T: Serialize>(key: &str, value: &T) -> bool {
    match serde_json::to_string(value) {
        Ok(json) => save_raw(key, &json),
        Err(_) => false,
    }
}

/// Load a value by key.
///
/// Returns `None` if the key doesn't exist or deserialization fails.
pub fn load<T: DeserializeOwned>(key: &str) -> Option<T> {
    let json = load_raw(key)?;
    serde_json::from_str(&json).ok()
}

/// Remove a key.
pub fn remove(key: &str) {
    if let Some(path) = file_path(key) {
        let _ = std::fs::remove_file(path);
    }
}

/// Check whether a key exists.
pub fn exists(key: &str) -> bool {
    load_raw(key).is_some()
}

fn app_dir() -> Option<PathBuf> {
    let dir = dirs::config_dir()?.join("algocdk");
    if !dir.exists() {
        std::fs::create_dir_all(&dir).ok()?;
    }
    Some(dir)
}

fn file_path(key: &str) -> Option<PathBuf> {
    // Sanitize the key into a valid filename.
    let safe_key = key.replace(['/', '\\', ':', '*', '?', '"', '<', '>', '|'], "_");
    Some(app_dir()?.join(format!("{safe_key}.json")))
}

fn save_raw(key: &str, value: &str) -> bool {
    let Some(path) = file_path(key) else {
        return false;
    };
    std::fs::write(path, value).is_ok()
}

fn load_raw(key: &str) -> Option<String> {
    let path = file_path(key)?;
    std::fs::read_to_string(path).ok()
}
