// MiniBrowser config path for macOS
// Config: ~/Library/Application Support/MiniBrowser

use std::env;
use std::path::PathBuf;

/// Returns the home directory on macOS.
fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Returns the configuration directory for MiniBrowser on macOS.
/// `~/Library/Application Support/MiniBrowser`
pub fn get_config_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("MiniBrowser")
}
