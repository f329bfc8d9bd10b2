// MiniBrowser config path for Windows
// Config: %APPDATA%/MiniBrowser

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for MiniBrowser on Windows.
/// Uses `%APPDATA%/MiniBrowser`, falling back to the user profile dir.
pub fn get_config_dir() -> PathBuf {
    if let Ok(appdata) = env::var("APPDATA") {
        PathBuf::from(appdata).join("MiniBrowser")
    } else {
        let profile = env::var("USERPROFILE").unwrap_or_else(|_| String::from("C:\\"));
        PathBuf::from(profile).join("MiniBrowser")
    }
}
