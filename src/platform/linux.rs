// MiniBrowser config path for Linux
// Config: ~/.config/minibrowser

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for MiniBrowser on Linux.
/// Uses `$XDG_CONFIG_HOME/minibrowser` if set, otherwise `~/.config/minibrowser`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("minibrowser")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("minibrowser")
    }
}
