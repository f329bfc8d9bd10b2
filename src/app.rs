//! App core for MiniBrowser.
//!
//! Central struct holding the tab manager and the settings engine, managing
//! application lifecycle.

use crate::managers::tab_manager::TabManager;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};

/// Central application struct.
pub struct App {
    pub tab_manager: TabManager,
    pub settings_engine: SettingsEngine,
}

impl App {
    /// Creates a new App. `config_override` points the settings engine at an
    /// explicit config file, used by tests; `None` selects the platform path.
    pub fn new(config_override: Option<String>) -> Self {
        Self {
            tab_manager: TabManager::new(),
            settings_engine: SettingsEngine::new(config_override),
        }
    }

    /// Startup sequence: load settings from disk.
    pub fn startup(&mut self) {
        match self.settings_engine.load() {
            Ok(_) => log::info!(
                "Settings loaded from {}",
                self.settings_engine.get_config_path()
            ),
            Err(e) => log::warn!("Falling back to default settings: {}", e),
        }
    }

    /// Shutdown sequence: persist settings (window geometry included).
    pub fn shutdown(&mut self) {
        if let Err(e) = self.settings_engine.save() {
            log::warn!("Failed to save settings: {}", e);
        }
    }

    /// URL loaded by the Home button and the initial tab.
    pub fn home_url(&self) -> String {
        self.settings_engine.get_settings().general.home_url.clone()
    }

    /// URL opened by the "Project page" menu entry.
    pub fn project_url(&self) -> String {
        self.settings_engine
            .get_settings()
            .general
            .project_url
            .clone()
    }
}
