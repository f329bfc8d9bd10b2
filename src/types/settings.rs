use serde::{Deserialize, Serialize};

/// Top-level browser settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BrowserSettings {
    pub general: GeneralSettings,
    pub window: WindowSettings,
}

/// General browser settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralSettings {
    /// URL loaded by the Home button and by the initial tab.
    pub home_url: String,
    /// URL opened by the "Project page" menu entry.
    pub project_url: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            home_url: "http://www.google.com".to_string(),
            project_url: "https://github.com/minibrowser/minibrowser".to_string(),
        }
    }
}

/// Main window geometry, captured on shutdown and restored on launch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowSettings {
    pub width: f64,
    pub height: f64,
    pub maximized: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
            maximized: true,
        }
    }
}
