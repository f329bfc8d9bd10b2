// MiniBrowser user interface
// The chrome is rendered inside the webview; `browser_app` owns the event
// loop and forwards chrome actions to the active tab.

pub mod browser_app;
pub mod chrome;

/// Application display name, shown in window titles and the About dialog.
pub const BROWSER_NAME: &str = "MiniBrowser";

/// Author credit line for the About dialog.
pub const AUTHOR_LINE: &str = "The MiniBrowser authors, 2021";
