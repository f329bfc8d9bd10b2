//! MiniBrowser — a minimal tabbed web browser built on the system webview.
//!
//! This library crate exposes all modules for use by the binary and
//! integration tests. Page rendering, navigation history, HTTPS and
//! printing are owned by the embedded webview; this crate supplies the
//! window chrome and forwards each UI action to the active tab.

pub mod app;
pub mod managers;
pub mod platform;
pub mod services;
pub mod types;

#[cfg(feature = "gui")]
pub mod ui;
