//! MiniBrowser — a minimal tabbed web browser built on the system webview.
//!
//! Entry point: initializes logging and runs the webview application.

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    #[cfg(feature = "gui")]
    minibrowser::ui::browser_app::run();

    #[cfg(not(feature = "gui"))]
    eprintln!(
        "minibrowser {} was built without the `gui` feature; nothing to run",
        env!("CARGO_PKG_VERSION")
    );
}
