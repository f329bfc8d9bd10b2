//! WebView-based browser application using `wry` + `tao`.
//!
//! Architecture:
//! - `with_initialization_script(CHROME_JS)` injects the chrome (tab strip,
//!   toolbar, URL bar, menus, status bar) on every http/https page. On
//!   Windows WebView2 this uses AddScriptToExecuteOnDocumentCreatedAsync.
//! - The new-tab page is served via the `mb://` custom protocol with the
//!   chrome inlined.
//! - IPC from JS → Rust via `window.ipc.postMessage()`; Rust drives the
//!   webview through the event-loop proxy.
//! - The webview owns navigation history, rendering and printing; every
//!   chrome action is a one-line forward to the active tab.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use rfd::FileDialog;
use tao::dpi::LogicalSize;
use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder, EventLoopProxy, EventLoopWindowTarget};
use tao::window::{Window, WindowBuilder};
use wry::{WebView, WebViewBuilder};

use crate::app::App;
use crate::managers::tab_manager::TabManagerTrait;
use crate::services::navigation::{self, SchemeIndicator};
use crate::services::page_file;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::errors::PageError;
use crate::ui::{chrome, BROWSER_NAME};

#[derive(Debug)]
enum UserEvent {
    LoadUrl(String),
    EvalScript(String),
    UpdateWindowTitle(String),
    OpenFile,
    SavePage,
    WriteHtml(PathBuf, String),
    Print,
    ShowAbout,
    CloseAbout,
}

struct BrowserState {
    app: App,
    /// URL of a navigation in flight. While set, page-state IPC from the
    /// document being replaced is stale and dropped.
    pending_nav: Option<String>,
}

impl BrowserState {
    fn active_tab_id(&self) -> Option<String> {
        self.app.tab_manager.get_active_tab().map(|t| t.id.clone())
    }
}

// ─── IPC handler ───

fn handle_ipc(state: &mut BrowserState, message: &str) -> Vec<UserEvent> {
    let msg: serde_json::Value = match serde_json::from_str(message) {
        Ok(v) => v,
        Err(_) => return Vec::new(),
    };
    let cmd = match msg.get("cmd").and_then(|v| v.as_str()) {
        Some(c) => c,
        None => return Vec::new(),
    };

    match cmd {
        "ui_ready" => {
            // A new document booted; the pending navigation has landed.
            state.pending_nav = None;
            if let Some(tid) = state.active_tab_id() {
                let _ = state.app.tab_manager.set_tab_loading(&tid, false);
            }
            let mut events = vec![UserEvent::EvalScript(build_chrome_update(state))];
            if let Some(tab) = state.app.tab_manager.get_active_tab() {
                events.push(UserEvent::UpdateWindowTitle(tab.title.clone()));
            }
            events
        }

        "page_state" => {
            if state.pending_nav.is_some() {
                // The reporting page is being replaced; its state no longer
                // belongs to the active tab.
                log::debug!("Dropping page state from a superseded document");
                return Vec::new();
            }
            let url = msg.get("url").and_then(|v| v.as_str()).unwrap_or("");
            let title = msg.get("title").and_then(|v| v.as_str()).unwrap_or("");
            if let Some(tid) = state.active_tab_id() {
                if !url.is_empty() && !url.starts_with("mb://") {
                    let _ = state.app.tab_manager.update_tab_url(&tid, url);
                }
                if !title.is_empty() {
                    let _ = state.app.tab_manager.update_tab_title(&tid, title);
                }
            }
            let mut events = vec![UserEvent::EvalScript(build_chrome_update(state))];
            if !title.is_empty() {
                events.push(UserEvent::UpdateWindowTitle(title.to_string()));
            }
            events
        }

        "navigate" => {
            let input = msg.get("url").and_then(|v| v.as_str()).unwrap_or("");
            navigate_active(state, navigation::resolve_input(input))
        }

        "back" => vec![UserEvent::EvalScript("history.back()".into())],
        "forward" => vec![UserEvent::EvalScript("history.forward()".into())],
        "reload" => vec![UserEvent::EvalScript("location.reload()".into())],
        "stop" => vec![UserEvent::EvalScript("window.stop()".into())],

        "home" => {
            let url = state.app.home_url();
            navigate_active(state, url)
        }

        "project" => {
            let url = state.app.project_url();
            navigate_active(state, url)
        }

        "new_tab" => {
            state.app.tab_manager.create_tab(None, None, true);
            load_active(state)
        }

        "close_tab" => {
            let Some(id) = msg.get("id").and_then(|v| v.as_str()) else {
                return Vec::new();
            };
            match state.app.tab_manager.close_tab(id) {
                Ok(()) => load_active(state),
                Err(e) => {
                    // Closing the last tab is refused; the strip stays as-is.
                    log::debug!("Close tab refused: {}", e);
                    vec![UserEvent::EvalScript(build_chrome_update(state))]
                }
            }
        }

        "switch_tab" => {
            let Some(id) = msg.get("id").and_then(|v| v.as_str()) else {
                return Vec::new();
            };
            match state.app.tab_manager.switch_tab(id) {
                Ok(()) => load_active(state),
                Err(e) => {
                    log::warn!("Switch tab failed: {}", e);
                    Vec::new()
                }
            }
        }

        "open_file" => vec![UserEvent::OpenFile],
        "save_page" => vec![UserEvent::SavePage],
        "print_page" => vec![UserEvent::Print],
        "about" => vec![UserEvent::ShowAbout],

        _ => Vec::new(),
    }
}

/// Point the active tab at `url` and load it.
fn navigate_active(state: &mut BrowserState, url: String) -> Vec<UserEvent> {
    if let Some(tid) = state.active_tab_id() {
        let _ = state.app.tab_manager.update_tab_url(&tid, &url);
        let _ = state
            .app
            .tab_manager
            .update_tab_title(&tid, &navigation::tab_label(&url));
        let _ = state.app.tab_manager.set_tab_loading(&tid, true);
    }
    state.pending_nav = Some(url.clone());
    vec![UserEvent::LoadUrl(load_target(&url))]
}

/// Load whatever the active tab currently points at (after tab switches
/// and closes).
fn load_active(state: &mut BrowserState) -> Vec<UserEvent> {
    let url = state
        .app
        .tab_manager
        .get_active_tab()
        .map(|t| t.url.clone())
        .unwrap_or_else(|| "about:blank".into());
    if let Some(tid) = state.active_tab_id() {
        let _ = state.app.tab_manager.set_tab_loading(&tid, true);
    }
    state.pending_nav = Some(url.clone());
    vec![UserEvent::LoadUrl(load_target(&url))]
}

/// Map a tab URL to what the webview actually loads. Blank/internal pages
/// come from the `mb://` protocol so they carry the inlined chrome.
fn load_target(url: &str) -> String {
    if url.starts_with("about:") {
        "mb://localhost/newtab".to_string()
    } else {
        url.to_string()
    }
}

/// URL-bar text for a tab URL: blank pages show an empty field.
fn display_url(url: &str) -> &str {
    if url.starts_with("about:") {
        ""
    } else {
        url
    }
}

/// Push the shared chrome state (tab strip, URL bar, scheme badge) to the
/// page's injected chrome.
fn build_chrome_update(state: &BrowserState) -> String {
    let tabs: Vec<serde_json::Value> = state
        .app
        .tab_manager
        .get_all_tabs()
        .iter()
        .map(|t| serde_json::json!({"id": t.id, "title": t.title, "url": display_url(&t.url)}))
        .collect();
    let active = state.app.tab_manager.get_active_tab();
    let active_id = active.map(|t| t.id.clone()).unwrap_or_default();
    let url = active.map(|t| t.url.clone()).unwrap_or_default();
    let scheme = SchemeIndicator::from_url(&url).as_str();
    format!(
        "if(window.__mb_update)__mb_update({})",
        serde_json::json!({
            "tabs": tabs,
            "activeId": active_id,
            "url": display_url(&url),
            "scheme": scheme,
        })
    )
}

fn window_title(page_title: &str) -> String {
    if page_title.is_empty() {
        BROWSER_NAME.to_string()
    } else {
        format!("{} - {}", page_title, BROWSER_NAME)
    }
}

// ─── WebView plumbing ───

#[cfg(target_os = "linux")]
fn attach_webview(builder: WebViewBuilder, window: &Window) -> wry::Result<WebView> {
    use tao::platform::unix::WindowExtUnix;
    use wry::WebViewBuilderExtUnix;
    let vbox = window.default_vbox().expect("Failed to get GTK vbox");
    builder.build_gtk(vbox)
}

#[cfg(not(target_os = "linux"))]
fn attach_webview(builder: WebViewBuilder, window: &Window) -> wry::Result<WebView> {
    builder.build(window)
}

/// The About dialog: a small fixed window with its own webview. The OK
/// button reports back over IPC and the window is dropped.
fn build_about_window(
    target: &EventLoopWindowTarget<UserEvent>,
    proxy: &EventLoopProxy<UserEvent>,
) -> Result<(Window, WebView), Box<dyn std::error::Error>> {
    let window = WindowBuilder::new()
        .with_title(format!("About {}", BROWSER_NAME))
        .with_inner_size(LogicalSize::new(320.0, 220.0))
        .with_resizable(false)
        .build(target)?;

    let about_proxy = proxy.clone();
    let builder = WebViewBuilder::new()
        .with_html(chrome::about_html())
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let is_close = serde_json::from_str::<serde_json::Value>(msg.body())
                .ok()
                .and_then(|v| v.get("cmd").and_then(|c| c.as_str()).map(|c| c == "close_about"))
                .unwrap_or(false);
            if is_close {
                let _ = about_proxy.send_event(UserEvent::CloseAbout);
            }
        });

    let webview = attach_webview(builder, &window)?;
    Ok((window, webview))
}

// ─── Main entry point ───

pub fn run() {
    let mut app = App::new(None);
    app.startup();

    let home = app.home_url();
    let (width, height, maximized) = {
        let w = &app.settings_engine.get_settings().window;
        (w.width, w.height, w.maximized)
    };

    let state = Arc::new(Mutex::new(BrowserState {
        app,
        pending_nav: Some(home.clone()),
    }));

    {
        let mut s = state.lock().unwrap();
        s.app
            .tab_manager
            .create_tab(Some(&home), Some("Homepage"), true);
    }

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title(BROWSER_NAME)
        .with_inner_size(LogicalSize::new(width, height))
        .with_maximized(maximized)
        .build(&event_loop)
        .expect("Failed to create window");

    let ipc_state = state.clone();
    let ipc_proxy = proxy.clone();
    let nw_proxy = proxy.clone();

    let builder = WebViewBuilder::new()
        .with_custom_protocol("mb".into(), move |_wv_id, request| {
            let html = match request.uri().path() {
                "/newtab" | "/" => chrome::newtab_html(),
                _ => chrome::newtab_html(),
            };
            wry::http::Response::builder()
                .header("Content-Type", "text/html; charset=utf-8")
                .body(html.into_bytes().into())
                .unwrap()
        })
        // Runs on every http/https navigation; mb:// pages inline the
        // chrome instead (see chrome.rs).
        .with_initialization_script(chrome::CHROME_JS)
        .with_url(&home)
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let body = msg.body().as_str();
            log::debug!("ipc: {}", body);
            let mut s = ipc_state.lock().unwrap();
            for event in handle_ipc(&mut s, body) {
                let _ = ipc_proxy.send_event(event);
            }
        })
        .with_new_window_req_handler(move |url, _features| {
            // Single-window shell: popup targets open in the active tab.
            if url.starts_with("http://") || url.starts_with("https://") {
                let _ = nw_proxy.send_event(UserEvent::LoadUrl(url));
            }
            wry::NewWindowResponse::Deny
        })
        .with_devtools(cfg!(debug_assertions));

    let webview = attach_webview(builder, &window).expect("Failed to create WebView");

    let mut about: Option<(Window, WebView)> = None;

    event_loop.run(move |event, target, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                window_id,
                ..
            } => {
                if about.as_ref().map(|(w, _)| w.id()) == Some(window_id) {
                    about = None;
                } else {
                    let mut s = state.lock().unwrap();
                    let size = window.inner_size().to_logical::<f64>(window.scale_factor());
                    s.app
                        .settings_engine
                        .update_window(size.width, size.height, window.is_maximized());
                    s.app.shutdown();
                    *control_flow = ControlFlow::Exit;
                }
            }

            Event::UserEvent(user_event) => match user_event {
                UserEvent::LoadUrl(url) => {
                    log::debug!("load: {}", url);
                    let _ = webview.load_url(&url);
                }

                UserEvent::EvalScript(js) => {
                    let _ = webview.evaluate_script(&js);
                }

                UserEvent::UpdateWindowTitle(title) => {
                    window.set_title(&window_title(&title));
                }

                UserEvent::OpenFile => {
                    let picked = FileDialog::new()
                        .add_filter("HTML documents", page_file::HTML_EXTENSIONS)
                        .pick_file();
                    if let Some(path) = picked {
                        open_local_file(&state, &webview, &window, path);
                    }
                }

                UserEvent::SavePage => {
                    let picked = FileDialog::new()
                        .add_filter("HTML documents", page_file::HTML_EXTENSIONS)
                        .set_file_name("page.html")
                        .save_file();
                    if let Some(path) = picked {
                        // The capture API is asynchronous: the callback
                        // delivers the markup and the write resumes on the
                        // event loop.
                        let save_proxy = proxy.clone();
                        let result = webview.evaluate_script_with_callback(
                            "document.documentElement.outerHTML",
                            move |captured| match serde_json::from_str::<String>(&captured) {
                                Ok(html) => {
                                    let _ = save_proxy
                                        .send_event(UserEvent::WriteHtml(path.clone(), html));
                                }
                                Err(e) => {
                                    log::error!("{}", PageError::CaptureFailed(e.to_string()))
                                }
                            },
                        );
                        if let Err(e) = result {
                            log::error!("{}", PageError::CaptureFailed(e.to_string()));
                        }
                    }
                }

                UserEvent::WriteHtml(path, html) => match page_file::write_page(&path, &html) {
                    Ok(()) => {
                        let note = serde_json::json!(format!("Saved {}", path.display()));
                        let _ = webview
                            .evaluate_script(&format!("if(window.__mb_status)__mb_status({})", note));
                    }
                    Err(e) => log::error!("{}", e),
                },

                UserEvent::Print => {
                    if let Err(e) = webview.print() {
                        log::error!("Print failed: {}", e);
                    }
                }

                UserEvent::ShowAbout => match &about {
                    Some((w, _)) => w.set_focus(),
                    None => match build_about_window(target, &proxy) {
                        Ok(pair) => about = Some(pair),
                        Err(e) => log::error!("Failed to open About dialog: {}", e),
                    },
                },

                UserEvent::CloseAbout => {
                    about = None;
                }
            },

            _ => {}
        }
    });
}

/// "Open file": read a local HTML document and hand the markup to the
/// active tab's webview. The URL bar shows the file path, the tab and the
/// window title show the file name.
fn open_local_file(
    state: &Arc<Mutex<BrowserState>>,
    webview: &WebView,
    window: &Window,
    path: PathBuf,
) {
    match page_file::read_page(&path) {
        Ok(html) => {
            let display = page_file::file_url(&path);
            let label = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| display.clone());
            {
                let mut s = state.lock().unwrap();
                if let Some(tid) = s.active_tab_id() {
                    let _ = s.app.tab_manager.update_tab_url(&tid, &display);
                    let _ = s.app.tab_manager.update_tab_title(&tid, &label);
                }
                s.pending_nav = Some(display);
            }
            window.set_title(&window_title(&label));
            let _ = webview.load_html(&html);
        }
        Err(e) => log::error!("{}", e),
    }
}
