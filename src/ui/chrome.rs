//! HTML for pages the browser serves itself: the new-tab page and the
//! About dialog.
//!
//! The chrome script is injected on every http/https navigation via
//! `with_initialization_script`. On Windows WebView2 that script does NOT
//! run on custom-protocol (`mb://`) pages, so internal pages inline it.

use super::{AUTHOR_LINE, BROWSER_NAME};

/// The injected window chrome: tab strip, toolbar, URL bar, menus,
/// status bar.
pub const CHROME_JS: &str = include_str!("../../resources/ui/chrome.js");

/// Build HTML for an internal page with the chrome script inlined.
fn internal_page(body: &str, extra_css: &str) -> String {
    let mut html = String::with_capacity(body.len() + extra_css.len() + CHROME_JS.len() + 512);
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><style>");
    html.push_str("*{margin:0;padding:0;box-sizing:border-box}");
    html.push_str(
        "body{font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',sans-serif;\
         background:#fafafa;color:#1a1a1a;height:100vh}",
    );
    html.push_str(extra_css);
    html.push_str("</style></head><body>");
    html.push_str(body);
    html.push_str("<script>");
    html.push_str(CHROME_JS);
    html.push_str("</script></body></html>");
    html
}

/// The blank page shown by fresh tabs.
pub fn newtab_html() -> String {
    let body = format!(
        r#"<div class="newtab">
<div class="newtab-name">{}</div>
<div class="newtab-hint">Enter an address above to start browsing</div>
</div>"#,
        BROWSER_NAME
    );
    let css = ".newtab{display:flex;flex-direction:column;align-items:center;justify-content:center;height:100%}\
        .newtab-name{font-size:28px;font-weight:600;color:#666}\
        .newtab-hint{margin-top:8px;font-size:13px;color:#999}";
    internal_page(&body, css)
}

/// The About dialog content. Rendered in its own small window, so the
/// chrome script is not inlined; the OK button reports back over IPC.
pub fn about_html() -> String {
    format!(
        r#"<!DOCTYPE html><html><head><meta charset="UTF-8"><style>
*{{margin:0;padding:0;box-sizing:border-box}}
body{{font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',sans-serif;background:#fafafa;
color:#1a1a1a;height:100vh;display:flex;flex-direction:column;align-items:center;
justify-content:center;gap:10px;user-select:none}}
.name{{font-size:24px;font-weight:600}}
.line{{font-size:13px;color:#555}}
button{{margin-top:12px;padding:5px 26px;font:13px inherit;border:1px solid #c9c9c9;
border-radius:4px;background:#fff}}
button:hover{{background:#eee}}
</style></head><body>
<div class="name">{name}</div>
<div class="line">Version {version}</div>
<div class="line">{author}</div>
<button onclick="window.ipc.postMessage(JSON.stringify({{cmd:'close_about'}}))">OK</button>
</body></html>"#,
        name = BROWSER_NAME,
        version = env!("CARGO_PKG_VERSION"),
        author = AUTHOR_LINE,
    )
}
