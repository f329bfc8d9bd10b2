// Pure navigation logic - no windowing imports allowed.
// URL-bar input resolution and scheme inspection, unit tested in isolation.

use url::Url;

/// Schemes accepted verbatim from the URL bar. Anything else is treated as
/// a missing scheme, which prevents `"google.com"` from being parsed as
/// scheme `google`.
const KNOWN_SCHEMES: &[&str] = &["http", "https", "file", "about", "data"];

/// Indicator shown next to the URL bar, derived from the active tab's
/// current URL scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemeIndicator {
    /// The page was reached over `https`.
    Secure,
    /// Any other scheme, `http` included.
    Insecure,
}

impl SchemeIndicator {
    pub fn from_url(url: &str) -> Self {
        match Url::parse(url) {
            Ok(u) if u.scheme() == "https" => SchemeIndicator::Secure,
            _ => SchemeIndicator::Insecure,
        }
    }

    /// Stable token handed to the chrome script.
    pub fn as_str(self) -> &'static str {
        match self {
            SchemeIndicator::Secure => "secure",
            SchemeIndicator::Insecure => "insecure",
        }
    }
}

/// Resolve URL-bar input into a navigable URL.
///
/// Empty input yields a blank page. Input carrying a known scheme is used
/// as-is. Everything else gets the default scheme `http` prefixed; input
/// that still does not parse as a URL with a host falls back to the blank
/// page.
pub fn resolve_input(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return "about:blank".to_string();
    }

    if let Ok(u) = Url::parse(trimmed) {
        if KNOWN_SCHEMES.contains(&u.scheme()) {
            return u.to_string();
        }
    }

    let candidate = format!("http://{}", trimmed);
    if let Ok(u) = Url::parse(&candidate) {
        if u.host().is_some() {
            return u.to_string();
        }
    }

    "about:blank".to_string()
}

/// Short label for a tab whose page has not reported a title yet.
pub fn tab_label(url: &str) -> String {
    if url.starts_with("about:") {
        return "New Tab".to_string();
    }
    if let Ok(u) = Url::parse(url) {
        if u.scheme() == "file" {
            if let Some(name) = u.path_segments().and_then(|mut s| s.next_back()) {
                if !name.is_empty() {
                    return name.to_string();
                }
            }
        }
        if let Some(host) = u.host_str() {
            return host.trim_start_matches("www.").to_string();
        }
    }
    url.to_string()
}
