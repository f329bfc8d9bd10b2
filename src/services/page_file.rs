// Local page files: reading an HTML document for "Open file" and writing
// captured markup for "Save page as".

use std::fs;
use std::path::Path;

use url::Url;

use crate::types::errors::PageError;

/// File-dialog filter extensions for HTML documents.
pub const HTML_EXTENSIONS: &[&str] = &["htm", "html"];

/// Reads a local HTML document for display in the web view.
pub fn read_page(path: &Path) -> Result<String, PageError> {
    fs::read_to_string(path)
        .map_err(|e| PageError::IoError(format!("Failed to read {}: {}", path.display(), e)))
}

/// Writes captured page markup to disk.
pub fn write_page(path: &Path, html: &str) -> Result<(), PageError> {
    fs::write(path, html)
        .map_err(|e| PageError::IoError(format!("Failed to write {}: {}", path.display(), e)))
}

/// `file://` display form of a local path, shown in the URL bar after
/// opening a file. Falls back to the plain path when the path cannot be
/// expressed as a URL (relative paths, mainly).
pub fn file_url(path: &Path) -> String {
    match Url::from_file_path(path) {
        Ok(u) => u.to_string(),
        Err(()) => path.to_string_lossy().to_string(),
    }
}
