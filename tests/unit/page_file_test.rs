//! Unit tests for local page files: the "Open file" read path and the
//! "Save page as" write path.

use minibrowser::services::page_file;
use tempfile::TempDir;

#[test]
fn test_read_page_returns_markup() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("page.html");
    std::fs::write(&path, "<html><body>hello</body></html>").unwrap();

    let html = page_file::read_page(&path).unwrap();
    assert_eq!(html, "<html><body>hello</body></html>");
}

#[test]
fn test_read_missing_page_returns_error() {
    let dir = TempDir::new().unwrap();
    let result = page_file::read_page(&dir.path().join("absent.html"));
    assert!(result.is_err());
    let msg = result.unwrap_err().to_string();
    assert!(msg.contains("absent.html"), "error names the file: {}", msg);
}

#[test]
fn test_write_page_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.html");

    page_file::write_page(&path, "<html><head></head></html>").unwrap();
    assert_eq!(
        page_file::read_page(&path).unwrap(),
        "<html><head></head></html>"
    );
}

#[test]
fn test_write_to_unwritable_path_returns_error() {
    let dir = TempDir::new().unwrap();
    // Directory path as the destination file
    let result = page_file::write_page(dir.path(), "<html></html>");
    assert!(result.is_err());
}

#[test]
fn test_file_url_for_absolute_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("doc.html");
    let url = page_file::file_url(&path);
    assert!(url.starts_with("file://"), "got {}", url);
    assert!(url.ends_with("doc.html"));
}

#[test]
fn test_file_url_falls_back_for_relative_path() {
    let url = page_file::file_url(std::path::Path::new("relative.html"));
    assert_eq!(url, "relative.html");
}

#[test]
fn test_html_extensions_filter() {
    assert!(page_file::HTML_EXTENSIONS.contains(&"html"));
    assert!(page_file::HTML_EXTENSIONS.contains(&"htm"));
}
