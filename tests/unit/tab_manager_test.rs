use minibrowser::managers::tab_manager::{TabManager, TabManagerTrait};
use minibrowser::types::errors::TabError;

#[test]
fn test_create_tab_returns_unique_ids() {
    let mut mgr = TabManager::new();
    let id1 = mgr.create_tab(None, None, true);
    let id2 = mgr.create_tab(None, None, false);
    assert_ne!(id1, id2);
    assert_eq!(mgr.tab_count(), 2);
}

#[test]
fn test_create_tab_sets_active_when_first() {
    let mut mgr = TabManager::new();
    let id = mgr.create_tab(Some("https://example.com"), None, false);
    // First tab should become active even if active=false
    assert_eq!(mgr.get_active_tab().unwrap().id, id);
}

#[test]
fn test_create_tab_with_url_and_label() {
    let mut mgr = TabManager::new();
    let id = mgr.create_tab(Some("http://www.google.com"), Some("Homepage"), true);
    let tab = mgr.get_tab(&id).unwrap();
    assert_eq!(tab.url, "http://www.google.com");
    assert_eq!(tab.title, "Homepage");
}

#[test]
fn test_create_tab_defaults() {
    let mut mgr = TabManager::new();
    let id = mgr.create_tab(None, None, true);
    let tab = mgr.get_tab(&id).unwrap();
    assert_eq!(tab.url, "about:blank");
    assert_eq!(tab.title, "New Tab");
    assert!(!tab.loading);
}

#[test]
fn test_close_tab_switches_to_neighbor() {
    let mut mgr = TabManager::new();
    let id1 = mgr.create_tab(None, None, true);
    let id2 = mgr.create_tab(None, None, true);
    let id3 = mgr.create_tab(None, None, false);

    // Active is id2, close it
    mgr.close_tab(&id2).unwrap();
    let active = mgr.get_active_tab().unwrap();
    assert!(active.id == id1 || active.id == id3);
    assert_eq!(mgr.tab_count(), 2);
}

#[test]
fn test_close_inactive_tab_keeps_active() {
    let mut mgr = TabManager::new();
    let id1 = mgr.create_tab(None, None, true);
    let id2 = mgr.create_tab(None, None, false);

    mgr.close_tab(&id2).unwrap();
    assert_eq!(mgr.get_active_tab().unwrap().id, id1);
}

#[test]
fn test_close_last_tab_is_refused() {
    let mut mgr = TabManager::new();
    let id = mgr.create_tab(None, None, true);

    let result = mgr.close_tab(&id);
    assert!(matches!(result, Err(TabError::LastTab)));
    // The tab is still there, untouched
    assert_eq!(mgr.tab_count(), 1);
    assert_eq!(mgr.get_active_tab().unwrap().id, id);
}

#[test]
fn test_close_nonexistent_tab_returns_error() {
    let mut mgr = TabManager::new();
    mgr.create_tab(None, None, true);
    let result = mgr.close_tab("nonexistent");
    assert!(matches!(result, Err(TabError::NotFound(_))));
}

#[test]
fn test_switch_tab() {
    let mut mgr = TabManager::new();
    let id1 = mgr.create_tab(None, None, true);
    let id2 = mgr.create_tab(None, None, false);
    assert_eq!(mgr.get_active_tab().unwrap().id, id1);

    mgr.switch_tab(&id2).unwrap();
    assert_eq!(mgr.get_active_tab().unwrap().id, id2);
}

#[test]
fn test_switch_nonexistent_tab_returns_error() {
    let mut mgr = TabManager::new();
    mgr.create_tab(None, None, true);
    assert!(mgr.switch_tab("nonexistent").is_err());
}

#[test]
fn test_tab_order_follows_creation() {
    let mut mgr = TabManager::new();
    let id1 = mgr.create_tab(None, None, true);
    let id2 = mgr.create_tab(None, None, false);
    let id3 = mgr.create_tab(None, None, false);

    assert_eq!(mgr.get_tab_order(), &[id1.clone(), id2, id3]);
    let all = mgr.get_all_tabs();
    assert_eq!(all[0].id, id1);
}

#[test]
fn test_update_tab_url_keeps_title() {
    let mut mgr = TabManager::new();
    let id = mgr.create_tab(Some("http://example.com"), Some("Example"), true);

    mgr.update_tab_url(&id, "https://example.com/next").unwrap();
    let tab = mgr.get_tab(&id).unwrap();
    assert_eq!(tab.url, "https://example.com/next");
    assert_eq!(tab.title, "Example");
}

#[test]
fn test_update_tab_title() {
    let mut mgr = TabManager::new();
    let id = mgr.create_tab(None, None, true);
    mgr.update_tab_title(&id, "Loaded Page").unwrap();
    assert_eq!(mgr.get_tab(&id).unwrap().title, "Loaded Page");
}

#[test]
fn test_update_unknown_tab_returns_error() {
    let mut mgr = TabManager::new();
    mgr.create_tab(None, None, true);
    assert!(mgr.update_tab_url("missing", "http://x.example").is_err());
    assert!(mgr.update_tab_title("missing", "x").is_err());
}

#[test]
fn test_set_tab_loading() {
    let mut mgr = TabManager::new();
    let id = mgr.create_tab(None, None, true);
    mgr.set_tab_loading(&id, true).unwrap();
    assert!(mgr.get_tab(&id).unwrap().loading);
    mgr.set_tab_loading(&id, false).unwrap();
    assert!(!mgr.get_tab(&id).unwrap().loading);
}
