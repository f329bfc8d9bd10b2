use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

use crate::types::errors::TabError;
use crate::types::tab::Tab;

/// Trait defining the tab management interface.
pub trait TabManagerTrait {
    fn create_tab(&mut self, url: Option<&str>, title: Option<&str>, active: bool) -> String;
    fn close_tab(&mut self, tab_id: &str) -> Result<(), TabError>;
    fn switch_tab(&mut self, tab_id: &str) -> Result<(), TabError>;
    fn get_tab(&self, tab_id: &str) -> Option<&Tab>;
    fn get_all_tabs(&self) -> Vec<&Tab>;
    fn get_active_tab(&self) -> Option<&Tab>;
    fn tab_count(&self) -> usize;
    fn get_tab_order(&self) -> &[String];
    fn update_tab_url(&mut self, tab_id: &str, url: &str) -> Result<(), TabError>;
    fn update_tab_title(&mut self, tab_id: &str, title: &str) -> Result<(), TabError>;
    fn set_tab_loading(&mut self, tab_id: &str, loading: bool) -> Result<(), TabError>;
}

/// In-memory tab manager for the browser.
///
/// Holds the ordered collection of open tabs and the active-tab id. The
/// collection is never empty once the first tab exists: closing the last
/// remaining tab is refused.
pub struct TabManager {
    tabs: Vec<Tab>,
    tab_order: Vec<String>,
    active_tab_id: Option<String>,
}

impl TabManager {
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            tab_order: Vec::new(),
            active_tab_id: None,
        }
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    fn find_tab_index(&self, tab_id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == tab_id)
    }

    fn find_order_index(&self, tab_id: &str) -> Option<usize> {
        self.tab_order.iter().position(|id| id == tab_id)
    }
}

impl Default for TabManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TabManagerTrait for TabManager {
    /// Create a new tab, optionally with a URL, label and active state.
    /// Returns the new tab's ID.
    fn create_tab(&mut self, url: Option<&str>, title: Option<&str>, active: bool) -> String {
        let id = Uuid::new_v4().to_string();
        let tab = Tab {
            id: id.clone(),
            url: url.unwrap_or("about:blank").to_string(),
            title: title.unwrap_or("New Tab").to_string(),
            loading: false,
            created_at: Self::now(),
        };
        self.tabs.push(tab);
        self.tab_order.push(id.clone());
        if active || self.active_tab_id.is_none() {
            self.active_tab_id = Some(id.clone());
        }
        id
    }

    /// Close a tab. If it's the active tab, switch to the nearest neighbor.
    /// Closing the last remaining tab is refused so the collection never
    /// becomes empty.
    fn close_tab(&mut self, tab_id: &str) -> Result<(), TabError> {
        let tab_idx = self
            .find_tab_index(tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))?;
        let order_idx = self
            .find_order_index(tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))?;

        if self.tabs.len() <= 1 {
            return Err(TabError::LastTab);
        }

        let need_switch = self.active_tab_id.as_deref() == Some(tab_id);

        self.tabs.remove(tab_idx);
        self.tab_order.remove(order_idx);

        if need_switch {
            let new_order_idx = if order_idx < self.tab_order.len() {
                order_idx
            } else {
                self.tab_order.len() - 1
            };
            self.active_tab_id = Some(self.tab_order[new_order_idx].clone());
        }

        Ok(())
    }

    /// Switch the active tab to the given tab_id.
    fn switch_tab(&mut self, tab_id: &str) -> Result<(), TabError> {
        if self.find_tab_index(tab_id).is_none() {
            return Err(TabError::NotFound(tab_id.to_string()));
        }
        self.active_tab_id = Some(tab_id.to_string());
        Ok(())
    }

    fn get_tab(&self, tab_id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == tab_id)
    }

    fn get_all_tabs(&self) -> Vec<&Tab> {
        // Return tabs in tab_order sequence
        self.tab_order
            .iter()
            .filter_map(|id| self.tabs.iter().find(|t| t.id == *id))
            .collect()
    }

    fn get_active_tab(&self) -> Option<&Tab> {
        self.active_tab_id
            .as_ref()
            .and_then(|id| self.tabs.iter().find(|t| t.id == *id))
    }

    fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    fn get_tab_order(&self) -> &[String] {
        &self.tab_order
    }

    fn update_tab_url(&mut self, tab_id: &str, url: &str) -> Result<(), TabError> {
        let tab = self
            .tabs
            .iter_mut()
            .find(|t| t.id == tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))?;
        tab.url = url.to_string();
        Ok(())
    }

    fn update_tab_title(&mut self, tab_id: &str, title: &str) -> Result<(), TabError> {
        let tab = self
            .tabs
            .iter_mut()
            .find(|t| t.id == tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))?;
        tab.title = title.to_string();
        Ok(())
    }

    fn set_tab_loading(&mut self, tab_id: &str, loading: bool) -> Result<(), TabError> {
        let tab = self
            .tabs
            .iter_mut()
            .find(|t| t.id == tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))?;
        tab.loading = loading;
        Ok(())
    }
}
