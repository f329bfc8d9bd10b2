use serde::{Deserialize, Serialize};

/// Represents a browser tab: the navigation state mirrored out of the
/// embedded web view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tab {
    pub id: String,
    pub url: String,
    pub title: String,
    pub loading: bool,
    pub created_at: i64,
}
