//! Canonical catalog records, as seen by everything above the backend layer.

/// A prompt from the catalog. Author shape differences are already resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prompt {
    pub name: String,
    pub description: String,
    pub instruction: Option<String>,
    pub tags: Option<Vec<String>>,
    pub author: Option<String>,
    pub howto: Option<String>,
    pub public: Option<bool>,
    pub source_url: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// A project rule from the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rule {
    pub name: String,
    pub description: String,
    pub content: String,
    pub tags: Option<Vec<String>>,
    pub author: Option<String>,
    pub public: Option<bool>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// One page of results plus the opaque token for the next page, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_cursor: Option<String>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, next_cursor: Option<String>) -> Self {
        Self { items, next_cursor }
    }
}
