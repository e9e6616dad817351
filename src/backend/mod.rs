//! Backend access layer: the catalog queries and record normalization.

pub mod error;
pub mod graphql;
pub mod model;
pub mod queries;
pub mod transport;

pub use error::{BackendError, Operation, TransportError};
pub use graphql::GraphqlCatalog;
pub use model::{Page, Prompt, Rule};
pub use queries::{AuthorShape, QuerySet};
pub use transport::{HttpTransport, QueryTransport, API_KEY_HEADER};

/// Read-only access to the remote prompt and rule catalog.
///
/// Visibility is the backend's concern: implementations return whatever the
/// backend returns for the configured credential and never filter records
/// locally, by tag or by the `public` flag.
#[async_trait::async_trait]
pub trait PromptCatalog: Send + Sync {
    /// One page of prompts. `cursor` must be a token from a previous page;
    /// `tags`, when given, is non-empty and matches items carrying any of them.
    async fn list_prompts(
        &self,
        cursor: Option<String>,
        tags: Option<Vec<String>>,
    ) -> Result<Page<Prompt>, BackendError>;

    /// Prompts whose name or description contains `query`. Matching is done
    /// by the backend; `query` is non-empty.
    async fn search_prompts(
        &self,
        query: &str,
        cursor: Option<String>,
    ) -> Result<Page<Prompt>, BackendError>;

    /// Exact-name lookup. The first match wins; no match is `Ok(None)`.
    async fn get_prompt_by_name(&self, name: &str) -> Result<Option<Prompt>, BackendError>;

    async fn list_rules(
        &self,
        cursor: Option<String>,
        tags: Option<Vec<String>>,
    ) -> Result<Page<Rule>, BackendError>;

    async fn get_rule_by_name(&self, name: &str) -> Result<Option<Rule>, BackendError>;
}
