use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Map, Value};

use super::error::{BackendError, Operation};
use super::model::{Page, Prompt, Rule};
use super::queries::{AuthorShape, QuerySet};
use super::transport::QueryTransport;
use super::PromptCatalog;

/// Catalog backed by the promptz GraphQL schema.
pub struct GraphqlCatalog<T> {
    transport: T,
    queries: QuerySet,
}

impl<T: QueryTransport> GraphqlCatalog<T> {
    /// Catalog for a backend exposing the author as `owner_username`.
    pub fn new(transport: T) -> Self {
        Self::with_author_shape(transport, AuthorShape::default())
    }

    pub fn with_author_shape(transport: T, shape: AuthorShape) -> Self {
        Self {
            transport,
            queries: QuerySet::for_shape(shape),
        }
    }

    pub fn queries(&self) -> &QuerySet {
        &self.queries
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Run one query and decode the connection found under `field`.
    async fn fetch<R: DeserializeOwned>(
        &self,
        operation: Operation,
        document: &str,
        variables: Value,
        field: &str,
    ) -> Result<Connection<R>, BackendError> {
        let data = self
            .transport
            .query(document, variables)
            .await
            .map_err(|e| fail(operation, e))?;

        decode_connection(data, field).map_err(|e| fail(operation, e))
    }
}

fn fail(operation: Operation, cause: impl std::fmt::Display) -> BackendError {
    let err = BackendError::new(operation, cause);
    tracing::error!(operation = %operation, "{err}");
    err
}

#[async_trait::async_trait]
impl<T: QueryTransport> PromptCatalog for GraphqlCatalog<T> {
    async fn list_prompts(
        &self,
        cursor: Option<String>,
        tags: Option<Vec<String>>,
    ) -> Result<Page<Prompt>, BackendError> {
        tracing::info!(operation = %Operation::ListPrompts, tags = ?tags, "listing prompts");

        let variables = list_variables(cursor, tags.as_deref());
        let connection: Connection<RawPrompt> = self
            .fetch(
                Operation::ListPrompts,
                &self.queries.list_prompts,
                variables,
                "listPrompts",
            )
            .await?;

        Ok(connection.into_page())
    }

    async fn search_prompts(
        &self,
        query: &str,
        cursor: Option<String>,
    ) -> Result<Page<Prompt>, BackendError> {
        tracing::info!(operation = %Operation::SearchPrompts, query, "searching prompts");

        let variables = search_variables(query, cursor);
        let connection: Connection<RawPrompt> = self
            .fetch(
                Operation::SearchPrompts,
                &self.queries.list_prompts,
                variables,
                "listPrompts",
            )
            .await?;

        Ok(connection.into_page())
    }

    async fn get_prompt_by_name(&self, name: &str) -> Result<Option<Prompt>, BackendError> {
        tracing::info!(operation = %Operation::GetPromptByName, name, "getting prompt");

        let connection: Connection<RawPrompt> = self
            .fetch(
                Operation::GetPromptByName,
                &self.queries.get_prompt_by_name,
                json!({ "name": name }),
                "listByName",
            )
            .await?;

        Ok(connection.into_first())
    }

    async fn list_rules(
        &self,
        cursor: Option<String>,
        tags: Option<Vec<String>>,
    ) -> Result<Page<Rule>, BackendError> {
        tracing::info!(operation = %Operation::ListRules, tags = ?tags, "listing rules");

        let variables = list_variables(cursor, tags.as_deref());
        let connection: Connection<RawRule> = self
            .fetch(
                Operation::ListRules,
                &self.queries.list_rules,
                variables,
                "listRules",
            )
            .await?;

        Ok(connection.into_page())
    }

    async fn get_rule_by_name(&self, name: &str) -> Result<Option<Rule>, BackendError> {
        tracing::info!(operation = %Operation::GetRuleByName, name, "getting rule");

        let connection: Connection<RawRule> = self
            .fetch(
                Operation::GetRuleByName,
                &self.queries.get_rule_by_name,
                json!({ "name": name }),
                "listRuleByName",
            )
            .await?;

        Ok(connection.into_first())
    }
}

/// Variables for a paginated listing. Unset cursor and filter are omitted.
///
/// Tags become an any-of filter, in the order given.
fn list_variables(cursor: Option<String>, tags: Option<&[String]>) -> Value {
    let mut vars = Map::new();

    if let Some(cursor) = cursor {
        vars.insert("nextToken".into(), Value::String(cursor));
    }

    if let Some(tags) = tags.filter(|t| !t.is_empty()) {
        let any_of: Vec<Value> = tags
            .iter()
            .map(|tag| json!({ "tags": { "contains": tag } }))
            .collect();
        vars.insert("filter".into(), json!({ "or": any_of }));
    }

    Value::Object(vars)
}

/// Variables for a text search. The backend's `contains` is case-sensitive,
/// so the term is tried in lower, upper and capitalized case against both
/// name and description.
fn search_variables(query: &str, cursor: Option<String>) -> Value {
    let mut vars = Map::new();

    if let Some(cursor) = cursor {
        vars.insert("nextToken".into(), Value::String(cursor));
    }

    let any_of: Vec<Value> = case_variations(query)
        .iter()
        .flat_map(|v| {
            [
                json!({ "name": { "contains": v } }),
                json!({ "description": { "contains": v } }),
            ]
        })
        .collect();
    vars.insert("filter".into(), json!({ "or": any_of }));

    Value::Object(vars)
}

fn case_variations(term: &str) -> Vec<String> {
    let lower = term.to_lowercase();
    let mut chars = lower.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };

    let mut variations = Vec::with_capacity(3);
    for v in [lower.clone(), term.to_uppercase(), capitalized] {
        if !variations.contains(&v) {
            variations.push(v);
        }
    }
    variations
}

fn decode_connection<R: DeserializeOwned>(
    mut data: Value,
    field: &str,
) -> Result<Connection<R>, String> {
    let raw = match data.get_mut(field) {
        Some(v) => v.take(),
        None => return Err(format!("response is missing `{field}`")),
    };

    if raw.is_null() {
        return Ok(Connection::default());
    }

    serde_json::from_value(raw).map_err(|e| format!("invalid `{field}` payload: {e}"))
}

// ---------------------------------------------------------------------------
// Wire records
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "R: Deserialize<'de>"))]
struct Connection<R> {
    #[serde(default)]
    items: Vec<Option<R>>,
    #[serde(rename = "nextToken", default)]
    next_token: Option<String>,
}

impl<R> Default for Connection<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_token: None,
        }
    }
}

impl<R> Connection<R> {
    fn into_page<M: From<R>>(self) -> Page<M> {
        let items = self.items.into_iter().flatten().map(M::from).collect();
        let next_cursor = self.next_token.filter(|t| !t.is_empty());
        Page::new(items, next_cursor)
    }

    fn into_first<M: From<R>>(self) -> Option<M> {
        self.items.into_iter().flatten().next().map(M::from)
    }
}

/// Nested author object, selected on `AuthorShape::Profile` backends.
#[derive(Debug, Deserialize)]
struct RawAuthor {
    #[serde(rename = "displayName", default)]
    display_name: Option<String>,
}

/// Resolve the author to one flat string: nested display name first, then
/// `owner_username`. Empty strings count as absent.
fn resolve_author(author: Option<RawAuthor>, owner_username: Option<String>) -> Option<String> {
    author
        .and_then(|a| a.display_name)
        .filter(|a| !a.is_empty())
        .or_else(|| owner_username.filter(|o| !o.is_empty()))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPrompt {
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    instruction: Option<String>,
    #[serde(default)]
    tags: Option<Vec<String>>,
    #[serde(default)]
    howto: Option<String>,
    #[serde(rename = "sourceURL", default)]
    source_url: Option<String>,
    #[serde(default)]
    public: Option<bool>,
    #[serde(rename = "owner_username", default)]
    owner_username: Option<String>,
    #[serde(default)]
    author: Option<RawAuthor>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    updated_at: Option<String>,
}

impl From<RawPrompt> for Prompt {
    fn from(raw: RawPrompt) -> Self {
        Self {
            author: resolve_author(raw.author, raw.owner_username),
            name: raw.name,
            description: raw.description.unwrap_or_default(),
            instruction: raw.instruction,
            tags: raw.tags,
            howto: raw.howto,
            public: raw.public,
            source_url: raw.source_url,
            created_at: raw.created_at,
            updated_at: raw.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRule {
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    tags: Option<Vec<String>>,
    #[serde(default)]
    public: Option<bool>,
    #[serde(rename = "owner_username", default)]
    owner_username: Option<String>,
    #[serde(default)]
    author: Option<RawAuthor>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    updated_at: Option<String>,
}

impl From<RawRule> for Rule {
    fn from(raw: RawRule) -> Self {
        Self {
            author: resolve_author(raw.author, raw.owner_username),
            name: raw.name,
            description: raw.description.unwrap_or_default(),
            content: raw.content.unwrap_or_default(),
            tags: raw.tags,
            public: raw.public,
            created_at: raw.created_at,
            updated_at: raw.updated_at,
        }
    }
}
