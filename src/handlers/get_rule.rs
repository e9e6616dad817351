use serde::Serialize;

use crate::backend::{PromptCatalog, Rule};
use crate::error::{EntityKind, ToolError};
use crate::protocol::{GetArgs, ToolResult};

#[derive(Debug, Serialize)]
struct RuleDetail {
    name: String,
    description: String,
    tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    author: Option<String>,
    content: String,
}

impl From<Rule> for RuleDetail {
    fn from(r: Rule) -> Self {
        Self {
            name: r.name,
            description: r.description,
            tags: r.tags.unwrap_or_default(),
            author: r.author,
            content: r.content,
        }
    }
}

/// Handle a `get_rule` tool call.
pub async fn handle(args: GetArgs, catalog: &dyn PromptCatalog) -> Result<ToolResult, ToolError> {
    let name = args
        .name
        .filter(|n| !n.is_empty())
        .ok_or_else(|| ToolError::name_required(EntityKind::Rule))?;

    let rule = catalog
        .get_rule_by_name(&name)
        .await?
        .ok_or_else(|| ToolError::not_found(EntityKind::Rule, name))?;

    Ok(ToolResult::json(&RuleDetail::from(rule))?)
}
