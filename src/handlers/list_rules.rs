use serde::Serialize;

use crate::backend::{PromptCatalog, Rule};
use crate::error::ToolError;
use crate::protocol::{ListArgs, ToolResult};

#[derive(Debug, Serialize)]
struct ListRulesResponse {
    rules: Vec<RuleSummary>,
    #[serde(rename = "nextCursor", skip_serializing_if = "Option::is_none")]
    next_cursor: Option<String>,
}

#[derive(Debug, Serialize)]
struct RuleSummary {
    name: String,
    description: String,
    tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    author: Option<String>,
}

impl From<Rule> for RuleSummary {
    fn from(r: Rule) -> Self {
        Self {
            name: r.name,
            description: r.description,
            tags: r.tags.unwrap_or_default(),
            author: r.author,
        }
    }
}

/// Handle a `list_rules` tool call.
pub async fn handle(args: ListArgs, catalog: &dyn PromptCatalog) -> Result<ToolResult, ToolError> {
    let page = catalog.list_rules(args.cursor(), args.tags()).await?;

    let payload = ListRulesResponse {
        rules: page.items.into_iter().map(RuleSummary::from).collect(),
        next_cursor: page.next_cursor,
    };

    Ok(ToolResult::json(&payload)?)
}
