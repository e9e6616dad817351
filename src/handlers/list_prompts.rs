use serde::Serialize;

use crate::backend::{Page, Prompt, PromptCatalog};
use crate::error::ToolError;
use crate::protocol::{ListArgs, ToolResult};

#[derive(Debug, Serialize)]
struct ListPromptsResponse {
    prompts: Vec<PromptSummary>,
    #[serde(rename = "nextCursor", skip_serializing_if = "Option::is_none")]
    next_cursor: Option<String>,
}

#[derive(Debug, Serialize)]
struct PromptSummary {
    name: String,
    description: String,
    tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    author: Option<String>,
}

impl From<Prompt> for PromptSummary {
    fn from(p: Prompt) -> Self {
        Self {
            name: p.name,
            description: p.description,
            tags: p.tags.unwrap_or_default(),
            author: p.author,
        }
    }
}

/// Handle a `list_prompts` tool call.
///
/// Forwards the cursor and tag filter untouched and returns one page of
/// prompt summaries. The backend's next-page token, if any, is passed back
/// as `nextCursor`.
pub async fn handle(args: ListArgs, catalog: &dyn PromptCatalog) -> Result<ToolResult, ToolError> {
    let page = catalog.list_prompts(args.cursor(), args.tags()).await?;
    render(page)
}

/// Serialize a page of prompts as the `{ prompts, nextCursor }` envelope.
pub(crate) fn render(page: Page<Prompt>) -> Result<ToolResult, ToolError> {
    let payload = ListPromptsResponse {
        prompts: page.items.into_iter().map(PromptSummary::from).collect(),
        next_cursor: page.next_cursor,
    };

    Ok(ToolResult::json(&payload)?)
}
