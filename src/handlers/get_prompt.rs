use serde::Serialize;

use crate::backend::{Prompt, PromptCatalog};
use crate::error::{EntityKind, ToolError};
use crate::protocol::{GetArgs, ToolResult};

#[derive(Debug, Serialize)]
struct PromptDetail {
    name: String,
    description: String,
    tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    instruction: Option<String>,
    howto: String,
}

impl From<Prompt> for PromptDetail {
    fn from(p: Prompt) -> Self {
        Self {
            name: p.name,
            description: p.description,
            tags: p.tags.unwrap_or_default(),
            author: p.author,
            instruction: p.instruction,
            howto: p.howto.unwrap_or_default(),
        }
    }
}

/// Handle a `get_prompt` tool call.
///
/// A missing or empty `name` is rejected before the catalog is queried.
pub async fn handle(args: GetArgs, catalog: &dyn PromptCatalog) -> Result<ToolResult, ToolError> {
    let name = args
        .name
        .filter(|n| !n.is_empty())
        .ok_or_else(|| ToolError::name_required(EntityKind::Prompt))?;

    let prompt = catalog
        .get_prompt_by_name(&name)
        .await?
        .ok_or_else(|| ToolError::not_found(EntityKind::Prompt, name))?;

    Ok(ToolResult::json(&PromptDetail::from(prompt))?)
}
