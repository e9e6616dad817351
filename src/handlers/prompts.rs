//! Prompt templates: catalog prompts exposed through `prompts/list` and
//! `prompts/get`, ready to be dropped into a conversation.

use crate::backend::{Prompt, PromptCatalog};
use crate::error::{EntityKind, ToolError};
use crate::protocol::{
    GetPromptParams, GetPromptResult, ListPromptsParams, ListPromptsResult, PromptDescriptor,
    PromptMessage,
};

pub fn to_descriptor(prompt: &Prompt) -> PromptDescriptor {
    PromptDescriptor {
        name: prompt.name.clone(),
        description: prompt.description.clone(),
    }
}

/// The prompt's instruction, verbatim, as a single user message.
pub fn to_message(prompt: &Prompt) -> PromptMessage {
    PromptMessage::user(prompt.instruction.clone().unwrap_or_default())
}

pub async fn list(
    params: ListPromptsParams,
    catalog: &dyn PromptCatalog,
) -> Result<ListPromptsResult, ToolError> {
    let page = catalog.list_prompts(params.cursor, None).await?;

    Ok(ListPromptsResult {
        prompts: page.items.iter().map(to_descriptor).collect(),
        next_cursor: page.next_cursor,
    })
}

pub async fn get(
    params: GetPromptParams,
    catalog: &dyn PromptCatalog,
) -> Result<GetPromptResult, ToolError> {
    if params.name.is_empty() {
        return Err(ToolError::name_required(EntityKind::Prompt));
    }

    let prompt = catalog
        .get_prompt_by_name(&params.name)
        .await?
        .ok_or_else(|| ToolError::not_found(EntityKind::Prompt, params.name.as_str()))?;

    Ok(GetPromptResult {
        messages: vec![to_message(&prompt)],
        description: prompt.description,
    })
}
