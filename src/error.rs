use std::fmt;

use crate::backend::BackendError;

/// Which kind of catalog entry a request was about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Prompt,
    Rule,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prompt => f.write_str("Prompt"),
            Self::Rule => f.write_str("Rule"),
        }
    }
}

/// Request-scoped failure of a tool or prompt handler.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToolError {
    #[error("{0}")]
    InvalidRequest(String),
    #[error("{kind} not found: {name}")]
    NotFound { kind: EntityKind, name: String },
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for ToolError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("serialization failed: {err}"))
    }
}

impl ToolError {
    pub fn name_required(kind: EntityKind) -> Self {
        Self::InvalidRequest(format!("{kind} name is required"))
    }

    pub fn not_found(kind: EntityKind, name: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            name: name.into(),
        }
    }
}
