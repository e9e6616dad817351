use std::fmt;

/// Failure of a single GraphQL round trip.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API key is not a valid header value")]
    InvalidApiKey(#[from] reqwest::header::InvalidHeaderValue),
    #[error("backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("{0}")]
    GraphQl(String),
    #[error("response contained no data")]
    MissingData,
}

/// The catalog operations, named the way they appear in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListPrompts,
    SearchPrompts,
    GetPromptByName,
    ListRules,
    GetRuleByName,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ListPrompts => "list prompts",
            Self::SearchPrompts => "search prompts",
            Self::GetPromptByName => "get prompt by name",
            Self::ListRules => "list rules",
            Self::GetRuleByName => "get rule by name",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uniform error raised by every catalog operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Failed to {operation}: {message}")]
pub struct BackendError {
    pub operation: Operation,
    pub message: String,
}

impl BackendError {
    pub fn new(operation: Operation, cause: impl fmt::Display) -> Self {
        Self {
            operation,
            message: cause.to_string(),
        }
    }
}
