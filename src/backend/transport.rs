use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use super::error::TransportError;

/// Header carrying the static API credential.
pub const API_KEY_HEADER: &str = "x-api-key";

/// A request/response client against a remote GraphQL schema.
///
/// Returns the `data` member of the response on success.
#[async_trait::async_trait]
pub trait QueryTransport: Send + Sync {
    async fn query(&self, document: &str, variables: Value) -> Result<Value, TransportError>;
}

#[derive(Debug, Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    variables: Value,
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<GraphqlErrorMessage>>,
}

#[derive(Debug, Deserialize)]
struct GraphqlErrorMessage {
    message: String,
}

/// GraphQL over HTTP POST, authenticated with a static `x-api-key` header.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpTransport {
    pub fn new(endpoint: Url, api_key: &str) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();
        let mut key = HeaderValue::from_str(api_key)?;
        key.set_sensitive(true);
        headers.insert(API_KEY_HEADER, key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self { client, endpoint })
    }
}

#[async_trait::async_trait]
impl QueryTransport for HttpTransport {
    async fn query(&self, document: &str, variables: Value) -> Result<Value, TransportError> {
        let body = GraphqlRequest {
            query: document,
            variables,
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let payload: GraphqlResponse = response.json().await?;

        if let Some(errors) = payload.errors.filter(|e| !e.is_empty()) {
            let joined = errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(TransportError::GraphQl(joined));
        }

        match payload.data {
            Some(Value::Null) | None => Err(TransportError::MissingData),
            Some(data) => Ok(data),
        }
    }
}
