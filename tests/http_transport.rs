//! HTTP transport tests against a mock GraphQL endpoint.

use mcp_promptz_server::backend::{
    AuthorShape, GraphqlCatalog, HttpTransport, PromptCatalog, QueryTransport, TransportError,
};
use serde_json::{json, Value};
use url::Url;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn transport(server: &MockServer) -> HttpTransport {
    let endpoint = Url::parse(&format!("{}/graphql", server.uri())).unwrap();
    HttpTransport::new(endpoint, "test-key").unwrap()
}

#[tokio::test]
async fn sends_api_key_and_returns_data() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("x-api-key", "test-key"))
        .and(body_partial_json(json!({ "variables": { "name": "testPrompt" } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "listByName": { "items": [] } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let data = transport(&server)
        .query("query { x }", json!({ "name": "testPrompt" }))
        .await
        .unwrap();

    assert_eq!(data, json!({ "listByName": { "items": [] } }));
}

#[tokio::test]
async fn graphql_errors_are_joined() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [
                { "message": "Validation error of type FieldUndefined" },
                { "message": "Not Authorized" }
            ]
        })))
        .mount(&server)
        .await;

    let err = transport(&server).query("query { x }", json!({})).await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "Validation error of type FieldUndefined; Not Authorized"
    );
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    let err = transport(&server).query("query { x }", json!({})).await.unwrap_err();

    match err {
        TransportError::Status { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "Unauthorized");
        }
        other => panic!("expected a status error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_data_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": null })))
        .mount(&server)
        .await;

    let err = transport(&server).query("query { x }", json!({})).await.unwrap_err();

    assert!(matches!(err, TransportError::MissingData));
}

#[tokio::test]
async fn catalog_over_http_reports_uniform_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [{ "message": "Unauthorized" }]
        })))
        .mount(&server)
        .await;

    let catalog = GraphqlCatalog::new(transport(&server));
    let err = catalog.list_rules(None, None).await.unwrap_err();

    assert_eq!(err.to_string(), "Failed to list rules: Unauthorized");
}

#[tokio::test]
async fn profile_backend_gets_nested_author_selection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "variables": { "name": "testPrompt" } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "listByName": {
                    "items": [{
                        "name": "testPrompt",
                        "description": "d",
                        "author": { "displayName": "Jane Doe" }
                    }]
                }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let catalog = GraphqlCatalog::with_author_shape(transport(&server), AuthorShape::Profile);
    let prompt = catalog.get_prompt_by_name("testPrompt").await.unwrap().unwrap();
    assert_eq!(prompt.author.as_deref(), Some("Jane Doe"));

    let requests = server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    let document = body["query"].as_str().unwrap();
    assert!(document.contains("displayName"));
    assert!(!document.contains("owner_username"));
}

#[test]
fn rejects_api_key_that_cannot_be_a_header() {
    let endpoint = Url::parse("https://api.example.com/graphql").unwrap();

    let err = HttpTransport::new(endpoint, "bad\nkey").unwrap_err();

    assert!(matches!(err, TransportError::InvalidApiKey(_)));
}
