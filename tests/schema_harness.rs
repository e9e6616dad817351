//! Tool payloads checked against their frozen JSON Schemas.

mod common;

use common::{prompt, rule, strings, FakeCatalog};
use mcp_promptz_server::backend::{Prompt, Rule};
use mcp_promptz_server::handlers::{get_prompt, get_rule, list_prompts, list_rules};
use mcp_promptz_server::protocol::{GetArgs, ListArgs};
use mcp_promptz_server::schema::{
    list_payload_schema, prompt_payload_schema, rule_payload_schema, validate_text,
    SchemaValidationError,
};

#[test]
fn json_schema_harness_rejects_extra_fields() {
    let instance = r#"{
      "name": "p",
      "description": "d",
      "tags": [],
      "howto": "",
      "id": "leaked-internal-id"
    }"#;

    let err = validate_text(&prompt_payload_schema(), instance).unwrap_err();
    assert!(matches!(err, SchemaValidationError::ValidationFailed(_)));
}

#[tokio::test]
async fn list_payloads_match_schema() {
    let catalog = FakeCatalog::new()
        .with_prompt_page(
            vec![
                prompt("a", "first"),
                Prompt {
                    tags: Some(strings(&["CLI"])),
                    author: Some("jane".into()),
                    ..prompt("b", "second")
                },
            ],
            Some("next"),
        )
        .with_rule_page(vec![rule("r", "d", "c")], None);

    let prompts = list_prompts::handle(ListArgs::default(), &catalog).await.unwrap();
    validate_text(&list_payload_schema("prompts"), &prompts.content[0].text).unwrap();

    let rules = list_rules::handle(ListArgs::default(), &catalog).await.unwrap();
    validate_text(&list_payload_schema("rules"), &rules.content[0].text).unwrap();
}

#[tokio::test]
async fn detail_payloads_match_schema() {
    let catalog = FakeCatalog::new()
        .with_prompt(prompt("p", "d"))
        .with_rule(Rule {
            author: Some("ops".into()),
            ..rule("r", "d", "content")
        });
    let args = GetArgs {
        name: Some("x".into()),
    };

    let p = get_prompt::handle(args.clone(), &catalog).await.unwrap();
    validate_text(&prompt_payload_schema(), &p.content[0].text).unwrap();

    let r = get_rule::handle(args, &catalog).await.unwrap();
    validate_text(&rule_payload_schema(), &r.content[0].text).unwrap();
}
