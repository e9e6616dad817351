//! Shared fakes for integration tests.
#![allow(dead_code)]

use std::sync::Mutex;

use mcp_promptz_server::backend::{
    BackendError, Page, Prompt, PromptCatalog, QueryTransport, Rule, TransportError,
};
use serde_json::Value;

/// A catalog call as the mapping layer issued it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListPrompts {
        cursor: Option<String>,
        tags: Option<Vec<String>>,
    },
    SearchPrompts {
        query: String,
        cursor: Option<String>,
    },
    GetPrompt(String),
    ListRules {
        cursor: Option<String>,
        tags: Option<Vec<String>>,
    },
    GetRule(String),
}

/// In-memory catalog with canned responses that records every call.
#[derive(Default)]
pub struct FakeCatalog {
    pub prompt_page: Option<Page<Prompt>>,
    pub prompt: Option<Prompt>,
    pub rule_page: Option<Page<Rule>>,
    pub rule: Option<Rule>,
    pub failure: Option<BackendError>,
    calls: Mutex<Vec<Call>>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prompt_page(mut self, items: Vec<Prompt>, next: Option<&str>) -> Self {
        self.prompt_page = Some(Page::new(items, next.map(String::from)));
        self
    }

    pub fn with_prompt(mut self, prompt: Prompt) -> Self {
        self.prompt = Some(prompt);
        self
    }

    pub fn with_rule_page(mut self, items: Vec<Rule>, next: Option<&str>) -> Self {
        self.rule_page = Some(Page::new(items, next.map(String::from)));
        self
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rule = Some(rule);
        self
    }

    pub fn failing(mut self, err: BackendError) -> Self {
        self.failure = Some(err);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, call: Call) -> Result<(), BackendError> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl PromptCatalog for FakeCatalog {
    async fn list_prompts(
        &self,
        cursor: Option<String>,
        tags: Option<Vec<String>>,
    ) -> Result<Page<Prompt>, BackendError> {
        self.record(Call::ListPrompts { cursor, tags })?;
        Ok(self
            .prompt_page
            .clone()
            .unwrap_or_else(|| Page::new(Vec::new(), None)))
    }

    async fn search_prompts(
        &self,
        query: &str,
        cursor: Option<String>,
    ) -> Result<Page<Prompt>, BackendError> {
        self.record(Call::SearchPrompts {
            query: query.to_string(),
            cursor,
        })?;
        Ok(self
            .prompt_page
            .clone()
            .unwrap_or_else(|| Page::new(Vec::new(), None)))
    }

    async fn get_prompt_by_name(&self, name: &str) -> Result<Option<Prompt>, BackendError> {
        self.record(Call::GetPrompt(name.to_string()))?;
        Ok(self.prompt.clone())
    }

    async fn list_rules(
        &self,
        cursor: Option<String>,
        tags: Option<Vec<String>>,
    ) -> Result<Page<Rule>, BackendError> {
        self.record(Call::ListRules { cursor, tags })?;
        Ok(self
            .rule_page
            .clone()
            .unwrap_or_else(|| Page::new(Vec::new(), None)))
    }

    async fn get_rule_by_name(&self, name: &str) -> Result<Option<Rule>, BackendError> {
        self.record(Call::GetRule(name.to_string()))?;
        Ok(self.rule.clone())
    }
}

/// Transport that returns one canned `data` value (or error) and records
/// every document and variable set it was asked to send.
pub struct FakeTransport {
    response: Mutex<Option<Result<Value, TransportError>>>,
    pub sent: Mutex<Vec<(String, Value)>>,
}

impl FakeTransport {
    pub fn returning(data: Value) -> Self {
        Self {
            response: Mutex::new(Some(Ok(data))),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(err: TransportError) -> Self {
        Self {
            response: Mutex::new(Some(Err(err))),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn last_variables(&self) -> Value {
        self.sent.lock().unwrap().last().unwrap().1.clone()
    }

    pub fn last_document(&self) -> String {
        self.sent.lock().unwrap().last().unwrap().0.clone()
    }
}

#[async_trait::async_trait]
impl QueryTransport for FakeTransport {
    async fn query(&self, document: &str, variables: Value) -> Result<Value, TransportError> {
        self.sent
            .lock()
            .unwrap()
            .push((document.to_string(), variables));
        self.response
            .lock()
            .unwrap()
            .take()
            .expect("FakeTransport queried more than once")
    }
}

pub fn prompt(name: &str, description: &str) -> Prompt {
    Prompt {
        name: name.to_string(),
        description: description.to_string(),
        ..Default::default()
    }
}

pub fn rule(name: &str, description: &str, content: &str) -> Rule {
    Rule {
        name: name.to_string(),
        description: description.to_string(),
        content: content.to_string(),
        ..Default::default()
    }
}

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}
