//! MCP server for the promptz prompt and rule catalog.
//!
//! Exposes `list_prompts`, `get_prompt`, `list_rules`, and `get_rule` tools,
//! plus catalog prompts as MCP prompt templates, over JSON-RPC 2.0 stdio.
//! Every request is answered with one fresh query against the GraphQL backend.

pub mod backend;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod protocol;
pub mod server;

pub mod schema;
