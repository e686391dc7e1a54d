//! MCP surface: tool registration and the elicitation session adapter.

pub mod session;
pub mod tools;

pub use tools::{ConfirmServer, SERVER_NAME, SERVER_VERSION};
