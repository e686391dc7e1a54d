//! `customer_delete` tool registration and server identity.

use crate::handlers::{customer_delete_handler, DeleteCustomerInput};
use rmcp::handler::server::{router::tool::ToolRouter, wrapper::Parameters};
use rmcp::model::{ErrorData as McpError, *};
use rmcp::service::RequestContext;
use rmcp::{tool, tool_handler, tool_router, RoleServer, ServerHandler};

pub const SERVER_NAME: &str = "go-elicitation-server";
pub const SERVER_VERSION: &str = "0.1.0";

/// MCP server exposing a single `customer_delete` tool.
///
/// Every call asks the client to confirm through elicitation before
/// reporting the (simulated) deletion. The server holds no state between
/// calls, so one instance can back any number of sessions.
#[derive(Clone)]
pub struct ConfirmServer {
    tool_router: ToolRouter<Self>,
}

impl Default for ConfirmServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl ConfirmServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Delete a customer once the user confirms
    #[tool(description = "Delete a customer after user confirmation.")]
    async fn customer_delete(
        &self,
        Parameters(input): Parameters<DeleteCustomerInput>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let customer_id = input.customer_id.clone();
        let output = customer_delete_handler(&context.peer, input)
            .await
            .map_err(|e| {
                tracing::warn!(%customer_id, error = %e, "confirmation round-trip failed");
                McpError::internal_error(e.to_string(), None)
            })?;

        tracing::info!(
            customer_id = %output.customer_id,
            decision = ?output.decision,
            "customer_delete resolved"
        );

        Ok(CallToolResult::success(vec![Content::text(output.message)]))
    }
}

#[tool_handler]
impl ServerHandler for ConfirmServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: SERVER_VERSION.to_string(),
                ..Default::default()
            },
            instructions: Some("Demonstrates elicitation: customer_delete asks the user to confirm before reporting a simulated deletion.".to_string()),
            ..Default::default()
        }
    }
}
