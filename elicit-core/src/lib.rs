//! Customer deletion behind an MCP elicitation round-trip.
//!
//! [`confirm`] holds the protocol-independent model (request schema, answer
//! coercion, decision). [`handlers`] runs one confirmation against any
//! [`handlers::ElicitationSession`]. The `mcp` and `mcp-http` features add the
//! rmcp server and its streamable HTTP listener.

pub mod confirm;
pub mod error;
pub mod handlers;

#[cfg(feature = "mcp")]
pub mod mcp;

#[cfg(feature = "mcp-http")]
pub mod http;

pub use crate::confirm::{ConfirmValue, Decision, ElicitationOutcome, ElicitationRequest};
pub use crate::error::ConfirmError;
