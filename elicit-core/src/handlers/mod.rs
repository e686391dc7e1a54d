//! Core handler for the customer deletion demo.
//!
//! The handler only talks to the client through [`ElicitationSession`], so it
//! can be driven by the MCP server peer or by a scripted session in tests.

mod types;

pub use types::*;

use crate::confirm::{Decision, ElicitationOutcome, ElicitationRequest};
use crate::error::ConfirmError;
use std::future::Future;

/// Something that can ask the calling client to fill in a form.
pub trait ElicitationSession {
    /// Send `request` and wait for the user's answer.
    ///
    /// Returns `Err` only when the exchange itself fails; a decline or cancel
    /// is a normal [`ElicitationOutcome`].
    fn elicit(
        &self,
        request: ElicitationRequest,
    ) -> impl Future<Output = Result<ElicitationOutcome, ConfirmError>> + Send;
}

/// Handler for `customer_delete` tool: ask for confirmation, then report.
///
/// # Behavior
///
/// 1. Sends the delete confirmation request (empty message, boolean `confirm`)
/// 2. Resolves the answer into a [`Decision`]
/// 3. Returns the decision and the text for the caller
///
/// Nothing is deleted. Failure of the exchange is returned as
/// [`ConfirmError::Elicitation`], never turned into a cancellation.
pub async fn customer_delete_handler<S>(
    session: &S,
    input: DeleteCustomerInput,
) -> Result<DeleteCustomerOutput, ConfirmError>
where
    S: ElicitationSession + Sync,
{
    let outcome = session
        .elicit(ElicitationRequest::delete_confirmation())
        .await?;

    let decision = Decision::from_outcome(&outcome);
    let message = decision.message(&input.customer_id);

    Ok(DeleteCustomerOutput {
        customer_id: input.customer_id,
        decision,
        message,
    })
}
