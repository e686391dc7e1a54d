//! [`ElicitationSession`] over a live rmcp server peer.

use crate::confirm::{ElicitationOutcome, ElicitationRequest};
use crate::error::ConfirmError;
use crate::handlers::ElicitationSession;
use rmcp::model::CreateElicitationRequestParam;
use rmcp::{Peer, RoleServer};

impl ElicitationSession for Peer<RoleServer> {
    async fn elicit(&self, request: ElicitationRequest) -> Result<ElicitationOutcome, ConfirmError> {
        let params = to_params(&request)?;

        tracing::debug!("sending elicitation request to client");
        let result = self
            .create_elicitation(params)
            .await
            .map_err(ConfirmError::elicitation)?;

        let wire = serde_json::to_value(result).map_err(ConfirmError::elicitation)?;
        ElicitationOutcome::from_value(wire).map_err(ConfirmError::elicitation)
    }
}

/// Build the rmcp request params from the wire form of `request`.
pub fn to_params(request: &ElicitationRequest) -> Result<CreateElicitationRequestParam, ConfirmError> {
    serde_json::to_value(request)
        .and_then(serde_json::from_value)
        .map_err(ConfirmError::elicitation)
}
