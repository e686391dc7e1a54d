//! Handler tests - drive `customer_delete` against a scripted session.
//!
//! The session answers every elicitation with a fixed wire result (or a
//! fixed failure) and records what it was asked.

use elicit_core::confirm::{confirmation_schema, ElicitationOutcome, ElicitationRequest};
use elicit_core::handlers::{customer_delete_handler, DeleteCustomerInput, ElicitationSession};
use elicit_core::{ConfirmError, Decision};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::sync::Mutex;

struct ScriptedSession {
    reply: Result<Value, String>,
    seen: Mutex<Vec<ElicitationRequest>>,
}

impl ScriptedSession {
    fn answering(reply: Value) -> Self {
        Self {
            reply: Ok(reply),
            seen: Mutex::new(Vec::new()),
        }
    }

    fn failing(cause: &str) -> Self {
        Self {
            reply: Err(cause.to_string()),
            seen: Mutex::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<ElicitationRequest> {
        self.seen.lock().unwrap().clone()
    }
}

impl ElicitationSession for ScriptedSession {
    async fn elicit(&self, request: ElicitationRequest) -> Result<ElicitationOutcome, ConfirmError> {
        self.seen.lock().unwrap().push(request);
        match &self.reply {
            Ok(wire) => ElicitationOutcome::from_value(wire.clone()).map_err(ConfirmError::elicitation),
            Err(cause) => Err(ConfirmError::elicitation(cause.clone())),
        }
    }
}

fn input(customer_id: &str) -> DeleteCustomerInput {
    DeleteCustomerInput {
        customer_id: customer_id.to_string(),
    }
}

async fn run(reply: Value, customer_id: &str) -> String {
    let session = ScriptedSession::answering(reply);
    customer_delete_handler(&session, input(customer_id))
        .await
        .expect("handler should succeed")
        .message
}

// ============================================================================
// Decisions
// ============================================================================

#[tokio::test]
async fn test_accept_with_true_deletes() {
    for id in ["42", "cust-001", "ünïcode id", ""] {
        let message = run(json!({"action": "accept", "content": {"confirm": true}}), id).await;
        assert_eq!(message, format!("Customer {id} deleted."));
    }
}

#[tokio::test]
async fn test_accept_with_false_cancels() {
    let message = run(json!({"action": "accept", "content": {"confirm": false}}), "42").await;
    assert_eq!(message, "Deletion cancelled for 42.");
}

#[tokio::test]
async fn test_decline_and_cancel_cancel() {
    for action in ["decline", "cancel"] {
        for id in ["42", "cust-001"] {
            let message = run(json!({"action": action}), id).await;
            assert_eq!(message, format!("Deletion cancelled for {id}."));
        }
    }
}

#[tokio::test]
async fn test_decline_ignores_content() {
    let message = run(json!({"action": "decline", "content": {"confirm": true}}), "42").await;
    assert_eq!(message, "Deletion cancelled for 42.");
}

#[tokio::test]
async fn test_string_answers() {
    for yes in ["yes", " Yes ", "YES", "\tyEs\n"] {
        let message = run(json!({"action": "accept", "content": {"confirm": yes}}), "7").await;
        assert_eq!(message, "Customer 7 deleted.", "answer {yes:?} should confirm");
    }
    for no in ["no", "true", "1", "", "y"] {
        let message = run(json!({"action": "accept", "content": {"confirm": no}}), "7").await;
        assert_eq!(message, "Deletion cancelled for 7.", "answer {no:?} should cancel");
    }
}

#[tokio::test]
async fn test_missing_confirm_cancels() {
    let message = run(json!({"action": "accept", "content": {"reason": "cleanup"}}), "9").await;
    assert_eq!(message, "Deletion cancelled for 9.");

    let message = run(json!({"action": "accept"}), "9").await;
    assert_eq!(message, "Deletion cancelled for 9.");
}

#[tokio::test]
async fn test_other_types_cancel() {
    for value in [json!(1), json!(null), json!({"yes": true}), json!([true])] {
        let message = run(json!({"action": "accept", "content": {"confirm": value}}), "3").await;
        assert_eq!(message, "Deletion cancelled for 3.");
    }
}

// ============================================================================
// Request shape and failures
// ============================================================================

#[tokio::test]
async fn test_sends_empty_message_and_confirm_schema() {
    let session = ScriptedSession::answering(json!({"action": "cancel"}));
    customer_delete_handler(&session, input("42")).await.unwrap();

    let requests = session.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].message, "");
    assert_eq!(requests[0].requested_schema, confirmation_schema());
}

#[tokio::test]
async fn test_output_carries_decision() {
    let session = ScriptedSession::answering(json!({"action": "accept", "content": {"confirm": true}}));
    let output = customer_delete_handler(&session, input("42")).await.unwrap();

    assert_eq!(output.customer_id, "42");
    assert_eq!(output.decision, Decision::Confirmed);
}

#[tokio::test]
async fn test_elicitation_failure_is_an_error() {
    let session = ScriptedSession::failing("transport closed");
    let err = customer_delete_handler(&session, input("42"))
        .await
        .expect_err("failure must not become a cancellation");

    assert!(matches!(err, ConfirmError::Elicitation { .. }));
    assert_eq!(err.to_string(), "eliciting failed: transport closed");
}

#[tokio::test]
async fn test_same_input_same_output() {
    let reply = json!({"action": "accept", "content": {"confirm": " yes"}});
    let session = ScriptedSession::answering(reply);

    let first = customer_delete_handler(&session, input("42")).await.unwrap();
    let second = customer_delete_handler(&session, input("42")).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(session.requests().len(), 2);
}
