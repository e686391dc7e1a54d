//! Confirmation round-trip model: what we ask the client for, what it can
//! answer, and how an answer resolves into a deletion decision.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Name of the single field the client is asked to fill in.
pub const CONFIRM_FIELD: &str = "confirm";

/// Description shown by clients when the prompt message is empty.
pub const CONFIRM_DESCRIPTION: &str = "Confirm the deletion of the data.";

const ACCEPT_ACTION: &str = "accept";
const DECLINE_ACTION: &str = "decline";

/// Elicitation request sent to the calling client, in MCP wire shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElicitationRequest {
    pub message: String,
    pub requested_schema: Value,
}

impl ElicitationRequest {
    /// Request asking the user to confirm a deletion.
    ///
    /// The message is left empty on purpose: clients must fall back to the
    /// schema description when prompting.
    pub fn delete_confirmation() -> Self {
        Self {
            message: String::new(),
            requested_schema: confirmation_schema(),
        }
    }
}

/// Object schema with one required boolean `confirm` property.
pub fn confirmation_schema() -> Value {
    json!({
        "type": "object",
        "description": CONFIRM_DESCRIPTION,
        "properties": {
            CONFIRM_FIELD: {
                "type": "boolean",
                "description": CONFIRM_DESCRIPTION,
            }
        },
        "required": [CONFIRM_FIELD],
    })
}

/// What the client answered.
#[derive(Debug, Clone, PartialEq)]
pub enum ElicitationOutcome {
    /// User submitted the form; maps field names to submitted values.
    Accepted(Map<String, Value>),
    Declined,
    Cancelled,
}

#[derive(Deserialize)]
struct RawOutcome {
    action: String,
    #[serde(default)]
    content: Option<Value>,
}

impl ElicitationOutcome {
    /// Decode an elicitation result from its wire form
    /// (`{"action": "...", "content": {...}}`).
    ///
    /// Accepted content that is missing or not an object decodes as an empty
    /// mapping. Unknown actions decode as [`ElicitationOutcome::Cancelled`].
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        let raw: RawOutcome = serde_json::from_value(value)?;
        Ok(match raw.action.as_str() {
            ACCEPT_ACTION => match raw.content {
                Some(Value::Object(fields)) => Self::Accepted(fields),
                _ => Self::Accepted(Map::new()),
            },
            DECLINE_ACTION => Self::Declined,
            _ => Self::Cancelled,
        })
    }

    /// Submitted `confirm` value, if the user accepted and filled it in.
    pub fn confirm_value(&self) -> Option<ConfirmValue> {
        match self {
            Self::Accepted(fields) => fields.get(CONFIRM_FIELD).map(ConfirmValue::from),
            Self::Declined | Self::Cancelled => None,
        }
    }
}

/// A submitted `confirm` value, narrowed to the cases the coercion cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmValue {
    Bool(bool),
    Text(String),
    /// Any other JSON value, kept as its string representation.
    Other(String),
}

impl From<&Value> for ConfirmValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Bool(flag) => Self::Bool(*flag),
            Value::String(text) => Self::Text(text.clone()),
            other => Self::Other(other.to_string()),
        }
    }
}

impl ConfirmValue {
    /// Booleans count as-is; everything else must read "yes".
    pub fn is_confirmed(&self) -> bool {
        match self {
            Self::Bool(flag) => *flag,
            Self::Text(text) | Self::Other(text) => says_yes(text),
        }
    }
}

// Unicode case mapping, so "yeſ" (long s) matches as well.
fn says_yes(text: &str) -> bool {
    text.trim().to_uppercase() == "YES"
}

/// Resolved state of one deletion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Confirmed,
    Cancelled,
}

impl Decision {
    pub fn from_outcome(outcome: &ElicitationOutcome) -> Self {
        match outcome.confirm_value() {
            Some(value) if value.is_confirmed() => Self::Confirmed,
            _ => Self::Cancelled,
        }
    }

    pub fn is_confirmed(self) -> bool {
        matches!(self, Self::Confirmed)
    }

    /// Text returned to the caller for this decision.
    pub fn message(self, customer_id: &str) -> String {
        match self {
            Self::Confirmed => format!("Customer {customer_id} deleted."),
            Self::Cancelled => format!("Deletion cancelled for {customer_id}."),
        }
    }
}
