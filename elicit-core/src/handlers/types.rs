//! Input/Output types for the `customer_delete` handler.

use crate::confirm::Decision;
#[cfg(feature = "mcp")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// Input types

#[derive(Debug, Clone, Deserialize, Serialize)]
#[cfg_attr(feature = "mcp", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct DeleteCustomerInput {
    #[cfg_attr(feature = "mcp", schemars(description = "Customer ID to delete"))]
    pub customer_id: String,
}

// Output types

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCustomerOutput {
    pub customer_id: String,
    pub decision: Decision,
    pub message: String,
}
