//! Error type for the confirmation round-trip.

use std::error::Error as StdError;

pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// The confirmation round-trip could not be completed.
///
/// Declines, cancels and unusable `confirm` values are not errors; they
/// resolve to a cancelled deletion.
#[derive(Debug, thiserror::Error)]
pub enum ConfirmError {
    #[error("eliciting failed: {source}")]
    Elicitation {
        #[source]
        source: BoxError,
    },
}

impl ConfirmError {
    pub fn elicitation(source: impl Into<BoxError>) -> Self {
        Self::Elicitation {
            source: source.into(),
        }
    }
}
