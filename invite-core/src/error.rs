//! Error types.

use thiserror::Error;

/// Failure reported by an [`InviteSender`](crate::InviteSender).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("invite delivery failed: {0}")]
    Delivery(String),
    #[error("no invite sender is available")]
    Unavailable,
}
