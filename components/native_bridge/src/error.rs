//! Errors raised while invoking a callback handle.

use thiserror::Error;

/// A failure raised by callback invocation.
///
/// Settlement itself never fails: an absent handle is a no-op, and payload
/// construction is infallible. What can fail is delivering the settlement to
/// the JavaScript side, and such failures are returned to the settlement
/// caller unmodified - never caught or wrapped by the promise.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    /// The JavaScript runtime that registered the callback is gone.
    #[error("javascript runtime is no longer available: {0}")]
    RuntimeUnavailable(String),

    /// The callback was delivered but the invocation itself failed.
    #[error("callback invocation failed: {0}")]
    Invocation(String),
}
