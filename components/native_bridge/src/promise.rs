//! One-shot settlement of pending JavaScript operations.
//!
//! A [`BridgePromise`] is constructed with the resolve/reject callback pair
//! the JavaScript side registered for one pending operation, and is settled
//! exactly once. Every settlement method takes the promise by value, so
//! settling twice - or resolving after rejecting - does not compile.

use bridge_types::{BridgeMap, BridgeValue, PlatformError};

use crate::payload::serialize_error;
use crate::{BridgeError, Callback};

/// Error code substituted when a rejection carries no explicit code.
///
/// The literal is part of the wire contract: consumers on the JavaScript side
/// match on it to mean "unspecified error".
pub const DEFAULT_ERROR_CODE: &str = "ERR_UNSPECIFIED";

/// Settles one pending JavaScript operation, exactly once.
///
/// Either handle may be absent, in which case the corresponding settlement is
/// a silent no-op - call sites that only care about one side of settlement
/// stay fire-and-forget. Dropping an unsettled promise abandons the pending
/// operation.
///
/// Rejections reach the JavaScript side as a map with `code` and `message`
/// keys, plus a nested `platformError` record when a cause was supplied (see
/// [`serialize_error`]).
///
/// # Examples
///
/// ```
/// use bridge_types::BridgeValue;
/// use native_bridge::{BridgePromise, Callback};
///
/// let resolve = Callback::new(|value| {
///     assert_eq!(value, BridgeValue::from("done"));
///     Ok(())
/// });
/// let promise = BridgePromise::resolve_only(resolve);
/// promise.resolve("done").unwrap();
/// ```
#[derive(Debug)]
pub struct BridgePromise {
    resolve: Option<Callback>,
    reject: Option<Callback>,
}

impl BridgePromise {
    /// Creates a promise from the callback pair the JavaScript side supplied.
    pub fn new(resolve: Option<Callback>, reject: Option<Callback>) -> Self {
        Self { resolve, reject }
    }

    /// Creates a promise that only reports success.
    pub fn resolve_only(resolve: Callback) -> Self {
        Self::new(Some(resolve), None)
    }

    /// Creates a promise that only reports failure.
    pub fn reject_only(reject: Callback) -> Self {
        Self::new(None, Some(reject))
    }

    /// Creates a promise with no handles; every settlement is a no-op.
    pub fn detached() -> Self {
        Self::new(None, None)
    }

    /// Fulfils the pending operation with `value`.
    ///
    /// The value is forwarded to the resolve handle verbatim. With no resolve
    /// handle this is a no-op.
    pub fn resolve(self, value: impl Into<BridgeValue>) -> Result<(), BridgeError> {
        match self.resolve {
            Some(callback) => callback.invoke(value.into()),
            None => {
                tracing::trace!("resolve on a promise with no resolve handle");
                Ok(())
            }
        }
    }

    /// Fails the pending operation with an error code and message.
    pub fn reject(self, code: &str, message: impl Into<String>) -> Result<(), BridgeError> {
        self.reject_with(Some(code), Some(message.into()), None)
    }

    /// Fails the pending operation with a message only; the code falls back
    /// to [`DEFAULT_ERROR_CODE`].
    #[deprecated(note = "supply an explicit error code via `reject`")]
    pub fn reject_message(self, message: impl Into<String>) -> Result<(), BridgeError> {
        self.reject_with(None, Some(message.into()), None)
    }

    /// Fails the pending operation with a cause, deriving both code and
    /// message from it.
    ///
    /// A host-application failure supplies its own code; any other failure
    /// falls back to [`DEFAULT_ERROR_CODE`].
    pub fn reject_error(self, cause: &PlatformError) -> Result<(), BridgeError> {
        let code = cause.code().unwrap_or(DEFAULT_ERROR_CODE);
        self.reject_with(Some(code), cause.message.clone(), Some(cause))
    }

    /// Fails the pending operation with an explicit code and a cause; the
    /// cause's own message is reused as the payload message.
    pub fn reject_coded_error(
        self,
        code: &str,
        cause: &PlatformError,
    ) -> Result<(), BridgeError> {
        self.reject_with(Some(code), cause.message.clone(), Some(cause))
    }

    /// Fails the pending operation; the canonical reject path.
    ///
    /// An absent `code` is substituted with [`DEFAULT_ERROR_CODE`]; an absent
    /// `message` is forwarded as null; a cause, when present, is serialized
    /// under the `platformError` key. With no reject handle this is a no-op.
    pub fn reject_with(
        self,
        code: Option<&str>,
        message: Option<String>,
        cause: Option<&PlatformError>,
    ) -> Result<(), BridgeError> {
        let callback = match self.reject {
            Some(callback) => callback,
            None => {
                tracing::trace!("reject on a promise with no reject handle");
                return Ok(());
            }
        };

        let code = code.unwrap_or(DEFAULT_ERROR_CODE);
        tracing::debug!(code, "rejecting bridge promise");

        // The JavaScript side expects a map with at least the error message;
        // anything extra becomes available on the JS error instance.
        let mut payload = BridgeMap::new();
        payload.insert("code", code);
        payload.insert("message", message);
        if let Some(cause) = cause {
            payload.insert("platformError", serialize_error(cause));
        }

        callback.invoke(BridgeValue::Object(payload))
    }
}
