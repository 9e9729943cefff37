//! One-shot callback handles into the JavaScript runtime.

use bridge_types::BridgeValue;

use crate::BridgeError;

/// A callback handle that can be invoked at most once.
///
/// Wraps a boxed `FnOnce`, so invoking consumes the handle: a second
/// invocation of the same handle is a compile-time error, which is what
/// enforces the settle-at-most-once contract of
/// [`BridgePromise`](crate::BridgePromise).
///
/// The closure may fail, e.g. when the runtime that registered it has
/// already shut down; that failure is returned to the invoker unmodified.
pub struct Callback {
    inner: Box<dyn FnOnce(BridgeValue) -> Result<(), BridgeError> + Send>,
}

impl Callback {
    /// Creates a new callback from a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce(BridgeValue) -> Result<(), BridgeError> + Send + 'static,
    {
        Self { inner: Box::new(f) }
    }

    /// Invokes the callback with `value`, consuming the handle.
    pub fn invoke(self, value: BridgeValue) -> Result<(), BridgeError> {
        (self.inner)(value)
    }
}

impl std::fmt::Debug for Callback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Callback {{ ... }}")
    }
}
