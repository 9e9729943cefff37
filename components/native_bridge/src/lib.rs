//! Native-side settlement of JavaScript bridge promises.
//!
//! When JavaScript hands native code a pending operation, it supplies a pair
//! of one-shot callbacks: one to fulfil, one to fail. This crate wraps that
//! pair in a [`BridgePromise`] that native code settles exactly once, with a
//! family of reject variants for attaching an error code, message, and an
//! underlying [`PlatformError`](bridge_types::PlatformError) cause, serialized
//! into the structured payload the JavaScript side expects.
//!
//! # Overview
//!
//! - [`BridgePromise`] - One-shot settlement of a pending JS operation
//! - [`Callback`] - Move-only callback handle into the JS runtime
//! - [`serialize_error`] - Failure-to-payload serialization
//! - [`BridgeError`] - Failures raised by callback invocation itself
//!
//! # Examples
//!
//! ```
//! use bridge_types::BridgeValue;
//! use native_bridge::{BridgePromise, Callback};
//!
//! let reject = Callback::new(|payload| {
//!     assert!(matches!(payload, BridgeValue::Object(_)));
//!     Ok(())
//! });
//! let promise = BridgePromise::new(None, Some(reject));
//! promise.reject("E_TIMEOUT", "operation timed out").unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod callback;
pub mod error;
pub mod payload;
pub mod promise;

pub use callback::Callback;
pub use error::BridgeError;
pub use payload::{serialize_error, MAX_CAUSE_DEPTH};
pub use promise::{BridgePromise, DEFAULT_ERROR_CODE};
