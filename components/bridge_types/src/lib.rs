//! Core types for the native-to-JavaScript bridge.
//!
//! This crate provides the foundational types for bridging native code to a
//! JavaScript runtime: the plain value model that crosses the runtime
//! boundary, the platform failure object, and stack-frame information.
//!
//! # Overview
//!
//! - [`BridgeValue`] - Plain, transportable representation of bridge values
//! - [`BridgeMap`] - Insertion-ordered string-keyed map of bridge values
//! - [`PlatformError`] - A native failure with message, frames, and cause chain
//! - [`ErrorOrigin`] - Distinguishes host-application failures from platform ones
//! - [`StackFrame`] - Call stack frame information
//!
//! # Examples
//!
//! ```
//! use bridge_types::{BridgeMap, BridgeValue, PlatformError};
//!
//! // Build a payload for the JavaScript side
//! let mut map = BridgeMap::new();
//! map.insert("status", "ok");
//! assert_eq!(map.get("status"), Some(&BridgeValue::from("ok")));
//!
//! // Describe a native failure
//! let error = PlatformError::new("IOError", "disk full");
//! assert_eq!(error.to_string(), "IOError: disk full");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod stack;
mod value;

pub use error::{ErrorOrigin, PlatformError};
pub use stack::StackFrame;
pub use value::{BridgeMap, BridgeValue};
