//! Serialization of native failures into rejection payloads.
//!
//! The JavaScript side receives rejections as plain data. This module turns a
//! [`PlatformError`] and its cause chain into the nested map the consuming
//! runtime pattern-matches on: `className`, `message`, optionally `stack`
//! (textual frame descriptions), and optionally `cause` for the underlying
//! failure, recursively.

use bridge_types::{BridgeMap, BridgeValue, PlatformError};

/// Maximum number of serialized records in a cause chain.
///
/// The platform's failure model permits arbitrarily long (even cyclic) cause
/// chains; links beyond this depth are dropped rather than failing the
/// rejection.
pub const MAX_CAUSE_DEPTH: usize = 32;

/// Serializes a failure and its cause chain into a payload record.
///
/// Field rules:
/// - `className` and `message` are always present (`message` may be null).
/// - `stack` is present iff the failure exposes a frame list; an empty list
///   yields an empty array, while an absent list omits the key entirely.
/// - `cause` is present iff the failure wraps an underlying one, up to
///   [`MAX_CAUSE_DEPTH`] records.
///
/// # Examples
///
/// ```
/// use bridge_types::PlatformError;
/// use native_bridge::serialize_error;
///
/// let error = PlatformError::new("IOError", "disk full");
/// let record = serialize_error(&error);
/// assert_eq!(record.get("className").unwrap().as_str(), Some("IOError"));
/// assert!(!record.contains_key("stack"));
/// assert!(!record.contains_key("cause"));
/// ```
pub fn serialize_error(error: &PlatformError) -> BridgeMap {
    serialize_at_depth(error, 0)
}

fn serialize_at_depth(error: &PlatformError, depth: usize) -> BridgeMap {
    let mut record = BridgeMap::new();
    record.insert("className", error.class_name.as_str());
    record.insert("message", error.message.clone());

    if let Some(frames) = &error.stack {
        let rendered: Vec<String> = frames.iter().map(|frame| frame.to_string()).collect();
        record.insert("stack", rendered);
    }

    if let Some(cause) = &error.cause {
        if depth + 1 < MAX_CAUSE_DEPTH {
            record.insert("cause", BridgeValue::Object(serialize_at_depth(cause, depth + 1)));
        }
    }

    record
}
