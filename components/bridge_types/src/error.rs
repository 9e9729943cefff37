//! The native failure object handed to reject paths.
//!
//! A [`PlatformError`] is the transportable description of a native failure:
//! its concrete type name, localized message, optional stack frames, and an
//! optional underlying cause, itself a [`PlatformError`]. Failures raised by
//! the host application carry their own error code; the origin tag records
//! that distinction so reject paths can derive a code from the failure alone.

use std::fmt;

use crate::StackFrame;

/// Where a failure came from, and whether it carries its own error code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorOrigin {
    /// A failure raised by the platform itself; no dedicated error code.
    Platform,
    /// A failure raised by the host application, carrying its own code.
    HostApplication {
        /// The error code chosen by the host application.
        code: String,
    },
}

/// A native failure with message, stack frames, and cause chain.
///
/// This is the bridge's rendition of a platform exception: everything a
/// diagnostic consumer on the JavaScript side could want, held as plain data
/// so it can be serialized across the runtime boundary.
///
/// # Examples
///
/// ```
/// use bridge_types::PlatformError;
///
/// let error = PlatformError::new("IOError", "disk full")
///     .with_cause(PlatformError::new("DeviceError", "sector unreadable"));
///
/// assert_eq!(error.class_name, "IOError");
/// assert_eq!(error.cause.as_ref().unwrap().class_name, "DeviceError");
/// assert!(error.code().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformError {
    /// Fully-qualified name of the failure's concrete type
    pub class_name: String,
    /// Localized message, if the failure has one
    pub message: Option<String>,
    /// Stack frames at the point of failure; `None` when the platform
    /// exposes no trace (distinct from an empty trace)
    pub stack: Option<Vec<StackFrame>>,
    /// Whether the failure came from the platform or the host application
    pub origin: ErrorOrigin,
    /// The underlying failure this one wraps, if any
    pub cause: Option<Box<PlatformError>>,
}

impl PlatformError {
    /// Creates a platform-origin failure with a message.
    pub fn new(class_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            message: Some(message.into()),
            stack: None,
            origin: ErrorOrigin::Platform,
            cause: None,
        }
    }

    /// Creates a platform-origin failure with no message.
    pub fn without_message(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            message: None,
            stack: None,
            origin: ErrorOrigin::Platform,
            cause: None,
        }
    }

    /// Creates a host-application failure carrying its own error code.
    pub fn from_host_application(
        code: impl Into<String>,
        class_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            message: Some(message.into()),
            stack: None,
            origin: ErrorOrigin::HostApplication { code: code.into() },
            cause: None,
        }
    }

    /// Attaches stack frames to this failure.
    pub fn with_stack(mut self, stack: Vec<StackFrame>) -> Self {
        self.stack = Some(stack);
        self
    }

    /// Attaches an underlying cause to this failure.
    pub fn with_cause(mut self, cause: PlatformError) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// The error code this failure carries, if it is host-application-raised.
    pub fn code(&self) -> Option<&str> {
        match &self.origin {
            ErrorOrigin::HostApplication { code } => Some(code),
            ErrorOrigin::Platform => None,
        }
    }
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}: {}", self.class_name, message),
            None => f.write_str(&self.class_name),
        }
    }
}

impl std::error::Error for PlatformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}
