//! Stack frame information carried by native failures.

use std::fmt;

/// A single frame of a native call stack.
///
/// Serialized payloads carry the textual rendering produced by [`fmt::Display`],
/// e.g. `at readBlock (fs/device.rs:25:10)`. Missing pieces render as
/// `<anonymous>` (function) and `<unknown>` (source).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackFrame {
    /// Function executing in this frame; None for anonymous frames
    pub function_name: Option<String>,
    /// Source file or URL; None when the platform gives no location
    pub source_url: Option<String>,
    /// Line within the source
    pub line: u32,
    /// Column within the line
    pub column: u32,
}

impl StackFrame {
    /// Creates a frame with a known function and source location.
    pub fn new(
        function_name: impl Into<String>,
        source_url: impl Into<String>,
        line: u32,
        column: u32,
    ) -> Self {
        Self {
            function_name: Some(function_name.into()),
            source_url: Some(source_url.into()),
            line,
            column,
        }
    }
}

impl fmt::Display for StackFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let function = self.function_name.as_deref().unwrap_or("<anonymous>");
        let source = self.source_url.as_deref().unwrap_or("<unknown>");
        write!(f, "at {} ({}:{}:{})", function, source, self.line, self.column)
    }
}
