//! Unit tests for PlatformError

use bridge_types::{ErrorOrigin, PlatformError, StackFrame};

#[test]
fn new_error_has_platform_origin() {
    let error = PlatformError::new("IOError", "disk full");
    assert_eq!(error.origin, ErrorOrigin::Platform);
    assert_eq!(error.message.as_deref(), Some("disk full"));
    assert!(error.stack.is_none());
    assert!(error.cause.is_none());
}

#[test]
fn without_message_leaves_message_absent() {
    let error = PlatformError::without_message("IOError");
    assert!(error.message.is_none());
}

#[test]
fn host_application_error_exposes_its_code() {
    let error = PlatformError::from_host_application("E_PERMISSION", "PermissionError", "denied");
    assert_eq!(error.code(), Some("E_PERMISSION"));
    assert_eq!(
        error.origin,
        ErrorOrigin::HostApplication {
            code: "E_PERMISSION".to_string()
        }
    );
}

#[test]
fn platform_error_has_no_code() {
    let error = PlatformError::new("IOError", "disk full");
    assert!(error.code().is_none());
}

#[test]
fn with_stack_attaches_frames() {
    let error = PlatformError::new("IOError", "disk full")
        .with_stack(vec![StackFrame::new("readBlock", "fs/device.rs", 25, 10)]);
    assert_eq!(error.stack.as_ref().unwrap().len(), 1);
}

#[test]
fn with_cause_links_the_chain() {
    let error = PlatformError::new("WrapperError", "outer")
        .with_cause(PlatformError::new("RootError", "inner"));
    let cause = error.cause.as_deref().unwrap();
    assert_eq!(cause.class_name, "RootError");
    assert!(cause.cause.is_none());
}

#[test]
fn error_trait_source_matches_cause() {
    use std::error::Error;

    let error = PlatformError::new("WrapperError", "outer")
        .with_cause(PlatformError::new("RootError", "inner"));
    assert_eq!(error.source().unwrap().to_string(), "RootError: inner");
}
