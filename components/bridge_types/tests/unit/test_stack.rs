//! Unit tests for StackFrame

use bridge_types::StackFrame;

#[test]
fn frame_renders_function_and_location() {
    let frame = StackFrame::new("connect", "net/socket.rs", 120, 4);
    assert_eq!(frame.to_string(), "at connect (net/socket.rs:120:4)");
}

#[test]
fn anonymous_frame_renders_placeholder() {
    let frame = StackFrame {
        function_name: None,
        source_url: Some("main.js".to_string()),
        line: 3,
        column: 7,
    };
    assert_eq!(frame.to_string(), "at <anonymous> (main.js:3:7)");
}

#[test]
fn unknown_source_renders_placeholder() {
    let frame = StackFrame {
        function_name: Some("boot".to_string()),
        source_url: None,
        line: 0,
        column: 0,
    };
    assert_eq!(frame.to_string(), "at boot (<unknown>:0:0)");
}
