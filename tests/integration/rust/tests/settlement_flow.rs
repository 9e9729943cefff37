//! End-to-end settlement flows across bridge components.

use std::sync::{Arc, Mutex};
use std::thread;

use bridge_types::{BridgeMap, BridgeValue, PlatformError, StackFrame};
use native_bridge::{BridgePromise, Callback, DEFAULT_ERROR_CODE};

fn capturing_callback() -> (Callback, Arc<Mutex<Vec<BridgeValue>>>) {
    let invocations = Arc::new(Mutex::new(Vec::new()));
    let slot = Arc::clone(&invocations);
    let callback = Callback::new(move |value| {
        slot.lock().unwrap().push(value);
        Ok(())
    });
    (callback, invocations)
}

#[test]
fn rejection_with_cause_reaches_reject_handle_only() {
    let (resolve, resolved) = capturing_callback();
    let (reject, rejected) = capturing_callback();
    let promise = BridgePromise::new(Some(resolve), Some(reject));

    let cause = PlatformError::new("IOError", "disk full").with_stack(vec![
        StackFrame::new("writeBlock", "fs/device.rs", 40, 8),
        StackFrame::new("flush", "fs/buffer.rs", 12, 4),
    ]);
    promise
        .reject_with(Some("E_IO"), Some("disk full".to_string()), Some(&cause))
        .unwrap();

    assert!(resolved.lock().unwrap().is_empty());
    let rejected = rejected.lock().unwrap();
    assert_eq!(rejected.len(), 1);

    let payload = rejected[0].as_object().unwrap();
    assert_eq!(payload.get("code").unwrap().as_str(), Some("E_IO"));
    assert_eq!(payload.get("message").unwrap().as_str(), Some("disk full"));
    let platform_error = payload.get("platformError").unwrap().as_object().unwrap();
    assert_eq!(
        platform_error.get("className").unwrap().as_str(),
        Some("IOError")
    );
    assert_eq!(
        platform_error.get("stack").unwrap().as_array().unwrap().len(),
        2
    );
    assert!(!platform_error.contains_key("cause"));
}

#[test]
fn resolution_reaches_resolve_handle_only() {
    let (resolve, resolved) = capturing_callback();
    let (reject, rejected) = capturing_callback();
    let promise = BridgePromise::new(Some(resolve), Some(reject));

    let mut result = BridgeMap::new();
    result.insert("bytesWritten", 4096);
    promise.resolve(result.clone()).unwrap();

    assert!(rejected.lock().unwrap().is_empty());
    let resolved = resolved.lock().unwrap();
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0], BridgeValue::Object(result));
}

#[test]
fn rejection_is_silently_dropped_without_reject_handle() {
    let (resolve, resolved) = capturing_callback();
    let promise = BridgePromise::resolve_only(resolve);
    assert!(promise.reject("E_X", "boom").is_ok());
    assert!(resolved.lock().unwrap().is_empty());
}

#[test]
fn promise_settles_from_a_worker_thread() {
    let (reject, rejected) = capturing_callback();
    let promise = BridgePromise::reject_only(reject);

    thread::spawn(move || {
        let cause =
            PlatformError::from_host_application("E_PERMISSION", "PermissionError", "denied");
        promise.reject_error(&cause).unwrap();
    })
    .join()
    .unwrap();

    let rejected = rejected.lock().unwrap();
    assert_eq!(rejected.len(), 1);
    let payload = rejected[0].as_object().unwrap();
    assert_eq!(payload.get("code").unwrap().as_str(), Some("E_PERMISSION"));
}

#[test]
fn cause_derived_code_falls_back_to_sentinel() {
    let (reject, rejected) = capturing_callback();
    let promise = BridgePromise::reject_only(reject);
    promise
        .reject_error(&PlatformError::new("IOError", "disk full"))
        .unwrap();

    let rejected = rejected.lock().unwrap();
    let payload = rejected[0].as_object().unwrap();
    assert_eq!(
        payload.get("code").unwrap().as_str(),
        Some(DEFAULT_ERROR_CODE)
    );
}

#[test]
fn dropping_an_unsettled_promise_invokes_nothing() {
    let (resolve, resolved) = capturing_callback();
    let (reject, rejected) = capturing_callback();
    {
        let _promise = BridgePromise::new(Some(resolve), Some(reject));
    }
    assert!(resolved.lock().unwrap().is_empty());
    assert!(rejected.lock().unwrap().is_empty());
}
