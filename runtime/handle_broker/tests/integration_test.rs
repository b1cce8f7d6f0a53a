//! Integration tests for the complete bridge
//!
//! These tests exercise end-to-end workflows combining:
//! - Flat-form dispatch
//! - Table-form dispatch through the library registry
//! - Handle lifecycle and error reporting
//! - RAII wrappers

use handle_broker::*;

/// The canonical scenario, flat form: create both objects, associate,
/// dump, release each exactly once, then verify every further release
/// is reported.
#[test]
fn test_flat_form_full_scenario() {
    let value = flat::value_create(2).expect("value create");
    let owner = flat::owner_create("Hello world!", 10).expect("owner create");

    flat::owner_set_value(owner, value).expect("associate");

    let line = flat::owner_dump(owner).expect("dump");
    assert!(line.contains("integer: 10"));
    assert!(line.contains("Some(2)"));

    flat::owner_release(owner).expect("first owner release");
    flat::value_release(value).expect("first value release");

    assert_eq!(
        flat::owner_release(owner),
        Err(BridgeError::DoubleRelease { handle: owner })
    );
    assert_eq!(
        flat::value_release(value),
        Err(BridgeError::DoubleRelease { handle: value })
    );
}

/// The same scenario through the registry: behavior must be identical.
#[test]
fn test_table_form_full_scenario() {
    let lib = lib();

    let value = (lib.value.create)(2).expect("value create");
    let owner = (lib.owner.create)("Hello world!", 10).expect("owner create");

    (lib.owner.set_value)(owner, value).expect("associate");

    let line = (lib.owner.dump)(owner).expect("dump");
    assert!(line.contains("integer: 10"));
    assert!(line.contains("Some(2)"));

    (lib.owner.release)(owner).expect("first owner release");
    (lib.value.release)(value).expect("first value release");

    assert_eq!(
        (lib.owner.release)(owner),
        Err(BridgeError::DoubleRelease { handle: owner })
    );
    assert_eq!(
        (lib.value.release)(value),
        Err(BridgeError::DoubleRelease { handle: value })
    );
}

#[test]
fn test_registry_is_stable_across_calls() {
    assert!(std::ptr::eq(lib(), lib()));
}

#[test]
fn test_released_handle_is_dead_through_every_surface() {
    let owner = flat::owner_create("gone", 1).expect("create");
    flat::owner_release(owner).expect("release");

    assert_eq!(
        flat::owner_string(owner),
        Err(BridgeError::InvalidHandle { handle: owner })
    );
    assert_eq!(
        flat::owner_integer(owner),
        Err(BridgeError::InvalidHandle { handle: owner })
    );
    assert_eq!(
        flat::owner_dump(owner),
        Err(BridgeError::InvalidHandle { handle: owner })
    );
    assert_eq!(
        (lib().owner.integer)(owner),
        Err(BridgeError::InvalidHandle { handle: owner })
    );
}

#[test]
fn test_release_ordering_is_free() {
    // Owner released before its associated value: both succeed.
    let value = flat::value_create(3).expect("value create");
    let owner = flat::owner_create("first out", 4).expect("owner create");
    flat::owner_set_value(owner, value).expect("associate");

    flat::owner_release(owner).expect("owner release");
    assert_eq!(flat::value_integer(value), Ok(3));
    flat::value_release(value).expect("value release");
}

#[test]
fn test_kind_confusion_is_reported() {
    let owner = flat::owner_create("o", 1).expect("owner create");
    let value = flat::value_create(2).expect("value create");

    // A value handle where an owner handle is expected, and vice versa.
    assert!(matches!(
        flat::owner_integer(value),
        Err(BridgeError::KindMismatch {
            expected: ObjectKind::Owner,
            actual: ObjectKind::Value,
        })
    ));
    assert!(matches!(
        flat::value_integer(owner),
        Err(BridgeError::KindMismatch {
            expected: ObjectKind::Value,
            actual: ObjectKind::Owner,
        })
    ));
    assert!(matches!(
        flat::owner_set_value(owner, owner),
        Err(BridgeError::KindMismatch { .. })
    ));

    flat::owner_release(owner).expect("owner release");
    flat::value_release(value).expect("value release");
}

/// Mixed workflow: wrappers on top of raw flat-form traffic.
#[test]
fn test_wrappers_interoperate_with_raw_handles() {
    let owner = OwnedOwner::new("wrapped", 10).expect("owner");
    let value = OwnedValue::new(2).expect("value");
    owner.attach(&value).expect("attach");

    // Raw flat calls observe the same objects.
    assert_eq!(flat::owner_integer(owner.handle()), Ok(10));
    let line = flat::owner_dump(owner.handle()).expect("dump");
    assert!(line.contains("Some(2)"));

    flat::value_set_integer(value.handle(), 21).expect("set");
    assert_eq!(value.integer(), Ok(21));
}
