//! Flat-form entry points
//!
//! One named top-level function per operation, resolved by the caller at
//! compile time. All of them delegate to the process-wide
//! [`Bridge`](crate::Bridge); the table form in [`crate::table`] binds the
//! same functions, so the two forms cannot drift apart.

use crate::bridge::Bridge;
use crate::handle::Handle;
use crate::Result;

/// Construct an owner from a string and an integer
pub fn owner_create(string: &str, integer: i32) -> Result<Handle> {
    Bridge::global().owner_create(string, integer)
}

/// Destroy an owner; its handle is invalid afterwards
pub fn owner_release(handle: Handle) -> Result<()> {
    Bridge::global().owner_release(handle)
}

/// Read the owner's string field
pub fn owner_string(handle: Handle) -> Result<String> {
    Bridge::global().owner_string(handle)
}

/// Read the owner's integer field
pub fn owner_integer(handle: Handle) -> Result<i32> {
    Bridge::global().owner_integer(handle)
}

/// Point `owner` at `value`, superseding any previous target
pub fn owner_set_value(owner: Handle, value: Handle) -> Result<()> {
    Bridge::global().owner_set_value(owner, value)
}

/// Log the owner's diagnostic line and return it
pub fn owner_dump(handle: Handle) -> Result<String> {
    Bridge::global().owner_dump(handle)
}

/// Construct a value from an integer
pub fn value_create(integer: i32) -> Result<Handle> {
    Bridge::global().value_create(integer)
}

/// Destroy a value; its handle is invalid afterwards
pub fn value_release(handle: Handle) -> Result<()> {
    Bridge::global().value_release(handle)
}

/// Read the value's integer field
pub fn value_integer(handle: Handle) -> Result<i32> {
    Bridge::global().value_integer(handle)
}

/// Overwrite the value's integer field
pub fn value_set_integer(handle: Handle, integer: i32) -> Result<()> {
    Bridge::global().value_set_integer(handle, integer)
}
