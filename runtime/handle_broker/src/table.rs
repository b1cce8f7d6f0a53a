//! Table-form dispatch and the library registry
//!
//! The table form trades the flat form's compile-time name resolution for a
//! single discovery call: a caller holds only [`lib()`]'s return value and
//! follows function references from there, so the exporting side can
//! reorganize its entry points without breaking anyone. Each table is a
//! fixed-shape record of plain `fn` pointers bound to the flat entry points
//! in [`crate::flat`] - identical behavior through either form, by
//! construction.

use std::sync::OnceLock;

use crate::flat;
use crate::handle::Handle;
use crate::Result;

/// Operation table for the `Owner` kind
pub struct OwnerTable {
    pub create: fn(&str, i32) -> Result<Handle>,
    pub release: fn(Handle) -> Result<()>,
    pub dump: fn(Handle) -> Result<String>,
    pub set_value: fn(Handle, Handle) -> Result<()>,
    pub string: fn(Handle) -> Result<String>,
    pub integer: fn(Handle) -> Result<i32>,
}

/// Operation table for the `Value` kind
pub struct ValueTable {
    pub create: fn(i32) -> Result<Handle>,
    pub release: fn(Handle) -> Result<()>,
    pub integer: fn(Handle) -> Result<i32>,
    pub set_integer: fn(Handle, i32) -> Result<()>,
}

/// Aggregate of every kind's operation table
pub struct Lib {
    pub owner: OwnerTable,
    pub value: ValueTable,
}

/// Discovery entry point: the process-wide registry of operation tables
///
/// Constructed at most once; every call returns the same reference. The
/// registry is immutable after construction.
pub fn lib() -> &'static Lib {
    static LIB: OnceLock<Lib> = OnceLock::new();
    LIB.get_or_init(|| Lib {
        owner: OwnerTable {
            create: flat::owner_create,
            release: flat::owner_release,
            dump: flat::owner_dump,
            set_value: flat::owner_set_value,
            string: flat::owner_string,
            integer: flat::owner_integer,
        },
        value: ValueTable {
            create: flat::value_create,
            release: flat::value_release,
            integer: flat::value_integer,
            set_integer: flat::value_set_integer,
        },
    })
}
