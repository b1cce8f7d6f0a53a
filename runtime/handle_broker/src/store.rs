//! Per-kind object stores
//!
//! Each store owns one [`ObjectArena`] and implements the kind's operation
//! set on top of it. Objects never leave the store; every access goes
//! through a handle. An owner's link to a value is a plain handle copy: it
//! does not keep the value alive and does not get released with the owner.

use crate::handle::{Handle, ObjectArena, ObjectKind};
use crate::{BridgeError, Result};

/// Store-owned state behind an `Owner` handle
pub struct Owner {
    string: String,
    integer: i32,
    value: Option<Handle>,
}

/// Store-owned state behind a `Value` handle
pub struct Value {
    integer: i32,
}

/// Lifecycle manager for `Owner` objects
pub struct OwnerStore {
    arena: ObjectArena<Owner>,
}

impl OwnerStore {
    pub fn new(capacity: u32) -> Self {
        Self {
            arena: ObjectArena::new(ObjectKind::Owner, capacity),
        }
    }

    /// Construct a new owner and hand out a fresh handle
    pub fn create(&mut self, string: &str, integer: i32) -> Result<Handle> {
        let handle = self.arena.insert(Owner {
            string: string.to_owned(),
            integer,
            value: None,
        })?;
        log::debug!("owner created: {handle:?}");
        Ok(handle)
    }

    /// Read the owner's string field
    pub fn string(&self, handle: Handle) -> Result<&str> {
        Ok(self.arena.get(handle)?.string.as_str())
    }

    /// Read the owner's integer field
    pub fn integer(&self, handle: Handle) -> Result<i32> {
        Ok(self.arena.get(handle)?.integer)
    }

    /// Record that `owner` now references `value`
    ///
    /// Overwrites any previous reference without releasing its target.
    /// Ownership of `value` stays with whoever created it; release ordering
    /// between the two objects remains the caller's concern.
    pub fn set_value(&mut self, owner: Handle, value: Handle) -> Result<()> {
        if value.kind() != ObjectKind::Value {
            return Err(BridgeError::KindMismatch {
                expected: ObjectKind::Value,
                actual: value.kind(),
            });
        }
        self.arena.get_mut(owner)?.value = Some(value);
        Ok(())
    }

    /// Render the owner's diagnostic line, resolving its value reference
    /// through `values`
    ///
    /// A reference whose target has since been released renders as `None`;
    /// it never invalidates the owner.
    pub fn render(&self, owner: Handle, values: &ValueStore) -> Result<String> {
        let object = self.arena.get(owner)?;
        let value = object.value.and_then(|handle| values.integer(handle).ok());
        Ok(format!(
            "string: {}, integer: {}, value: {:?}",
            object.string, object.integer, value
        ))
    }

    /// Destroy the owner and invalidate its handle
    pub fn release(&mut self, handle: Handle) -> Result<()> {
        self.arena.remove(handle)?;
        log::debug!("owner released: {handle:?}");
        Ok(())
    }

    /// Number of live owners
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }
}

/// Lifecycle manager for `Value` objects
pub struct ValueStore {
    arena: ObjectArena<Value>,
}

impl ValueStore {
    pub fn new(capacity: u32) -> Self {
        Self {
            arena: ObjectArena::new(ObjectKind::Value, capacity),
        }
    }

    /// Construct a new value and hand out a fresh handle
    pub fn create(&mut self, integer: i32) -> Result<Handle> {
        let handle = self.arena.insert(Value { integer })?;
        log::debug!("value created: {handle:?}");
        Ok(handle)
    }

    /// Read the value's integer field
    pub fn integer(&self, handle: Handle) -> Result<i32> {
        Ok(self.arena.get(handle)?.integer)
    }

    /// Overwrite the value's integer field in place
    pub fn set_integer(&mut self, handle: Handle, integer: i32) -> Result<()> {
        self.arena.get_mut(handle)?.integer = integer;
        Ok(())
    }

    /// Destroy the value and invalidate its handle
    pub fn release(&mut self, handle: Handle) -> Result<()> {
        self.arena.remove(handle)?;
        log::debug!("value released: {handle:?}");
        Ok(())
    }

    /// Number of live values
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }
}
