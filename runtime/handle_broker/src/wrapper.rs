//! Caller-side RAII wrappers
//!
//! The bridge hands out raw handles and leaves release discipline to the
//! caller. These wrappers put that discipline back into the type system: a
//! wrapper owns exactly one handle, exposes the kind's operations as
//! methods dispatched through the table form, and releases the handle when
//! dropped. Association borrows the target, so attaching can never move
//! release responsibility.

use crate::handle::Handle;
use crate::table::lib;
use crate::Result;

/// A `Value` whose release is tied to this wrapper's lifetime
pub struct OwnedValue {
    handle: Handle,
}

impl OwnedValue {
    pub fn new(integer: i32) -> Result<Self> {
        let handle = (lib().value.create)(integer)?;
        Ok(Self { handle })
    }

    pub fn integer(&self) -> Result<i32> {
        (lib().value.integer)(self.handle)
    }

    pub fn set_integer(&self, integer: i32) -> Result<()> {
        (lib().value.set_integer)(self.handle, integer)
    }

    /// The underlying handle, for passing across the bridge
    ///
    /// The wrapper still owns the object; releasing through this handle
    /// directly will surface as an error when the wrapper drops.
    pub fn handle(&self) -> Handle {
        self.handle
    }
}

impl Drop for OwnedValue {
    fn drop(&mut self) {
        if let Err(err) = (lib().value.release)(self.handle) {
            log::warn!("value release on drop failed: {err}");
        }
    }
}

/// An `Owner` whose release is tied to this wrapper's lifetime
pub struct OwnedOwner {
    handle: Handle,
}

impl OwnedOwner {
    pub fn new(string: &str, integer: i32) -> Result<Self> {
        let handle = (lib().owner.create)(string, integer)?;
        Ok(Self { handle })
    }

    pub fn string(&self) -> Result<String> {
        (lib().owner.string)(self.handle)
    }

    pub fn integer(&self) -> Result<i32> {
        (lib().owner.integer)(self.handle)
    }

    /// Point this owner at `value` without taking it over
    pub fn attach(&self, value: &OwnedValue) -> Result<()> {
        (lib().owner.set_value)(self.handle, value.handle())
    }

    pub fn dump(&self) -> Result<String> {
        (lib().owner.dump)(self.handle)
    }

    pub fn handle(&self) -> Handle {
        self.handle
    }
}

impl Drop for OwnedOwner {
    fn drop(&mut self) {
        if let Err(err) = (lib().owner.release)(self.handle) {
            log::warn!("owner release on drop failed: {err}");
        }
    }
}
