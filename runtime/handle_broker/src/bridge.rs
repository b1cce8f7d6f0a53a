//! Process-wide bridge over the per-kind stores
//!
//! The flat entry points and the capability tables both bottom out here.
//! Store bookkeeping is serialized behind per-kind mutexes, so operations on
//! different handles are safe from any thread; operations on the *same*
//! handle are individually atomic but not atomic with respect to each other,
//! and callers racing on one handle must synchronize externally.
//!
//! Lock order where both stores are needed: owners, then values.

use std::sync::{Mutex, MutexGuard, OnceLock};

use crate::handle::{Handle, DEFAULT_CAPACITY};
use crate::store::{OwnerStore, ValueStore};
use crate::Result;
use static_assertions::assert_impl_all;

/// One object store per kind, shareable across threads
pub struct Bridge {
    owners: Mutex<OwnerStore>,
    values: Mutex<ValueStore>,
}

assert_impl_all!(Bridge: Send, Sync);

impl Bridge {
    /// Create an isolated bridge with the given per-kind capacity
    pub fn new(capacity: u32) -> Self {
        Self {
            owners: Mutex::new(OwnerStore::new(capacity)),
            values: Mutex::new(ValueStore::new(capacity)),
        }
    }

    /// The process-wide bridge used by [`crate::flat`] and [`crate::table`]
    ///
    /// Constructed at most once; the returned reference is stable for the
    /// life of the process.
    pub fn global() -> &'static Bridge {
        static BRIDGE: OnceLock<Bridge> = OnceLock::new();
        BRIDGE.get_or_init(|| Bridge::new(DEFAULT_CAPACITY))
    }

    pub fn owner_create(&self, string: &str, integer: i32) -> Result<Handle> {
        lock(&self.owners).create(string, integer)
    }

    pub fn owner_release(&self, handle: Handle) -> Result<()> {
        lock(&self.owners).release(handle)
    }

    pub fn owner_string(&self, handle: Handle) -> Result<String> {
        lock(&self.owners).string(handle).map(str::to_owned)
    }

    pub fn owner_integer(&self, handle: Handle) -> Result<i32> {
        lock(&self.owners).integer(handle)
    }

    /// Associate `value` with `owner`
    ///
    /// The target must be live at association time; afterwards its lifetime
    /// is not tracked.
    pub fn owner_set_value(&self, owner: Handle, value: Handle) -> Result<()> {
        let mut owners = lock(&self.owners);
        let values = lock(&self.values);
        values.integer(value)?;
        owners.set_value(owner, value)
    }

    /// Render and log the owner's diagnostic line
    pub fn owner_dump(&self, owner: Handle) -> Result<String> {
        let owners = lock(&self.owners);
        let values = lock(&self.values);
        let line = owners.render(owner, &values)?;
        log::info!("{line}");
        Ok(line)
    }

    pub fn value_create(&self, integer: i32) -> Result<Handle> {
        lock(&self.values).create(integer)
    }

    pub fn value_release(&self, handle: Handle) -> Result<()> {
        lock(&self.values).release(handle)
    }

    pub fn value_integer(&self, handle: Handle) -> Result<i32> {
        lock(&self.values).integer(handle)
    }

    pub fn value_set_integer(&self, handle: Handle, integer: i32) -> Result<()> {
        lock(&self.values).set_integer(handle, integer)
    }
}

/// Lock a store, recovering from poisoning: the stores keep no invariants
/// that a panicked operation could have left half-applied.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
