//! Opaque handles and the generational arena behind them
//!
//! A [`Handle`] is an unforgeable reference to one store-owned object: the
//! caller can copy it, compare it, and pass it back, but cannot reach the
//! object except through store operations. The arena pairs every slot with a
//! generation counter so that a released handle is detectably stale instead
//! of dangling: the slot's generation moves on when the slot is reused, and
//! lookups require an exact match.

use crate::{BridgeError, Result};
use static_assertions::{assert_eq_size, assert_impl_all};

/// Default per-kind object capacity for process-wide stores
pub const DEFAULT_CAPACITY: u32 = 4096;

/// Category of bridged object, fixed at compile time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// An owner: a named object that may reference one `Value`
    Owner,
    /// A plain integer-carrying object
    Value,
}

/// Opaque reference to one live object of a given kind
///
/// Valid from the `create` that returned it until the matching `release`.
/// Fields are private; the only way to obtain a live handle is `create`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    kind: ObjectKind,
    slot: u32,
    generation: u32,
}

assert_eq_size!(Handle, [u32; 3]);
assert_impl_all!(Handle: Copy, Send, Sync);

impl Handle {
    /// Kind of the object this handle refers to
    pub fn kind(&self) -> ObjectKind {
        self.kind
    }
}

/// One arena slot: the generation of its current (or most recent) occupant
/// plus the occupant itself
struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

/// Generational arena - exclusive owner of all objects of one kind
///
/// Slots are recycled through a free list; every reuse bumps the slot's
/// generation, so handles into a previous occupancy stop matching.
pub struct ObjectArena<T> {
    kind: ObjectKind,
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    capacity: u32,
}

impl<T> ObjectArena<T> {
    /// Create an empty arena for `kind` holding at most `capacity` objects
    pub fn new(kind: ObjectKind, capacity: u32) -> Self {
        Self {
            kind,
            slots: Vec::new(),
            free: Vec::new(),
            capacity,
        }
    }

    /// Store `value` and return a fresh handle to it
    ///
    /// # Errors
    /// [`BridgeError::OutOfSlots`] when the arena is at capacity.
    pub fn insert(&mut self, value: T) -> Result<Handle> {
        if let Some(slot) = self.free.pop() {
            let entry = &mut self.slots[slot as usize];
            entry.generation = entry.generation.wrapping_add(1);
            entry.value = Some(value);
            return Ok(Handle {
                kind: self.kind,
                slot,
                generation: entry.generation,
            });
        }

        if self.slots.len() as u32 >= self.capacity {
            return Err(BridgeError::OutOfSlots { kind: self.kind });
        }

        let slot = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            value: Some(value),
        });
        Ok(Handle {
            kind: self.kind,
            slot,
            generation: 0,
        })
    }

    /// Borrow the object behind `handle`
    pub fn get(&self, handle: Handle) -> Result<&T> {
        self.check_kind(handle)?;
        let entry = self
            .slots
            .get(handle.slot as usize)
            .ok_or(BridgeError::InvalidHandle { handle })?;
        match &entry.value {
            Some(value) if entry.generation == handle.generation => Ok(value),
            _ => Err(BridgeError::InvalidHandle { handle }),
        }
    }

    /// Mutably borrow the object behind `handle`
    pub fn get_mut(&mut self, handle: Handle) -> Result<&mut T> {
        self.check_kind(handle)?;
        let entry = self
            .slots
            .get_mut(handle.slot as usize)
            .ok_or(BridgeError::InvalidHandle { handle })?;
        match &mut entry.value {
            Some(value) if entry.generation == handle.generation => Ok(value),
            _ => Err(BridgeError::InvalidHandle { handle }),
        }
    }

    /// Whether `handle` currently refers to a live object of this arena
    pub fn contains(&self, handle: Handle) -> bool {
        self.get(handle).is_ok()
    }

    /// Destroy the object behind `handle` and invalidate the handle
    ///
    /// The first removal frees the slot for reuse. A later removal with the
    /// same handle value is classified as [`BridgeError::DoubleRelease`],
    /// whether or not the slot has been reoccupied since. A generation the
    /// arena never handed out is [`BridgeError::InvalidHandle`].
    pub fn remove(&mut self, handle: Handle) -> Result<T> {
        self.check_kind(handle)?;
        let entry = self
            .slots
            .get_mut(handle.slot as usize)
            .ok_or(BridgeError::InvalidHandle { handle })?;

        if handle.generation > entry.generation {
            return Err(BridgeError::InvalidHandle { handle });
        }
        if handle.generation < entry.generation {
            return Err(BridgeError::DoubleRelease { handle });
        }
        match entry.value.take() {
            Some(value) => {
                self.free.push(handle.slot);
                Ok(value)
            }
            None => Err(BridgeError::DoubleRelease { handle }),
        }
    }

    /// Number of live objects
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_kind(&self, handle: Handle) -> Result<()> {
        if handle.kind != self.kind {
            return Err(BridgeError::KindMismatch {
                expected: self.kind,
                actual: handle.kind,
            });
        }
        Ok(())
    }
}
