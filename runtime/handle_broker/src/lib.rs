//! Handle Broker - Opaque-handle bridge between independently managed components
//!
//! # Purpose
//! Lets a caller and a component that exclusively owns a set of objects
//! exchange references and invoke behavior without either side seeing the
//! other's data layout. Objects are exposed as opaque [`Handle`]s; operations
//! are exposed twice, with identical behavior:
//! - **flat form**: one named function per operation ([`flat`])
//! - **table form**: a record of function references per object kind,
//!   reachable from a single discovery call ([`table::lib`])
//!
//! # Architecture
//! Each object kind lives in a generational arena ([`handle::ObjectArena`])
//! that hands out handles and detects stale or foreign ones in O(1). The
//! per-kind stores ([`store`]) implement create/get/set/associate/release on
//! top of the arena; a process-wide [`bridge::Bridge`] serializes store
//! bookkeeping behind mutexes so the flat entry points and the capability
//! tables can be called from any thread. [`wrapper`] adds caller-side RAII
//! owners that release their handle on drop.
//!
//! # Lifecycle Contract
//! A handle is valid from the `create` that returned it until the matching
//! `release`. Exactly one logical owner (whoever called `create`) is
//! responsible for that release. Associating two objects never transfers
//! this responsibility and never links their lifetimes. Misuse is reported,
//! never undefined: stale handles yield [`BridgeError::InvalidHandle`], a
//! repeated release yields [`BridgeError::DoubleRelease`].
//!
//! # Testing Strategy
//! - Unit tests: arena generation bookkeeping, store operations, error paths
//! - Integration tests: end-to-end scenarios through both dispatch forms

pub mod bridge;
pub mod flat;
pub mod handle;
pub mod store;
pub mod table;
pub mod wrapper;

pub use bridge::Bridge;
pub use handle::{Handle, ObjectArena, ObjectKind, DEFAULT_CAPACITY};
pub use store::{OwnerStore, ValueStore};
pub use table::{lib, Lib, OwnerTable, ValueTable};
pub use wrapper::{OwnedOwner, OwnedValue};

use thiserror::Error;

/// Error types for bridge operations
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum BridgeError {
    /// The handle is not currently live for its kind: it was released, its
    /// slot has been reused, or it was never handed out by the store.
    #[error("invalid handle {handle:?}")]
    InvalidHandle { handle: Handle },

    /// `release` was called on a handle that was already released.
    #[error("double release of handle {handle:?}")]
    DoubleRelease { handle: Handle },

    /// The store cannot allocate another object of this kind.
    #[error("out of object slots for kind {kind:?}")]
    OutOfSlots { kind: ObjectKind },

    /// A handle of one kind was passed where another kind is expected.
    #[error("kind mismatch: expected {expected:?}, got {actual:?}")]
    KindMismatch {
        expected: ObjectKind,
        actual: ObjectKind,
    },
}

pub type Result<T> = core::result::Result<T, BridgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_offender() {
        let err = BridgeError::OutOfSlots {
            kind: ObjectKind::Owner,
        };
        assert!(err.to_string().contains("Owner"));

        let err = BridgeError::KindMismatch {
            expected: ObjectKind::Value,
            actual: ObjectKind::Owner,
        };
        let msg = err.to_string();
        assert!(msg.contains("Value") && msg.contains("Owner"));
    }
}
