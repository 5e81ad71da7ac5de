//! Memento pattern: originators capture their state into opaque mementos and restore
//! from them later, while a care taker keeps the mementos by key.
//!
//! Core modules:
//! - `snapshot`: originators, mementos, payload encoding
//! - `storage`: care taker registries

pub mod snapshot;
pub mod storage;

pub use snapshot::{
    CompressionAlgorithm, ConfigError, Memento, MementoError, Originator, Person, PersonState,
    SnapshotConfig,
};
pub use storage::{CareTaker, CareTakerError, SharedCareTaker};
