//! Originators and the mementos they produce.

pub mod compression;
pub mod config;
pub mod memento;
pub mod originator;
pub mod person;

pub use compression::CompressionAlgorithm;
pub use config::{ConfigError, SnapshotConfig};
pub use memento::{Memento, MementoError};
pub use originator::Originator;
pub use person::{Person, PersonState};
