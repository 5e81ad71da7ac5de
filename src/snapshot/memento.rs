//! Opaque snapshot values.
//!
//! A [`Memento`] is the serialized state of one originator at one instant. Only the
//! originator type whose schema it carries can open it again; everything else,
//! the care taker included, treats it as a sealed value.

use super::compression::{CompressionAlgorithm, Compressor};
use super::config::SnapshotConfig;
use bincode::Options;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MementoError {
    #[error("Memento was captured from '{found}', expected '{expected}'")]
    SchemaMismatch { expected: String, found: String },
    #[error("Invalid checksum: expected {expected:#010x}, computed {actual:#010x}")]
    ChecksumMismatch { expected: u32, actual: u32 },
    #[error("Decompression error: {0}")]
    Decompression(String),
    #[error("Serialization error: {0}")]
    Encoding(#[from] bincode::Error),
}

/// Fixed-width bincode encoding; trailing bytes mean the payload has a different shape.
fn codec() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .reject_trailing_bytes()
}

/// Immutable snapshot of an originator's state
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Memento {
    schema: String,
    compression: CompressionAlgorithm,
    checksum: u32,    // CRC32 of the uncompressed state bytes
    payload: Vec<u8>,
}

impl Memento {
    /// Serializes `state` into a new memento tagged with `schema`
    pub(crate) fn seal<S: Serialize>(
        schema: &str,
        state: &S,
        config: &SnapshotConfig,
    ) -> Result<Self, MementoError> {
        let raw = codec().serialize(state)?;
        let checksum = crc32fast::hash(&raw);
        let payload = Compressor::new(config.compression).compress(&raw);

        Ok(Self {
            schema: schema.to_string(),
            compression: config.compression,
            checksum,
            payload,
        })
    }

    /// Verifies and deserializes the state. Nothing is returned unless every check passes.
    pub(crate) fn open<S: DeserializeOwned>(&self, schema: &str) -> Result<S, MementoError> {
        if self.schema != schema {
            return Err(MementoError::SchemaMismatch {
                expected: schema.to_string(),
                found: self.schema.clone(),
            });
        }

        let raw = Compressor::new(self.compression)
            .decompress(&self.payload)
            .map_err(MementoError::Decompression)?;

        let actual = crc32fast::hash(&raw);
        if actual != self.checksum {
            return Err(MementoError::ChecksumMismatch {
                expected: self.checksum,
                actual,
            });
        }

        Ok(codec().deserialize(&raw)?)
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }

    pub fn compression(&self) -> CompressionAlgorithm {
        self.compression
    }

    /// Size of the stored payload in bytes
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// Encodes the whole memento as an opaque byte string
    pub fn to_bytes(&self) -> Result<Vec<u8>, MementoError> {
        Ok(codec().serialize(self)?)
    }

    /// Decodes a memento produced by [`Memento::to_bytes`]. Contents are verified on restore.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MementoError> {
        Ok(codec().deserialize(bytes)?)
    }
}
