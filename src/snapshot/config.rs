use super::compression::CompressionAlgorithm;
use thiserror::Error;

/// Environment variable consulted by [`SnapshotConfig::from_env`]
pub const COMPRESSION_ENV: &str = "MEMENTO_COMPRESSION";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown compression algorithm: {0}")]
    UnknownCompression(String),
}

/// Configuration for capturing mementos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SnapshotConfig {
    /// Compression applied to the serialized state
    pub compression: CompressionAlgorithm,
}

impl SnapshotConfig {
    pub fn with_compression(compression: CompressionAlgorithm) -> Self {
        Self { compression }
    }

    /// Reads the configuration from `MEMENTO_COMPRESSION`, falling back to defaults when unset
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_value(std::env::var(COMPRESSION_ENV).ok().as_deref())
    }

    fn from_value(value: Option<&str>) -> Result<Self, ConfigError> {
        match value {
            None => Ok(Self::default()),
            Some(raw) => CompressionAlgorithm::parse(raw)
                .map(Self::with_compression)
                .ok_or_else(|| ConfigError::UnknownCompression(raw.to_string())),
        }
    }
}
