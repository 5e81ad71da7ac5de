use super::config::SnapshotConfig;
use super::memento::{Memento, MementoError};
use serde::{de::DeserializeOwned, Serialize};

/// An object that can capture its state into a [`Memento`] and restore itself from one.
///
/// Implementors declare the fixed shape of their state as [`Originator::State`]. Capture
/// serializes a copy of it; restore deserializes into it first and only applies the
/// result once the whole memento has been validated.
pub trait Originator {
    /// Schema tag written into every memento this type captures
    const SCHEMA: &'static str;

    type State: Serialize + DeserializeOwned;

    /// Copies out the complete observable state
    fn state(&self) -> Self::State;

    /// Overwrites the live state with a validated one
    fn apply(&mut self, state: Self::State);

    fn capture(&self) -> Result<Memento, MementoError> {
        self.capture_with(&SnapshotConfig::default())
    }

    fn capture_with(&self, config: &SnapshotConfig) -> Result<Memento, MementoError> {
        let memento = Memento::seal(Self::SCHEMA, &self.state(), config)?;
        log::debug!(
            "Captured '{}' memento ({} bytes, {})",
            Self::SCHEMA,
            memento.len(),
            memento.compression().as_str()
        );
        Ok(memento)
    }

    fn restore(&mut self, memento: &Memento) -> Result<(), MementoError> {
        match memento.open::<Self::State>(Self::SCHEMA) {
            Ok(state) => {
                self.apply(state);
                log::debug!("Restored '{}' from memento", Self::SCHEMA);
                Ok(())
            }
            Err(e) => {
                log::warn!("Rejected memento for '{}': {}", Self::SCHEMA, e);
                Err(e)
            }
        }
    }
}
