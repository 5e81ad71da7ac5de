//! Keyed registries that hold mementos without looking inside them.

use crate::snapshot::Memento;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CareTakerError {
    #[error("No memento stored under key {0}")]
    KeyNotFound(String),
}

fn not_found<K: Debug>(key: &K) -> CareTakerError {
    CareTakerError::KeyNotFound(format!("{:?}", key))
}

/// Single-owner memento registry
#[derive(Debug, Clone)]
pub struct CareTaker<K> {
    mementos: HashMap<K, Memento>,
}

impl<K> Default for CareTaker<K> {
    fn default() -> Self {
        Self {
            mementos: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Debug> CareTaker<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a memento, replacing and returning any previous one under the same key
    pub fn add(&mut self, key: K, memento: Memento) -> Option<Memento> {
        log::debug!("Storing memento under {:?}", key);
        self.mementos.insert(key, memento)
    }

    pub fn get(&self, key: &K) -> Result<&Memento, CareTakerError> {
        self.mementos.get(key).ok_or_else(|| not_found(key))
    }

    pub fn remove(&mut self, key: &K) -> Result<Memento, CareTakerError> {
        self.mementos.remove(key).ok_or_else(|| not_found(key))
    }

    pub fn contains(&self, key: &K) -> bool {
        self.mementos.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.mementos.keys()
    }

    pub fn len(&self) -> usize {
        self.mementos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mementos.is_empty()
    }

    pub fn clear(&mut self) {
        self.mementos.clear();
    }
}

/// Memento registry that can be shared between threads.
///
/// Writers to the same key race; whichever `add` takes the lock last wins.
#[derive(Debug)]
pub struct SharedCareTaker<K> {
    mementos: RwLock<HashMap<K, Memento>>,
}

impl<K> Default for SharedCareTaker<K> {
    fn default() -> Self {
        Self {
            mementos: RwLock::new(HashMap::new()),
        }
    }
}

impl<K: Eq + Hash + Debug> SharedCareTaker<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, key: K, memento: Memento) -> Option<Memento> {
        log::debug!("Storing shared memento under {:?}", key);
        self.mementos.write().insert(key, memento)
    }

    /// Returns a copy of the stored memento
    pub fn get(&self, key: &K) -> Result<Memento, CareTakerError> {
        self.mementos
            .read()
            .get(key)
            .cloned()
            .ok_or_else(|| not_found(key))
    }

    pub fn remove(&self, key: &K) -> Result<Memento, CareTakerError> {
        self.mementos.write().remove(key).ok_or_else(|| not_found(key))
    }

    pub fn contains(&self, key: &K) -> bool {
        self.mementos.read().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.mementos.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.mementos.read().is_empty()
    }

    pub fn clear(&self) {
        self.mementos.write().clear();
    }
}

impl<K: Eq + Hash + Debug> From<CareTaker<K>> for SharedCareTaker<K> {
    fn from(care_taker: CareTaker<K>) -> Self {
        Self {
            mementos: RwLock::new(care_taker.mementos),
        }
    }
}
