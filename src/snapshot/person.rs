use super::originator::Originator;
use serde::{Deserialize, Serialize};

/// A named entity whose state can be captured and restored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: String,
}

/// Serialized shape of a [`Person`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonState {
    pub name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

impl Originator for Person {
    const SCHEMA: &'static str = "person";

    type State = PersonState;

    fn state(&self) -> PersonState {
        PersonState {
            name: self.name.clone(),
        }
    }

    fn apply(&mut self, state: PersonState) {
        self.name = state.name;
    }
}
