use memento::{
    CareTaker, CareTakerError, CompressionAlgorithm, Memento, MementoError, Originator, Person,
    SnapshotConfig,
};
use proptest::prelude::*;
use serde::{Deserialize, Serialize};

/// Second originator with an incompatible state shape
#[derive(Debug, Default)]
struct Counter {
    value: u8,
}

#[derive(Serialize, Deserialize)]
struct CounterState {
    value: u8,
}

impl Originator for Counter {
    const SCHEMA: &'static str = "counter";

    type State = CounterState;

    fn state(&self) -> CounterState {
        CounterState { value: self.value }
    }

    fn apply(&mut self, state: CounterState) {
        self.value = state.value;
    }
}

#[test]
fn test_end_to_end_scenario() {
    let mut mike = Person::new("Mike");
    let mut john = Person::new("John");
    let mut care_taker = CareTaker::new();

    care_taker.add(1, mike.capture().unwrap());
    mike.set_name("King Kong");
    mike.restore(care_taker.get(&1).unwrap()).unwrap();
    assert_eq!(mike.name(), "Mike");

    care_taker.add(2, john.capture().unwrap());
    john.set_name("Superman");
    john.restore(care_taker.get(&2).unwrap()).unwrap();
    assert_eq!(john.name(), "John");

    assert_eq!(mike.name(), "Mike");
}

#[test]
fn test_originators_are_isolated() {
    let mut mike = Person::new("Mike");
    let mut john = Person::new("John");
    let mike_memento = mike.capture().unwrap();
    let john_memento = john.capture().unwrap();
    assert_ne!(mike_memento, john_memento);

    mike.set_name("King Kong");
    john.set_name("Superman");
    john.restore(&john_memento).unwrap();

    assert_eq!(john.name(), "John");
    assert_eq!(mike.name(), "King Kong");
}

#[test]
fn test_overwritten_key_restores_latest() {
    let mut mike = Person::new("Mike");
    let mut care_taker = CareTaker::new();

    care_taker.add("mike", mike.capture().unwrap());
    mike.set_name("Michael");
    care_taker.add("mike", mike.capture().unwrap());

    mike.set_name("King Kong");
    mike.restore(care_taker.get(&"mike").unwrap()).unwrap();
    assert_eq!(mike.name(), "Michael");
}

#[test]
fn test_missing_key_never_reaches_restore() {
    let care_taker: CareTaker<u32> = CareTaker::new();
    let err = care_taker.get(&3).unwrap_err();
    assert_eq!(err, CareTakerError::KeyNotFound("3".to_string()));
}

#[test]
fn test_foreign_memento_is_rejected() {
    let counter = Counter { value: 9 };
    let memento = counter.capture().unwrap();

    let mut mike = Person::new("Mike");
    let err = mike.restore(&memento).unwrap_err();
    assert!(matches!(err, MementoError::SchemaMismatch { .. }));
    assert_eq!(mike.name(), "Mike");
}

#[test]
fn test_counter_restores_through_bytes() {
    let mut counter = Counter { value: 3 };
    let bytes = counter.capture().unwrap().to_bytes().unwrap();

    counter.value = 200;
    counter.restore(&Memento::from_bytes(&bytes).unwrap()).unwrap();
    assert_eq!(counter.value, 3);
}

proptest! {
    #[test]
    fn prop_round_trip(name in ".*", renamed in ".*", lz4 in any::<bool>()) {
        let compression = if lz4 { CompressionAlgorithm::LZ4 } else { CompressionAlgorithm::None };
        let config = SnapshotConfig::with_compression(compression);

        let mut person = Person::new(name.clone());
        let memento = person.capture_with(&config).unwrap();
        person.set_name(renamed);
        person.restore(&memento).unwrap();

        prop_assert_eq!(person.name(), name.as_str());
    }

    #[test]
    fn prop_byte_form_restores(name in "[a-zA-Z ]{0,64}") {
        let mut person = Person::new(name.clone());
        let bytes = person.capture().unwrap().to_bytes().unwrap();
        person.set_name("Superman");
        person.restore(&Memento::from_bytes(&bytes).unwrap()).unwrap();

        prop_assert_eq!(person.name(), name.as_str());
    }
}
