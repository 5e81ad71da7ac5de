//! Demonstration driver: capture two people, scramble their names, restore them.

use memento::{
    CareTaker, CareTakerError, ConfigError, MementoError, Originator, Person, SnapshotConfig,
};
use std::process::ExitCode;
use thiserror::Error;

#[derive(Error, Debug)]
enum DemoError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Memento error: {0}")]
    Memento(#[from] MementoError),
    #[error("Care taker error: {0}")]
    CareTaker(#[from] CareTakerError),
}

fn run() -> Result<(), DemoError> {
    let config = SnapshotConfig::from_env()?;
    log::info!("Capturing with {} compression", config.compression.as_str());

    let mut mike = Person::new("Mike");
    let mut john = Person::new("John");

    let mut care_taker = CareTaker::new();

    // Save states
    care_taker.add(1, mike.capture_with(&config)?);
    care_taker.add(2, john.capture_with(&config)?);

    mike.set_name("King Kong");
    john.set_name("Superman");
    log::info!("Scrambled names: {:?}, {:?}", mike, john);

    // Restore original states
    mike.restore(care_taker.get(&1)?)?;
    john.restore(care_taker.get(&2)?)?;

    println!("{:?}", mike);
    println!("{:?}", john);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
