use thiserror::Error;

/// Validation failures surfaced by the engine. All are local to the
/// offending input and deterministic; nothing is retried or silently
/// defaulted, so the first invalid input is the one reported.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("unknown airport code {0}")]
    UnknownAirport(String),
    #[error("unknown aircraft category {0}")]
    UnknownCategory(String),
    #[error("unknown cabin {0}")]
    UnknownCabin(String),
    #[error("origin and destination are both {0}")]
    SameAirport(String),
    #[error("coordinate out of range: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },
    #[error("passenger count must be at least 1, got {0}")]
    InvalidPassengerCount(u32),
    #[error("distance must be a finite number of km >= 0, got {0}")]
    InvalidDistance(f64),
}

pub type Result<T> = std::result::Result<T, Error>;
