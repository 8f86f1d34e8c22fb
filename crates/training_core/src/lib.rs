//! Workout statistics: distance, mean speed and calories for running,
//! sports walking and swimming readings.

use thiserror::Error;

pub mod config;
pub mod driver;
pub mod message;
pub mod registry;
pub mod training;
pub mod workouts;

pub use message::InfoMessage;
pub use registry::{ActivityKind, Package, Workout, dispatch};
pub use training::Training;
pub use workouts::{Running, SportsWalking, Swimming};

#[derive(Debug, Error)]
pub enum TrainingError {
    #[error("unknown activity code: {0}")]
    UnknownActivityCode(String),
    #[error("{name} expects {expected} values, got {got}")]
    Arity {
        name: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("configuration error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type TrainingResult<T> = Result<T, TrainingError>;
