//! Error types for quality inference.

use thiserror::Error;

/// Errors that can occur while evaluating quality signals
#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("Missing input signal: {0}")]
    MissingInput(String),

    #[error("Unknown input signal: {0}")]
    UnknownInput(String),

    #[error("Input signal {name} is not a finite number: {value}")]
    InvalidInput { name: String, value: f64 },

    #[error("Failed to connect to inference service: {0}")]
    ConnectionError(String),

    #[error("Inference call failed: {0}")]
    CallFailed(String),

    #[error("Invalid score from inference engine: {0}")]
    InvalidOutput(f64),

    #[error("Failed to start inference runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, InferenceError>;
