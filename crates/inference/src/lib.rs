//! Quality inference engines.
//!
//! This crate turns five named quality signals into a score on [0, 100].
//! It provides:
//! - The `InferenceEngine` trait, the seam the quality scorer depends on
//! - `FuzzyQualityEngine`, a built-in rule-based engine
//! - `RemoteInferenceEngine`, a gRPC client for an external service
//!
//! ## Example Usage
//! ```ignore
//! use inference::{FuzzyQualityEngine, InferenceEngine, SignalInputs, signals};
//!
//! let inputs = SignalInputs::new("Heat")
//!     .with(signals::DIRECTOR_QUALITY, 8.3)
//!     .with(signals::ACTING_QUALITY, 8.3)
//!     .with(signals::STORY_QUALITY, 7.9)
//!     .with(signals::VISUAL_EFFECTS, 7.0)
//!     .with(signals::CULTURAL_IMPACT, 8.3);
//!
//! let score = FuzzyQualityEngine::new().evaluate(&inputs)?;
//! ```

pub mod error;
pub mod fuzzy;
pub mod proto;
pub mod remote;
pub mod signals;

pub use error::{InferenceError, Result};
pub use fuzzy::FuzzyQualityEngine;
pub use remote::RemoteInferenceEngine;
pub use signals::SignalInputs;

/// Computes a quality score from named signals.
///
/// Implementations must be thread-safe and must return a finite score on
/// [0, 100], reporting anything else as an `InferenceError`.
pub trait InferenceEngine: Send + Sync {
    /// Short name for logging
    fn name(&self) -> &str;

    fn evaluate(&self, inputs: &SignalInputs) -> Result<f64>;
}

impl<E: InferenceEngine + ?Sized> InferenceEngine for Box<E> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn evaluate(&self, inputs: &SignalInputs) -> Result<f64> {
        (**self).evaluate(inputs)
    }
}
