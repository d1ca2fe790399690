//! Criteria filtering and quality feature extraction for films.
//!
//! This crate provides:
//! - Filter trait and implementations for attribute constraints
//! - FilterPipeline for composing filters in strict or ranked mode
//! - FeatureExtractor for computing the five quality signals
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{Criteria, FeatureExtractor, FilterPipeline, MatchMode};
//!
//! let criteria = Criteria::new().with_director("Christopher Nolan");
//! let matches = FilterPipeline::from_criteria(&criteria).apply(films, MatchMode::Ranked);
//!
//! let extractor = FeatureExtractor::new(2025);
//! let signals = extractor.derive_quality_signals(&matches[0].film);
//! ```

pub mod criteria;
pub mod features;
pub mod filter_pipeline;
pub mod filters;
pub mod traits;

// Re-export main types
pub use criteria::{Criteria, MatchMode, normalize_name};
pub use features::{FeatureExtractor, QualitySignals, vfx_from_budget};
pub use filter_pipeline::{CriteriaMatch, FilterPipeline};
pub use traits::Filter;
