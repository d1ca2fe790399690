//! Film advisor: the operations a user runs against a catalogue.
//!
//! This crate ties the lower layers together:
//! - `FilmAdvisor` coordinates similarity, quality, criteria and search
//! - `QualityScorer` turns a title into a banded quality verdict
//! - `resolve_count` interprets the user's requested result count
//! - `AdvisorConfig` carries the injected settings

pub mod advisor;
pub mod config;
pub mod count;
pub mod quality;

pub use advisor::{FilmAdvisor, SimilarOutcome, TitleListing};
pub use config::{AdvisorConfig, DEFAULT_SIMILAR_COUNT, current_year};
pub use count::{CountAdjustment, CountResolution, resolve_count};
pub use quality::{
    QualityBand, QualityOutcome, QualityScorer, QualityVerdict, SourceFacts, to_inputs,
};
