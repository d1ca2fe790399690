//! Advisor configuration.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use similarity::MeasureKind;

/// Number of similar films returned when the caller gives no usable count
pub const DEFAULT_SIMILAR_COUNT: usize = 5;

/// Settings carried into the `FilmAdvisor`.
///
/// Missing fields fall back to their defaults when deserialized, so a
/// partial JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    pub default_count: usize,
    /// Year that film ages are measured from
    pub reference_year: i32,
    pub measure: MeasureKind,
}

impl AdvisorConfig {
    pub fn with_reference_year(mut self, year: i32) -> Self {
        self.reference_year = year;
        self
    }

    pub fn with_measure(mut self, measure: MeasureKind) -> Self {
        self.measure = measure;
        self
    }
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            default_count: DEFAULT_SIMILAR_COUNT,
            reference_year: current_year(),
            measure: MeasureKind::default(),
        }
    }
}

/// The wall-clock year in local time
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
