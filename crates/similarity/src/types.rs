//! Shared types for similarity scoring.

use data_loader::FilmRecord;
use serde::{Deserialize, Serialize};

/// Anything that can score how similar a candidate film is to a target film.
///
/// Higher means more similar. Scores are only meaningful relative to other
/// scores from the same measure.
///
/// `Send + Sync` lets the ranker score candidates on the rayon pool.
pub trait SimilarityMeasure: Send + Sync {
    /// Returns the name of this measure (for logging/debugging)
    fn name(&self) -> &str;

    /// Score `candidate` against `target`
    fn score(&self, target: &FilmRecord, candidate: &FilmRecord) -> f64;
}

/// Which similarity measure to rank with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasureKind {
    /// Additive per-signal points (the default)
    #[default]
    Points,
    /// Weighted nearest-neighbour average in [0, 1]
    Weighted,
}

/// One scored candidate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub title: String,
    pub score: f64,
    pub film: FilmRecord,
}

impl ScoreResult {
    pub fn new(film: FilmRecord, score: f64) -> Self {
        Self {
            title: film.title.clone(),
            score,
            film,
        }
    }
}
