//! Additive points similarity
//!
//! Every attribute family contributes points independently and the
//! contributions are summed. Nothing is normalised, so a score only has
//! meaning next to other scores for the same target.
//!
//! | Signal           | Rule                                   | Points            |
//! |------------------|----------------------------------------|-------------------|
//! | Genre overlap    | per genre in both sets                 | 30 each           |
//! | Director match   | exact, case-sensitive, non-empty       | 25                |
//! | Actor overlap    | per actor in both sets                 | 20 each           |
//! | Rating closeness | `abs(a - b) < 0.5`                     | 15                |
//! | Decade match     | same `floor(year / 10) * 10`           | 10                |
//! | Language overlap | per language in both sets              | 5 each            |
//!
//! Each family is an intersection or an equality test, so the score is
//! symmetric: `score(a, b) == score(b, a)`.

use crate::types::SimilarityMeasure;
use data_loader::FilmRecord;
use serde::Serialize;
use std::collections::BTreeSet;

/// Point values for each signal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointWeights {
    pub per_shared_genre: f64,
    pub same_director: f64,
    pub per_shared_actor: f64,
    pub close_rating: f64,
    pub same_decade: f64,
    pub per_shared_language: f64,
    /// Ratings closer than this count as "close"
    pub rating_tolerance: f64,
}

impl Default for PointWeights {
    fn default() -> Self {
        Self {
            per_shared_genre: 30.0,
            same_director: 25.0,
            per_shared_actor: 20.0,
            close_rating: 15.0,
            same_decade: 10.0,
            per_shared_language: 5.0,
            rating_tolerance: 0.5,
        }
    }
}

/// Per-signal contributions behind one score
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub genres: f64,
    pub director: f64,
    pub actors: f64,
    pub rating: f64,
    pub decade: f64,
    pub languages: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.genres + self.director + self.actors + self.rating + self.decade + self.languages
    }
}

/// The additive points measure
#[derive(Debug, Clone, Default)]
pub struct PointsSimilarity {
    weights: PointWeights,
}

impl PointsSimilarity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use custom point values
    pub fn with_weights(mut self, weights: PointWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Score with every contribution kept separately
    pub fn breakdown(&self, target: &FilmRecord, candidate: &FilmRecord) -> ScoreBreakdown {
        let w = &self.weights;

        let director = if !target.director.is_empty() && target.director == candidate.director {
            w.same_director
        } else {
            0.0
        };

        let rating = if (target.imdb_rating - candidate.imdb_rating).abs() < w.rating_tolerance {
            w.close_rating
        } else {
            0.0
        };

        let decade = if target.decade() == candidate.decade() {
            w.same_decade
        } else {
            0.0
        };

        ScoreBreakdown {
            genres: shared_count(&target.genres, &candidate.genres) as f64 * w.per_shared_genre,
            director,
            actors: shared_count(&target.actors, &candidate.actors) as f64 * w.per_shared_actor,
            rating,
            decade,
            languages: shared_count(&target.languages, &candidate.languages) as f64
                * w.per_shared_language,
        }
    }
}

impl SimilarityMeasure for PointsSimilarity {
    fn name(&self) -> &str {
        "points"
    }

    fn score(&self, target: &FilmRecord, candidate: &FilmRecord) -> f64 {
        self.breakdown(target, candidate).total()
    }
}

fn shared_count(a: &BTreeSet<String>, b: &BTreeSet<String>) -> usize {
    a.intersection(b).count()
}
