//! Weighted nearest-neighbour similarity
//!
//! An alternative to the points measure: every attribute gets a local
//! similarity in [0, 1] and the global score is their weighted average.
//!
//! ## Local similarities
//! - Sets (genres, actors, languages): stepped overlap, see [`set_similarity`]
//! - Director: 1.0 on exact, non-empty equality
//! - Rating and year: `1 - |a - b| / range`, floored at 0
//!
//! Unlike the points measure this one is directional: set similarity looks
//! at how many of the *target's* members the candidate shares.

use crate::types::SimilarityMeasure;
use data_loader::FilmRecord;
use std::collections::BTreeSet;

/// Attribute weights, normalised by their sum when scoring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeighbourWeights {
    pub genres: f64,
    pub director: f64,
    pub actors: f64,
    pub rating: f64,
    pub year: f64,
    pub languages: f64,
}

impl Default for NeighbourWeights {
    fn default() -> Self {
        Self {
            genres: 0.28,
            director: 0.23,
            actors: 0.19,
            rating: 0.15,
            year: 0.10,
            languages: 0.05,
        }
    }
}

impl NeighbourWeights {
    fn sum(&self) -> f64 {
        self.genres + self.director + self.actors + self.rating + self.year + self.languages
    }
}

/// Interval ranges for the numeric attributes
const RATING_RANGE: f64 = 10.0;
const YEAR_RANGE: f64 = 100.0;

#[derive(Debug, Clone, Default)]
pub struct WeightedNeighbourSimilarity {
    weights: NeighbourWeights,
}

impl WeightedNeighbourSimilarity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(mut self, weights: NeighbourWeights) -> Self {
        self.weights = weights;
        self
    }
}

impl SimilarityMeasure for WeightedNeighbourSimilarity {
    fn name(&self) -> &str {
        "weighted"
    }

    fn score(&self, target: &FilmRecord, candidate: &FilmRecord) -> f64 {
        let w = &self.weights;
        let total_weight = w.sum();
        if total_weight <= 0.0 {
            return 0.0;
        }

        let director = if !target.director.is_empty() && target.director == candidate.director {
            1.0
        } else {
            0.0
        };

        let weighted = w.genres * set_similarity(&target.genres, &candidate.genres)
            + w.director * director
            + w.actors * set_similarity(&target.actors, &candidate.actors)
            + w.rating
                * interval_similarity(target.imdb_rating, candidate.imdb_rating, RATING_RANGE)
            + w.year
                * interval_similarity(
                    f64::from(target.release_year),
                    f64::from(candidate.release_year),
                    YEAR_RANGE,
                )
            + w.languages * set_similarity(&target.languages, &candidate.languages);

        weighted / total_weight
    }
}

/// Stepped overlap between a target set and a candidate set.
///
/// - either set empty: 0.0
/// - target has one member: 1.0 if the candidate shares it, else 0.0
/// - target has two or more: 0 shared -> 0.0, 1 shared -> 0.5, 2+ shared -> 1.0
pub fn set_similarity(target: &BTreeSet<String>, candidate: &BTreeSet<String>) -> f64 {
    if target.is_empty() || candidate.is_empty() {
        return 0.0;
    }
    let shared = target.intersection(candidate).count();

    if target.len() == 1 {
        return if shared >= 1 { 1.0 } else { 0.0 };
    }
    match shared {
        0 => 0.0,
        1 => 0.5,
        _ => 1.0,
    }
}

/// `1 - |a - b| / range`, clamped to [0, 1]
pub fn interval_similarity(a: f64, b: f64, range: f64) -> f64 {
    if range <= 0.0 {
        return if a == b { 1.0 } else { 0.0 };
    }
    (1.0 - (a - b).abs() / range).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_set_similarity_steps() {
        assert_eq!(set_similarity(&set(&["A"]), &set(&["A", "B"])), 1.0);
        assert_eq!(set_similarity(&set(&["A"]), &set(&["B"])), 0.0);
        assert_eq!(set_similarity(&set(&["A", "B", "C"]), &set(&["C"])), 0.5);
        assert_eq!(set_similarity(&set(&["A", "B", "C"]), &set(&["A", "C"])), 1.0);
        assert_eq!(set_similarity(&set(&[]), &set(&["A"])), 0.0);
        assert_eq!(set_similarity(&set(&["A"]), &set(&[])), 0.0);
    }

    #[test]
    fn test_set_similarity_is_directional() {
        let one = set(&["A"]);
        let many = set(&["A", "B", "C"]);
        assert_eq!(set_similarity(&one, &many), 1.0);
        assert_eq!(set_similarity(&many, &one), 0.5);
    }

    #[test]
    fn test_interval_similarity() {
        assert_eq!(interval_similarity(8.0, 8.0, 10.0), 1.0);
        assert!((interval_similarity(8.0, 6.0, 10.0) - 0.8).abs() < 1e-12);
        assert_eq!(interval_similarity(1900.0, 2020.0, 100.0), 0.0);
    }

    #[test]
    fn test_identical_films_score_one() {
        let film = FilmRecord::new("A")
            .with_genres(["Drama", "Crime"])
            .with_director("D")
            .with_actors(["X", "Y"])
            .with_rating(8.0)
            .with_year(1994)
            .with_languages(["English", "Italian"]);

        let score = WeightedNeighbourSimilarity::new().score(&film, &film.clone());
        assert!((score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_unrelated_films_score_low() {
        let a = FilmRecord::new("A").with_genres(["Drama"]).with_rating(9.0).with_year(1950);
        let b = FilmRecord::new("B").with_genres(["Horror"]).with_rating(1.0).with_year(2050);

        let score = WeightedNeighbourSimilarity::new().score(&a, &b);
        // only rating interval contributes: 0.15 * 0.2 / 1.0
        assert!((score - 0.03).abs() < 1e-9);
    }
}
