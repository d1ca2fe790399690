//! Ranker - orders candidate films by similarity to a target
//!
//! ## Algorithm
//! 1. Drop the target itself (case-insensitive title match)
//! 2. Score every remaining candidate in parallel with the configured measure
//! 3. Sort by score descending, ties by ascending title
//! 4. Keep the top N
//!
//! The ranker never pads its output and never fails on short input: asking
//! for 10 films out of 3 candidates returns 3.

use crate::points::PointsSimilarity;
use crate::types::{ScoreResult, SimilarityMeasure};
use data_loader::{FactStore, FilmRecord};
use rayon::prelude::*;
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Ranks candidates with a shared, thread-safe similarity measure
#[derive(Clone)]
pub struct Ranker {
    measure: Arc<dyn SimilarityMeasure>,
}

impl Ranker {
    pub fn new(measure: impl SimilarityMeasure + 'static) -> Self {
        Self {
            measure: Arc::new(measure),
        }
    }

    /// Name of the measure this ranker scores with
    pub fn measure_name(&self) -> &str {
        self.measure.name()
    }

    /// Score a single pair with the configured measure
    pub fn similarity(&self, target: &FilmRecord, candidate: &FilmRecord) -> f64 {
        self.measure.score(target, candidate)
    }

    /// Rank `candidates` against `target` and return at most `top_n` results
    #[instrument(skip(self, target, candidates), fields(target = %target.title, measure = self.measure.name()))]
    pub fn rank(
        &self,
        target: &FilmRecord,
        candidates: &[FilmRecord],
        top_n: usize,
    ) -> Vec<ScoreResult> {
        let mut scored: Vec<ScoreResult> = candidates
            .par_iter()
            .filter(|candidate| !candidate.same_title(&target.title))
            .map(|candidate| {
                ScoreResult::new(candidate.clone(), self.measure.score(target, candidate))
            })
            .collect();

        scored.sort_by(compare_results);
        scored.truncate(top_n);

        debug!(
            "Ranked {} candidates, returning {}",
            candidates.len(),
            scored.len()
        );
        scored
    }

    /// Resolve `title` through the store and rank every other film.
    ///
    /// Returns `None` when the title is not in the store. A found film with
    /// no other films to compare against yields `Some(vec![])`.
    pub fn rank_by_title(
        &self,
        store: &dyn FactStore,
        title: &str,
        top_n: usize,
    ) -> Option<Vec<ScoreResult>> {
        let target = store.find_by_title(title)?;
        let candidates = store.list_all();
        Some(self.rank(&target, &candidates, top_n))
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(PointsSimilarity::new())
    }
}

/// Score descending, then title ascending (case-insensitive, then exact)
fn compare_results(a: &ScoreResult, b: &ScoreResult) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        .then_with(|| a.title.cmp(&b.title))
}
