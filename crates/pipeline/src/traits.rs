//! Core traits for criteria filtering.
//!
//! This module defines the Filter trait that lets attribute constraints be
//! composed into a FilterPipeline and evaluated one film at a time.

use data_loader::FilmRecord;

/// A single attribute constraint on a film.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared across threads
/// - `matches` is a pure predicate so the pipeline can both drop films
///   (strict mode) and count satisfied filters (ranked mode)
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `film` satisfies this constraint
    fn matches(&self, film: &FilmRecord) -> bool;

    /// Keep only the films that satisfy this constraint.
    fn apply(&self, films: Vec<FilmRecord>) -> Vec<FilmRecord> {
        films.into_iter().filter(|film| self.matches(film)).collect()
    }
}
