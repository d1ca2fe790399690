//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains filters
//! together using the builder pattern and evaluates them in either strict
//! or ranked mode.

use crate::criteria::{Criteria, MatchMode};
use crate::filters::{
    ActorFilter, DirectorFilter, GenreFilter, LanguageFilter, YearFromFilter, YearToFilter,
};
use crate::traits::Filter;
use data_loader::FilmRecord;
use serde::Serialize;
use std::cmp::Ordering;
use tracing;

/// A film together with how many filters it satisfied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriteriaMatch {
    pub film: FilmRecord,
    pub matched: usize,
}

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(GenreFilter::new("Drama"))
///     .add_filter(YearFromFilter::new(1990));
///
/// let strict = pipeline.apply_strict(films.clone());
/// let ranked = pipeline.apply_ranked(films);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Build one filter per specified criterion.
    pub fn from_criteria(criteria: &Criteria) -> Self {
        let mut pipeline = Self::new();
        if let Some(genre) = &criteria.genre {
            pipeline = pipeline.add_filter(GenreFilter::new(genre));
        }
        if let Some(director) = &criteria.director {
            pipeline = pipeline.add_filter(DirectorFilter::new(director));
        }
        if let Some(actor) = &criteria.actor {
            pipeline = pipeline.add_filter(ActorFilter::new(actor));
        }
        if let Some(language) = &criteria.language {
            pipeline = pipeline.add_filter(LanguageFilter::new(language));
        }
        if let Some(year) = criteria.year_from {
            pipeline = pipeline.add_filter(YearFromFilter::new(year));
        }
        if let Some(year) = criteria.year_to {
            pipeline = pipeline.add_filter(YearToFilter::new(year));
        }
        pipeline
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence, keeping films that pass every one.
    ///
    /// Results are ordered by title.
    pub fn apply_strict(&self, films: Vec<FilmRecord>) -> Vec<CriteriaMatch> {
        let mut current = films;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }

        let matched = self.filters.len();
        let mut results: Vec<CriteriaMatch> = current
            .into_iter()
            .map(|film| CriteriaMatch { film, matched })
            .collect();
        results.sort_by(|a, b| compare_titles(&a.film, &b.film));
        results
    }

    /// Score every film by the number of filters it passes.
    ///
    /// ## Algorithm
    /// 1. Count satisfied filters per film
    /// 2. Drop films matching none (unless the pipeline is empty, in which
    ///    case every film is kept with a count of 0)
    /// 3. Order by count descending, then by title
    pub fn apply_ranked(&self, films: Vec<FilmRecord>) -> Vec<CriteriaMatch> {
        let keep_unmatched = self.filters.is_empty();
        let mut results: Vec<CriteriaMatch> = films
            .into_iter()
            .map(|film| {
                let matched = self.filters.iter().filter(|f| f.matches(&film)).count();
                CriteriaMatch { film, matched }
            })
            .filter(|m| keep_unmatched || m.matched > 0)
            .collect();

        tracing::debug!(
            "Ranked {} films against {} filters",
            results.len(),
            self.filters.len()
        );

        results.sort_by(|a, b| {
            b.matched
                .cmp(&a.matched)
                .then_with(|| compare_titles(&a.film, &b.film))
        });
        results
    }

    pub fn apply(&self, films: Vec<FilmRecord>, mode: MatchMode) -> Vec<CriteriaMatch> {
        match mode {
            MatchMode::Strict => self.apply_strict(films),
            MatchMode::Ranked => self.apply_ranked(films),
        }
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

fn compare_titles(a: &FilmRecord, b: &FilmRecord) -> Ordering {
    a.title_key()
        .cmp(&b.title_key())
        .then_with(|| a.title.cmp(&b.title))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_films() -> Vec<FilmRecord> {
        vec![
            FilmRecord::new("The Prestige")
                .with_year(2006)
                .with_director("Christopher Nolan")
                .with_genres(["Drama", "Mystery"])
                .with_actors(["Christian Bale", "Hugh Jackman"])
                .with_languages(["English"]),
            FilmRecord::new("Inception")
                .with_year(2010)
                .with_director("Christopher Nolan")
                .with_genres(["SciFi", "Action"])
                .with_actors(["Leonardo DiCaprio"])
                .with_languages(["English"]),
            FilmRecord::new("Amelie")
                .with_year(2001)
                .with_director("Jean-Pierre Jeunet")
                .with_genres(["Comedy"])
                .with_languages(["French"]),
        ]
    }

    fn titles(results: &[CriteriaMatch]) -> Vec<&str> {
        results.iter().map(|m| m.film.title.as_str()).collect()
    }

    #[test]
    fn test_empty_pipeline_strict_keeps_everything_sorted() {
        let results = FilterPipeline::new().apply_strict(create_test_films());
        assert_eq!(titles(&results), vec!["Amelie", "Inception", "The Prestige"]);
        assert!(results.iter().all(|m| m.matched == 0));
    }

    #[test]
    fn test_empty_pipeline_ranked_keeps_everything_with_zero() {
        let results = FilterPipeline::new().apply_ranked(create_test_films());
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|m| m.matched == 0));
    }

    #[test]
    fn test_strict_requires_every_criterion() {
        let criteria = Criteria::new()
            .with_director("Christopher Nolan")
            .with_genre("Drama");
        let results = FilterPipeline::from_criteria(&criteria).apply_strict(create_test_films());

        assert_eq!(titles(&results), vec!["The Prestige"]);
        assert_eq!(results[0].matched, 2);
    }

    #[test]
    fn test_ranked_orders_by_match_count_then_title() {
        let criteria = Criteria::new()
            .with_director("christophernolan")
            .with_genre("Drama")
            .with_year_from(2005);
        let results = FilterPipeline::from_criteria(&criteria).apply_ranked(create_test_films());

        assert_eq!(titles(&results), vec!["The Prestige", "Inception"]);
        assert_eq!(results[0].matched, 3);
        assert_eq!(results[1].matched, 2);
    }

    #[test]
    fn test_ranked_drops_films_matching_nothing() {
        let criteria = Criteria::new().with_language("French");
        let results =
            FilterPipeline::from_criteria(&criteria).apply(create_test_films(), MatchMode::Ranked);
        assert_eq!(titles(&results), vec!["Amelie"]);
    }

    #[test]
    fn test_from_criteria_builds_one_filter_per_field() {
        let criteria = Criteria::new()
            .with_genre("Drama")
            .with_actor("Christian Bale")
            .with_year_from(2000)
            .with_year_to(2010);
        assert_eq!(FilterPipeline::from_criteria(&criteria).len(), 4);
    }
}
