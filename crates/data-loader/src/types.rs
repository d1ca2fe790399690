//! Core domain types for the film catalogue.
//!
//! This module defines the fundamental data structures used throughout the system:
//! - `FilmRecord`: an immutable snapshot of one film's facts
//! - `FilmCatalog`: the in-memory catalogue with its title index
//!
//! Every numeric field of a `FilmRecord` has a documented default, so
//! downstream scoring never has to deal with a missing value.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use crate::error::{DataLoadError, Result};

// =============================================================================
// Defaults
// =============================================================================

/// Release year assumed when the catalogue has none
pub const DEFAULT_RELEASE_YEAR: i32 = 2000;

/// Budget assumed when the catalogue has none (keeps ROI finite)
pub const DEFAULT_BUDGET_USD: f64 = 1.0;

// =============================================================================
// FilmRecord
// =============================================================================

/// One film's facts as read from the catalogue.
///
/// Sets use `BTreeSet` so that iteration (and therefore any printed output)
/// is ordered and reproducible. Membership is exact equality on trimmed strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmRecord {
    pub title: String,
    pub release_year: i32,
    /// IMDb rating on a 0-10 scale, 0 when unknown
    pub imdb_rating: f64,
    /// Empty when unknown
    pub director: String,
    pub genres: BTreeSet<String>,
    pub actors: BTreeSet<String>,
    pub languages: BTreeSet<String>,
    pub box_office_usd: f64,
    pub budget_usd: f64,
    pub awards: BTreeSet<String>,
}

impl FilmRecord {
    /// Create a record with every field at its default value.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into().trim().to_string(),
            release_year: DEFAULT_RELEASE_YEAR,
            imdb_rating: 0.0,
            director: String::new(),
            genres: BTreeSet::new(),
            actors: BTreeSet::new(),
            languages: BTreeSet::new(),
            box_office_usd: 0.0,
            budget_usd: DEFAULT_BUDGET_USD,
            awards: BTreeSet::new(),
        }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.release_year = year;
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.imdb_rating = rating;
        self
    }

    pub fn with_director(mut self, director: impl Into<String>) -> Self {
        self.director = director.into().trim().to_string();
        self
    }

    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.genres = collect_trimmed(genres);
        self
    }

    pub fn with_actors<I, S>(mut self, actors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.actors = collect_trimmed(actors);
        self
    }

    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.languages = collect_trimmed(languages);
        self
    }

    pub fn with_box_office(mut self, box_office_usd: f64) -> Self {
        self.box_office_usd = box_office_usd;
        self
    }

    pub fn with_budget(mut self, budget_usd: f64) -> Self {
        self.budget_usd = budget_usd;
        self
    }

    pub fn with_awards<I, S>(mut self, awards: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.awards = collect_trimmed(awards);
        self
    }

    /// Lowercased title, the catalogue's identity key
    pub fn title_key(&self) -> String {
        self.title.to_lowercase()
    }

    /// Whether this record and `other` name the same film (case-insensitive)
    pub fn same_title(&self, other: &str) -> bool {
        self.title.to_lowercase() == other.trim().to_lowercase()
    }

    /// Decade of release, e.g. 2014 -> 2010
    pub fn decade(&self) -> i32 {
        self.release_year.div_euclid(10) * 10
    }

    /// Box office divided by budget, 0 when the budget is not positive
    pub fn return_on_investment(&self) -> f64 {
        if self.budget_usd > 0.0 {
            self.box_office_usd / self.budget_usd
        } else {
            0.0
        }
    }

    /// True if any award name contains any of the given substrings.
    ///
    /// Matching is case-sensitive on purpose: award names are literal text.
    pub fn has_award_containing(&self, needles: &[&str]) -> bool {
        self.awards
            .iter()
            .any(|award| needles.iter().any(|needle| award.contains(needle)))
    }
}

fn collect_trimmed<I, S>(items: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|s| s.as_ref().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

// =============================================================================
// FilmCatalog - The In-Memory Fact Store
// =============================================================================

/// Holds every film plus the title index used for lookups.
///
/// Records are stored once in `films`; the index holds positions into it.
/// Titles are indexed by their lowercased form so lookups are case-insensitive.
#[derive(Debug, Default)]
pub struct FilmCatalog {
    pub(crate) films: Vec<FilmRecord>,
    pub(crate) title_index: HashMap<String, usize>,
}

impl FilmCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a film by title, ignoring case and surrounding whitespace
    pub fn get_film(&self, title: &str) -> Option<&FilmRecord> {
        self.title_index
            .get(&title.trim().to_lowercase())
            .map(|&idx| &self.films[idx])
    }

    /// All films in insertion order
    pub fn films(&self) -> &[FilmRecord] {
        &self.films
    }

    pub fn len(&self) -> usize {
        self.films.len()
    }

    pub fn is_empty(&self) -> bool {
        self.films.is_empty()
    }

    /// Insert a film and index its title.
    ///
    /// Fails if a film with the same title (ignoring case) is already present.
    pub fn insert_film(&mut self, film: FilmRecord) -> Result<()> {
        let key = film.title_key();
        if key.is_empty() {
            return Err(DataLoadError::ValidationError(
                "film title must not be empty".to_string(),
            ));
        }
        if self.title_index.contains_key(&key) {
            return Err(DataLoadError::DuplicateTitle { title: film.title });
        }

        self.title_index.insert(key, self.films.len());
        self.films.push(film);
        Ok(())
    }
}
