//! Filters on release year.
//!
//! The lower and upper bounds are separate filters so that each counts as
//! its own criterion in ranked mode. Both bounds are inclusive.

use crate::traits::Filter;
use data_loader::FilmRecord;

/// Keeps films released in or after `year`.
pub struct YearFromFilter {
    year: i32,
}

impl YearFromFilter {
    pub fn new(year: i32) -> Self {
        Self { year }
    }
}

impl Filter for YearFromFilter {
    fn name(&self) -> &str {
        "YearFromFilter"
    }

    fn matches(&self, film: &FilmRecord) -> bool {
        film.release_year >= self.year
    }
}

/// Keeps films released in or before `year`.
pub struct YearToFilter {
    year: i32,
}

impl YearToFilter {
    pub fn new(year: i32) -> Self {
        Self { year }
    }
}

impl Filter for YearToFilter {
    fn name(&self) -> &str {
        "YearToFilter"
    }

    fn matches(&self, film: &FilmRecord) -> bool {
        film.release_year <= self.year
    }
}
