//! The fact-store contract consumed by the scoring crates.
//!
//! Scoring code never touches `FilmCatalog` directly; it asks a `FactStore`
//! for snapshots. Any other backing store can be plugged in by implementing
//! this trait.

use std::cmp::Ordering;

use crate::types::{FilmCatalog, FilmRecord};

/// Read-only access to film facts.
///
/// `Send + Sync` so a store can be shared behind an `Arc` across threads.
pub trait FactStore: Send + Sync {
    /// Case-insensitive exact title lookup
    fn find_by_title(&self, title: &str) -> Option<FilmRecord>;

    /// Every film in the store
    fn list_all(&self) -> Vec<FilmRecord>;

    /// Number of films in the store
    fn count(&self) -> usize;

    /// Every title, alphabetically (case-insensitive, then exact)
    fn sorted_titles(&self) -> Vec<String> {
        let mut titles: Vec<String> = self.list_all().into_iter().map(|f| f.title).collect();
        titles.sort_by(|a, b| title_order(a, b));
        titles
    }
}

/// Alphabetical title order: case-insensitive first, exact as tie-break
pub fn title_order(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

impl FactStore for FilmCatalog {
    fn find_by_title(&self, title: &str) -> Option<FilmRecord> {
        self.get_film(title).cloned()
    }

    fn list_all(&self) -> Vec<FilmRecord> {
        self.films().to_vec()
    }

    fn count(&self) -> usize {
        self.len()
    }

    fn sorted_titles(&self) -> Vec<String> {
        let mut titles: Vec<&str> = self.films().iter().map(|f| f.title.as_str()).collect();
        titles.sort_by(|a, b| title_order(a, b));
        titles.into_iter().map(str::to_string).collect()
    }
}
