//! Filters on a film's named attributes.
//!
//! Genre, director, actor and language constraints all compare names in
//! their normalized form (see `normalize_name`).

use crate::criteria::normalize_name;
use crate::traits::Filter;
use data_loader::FilmRecord;

/// Keeps films listing the wanted genre.
pub struct GenreFilter {
    wanted: String,
}

impl GenreFilter {
    pub fn new(genre: &str) -> Self {
        Self {
            wanted: normalize_name(genre),
        }
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn matches(&self, film: &FilmRecord) -> bool {
        film.genres.iter().any(|g| normalize_name(g) == self.wanted)
    }
}

/// Keeps films by the wanted director.
pub struct DirectorFilter {
    wanted: String,
}

impl DirectorFilter {
    pub fn new(director: &str) -> Self {
        Self {
            wanted: normalize_name(director),
        }
    }
}

impl Filter for DirectorFilter {
    fn name(&self) -> &str {
        "DirectorFilter"
    }

    fn matches(&self, film: &FilmRecord) -> bool {
        !film.director.is_empty() && normalize_name(&film.director) == self.wanted
    }
}

/// Keeps films whose cast includes the wanted actor.
pub struct ActorFilter {
    wanted: String,
}

impl ActorFilter {
    pub fn new(actor: &str) -> Self {
        Self {
            wanted: normalize_name(actor),
        }
    }
}

impl Filter for ActorFilter {
    fn name(&self) -> &str {
        "ActorFilter"
    }

    fn matches(&self, film: &FilmRecord) -> bool {
        film.actors.iter().any(|a| normalize_name(a) == self.wanted)
    }
}

/// Keeps films available in the wanted language.
pub struct LanguageFilter {
    wanted: String,
}

impl LanguageFilter {
    pub fn new(language: &str) -> Self {
        Self {
            wanted: normalize_name(language),
        }
    }
}

impl Filter for LanguageFilter {
    fn name(&self) -> &str {
        "LanguageFilter"
    }

    fn matches(&self, film: &FilmRecord) -> bool {
        film.languages.iter().any(|l| normalize_name(l) == self.wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_films() -> Vec<FilmRecord> {
        vec![
            FilmRecord::new("Inception")
                .with_director("Christopher Nolan")
                .with_genres(["SciFi", "Action"])
                .with_actors(["Leonardo DiCaprio", "Tom Hardy"])
                .with_languages(["English", "Japanese"]),
            FilmRecord::new("Amelie")
                .with_director("Jean-Pierre Jeunet")
                .with_genres(["Comedy", "Romance"])
                .with_actors(["Audrey Tautou"])
                .with_languages(["French"]),
            FilmRecord::new("Unknown"),
        ]
    }

    #[test]
    fn test_genre_filter() {
        let filtered = GenreFilter::new("scifi").apply(create_test_films());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Inception");
    }

    #[test]
    fn test_director_filter_ignores_spacing_and_case() {
        let filter = DirectorFilter::new("christophernolan");
        let filtered = filter.apply(create_test_films());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Inception");
    }

    #[test]
    fn test_director_filter_skips_unknown_director() {
        let filter = DirectorFilter::new("");
        assert!(!filter.matches(&FilmRecord::new("Unknown")));
    }

    #[test]
    fn test_actor_filter() {
        let filter = ActorFilter::new("Tom  Hardy");
        let films = create_test_films();
        assert!(filter.matches(&films[0]));
        assert!(!filter.matches(&films[1]));
    }

    #[test]
    fn test_language_filter() {
        let filtered = LanguageFilter::new("FRENCH").apply(create_test_films());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Amelie");
    }
}
