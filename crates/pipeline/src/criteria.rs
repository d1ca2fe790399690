//! Search criteria for attribute-based recommendation.

use serde::{Deserialize, Serialize};

/// Optional constraints on a film's attributes.
///
/// Every field left as `None` is unspecified and takes no part in matching.
/// Blank strings are treated the same as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criteria {
    pub genre: Option<String>,
    pub director: Option<String>,
    pub actor: Option<String>,
    pub language: Option<String>,
    pub year_from: Option<i32>,
    pub year_to: Option<i32>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = non_blank(genre.into());
        self
    }

    pub fn with_director(mut self, director: impl Into<String>) -> Self {
        self.director = non_blank(director.into());
        self
    }

    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = non_blank(actor.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = non_blank(language.into());
        self
    }

    pub fn with_year_from(mut self, year: i32) -> Self {
        self.year_from = Some(year);
        self
    }

    pub fn with_year_to(mut self, year: i32) -> Self {
        self.year_to = Some(year);
        self
    }

    /// Treat blank strings as unspecified
    pub fn normalized(self) -> Self {
        Self {
            genre: self.genre.and_then(non_blank),
            director: self.director.and_then(non_blank),
            actor: self.actor.and_then(non_blank),
            language: self.language.and_then(non_blank),
            ..self
        }
    }

    /// Number of specified criteria (each year bound counts separately)
    pub fn specified_count(&self) -> usize {
        [
            self.genre.is_some(),
            self.director.is_some(),
            self.actor.is_some(),
            self.language.is_some(),
            self.year_from.is_some(),
            self.year_to.is_some(),
        ]
        .iter()
        .filter(|&&set| set)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.specified_count() == 0
    }
}

/// How criteria are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Every specified criterion must match
    Strict,
    /// Films are scored by how many criteria they match
    #[default]
    Ranked,
}

/// Canonical form used to compare names.
///
/// Drops whitespace, commas and apostrophes and lowercases the rest, so
/// "Christopher Nolan" and "christophernolan" compare equal.
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != ',' && *c != '\'')
        .flat_map(char::to_lowercase)
        .collect()
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("Christopher Nolan"), "christophernolan");
        assert_eq!(normalize_name("ChristopherNolan"), "christophernolan");
        assert_eq!(normalize_name("O'Brien, Dylan"), "obriendylan");
        assert_eq!(normalize_name("  Sci Fi "), "scifi");
    }

    #[test]
    fn test_specified_count() {
        assert_eq!(Criteria::new().specified_count(), 0);
        assert!(Criteria::new().is_empty());

        let criteria = Criteria::new()
            .with_genre("Drama")
            .with_year_from(1990)
            .with_year_to(1999);
        assert_eq!(criteria.specified_count(), 3);
    }

    #[test]
    fn test_blank_values_are_unspecified() {
        let criteria = Criteria::new().with_director("   ").with_actor("");
        assert!(criteria.is_empty());
    }

    #[test]
    fn test_normalized_drops_blank_fields() {
        let criteria = Criteria {
            genre: Some("  ".to_string()),
            director: Some(" Christopher Nolan ".to_string()),
            year_to: Some(2000),
            ..Criteria::default()
        }
        .normalized();

        assert_eq!(criteria.genre, None);
        assert_eq!(criteria.director.as_deref(), Some("Christopher Nolan"));
        assert_eq!(criteria.specified_count(), 2);
    }

    #[test]
    fn test_match_mode_defaults_to_ranked() {
        assert_eq!(MatchMode::default(), MatchMode::Ranked);
    }

    #[test]
    fn test_match_mode_deserializes_lowercase() {
        let mode: MatchMode = serde_json::from_str("\"ranked\"").unwrap();
        assert_eq!(mode, MatchMode::Ranked);
    }
}
