//! FilmCatalog building and validation.
//!
//! Turns parsed records into a queryable catalogue:
//! - index by lowercased title
//! - integrity checks on numeric fields

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use std::path::Path;
use tracing::{debug, info};

impl FilmCatalog {
    /// Load a catalogue file and build the title index.
    ///
    /// Steps:
    /// 1. Parse the file into records
    /// 2. Insert every record (this indexes titles and rejects duplicates)
    /// 3. Validate data integrity
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading film catalogue from {:?}", path);

        let films = parser::parse_films(path)?;
        let catalog = Self::from_films(films)?;

        info!(films = catalog.len(), "Film catalogue loaded");
        Ok(catalog)
    }

    /// Build a catalogue from records already in memory
    pub fn from_films(films: impl IntoIterator<Item = FilmRecord>) -> Result<Self> {
        let mut catalog = FilmCatalog::new();
        for film in films {
            debug!("Indexing {}", film.title);
            catalog.insert_film(film)?;
        }
        catalog.validate()?;
        Ok(catalog)
    }

    /// Validate data integrity
    ///
    /// Check that:
    /// - ratings are within 0-10
    /// - box office and budget are non-negative and finite
    pub fn validate(&self) -> Result<()> {
        for film in &self.films {
            if !film.imdb_rating.is_finite() || !(0.0..=10.0).contains(&film.imdb_rating) {
                return Err(DataLoadError::InvalidValue {
                    field: format!("imdb_rating of '{}'", film.title),
                    value: film.imdb_rating.to_string(),
                });
            }
            for (name, value) in [
                ("box_office_usd", film.box_office_usd),
                ("budget_usd", film.budget_usd),
            ] {
                if !value.is_finite() || value < 0.0 {
                    return Err(DataLoadError::InvalidValue {
                        field: format!("{} of '{}'", name, film.title),
                        value: value.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}
