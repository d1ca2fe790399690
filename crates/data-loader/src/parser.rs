//! Parser for film catalogue files.
//!
//! One film per line, fields separated by `::`:
//!
//! ```text
//! title::year::imdb_rating::director::genres::actors::languages::box_office_usd::budget_usd::awards
//! ```
//!
//! Set-valued fields (genres, actors, languages, awards) are `|`-separated.
//! Blank lines and lines starting with `#` are skipped. An empty field takes
//! the record's default value; trailing fields may be omitted entirely.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use std::path::Path;

/// Number of `::`-separated fields in a full catalogue line
pub const FIELD_COUNT: usize = 10;

/// Parse a catalogue file from disk
pub fn parse_films(path: &Path) -> Result<Vec<FilmRecord>> {
    if !path.exists() {
        return Err(DataLoadError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    parse_films_str(&content, &file_name)
}

/// Parse catalogue text. `file` is only used in error messages.
pub fn parse_films_str(content: &str, file: &str) -> Result<Vec<FilmRecord>> {
    let mut films = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() || line_trimmed.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line_trimmed.split("::").map(str::trim).collect();
        if parts.len() > FIELD_COUNT {
            return Err(DataLoadError::ParseError {
                file: file.to_string(),
                line: line_no,
                reason: format!("expected at most {} fields, found {}", FIELD_COUNT, parts.len()),
            });
        }
        let field = |i: usize| parts.get(i).copied().unwrap_or("");

        let title = field(0);
        if title.is_empty() {
            return Err(DataLoadError::ParseError {
                file: file.to_string(),
                line: line_no,
                reason: "Missing title".to_string(),
            });
        }

        let mut film = FilmRecord::new(title)
            .with_director(field(3))
            .with_genres(split_set(field(4)))
            .with_actors(split_set(field(5)))
            .with_languages(split_set(field(6)))
            .with_awards(split_set(field(9)));

        if let Some(year) = parse_year(field(1), file, line_no)? {
            film = film.with_year(year);
        }
        if let Some(rating) = parse_number(field(2), "imdb_rating", file, line_no)? {
            if !(0.0..=10.0).contains(&rating) {
                return Err(DataLoadError::InvalidValue {
                    field: "imdb_rating".to_string(),
                    value: rating.to_string(),
                });
            }
            film = film.with_rating(rating);
        }
        if let Some(box_office) = parse_money(field(7), "box_office_usd", file, line_no)? {
            film = film.with_box_office(box_office);
        }
        if let Some(budget) = parse_money(field(8), "budget_usd", file, line_no)? {
            film = film.with_budget(budget);
        }

        films.push(film);
    }

    Ok(films)
}

/// Split a `|`-separated set field
fn split_set(s: &str) -> Vec<&str> {
    if s.is_empty() {
        return Vec::new();
    }
    s.split('|').collect()
}

/// Parse a release year from its leading four digits.
///
/// Accepts plain years ("2010") and date-like literals ("2010-07-16").
fn parse_year(s: &str, file: &str, line: usize) -> Result<Option<i32>> {
    if s.is_empty() {
        return Ok(None);
    }
    let digits = s.get(..4).unwrap_or(s);
    digits
        .parse::<i32>()
        .map(Some)
        .map_err(|e| DataLoadError::ParseError {
            file: file.to_string(),
            line,
            reason: format!("Invalid year '{}': {}", s, e),
        })
}

fn parse_number(s: &str, name: &str, file: &str, line: usize) -> Result<Option<f64>> {
    if s.is_empty() {
        return Ok(None);
    }
    let value: f64 = s.parse().map_err(|e| DataLoadError::ParseError {
        file: file.to_string(),
        line,
        reason: format!("Invalid {}: {}", name, e),
    })?;
    if !value.is_finite() {
        return Err(DataLoadError::InvalidValue {
            field: name.to_string(),
            value: s.to_string(),
        });
    }
    Ok(Some(value))
}

/// Monetary amounts must be non-negative. `_` digit separators are allowed.
fn parse_money(s: &str, name: &str, file: &str, line: usize) -> Result<Option<f64>> {
    let cleaned = s.replace('_', "");
    let value = parse_number(&cleaned, name, file, line)?;
    if let Some(v) = value {
        if v < 0.0 {
            return Err(DataLoadError::InvalidValue {
                field: name.to_string(),
                value: s.to_string(),
            });
        }
    }
    Ok(value)
}
