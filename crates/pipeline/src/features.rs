//! Quality feature extraction.
//!
//! This module derives the five quality signals that feed the inference
//! step. Each signal is computed independently from the record's rating,
//! money figures, genres and award names.

use data_loader::FilmRecord;
use serde::Serialize;

/// Genres whose visual effects are judged by budget tier
const VFX_GENRES: [&str; 4] = ["SciFi", "Fantasy", "Action", "Animation"];

/// Award-name substrings for each signal (literal, case-sensitive)
const DIRECTOR_AWARDS: [&str; 1] = ["Director"];
const ACTING_AWARDS: [&str; 2] = ["Actor", "Actress"];
const STORY_AWARDS: [&str; 2] = ["Screenplay", "Picture"];
const VFX_AWARDS: [&str; 3] = ["Visual Effects", "Cinematography", "Editing"];

/// Score assigned to a VFX-genre film that flopped both commercially and critically
const BOMB_SCORE: f64 = 2.0;

/// Score for films outside the VFX genres
const NON_VFX_SCORE: f64 = 5.0;

/// Features computed for one film.
///
/// All values lie in [0, 10].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QualitySignals {
    pub director_quality: f64,
    pub acting_quality: f64,
    pub story_quality: f64,
    pub visual_effects: f64,
    pub cultural_impact: f64,
}

/// Derives `QualitySignals` from a `FilmRecord`.
///
/// The reference year (used for a film's age) is injected rather than read
/// from the clock, so the same extractor always yields the same signals.
#[derive(Debug, Clone, Copy)]
pub struct FeatureExtractor {
    reference_year: i32,
}

impl FeatureExtractor {
    pub fn new(reference_year: i32) -> Self {
        Self { reference_year }
    }

    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    /// Compute all five signals for a film
    pub fn derive_quality_signals(&self, film: &FilmRecord) -> QualitySignals {
        QualitySignals {
            director_quality: self.director_quality(film),
            acting_quality: self.acting_quality(film),
            story_quality: self.story_quality(film),
            visual_effects: self.visual_effects(film),
            cultural_impact: self.cultural_impact(film),
        }
    }

    pub fn director_quality(&self, film: &FilmRecord) -> f64 {
        if film.has_award_containing(&DIRECTOR_AWARDS) {
            award_boosted(film.imdb_rating)
        } else {
            film.imdb_rating
        }
    }

    pub fn acting_quality(&self, film: &FilmRecord) -> f64 {
        if film.has_award_containing(&ACTING_AWARDS) {
            award_boosted(film.imdb_rating)
        } else {
            film.imdb_rating
        }
    }

    pub fn story_quality(&self, film: &FilmRecord) -> f64 {
        if film.has_award_containing(&STORY_AWARDS) {
            award_boosted(film.imdb_rating)
        } else {
            film.imdb_rating * 0.95
        }
    }

    pub fn visual_effects(&self, film: &FilmRecord) -> f64 {
        let base = vfx_from_budget(film);
        if film.has_award_containing(&VFX_AWARDS) {
            award_boosted(base)
        } else {
            base
        }
    }

    /// Rating plus bonuses for masterpieces, awards and box-office success.
    ///
    /// ## Algorithm
    /// - start from the IMDb rating
    /// - +1.0 if younger than 10 years and rated above 8.5
    /// - +1.5 if older than 30 years and rated above 8.0
    /// - +0.2 per award, at most +1.5
    /// - +0.5 if box office is more than 5x the budget
    /// - cap at 10.0
    pub fn cultural_impact(&self, film: &FilmRecord) -> f64 {
        let age = self.reference_year - film.release_year;
        let rating = film.imdb_rating;
        let mut impact = rating;

        if age < 10 && rating > 8.5 {
            impact += 1.0;
        }
        if age > 30 && rating > 8.0 {
            impact += 1.5;
        }
        if !film.awards.is_empty() {
            impact += (film.awards.len() as f64 * 0.2).min(1.5);
        }
        if film.return_on_investment() > 5.0 {
            impact += 0.5;
        }

        impact.min(10.0)
    }
}

/// 95% from the award, 5% from the underlying value
fn award_boosted(value: f64) -> f64 {
    9.5 + value * 0.05
}

/// Visual-effects base score from genre, budget tier and ROI.
///
/// Animation is judged by rating rather than budget. Other VFX genres map
/// budget tiers (>150M, >100M, >50M, <50M) to 9, 8, 7, 6, unless the film
/// lost money and is rated below 3.5, which forces 2.0. A budget of exactly
/// 50M matches no tier and falls back to the non-VFX score.
pub fn vfx_from_budget(film: &FilmRecord) -> f64 {
    let is_vfx_genre = VFX_GENRES.iter().any(|g| film.genres.contains(*g));
    if !is_vfx_genre {
        return NON_VFX_SCORE;
    }

    if film.genres.contains("Animation") {
        return if film.imdb_rating > 8.0 {
            9.0
        } else if film.imdb_rating > 7.0 {
            8.0
        } else {
            7.0
        };
    }

    let tier_score = match film.budget_usd {
        b if b > 150_000_000.0 => 9.0,
        b if b > 100_000_000.0 => 8.0,
        b if b > 50_000_000.0 => 7.0,
        b if b < 50_000_000.0 => 6.0,
        _ => return NON_VFX_SCORE,
    };

    if is_bomb(film) { BOMB_SCORE } else { tier_score }
}

/// Lost money and was badly received
fn is_bomb(film: &FilmRecord) -> bool {
    film.return_on_investment() < 1.0 && film.imdb_rating < 3.5
}
