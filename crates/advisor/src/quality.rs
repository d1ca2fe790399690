//! # Quality Scorer
//!
//! Resolves a film, derives its quality signals, forwards them to the
//! inference engine and classifies the returned score into a band.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, instrument};

use data_loader::{FactStore, FilmRecord};
use inference::signals::{
    ACTING_QUALITY, CULTURAL_IMPACT, DIRECTOR_QUALITY, STORY_QUALITY, VISUAL_EFFECTS,
};
use inference::{InferenceEngine, InferenceError, SignalInputs};
use pipeline::{FeatureExtractor, QualitySignals};

/// Scores below this are POOR
pub const GOOD_THRESHOLD: f64 = 40.0;
/// Scores at or above this are EXCELLENT
pub const EXCELLENT_THRESHOLD: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QualityBand {
    Poor,
    Good,
    Excellent,
}

impl QualityBand {
    pub fn from_score(score: f64) -> Self {
        if score < GOOD_THRESHOLD {
            QualityBand::Poor
        } else if score < EXCELLENT_THRESHOLD {
            QualityBand::Good
        } else {
            QualityBand::Excellent
        }
    }
}

impl fmt::Display for QualityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            QualityBand::Poor => "POOR",
            QualityBand::Good => "GOOD",
            QualityBand::Excellent => "EXCELLENT",
        };
        f.write_str(label)
    }
}

/// The film facts a verdict was derived from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceFacts {
    pub release_year: i32,
    pub imdb_rating: f64,
    pub box_office_usd: f64,
    pub budget_usd: f64,
    pub return_on_investment: f64,
    pub awards: Vec<String>,
}

impl From<&FilmRecord> for SourceFacts {
    fn from(film: &FilmRecord) -> Self {
        Self {
            release_year: film.release_year,
            imdb_rating: film.imdb_rating,
            box_office_usd: film.box_office_usd,
            budget_usd: film.budget_usd,
            return_on_investment: film.return_on_investment(),
            awards: film.awards.iter().cloned().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityVerdict {
    pub title: String,
    pub score: f64,
    pub band: QualityBand,
    pub signals: QualitySignals,
    pub facts: SourceFacts,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QualityOutcome {
    Assessed(QualityVerdict),
    NotFound { title: String },
}

/// Name the five signals for the inference engine
pub fn to_inputs(title: &str, signals: &QualitySignals) -> SignalInputs {
    SignalInputs::new(title)
        .with(DIRECTOR_QUALITY, signals.director_quality)
        .with(ACTING_QUALITY, signals.acting_quality)
        .with(STORY_QUALITY, signals.story_quality)
        .with(VISUAL_EFFECTS, signals.visual_effects)
        .with(CULTURAL_IMPACT, signals.cultural_impact)
}

#[derive(Clone)]
pub struct QualityScorer {
    store: Arc<dyn FactStore>,
    extractor: FeatureExtractor,
    engine: Arc<dyn InferenceEngine>,
}

impl QualityScorer {
    pub fn new(
        store: Arc<dyn FactStore>,
        extractor: FeatureExtractor,
        engine: Arc<dyn InferenceEngine>,
    ) -> Self {
        Self {
            store,
            extractor,
            engine,
        }
    }

    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    /// Assess one film by title.
    ///
    /// An unknown title is `QualityOutcome::NotFound`; only inference
    /// failures are errors.
    #[instrument(skip(self), fields(engine = self.engine.name()))]
    pub fn evaluate_quality(&self, title: &str) -> Result<QualityOutcome, InferenceError> {
        let Some(film) = self.store.find_by_title(title) else {
            info!("No film titled '{}'", title);
            return Ok(QualityOutcome::NotFound {
                title: title.to_string(),
            });
        };

        let signals = self.extractor.derive_quality_signals(&film);
        let score = self.engine.evaluate(&to_inputs(&film.title, &signals))?;
        let band = QualityBand::from_score(score);

        info!(score, %band, "Assessed '{}'", film.title);

        Ok(QualityOutcome::Assessed(QualityVerdict {
            title: film.title.clone(),
            score,
            band,
            signals,
            facts: SourceFacts::from(&film),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::FilmCatalog;
    use inference::FuzzyQualityEngine;
    use std::sync::Mutex;

    /// Returns a fixed score and records the inputs it saw
    struct FixedEngine {
        score: f64,
        seen: Mutex<Vec<SignalInputs>>,
    }

    impl FixedEngine {
        fn new(score: f64) -> Self {
            Self {
                score,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl InferenceEngine for FixedEngine {
        fn name(&self) -> &str {
            "fixed"
        }

        fn evaluate(&self, inputs: &SignalInputs) -> inference::Result<f64> {
            self.seen.lock().unwrap().push(inputs.clone());
            Ok(self.score)
        }
    }

    struct FailingEngine;

    impl InferenceEngine for FailingEngine {
        fn name(&self) -> &str {
            "failing"
        }

        fn evaluate(&self, _inputs: &SignalInputs) -> inference::Result<f64> {
            Err(InferenceError::CallFailed("unavailable".to_string()))
        }
    }

    fn create_store() -> Arc<dyn FactStore> {
        Arc::new(
            FilmCatalog::from_films(vec![
                FilmRecord::new("Heat")
                    .with_year(1995)
                    .with_rating(8.3)
                    .with_director("Michael Mann")
                    .with_genres(["Crime", "Action"])
                    .with_budget(60_000_000.0)
                    .with_box_office(187_000_000.0),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(QualityBand::from_score(0.0), QualityBand::Poor);
        assert_eq!(QualityBand::from_score(39.999), QualityBand::Poor);
        assert_eq!(QualityBand::from_score(40.0), QualityBand::Good);
        assert_eq!(QualityBand::from_score(69.999), QualityBand::Good);
        assert_eq!(QualityBand::from_score(70.0), QualityBand::Excellent);
        assert_eq!(QualityBand::from_score(100.0), QualityBand::Excellent);
    }

    #[test]
    fn test_band_display() {
        assert_eq!(QualityBand::Excellent.to_string(), "EXCELLENT");
    }

    #[test]
    fn test_forwards_five_named_signals() {
        let engine = Arc::new(FixedEngine::new(72.0));
        let scorer = QualityScorer::new(create_store(), FeatureExtractor::new(2025), engine.clone());

        let outcome = scorer.evaluate_quality("heat").unwrap();
        let QualityOutcome::Assessed(verdict) = outcome else {
            panic!("expected a verdict");
        };
        assert_eq!(verdict.title, "Heat");
        assert_eq!(verdict.band, QualityBand::Excellent);
        assert_eq!(verdict.facts.release_year, 1995);

        let seen = engine.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].validate().is_ok());
        assert_eq!(seen[0].title(), "Heat");
        // Action film with a 60M budget sits in the >50M tier
        assert_eq!(seen[0].get(VISUAL_EFFECTS).unwrap(), 7.0);
    }

    #[test]
    fn test_unknown_title_is_not_found() {
        let scorer = QualityScorer::new(
            create_store(),
            FeatureExtractor::new(2025),
            Arc::new(FailingEngine),
        );
        assert_eq!(
            scorer.evaluate_quality("Ronin").unwrap(),
            QualityOutcome::NotFound {
                title: "Ronin".to_string()
            }
        );
    }

    #[test]
    fn test_engine_failure_is_propagated() {
        let scorer = QualityScorer::new(
            create_store(),
            FeatureExtractor::new(2025),
            Arc::new(FailingEngine),
        );
        assert!(matches!(
            scorer.evaluate_quality("Heat"),
            Err(InferenceError::CallFailed(_))
        ));
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let scorer = QualityScorer::new(
            create_store(),
            FeatureExtractor::new(2025),
            Arc::new(FuzzyQualityEngine::new()),
        );
        let first = scorer.evaluate_quality("Heat").unwrap();
        let second = scorer.evaluate_quality("HEAT").unwrap();
        assert_eq!(first, second);
    }
}
