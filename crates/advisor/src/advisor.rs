//! # Film Advisor
//!
//! This module coordinates the user-facing operations over one catalogue:
//! 1. Similar films (resolve count, rank with the configured measure)
//! 2. Quality assessment (features + inference + band)
//! 3. Criteria recommendation (strict or ranked filter pipeline)
//! 4. Listing and title search
//!
//! Every operation returns a value object; formatting is left to callers.

use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use tracing::{info, instrument, warn};

use data_loader::{FactStore, FilmRecord};
use inference::{InferenceEngine, InferenceError};
use pipeline::{Criteria, CriteriaMatch, FeatureExtractor, FilterPipeline, MatchMode};
use similarity::{PointsSimilarity, Ranker, ScoreBreakdown, ScoreResult, ranker_for};

use crate::config::AdvisorConfig;
use crate::count::{CountResolution, resolve_count};
use crate::quality::{QualityOutcome, QualityScorer};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SimilarOutcome {
    Found {
        target: FilmRecord,
        count: CountResolution,
        results: Vec<ScoreResult>,
    },
    NotFound {
        title: String,
    },
    /// One film or none: nothing to compare against
    CatalogueTooSmall {
        total: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleListing {
    pub titles: Vec<String>,
    pub total: usize,
}

/// Main orchestrator over a shared catalogue
#[derive(Clone)]
pub struct FilmAdvisor {
    store: Arc<dyn FactStore>,
    ranker: Ranker,
    scorer: QualityScorer,
    config: AdvisorConfig,
}

impl FilmAdvisor {
    /// Create an advisor with the measure and reference year from `config`
    ///
    /// # Arguments
    /// * `store` - Shared catalogue handle
    /// * `engine` - Inference engine used for quality scores
    /// * `config` - Default count, reference year and similarity measure
    pub fn new(
        store: Arc<dyn FactStore>,
        engine: Arc<dyn InferenceEngine>,
        config: AdvisorConfig,
    ) -> Self {
        let ranker = ranker_for(config.measure);
        let extractor = FeatureExtractor::new(config.reference_year);
        let scorer = QualityScorer::new(store.clone(), extractor, engine);

        info!(
            measure = ranker.measure_name(),
            engine = scorer.engine_name(),
            reference_year = config.reference_year,
            films = store.count(),
            "Film advisor ready"
        );

        Self {
            store,
            ranker,
            scorer,
            config,
        }
    }

    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    pub fn ranker(&self) -> &Ranker {
        &self.ranker
    }

    pub fn store(&self) -> &dyn FactStore {
        self.store.as_ref()
    }

    /// Films most similar to `title`.
    ///
    /// `requested` is the raw count as typed by the user; see
    /// `resolve_count` for how it is interpreted.
    #[instrument(skip(self))]
    pub fn similar_films(&self, title: &str, requested: Option<&str>) -> SimilarOutcome {
        let start_time = Instant::now();

        let total = self.store.count();
        if total <= 1 {
            warn!("Catalogue has {} film(s), nothing to compare", total);
            return SimilarOutcome::CatalogueTooSmall { total };
        }

        let Some(target) = self.store.find_by_title(title) else {
            info!("No film titled '{}'", title);
            return SimilarOutcome::NotFound {
                title: title.to_string(),
            };
        };

        let count = resolve_count(requested, self.config.default_count, total);
        if let Some(adjustment) = &count.adjustment {
            info!(?adjustment, value = count.value, "Adjusted requested count");
        }

        let candidates = self.store.list_all();
        let results = self.ranker.rank(&target, &candidates, count.value);

        info!(
            "Found {} films similar to '{}' in {:.2?}",
            results.len(),
            target.title,
            start_time.elapsed()
        );

        SimilarOutcome::Found {
            target,
            count,
            results,
        }
    }

    pub fn assess_quality(&self, title: &str) -> Result<QualityOutcome, InferenceError> {
        self.scorer.evaluate_quality(title)
    }

    #[instrument(skip(self))]
    pub fn recommend_by_criteria(&self, criteria: &Criteria, mode: MatchMode) -> Vec<CriteriaMatch> {
        let pipeline = FilterPipeline::from_criteria(criteria);
        let matches = pipeline.apply(self.store.list_all(), mode);
        info!(
            "{} films match {} criteria ({:?})",
            matches.len(),
            pipeline.len(),
            mode
        );
        matches
    }

    /// All titles, alphabetically (case-insensitive)
    pub fn list_titles(&self) -> TitleListing {
        let titles = self.store.sorted_titles();
        let total = titles.len();
        TitleListing { titles, total }
    }

    /// Titles containing `fragment` (case-insensitive).
    ///
    /// Exact matches come first, then substring matches, each group in
    /// alphabetical order. A blank fragment matches nothing.
    pub fn search(&self, fragment: &str) -> Vec<String> {
        let needle = fragment.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let listing = self.list_titles();
        let (exact, partial): (Vec<String>, Vec<String>) = listing
            .titles
            .into_iter()
            .filter(|t| t.to_lowercase().contains(&needle))
            .partition(|t| t.to_lowercase() == needle);

        exact.into_iter().chain(partial).collect()
    }

    /// Per-signal points between two titles, regardless of the configured measure
    pub fn explain(&self, target: &str, candidate: &str) -> Option<ScoreBreakdown> {
        let target = self.store.find_by_title(target)?;
        let candidate = self.store.find_by_title(candidate)?;
        Some(PointsSimilarity::new().breakdown(&target, &candidate))
    }
}
