//! Built-in fuzzy quality engine.
//!
//! Each input signal on [0, 10] is fuzzified into poor/average/excellent,
//! the rule base is fired, the supported output terms on [0, 100] are
//! clipped and max-aggregated, and the centroid of the aggregate is the
//! quality score.

pub mod membership;
pub mod rules;

use tracing::debug;

use crate::InferenceEngine;
use crate::error::Result;
use crate::signals::SignalInputs;
pub use membership::Membership;
pub use rules::{Condition, Level, Rule, film_quality_rules};

const INPUT_MIN: f64 = 0.0;
const INPUT_MAX: f64 = 10.0;
const OUTPUT_MAX: f64 = 100.0;

/// Spacing of the sample grid used for centroid defuzzification
const RESOLUTION: f64 = 0.1;

pub struct FuzzyQualityEngine {
    input_terms: Vec<(Level, Membership)>,
    output_terms: Vec<(Level, Membership)>,
    rules: Vec<Rule>,
}

impl FuzzyQualityEngine {
    pub fn new() -> Self {
        Self::with_rules(film_quality_rules())
    }

    /// Same terms, custom rule base
    pub fn with_rules(rules: Vec<Rule>) -> Self {
        Self {
            input_terms: vec![
                (Level::Poor, Membership::trapezoid(0.0, 0.0, 3.0, 5.0)),
                (Level::Average, Membership::triangle(3.0, 5.5, 8.0)),
                (Level::Excellent, Membership::trapezoid(6.5, 8.5, 10.0, 10.0)),
            ],
            output_terms: vec![
                (Level::Poor, Membership::trapezoid(0.0, 0.0, 25.0, 45.0)),
                (Level::Good, Membership::triangle(35.0, 55.0, 75.0)),
                (Level::Excellent, Membership::trapezoid(65.0, 85.0, 100.0, 100.0)),
            ],
            rules,
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    fn input_degree(&self, value: f64, level: Level) -> f64 {
        let value = value.clamp(INPUT_MIN, INPUT_MAX);
        self.input_terms
            .iter()
            .find(|(l, _)| *l == level)
            .map(|(_, m)| m.degree(value))
            .unwrap_or(0.0)
    }

    /// Strength with which each output level is supported
    fn fire(&self, inputs: &SignalInputs) -> Vec<(Level, f64)> {
        let degree = |signal: &str, level: Level| {
            inputs
                .get(signal)
                .map(|v| self.input_degree(v, level))
                .unwrap_or(0.0)
        };

        self.output_terms
            .iter()
            .map(|(level, _)| {
                let strength = self
                    .rules
                    .iter()
                    .filter(|r| r.conclusion == *level)
                    .map(|r| r.condition.strength(&degree))
                    .fold(0.0, f64::max);
                (*level, strength)
            })
            .collect()
    }

    fn defuzzify(&self, strengths: &[(Level, f64)]) -> f64 {
        let steps = (OUTPUT_MAX / RESOLUTION).round() as usize;
        let mut weighted = 0.0;
        let mut area = 0.0;

        for i in 0..=steps {
            let y = i as f64 * RESOLUTION;
            let mu = self
                .output_terms
                .iter()
                .zip(strengths)
                .map(|((_, m), (_, s))| m.degree(y).min(*s))
                .fold(0.0, f64::max);
            weighted += y * mu;
            area += mu;
        }

        if area == 0.0 { 0.0 } else { weighted / area }
    }
}

impl Default for FuzzyQualityEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InferenceEngine for FuzzyQualityEngine {
    fn name(&self) -> &str {
        "fuzzy"
    }

    fn evaluate(&self, inputs: &SignalInputs) -> Result<f64> {
        inputs.validate()?;
        let strengths = self.fire(inputs);
        debug!(title = inputs.title(), ?strengths, "Fired fuzzy rule base");
        Ok(self.defuzzify(&strengths))
    }
}
