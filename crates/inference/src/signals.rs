//! Named inputs handed to an inference engine.

use std::collections::BTreeMap;

use crate::error::{InferenceError, Result};

pub const DIRECTOR_QUALITY: &str = "directorQuality";
pub const ACTING_QUALITY: &str = "actingQuality";
pub const STORY_QUALITY: &str = "storyQuality";
pub const VISUAL_EFFECTS: &str = "visualEffects";
pub const CULTURAL_IMPACT: &str = "culturalImpact";

/// Every signal an engine expects, in a fixed order
pub const SIGNAL_NAMES: [&str; 5] = [
    DIRECTOR_QUALITY,
    ACTING_QUALITY,
    STORY_QUALITY,
    VISUAL_EFFECTS,
    CULTURAL_IMPACT,
];

/// The five quality signals for one film, keyed by name.
///
/// Built with `with`; `validate` checks that exactly the five known names
/// are present and every value is finite.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalInputs {
    title: String,
    values: BTreeMap<String, f64>,
}

impl SignalInputs {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            values: BTreeMap::new(),
        }
    }

    /// Set one signal, replacing any earlier value under the same name
    pub fn with(mut self, name: &str, value: f64) -> Self {
        self.values.insert(name.to_string(), value);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn get(&self, name: &str) -> Result<f64> {
        self.values
            .get(name)
            .copied()
            .ok_or_else(|| InferenceError::MissingInput(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(unknown) = self.values.keys().find(|k| !SIGNAL_NAMES.contains(&k.as_str())) {
            return Err(InferenceError::UnknownInput(unknown.clone()));
        }
        for name in SIGNAL_NAMES {
            let value = self.get(name)?;
            if !value.is_finite() {
                return Err(InferenceError::InvalidInput {
                    name: name.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}
