//! The film-quality rule base.
//!
//! Rules are plain data: a condition tree over (signal, level) pairs and the
//! output level it supports. Condition strength uses min for AND, max for OR
//! and `1 - μ` for NOT.

use crate::signals::{ACTING_QUALITY, CULTURAL_IMPACT, DIRECTOR_QUALITY, STORY_QUALITY, VISUAL_EFFECTS};

/// Linguistic level of a signal or of the output quality
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Poor,
    Average,
    Good,
    Excellent,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Is(&'static str, Level),
    Not(Box<Condition>),
    All(Vec<Condition>),
    Any(Vec<Condition>),
}

impl Condition {
    /// Firing strength given a lookup of input membership degrees
    pub fn strength(&self, degree: &dyn Fn(&str, Level) -> f64) -> f64 {
        match self {
            Condition::Is(signal, level) => degree(signal, *level),
            Condition::Not(inner) => 1.0 - inner.strength(degree),
            Condition::All(parts) => parts
                .iter()
                .map(|c| c.strength(degree))
                .fold(1.0, f64::min),
            Condition::Any(parts) => parts
                .iter()
                .map(|c| c.strength(degree))
                .fold(0.0, f64::max),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub condition: Condition,
    pub conclusion: Level,
}

fn is(signal: &'static str, level: Level) -> Condition {
    Condition::Is(signal, level)
}

fn not(condition: Condition) -> Condition {
    Condition::Not(Box::new(condition))
}

/// Story carries the verdict; strong craft or cultural weight lifts it,
/// weak craft drags it down.
pub fn film_quality_rules() -> Vec<Rule> {
    use Level::*;

    vec![
        Rule {
            condition: Condition::All(vec![
                is(STORY_QUALITY, Excellent),
                Condition::Any(vec![
                    is(DIRECTOR_QUALITY, Excellent),
                    is(ACTING_QUALITY, Excellent),
                ]),
            ]),
            conclusion: Excellent,
        },
        Rule {
            condition: Condition::All(vec![
                is(STORY_QUALITY, Excellent),
                is(CULTURAL_IMPACT, Excellent),
            ]),
            conclusion: Excellent,
        },
        Rule {
            condition: is(STORY_QUALITY, Average),
            conclusion: Good,
        },
        Rule {
            condition: is(STORY_QUALITY, Poor),
            conclusion: Poor,
        },
        Rule {
            condition: Condition::All(vec![
                is(STORY_QUALITY, Excellent),
                not(is(DIRECTOR_QUALITY, Excellent)),
                not(is(ACTING_QUALITY, Excellent)),
            ]),
            conclusion: Good,
        },
        Rule {
            condition: Condition::All(vec![
                is(DIRECTOR_QUALITY, Poor),
                is(ACTING_QUALITY, Poor),
            ]),
            conclusion: Poor,
        },
        Rule {
            condition: Condition::All(vec![
                is(VISUAL_EFFECTS, Poor),
                is(ACTING_QUALITY, Poor),
            ]),
            conclusion: Poor,
        },
        Rule {
            condition: Condition::All(vec![
                is(CULTURAL_IMPACT, Excellent),
                is(DIRECTOR_QUALITY, Excellent),
            ]),
            conclusion: Excellent,
        },
    ]
}
