//! Deterministic `PolarityScorer` doubles used by unit, behaviour, and
//! property tests.

use std::collections::HashMap;

use crate::PolarityScorer;

/// Scorer returning the same polarity for every text.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FixedPolarityScorer(pub f64);

impl PolarityScorer for FixedPolarityScorer {
    fn polarity(&self, _text: &str) -> f64 {
        self.0
    }
}

/// Scorer returning a scripted polarity per exact text, `0.0` otherwise.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScriptedPolarityScorer {
    scores: HashMap<String, f64>,
}

impl ScriptedPolarityScorer {
    /// Construct a scorer with no scripted texts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the polarity returned for `text`.
    #[must_use]
    pub fn with_score(mut self, text: impl Into<String>, score: f64) -> Self {
        self.scores.insert(text.into(), score);
        self
    }
}

impl PolarityScorer for ScriptedPolarityScorer {
    fn polarity(&self, text: &str) -> f64 {
        self.scores.get(text).copied().unwrap_or(0.0)
    }
}
