//! Built-in valence-lexicon polarity scorer.
//!
//! Each known word carries a valence in `-1.0..=1.0`. Intensifiers scale the
//! next valence word and negators flip and halve it. The text's polarity is
//! the mean valence of the words matched, or `0.0` when none match.

use std::collections::HashMap;

use reviewlens_core::PolarityScorer;

use crate::{normalize, tokens};

/// Factor applied to a valence preceded by a negator.
const NEGATION_FACTOR: f64 = -0.5;

/// Tokens a negator may precede its valence word by before it lapses.
const NEGATION_WINDOW: usize = 3;

const VALENCES: &[(&str, f64)] = &[
    ("amazing", 0.6),
    ("average", -0.15),
    ("awesome", 1.0),
    ("awful", -1.0),
    ("bad", -0.7),
    ("beautiful", 0.85),
    ("best", 1.0),
    ("bland", -0.5),
    ("brilliant", 0.9),
    ("broken", -0.4),
    ("clean", 0.37),
    ("cold", -0.6),
    ("comfortable", 0.4),
    ("cozy", 0.5),
    ("delicious", 1.0),
    ("delightful", 0.9),
    ("dirty", -0.6),
    ("disappointed", -0.75),
    ("disappointing", -0.6),
    ("disgusting", -1.0),
    ("enjoy", 0.4),
    ("enjoyed", 0.4),
    ("excellent", 1.0),
    ("fantastic", 0.4),
    ("fast", 0.2),
    ("fine", 0.42),
    ("fresh", 0.3),
    ("friendly", 0.38),
    ("good", 0.7),
    ("great", 0.8),
    ("happy", 0.8),
    ("hate", -0.8),
    ("helpful", 0.5),
    ("horrible", -1.0),
    ("kind", 0.6),
    ("love", 0.5),
    ("loved", 0.7),
    ("lovely", 0.5),
    ("mediocre", -0.4),
    ("nice", 0.6),
    ("okay", 0.5),
    ("overpriced", -0.5),
    ("perfect", 1.0),
    ("pleasant", 0.73),
    ("polite", 0.4),
    ("poor", -0.4),
    ("recommend", 0.5),
    ("rude", -0.3),
    ("sad", -0.5),
    ("slow", -0.3),
    ("stale", -0.5),
    ("tasty", 0.6),
    ("terrible", -1.0),
    ("unfriendly", -0.4),
    ("unhappy", -0.6),
    ("wonderful", 1.0),
    ("worse", -0.4),
    ("worst", -1.0),
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.4),
    ("extremely", 1.5),
    ("highly", 1.3),
    ("incredibly", 1.4),
    ("quite", 1.1),
    ("really", 1.3),
    ("so", 1.2),
    ("super", 1.3),
    ("too", 1.2),
    ("very", 1.3),
];

const NEGATORS: &[&str] = &[
    "arent", "cant", "couldnt", "didnt", "doesnt", "dont", "hardly", "isnt", "never", "no",
    "not", "wasnt", "werent", "wont",
];

/// Polarity scorer backed by a word-valence lexicon.
///
/// # Examples
/// ```
/// use reviewlens_analysis::LexiconPolarityScorer;
/// use reviewlens_core::PolarityScorer;
///
/// let scorer = LexiconPolarityScorer::new();
/// assert!(scorer.polarity("Great food but slow service") > 0.0);
/// assert!(scorer.polarity("Terrible food, dirty place") < 0.0);
/// assert!(scorer.polarity("not good at all") < 0.0);
/// assert_eq!(scorer.polarity("We sat by the window"), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct LexiconPolarityScorer {
    valences: HashMap<String, f64>,
    intensifiers: HashMap<String, f64>,
}

impl LexiconPolarityScorer {
    /// Construct a scorer over the built-in lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self::with_lexicon(
            VALENCES
                .iter()
                .map(|&(word, valence)| (word.to_owned(), valence)),
        )
    }

    /// Construct a scorer over a caller-supplied valence lexicon.
    ///
    /// Words are normalised before insertion; valences are clamped into
    /// `-1.0..=1.0`. The built-in intensifiers and negators still apply.
    #[must_use]
    pub fn with_lexicon<I, W>(lexicon: I) -> Self
    where
        I: IntoIterator<Item = (W, f64)>,
        W: AsRef<str>,
    {
        let valences = lexicon
            .into_iter()
            .map(|(word, valence)| (normalize(word.as_ref()), Self::sanitise(valence)))
            .filter(|(word, _)| !word.is_empty())
            .collect();
        let intensifiers = INTENSIFIERS
            .iter()
            .map(|&(word, factor)| (word.to_owned(), factor))
            .collect();
        Self {
            valences,
            intensifiers,
        }
    }

    /// Return the number of words with a valence.
    #[must_use]
    pub fn lexicon_size(&self) -> usize {
        self.valences.len()
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "valences are scaled by intensifier and negation factors"
    )]
    fn matched_valences(&self, text: &str) -> Vec<f64> {
        let normalised = normalize(text);
        let mut matched = Vec::new();
        let mut intensity = 1.0_f64;
        let mut negation_age: Option<usize> = None;

        for token in tokens(&normalised) {
            if NEGATORS.contains(&token) {
                negation_age = Some(0);
                continue;
            }
            if let Some(factor) = self.intensifiers.get(token) {
                intensity *= factor;
                continue;
            }
            if let Some(valence) = self.valences.get(token) {
                let scaled = (valence * intensity).clamp(-1.0, 1.0);
                let value = if negation_age.is_some() {
                    scaled * NEGATION_FACTOR
                } else {
                    scaled
                };
                matched.push(value);
                negation_age = None;
            } else {
                negation_age = negation_age
                    .map(|age| age.saturating_add(1))
                    .filter(|age| *age < NEGATION_WINDOW);
            }
            intensity = 1.0;
        }
        matched
    }
}

impl Default for LexiconPolarityScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityScorer for LexiconPolarityScorer {
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "polarity is the mean of matched valences"
    )]
    fn polarity(&self, text: &str) -> f64 {
        let matched = self.matched_valences(text);
        if matched.is_empty() {
            return 0.0;
        }
        let total: f64 = matched.iter().sum();
        Self::sanitise(total / matched.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn scorer() -> LexiconPolarityScorer {
        LexiconPolarityScorer::new()
    }

    fn close(left: f64, right: f64) -> bool {
        (left - right).abs() < 1e-9
    }

    #[rstest]
    #[case("Great food but slow service", 0.25)]
    #[case("Terrible food, dirty place", -0.8)]
    #[case("good", 0.7)]
    #[case("very good", 0.91)]
    #[case("extremely excellent", 1.0)]
    #[case("not good", -0.35)]
    #[case("not a good place", -0.35)]
    #[case("don't like it", 0.0)]
    fn scores_known_phrases(
        scorer: LexiconPolarityScorer,
        #[case] text: &str,
        #[case] expected: f64,
    ) {
        let score = scorer.polarity(text);
        assert!(close(score, expected), "{text:?} scored {score}, expected {expected}");
    }

    #[rstest]
    fn negation_lapses_after_window(scorer: LexiconPolarityScorer) {
        assert!(close(scorer.polarity("no wait at all the food was good"), 0.7));
    }

    #[rstest]
    fn intensity_only_reaches_the_next_word(scorer: LexiconPolarityScorer) {
        assert!(close(scorer.polarity("very cheap and good"), 0.7));
    }

    #[rstest]
    fn unknown_text_is_neutral(scorer: LexiconPolarityScorer) {
        assert_eq!(scorer.polarity(""), 0.0);
        assert_eq!(scorer.polarity("the table was by the window"), 0.0);
    }

    #[rstest]
    fn custom_lexicon_is_normalised_and_clamped() {
        let scorer = LexiconPolarityScorer::with_lexicon([("Yummy!", 3.0), ("", 1.0)]);
        assert_eq!(scorer.lexicon_size(), 1);
        assert_eq!(scorer.polarity("so yummy"), 1.0);
    }
}
