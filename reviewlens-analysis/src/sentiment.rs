//! Per-review polarity scoring and sentiment classification.

use reviewlens_core::{PolarityScorer, Sentiment};

/// Polarity magnitude a score must exceed to count as non-neutral.
///
/// The bound is exclusive: a score of exactly `0.2` is neutral.
pub const POLARITY_THRESHOLD: f64 = 0.2;

/// Score `text` with `scorer`, clamping the result into `-1.0..=1.0`.
///
/// Empty text scores exactly `0.0` without consulting the scorer.
#[must_use]
pub fn score_text<S: PolarityScorer>(scorer: &S, text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }
    S::sanitise(scorer.polarity(text))
}

/// Classify a review from its polarity and star rating.
///
/// Ratings of four or more are positive and ratings of two or fewer negative,
/// whatever the text says. Only three-star reviews fall back to polarity.
///
/// # Examples
/// ```
/// use reviewlens_analysis::classify_sentiment;
/// use reviewlens_core::Sentiment;
///
/// assert_eq!(classify_sentiment(-0.9, 5), Sentiment::Positive);
/// assert_eq!(classify_sentiment(0.9, 0), Sentiment::Negative);
/// assert_eq!(classify_sentiment(0.2, 3), Sentiment::Neutral);
/// assert_eq!(classify_sentiment(0.21, 3), Sentiment::Positive);
/// ```
#[must_use]
pub const fn classify_sentiment(score: f64, rating: i64) -> Sentiment {
    if rating >= 4 {
        return Sentiment::Positive;
    }
    if rating <= 2 {
        return Sentiment::Negative;
    }
    if score > POLARITY_THRESHOLD {
        Sentiment::Positive
    } else if score < -POLARITY_THRESHOLD {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}
