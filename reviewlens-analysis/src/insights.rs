//! Natural-language summary of an analysed batch.

use reviewlens_core::{Topic, TopicCounts};

use crate::POLARITY_THRESHOLD;

/// Verdict used when mean polarity exceeds the threshold.
pub const POSITIVE_INSIGHT: &str = "Overall customer sentiment is positive.";
/// Verdict used when mean polarity is below the negative threshold.
pub const NEGATIVE_INSIGHT: &str = "Customer sentiment is negative — major improvements required.";
/// Verdict used otherwise.
pub const NEUTRAL_INSIGHT: &str = "Customer sentiment is neutral.";

/// Return the most-mentioned topic, or `None` when nothing was mentioned.
///
/// Ties resolve to the topic that comes first in lexicon order.
#[must_use]
pub fn dominant_topic(counts: &TopicCounts) -> Option<Topic> {
    counts
        .iter()
        .fold(None, |best: Option<(Topic, usize)>, (topic, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((topic, count)),
        })
        .filter(|(_, count)| *count > 0)
        .map(|(topic, _)| topic)
}

/// Summarise the batch from its topic counts and mean polarity.
///
/// The first sentence states the overall verdict; a second names the
/// dominant topic when any topic was mentioned.
///
/// # Examples
/// ```
/// use reviewlens_analysis::generate_insights;
/// use reviewlens_core::{Topic, TopicCounts};
///
/// let mut counts = TopicCounts::default();
/// counts.increment(Topic::Price);
/// assert_eq!(
///     generate_insights(&counts, 0.5),
///     "Overall customer sentiment is positive. The most discussed topic is 'price'."
/// );
/// assert_eq!(
///     generate_insights(&TopicCounts::default(), 0.0),
///     "Customer sentiment is neutral."
/// );
/// ```
#[must_use]
pub fn generate_insights(counts: &TopicCounts, mean_polarity: f64) -> String {
    let verdict = if mean_polarity > POLARITY_THRESHOLD {
        POSITIVE_INSIGHT
    } else if mean_polarity < -POLARITY_THRESHOLD {
        NEGATIVE_INSIGHT
    } else {
        NEUTRAL_INSIGHT
    };
    match dominant_topic(counts) {
        Some(topic) => format!("{verdict} The most discussed topic is '{topic}'."),
        None => verdict.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn counts(entries: &[(Topic, usize)]) -> TopicCounts {
        let mut counts = TopicCounts::default();
        for &(topic, n) in entries {
            for _ in 0..n {
                counts.increment(topic);
            }
        }
        counts
    }

    #[rstest]
    #[case(0.21, POSITIVE_INSIGHT)]
    #[case(0.2, NEUTRAL_INSIGHT)]
    #[case(-0.2, NEUTRAL_INSIGHT)]
    #[case(-0.21, NEGATIVE_INSIGHT)]
    fn verdict_follows_mean_polarity(#[case] mean: f64, #[case] expected: &str) {
        assert_eq!(generate_insights(&TopicCounts::default(), mean), expected);
    }

    #[rstest]
    fn ties_resolve_in_lexicon_order() {
        let tied = counts(&[(Topic::Ambience, 2), (Topic::Food, 2), (Topic::Price, 1)]);
        assert_eq!(dominant_topic(&tied), Some(Topic::Food));
    }

    #[rstest]
    fn highest_count_wins() {
        let skewed = counts(&[(Topic::Service, 1), (Topic::Cleanliness, 3)]);
        assert_eq!(dominant_topic(&skewed), Some(Topic::Cleanliness));
        assert_eq!(
            generate_insights(&skewed, -0.5),
            "Customer sentiment is negative — major improvements required. \
             The most discussed topic is 'cleanliness'."
        );
    }

    #[rstest]
    fn no_mentions_means_no_topic() {
        assert_eq!(dominant_topic(&TopicCounts::default()), None);
    }
}
