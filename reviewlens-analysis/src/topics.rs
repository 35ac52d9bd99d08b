//! Topic trigger counting.

use reviewlens_core::{Topic, TopicCounts};

use crate::normalize;

/// Count topic trigger occurrences across `texts`.
///
/// Each review adds one to a topic for every trigger substring of that topic
/// found in its normalised text. A review mentioning `food` and `tasty`
/// therefore counts twice towards `food`, and one review may count towards
/// several topics. Matching is by substring, so `clean` also matches
/// `unclean`.
///
/// # Examples
/// ```
/// use reviewlens_analysis::extract_topics;
/// use reviewlens_core::Topic;
///
/// let counts = extract_topics(&["Tasty food, friendly staff"]);
/// assert_eq!(counts.get(Topic::Food), 2);
/// assert_eq!(counts.get(Topic::Service), 1);
/// assert_eq!(counts.get(Topic::Price), 0);
/// ```
#[must_use]
pub fn extract_topics<S: AsRef<str>>(texts: &[S]) -> TopicCounts {
    let mut counts = TopicCounts::default();
    for text in texts.iter().map(AsRef::as_ref).filter(|t| !t.is_empty()) {
        let normalised = normalize(text);
        for topic in Topic::ALL {
            for trigger in topic.triggers() {
                if normalised.contains(trigger) {
                    counts.increment(topic);
                }
            }
        }
    }
    counts
}
