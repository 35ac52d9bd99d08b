//! Topics tracked across a business's reviews.
//!
//! The set is closed and ordered: [`Topic::ALL`] fixes the iteration order
//! used for aggregation, serialisation, and tie-breaking.
//!
//! # Examples
//! ```
//! use reviewlens_core::Topic;
//!
//! assert_eq!(Topic::Cleanliness.as_str(), "cleanliness");
//! assert_eq!(Topic::Food.to_string(), "food");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::lexicon;

/// A review topic backed by a fixed list of trigger substrings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Topic {
    /// Staff behaviour and service quality.
    Service,
    /// Food and dish quality.
    Food,
    /// Pricing and value for money.
    Price,
    /// Hygiene of the premises.
    Cleanliness,
    /// Atmosphere and surroundings.
    Ambience,
}

impl Topic {
    /// Every topic in lexicon order.
    pub const ALL: [Self; 5] = [
        Self::Service,
        Self::Food,
        Self::Price,
        Self::Cleanliness,
        Self::Ambience,
    ];

    /// Return the topic as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use reviewlens_core::Topic;
    ///
    /// assert_eq!(Topic::Price.as_str(), "price");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::Food => "food",
            Self::Price => "price",
            Self::Cleanliness => "cleanliness",
            Self::Ambience => "ambience",
        }
    }

    /// Return the substrings whose presence in normalised text signals this
    /// topic.
    #[must_use]
    pub const fn triggers(self) -> &'static [&'static str] {
        match self {
            Self::Service => lexicon::SERVICE_TRIGGERS,
            Self::Food => lexicon::FOOD_TRIGGERS,
            Self::Price => lexicon::PRICE_TRIGGERS,
            Self::Cleanliness => lexicon::CLEANLINESS_TRIGGERS,
            Self::Ambience => lexicon::AMBIENCE_TRIGGERS,
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a name that is not a known [`Topic`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown topic '{name}'")]
pub struct UnknownTopic {
    /// The rejected input.
    pub name: String,
}

impl std::str::FromStr for Topic {
    type Err = UnknownTopic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|topic| topic.as_str() == wanted)
            .ok_or_else(|| UnknownTopic { name: s.to_owned() })
    }
}

/// Per-topic occurrence counters.
///
/// Every topic is always present; counts start at zero. Serialises to a JSON
/// object keyed by topic name in lexicon order.
///
/// # Examples
/// ```
/// use reviewlens_core::{Topic, TopicCounts};
///
/// let mut counts = TopicCounts::default();
/// counts.increment(Topic::Food);
/// counts.increment(Topic::Food);
/// assert_eq!(counts.get(Topic::Food), 2);
/// assert_eq!(counts.get(Topic::Price), 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicCounts {
    #[serde(default)]
    service: usize,
    #[serde(default)]
    food: usize,
    #[serde(default)]
    price: usize,
    #[serde(default)]
    cleanliness: usize,
    #[serde(default)]
    ambience: usize,
}

impl TopicCounts {
    /// Return the count recorded for `topic`.
    #[must_use]
    pub const fn get(&self, topic: Topic) -> usize {
        match topic {
            Topic::Service => self.service,
            Topic::Food => self.food,
            Topic::Price => self.price,
            Topic::Cleanliness => self.cleanliness,
            Topic::Ambience => self.ambience,
        }
    }

    /// Add one occurrence of `topic`.
    pub const fn increment(&mut self, topic: Topic) {
        let slot = self.slot_mut(topic);
        *slot = slot.saturating_add(1);
    }

    /// Iterate over `(topic, count)` pairs in lexicon order.
    pub fn iter(&self) -> impl Iterator<Item = (Topic, usize)> + '_ {
        Topic::ALL.into_iter().map(|topic| (topic, self.get(topic)))
    }

    /// Sum of all topic counts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.iter()
            .fold(0_usize, |acc, (_, count)| acc.saturating_add(count))
    }

    const fn slot_mut(&mut self, topic: Topic) -> &mut usize {
        match topic {
            Topic::Service => &mut self.service,
            Topic::Food => &mut self.food,
            Topic::Price => &mut self.price,
            Topic::Cleanliness => &mut self.cleanliness,
            Topic::Ambience => &mut self.ambience,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[test]
    fn display_matches_as_str() {
        assert_eq!(Topic::Ambience.to_string(), Topic::Ambience.as_str());
    }

    #[rstest]
    #[case("service", Topic::Service)]
    #[case("FOOD", Topic::Food)]
    #[case(" price ", Topic::Price)]
    fn parsing_accepts_known_names(#[case] raw: &str, #[case] expected: Topic) {
        assert_eq!(Topic::from_str(raw), Ok(expected));
    }

    #[test]
    fn parsing_rejects_unknown() {
        let err = Topic::from_str("parking").expect_err("unknown topic");
        assert_eq!(err.name, "parking");
        assert!(err.to_string().contains("unknown topic"));
    }

    #[test]
    fn counts_serialise_every_topic_in_order() {
        let mut counts = TopicCounts::default();
        counts.increment(Topic::Cleanliness);
        let json = serde_json::to_string(&counts).expect("serialise counts");
        assert_eq!(
            json,
            r#"{"service":0,"food":0,"price":0,"cleanliness":1,"ambience":0}"#
        );
    }

    #[test]
    fn counts_total_sums_topics() {
        let mut counts = TopicCounts::default();
        counts.increment(Topic::Service);
        counts.increment(Topic::Ambience);
        counts.increment(Topic::Ambience);
        assert_eq!(counts.total(), 3);
        assert_eq!(
            counts.iter().map(|(topic, _)| topic).collect::<Vec<_>>(),
            Topic::ALL.to_vec()
        );
    }
}
