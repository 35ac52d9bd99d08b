//! Sentiment classes and their running tally.

/// Overall sentiment assigned to a single review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    /// Favourable review.
    Positive,
    /// Unfavourable review.
    Negative,
    /// Neither clearly favourable nor unfavourable.
    Neutral,
}

impl Sentiment {
    /// Return the sentiment as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counts of reviews per [`Sentiment`].
///
/// # Examples
/// ```
/// use reviewlens_core::{Sentiment, SentimentTally};
///
/// let mut tally = SentimentTally::default();
/// tally.record(Sentiment::Positive);
/// tally.record(Sentiment::Neutral);
/// assert_eq!(tally.positive, 1);
/// assert_eq!(tally.total(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentimentTally {
    /// Reviews classified positive.
    pub positive: usize,
    /// Reviews classified negative.
    pub negative: usize,
    /// Reviews classified neutral.
    pub neutral: usize,
}

impl SentimentTally {
    /// Count one more review of the given class.
    pub const fn record(&mut self, sentiment: Sentiment) {
        let slot = match sentiment {
            Sentiment::Positive => &mut self.positive,
            Sentiment::Negative => &mut self.negative,
            Sentiment::Neutral => &mut self.neutral,
        };
        *slot = slot.saturating_add(1);
    }

    /// Number of reviews recorded.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.positive
            .saturating_add(self.negative)
            .saturating_add(self.neutral)
    }
}

impl FromIterator<Sentiment> for SentimentTally {
    fn from_iter<I: IntoIterator<Item = Sentiment>>(iter: I) -> Self {
        let mut tally = Self::default();
        for sentiment in iter {
            tally.record(sentiment);
        }
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_collects_from_iterator() {
        let tally: SentimentTally = [
            Sentiment::Negative,
            Sentiment::Negative,
            Sentiment::Positive,
        ]
        .into_iter()
        .collect();
        assert_eq!(tally.negative, 2);
        assert_eq!(tally.positive, 1);
        assert_eq!(tally.neutral, 0);
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn display_is_lowercase() {
        assert_eq!(Sentiment::Neutral.to_string(), "neutral");
    }
}
