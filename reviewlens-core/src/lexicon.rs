//! Static lexicons shared by every pipeline run.
//!
//! The tables are process-wide constants. Matching is performed against
//! normalised text (lowercase ASCII letters, digits, and whitespace), so every
//! entry is lowercase and free of punctuation.

/// Trigger substrings for the `service` topic.
pub const SERVICE_TRIGGERS: &[&str] = &["service", "staff", "waiter", "attitude", "behaviour"];

/// Trigger substrings for the `food` topic.
pub const FOOD_TRIGGERS: &[&str] = &["food", "taste", "quality", "dish", "tasty"];

/// Trigger substrings for the `price` topic.
pub const PRICE_TRIGGERS: &[&str] = &["price", "expensive", "cheap", "worth"];

/// Trigger substrings for the `cleanliness` topic.
pub const CLEANLINESS_TRIGGERS: &[&str] = &["clean", "dirty", "hygiene"];

/// Trigger substrings for the `ambience` topic.
pub const AMBIENCE_TRIGGERS: &[&str] = &["ambience", "atmosphere", "environment", "place"];

/// Words whose presence marks a review as praise.
pub const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "amazing",
    "awesome",
    "nice",
    "love",
    "excellent",
];

/// Words whose presence marks a review as a complaint.
pub const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "poor",
    "terrible",
    "worst",
    "dirty",
    "slow",
    "expensive",
];

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn is_normalised(word: &str) -> bool {
        word.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    }

    #[rstest]
    #[case(SERVICE_TRIGGERS)]
    #[case(FOOD_TRIGGERS)]
    #[case(PRICE_TRIGGERS)]
    #[case(CLEANLINESS_TRIGGERS)]
    #[case(AMBIENCE_TRIGGERS)]
    #[case(POSITIVE_WORDS)]
    #[case(NEGATIVE_WORDS)]
    fn entries_match_normalised_text(#[case] table: &[&str]) {
        assert!(!table.is_empty());
        assert!(table.iter().all(|word| is_normalised(word)));
    }

    #[rstest]
    fn sentiment_sets_are_disjoint() {
        assert!(
            POSITIVE_WORDS
                .iter()
                .all(|word| !NEGATIVE_WORDS.contains(word))
        );
    }
}
