//! Review records as they arrive at the pipeline boundary.
//!
//! Scrapers and stores disagree on how ratings look: some emit integers, some
//! floats, and the scraper emits strings such as `"4 stars"`. [`RatingValue`]
//! accepts all of them and [`RatingValue::stars`] reduces each to an integer,
//! substituting `0` whenever the value cannot be read.

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

/// A star rating in any of the shapes accepted at the input boundary.
///
/// # Examples
/// ```
/// use reviewlens_core::RatingValue;
///
/// assert_eq!(RatingValue::from("4 stars").stars(), 4);
/// assert_eq!(RatingValue::from("4.5 stars").stars(), 4);
/// assert_eq!(RatingValue::Float(2.6).stars(), 3);
/// assert_eq!(RatingValue::Float(2.5).stars(), 2);
/// assert_eq!(RatingValue::from("unrated").stars(), 0);
/// assert_eq!(RatingValue::Missing.stars(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged, from = "RawRating")]
pub enum RatingValue {
    /// An integral rating.
    Integer(i64),
    /// A fractional rating, rounded half to even when read.
    Float(f64),
    /// A textual rating whose first token is expected to be an integer.
    Text(String),
    /// No usable rating was supplied.
    #[default]
    Missing,
}

impl RatingValue {
    /// Reduce the rating to an integer star count.
    ///
    /// Text is read from its first run of ASCII digits, so `"4.5 stars"` and
    /// `"4/5"` both read as `4`. Text without digits yields `0`; a digit run
    /// too long for `i64` saturates.
    #[must_use]
    pub fn stars(&self) -> i64 {
        match self {
            Self::Integer(value) => *value,
            Self::Float(value) => round_stars(*value),
            Self::Text(text) => first_digit_run(text),
            Self::Missing => 0,
        }
    }
}

fn first_digit_run(text: &str) -> i64 {
    let digits: String = text
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();
    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(i64::MAX)
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "float-to-int casts saturate and ratings are small"
)]
fn round_stars(value: f64) -> i64 {
    if value.is_finite() {
        value.round_ties_even() as i64
    } else {
        0
    }
}

impl From<i64> for RatingValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for RatingValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for RatingValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for RatingValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Wire shape accepted for ratings; unrecognised JSON collapses to `Missing`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawRating {
    Integer(i64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

impl From<RawRating> for RatingValue {
    fn from(raw: RawRating) -> Self {
        match raw {
            RawRating::Integer(value) => Self::Integer(value),
            RawRating::Float(value) => Self::Float(value),
            RawRating::Text(text) => Self::Text(text),
            RawRating::Other(_) => Self::Missing,
        }
    }
}

/// A review as produced by the scraper or read back from storage.
///
/// Only `text` and `rating` feed the analysis; the remaining metadata is
/// carried so that stored and scraped payloads decode without loss of
/// validity.
///
/// # Examples
/// ```
/// use reviewlens_core::{RatingValue, ReviewRecord};
///
/// let record = ReviewRecord::new("Friendly staff", RatingValue::Integer(5));
/// assert_eq!(record.text.as_deref(), Some("Friendly staff"));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// Free-text body; absent for rating-only reviews.
    #[serde(default)]
    pub text: Option<String>,
    /// Rating in whatever form the source supplied.
    #[serde(default)]
    pub rating: RatingValue,
    /// Display name of the reviewer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewer_name: Option<String>,
    /// Platform the review was collected from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    /// Publication date as reported by the source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_date: Option<String>,
}

impl ReviewRecord {
    /// Build a record carrying review text.
    #[must_use]
    pub fn new(text: impl Into<String>, rating: RatingValue) -> Self {
        Self {
            text: Some(text.into()),
            rating,
            ..Self::default()
        }
    }

    /// Build a record with a rating but no text.
    #[must_use]
    pub fn rating_only(rating: RatingValue) -> Self {
        Self {
            rating,
            ..Self::default()
        }
    }

    /// Extract the pipeline input: text defaulting to empty, rating reduced
    /// to stars.
    #[must_use]
    pub fn to_input(&self) -> ReviewInput {
        ReviewInput {
            text: self.text.clone().unwrap_or_default(),
            rating: self.rating.stars(),
        }
    }
}

/// Per-review data consumed by the analysis pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReviewInput {
    /// Review text; empty when the source had none.
    pub text: String,
    /// Star rating; `0` when the source rating was unreadable.
    pub rating: i64,
}

impl ReviewInput {
    /// Build an input from text and an already-parsed rating.
    #[must_use]
    pub fn new(text: impl Into<String>, rating: i64) -> Self {
        Self {
            text: text.into(),
            rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(RatingValue::Integer(4), 4)]
    #[case(RatingValue::Float(4.4), 4)]
    #[case(RatingValue::Float(2.5), 2)]
    #[case(RatingValue::Float(3.5), 4)]
    #[case(RatingValue::Float(2.6), 3)]
    #[case(RatingValue::Float(f64::NAN), 0)]
    #[case(RatingValue::from("5 stars"), 5)]
    #[case(RatingValue::from("  3 stars "), 3)]
    #[case(RatingValue::from("1"), 1)]
    #[case(RatingValue::from("five stars"), 0)]
    #[case(RatingValue::from("4.5 stars"), 4)]
    #[case(RatingValue::from("4/5"), 4)]
    #[case(RatingValue::from("5stars"), 5)]
    #[case(RatingValue::from("rated 3 of 5"), 3)]
    #[case(RatingValue::from("99999999999999999999 stars"), i64::MAX)]
    #[case(RatingValue::from(""), 0)]
    #[case(RatingValue::Missing, 0)]
    fn stars_reads_every_rating_shape(#[case] rating: RatingValue, #[case] expected: i64) {
        assert_eq!(rating.stars(), expected);
    }

    #[rstest]
    #[case(r#"{"text":"ok","rating":"4 stars"}"#, 4)]
    #[case(r#"{"text":"ok","rating":2}"#, 2)]
    #[case(r#"{"text":"ok","rating":3.6}"#, 4)]
    #[case(r#"{"text":"ok","rating":null}"#, 0)]
    #[case(r#"{"text":"ok","rating":{"value":5}}"#, 0)]
    #[case(r#"{"text":"ok"}"#, 0)]
    fn records_decode_every_rating_shape(#[case] json: &str, #[case] expected: i64) {
        let record: ReviewRecord = serde_json::from_str(json).expect("decode record");
        assert_eq!(record.to_input().rating, expected);
    }

    #[test]
    fn records_ignore_metadata_and_unknown_fields() {
        let json = r#"{
            "text": null,
            "rating": "5 stars",
            "reviewer_name": "Asha",
            "platform": "google",
            "review_date": "2024-01-01",
            "likes": 3
        }"#;
        let record: ReviewRecord = serde_json::from_str(json).expect("decode record");
        assert_eq!(record.platform.as_deref(), Some("google"));
        assert_eq!(record.to_input(), ReviewInput::new("", 5));
    }

    #[test]
    fn rating_only_records_have_empty_text() {
        let input = ReviewRecord::rating_only(RatingValue::Integer(1)).to_input();
        assert!(input.text.is_empty());
        assert_eq!(input.rating, 1);
    }
}
