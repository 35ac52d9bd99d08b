//! Review analytics pipeline for ReviewLens.
//!
//! The crate turns a batch of [`ReviewRecord`]s into a dated [`TrendLog`] and
//! a latest-state [`AiResult`]. The work is split into small, independent
//! stages that can be used on their own:
//! - **Normalisation** lowercases text and strips everything except ASCII
//!   letters, digits, and whitespace ([`normalize`]).
//! - **Sentiment** scores each text through a
//!   [`PolarityScorer`](reviewlens_core::PolarityScorer) and classifies each
//!   review, letting the star rating dominate and using polarity only for
//!   three-star reviews ([`classify_sentiment`]). [`LexiconPolarityScorer`]
//!   is the built-in scorer.
//! - **Aggregation** ranks keywords ([`extract_keywords`]), counts topic
//!   triggers ([`extract_topics`]), and selects praise and complaint excerpts
//!   ([`extract_praises`], [`extract_complaints`]).
//! - **Insights** summarise the batch in a sentence or two
//!   ([`generate_insights`]).
//!
//! [`analyze_reviews`] wires the stages together with default settings;
//! [`ReviewAnalyzer`] exposes the scorer, limits, and analysis date.
//!
//! # Examples
//!
//! ```
//! use reviewlens_analysis::analyze_reviews;
//! use reviewlens_core::{RatingValue, ReviewRecord};
//!
//! let reviews = vec![
//!     ReviewRecord::new("Great food but slow service", RatingValue::from("5 stars")),
//!     ReviewRecord::new("Terrible food, dirty place", RatingValue::from("1 stars")),
//! ];
//! let (trend, summary) = analyze_reviews("42", &reviews);
//! assert_eq!(summary.sentiment_pos, 1);
//! assert_eq!(summary.sentiment_neg, 1);
//! assert_eq!(trend.topic_trends, summary.top_topics);
//! ```

#![forbid(unsafe_code)]

mod batch;
mod error;
mod excerpts;
mod insights;
mod keywords;
mod normalize;
mod pipeline;
mod polarity;
mod sentiment;
mod topics;

pub use batch::{parse_review_batch, read_review_batch};
pub use error::ReviewBatchError;
pub use excerpts::{extract_complaints, extract_praises, select_excerpts};
pub use insights::{
    NEGATIVE_INSIGHT, NEUTRAL_INSIGHT, POSITIVE_INSIGHT, dominant_topic, generate_insights,
};
pub use keywords::extract_keywords;
pub use normalize::{normalize, tokens};
pub use pipeline::{AnalysisOptions, DEFAULT_LIMIT, ReviewAnalyzer, analyze_reviews};
pub use polarity::LexiconPolarityScorer;
pub use sentiment::{POLARITY_THRESHOLD, classify_sentiment, score_text};
pub use topics::extract_topics;

pub use reviewlens_core::{AiResult, AnalysisReport, ReviewRecord, TrendLog};
