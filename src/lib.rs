//! Facade crate for the reviewlens review-analytics pipeline.
//!
//! This crate re-exports the domain types from `reviewlens-core` and the
//! pipeline stages from `reviewlens-analysis`, so applications can depend on a
//! single crate.
//!
//! ```
//! use reviewlens::{RatingValue, ReviewRecord, analyze_reviews};
//!
//! let reviews = [ReviewRecord::new("Lovely staff", RatingValue::from("5 stars"))];
//! let (trend, summary) = analyze_reviews("b-1", &reviews);
//! assert_eq!(trend.business_id, "b-1");
//! assert_eq!(summary.sentiment_pos, 1);
//! ```

#![forbid(unsafe_code)]

pub use reviewlens_core::{
    AiResult, AnalysisReport, PolarityScorer, RatingValue, ReviewInput, ReviewRecord, Sentiment,
    SentimentTally, Topic, TopicCounts, TrendLog, UnknownTopic, lexicon,
};

pub use reviewlens_analysis::{
    AnalysisOptions, LexiconPolarityScorer, ReviewAnalyzer, ReviewBatchError, analyze_reviews,
    classify_sentiment, extract_complaints, extract_keywords, extract_praises, extract_topics,
    generate_insights, normalize, parse_review_batch, read_review_batch, score_text,
};

#[cfg(feature = "test-support")]
pub use reviewlens_core::test_support;
