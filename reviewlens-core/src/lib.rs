//! Core domain types for the ReviewLens analytics engine.
//!
//! The crate defines the records that cross the pipeline boundary (review
//! records in, trend snapshots and AI summaries out), the fixed topic and
//! sentiment lexicons, and the [`PolarityScorer`] seam through which text
//! polarity is estimated. It performs no analysis itself; see
//! `reviewlens-analysis` for the pipeline.
//!
//! # Examples
//!
//! ```
//! use reviewlens_core::{RatingValue, ReviewRecord, Topic};
//!
//! let record = ReviewRecord::new("Lovely ambience", RatingValue::from("5 stars"));
//! let input = record.to_input();
//! assert_eq!(input.rating, 5);
//! assert!(Topic::Ambience.triggers().contains(&"ambience"));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod lexicon;
mod output;
mod polarity;
mod review;
mod sentiment;
mod topic;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(all(docsrs, not(test)), doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use output::{AiResult, AnalysisReport, TrendLog};
pub use polarity::PolarityScorer;
pub use review::{RatingValue, ReviewInput, ReviewRecord};
pub use sentiment::{Sentiment, SentimentTally};
pub use topic::{Topic, TopicCounts, UnknownTopic};
