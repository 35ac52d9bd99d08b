//! Records emitted by a pipeline run.
//!
//! Field names are the contract with the persistence and API layers and must
//! not change.

use serde::{Deserialize, Serialize};

use crate::TopicCounts;

/// Dated snapshot of a business's sentiment and topic mix.
///
/// One snapshot exists per `(business_id, week, month)`; callers upsert on
/// that key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendLog {
    /// Identifier of the analysed business.
    pub business_id: String,
    /// ISO week number (`1..=53`) of the analysis date.
    pub week: u32,
    /// Calendar month (`1..=12`) of the analysis date.
    pub month: u32,
    /// Mean review polarity, rounded to three decimals.
    pub sentiment_score: f64,
    /// Topic occurrence counts.
    pub topic_trends: TopicCounts,
}

/// Latest-state analytics summary for a business.
///
/// Each run supersedes the previous summary wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiResult {
    /// Identifier of the analysed business.
    pub business_id: String,
    /// Reviews classified positive.
    pub sentiment_pos: usize,
    /// Reviews classified negative.
    pub sentiment_neg: usize,
    /// Reviews classified neutral.
    pub sentiment_neu: usize,
    /// Topic occurrence counts.
    pub top_topics: TopicCounts,
    /// Most frequent tokens, most frequent first.
    pub keywords: Vec<String>,
    /// Original texts of reviews containing praise words.
    pub top_praises: Vec<String>,
    /// Original texts of reviews containing complaint words.
    pub top_complaints: Vec<String>,
    /// Short natural-language summary.
    pub ai_insights: String,
}

/// Both records produced by one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Dated trend snapshot.
    pub trend_log: TrendLog,
    /// Latest-state summary.
    pub ai_result: AiResult,
}

impl AnalysisReport {
    /// Split the report into its two records.
    #[must_use]
    pub fn into_parts(self) -> (TrendLog, AiResult) {
        (self.trend_log, self.ai_result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Topic;

    #[test]
    fn trend_log_uses_contract_field_names() {
        let mut topics = TopicCounts::default();
        topics.increment(Topic::Food);
        let log = TrendLog {
            business_id: "b-1".to_owned(),
            week: 7,
            month: 2,
            sentiment_score: 0.125,
            topic_trends: topics,
        };
        let value = serde_json::to_value(&log).expect("serialise trend log");
        assert_eq!(value["business_id"], "b-1");
        assert_eq!(value["week"], 7);
        assert_eq!(value["month"], 2);
        assert_eq!(value["sentiment_score"], 0.125);
        assert_eq!(value["topic_trends"]["food"], 1);
    }

    #[test]
    fn ai_result_uses_contract_field_names() {
        let result = AiResult {
            business_id: "b-1".to_owned(),
            sentiment_pos: 1,
            sentiment_neg: 2,
            sentiment_neu: 3,
            top_topics: TopicCounts::default(),
            keywords: vec!["food".to_owned()],
            top_praises: Vec::new(),
            top_complaints: vec!["Slow!".to_owned()],
            ai_insights: "Customer sentiment is neutral.".to_owned(),
        };
        let value = serde_json::to_value(&result).expect("serialise ai result");
        let object = value.as_object().expect("object");
        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            [
                "ai_insights",
                "business_id",
                "keywords",
                "sentiment_neg",
                "sentiment_neu",
                "sentiment_pos",
                "top_complaints",
                "top_praises",
                "top_topics",
            ]
        );
    }
}
