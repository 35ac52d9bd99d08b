//! Orchestration of the analysis stages over one batch.
//!
//! A run is synchronous and self-contained: nothing is cached between runs,
//! and the only shared data are the static lexicons.

use chrono::{Datelike, Local, NaiveDate};
use log::{debug, warn};
use reviewlens_core::{
    AiResult, AnalysisReport, PolarityScorer, ReviewInput, ReviewRecord, SentimentTally,
    TrendLog,
};

use crate::{
    LexiconPolarityScorer, classify_sentiment, extract_complaints, extract_keywords,
    extract_praises, extract_topics, generate_insights, score_text,
};

/// Default number of keywords and of excerpts per kind.
pub const DEFAULT_LIMIT: usize = 10;

/// Output size limits for a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Maximum number of keywords returned.
    pub keyword_limit: usize,
    /// Maximum number of praises and of complaints returned.
    pub excerpt_limit: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            keyword_limit: DEFAULT_LIMIT,
            excerpt_limit: DEFAULT_LIMIT,
        }
    }
}

/// Configurable review analysis pipeline.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use reviewlens_analysis::{AnalysisOptions, ReviewAnalyzer};
/// use reviewlens_core::{RatingValue, ReviewRecord};
///
/// let analyzer = ReviewAnalyzer::new(|_: &str| 0.5).with_options(AnalysisOptions {
///     keyword_limit: 3,
///     excerpt_limit: 1,
/// });
/// let reviews = [ReviewRecord::new("Nice and clean", RatingValue::Integer(3))];
/// let date = NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date");
/// let report = analyzer.analyze_on("b-7", &reviews, date);
/// assert_eq!(report.trend_log.week, 11);
/// assert_eq!(report.trend_log.sentiment_score, 0.5);
/// assert_eq!(report.ai_result.sentiment_pos, 1);
/// assert_eq!(report.ai_result.keywords, ["nice", "and", "clean"]);
/// ```
#[derive(Debug, Clone)]
pub struct ReviewAnalyzer<S> {
    scorer: S,
    options: AnalysisOptions,
}

impl Default for ReviewAnalyzer<LexiconPolarityScorer> {
    fn default() -> Self {
        Self::new(LexiconPolarityScorer::new())
    }
}

impl<S: PolarityScorer> ReviewAnalyzer<S> {
    /// Build an analyzer around `scorer` with default limits.
    #[must_use]
    pub fn new(scorer: S) -> Self {
        Self {
            scorer,
            options: AnalysisOptions::default(),
        }
    }

    /// Replace the output size limits.
    #[must_use]
    pub fn with_options(self, options: AnalysisOptions) -> Self {
        Self { options, ..self }
    }

    /// Return the configured limits.
    #[must_use]
    pub const fn options(&self) -> AnalysisOptions {
        self.options
    }

    /// Analyse `records`, stamping the trend snapshot with today's local date.
    #[must_use]
    pub fn analyze(&self, business_id: &str, records: &[ReviewRecord]) -> AnalysisReport {
        self.analyze_on(business_id, records, Local::now().date_naive())
    }

    /// Analyse `records`, stamping the trend snapshot with `date`.
    #[must_use]
    pub fn analyze_on(
        &self,
        business_id: &str,
        records: &[ReviewRecord],
        date: NaiveDate,
    ) -> AnalysisReport {
        let inputs: Vec<ReviewInput> = records.iter().map(ReviewRecord::to_input).collect();
        self.analyze_inputs_on(business_id, &inputs, date)
    }

    /// Analyse already-extracted inputs, stamping the trend snapshot with
    /// `date`.
    ///
    /// An empty batch yields a zero sentiment score, zero counts, and the
    /// neutral verdict.
    #[must_use]
    pub fn analyze_inputs_on(
        &self,
        business_id: &str,
        inputs: &[ReviewInput],
        date: NaiveDate,
    ) -> AnalysisReport {
        if inputs.is_empty() {
            warn!("analysing empty review batch for business {business_id}; emitting zero result");
        }

        let scores: Vec<f64> = inputs
            .iter()
            .map(|input| score_text(&self.scorer, &input.text))
            .collect();
        let tally: SentimentTally = inputs
            .iter()
            .zip(&scores)
            .map(|(input, score)| classify_sentiment(*score, input.rating))
            .collect();
        let mean_polarity = mean(&scores);

        let texts: Vec<&str> = inputs.iter().map(|input| input.text.as_str()).collect();
        let topic_trends = extract_topics(&texts);
        let keywords = extract_keywords(&texts, self.options.keyword_limit);
        let top_praises = extract_praises(&texts, self.options.excerpt_limit);
        let top_complaints = extract_complaints(&texts, self.options.excerpt_limit);
        let ai_insights = generate_insights(&topic_trends, mean_polarity);

        debug!(
            "analysed {} reviews for business {business_id}: {} positive, {} negative, {} neutral, mean polarity {mean_polarity:.3}",
            tally.total(),
            tally.positive,
            tally.negative,
            tally.neutral,
        );

        AnalysisReport {
            trend_log: TrendLog {
                business_id: business_id.to_owned(),
                week: date.iso_week().week(),
                month: date.month(),
                sentiment_score: round_to_thousandths(mean_polarity),
                topic_trends,
            },
            ai_result: AiResult {
                business_id: business_id.to_owned(),
                sentiment_pos: tally.positive,
                sentiment_neg: tally.negative,
                sentiment_neu: tally.neutral,
                top_topics: topic_trends,
                keywords,
                top_praises,
                top_complaints,
                ai_insights,
            },
        }
    }
}

/// Analyse `records` with the built-in scorer, default limits, and today's
/// date.
///
/// Returns the dated trend snapshot and the latest-state summary.
#[must_use]
pub fn analyze_reviews(business_id: &str, records: &[ReviewRecord]) -> (TrendLog, AiResult) {
    ReviewAnalyzer::default()
        .analyze(business_id, records)
        .into_parts()
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "the trend score is the arithmetic mean of per-review polarity"
)]
fn mean(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().sum::<f64>() / scores.len() as f64
}

/// Round to three decimals, resolving exact ties to the even digit.
#[expect(
    clippy::float_arithmetic,
    reason = "rounding scales by a power of ten"
)]
fn round_to_thousandths(value: f64) -> f64 {
    (value * 1000.0).round_ties_even() / 1000.0
}
