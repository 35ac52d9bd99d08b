//! Command-line interface for batch review analysis.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod analyze;
mod error;

pub use error::CliError;

pub(crate) use analyze::{AnalyzeArgs, run_analyze};

pub(crate) const ARG_REVIEWS: &str = "reviews";
pub(crate) const ARG_BUSINESS_ID: &str = "business-id";
pub(crate) const ARG_KEYWORD_LIMIT: &str = "keyword-limit";
pub(crate) const ARG_EXCERPT_LIMIT: &str = "excerpt-limit";
pub(crate) const ARG_OUTPUT_DIR: &str = "output-dir";
pub(crate) const ENV_REVIEWS: &str = "REVIEWLENS_CMDS_ANALYZE_REVIEWS_PATH";
pub(crate) const ENV_BUSINESS_ID: &str = "REVIEWLENS_CMDS_ANALYZE_BUSINESS_ID";

/// File name of the dated trend snapshot inside `--output-dir`.
pub const TREND_LOG_FILE: &str = "trend_log.json";
/// File name of the latest-state summary inside `--output-dir`.
pub const AI_RESULT_FILE: &str = "ai_result.json";

/// Run the reviewlens CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, when the
/// review batch cannot be loaded, or when the analysis output cannot be
/// written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Analyze(args) => run_analyze(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "reviewlens",
    about = "Sentiment, topic, and keyword analytics over customer review batches",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyse a JSON batch of reviews for one business.
    Analyze(AnalyzeArgs),
}

#[cfg(test)]
mod tests;
