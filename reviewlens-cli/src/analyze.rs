//! Analyze command implementation for the reviewlens CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::{info, warn};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use reviewlens_analysis::{
    AnalysisOptions, DEFAULT_LIMIT, LexiconPolarityScorer, ReviewAnalyzer, read_review_batch,
};
use reviewlens_core::{AnalysisReport, PolarityScorer, ReviewRecord};
use reviewlens_fs::{
    file_is_file, open_utf8_file, remove_utf8_file, rename_utf8_file, write_utf8_file,
};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Write};

use crate::{
    AI_RESULT_FILE, ARG_BUSINESS_ID, ARG_EXCERPT_LIMIT, ARG_KEYWORD_LIMIT, ARG_OUTPUT_DIR,
    ARG_REVIEWS, CliError, ENV_BUSINESS_ID, ENV_REVIEWS, TREND_LOG_FILE,
};

/// CLI arguments for the `analyze` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Analyse a JSON array of review records for one business. \
                 The run scores sentiment, counts topic mentions, extracts \
                 keywords and representative excerpts, and emits a dated \
                 trend snapshot together with a latest-state summary.",
    about = "Analyse a batch of reviews"
)]
#[ortho_config(prefix = "REVIEWLENS")]
pub(crate) struct AnalyzeArgs {
    /// Path to a JSON file containing an array of review records.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) reviews_path: Option<Utf8PathBuf>,
    /// Identifier of the business the reviews belong to.
    #[arg(long = ARG_BUSINESS_ID, value_name = "id")]
    #[serde(default)]
    pub(crate) business_id: Option<String>,
    /// Maximum number of keywords reported (default 10).
    #[arg(long = ARG_KEYWORD_LIMIT, value_name = "n")]
    #[serde(default)]
    pub(crate) keyword_limit: Option<usize>,
    /// Maximum number of praises and of complaints reported (default 10).
    #[arg(long = ARG_EXCERPT_LIMIT, value_name = "n")]
    #[serde(default)]
    pub(crate) excerpt_limit: Option<usize>,
    /// Directory receiving `trend_log.json` and `ai_result.json`. The combined
    /// report is printed to stdout when omitted.
    #[arg(long = ARG_OUTPUT_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) output_dir: Option<Utf8PathBuf>,
}

impl AnalyzeArgs {
    pub(crate) fn into_config(self) -> Result<AnalyzeConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        AnalyzeConfig::try_from(merged)
    }
}

/// Resolved `analyze` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AnalyzeConfig {
    /// Path to the JSON review batch.
    pub(crate) reviews_path: Utf8PathBuf,
    /// Business the batch is attributed to.
    pub(crate) business_id: String,
    /// Output size limits.
    pub(crate) options: AnalysisOptions,
    /// Artefact directory, if any.
    pub(crate) output_dir: Option<Utf8PathBuf>,
}

impl AnalyzeConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.reviews_path, ARG_REVIEWS)?;
        if let Some(dir) = &self.output_dir {
            Self::require_directory_or_absent(dir)?;
        }
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn require_directory_or_absent(dir: &Utf8Path) -> Result<(), CliError> {
        match file_is_file(dir) {
            Ok(false) => Ok(()),
            Ok(true) => Err(CliError::OutputDirectoryNotDirectory {
                path: dir.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(CliError::InspectSourcePath {
                field: ARG_OUTPUT_DIR,
                path: dir.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<AnalyzeArgs> for AnalyzeConfig {
    type Error = CliError;

    fn try_from(args: AnalyzeArgs) -> Result<Self, Self::Error> {
        let reviews_path = args.reviews_path.ok_or(CliError::MissingArgument {
            field: ARG_REVIEWS,
            env: ENV_REVIEWS,
        })?;
        let business_id = args
            .business_id
            .filter(|id| !id.trim().is_empty())
            .ok_or(CliError::MissingArgument {
                field: ARG_BUSINESS_ID,
                env: ENV_BUSINESS_ID,
            })?;
        let options = AnalysisOptions {
            keyword_limit: args.keyword_limit.unwrap_or(DEFAULT_LIMIT),
            excerpt_limit: args.excerpt_limit.unwrap_or(DEFAULT_LIMIT),
        };

        Ok(Self {
            reviews_path,
            business_id,
            options,
            output_dir: args.output_dir,
        })
    }
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_analyze_with(args, LexiconPolarityScorer::new(), &mut stdout)
}

pub(crate) fn run_analyze_with<S: PolarityScorer>(
    args: AnalyzeArgs,
    scorer: S,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_analyze_config(args)?;
    let report = execute_analyze(&config, scorer)?;
    match &config.output_dir {
        Some(dir) => write_artefacts(dir, &report),
        None => write_report(writer, &report),
    }
}

pub(crate) fn resolve_analyze_config(args: AnalyzeArgs) -> Result<AnalyzeConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn execute_analyze<S: PolarityScorer>(
    config: &AnalyzeConfig,
    scorer: S,
) -> Result<AnalysisReport, CliError> {
    let records = load_review_batch(&config.reviews_path)?;
    info!(
        "loaded {} reviews for business {} from {}",
        records.len(),
        config.business_id,
        config.reviews_path
    );
    let analyzer = ReviewAnalyzer::new(scorer).with_options(config.options);
    Ok(analyzer.analyze(&config.business_id, &records))
}

/// Loads a JSON array of [`ReviewRecord`]s from disk.
pub(crate) fn load_review_batch(path: &Utf8Path) -> Result<Vec<ReviewRecord>, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenReviews {
        path: path.to_path_buf(),
        source,
    })?;
    read_review_batch(BufReader::new(file)).map_err(|source| CliError::DecodeReviews {
        path: path.to_path_buf(),
        source,
    })
}

/// Write both artefacts, leaving the previous pair in place if either
/// cannot be staged.
///
/// Each payload is first written beside its target with a `.tmp` suffix and
/// only renamed over the target once both are staged.
fn write_artefacts(dir: &Utf8Path, report: &AnalysisReport) -> Result<(), CliError> {
    let artefacts = [
        (dir.join(TREND_LOG_FILE), json_payload(&report.trend_log)?),
        (dir.join(AI_RESULT_FILE), json_payload(&report.ai_result)?),
    ];

    let mut staged: Vec<(Utf8PathBuf, &Utf8Path)> = Vec::with_capacity(artefacts.len());
    for (target, payload) in &artefacts {
        let staging = staging_path(target);
        if let Err(source) = write_utf8_file(&staging, payload) {
            discard_staged(&staged);
            return Err(CliError::WriteArtefact {
                path: staging,
                source,
            });
        }
        staged.push((staging, target.as_path()));
    }

    for (staging, target) in &staged {
        rename_utf8_file(staging, target).map_err(|source| CliError::WriteArtefact {
            path: target.to_path_buf(),
            source,
        })?;
        info!("wrote {target}");
    }
    Ok(())
}

fn json_payload<T: Serialize>(value: &T) -> Result<Vec<u8>, CliError> {
    let mut payload = serde_json::to_vec_pretty(value).map_err(CliError::SerialiseOutput)?;
    payload.push(b'\n');
    Ok(payload)
}

fn staging_path(target: &Utf8Path) -> Utf8PathBuf {
    let mut staging = target.to_path_buf().into_string();
    staging.push_str(".tmp");
    Utf8PathBuf::from(staging)
}

fn discard_staged(staged: &[(Utf8PathBuf, &Utf8Path)]) {
    for (staging, _) in staged {
        if let Err(err) = remove_utf8_file(staging) {
            warn!("failed to remove staged artefact {staging}: {err}");
        }
    }
}

fn write_report(writer: &mut dyn Write, report: &AnalysisReport) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<AnalyzeConfig, CliError> {
    let merged = AnalyzeArgs::merge_from_layers(layers).map_err(CliError::from)?;
    AnalyzeConfig::try_from(merged)
}
