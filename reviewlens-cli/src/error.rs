//! Error types emitted by the reviewlens CLI.
//!
//! Keep this error type small: most CLI helpers return `Result<_, CliError>`
//! and the workspace denies `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use reviewlens_analysis::ReviewBatchError;
use thiserror::Error;

/// Errors emitted by the reviewlens CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name without the leading dashes.
        field: &'static str,
        /// Environment variable that may supply the value instead.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Argument that named the path.
        field: &'static str,
        /// Path as supplied.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Argument that named the path.
        field: &'static str,
        /// Path as supplied.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Argument that named the path.
        field: &'static str,
        /// Path as supplied.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The output directory exists but is a file.
    #[error("output directory {path:?} is not a directory")]
    OutputDirectoryNotDirectory {
        /// Path as supplied.
        path: Utf8PathBuf,
    },
    /// Opening the review batch failed.
    #[error("failed to open review batch at {path:?}: {source}")]
    OpenReviews {
        /// Path to the review batch.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The review batch could not be decoded.
    #[error("failed to decode review batch at {path:?}: {source}")]
    DecodeReviews {
        /// Path to the review batch.
        path: Utf8PathBuf,
        /// Decoding failure.
        #[source]
        source: ReviewBatchError,
    },
    /// Serialising an analysis artefact failed.
    #[error("failed to serialise analysis output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing an artefact file failed.
    #[error("failed to write {path:?}: {source}")]
    WriteArtefact {
        /// Destination file.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Writing the report to the output stream failed.
    #[error("failed to write analysis output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
