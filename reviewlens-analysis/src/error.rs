//! Error types raised while decoding review batches.

use thiserror::Error;

/// Errors raised while reading a batch of review records.
///
/// Malformed individual ratings never surface here; they decode to a zero
/// rating. Only a payload that is not a JSON array of objects fails.
#[derive(Debug, Error)]
pub enum ReviewBatchError {
    /// The payload was not a JSON array of review records.
    #[error("failed to decode review batch")]
    Decode {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}
