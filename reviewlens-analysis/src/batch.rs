//! Decoding review batches supplied by scrapers and stores.

use std::io::Read;

use reviewlens_core::ReviewRecord;

use crate::ReviewBatchError;

/// Decode a JSON array of review records from `reader`.
///
/// # Errors
/// Returns [`ReviewBatchError::Decode`] when the payload is not a JSON array
/// of objects.
pub fn read_review_batch<R: Read>(reader: R) -> Result<Vec<ReviewRecord>, ReviewBatchError> {
    serde_json::from_reader(reader).map_err(|source| ReviewBatchError::Decode { source })
}

/// Decode a JSON array of review records from a string.
///
/// # Errors
/// Returns [`ReviewBatchError::Decode`] when the payload is not a JSON array
/// of objects.
///
/// # Examples
/// ```
/// use reviewlens_analysis::parse_review_batch;
///
/// let batch = parse_review_batch(r#"[{"text": "Nice", "rating": "4 stars"}]"#)?;
/// assert_eq!(batch.len(), 1);
/// # Ok::<(), reviewlens_analysis::ReviewBatchError>(())
/// ```
pub fn parse_review_batch(json: &str) -> Result<Vec<ReviewRecord>, ReviewBatchError> {
    serde_json::from_str(json).map_err(|source| ReviewBatchError::Decode { source })
}
