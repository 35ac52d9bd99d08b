//! Representative praise and complaint excerpts.
//!
//! Selection tests the normalised text but returns the original, so casing
//! and punctuation survive into the output.

use reviewlens_core::lexicon::{NEGATIVE_WORDS, POSITIVE_WORDS};

use crate::normalize;

/// Return, in input order, up to `limit` texts whose normalised form contains
/// any of `words` as a substring.
#[must_use]
pub fn select_excerpts<S: AsRef<str>>(texts: &[S], words: &[&str], limit: usize) -> Vec<String> {
    texts
        .iter()
        .map(AsRef::as_ref)
        .filter(|text| !text.is_empty())
        .filter(|text| {
            let normalised = normalize(text);
            words.iter().any(|word| normalised.contains(word))
        })
        .take(limit)
        .map(str::to_owned)
        .collect()
}

/// Return up to `limit` texts containing a praise word.
///
/// # Examples
/// ```
/// use reviewlens_analysis::extract_praises;
///
/// let texts = ["GREAT burgers!", "Cold fries", "Nice staff"];
/// assert_eq!(extract_praises(&texts, 10), ["GREAT burgers!", "Nice staff"]);
/// ```
#[must_use]
pub fn extract_praises<S: AsRef<str>>(texts: &[S], limit: usize) -> Vec<String> {
    select_excerpts(texts, POSITIVE_WORDS, limit)
}

/// Return up to `limit` texts containing a complaint word.
///
/// # Examples
/// ```
/// use reviewlens_analysis::extract_complaints;
///
/// let texts = ["Slow service.", "Lovely view", "Way too EXPENSIVE"];
/// assert_eq!(extract_complaints(&texts, 1), ["Slow service."]);
/// ```
#[must_use]
pub fn extract_complaints<S: AsRef<str>>(texts: &[S], limit: usize) -> Vec<String> {
    select_excerpts(texts, NEGATIVE_WORDS, limit)
}
