//! Frequency-ranked keyword extraction.
//!
//! Tokens are whitespace-separated words of the normalised text. There is no
//! stemming or stop-word removal, so function words such as `the` rank
//! alongside content words.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::{normalize, tokens};

/// Return up to `limit` tokens ordered by descending frequency across
/// `texts`.
///
/// Tokens with equal counts keep the order in which they were first seen.
/// Empty texts are skipped.
///
/// # Examples
/// ```
/// use reviewlens_analysis::extract_keywords;
///
/// let texts = ["Good food", "food was cold", "good FOOD!"];
/// assert_eq!(extract_keywords(&texts, 2), ["food", "good"]);
/// ```
#[must_use]
pub fn extract_keywords<S: AsRef<str>>(texts: &[S], limit: usize) -> Vec<String> {
    let normalised: Vec<String> = texts
        .iter()
        .map(AsRef::as_ref)
        .filter(|text| !text.is_empty())
        .map(normalize)
        .collect();

    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for token in normalised.iter().flat_map(|text| tokens(text)) {
        match positions.entry(token) {
            Entry::Occupied(entry) => {
                if let Some((_, count)) = counts.get_mut(*entry.get()) {
                    *count = count.saturating_add(1);
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(counts.len());
                counts.push((token, 1));
            }
        }
    }

    // `sort_by` is stable, which preserves first-seen order among ties.
    counts.sort_by(|left, right| right.1.cmp(&left.1));
    counts
        .into_iter()
        .take(limit)
        .map(|(token, _)| token.to_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn ties_keep_first_seen_order() {
        let texts = ["beta alpha", "gamma alpha beta"];
        assert_eq!(extract_keywords(&texts, 10), ["beta", "alpha", "gamma"]);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(3, 3)]
    #[case(50, 4)]
    fn limit_caps_the_result(#[case] limit: usize, #[case] expected_len: usize) {
        let texts = ["one two three four", "two three four", "three four", "four"];
        let keywords = extract_keywords(&texts, limit);
        assert_eq!(keywords.len(), expected_len);
        assert_eq!(keywords.first().map(String::as_str), (limit > 0).then_some("four"));
    }

    #[rstest]
    fn skips_empty_texts_and_punctuation() {
        let texts = vec![String::new(), "!!!".to_owned(), "Wow, wow.".to_owned()];
        assert_eq!(extract_keywords(&texts, 10), ["wow"]);
    }

    #[rstest]
    fn empty_batch_has_no_keywords() {
        let texts: [&str; 0] = [];
        assert!(extract_keywords(&texts, 10).is_empty());
    }
}
