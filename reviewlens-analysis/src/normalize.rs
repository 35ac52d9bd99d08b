//! Text normalisation and tokenisation shared by every matching stage.

/// Information separators (U+001C to U+001F) count as whitespace here even
/// though Unicode's `White_Space` property excludes them.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Lowercase `text` and drop every character other than ASCII letters,
/// digits, and whitespace.
///
/// Lowercasing happens first, so characters whose lowercase form is ASCII
/// survive. The information separators U+001C to U+001F are kept as
/// whitespace. Empty input yields an empty string.
///
/// # Examples
/// ```
/// use reviewlens_analysis::normalize;
///
/// assert_eq!(normalize("Terrible food, DIRTY place!"), "terrible food dirty place");
/// assert_eq!(normalize("Café #1"), "caf 1");
/// assert_eq!(normalize(""), "");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || is_separator(*c))
        .collect()
}

/// Split text into its non-empty whitespace-separated tokens.
///
/// # Examples
/// ```
/// use reviewlens_analysis::tokens;
///
/// let words: Vec<&str> = tokens("good\u{1f}food  here").collect();
/// assert_eq!(words, ["good", "food", "here"]);
/// ```
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_separator).filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Great food but slow service", "great food but slow service")]
    #[case("Don't go!!! 0/10", "dont go 010")]
    #[case("tabs\tand\nnewlines", "tabs\tand\nnewlines")]
    #[case("unit\u{1f}record\u{1c}sep", "unit\u{1f}record\u{1c}sep")]
    #[case("😀 emoji only", " emoji only")]
    #[case("", "")]
    fn strips_and_lowercases(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize(raw), expected);
    }

    #[rstest]
    #[case("  spaced   out ", &["spaced", "out"])]
    #[case("a\u{1c}b\u{1d}c\u{1e}d\u{1f}e", &["a", "b", "c", "d", "e"])]
    #[case("", &[])]
    fn tokens_split_on_every_separator(#[case] text: &str, #[case] expected: &[&str]) {
        assert_eq!(tokens(text).collect::<Vec<_>>(), expected);
    }
}
