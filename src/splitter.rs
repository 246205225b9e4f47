//! Word tokenization for the pacing engine.

/// Split normalized text into word tokens.
///
/// Splits on any whitespace run (spaces, tabs, newlines), discards empty
/// fragments, and keeps each token verbatim including trailing punctuation
/// (`"end."`, `"hello,"`). Deterministic and total.
///
/// ## Example
///
/// ```rust
/// use rapidread::split_words;
///
/// assert_eq!(split_words("Hello, world!"), vec!["Hello,", "world!"]);
/// ```
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}
