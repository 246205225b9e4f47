//! Adaptive per-word display intervals.
//!
//! The pacer computes, for each word in a tokenized article, how long it
//! should stay on screen. The base interval comes from the nominal
//! words-per-minute rate; position-in-document ramps ease the reader in and
//! out, and a per-word complexity multiplier gives long words, sentence
//! boundaries, and numbers extra time.
//!
//! ## Example
//!
//! ```rust
//! use rapidread::ReadingPacer;
//!
//! let words = vec!["Reading".to_string(), "is".to_string(), "fun.".to_string()];
//! let pacer = ReadingPacer::new(words, 300.0);
//! let interval = pacer.interval(0, 0);
//! assert!(interval > pacer.base_interval());
//! ```

use std::time::Duration;

/// Number of words over which the start and end ramps apply.
const RAMP_WORDS: usize = 5;

/// Computes the display interval for each word of an article.
///
/// Pure over word position and content: the same index always yields the same
/// interval for a given word list and rate.
#[derive(Debug, Clone)]
pub struct ReadingPacer {
    words: Vec<String>,
    base_wpm: f64,
}

impl ReadingPacer {
    /// Create a pacer over a tokenized article at the given nominal rate.
    pub fn new(words: Vec<String>, base_wpm: f64) -> Self {
        Self { words, base_wpm }
    }

    /// Number of words in the article.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// The word at `index`, if in range.
    pub fn word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Seconds per word at the nominal rate, before any adjustment.
    pub fn base_interval(&self) -> Duration {
        Duration::from_secs_f64(self.base_interval_secs())
    }

    /// Display interval for the word at `index`.
    ///
    /// Out-of-range indices and empty word lists return the base interval
    /// unmodified. `words_since_resume` is accepted for call-site bookkeeping;
    /// the ramps are based on absolute document position, not on position
    /// since the last resume.
    pub fn interval(&self, index: usize, words_since_resume: usize) -> Duration {
        let _ = words_since_resume;

        if self.words.is_empty() || index >= self.words.len() {
            return self.base_interval();
        }

        let word = &self.words[index];
        let multiplier = self.ramp_up_multiplier(index)
            * self.ramp_down_multiplier(index)
            * word_complexity_multiplier(word);

        Duration::from_secs_f64(self.base_interval_secs() * multiplier)
    }

    fn base_interval_secs(&self) -> f64 {
        60.0 / self.base_wpm
    }

    /// Slower at the start to ease the reader in: 1.5x down to 1.0x over the
    /// first five words.
    fn ramp_up_multiplier(&self, index: usize) -> f64 {
        if index >= RAMP_WORDS {
            return 1.0;
        }
        let progress = index as f64 / RAMP_WORDS as f64;
        1.5 - 0.5 * progress
    }

    /// Slower at the end to let the reader finish comfortably: 1.0x up to
    /// 1.5x over the last five words.
    fn ramp_down_multiplier(&self, index: usize) -> f64 {
        let distance_from_end = self.words.len() - 1 - index;
        if distance_from_end >= RAMP_WORDS {
            return 1.0;
        }
        let progress = (RAMP_WORDS - distance_from_end) as f64 / RAMP_WORDS as f64;
        1.0 + 0.5 * progress
    }
}

/// Per-word complexity adjustment: length, trailing punctuation, and digits
/// each add time independently.
fn word_complexity_multiplier(word: &str) -> f64 {
    let mut multiplier = 1.0;

    let length = word.chars().count();
    if length > 8 {
        multiplier += 0.3;
    } else if length > 5 {
        multiplier += 0.15;
    }

    if word.ends_with('.') || word.ends_with('!') || word.ends_with('?') {
        multiplier += 0.4;
    } else if word.ends_with(',') || word.ends_with(';') || word.ends_with(':') {
        multiplier += 0.2;
    }

    if word.chars().any(|c| c.is_ascii_digit()) {
        multiplier += 0.15;
    }

    multiplier
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE_WPM: f64 = 300.0;

    fn pacer_of(words: Vec<&str>) -> ReadingPacer {
        ReadingPacer::new(words.into_iter().map(String::from).collect(), BASE_WPM)
    }

    fn uniform(count: usize) -> ReadingPacer {
        pacer_of(vec!["word"; count])
    }

    #[test]
    fn empty_words_return_base_interval() {
        let pacer = pacer_of(vec![]);
        assert_eq!(pacer.interval(0, 0), pacer.base_interval());
    }

    #[test]
    fn out_of_range_index_returns_base_interval() {
        let pacer = pacer_of(vec!["hello"]);
        assert_eq!(pacer.interval(5, 0), pacer.base_interval());
    }

    #[test]
    fn first_word_is_slower_than_middle() {
        let pacer = uniform(20);
        assert!(pacer.interval(0, 0) > pacer.interval(10, 0));
    }

    #[test]
    fn ramp_up_strictly_decreases_over_first_five_words() {
        let pacer = uniform(20);
        for i in 1..5 {
            assert!(pacer.interval(i, 0) < pacer.interval(i - 1, 0));
        }
    }

    #[test]
    fn last_word_is_slower_than_middle() {
        let pacer = uniform(20);
        assert!(pacer.interval(19, 0) > pacer.interval(10, 0));
    }

    #[test]
    fn ramp_down_strictly_increases_over_last_five_words() {
        let pacer = uniform(20);
        for i in 16..20 {
            assert!(pacer.interval(i, 0) > pacer.interval(i - 1, 0));
        }
    }

    #[test]
    fn longer_words_are_slower() {
        let mut words = vec!["word"; 21];
        words[11] = "extraordinary";
        let pacer = pacer_of(words);
        assert!(pacer.interval(11, 0) > pacer.interval(6, 0));
    }

    #[test]
    fn sentence_ending_punctuation_adds_delay() {
        let mut words = vec!["word"; 16];
        words[5] = "end.";
        let pacer = pacer_of(words);
        assert!(pacer.interval(5, 0) > pacer.interval(10, 0));
    }

    #[test]
    fn period_is_slower_than_comma_is_slower_than_plain() {
        let mut words = vec!["word"; 17];
        words[5] = "word,";
        words[11] = "word.";
        let pacer = pacer_of(words);
        let comma = pacer.interval(5, 0);
        let period = pacer.interval(11, 0);
        let plain = pacer.interval(8, 0);
        assert!(comma > plain);
        assert!(period > comma);
    }

    #[test]
    fn digits_add_delay() {
        let mut words = vec!["word"; 16];
        words[5] = "2026";
        let pacer = pacer_of(words);
        assert!(pacer.interval(5, 0) > pacer.interval(10, 0));
    }

    #[test]
    fn short_text_has_both_ramps_active_everywhere() {
        let pacer = uniform(6);
        assert!(pacer.interval(0, 0) > pacer.base_interval());
        assert!(pacer.interval(5, 0) > pacer.base_interval());
    }

    #[test]
    fn higher_wpm_means_shorter_intervals() {
        let slow = ReadingPacer::new(vec!["word".to_string(); 20], 200.0);
        let fast = ReadingPacer::new(vec!["word".to_string(); 20], 400.0);
        assert!(slow.interval(10, 0) > fast.interval(10, 0));
    }

    #[test]
    fn words_since_resume_does_not_change_intervals() {
        let pacer = uniform(20);
        assert_eq!(pacer.interval(10, 0), pacer.interval(10, 7));
    }
}
