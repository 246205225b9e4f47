//! Article data structure and reading status.
//!
//! This module defines [`Article`], the record a reading session operates on,
//! and [`ReadingStatus`], the tagged status that tracks where the reader left
//! off. Each status variant carries only the data it needs, so a completed
//! article can never simultaneously claim in-progress data.
//!
//! ## Example
//!
//! ```rust
//! use rapidread::{Article, ReadingStatus};
//!
//! let article = Article::new(
//!     "https://example.com/post",
//!     "My Article",
//! );
//!
//! assert!(matches!(article.status, ReadingStatus::Unread { .. }));
//! assert_eq!(article.word_count(), 0);
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::time::SystemTime;

/// Where the reader left off in an article.
///
/// Variants sort in-progress first, then unread, then read; within the same
/// variant, newer timestamps come first. This is the order an article list
/// presents sessions in.
///
/// ## Serialization
///
/// Derives `Serialize`/`Deserialize` so the status can be persisted alongside
/// the article record:
///
/// ```rust
/// use rapidread::ReadingStatus;
/// use std::time::SystemTime;
///
/// let status = ReadingStatus::InProgress {
///     progress: 42,
///     last_opened_at: SystemTime::now(),
/// };
/// let json = serde_json::to_string(&status).unwrap();
/// let back: ReadingStatus = serde_json::from_str(&json).unwrap();
/// assert_eq!(status, back);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadingStatus {
    /// Never activated; `created_at` is when the article was saved or last
    /// touched.
    Unread { created_at: SystemTime },

    /// Partially read; `progress` is the index of the current word.
    InProgress {
        progress: usize,
        last_opened_at: SystemTime,
    },

    /// Finished; `read_at` is when the last word was reached.
    Read { read_at: SystemTime },
}

impl ReadingStatus {
    /// A fresh unread status stamped with the current time.
    pub fn unread_now() -> Self {
        ReadingStatus::Unread {
            created_at: SystemTime::now(),
        }
    }

    /// Whether the article has been read to completion.
    pub fn is_read(&self) -> bool {
        matches!(self, ReadingStatus::Read { .. })
    }

    /// The persisted word index, or 0 for unread/read articles.
    pub fn reading_progress(&self) -> usize {
        match self {
            ReadingStatus::InProgress { progress, .. } => *progress,
            _ => 0,
        }
    }

    fn sort_priority(&self) -> u8 {
        match self {
            ReadingStatus::InProgress { .. } => 0,
            ReadingStatus::Unread { .. } => 1,
            ReadingStatus::Read { .. } => 2,
        }
    }

    fn date(&self) -> SystemTime {
        match self {
            ReadingStatus::Unread { created_at } => *created_at,
            ReadingStatus::InProgress { last_opened_at, .. } => *last_opened_at,
            ReadingStatus::Read { read_at } => *read_at,
        }
    }
}

impl Ord for ReadingStatus {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_priority()
            .cmp(&other.sort_priority())
            // Newer dates first within the same status.
            .then_with(|| other.date().cmp(&self.date()))
    }
}

impl PartialOrd for ReadingStatus {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A saved article: source URL, metadata, raw extractor HTML, and the clean
/// text the reader paces through.
///
/// `content` is the normalized plain text produced by
/// [`extract_text`](crate::extract_text) — one paragraph per line, no markup.
/// `html` keeps the extractor's candidate HTML for re-extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Canonical article URL (see [`normalize_url`](crate::normalize_url)).
    pub url: String,

    /// Article title, falling back to the URL host when extraction found none.
    pub title: String,

    /// Author name(s), if the extraction backend reported any.
    pub author: Option<String>,

    /// Candidate HTML as returned by the winning extraction backend.
    pub html: String,

    /// Normalized plain text, paragraphs joined by single newlines.
    pub content: String,

    /// Reading status and progress.
    pub status: ReadingStatus,
}

impl Article {
    /// Create a new unread article with empty content.
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            author: None,
            html: String::new(),
            content: String::new(),
            status: ReadingStatus::unread_now(),
        }
    }

    /// Number of words in the normalized content.
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }

    /// Fraction of the article read so far, in `[0, 1]`.
    pub fn fraction_read(&self) -> f64 {
        let words = self.word_count();
        if words == 0 {
            return 0.0;
        }
        self.status.reading_progress() as f64 / words as f64
    }
}
