//! # RapidRead
//!
//! An RSVP (rapid serial visual presentation) speed-reading engine.
//!
//! RapidRead takes the candidate HTML a readability backend produced for a
//! saved article, reduces it to clean paragraph-structured prose, and paces
//! word-by-word playback at a rate that adapts to word difficulty, sentence
//! boundaries, and document position, while tracking reading progress across
//! pauses, backgrounding, and accidental gestures.
//!
//! ## Overview
//!
//! The pipeline is: raw HTML → [`extract_text`] → plain text →
//! [`split_words`] → word sequence → [`ReadingPacer`] (interval per word) →
//! [`PlaybackController`] (drives the presentation loop and persists
//! progress). Fetching pages and running readability backends are external
//! collaborators; [`import_content`] selects among their candidates.
//!
//! ## Extracting text
//!
//! ```rust
//! use rapidread::extract_text;
//!
//! let html = r##"<p>Check out <a href="#">this link</a> for more.</p>"##;
//! assert_eq!(extract_text(html), "Check out this link for more.");
//! ```
//!
//! Extraction never fails: malformed HTML degrades to partial or empty text
//! so a single bad fragment cannot abort an import.
//!
//! ## Pacing
//!
//! ```rust
//! use rapidread::{split_words, ReadingPacer};
//!
//! let text = "The quick brown fox jumps over the lazy dog.";
//! let words: Vec<String> = split_words(text).into_iter().map(String::from).collect();
//! let pacer = ReadingPacer::new(words, 300.0);
//!
//! // The first word lingers longer than one mid-document.
//! assert!(pacer.interval(0, 0) > pacer.interval(4, 0));
//! ```
//!
//! ## Playback
//!
//! [`PlaybackController`] is a synchronous state machine: every event takes
//! an explicit `Instant`, and the host arms one wake-up at a time from
//! [`PlaybackController::next_wake`]. Its documentation describes the full
//! gesture and lifecycle protocol.
//!
//! ## Error Handling
//!
//! ```rust
//! use rapidread::{import_content, Article, RapidReadError};
//!
//! let mut article = Article::new("https://example.com/post", "");
//! match import_content(&mut article, vec![]) {
//!     Ok(()) => println!("imported {}", article.title),
//!     Err(RapidReadError::NoContent) => {
//!         // Discard the half-populated record.
//!     }
//!     Err(e) => eprintln!("import failed: {}", e),
//! }
//! ```

mod article;
mod error;
mod extractor;
mod importer;
mod options;
mod pacer;
mod playback;
mod splitter;

// Public exports
pub use article::{Article, ReadingStatus};
pub use error::{RapidReadError, Result};
pub use extractor::extract_text;
pub use importer::{
    decode_fetched_bytes, import_content, normalize_url, ExtractedCandidate, InMemoryUrlQueue,
    PendingUrlQueue,
};
pub use options::{ReaderOptions, ReaderOptionsBuilder};
pub use pacer::ReadingPacer;
pub use playback::{PlaybackController, PlaybackState, ProgressStore};
pub use splitter::split_words;
