//! Article ingestion: candidate selection, URL canonicalization, and the
//! pending shared-URL queue.
//!
//! Fetching raw markup and running readability backends are external
//! collaborators; this module consumes their output. Each backend produces a
//! candidate `{title, author, content_html}` tuple, and the selection policy
//! is to keep whichever candidate yields the most text after normalization.
//! At least one candidate must yield non-empty text, otherwise the import
//! fails with [`RapidReadError::NoContent`] and the caller should discard the
//! half-populated article record.
//!
//! ## Example
//!
//! ```rust
//! use rapidread::{import_content, Article, ExtractedCandidate};
//!
//! let mut article = Article::new("https://example.com/post", "");
//! let candidates = vec![ExtractedCandidate {
//!     title: Some("A Post".to_string()),
//!     author: None,
//!     content_html: Some("<p>Some readable body text.</p>".to_string()),
//! }];
//!
//! import_content(&mut article, candidates).unwrap();
//! assert_eq!(article.title, "A Post");
//! assert_eq!(article.content, "Some readable body text.");
//! ```

use crate::article::Article;
use crate::error::{RapidReadError, Result};
use crate::extractor::extract_text;
use log::debug;
use url::Url;

/// One extraction backend's output for a fetched page.
///
/// All fields are optional; a backend that failed outright simply reports an
/// empty candidate.
#[derive(Debug, Clone, Default)]
pub struct ExtractedCandidate {
    pub title: Option<String>,
    pub author: Option<String>,
    pub content_html: Option<String>,
}

/// Decode fetched page bytes as UTF-8 text.
///
/// The fetch itself is a single attempt by an external collaborator; bytes
/// that are not valid UTF-8 surface as [`RapidReadError::DecodeFailed`].
pub fn decode_fetched_bytes(bytes: &[u8]) -> Result<String> {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|_| RapidReadError::DecodeFailed)
}

/// Fill an article from ranked extraction candidates.
///
/// Runs the text extractor over every candidate and keeps the one with the
/// longest normalized text (earlier candidates win ties, preserving backend
/// ranking). The winning candidate supplies title, author, HTML, and the
/// normalized content; a missing title falls back to the article URL's host,
/// then to `"Untitled"`.
///
/// # Errors
///
/// [`RapidReadError::NoContent`] when no candidate yields non-empty text.
/// The article is left untouched in that case.
pub fn import_content(article: &mut Article, candidates: Vec<ExtractedCandidate>) -> Result<()> {
    let mut best: Option<(ExtractedCandidate, String)> = None;

    for candidate in candidates {
        let text = candidate
            .content_html
            .as_deref()
            .map(extract_text)
            .unwrap_or_default();
        if text.is_empty() {
            continue;
        }
        let better = match &best {
            Some((_, best_text)) => text.chars().count() > best_text.chars().count(),
            None => true,
        };
        if better {
            best = Some((candidate, text));
        }
    }

    let Some((winner, text)) = best else {
        return Err(RapidReadError::NoContent);
    };
    debug!(
        "imported {} chars of content for {}",
        text.chars().count(),
        article.url
    );

    article.title = winner
        .title
        .filter(|t| !t.trim().is_empty())
        .or_else(|| host_of(&article.url))
        .unwrap_or_else(|| "Untitled".to_string());
    article.author = winner.author;
    article.html = winner.content_html.unwrap_or_default();
    article.content = text;
    Ok(())
}

fn host_of(url: &str) -> Option<String> {
    Url::parse(url).ok()?.host_str().map(str::to_owned)
}

/// Canonicalize a URL string for duplicate detection.
///
/// Lowercases the scheme and host, strips the fragment, drops default ports
/// for http/https, and removes a trailing slash from non-root paths, so the
/// same article shared twice with cosmetic URL differences is recognized as
/// one.
///
/// # Errors
///
/// [`RapidReadError::InvalidUrl`] when the input does not parse as a URL.
pub fn normalize_url(url: &str) -> Result<String> {
    let mut parsed =
        Url::parse(url).map_err(|_| RapidReadError::InvalidUrl(url.to_string()))?;

    // The url crate already lowercases scheme and host and drops default
    // ports during parsing.
    parsed.set_fragment(None);

    let path = parsed.path();
    if path != "/" && path.ends_with('/') {
        let trimmed = path.trim_end_matches('/').to_string();
        parsed.set_path(&trimmed);
    }

    Ok(parsed.into())
}

/// Hand-off point for URLs shared into the app from elsewhere.
///
/// The durable, app-group-scoped storage behind it is an external
/// collaborator; the import pipeline only needs to drain whatever is pending.
pub trait PendingUrlQueue {
    /// Queue a shared URL for import.
    fn enqueue(&mut self, url: Url);

    /// Take all pending URLs, leaving the queue empty.
    fn drain_pending(&mut self) -> Vec<Url>;
}

/// In-memory [`PendingUrlQueue`], suitable for single-process use and tests.
#[derive(Debug, Default)]
pub struct InMemoryUrlQueue {
    pending: Vec<Url>,
}

impl PendingUrlQueue for InMemoryUrlQueue {
    fn enqueue(&mut self, url: Url) {
        self.pending.push(url);
    }

    fn drain_pending(&mut self) -> Vec<Url> {
        std::mem::take(&mut self.pending)
    }
}
