//! Plain-text extraction from candidate article HTML.
//!
//! This module converts the HTML an extraction backend hands back into a
//! single clean text stream the tokenizer can split: one paragraph per line,
//! word boundaries preserved across inline elements, and boilerplate
//! (captions, footnote markers, raw URLs, duplicated pull-quotes) stripped.
//!
//! Extraction never fails. Malformed or empty input degrades to an empty
//! string rather than an error, so a single bad fragment cannot abort an
//! otherwise-successful import.
//!
//! ## Example
//!
//! ```rust
//! use rapidread::extract_text;
//!
//! let html = r##"<p>Check out <a href="#">this link</a> for more.</p>"##;
//! assert_eq!(extract_text(html), "Check out this link for more.");
//! ```

use ego_tree::NodeRef;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Node};

/// Elements whose subtrees must not leak text into the output.
const SKIP_TAGS: &[&str] = &["figcaption", "img", "video", "source", "picture"];

/// Elements that start a new paragraph block.
const BLOCK_TAGS: &[&str] = &[
    "p", "section", "li", "div", "h1", "h2", "h3", "h4", "h5", "h6", "pre", "blockquote",
    "article", "header", "footer", "nav", "aside", "main", "figure", "table", "tr", "td", "th",
];

/// Quotation blocks shorter than this are never deduplicated, avoiding false
/// positives on short phrases.
const PULL_QUOTE_MIN_CHARS: usize = 20;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static FOOTNOTE_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r" ?\[\d+\]").unwrap());
static BARE_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").unwrap());
static EMPTY_BRACKET_PAIR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(\s*\)|\[\s*\]").unwrap());
static SPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").unwrap());
static NEWLINE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").unwrap());

/// One unit of extracted content, in document order.
struct ParagraphBlock {
    text: String,
    is_quotation: bool,
}

struct Extraction {
    blocks: Vec<ParagraphBlock>,
    pre_depth: usize,
    quote_depth: usize,
}

impl Extraction {
    fn new() -> Self {
        Self {
            blocks: vec![ParagraphBlock {
                text: String::new(),
                is_quotation: false,
            }],
            pre_depth: 0,
            quote_depth: 0,
        }
    }

    fn enter_element(&mut self, tag: &str) {
        if tag == "pre" {
            self.pre_depth += 1;
        }
        if tag == "blockquote" {
            self.quote_depth += 1;
        }
        if BLOCK_TAGS.contains(&tag) {
            self.blocks.push(ParagraphBlock {
                text: String::new(),
                is_quotation: self.quote_depth > 0,
            });
        }
    }

    fn exit_element(&mut self, tag: &str) {
        if tag == "pre" {
            self.pre_depth = self.pre_depth.saturating_sub(1);
        }
        if tag == "blockquote" {
            self.quote_depth = self.quote_depth.saturating_sub(1);
        }
    }

    fn visit_text(&mut self, text: &str) {
        let current = self
            .blocks
            .last_mut()
            .expect("extraction always holds at least one block");

        if self.pre_depth > 0 {
            // Preformatted text keeps its whitespace verbatim.
            current.text.push_str(text);
            return;
        }

        let normalized = WHITESPACE_RUN.replace_all(text, " ");
        if normalized.trim().is_empty() {
            return;
        }

        // Inline elements (links, emphasis) must neither jam adjacent words
        // together nor insert a space before trailing punctuation.
        if !current.text.is_empty()
            && !current.text.ends_with(' ')
            && !normalized.starts_with(' ')
        {
            let starts_with_punctuation = normalized
                .trim_start()
                .chars()
                .next()
                .map(|c| c.is_ascii_punctuation())
                .unwrap_or(false);
            if !starts_with_punctuation {
                current.text.push(' ');
            }
        }

        current.text.push_str(&normalized);
    }
}

fn walk(node: NodeRef<'_, Node>, extraction: &mut Extraction) {
    for child in node.children() {
        match child.value() {
            Node::Text(text) => extraction.visit_text(text),
            Node::Element(element) => {
                let tag = element.name();
                if SKIP_TAGS.contains(&tag) {
                    // Prune: captions, media fallbacks and alt text stay out.
                    continue;
                }
                extraction.enter_element(tag);
                walk(child, extraction);
                extraction.exit_element(tag);
            }
            _ => {}
        }
    }
}

/// Per-block cleanup after traversal: footnote markers, bare URLs, bracket
/// pairs those removals emptied, and leftover space runs.
fn clean_block(text: &str) -> String {
    let cleaned = FOOTNOTE_MARKER.replace_all(text, "");
    let cleaned = BARE_URL.replace_all(&cleaned, "");
    let cleaned = EMPTY_BRACKET_PAIR.replace_all(&cleaned, "");
    let cleaned = SPACE_RUN.replace_all(&cleaned, " ");
    cleaned.trim().to_string()
}

/// Quotation text normalized for duplicate detection: surrounding
/// punctuation and whitespace stripped, lowercased.
fn normalized_quote(text: &str) -> String {
    text.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase()
}

/// Drop quotation blocks that restate body text verbatim.
///
/// A pull-quote duplicates surrounding prose for visual emphasis and would be
/// read twice in a word-by-word stream. Genuinely new quotations are kept, as
/// are short quotation blocks regardless of content.
fn drop_pull_quotes(blocks: &mut Vec<ParagraphBlock>) {
    let body = blocks
        .iter()
        .filter(|b| !b.is_quotation)
        .map(|b| b.text.to_lowercase())
        .collect::<Vec<_>>()
        .join("\n");

    blocks.retain(|block| {
        if !block.is_quotation {
            return true;
        }
        let quote = normalized_quote(&block.text);
        if quote.chars().count() < PULL_QUOTE_MIN_CHARS {
            return true;
        }
        !body.contains(&quote)
    });
}

/// Extract clean, paragraph-structured plain text from article HTML.
///
/// Walks the parsed document in order, splitting paragraphs at block-level
/// elements, skipping caption/media subtrees, keeping `<pre>` text verbatim,
/// and tagging `<blockquote>` content so duplicated pull-quotes can be
/// dropped. The result has paragraphs joined by single newlines with no
/// leading or trailing whitespace.
///
/// Total over all inputs: unparseable or empty HTML yields an empty string.
///
/// ## Example
///
/// ```rust
/// use rapidread::extract_text;
///
/// let html = "<p>First.</p><p>Second.</p>";
/// assert_eq!(extract_text(html), "First.\nSecond.");
/// ```
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let mut extraction = Extraction::new();
    walk(document.tree.root(), &mut extraction);

    let mut blocks: Vec<ParagraphBlock> = extraction
        .blocks
        .into_iter()
        .map(|block| ParagraphBlock {
            text: block.text.trim().to_string(),
            is_quotation: block.is_quotation,
        })
        .filter(|block| !block.text.is_empty())
        .map(|block| ParagraphBlock {
            text: clean_block(&block.text),
            is_quotation: block.is_quotation,
        })
        .filter(|block| !block.text.is_empty())
        .collect();

    drop_pull_quotes(&mut blocks);

    let joined = blocks
        .iter()
        .map(|block| block.text.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    let joined = NEWLINE_RUN.replace_all(&joined, "\n");
    joined.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(extract_text(""), "");
        assert_eq!(extract_text("   "), "");
    }

    #[test]
    fn garbage_input_degrades_instead_of_failing() {
        let text = extract_text("<<<>>><p unclosed");
        assert!(!text.contains('<'));
        assert!(!text.contains('>'));
    }

    #[test]
    fn block_elements_become_separate_lines() {
        let text = extract_text("<p>First paragraph.</p><p>Second paragraph.</p>");
        assert_eq!(text, "First paragraph.\nSecond paragraph.");
    }

    #[test]
    fn empty_blocks_do_not_produce_blank_lines() {
        let text = extract_text("<p>One.</p><div></div><p></p><p>Two.</p>");
        assert_eq!(text, "One.\nTwo.");
    }

    #[test]
    fn inline_elements_keep_word_boundaries() {
        let text = extract_text("<p>This is <em>emphasized</em> text and <strong>bold</strong> text.</p>");
        assert!(text.contains("is emphasized text"));
        assert!(text.contains("and bold text"));
        assert!(!text.contains("isemphasized"));
        assert!(!text.contains("andbold"));
    }

    #[test]
    fn no_space_inserted_before_punctuation() {
        let text = extract_text("<p>Hello<em>,</em> world!</p>");
        assert!(text.contains("Hello,"));
        assert!(!text.contains("Hello ,"));
    }

    #[test]
    fn preformatted_text_keeps_whitespace() {
        let text = extract_text("<pre>  indented\n    code</pre>");
        assert!(text.contains("indented"));
        assert!(text.contains("code"));
    }

    #[test]
    fn skip_tags_are_pruned_entirely() {
        let html = r#"
            <p>Before.</p>
            <figure>
                <img src="x.jpg" alt="leaked alt text">
                <figcaption>Photo by Someone</figcaption>
            </figure>
            <p>After.</p>
        "#;
        let text = extract_text(html);
        assert!(text.contains("Before."));
        assert!(text.contains("After."));
        assert!(!text.contains("Photo by"));
        assert!(!text.contains("leaked alt text"));
    }

    #[test]
    fn footnote_markers_are_removed_without_double_spaces() {
        let text = extract_text("<p>The study found results [1] across groups [2].</p>");
        assert!(text.contains("results across groups"));
        assert!(!text.contains("[1]"));
        assert!(!text.contains("[2]"));
        assert!(!text.contains("  "));
    }

    #[test]
    fn non_numeric_brackets_survive_cleanup() {
        let text = extract_text("<p>Growth [adjusted for inflation] rose [1] again.</p>");
        assert!(text.contains("[adjusted for inflation]"));
        assert!(!text.contains("[1]"));
    }

    #[test]
    fn bare_urls_are_removed() {
        let text = extract_text(
            r##"<p>See <a href="#">https://example.com/report/2024</a> for details.</p>"##,
        );
        assert!(text.contains("See"));
        assert!(text.contains("for details."));
        assert!(!text.contains("https://"));
        assert!(!text.contains("example.com"));
    }

    #[test]
    fn pull_quote_duplicating_body_is_dropped() {
        let html = r#"
            <p>The director said that the future belongs to those who believe
            in the beauty of their dreams. The audience stood and applauded.</p>
            <blockquote><p>The future belongs to those who believe in the beauty of their dreams.</p></blockquote>
            <p>The event continued.</p>
        "#;
        let text = extract_text(html);
        let first = text.find("the beauty of their dreams").unwrap();
        assert!(!text[first + 1..].contains("the beauty of their dreams"));
    }

    #[test]
    fn original_quotations_are_kept() {
        let html = r#"
            <p>The professor disagreed with the findings.</p>
            <blockquote><p>"This methodology is fundamentally flawed," Dr. Chen wrote.</p></blockquote>
        "#;
        let text = extract_text(html);
        assert!(text.contains("fundamentally flawed"));
        assert!(text.contains("Dr. Chen wrote"));
    }

    #[test]
    fn short_quotations_are_never_deduplicated() {
        let html = r#"
            <p>He simply said no comment to the reporters.</p>
            <blockquote><p>No comment.</p></blockquote>
        "#;
        let text = extract_text(html);
        assert!(text.contains("No comment."));
    }

    #[test]
    fn output_has_no_newline_runs() {
        let html = "<div><div><p>One.</p></div></div><section><p>Two.</p></section>";
        let text = extract_text(html);
        assert!(!text.contains("\n\n"));
    }
}
