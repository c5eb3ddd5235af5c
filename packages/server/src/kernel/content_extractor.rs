//! Content extractor - pulls title, meta description and main text out of HTML
//!
//! Main content is chosen by an ordered list of strategies; the first one
//! that finds something wins:
//! 1. the first `<article>`
//! 2. the first element matching a common content-container selector
//! 3. every `<p>` in document order, space-joined

use openai_client::truncate_chars;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::common::{ExtractedContent, ExtractionError};

/// Maximum characters of main content kept
pub const MAX_CONTENT_CHARS: usize = 5000;

/// Title used when the document has none
pub const NO_TITLE: &str = "no title";

/// Elements whose text is never page content
const NON_CONTENT_ELEMENTS: [&str; 3] = ["script", "style", "template"];

/// One way of locating the main content of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentStrategy {
    /// Text of the first element matching the selector
    FirstMatch(&'static str),
    /// Text of every paragraph, space-joined
    AllParagraphs,
}

/// Strategies in priority order.
pub const CONTENT_STRATEGIES: [ContentStrategy; 8] = [
    ContentStrategy::FirstMatch("article"),
    ContentStrategy::FirstMatch(".main-content"),
    ContentStrategy::FirstMatch("#content"),
    ContentStrategy::FirstMatch(".article-body"),
    ContentStrategy::FirstMatch(".post-content"),
    ContentStrategy::FirstMatch(".entry-content"),
    ContentStrategy::FirstMatch(".content"),
    ContentStrategy::AllParagraphs,
];

impl ContentStrategy {
    /// Returns `None` when this strategy found nothing to work with.
    fn apply(&self, document: &Html) -> Result<Option<String>, ExtractionError> {
        match self {
            ContentStrategy::FirstMatch(selector) => {
                let selector = parse_selector(selector)?;
                Ok(document.select(&selector).next().map(element_text))
            }
            ContentStrategy::AllParagraphs => {
                let selector = parse_selector("p")?;
                let text = document
                    .select(&selector)
                    .map(element_text)
                    .filter(|t| !t.is_empty())
                    .collect::<Vec<_>>()
                    .join(" ");
                Ok(Some(text))
            }
        }
    }
}

/// Extract title, description and truncated main content from an HTML document.
pub fn extract_content(html: &str) -> Result<ExtractedContent, ExtractionError> {
    let document = Html::parse_document(html);

    let title = extract_title(&document)?;
    let description = extract_description(&document)?;

    let mut content = String::new();
    for strategy in CONTENT_STRATEGIES {
        if let Some(found) = strategy.apply(&document)? {
            debug!(strategy = ?strategy, chars = found.chars().count(), "Main content located");
            content = found;
            break;
        }
    }

    let content = truncate_chars(&content, MAX_CONTENT_CHARS).to_string();

    Ok(ExtractedContent {
        title,
        description,
        content,
    })
}

fn extract_title(document: &Html) -> Result<String, ExtractionError> {
    let selector = parse_selector("title")?;
    Ok(document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| NO_TITLE.to_string()))
}

fn extract_description(document: &Html) -> Result<String, ExtractionError> {
    let selector = parse_selector(r#"meta[name="description"]"#)?;
    Ok(document
        .select(&selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|content| content.trim().to_string())
        .unwrap_or_default())
}

/// Visible text of an element, whitespace collapsed to single spaces.
fn element_text(element: ElementRef<'_>) -> String {
    let mut words: Vec<&str> = Vec::new();

    for node in element.descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };

        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| NON_CONTENT_ELEMENTS.contains(&el.name()))
        });
        if !hidden {
            words.extend(text.split_whitespace());
        }
    }

    words.join(" ")
}

fn parse_selector(selector: &str) -> Result<Selector, ExtractionError> {
    Selector::parse(selector).map_err(|e| ExtractionError::Selector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_wins() {
        let html = "<html><body><article>The quick brown fox</article></body></html>";
        let extracted = extract_content(html).unwrap();

        assert_eq!(extracted.content, "The quick brown fox");
        assert_eq!(extracted.description, "");
        assert_eq!(extracted.title, NO_TITLE);
    }

    #[test]
    fn test_article_whitespace_collapsed() {
        let html = r#"
            <article>
                <h1>  Heading </h1>
                <p>First
                   line</p>
                <p><b>Bold</b>tail</p>
            </article>
        "#;
        let extracted = extract_content(html).unwrap();

        assert_eq!(extracted.content, "Heading First line Bold tail");
    }

    #[test]
    fn test_article_preferred_over_selectors() {
        let html = r#"
            <div class="content">Container</div>
            <article>Article text</article>
        "#;
        assert_eq!(extract_content(html).unwrap().content, "Article text");
    }

    #[test]
    fn test_selector_priority_order() {
        // .content appears first in the document, but #content ranks higher
        let html = r#"
            <div class="content">Generic</div>
            <div id="content">By id</div>
            <p>Para</p>
        "#;
        assert_eq!(extract_content(html).unwrap().content, "By id");

        let html = r#"
            <div class="entry-content">Entry</div>
            <div class="main-content">Main</div>
        "#;
        assert_eq!(extract_content(html).unwrap().content, "Main");
    }

    #[test]
    fn test_first_matching_element_used() {
        let html = r#"
            <div class="post-content">One</div>
            <div class="post-content">Two</div>
        "#;
        assert_eq!(extract_content(html).unwrap().content, "One");
    }

    #[test]
    fn test_paragraph_fallback() {
        let html = "<html><body><p>A.</p><div><p>B.</p></div><p>C.</p></body></html>";
        assert_eq!(extract_content(html).unwrap().content, "A. B. C.");
    }

    #[test]
    fn test_empty_paragraphs_skipped() {
        let html = "<p>A.</p><p>   </p><p>B.</p>";
        assert_eq!(extract_content(html).unwrap().content, "A. B.");
    }

    #[test]
    fn test_no_content_at_all() {
        let extracted = extract_content("<html><body><div>loose</div></body></html>").unwrap();
        assert_eq!(extracted.content, "");
    }

    #[test]
    fn test_truncated_to_limit() {
        let html = format!("<article>{}</article>", "x".repeat(MAX_CONTENT_CHARS + 250));
        let extracted = extract_content(&html).unwrap();

        assert_eq!(extracted.content.chars().count(), MAX_CONTENT_CHARS);
    }

    #[test]
    fn test_truncation_counts_characters() {
        let html = format!("<article>{}</article>", "é".repeat(MAX_CONTENT_CHARS + 10));
        let extracted = extract_content(&html).unwrap();

        assert_eq!(extracted.content.chars().count(), MAX_CONTENT_CHARS);
    }

    #[test]
    fn test_title_and_description() {
        let html = r#"
            <html>
              <head>
                <title>  Acme Co </title>
                <meta name="description" content="Rockets and anvils">
              </head>
              <body><p>Hello</p></body>
            </html>
        "#;
        let extracted = extract_content(html).unwrap();

        assert_eq!(extracted.title, "Acme Co");
        assert_eq!(extracted.description, "Rockets and anvils");
    }

    #[test]
    fn test_meta_without_content_attribute() {
        let html = r#"<head><meta name="description"></head><p>x</p>"#;
        assert_eq!(extract_content(html).unwrap().description, "");
    }

    #[test]
    fn test_script_and_style_text_ignored() {
        let html = r#"
            <article>
              <script>var tracking = 1;</script>
              <style>.a { color: red }</style>
              Visible
            </article>
        "#;
        assert_eq!(extract_content(html).unwrap().content, "Visible");
    }
}
