//! HTML parser for listing pages
//!
//! This module extracts the two pieces of text the extractors work on:
//! - The page title (from the first `<title>` tag)
//! - The visible body text (text under `<body>`, scripts and styles excluded,
//!   inline elements joined and block elements separated by a space)
//!
//! Both are whitespace-collapsed and trimmed.

use scraper::{ElementRef, Html, Node, Selector};

/// Elements whose text is not visible page content
const HIDDEN_ELEMENTS: [&str; 3] = ["script", "style", "template"];

/// Elements that break the text flow
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "caption", "dd", "div", "dl", "dt",
    "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6",
    "header", "hr", "li", "main", "nav", "ol", "p", "pre", "section", "table", "tbody", "td",
    "tfoot", "th", "thead", "tr", "ul",
];

/// Text extracted from a listing page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPage {
    /// The page title, if present and non-empty
    pub title: Option<String>,

    /// Visible text of the body
    pub body_text: String,
}

/// Parses HTML content and extracts title and body text
///
/// # Example
///
/// ```
/// use hidden_listings::crawler::parse_html;
///
/// let html = r#"<html><head><title> Acme - 2br/1ba </title></head><body><p>Rent</p><p>$1,200</p></body></html>"#;
/// let parsed = parse_html(html);
/// assert_eq!(parsed.title, Some("Acme - 2br/1ba".to_string()));
/// assert_eq!(parsed.body_text, "Rent $1,200");
/// ```
pub fn parse_html(html: &str) -> ParsedPage {
    let document = Html::parse_document(html);

    ParsedPage {
        title: extract_title(&document),
        body_text: extract_body_text(&document),
    }
}

/// Extracts the page title from the HTML document
fn extract_title(document: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").ok()?;

    document
        .select(&title_selector)
        .next()
        .map(|element| collapse_whitespace(&element.text().collect::<Vec<_>>().join(" ")))
        .filter(|s| !s.is_empty())
}

/// Collects visible text under `<body>`
///
/// Inline markup is joined as-is, so `<span>$</span>1,200` reads `$1,200`.
/// Block-level elements and `<br>` separate their text with a space.
fn extract_body_text(document: &Html) -> String {
    let body_selector = match Selector::parse("body") {
        Ok(selector) => selector,
        Err(_) => return String::new(),
    };

    let Some(body) = document.select(&body_selector).next() else {
        return String::new();
    };

    let mut text = String::new();
    append_text(body, &mut text);

    collapse_whitespace(&text)
}

fn append_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => {
                let name = el.name();
                if HIDDEN_ELEMENTS.contains(&name) {
                    continue;
                }

                let block = BLOCK_ELEMENTS.contains(&name);
                if block {
                    out.push(' ');
                }
                if let Some(child_element) = ElementRef::wrap(child) {
                    append_text(child_element, out);
                }
                if block {
                    out.push(' ');
                }
            }
            _ => {}
        }
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
