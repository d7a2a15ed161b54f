//! Parsed document wrapper shared by all analyzers
//!
//! A `Document` is parsed once per analysis and read immutably by every
//! downstream component. Malformed or partial HTML never fails to parse;
//! missing elements simply make conditions evaluate to false.

use regex::Regex;
use scraper::{ElementRef, Html, Node, Selector};
use url::Url;

/// Body text derived once from the document and shared by all scorers
#[derive(Debug, Clone)]
pub struct TextContext {
    /// Flattened body text with whitespace collapsed
    pub text: String,
    /// Lowercased words in document order
    pub words: Vec<String>,
    /// Number of words
    pub word_count: usize,
}

impl TextContext {
    /// Build a text context from already-flattened plain text
    pub fn from_text(text: &str) -> Self {
        let text = collapse_whitespace(text);
        let words: Vec<String> = text
            .split_whitespace()
            .map(|w| {
                w.trim_matches(|c: char| !c.is_alphanumeric())
                    .to_lowercase()
            })
            .filter(|w| !w.is_empty())
            .collect();
        let word_count = words.len();
        Self {
            text,
            words,
            word_count,
        }
    }

    /// Ratio of unique words to total words (0.0 for an empty document)
    pub fn lexical_diversity(&self) -> f64 {
        if self.words.is_empty() {
            return 0.0;
        }
        let unique: std::collections::HashSet<&str> =
            self.words.iter().map(|w| w.as_str()).collect();
        unique.len() as f64 / self.words.len() as f64
    }
}

/// An immutably-parsed HTML document plus its source URL
pub struct Document {
    url: Option<Url>,
    raw_url: String,
    html: Html,
    text: TextContext,
}

impl Document {
    /// Parse a document. Never fails: malformed HTML parses to a partial
    /// tree and an unparseable URL degrades to scheme/host checks failing.
    pub fn parse(url: &str, html: &str) -> Self {
        let parsed = Html::parse_document(html);
        let text = TextContext::from_text(&body_text(&parsed));
        Self {
            url: Url::parse(url).ok(),
            raw_url: url.to_string(),
            html: parsed,
            text,
        }
    }

    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    pub fn raw_url(&self) -> &str {
        &self.raw_url
    }

    pub fn text(&self) -> &TextContext {
        &self.text
    }

    pub fn html(&self) -> &Html {
        &self.html
    }

    /// Whether the document was served over HTTPS
    pub fn is_https(&self) -> bool {
        self.url
            .as_ref()
            .map(|u| u.scheme() == "https")
            .unwrap_or(false)
    }

    /// Count elements matching a CSS selector
    pub fn count(&self, css: &str) -> usize {
        self.html.select(&selector(css)).count()
    }

    /// Whether any element matches a CSS selector
    pub fn exists(&self, css: &str) -> bool {
        self.html.select(&selector(css)).next().is_some()
    }

    /// Trimmed text of the first element matching a CSS selector
    pub fn first_text(&self, css: &str) -> Option<String> {
        self.html
            .select(&selector(css))
            .next()
            .map(|el| collapse_whitespace(&el.text().collect::<String>()))
    }

    /// Attribute value of the first element matching a CSS selector
    pub fn first_attr(&self, css: &str, attr: &str) -> Option<String> {
        self.html
            .select(&selector(css))
            .next()
            .and_then(|el| el.value().attr(attr))
            .map(|v| v.trim().to_string())
    }

    /// Content of a `<meta name=...>` tag
    pub fn meta_name(&self, name: &str) -> Option<String> {
        self.first_attr(&format!(r#"meta[name="{}"]"#, name), "content")
            .filter(|c| !c.is_empty())
    }

    /// Content of a `<meta property=...>` tag (Open Graph and friends)
    pub fn meta_property(&self, property: &str) -> Option<String> {
        self.first_attr(&format!(r#"meta[property="{}"]"#, property), "content")
            .filter(|c| !c.is_empty())
    }

    /// All elements matching a CSS selector, in document order
    pub fn select_all(&self, css: &str) -> Vec<ElementRef<'_>> {
        self.html.select(&selector(css)).collect()
    }

    /// Hrefs of all anchor elements
    pub fn link_hrefs(&self) -> Vec<String> {
        self.html
            .select(&selector("a[href]"))
            .filter_map(|a| a.value().attr("href"))
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .collect()
    }

    /// Whether an href points at the document's own host (or is relative)
    pub fn is_internal_link(&self, href: &str) -> bool {
        if href.starts_with('#') {
            return true;
        }
        match Url::parse(href) {
            Ok(target) => match (&self.url, target.host_str()) {
                (Some(own), Some(host)) => own.host_str() == Some(host),
                _ => false,
            },
            // Relative hrefs resolve against the document host
            Err(_) => true,
        }
    }

    /// Hrefs that point away from the document's host
    pub fn external_links(&self) -> Vec<String> {
        self.link_hrefs()
            .into_iter()
            .filter(|h| !self.is_internal_link(h))
            .collect()
    }

    /// Raw JSON-LD payloads found in the document
    pub fn json_ld_blocks(&self) -> Vec<String> {
        self.html
            .select(&selector(r#"script[type="application/ld+json"]"#))
            .map(|s| s.text().collect::<String>())
            .collect()
    }

    /// Whether any JSON-LD block declares one of the given @type values
    pub fn has_schema_type(&self, types: &[&str]) -> bool {
        self.json_ld_blocks()
            .iter()
            .any(|block| types.iter().any(|t| block.contains(t)))
    }
}

// Selectors are static literals, valid by construction; an invalid one
// degrades to a selector that matches nothing.
fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|_| Selector::parse("never-matches").unwrap())
}

/// Extract visible body text, skipping script/style/template content
fn body_text(html: &Html) -> String {
    let mut out = String::new();
    collect_text(html.root_element(), &mut out);
    out
}

fn collect_text(el: ElementRef, out: &mut String) {
    for child in el.children() {
        match child.value() {
            Node::Text(t) => {
                out.push_str(t);
                out.push(' ');
            }
            Node::Element(e) => {
                if matches!(e.name(), "script" | "style" | "noscript" | "template") {
                    continue;
                }
                if let Some(child_el) = ElementRef::wrap(child) {
                    collect_text(child_el, out);
                }
            }
            _ => {}
        }
    }
}

/// Collapse runs of whitespace into single spaces
pub fn collapse_whitespace(text: &str) -> String {
    let re = Regex::new(r"\s+").unwrap();
    re.replace_all(text.trim(), " ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_malformed_html_without_error() {
        let doc = Document::parse("https://example.com", "<h1>Hello<p>world");
        assert_eq!(doc.count("h1"), 1);
        assert!(doc.text().word_count >= 2);
    }

    #[test]
    fn body_text_skips_scripts_and_styles() {
        let doc = Document::parse(
            "https://example.com",
            "<body><script>var x = 1;</script><style>.a{}</style><p>visible</p></body>",
        );
        assert_eq!(doc.text().text, "visible");
    }

    #[test]
    fn https_detection() {
        let secure = Document::parse("https://example.com", "<p>x</p>");
        let insecure = Document::parse("http://example.com", "<p>x</p>");
        let garbage = Document::parse("not a url", "<p>x</p>");
        assert!(secure.is_https());
        assert!(!insecure.is_https());
        assert!(!garbage.is_https());
    }

    #[test]
    fn internal_links_cover_relative_and_same_host() {
        let doc = Document::parse("https://example.com/post", "<a href='/a'>a</a>");
        assert!(doc.is_internal_link("/about"));
        assert!(doc.is_internal_link("https://example.com/other"));
        assert!(!doc.is_internal_link("https://elsewhere.com/x"));
    }

    #[test]
    fn lexical_diversity_of_empty_text_is_zero() {
        let ctx = TextContext::from_text("");
        assert_eq!(ctx.lexical_diversity(), 0.0);
        assert_eq!(ctx.word_count, 0);
    }

    #[test]
    fn meta_lookup() {
        let doc = Document::parse(
            "https://example.com",
            r#"<head><meta name="description" content="a summary"><meta property="og:title" content="T"></head>"#,
        );
        assert_eq!(doc.meta_name("description").as_deref(), Some("a summary"));
        assert_eq!(doc.meta_property("og:title").as_deref(), Some("T"));
        assert_eq!(doc.meta_name("keywords"), None);
    }
}
