//! Blog platform detection
//!
//! Classifies a (URL, HTML) pair into a platform and confidence. Two
//! independent signal sources are fused by an ordered priority chain:
//! URL evidence is least ambiguous and wins outright when strong, HTML
//! evidence corroborates, and weak co-occurrence alone never beats the
//! "generic site" default.

use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

/// Recognized blogging platforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Naver,
    Tistory,
    Brunch,
    Wordpress,
    Medium,
    Velog,
    None,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Naver => write!(f, "Naver Blog"),
            Platform::Tistory => write!(f, "Tistory"),
            Platform::Brunch => write!(f, "Brunch"),
            Platform::Wordpress => write!(f, "WordPress"),
            Platform::Medium => write!(f, "Medium"),
            Platform::Velog => write!(f, "Velog"),
            Platform::None => write!(f, "None"),
        }
    }
}

/// A classified platform with confidence and the indicators that matched
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPlatform {
    /// Platform type
    #[serde(rename = "type")]
    pub kind: Platform,
    /// Confidence in [0, 1]
    pub confidence: f32,
    /// Ordered list of matched indicators
    pub indicators: Vec<String>,
}

/// Result of platform detection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogDetectionResult {
    /// Whether the document is recognized blog content
    pub is_blog: bool,
    /// Detected platform
    pub platform: BlogPlatform,
    /// Which fusion rule decided the classification
    pub reason: String,
}

/// Platform domain table: (domain substring, platform, base confidence).
/// Immutable, loaded once, referenced by value.
const PLATFORM_DOMAINS: &[(&str, Platform, f32)] = &[
    ("blog.naver.com", Platform::Naver, 0.95),
    ("tistory.com", Platform::Tistory, 0.90),
    ("brunch.co.kr", Platform::Brunch, 0.90),
    ("wordpress.com", Platform::Wordpress, 0.85),
    ("medium.com", Platform::Medium, 0.90),
    ("velog.io", Platform::Velog, 0.90),
];

/// Keywords a `generator` meta tag may carry per platform
const GENERATOR_KEYWORDS: &[(&str, Platform)] = &[
    ("tistory", Platform::Tistory),
    ("wordpress", Platform::Wordpress),
    ("medium", Platform::Medium),
    ("brunch", Platform::Brunch),
    ("velog", Platform::Velog),
    ("naver", Platform::Naver),
];

const GENERATOR_CONFIDENCE: f32 = 0.80;
const COOCCURRENCE_CONFIDENCE: f32 = 0.70;
const AGREEMENT_BOOST: f32 = 0.10;
const STRONG_URL_THRESHOLD: f32 = 0.85;
const WEAK_THRESHOLD: f32 = 0.70;
const NONE_CONFIDENCE: f32 = 0.9;

/// One evidence signal from a single source
#[derive(Debug, Clone)]
struct Signal {
    platform: Platform,
    confidence: f32,
    indicator: String,
}

/// Detect the blog platform for a (URL, HTML) pair
pub fn detect(url: &str, html: &str) -> BlogDetectionResult {
    let url_signal = url_signal(url);
    let html_signal = html_signal(html);

    // Priority chain: each rule either decides or passes to the next.
    if let Some(result) = rule_strong_url(&url_signal) {
        return result;
    }
    if let Some(result) = rule_html(&html_signal, &url_signal) {
        return result;
    }
    if let Some(result) = rule_weak_url(&url_signal) {
        return result;
    }
    rule_default()
}

/// Rule a: a strong URL match is authoritative, no HTML check needed
fn rule_strong_url(url_signal: &Option<Signal>) -> Option<BlogDetectionResult> {
    let sig = url_signal.as_ref()?;
    if sig.confidence < STRONG_URL_THRESHOLD {
        return None;
    }
    Some(accept(sig.clone(), "strong URL match"))
}

/// Rule b: HTML evidence decides, boosted when the URL signal agrees
fn rule_html(
    html_signal: &Option<Signal>,
    url_signal: &Option<Signal>,
) -> Option<BlogDetectionResult> {
    let sig = html_signal.as_ref()?;
    if sig.confidence < WEAK_THRESHOLD {
        return None;
    }
    let mut sig = sig.clone();
    if let Some(url_sig) = url_signal {
        if url_sig.platform == sig.platform {
            sig.confidence = (sig.confidence + AGREEMENT_BOOST).min(1.0);
            sig.indicator = format!("{}; URL agrees", sig.indicator);
        }
    }
    Some(accept(sig, "HTML match"))
}

/// Rule c: a weak URL-only match still classifies
fn rule_weak_url(url_signal: &Option<Signal>) -> Option<BlogDetectionResult> {
    let sig = url_signal.as_ref()?;
    if sig.confidence < WEAK_THRESHOLD {
        return None;
    }
    Some(accept(sig.clone(), "weak URL match"))
}

/// Rule d: high confidence that this is not a recognized blog
fn rule_default() -> BlogDetectionResult {
    BlogDetectionResult {
        is_blog: false,
        platform: BlogPlatform {
            kind: Platform::None,
            confidence: NONE_CONFIDENCE,
            indicators: Vec::new(),
        },
        reason: "no platform indicators".to_string(),
    }
}

fn accept(sig: Signal, reason: &str) -> BlogDetectionResult {
    BlogDetectionResult {
        is_blog: true,
        platform: BlogPlatform {
            kind: sig.platform,
            confidence: sig.confidence,
            indicators: vec![sig.indicator],
        },
        reason: reason.to_string(),
    }
}

/// URL signal: hostname substring match against the platform domain table
fn url_signal(url: &str) -> Option<Signal> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?.to_lowercase();
    PLATFORM_DOMAINS
        .iter()
        .find(|(domain, _, _)| host == *domain || host.ends_with(&format!(".{}", domain)))
        .map(|(domain, platform, confidence)| Signal {
            platform: *platform,
            confidence: *confidence,
            indicator: format!("hostname matches {}", domain),
        })
}

/// HTML signal: generator meta beats co-occurrence; only the strongest
/// matching platform is kept, never a sum of partial matches.
fn html_signal(html: &str) -> Option<Signal> {
    generator_signal(html).or_else(|| cooccurrence_signal(html))
}

fn generator_signal(html: &str) -> Option<Signal> {
    let re =
        Regex::new(r#"(?i)<meta[^>]+name=["']generator["'][^>]+content=["']([^"']+)["']"#).unwrap();
    let alt =
        Regex::new(r#"(?i)<meta[^>]+content=["']([^"']+)["'][^>]+name=["']generator["']"#).unwrap();
    let content = re
        .captures(html)
        .or_else(|| alt.captures(html))
        .map(|c| c[1].to_lowercase())?;
    GENERATOR_KEYWORDS
        .iter()
        .find(|(keyword, _)| content.contains(keyword))
        .map(|(keyword, platform)| Signal {
            platform: *platform,
            confidence: GENERATOR_CONFIDENCE,
            indicator: format!("generator meta contains '{}'", keyword),
        })
}

/// Co-occurrence requires the platform's domain string in the markup
/// together with a blog/post marker. Free-text platform names never match,
/// so "naver" and "blog" appearing as separate words on a shopping site
/// cannot classify.
fn cooccurrence_signal(html: &str) -> Option<Signal> {
    let lower = html.to_lowercase();
    let blog_marker =
        Regex::new(r#"og:type["'][^>]*["']article|class=["'][^"']*\b(blog|post)\b|/blog/|/post/"#)
            .unwrap();
    if !blog_marker.is_match(&lower) {
        return None;
    }
    PLATFORM_DOMAINS
        .iter()
        .find(|(domain, _, _)| lower.contains(domain))
        .map(|(domain, platform, _)| Signal {
            platform: *platform,
            confidence: COOCCURRENCE_CONFIDENCE,
            indicator: format!("markup references {} with blog markers", domain),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_all_platform_urls_with_high_confidence() {
        let cases = [
            ("https://blog.naver.com/someone/223", Platform::Naver),
            ("https://mysite.tistory.com/42", Platform::Tistory),
            ("https://brunch.co.kr/@writer/12", Platform::Brunch),
            ("https://myblog.wordpress.com/2024/01/post", Platform::Wordpress),
            ("https://medium.com/@author/title-abc", Platform::Medium),
            ("https://velog.io/@dev/rust-post", Platform::Velog),
        ];
        for (url, expected) in cases {
            let result = detect(url, "<html></html>");
            assert!(result.is_blog, "{} should be a blog", url);
            assert_eq!(result.platform.kind, expected, "{}", url);
            assert!(
                result.platform.confidence >= 0.85,
                "{} confidence {} should be >= 0.85",
                url,
                result.platform.confidence
            );
        }
    }

    #[test]
    fn generic_domains_classify_as_none() {
        for url in ["https://company.com/about", "https://example.com"] {
            let result = detect(url, "<html><body><p>About us</p></body></html>");
            assert!(!result.is_blog);
            assert_eq!(result.platform.kind, Platform::None);
            assert!((result.platform.confidence - 0.9).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn free_text_cooccurrence_does_not_classify() {
        // Regression guard: "naver" and "blog" as separate words on a
        // shopping site must not produce a naver classification.
        let html = r#"<html><body>
            <p>Visit our blog for deals. We also sell on naver shopping.</p>
            <div class="blog-promo">naver pay accepted</div>
        </body></html>"#;
        let result = detect("https://shopping-site.com/deals", html);
        assert_ne!(result.platform.kind, Platform::Naver);
        assert!(!result.is_blog);
    }

    #[test]
    fn generator_meta_classifies_on_generic_domain() {
        let html = r#"<html><head><meta name="generator" content="WordPress 6.4"></head></html>"#;
        let result = detect("https://custom-domain.com/post", html);
        assert!(result.is_blog);
        assert_eq!(result.platform.kind, Platform::Wordpress);
        assert!((result.platform.confidence - 0.80).abs() < 1e-6);
    }

    #[test]
    fn agreement_boost_caps_at_one() {
        let html_sig = Some(Signal {
            platform: Platform::Wordpress,
            confidence: 0.95,
            indicator: "generator".into(),
        });
        let url_sig = Some(Signal {
            platform: Platform::Wordpress,
            confidence: 0.60,
            indicator: "host".into(),
        });
        let result = rule_html(&html_sig, &url_sig).unwrap();
        assert!((result.platform.confidence - 1.0).abs() < 1e-6);
    }

    #[test]
    fn cooccurrence_with_domain_reference_classifies() {
        let html = r#"<html><body>
            <a href="https://myname.tistory.com/archive" class="blog-link">my blog</a>
        </body></html>"#;
        let result = detect("https://custom-domain.com/", html);
        assert!(result.is_blog);
        assert_eq!(result.platform.kind, Platform::Tistory);
        assert!((result.platform.confidence - 0.70).abs() < 1e-6);
    }

    #[test]
    fn url_wins_over_conflicting_generator() {
        let html = r#"<html><head><meta name="generator" content="WordPress 6.4"></head></html>"#;
        let result = detect("https://medium.com/@a/post", html);
        assert_eq!(result.platform.kind, Platform::Medium);
        assert_eq!(result.reason, "strong URL match");
    }
}
