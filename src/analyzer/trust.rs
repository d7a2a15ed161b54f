//! Trust signal analysis (E-E-A-T, business legitimacy, security)
//!
//! Each E-E-A-T sub-score is an independent additive checklist capped at
//! 100 by construction. Trust is scored; security is reported as flags and
//! feeds insight generation, never the score.

use crate::document::Document;
use crate::scoring::text;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// E-E-A-T sub-scores, business-legitimacy flags, and security flags
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustSignalsAnalysis {
    /// First-hand experience markers, 0-100
    pub experience: u8,
    /// Credential and depth markers, 0-100
    pub expertise: u8,
    /// Citation and reputation markers, 0-100
    pub authoritativeness: u8,
    /// Transparency and hygiene markers, 0-100
    pub trustworthiness: u8,
    /// Arithmetic mean of the four sub-scores
    pub overall: u8,

    // Business legitimacy
    pub has_contact_info: bool,
    pub has_about_page: bool,
    pub has_terms_of_service: bool,
    pub has_business_registration: bool,
    pub has_customer_support: bool,

    // Security (reported, not scored)
    pub has_ssl: bool,
    pub has_security_badge: bool,
    pub has_privacy_policy: bool,
}

/// Analyze trust signals for a document and its URL
pub fn analyze_trust(doc: &Document) -> TrustSignalsAnalysis {
    let experience = experience_score(doc);
    let expertise = expertise_score(doc);
    let authoritativeness = authoritativeness_score(doc);
    let trustworthiness = trustworthiness_score(doc);
    // Simple mean so no single dimension can dominate
    let overall = ((experience as u16 + expertise as u16 + authoritativeness as u16
        + trustworthiness as u16)
        / 4) as u8;

    let body = &doc.text().text;
    TrustSignalsAnalysis {
        experience,
        expertise,
        authoritativeness,
        trustworthiness,
        overall,
        has_contact_info: has_contact_info(doc),
        has_about_page: has_about_page(doc),
        has_terms_of_service: link_or_text(doc, r"(?i)terms of (service|use)|이용약관"),
        has_business_registration: Regex::new(r"(?i)(business registration|registration no|vat|사업자\s*등록번호)")
            .unwrap()
            .is_match(body),
        has_customer_support: link_or_text(doc, r"(?i)customer (support|service)|help center|고객센터"),
        has_ssl: doc.is_https(),
        has_security_badge: has_security_badge(doc),
        has_privacy_policy: has_privacy_policy(doc),
    }
}

/// Experience: first-hand usage markers (weights sum to 100)
fn experience_score(doc: &Document) -> u8 {
    let body = &doc.text().text;
    let mut score = 0u8;
    if Regex::new(r"(?i)\b(my experience|i (tested|tried|used|reviewed)|hands[- ]on|직접|후기)\b")
        .unwrap()
        .is_match(body)
    {
        score += 30;
    }
    if Regex::new(r"(?i)\b(for example|case|in practice|we found|사례|실제)\b")
        .unwrap()
        .is_match(body)
    {
        score += 25;
    }
    if text::has_freshness_markers(body) {
        score += 20;
    }
    if doc.count("img") >= 3 {
        score += 25;
    }
    score
}

/// Expertise: credentials, attribution, and technical depth
fn expertise_score(doc: &Document) -> u8 {
    let body = &doc.text().text;
    let mut score = 0u8;
    if Regex::new(r"(?i)\b(ph\.?d|m\.?d\.|certified|engineer|specialist|expert|전문가|박사|경력)\b")
        .unwrap()
        .is_match(body)
    {
        score += 30;
    }
    if doc.meta_name("author").is_some()
        || doc.exists(r#"[class*="author"]"#)
        || doc.exists(r#"[rel="author"]"#)
    {
        score += 25;
    }
    if text::has_methodology_language(body) || text::has_glossary_markers(body) {
        score += 20;
    }
    if Regex::new(r"(?i)\b(according to|rfc \d|ieee|iso \d|official (docs|documentation)|표준)\b")
        .unwrap()
        .is_match(body)
    {
        score += 25;
    }
    score
}

/// Authoritativeness: citations, awards, institutional references
fn authoritativeness_score(doc: &Document) -> u8 {
    let body = &doc.text().text;
    let external = doc.external_links();
    let mut score = 0u8;
    if external
        .iter()
        .any(|h| h.contains(".edu") || h.contains(".gov") || h.contains(".org"))
    {
        score += 30;
    }
    if Regex::new(r"(?i)\b(award|featured in|as seen on|recognized by|수상|선정)\b")
        .unwrap()
        .is_match(body)
    {
        score += 25;
    }
    if has_about_page(doc) {
        score += 20;
    }
    if external.len() >= 3 {
        score += 25;
    }
    score
}

/// Trustworthiness: protocol, policy, contact, recency
fn trustworthiness_score(doc: &Document) -> u8 {
    let mut score = 0u8;
    if doc.is_https() {
        score += 30;
    }
    if has_privacy_policy(doc) {
        score += 25;
    }
    if has_contact_info(doc) {
        score += 25;
    }
    if text::has_freshness_markers(&doc.text().text)
        && text::mentions_recent_year(&doc.text().text)
    {
        score += 20;
    }
    score
}

/// True when the pattern matches the body text or any link href
fn link_or_text(doc: &Document, pattern: &str) -> bool {
    match Regex::new(pattern) {
        Ok(re) => {
            re.is_match(&doc.text().text)
                || doc.link_hrefs().iter().any(|h| re.is_match(h))
        }
        Err(_) => false,
    }
}

fn has_contact_info(doc: &Document) -> bool {
    let body = &doc.text().text;
    Regex::new(r"(?i)\b(contact( us)?|연락처|문의)\b")
        .unwrap()
        .is_match(body)
        || doc
            .link_hrefs()
            .iter()
            .any(|h| h.starts_with("mailto:") || h.starts_with("tel:") || h.contains("/contact"))
}

fn has_about_page(doc: &Document) -> bool {
    doc.link_hrefs().iter().any(|h| h.contains("/about"))
        || Regex::new(r"(?i)\babout (us|the (author|team))\b")
            .unwrap()
            .is_match(&doc.text().text)
}

fn has_security_badge(doc: &Document) -> bool {
    doc.exists(r#"[class*="security-badge"]"#)
        || doc.exists(r#"[class*="trust-badge"]"#)
        || doc.exists(r#"[class*="ssl-badge"]"#)
}

fn has_privacy_policy(doc: &Document) -> bool {
    doc.link_hrefs().iter().any(|h| h.contains("privacy"))
        || Regex::new(r"(?i)\bprivacy policy\b|개인정보\s*처리방침")
            .unwrap()
            .is_match(&doc.text().text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECURE_PAGE: &str = r#"<html><body>
        <a href="/privacy">Privacy Policy</a>
        <div class="security-badge">Secured</div>
        <a href="/contact">Contact us</a>
    </body></html>"#;

    #[test]
    fn https_with_policy_and_badge_sets_all_security_flags() {
        let doc = Document::parse("https://example.com/page", SECURE_PAGE);
        let t = analyze_trust(&doc);
        assert!(t.has_ssl);
        assert!(t.has_security_badge);
        assert!(t.has_privacy_policy);
    }

    #[test]
    fn http_variant_only_loses_the_ssl_flag() {
        let doc = Document::parse("http://example.com/page", SECURE_PAGE);
        let t = analyze_trust(&doc);
        assert!(!t.has_ssl);
        assert!(t.has_security_badge);
        assert!(t.has_privacy_policy);
    }

    #[test]
    fn sub_scores_stay_within_bounds() {
        let doc = Document::parse("https://example.com", "");
        let t = analyze_trust(&doc);
        for v in [t.experience, t.expertise, t.authoritativeness, t.trustworthiness] {
            assert!(v <= 100);
        }
        assert!(t.overall <= 100);
    }

    #[test]
    fn overall_is_the_mean_of_the_four() {
        let doc = Document::parse("https://example.com/page", SECURE_PAGE);
        let t = analyze_trust(&doc);
        let mean = (t.experience as u16
            + t.expertise as u16
            + t.authoritativeness as u16
            + t.trustworthiness as u16)
            / 4;
        assert_eq!(t.overall as u16, mean);
    }

    #[test]
    fn experience_markers_add_up() {
        let html = r#"<body>
            <p>I tested this router for example in practice, updated 2024-01-10.</p>
            <img src="a.png"><img src="b.png"><img src="c.png">
        </body>"#;
        let doc = Document::parse("https://example.com", html);
        let t = analyze_trust(&doc);
        assert_eq!(t.experience, 100);
    }

    #[test]
    fn empty_document_scores_zero_trust() {
        let doc = Document::parse("http://example.com", "");
        let t = analyze_trust(&doc);
        assert_eq!(t.overall, 0);
        assert!(!t.has_contact_info);
    }
}
