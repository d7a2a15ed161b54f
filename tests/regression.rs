//! Regression guards for behaviors that have bitten us before

use geolens::analyzer::AnalysisEngine;
use geolens::config::ScoringOptions;
use geolens::detector::{detect, Platform};
use geolens::revision::{build_revision_prompt, RevisionRequest};
use geolens::scoring::normalize_score;

/// Free-text mentions of a platform name near the word "blog" once
/// misclassified ordinary review pages as platform blogs.
#[test]
fn platform_name_in_prose_is_not_a_platform_match() {
    let html = r#"<html><body>
        <h1>Comparing Korean platforms</h1>
        <p>Many people start a blog on naver or tistory, but this page is
        hosted on our own site and merely discusses those blog platforms.</p>
    </body></html>"#;
    let detection = detect("https://review-site.com/platforms", html);
    assert!(!detection.is_blog, "prose mention must not classify: {}", detection.reason);
    assert_eq!(detection.platform.kind, Platform::None);
}

/// Markup containing the platform domain plus blog markers still counts.
#[test]
fn embedded_platform_domain_with_blog_markers_counts() {
    let html = r#"<html><body>
        <div class="blog-post">
            <img src="https://blogfiles.pstatic.net/x.png">
            <a href="https://blog.naver.com/original">원문 보기</a>
        </div>
    </body></html>"#;
    let detection = detect("https://mirror.example.com/copy", html);
    assert!(detection.is_blog);
    assert_eq!(detection.platform.kind, Platform::Naver);
}

/// Normalization is round-half-up on the extended scales.
#[test]
fn normalization_rounding_fixed_points() {
    assert_eq!(normalize_score(120, 120), 100);
    assert_eq!(normalize_score(60, 120), 50);
    assert_eq!(normalize_score(61, 120), 51);
    assert_eq!(normalize_score(0, 120), 0);
}

/// The https flag must track the URL scheme exactly; everything else about
/// the page is identical.
#[test]
fn scheme_is_the_only_difference_between_http_and_https_results() {
    let html = r#"<body><a href="/privacy">Privacy</a><a href="/contact">Contact</a></body>"#;
    let engine = AnalysisEngine::new();
    let secure = engine.analyze("https://example.com/p", html);
    let insecure = engine.analyze("http://example.com/p", html);

    assert!(secure.trust.has_ssl);
    assert!(!insecure.trust.has_ssl);
    assert!(secure.trust.has_privacy_policy && insecure.trust.has_privacy_policy);
    assert_eq!(secure.seo_score, insecure.seo_score);
    assert_eq!(secure.aeo_score, insecure.aeo_score);
    assert_eq!(secure.geo_score, insecure.geo_score);
}

/// The revision prompt once leaked raw tag soup from malformed documents.
#[test]
fn revision_prompt_never_contains_markup() {
    let html = r#"<h1>T</h1><p>body <span style="x">styled</span></p>
        <script>secret();</script><div class="widget"><img src="x.png"></div>"#;
    let engine = AnalysisEngine::new();
    let request = RevisionRequest {
        original_content: html.to_string(),
        analysis: engine.analyze("https://example.com", html),
        url: "https://example.com".to_string(),
    };
    let prompt = build_revision_prompt(&request, &ScoringOptions::default());

    assert!(!prompt.contains("<span"));
    assert!(!prompt.contains("<script"));
    assert!(!prompt.contains("secret()"));
    assert!(prompt.contains("plain text only"));
    assert!(prompt.contains("Preserve structure"));
}

/// Overall grade boundaries must not drift.
#[test]
fn empty_and_insecure_page_is_an_f_with_high_severity_insights() {
    let result = AnalysisEngine::new().analyze("http://example.com", "");
    assert!(result.overall_score < 60);
    assert_eq!(result.grade, geolens::Grade::F);
    assert!(result
        .insights
        .iter()
        .any(|i| i.severity == geolens::Severity::High));
}

/// Generator meta must win over the weak co-occurrence rule.
#[test]
fn generator_meta_beats_cooccurrence() {
    let html = r#"<html><head>
        <meta name="generator" content="WordPress 6.4">
    </head><body><p>We also mention tistory.com in our blog comparison.</p></body></html>"#;
    let detection = detect("https://selfhosted.example.com", html);
    assert_eq!(detection.platform.kind, Platform::Wordpress);
    assert!((detection.platform.confidence - 0.80).abs() < 1e-6);
}

/// A strong URL match is authoritative even when the HTML agrees; the
/// table confidence is reported unchanged.
#[test]
fn strong_url_match_reports_table_confidence_unchanged() {
    let html = r#"<html><head><meta name="generator" content="Tistory"></head>
        <body class="blog-post"><p>글</p></body></html>"#;
    let detection = detect("https://someone.tistory.com/42", html);
    assert_eq!(detection.platform.kind, Platform::Tistory);
    assert!((detection.platform.confidence - 0.90).abs() < 1e-6);
    assert_eq!(detection.reason, "strong URL match");
}
