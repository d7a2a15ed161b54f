//! Edge cases: malformed input, empty documents, odd URLs

use geolens::analyzer::AnalysisEngine;
use geolens::config::ScoringOptions;
use geolens::document::Document;
use geolens::{analyze_html, Grade};

#[test]
fn empty_document_analyzes_without_panicking() {
    let result = AnalysisEngine::new().analyze("https://example.com", "");
    assert_eq!(result.aeo_score, 0);
    assert_eq!(result.geo_score, 0);
    assert_eq!(result.grade, Grade::F);
    assert_eq!(result.trust.overall, 0);
}

#[test]
fn unclosed_tags_parse_leniently() {
    let html = "<h1>Title<h2>Section<p>text with <b>unclosed bold";
    let result = AnalysisEngine::new().analyze("https://example.com", html);
    assert!(result.structure.h1_count >= 1);
    assert!(result.overall_score <= 100);
}

#[test]
fn binary_garbage_does_not_panic() {
    let garbage = "\u{0}\u{1}\u{fffd}<<<>>>&&&;;;<html<body<div";
    let result = AnalysisEngine::new().analyze("https://example.com", garbage);
    assert!(result.overall_score <= 100);
}

#[test]
fn unparseable_url_still_analyzes() {
    let result = AnalysisEngine::new().analyze("not a url at all", "<h1>t</h1>");
    assert!(!result.trust.has_ssl);
    assert!(!result.detection.is_blog);
}

#[test]
fn file_path_as_url_is_not_https() {
    let result = AnalysisEngine::new().analyze("fixtures/page.html", "<h1>t</h1>");
    assert!(!result.trust.has_ssl);
}

#[test]
fn korean_content_hits_korean_keyword_alternates() {
    let html = r#"<html><body>
        <h1>공유기 가이드</h1>
        <p>자주 묻는 질문: 공유기란 무엇인가요? 연락처와 고객센터는 하단에 있습니다.</p>
        <p>이용약관 및 개인정보 처리방침을 확인하세요. 사업자 등록번호 123-45-67890.</p>
    </body></html>"#;
    let result = AnalysisEngine::new().analyze("https://example.co.kr/guide", html);
    assert!(result.trust.has_contact_info);
    assert!(result.trust.has_customer_support);
    assert!(result.trust.has_terms_of_service);
    assert!(result.trust.has_business_registration);
    assert!(result.trust.has_privacy_policy);
}

#[test]
fn script_and_style_content_never_counts_as_text() {
    let html = r#"<html><body>
        <script>var question = "What is this? FAQ glossary definition";</script>
        <style>.faq { color: red; }</style>
        <p>plain body</p>
    </body></html>"#;
    let doc = Document::parse("https://example.com", html);
    assert!(!doc.text().text.contains("glossary"));
    assert!(doc.text().text.contains("plain body"));
}

#[test]
fn very_large_document_scores_within_bounds() {
    let mut html = String::from("<html><body><h1>Big</h1>");
    for i in 0..2000 {
        html.push_str(&format!("<p>paragraph number {} with varied filler words</p>", i));
    }
    html.push_str("</body></html>");
    let result = AnalysisEngine::new().analyze("https://example.com/big", &html);
    assert!(result.seo_score <= 100);
    assert!(result.aeo_score <= 100);
    assert!(result.geo_score <= 100);
    for model in &result.aio_analysis.models {
        assert!(model.score <= 100);
    }
}

#[test]
fn duplicate_h1s_fail_the_single_h1_check() {
    let html = "<h1>One</h1><h1>Two</h1><h1>Three</h1>";
    let result = AnalysisEngine::new().analyze("https://example.com", html);
    let seo = &result.breakdown.seo;
    let single_h1 = seo.checks.iter().find(|c| c.id == "single-h1").unwrap();
    assert_eq!(single_h1.earned, 0);
}

#[test]
fn images_without_alt_fail_coverage_but_none_passes_vacuously() {
    let engine = AnalysisEngine::new();
    let with_bad_imgs = engine.analyze(
        "https://example.com",
        r#"<img src="a.png"><img src="b.png"><img src="c.png">"#,
    );
    let without_imgs = engine.analyze("https://example.com", "<p>no images</p>");

    let check = |r: &geolens::AnalysisResult| {
        r.breakdown
            .seo
            .checks
            .iter()
            .find(|c| c.id == "alt-coverage")
            .map(|c| c.passed())
            .unwrap()
    };
    assert!(!check(&with_bad_imgs));
    assert!(check(&without_imgs));
}

#[test]
fn grok_exclusion_flows_from_options_to_result() {
    let result = analyze_html(
        "https://example.com",
        "<h1>t</h1>",
        ScoringOptions {
            include_grok: false,
            ..ScoringOptions::default()
        },
    );
    assert!(result.aio_analysis.scores.grok.is_none());
    assert_eq!(result.aio_analysis.models.len(), 4);
}

#[test]
fn whitespace_only_document_behaves_like_empty() {
    let result = AnalysisEngine::new().analyze("https://example.com", "   \n\t  \n ");
    assert_eq!(result.aeo_score, 0);
    assert_eq!(result.structure.section_count, 0);
}
