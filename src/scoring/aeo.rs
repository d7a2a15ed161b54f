//! AEO checklist scorer (scale 0-130)
//!
//! Answer-engine signals: 100 baseline points plus 30 advanced points for
//! content shapes that answer engines can lift directly (attributed Q&A,
//! genuine step-by-step guides, real comparisons, case studies).

use super::{text, AxisScore, Checklist, AEO_MAX};
use crate::document::Document;
use scraper::Selector;

/// Score answer-engine signals on the 0-130 scale
pub fn score_aeo(doc: &Document) -> AxisScore {
    let body = &doc.text().text;
    let mut list = Checklist::new();

    // Baseline (100 points)
    list.check(
        "question-content",
        "Question-form content present",
        15,
        text::has_question_content(body),
    );
    list.check("faq-block", "FAQ section or FAQPage schema", 15, has_faq(doc));
    list.check(
        "answer-shape",
        "Structured answer shape (H2 + H3 + list)",
        15,
        has_answer_shape(doc),
    );
    list.check(
        "word-floor",
        "At least 300 words of content",
        10,
        doc.text().word_count >= 300,
    );
    list.check(
        "definition-table",
        "Definition list or table present",
        10,
        doc.exists("dl") || doc.exists("table"),
    );
    list.check(
        "freshness",
        "Freshness markers present",
        10,
        text::has_freshness_markers(body) || doc.exists("time"),
    );
    list.check(
        "glossary",
        "Abbreviation or glossary markers",
        10,
        text::has_glossary_markers(body) || doc.exists("abbr"),
    );
    list.check(
        "statistics",
        "Statistics present",
        8,
        text::has_statistics(body),
    );
    list.check(
        "quotation",
        "Quotations present",
        7,
        text::has_quotation(body) || doc.exists("blockquote"),
    );

    // Advanced (30 points)
    list.check(
        "author-qa",
        "Author-attributed Q&A",
        7,
        text::has_question_content(body) && has_author_attribution(doc),
    );
    list.check(
        "step-guide",
        "Step-by-step guide with substantial steps",
        8,
        has_substantial_step_guide(doc),
    );
    list.check(
        "comparison",
        "Comparison table or list keyed to comparison keywords",
        8,
        has_genuine_comparison(doc),
    );
    list.check(
        "case-study",
        "Case-study markers present",
        7,
        text::has_case_study_markers(body),
    );

    list.into_axis(AEO_MAX)
}

fn has_faq(doc: &Document) -> bool {
    doc.has_schema_type(&["FAQPage"])
        || doc.exists(r#"[class*="faq"]"#)
        || doc.exists("#faq")
        || doc.text().text.to_lowercase().contains("frequently asked")
        || doc.text().text.contains("자주 묻는 질문")
}

fn has_answer_shape(doc: &Document) -> bool {
    doc.count("h2") >= 1 && doc.count("h3") >= 1 && (doc.exists("ul") || doc.exists("ol"))
}

fn has_author_attribution(doc: &Document) -> bool {
    doc.meta_name("author").is_some()
        || doc.exists(r#"[class*="author"]"#)
        || doc.exists(r#"[rel="author"]"#)
        || doc.exists(r#"[class*="byline"]"#)
}

/// A genuine guide: an ordered list where at least five items each carry
/// more than 50 characters of explanation
fn has_substantial_step_guide(doc: &Document) -> bool {
    let li = Selector::parse("li").unwrap();
    doc.select_all("ol").iter().any(|ol| {
        let substantial = ol
            .select(&li)
            .filter(|item| {
                item.text().collect::<String>().trim().chars().count() > 50
            })
            .count();
        substantial >= 5
    })
}

/// A comparison structure must be keyed to comparison language, not just
/// any table on the page
fn has_genuine_comparison(doc: &Document) -> bool {
    let structured = doc.exists("table") || doc.count("ul") >= 1;
    structured && text::has_comparison_keywords(&doc.text().text)
}
