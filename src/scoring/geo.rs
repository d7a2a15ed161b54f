//! GEO checklist scorer (scale 0-140)
//!
//! Generative-engine signals: 100 baseline points plus 40 advanced points.
//! Depth rewards are tiered and deliberately non-linear; a 2000-word piece
//! earns full credit where 1500 words earn partial credit, not a slope.

use super::{text, AxisScore, Checklist, GEO_MAX};
use crate::document::Document;

/// Score generative-engine signals on the 0-140 scale
pub fn score_geo(doc: &Document) -> AxisScore {
    let body = &doc.text().text;
    let words = doc.text().word_count;
    let mut list = Checklist::new();

    // Baseline (100 points)
    list.tiered(
        "word-depth",
        "Content depth by word count (500/1000/1500/2000 tiers)",
        word_depth_tier(words),
        20,
    );
    list.tiered(
        "media-richness",
        "Image richness (1/3/5 tiers)",
        media_tier(doc.count("img")),
        15,
    );
    list.check(
        "structure-combo",
        "Sections, headings, and bullet lists combined",
        10,
        has_structure_combo(doc),
    );
    list.check(
        "lexical-diversity",
        "Lexical diversity above 0.3",
        10,
        doc.text().lexical_diversity() > 0.3,
    );
    list.check(
        "fresh-recency",
        "Freshness markers with a recent year",
        10,
        text::has_freshness_markers(body) && text::mentions_recent_year(body),
    );
    list.tiered(
        "social-meta",
        "Open Graph and Twitter card completeness",
        social_meta_tier(doc),
        10,
    );
    list.tiered(
        "schema-depth",
        "Structured data with a specific schema type",
        schema_tier(doc),
        15,
    );
    list.check(
        "snippet-ready",
        "Speakable schema or snippet-style opening paragraph",
        10,
        is_snippet_ready(doc),
    );

    // Advanced (40 points)
    list.tiered(
        "long-form",
        "Long-form depth (full credit at 2000 words, partial at 1500)",
        long_form_tier(words),
        10,
    );
    list.check(
        "professional-data",
        "Table or chart co-occurring with statistics",
        8,
        has_professional_data(doc),
    );
    list.check(
        "infographic",
        "Five or more images alongside a chart or table",
        7,
        doc.count("img") >= 5 && has_chart_or_table(doc),
    );
    list.check(
        "video-embed",
        "Embedded video present",
        5,
        has_video_embed(doc),
    );
    list.check(
        "multilingual",
        "Signals in two or more languages",
        5,
        doc.count(r#"link[rel="alternate"][hreflang]"#) >= 2,
    );
    list.check(
        "update-cadence",
        "Explicit update-cadence language",
        5,
        text::has_update_cadence(body),
    );

    list.into_axis(GEO_MAX)
}

fn word_depth_tier(words: usize) -> u16 {
    match words {
        w if w >= 2000 => 20,
        w if w >= 1500 => 15,
        w if w >= 1000 => 10,
        w if w >= 500 => 5,
        _ => 0,
    }
}

fn media_tier(images: usize) -> u16 {
    match images {
        i if i >= 5 => 15,
        i if i >= 3 => 10,
        i if i >= 1 => 5,
        _ => 0,
    }
}

fn long_form_tier(words: usize) -> u16 {
    match words {
        w if w >= 2000 => 10,
        w if w >= 1500 => 5,
        _ => 0,
    }
}

fn has_structure_combo(doc: &Document) -> bool {
    let sections = doc.count("h2") + doc.count("section");
    let headings = doc.count("h2") + doc.count("h3");
    sections >= 3 && headings >= 4 && doc.exists("li")
}

fn social_meta_tier(doc: &Document) -> u16 {
    let og_basic = doc.meta_property("og:title").is_some()
        && doc.meta_property("og:description").is_some();
    let og_complete = og_basic
        && doc.meta_property("og:image").is_some()
        && doc.meta_property("og:url").is_some();
    let twitter = doc.meta_name("twitter:card").is_some();
    if og_complete && twitter {
        10
    } else if og_basic {
        5
    } else {
        0
    }
}

fn schema_tier(doc: &Document) -> u16 {
    if doc.has_schema_type(&["Article", "FAQPage", "HowTo", "Product", "Review"]) {
        15
    } else if !doc.json_ld_blocks().is_empty() {
        8
    } else {
        0
    }
}

fn is_snippet_ready(doc: &Document) -> bool {
    if doc.has_schema_type(&["speakable", "SpeakableSpecification"]) {
        return true;
    }
    doc.first_text("p")
        .map(|p| (50..=300).contains(&p.chars().count()))
        .unwrap_or(false)
}

fn has_chart_or_table(doc: &Document) -> bool {
    doc.exists("table") || doc.exists("canvas") || doc.exists(r#"[class*="chart"]"#)
}

fn has_professional_data(doc: &Document) -> bool {
    has_chart_or_table(doc) && text::has_statistics(&doc.text().text)
}

fn has_video_embed(doc: &Document) -> bool {
    doc.exists("video")
        || doc
            .select_all("iframe")
            .iter()
            .filter_map(|f| f.value().attr("src"))
            .any(|src| src.contains("youtube") || src.contains("vimeo"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_depth_tiers_are_non_linear() {
        assert_eq!(word_depth_tier(499), 0);
        assert_eq!(word_depth_tier(500), 5);
        assert_eq!(word_depth_tier(1000), 10);
        assert_eq!(word_depth_tier(1500), 15);
        assert_eq!(word_depth_tier(2000), 20);
        assert_eq!(long_form_tier(1999), 5);
        assert_eq!(long_form_tier(2000), 10);
        assert_eq!(long_form_tier(1499), 0);
    }

    #[test]
    fn empty_document_scores_zero() {
        let doc = Document::parse("https://example.com", "");
        let axis = score_geo(&doc);
        assert_eq!(axis.raw, 0);
    }

    #[test]
    fn professional_data_requires_cooccurrence() {
        let table_only = Document::parse("https://e.com", "<table><tr><td>a</td></tr></table>");
        assert!(!has_professional_data(&table_only));

        let both = Document::parse(
            "https://e.com",
            "<table><tr><td>a</td></tr></table><p>adoption grew 25% in a year</p>",
        );
        assert!(has_professional_data(&both));
    }

    #[test]
    fn video_embed_detects_youtube_iframe() {
        let doc = Document::parse(
            "https://e.com",
            r#"<iframe src="https://www.youtube.com/embed/xyz"></iframe>"#,
        );
        assert!(has_video_embed(&doc));
        let plain = Document::parse("https://e.com", r#"<iframe src="/widget"></iframe>"#);
        assert!(!has_video_embed(&plain));
    }

    #[test]
    fn social_meta_tiers() {
        let basic = Document::parse(
            "https://e.com",
            r#"<head><meta property="og:title" content="t"><meta property="og:description" content="d"></head>"#,
        );
        assert_eq!(social_meta_tier(&basic), 5);

        let complete = Document::parse(
            "https://e.com",
            r#"<head>
<meta property="og:title" content="t"><meta property="og:description" content="d">
<meta property="og:image" content="i"><meta property="og:url" content="u">
<meta name="twitter:card" content="summary">
</head>"#,
        );
        assert_eq!(social_meta_tier(&complete), 10);
    }

    #[test]
    fn axis_never_exceeds_140() {
        let doc = Document::parse("https://example.com", "");
        let axis = score_geo(&doc);
        assert_eq!(axis.max, 140);
        assert!(axis.raw <= 140);
    }
}
