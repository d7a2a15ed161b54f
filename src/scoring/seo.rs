//! SEO checklist scorer (scale 0-120)
//!
//! 100 points of baseline signals plus 20 points of advanced signals.

use super::{AxisScore, Checklist, SEO_MAX};
use crate::document::Document;

/// Score traditional search-engine signals on the 0-120 scale
pub fn score_seo(doc: &Document) -> AxisScore {
    let mut list = Checklist::new();

    // Baseline (100 points)
    list.check(
        "single-h1",
        "Exactly one H1 heading",
        12,
        doc.count("h1") == 1,
    );
    list.check(
        "title-length",
        "Title between 30 and 60 characters",
        10,
        title_length_ok(doc),
    );
    list.check(
        "meta-description",
        "Meta description between 70 and 160 characters",
        10,
        description_length_ok(doc),
    );
    list.check(
        "alt-coverage",
        "At least 80% of images carry alt text",
        10,
        alt_coverage_ok(doc),
    );
    list.check(
        "structured-data",
        "JSON-LD structured data present",
        12,
        !doc.json_ld_blocks().is_empty(),
    );
    list.check(
        "keywords-meta",
        "Keywords meta tag present",
        8,
        doc.meta_name("keywords").is_some(),
    );
    list.check(
        "og-title",
        "Open Graph title present",
        8,
        doc.meta_property("og:title").is_some(),
    );
    list.check(
        "canonical",
        "Canonical link present",
        10,
        doc.exists(r#"link[rel="canonical"]"#),
    );
    list.check(
        "internal-links",
        "Internal links present",
        10,
        has_internal_links(doc),
    );
    list.check(
        "h2-present",
        "At least one H2 heading",
        10,
        doc.count("h2") >= 1,
    );

    // Advanced (20 points)
    list.check(
        "sitemap-robots",
        "Sitemap or robots hints present",
        5,
        has_sitemap_hints(doc),
    );
    list.check(
        "breadcrumb",
        "Breadcrumb structure present",
        5,
        has_breadcrumb(doc),
    );
    list.check(
        "hreflang-lang",
        "hreflang links or lang attribute present",
        5,
        has_language_markup(doc),
    );
    list.check(
        "og-complete",
        "Complete Open Graph set (title, description, image, url)",
        5,
        has_complete_open_graph(doc),
    );

    list.into_axis(SEO_MAX)
}

fn title_length_ok(doc: &Document) -> bool {
    doc.first_text("head > title")
        .or_else(|| doc.first_text("title"))
        .map(|t| (30..=60).contains(&t.chars().count()))
        .unwrap_or(false)
}

fn description_length_ok(doc: &Document) -> bool {
    doc.meta_name("description")
        .map(|d| (70..=160).contains(&d.chars().count()))
        .unwrap_or(false)
}

fn alt_coverage_ok(doc: &Document) -> bool {
    let images = doc.select_all("img");
    if images.is_empty() {
        // No images counts as full coverage
        return true;
    }
    let with_alt = images
        .iter()
        .filter(|img| {
            img.value()
                .attr("alt")
                .map(|a| !a.trim().is_empty())
                .unwrap_or(false)
        })
        .count();
    with_alt as f64 / images.len() as f64 >= 0.8
}

fn has_internal_links(doc: &Document) -> bool {
    doc.link_hrefs().iter().any(|h| doc.is_internal_link(h))
}

fn has_sitemap_hints(doc: &Document) -> bool {
    doc.exists(r#"link[rel="sitemap"]"#)
        || doc.meta_name("robots").is_some()
        || doc.link_hrefs().iter().any(|h| h.contains("sitemap.xml"))
}

fn has_breadcrumb(doc: &Document) -> bool {
    doc.has_schema_type(&["BreadcrumbList"])
        || doc.exists(r#"[class*="breadcrumb"]"#)
        || doc.exists(r#"nav[aria-label="breadcrumb"]"#)
}

fn has_language_markup(doc: &Document) -> bool {
    doc.exists(r#"link[rel="alternate"][hreflang]"#) || doc.first_attr("html", "lang").is_some()
}

/// The full quadruple must be present simultaneously, not just one part
fn has_complete_open_graph(doc: &Document) -> bool {
    ["og:title", "og:description", "og:image", "og:url"]
        .iter()
        .all(|p| doc.meta_property(p).is_some())
}
