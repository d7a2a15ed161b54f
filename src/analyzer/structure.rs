//! Content structure analysis
//!
//! Hierarchy quality is rewarded for conforming to a target shape (one H1,
//! several H2s, supporting H3/H4), not merely for having more headings.

use crate::document::Document;
use crate::scoring::text;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Heading hierarchy, sectioning, linking, and content-type flags
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentStructureAnalysis {
    pub h1_count: usize,
    pub h2_count: usize,
    pub h3_count: usize,
    pub h4_count: usize,
    /// Additive hierarchy checklist, 0-100
    pub hierarchy_score: u8,
    pub section_count: usize,
    /// Average section length in words
    pub avg_section_length: usize,
    /// internalLinks / totalLinks * 100, clamped; 0 when there are no links
    pub connectivity: u8,
    pub is_informational: bool,
    pub is_guide: bool,
    pub is_comparison: bool,
    pub is_news: bool,
    pub is_faq: bool,
}

/// Analyze heading hierarchy, sections, and coarse content-type flags
pub fn analyze_structure(doc: &Document) -> ContentStructureAnalysis {
    let h1_count = doc.count("h1");
    let h2_count = doc.count("h2");
    let h3_count = doc.count("h3");
    let h4_count = doc.count("h4");

    let hierarchy_score = hierarchy_score(h1_count, h2_count, h3_count, h4_count);

    let word_count = doc.text().word_count;
    let section_count = if h2_count > 0 {
        h2_count
    } else if word_count > 0 {
        1
    } else {
        0
    };
    let avg_section_length = if section_count > 0 {
        word_count / section_count
    } else {
        0
    };

    let body = &doc.text().text;
    ContentStructureAnalysis {
        h1_count,
        h2_count,
        h3_count,
        h4_count,
        hierarchy_score,
        section_count,
        avg_section_length,
        connectivity: connectivity(doc),
        is_informational: informational_re().is_match(body),
        is_guide: guide_re().is_match(body),
        is_comparison: text::has_comparison_keywords(body),
        is_news: news_re().is_match(body),
        is_faq: faq_re().is_match(body),
    }
}

/// Additive checklist: the target shape is one H1, three or more H2s,
/// five or more H3s, and any H4 depth
fn hierarchy_score(h1: usize, h2: usize, h3: usize, h4: usize) -> u8 {
    let mut score = 0u8;
    if h1 == 1 {
        score += 30;
    }
    if h2 >= 3 {
        score += 30;
    }
    if h3 >= 5 {
        score += 20;
    }
    if h4 >= 1 {
        score += 20;
    }
    score
}

/// internalLinks / totalLinks * 100, never NaN
fn connectivity(doc: &Document) -> u8 {
    let hrefs = doc.link_hrefs();
    if hrefs.is_empty() {
        return 0;
    }
    let internal = hrefs.iter().filter(|h| doc.is_internal_link(h)).count();
    ((internal as f64 / hrefs.len() as f64) * 100.0).round().min(100.0) as u8
}

fn informational_re() -> Regex {
    Regex::new(r"(?i)\b(what is|definition|overview|explained|introduction to|개념|정리)\b").unwrap()
}

fn guide_re() -> Regex {
    Regex::new(r"(?i)\b(how to|guide|tutorial|step[- ]by[- ]step|walkthrough|방법|가이드)\b").unwrap()
}

fn news_re() -> Regex {
    Regex::new(r"(?i)\b(breaking|announced|launches|released this|press release|발표|뉴스)\b").unwrap()
}

fn faq_re() -> Regex {
    Regex::new(r"(?i)\b(faq|frequently asked|q&a|자주 묻는)\b").unwrap()
}
