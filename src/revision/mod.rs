//! Revision prompt construction and revised-content scoring
//!
//! Builds the instruction prompt for the external rewriting service and
//! estimates the score delta of a returned revision. Structure extraction
//! failure degrades to a flat text fallback; the prompt is never aborted.

pub mod client;

pub use client::{call_with_retry, ClaudeClient, GenerativeService, RetryPolicy, RevisionError};

use crate::config::ScoringOptions;
use crate::detector;
use crate::document::{collapse_whitespace, Document, TextContext};
use crate::scoring::{normalize_score, text, AEO_MAX, GEO_MAX};
use crate::{AnalysisResult, Insight};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A request to revise previously-analyzed content
#[derive(Debug, Clone)]
pub struct RevisionRequest {
    /// The original HTML document
    pub original_content: String,
    /// The analysis this revision should improve on
    pub analysis: AnalysisResult,
    /// Source URL (re-detected when building the prompt)
    pub url: String,
}

/// Heuristic score estimate for a revised text
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictedScores {
    pub seo: u8,
    pub aeo: u8,
    pub geo: u8,
}

/// Result of a completed revision round-trip
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionResult {
    /// Service output with all markup stripped
    pub revised_content: String,
    pub predicted_scores: PredictedScores,
    /// Checklist conditions the revision newly satisfies
    pub improvements: Vec<String>,
}

/// Ordered structure extracted from the original document
struct Extraction {
    /// `H<level>: text` lines in document order
    outline: Vec<String>,
    /// Flattened body text
    body: String,
}

/// Build the instruction prompt for the external rewriting service
pub fn build_revision_prompt(request: &RevisionRequest, options: &ScoringOptions) -> String {
    let detection = detector::detect(&request.url, &request.original_content);
    let framed = has_frame_markers(&request.original_content);
    // Framed pages keep their real content in an embedded frame that static
    // parsing cannot reach; the service must preserve what is visible.
    let structure_constrained = detection.is_blog || framed;

    let (outline, body, extraction_note) = match extract_document_structure(&request.original_content)
    {
        Ok(extraction) => (extraction.outline.join("\n"), extraction.body, String::new()),
        Err(_) => (
            String::new(),
            flat_text_fallback(&request.original_content),
            "Note: structure extraction failed; the text below is a best-effort flat extraction.\n"
                .to_string(),
        ),
    };

    let budget = options.prompt_char_budget;
    let truncated = truncate_chars(&body, budget);

    let analysis = &request.analysis;
    let directives = bucketed_directives(analysis);

    let mut prompt = String::new();
    prompt.push_str("You are an expert content editor. Rewrite the content below to improve its discoverability scores while keeping its meaning.\n\n");
    prompt.push_str(&format!(
        "## Current Scores\nSEO: {}/100 | AEO: {}/100 | GEO: {}/100 | Overall: {}/100\n\n",
        analysis.seo_score, analysis.aeo_score, analysis.geo_score, analysis.overall_score
    ));
    prompt.push_str("## Improvement Directives\n");
    prompt.push_str(&directives);
    prompt.push('\n');

    if !outline.is_empty() {
        prompt.push_str("## Document Structure\n");
        prompt.push_str(&outline);
        prompt.push_str("\n\n");
    }

    prompt.push_str("## Extracted Text\n");
    prompt.push_str(&extraction_note);
    prompt.push_str(&truncated);
    prompt.push_str("\n\n");

    prompt.push_str("## Output Requirements\n");
    prompt.push_str("- Respond with plain text only. No HTML, no markdown, no markup of any kind.\n");
    prompt.push_str("- Preserve structure: keep every section and its order exactly as outlined.\n");
    prompt.push_str("- Preserve the original tone and language.\n");
    if structure_constrained {
        prompt.push_str(
            "- This page embeds content in frames or a blog platform shell; preserve the visible structure only and do not invent sections you cannot see.\n",
        );
    }

    prompt
}

/// Revise content through the external service and estimate the new scores
pub fn revise_content<S: GenerativeService>(
    request: &RevisionRequest,
    service: &S,
    policy: &RetryPolicy,
    options: &ScoringOptions,
) -> Result<RevisionResult, RevisionError> {
    let prompt = build_revision_prompt(request, options);
    let raw = call_with_retry(service, &prompt, policy)?;

    // The service is untrusted regarding output format
    let revised_content = strip_markup(&raw);
    if revised_content.trim().is_empty() {
        return Err(RevisionError::EmptyResponse);
    }

    let (predicted_scores, improvements) = estimate_revision(request, &revised_content);
    Ok(RevisionResult {
        revised_content,
        predicted_scores,
        improvements,
    })
}

/// Re-run the text-level subset of the checklists against the revision and
/// translate the raw-point delta onto each axis. SEO checks are all markup
/// level, so a plain-text revision cannot move the SEO score.
pub fn estimate_revision(
    request: &RevisionRequest,
    revised_text: &str,
) -> (PredictedScores, Vec<String>) {
    let original_doc = Document::parse(&request.url, &request.original_content);
    let original = text_level_checks(original_doc.text());
    let revised = text_level_checks(&TextContext::from_text(revised_text));

    let analysis = &request.analysis;
    let aeo = shift_axis(analysis.aeo_score, original.aeo_raw, revised.aeo_raw, AEO_MAX);
    let geo = shift_axis(analysis.geo_score, original.geo_raw, revised.geo_raw, GEO_MAX);

    let improvements = original
        .passes
        .iter()
        .zip(revised.passes.iter())
        .filter(|((_, was), (_, now))| !was && *now)
        .map(|((label, _), _)| format!("Now satisfies: {}", label))
        .collect();

    (
        PredictedScores {
            seo: analysis.seo_score,
            aeo,
            geo,
        },
        improvements,
    )
}

/// Raw points of the text-level checks per axis, plus per-check outcomes
struct TextLevelOutcome {
    aeo_raw: u16,
    geo_raw: u16,
    passes: Vec<(&'static str, bool)>,
}

/// The reduced checklist: exactly the checks from the AEO/GEO scorers that
/// are decidable on plain text, with their original weights
fn text_level_checks(ctx: &TextContext) -> TextLevelOutcome {
    let body = &ctx.text;
    let words = ctx.word_count;

    let aeo_checks: [(&'static str, u16, bool); 8] = [
        ("question-form content", 15, text::has_question_content(body)),
        ("300-word floor", 10, words >= 300),
        ("freshness markers", 10, text::has_freshness_markers(body)),
        ("glossary markers", 10, text::has_glossary_markers(body)),
        ("statistics", 8, text::has_statistics(body)),
        ("quotations", 7, text::has_quotation(body)),
        ("step-by-step phrasing", 8, text::has_step_pattern(body)),
        ("case-study markers", 7, text::has_case_study_markers(body)),
    ];
    let geo_checks: [(&'static str, u16, bool); 4] = [
        ("1500-word depth", 15, words >= 1500),
        ("lexical diversity", 10, ctx.lexical_diversity() > 0.3),
        (
            "freshness with a recent year",
            10,
            text::has_freshness_markers(body) && text::mentions_recent_year(body),
        ),
        ("update-cadence language", 5, text::has_update_cadence(body)),
    ];

    let aeo_raw = aeo_checks.iter().filter(|(_, _, p)| *p).map(|(_, w, _)| w).sum();
    let geo_raw = geo_checks.iter().filter(|(_, _, p)| *p).map(|(_, w, _)| w).sum();
    let passes = aeo_checks
        .iter()
        .chain(geo_checks.iter())
        .map(|(label, _, p)| (*label, *p))
        .collect();

    TextLevelOutcome {
        aeo_raw,
        geo_raw,
        passes,
    }
}

/// Shift a normalized axis score by the raw-point delta of the reduced
/// checks, at the axis's own normalization rate, clamped to [0, 100].
/// Deltas are negative only when a previously passing check regresses.
fn shift_axis(original_norm: u8, original_raw: u16, revised_raw: u16, axis_max: u16) -> u8 {
    let delta =
        normalize_score(revised_raw, axis_max) as i16 - normalize_score(original_raw, axis_max) as i16;
    (original_norm as i16 + delta).clamp(0, 100) as u8
}

/// Extract the heading outline and flattened body text, preserving order
fn extract_document_structure(html: &str) -> Result<Extraction, ()> {
    let doc = Document::parse("about:blank", html);
    let mut outline = Vec::new();
    for el in doc.select_all("h1, h2, h3, h4") {
        let level = el.value().name().trim_start_matches('h').to_string();
        let text = collapse_whitespace(&el.text().collect::<String>());
        if !text.is_empty() {
            outline.push(format!("H{}: {}", level, text));
        }
    }
    let body = doc.text().text.clone();
    if outline.is_empty() && body.is_empty() {
        // Nothing usable came out of the parse
        return Err(());
    }
    Ok(Extraction { outline, body })
}

/// Best-effort flat extraction: tags removed, whitespace collapsed
fn flat_text_fallback(html: &str) -> String {
    let tags = Regex::new(r"<[^>]*>").unwrap();
    collapse_whitespace(&tags.replace_all(html, " "))
}

/// Strip HTML tags and markdown artifacts from service output
pub fn strip_markup(content: &str) -> String {
    let tags = Regex::new(r"<[^>]*>").unwrap();
    let stripped = tags.replace_all(content, " ");
    let markdown = Regex::new(r"(?m)^#{1,6}\s+|```[a-z]*|[*_]{1,2}([^*_]+)[*_]{1,2}").unwrap();
    let stripped = markdown.replace_all(&stripped, "$1");
    // Collapse horizontal whitespace but keep paragraph breaks
    let spaces = Regex::new(r"[ \t]+").unwrap();
    let stripped = spaces.replace_all(&stripped, " ");
    let blank_runs = Regex::new(r"\n{3,}").unwrap();
    blank_runs.replace_all(&stripped, "\n\n").trim().to_string()
}

fn has_frame_markers(html: &str) -> bool {
    let re = Regex::new(r"(?i)<(iframe|frameset|frame)\b").unwrap();
    re.is_match(html)
}

fn truncate_chars(text: &str, budget: usize) -> String {
    if text.chars().count() <= budget {
        return text.to_string();
    }
    let mut out: String = text.chars().take(budget).collect();
    out.push_str("...");
    out
}

/// Bucket insights, priority tips, AIO recommendations, and guidelines by
/// category (SEO/AEO/GEO/other)
fn bucketed_directives(analysis: &AnalysisResult) -> String {
    let mut seo = Vec::new();
    let mut aeo = Vec::new();
    let mut geo = Vec::new();
    let mut other = Vec::new();

    let mut push = |category: &str, line: String| match category.to_uppercase().as_str() {
        "SEO" => seo.push(line),
        "AEO" => aeo.push(line),
        "GEO" => geo.push(line),
        _ => other.push(line),
    };

    for Insight {
        category, message, ..
    } in &analysis.insights
    {
        push(category, message.clone());
    }
    for priority in &analysis.improvement_priorities {
        for tip in &priority.tips {
            push(&priority.category, tip.clone());
        }
    }
    for model in &analysis.aio_analysis.models {
        for rec in &model.recommendations {
            push("other", format!("[{}] {}", model.model, rec));
        }
    }
    for guideline in &analysis.content_guidelines {
        push("other", guideline.clone());
    }

    let mut out = String::new();
    for (name, lines) in [("SEO", seo), ("AEO", aeo), ("GEO", geo), ("General", other)] {
        if lines.is_empty() {
            continue;
        }
        out.push_str(&format!("### {}\n", name));
        for line in lines {
            out.push_str(&format!("- {}\n", line));
        }
    }
    out
}
