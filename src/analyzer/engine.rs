//! Analysis engine - orchestrates detection, analyzers, and scorers
//!
//! The pipeline flows strictly downward: detection, structure, trust,
//! interaction, axis scoring, citation estimation, insight generation.
//! Every step is a pure function of the parsed document, so concurrent
//! analyses of different documents never share mutable state.

use crate::aio::estimate_citation_scores;
use crate::config::ScoringOptions;
use crate::detector;
use crate::document::Document;
use crate::scoring::{score_aeo, score_geo, score_seo, AxisScore};
use crate::{
    AnalysisResult, Grade, ImprovementPriority, ScoreBreakdown,
};

use super::{analyze_interactions, analyze_structure, analyze_trust, generate_insights};

/// One unit of work for batch analysis
#[derive(Debug, Clone)]
pub struct AnalysisInput {
    pub url: String,
    pub html: String,
}

/// Main analysis engine
#[derive(Debug, Default, Clone)]
pub struct AnalysisEngine {
    options: ScoringOptions,
}

impl AnalysisEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set scoring options
    pub fn with_options(mut self, options: ScoringOptions) -> Self {
        self.options = options;
        self
    }

    /// Analyze a fetched document. Total over any well-formed DOM,
    /// including an empty one; never fails.
    pub fn analyze(&self, url: &str, html: &str) -> AnalysisResult {
        let detection = detector::detect(url, html);
        let doc = Document::parse(url, html);

        let structure = analyze_structure(&doc);
        let trust = analyze_trust(&doc);
        let interactions = analyze_interactions(&doc);

        let seo = score_seo(&doc);
        let aeo = score_aeo(&doc);
        let geo = score_geo(&doc);

        // The detection outcome selects the citation-bonus profile:
        // recognized blog platforms score in blog mode.
        let is_website = self.options.force_website.unwrap_or(!detection.is_blog);
        let aio_analysis = estimate_citation_scores(
            &doc,
            seo.normalized,
            aeo.normalized,
            geo.normalized,
            self.options.include_grok,
            is_website,
        );

        let insights = generate_insights(&structure, &trust, &interactions);
        let improvement_priorities = improvement_priorities(&seo, &aeo, &geo);
        let content_guidelines = content_guidelines(&seo, &aeo, &geo);

        let overall_score = ((seo.normalized as u16 + aeo.normalized as u16 + geo.normalized as u16)
            as f64
            / 3.0)
            .round() as u8;

        AnalysisResult {
            url: url.to_string(),
            detection,
            seo_score: seo.normalized,
            aeo_score: aeo.normalized,
            geo_score: geo.normalized,
            overall_score,
            grade: Grade::from_score(overall_score),
            breakdown: ScoreBreakdown { seo, aeo, geo },
            structure,
            trust,
            interactions,
            insights,
            improvement_priorities,
            aio_analysis,
            content_guidelines,
        }
    }

    /// Analyze multiple documents sequentially
    pub fn analyze_many(&self, inputs: &[AnalysisInput]) -> Vec<AnalysisResult> {
        inputs.iter().map(|i| self.analyze(&i.url, &i.html)).collect()
    }

    /// Analyze multiple documents in parallel using rayon
    pub fn analyze_parallel(&self, inputs: &[AnalysisInput]) -> Vec<AnalysisResult> {
        use rayon::prelude::*;

        inputs
            .par_iter()
            .map(|i| self.analyze(&i.url, &i.html))
            .collect()
    }

    /// Aggregate stats from multiple results
    pub fn aggregate_stats(results: &[AnalysisResult]) -> AggregateStats {
        if results.is_empty() {
            return AggregateStats::default();
        }
        let total: u32 = results.iter().map(|r| r.overall_score as u32).sum();
        AggregateStats {
            documents_analyzed: results.len(),
            average_score: (total / results.len() as u32) as u8,
            total_insights: results.iter().map(|r| r.insights.len()).sum(),
            blogs_detected: results.iter().filter(|r| r.detection.is_blog).count(),
        }
    }
}

/// Aggregate statistics for a batch run
#[derive(Debug, Default)]
pub struct AggregateStats {
    pub documents_analyzed: usize,
    pub average_score: u8,
    pub total_insights: usize,
    pub blogs_detected: usize,
}

/// Rank the three axes weakest-first; tips are the highest-weight failed
/// checks of each axis
fn improvement_priorities(seo: &AxisScore, aeo: &AxisScore, geo: &AxisScore) -> Vec<ImprovementPriority> {
    let mut axes = [("SEO", seo), ("AEO", aeo), ("GEO", geo)];
    axes.sort_by_key(|(_, axis)| axis.normalized);

    axes.iter()
        .enumerate()
        .map(|(i, (name, axis))| ImprovementPriority {
            rank: (i + 1) as u8,
            category: name.to_string(),
            tips: axis
                .failed_by_weight()
                .iter()
                .take(3)
                .map(|c| c.label.clone())
                .collect(),
        })
        .collect()
}

/// Guideline table keyed by check id. Immutable static data.
const GUIDELINES: &[(&str, &str)] = &[
    ("single-h1", "Use exactly one H1 that states the page topic"),
    ("meta-description", "Write a 70-160 character meta description that answers the search intent"),
    ("structured-data", "Add JSON-LD structured data (Article, FAQPage, or HowTo)"),
    ("question-content", "Frame key sections as questions readers actually ask"),
    ("faq-block", "Add an FAQ section backed by FAQPage schema"),
    ("word-floor", "Expand the content to at least 300 words"),
    ("word-depth", "Deepen the content; generative engines favor 1500+ word coverage"),
    ("fresh-recency", "Date the content and reference the current year"),
    ("og-complete", "Complete the Open Graph set: title, description, image, and url"),
    ("step-guide", "Break instructions into an ordered list with substantial steps"),
    ("professional-data", "Pair tables or charts with concrete statistics"),
];

/// Content guidelines derived from failed checks across all three axes
fn content_guidelines(seo: &AxisScore, aeo: &AxisScore, geo: &AxisScore) -> Vec<String> {
    let failed: Vec<&str> = [seo, aeo, geo]
        .iter()
        .flat_map(|axis| axis.checks.iter().filter(|c| !c.passed()))
        .map(|c| c.id.as_str())
        .collect();

    GUIDELINES
        .iter()
        .filter(|(id, _)| failed.contains(id))
        .map(|(_, guideline)| guideline.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_empty_document_is_total() {
        let engine = AnalysisEngine::new();
        let result = engine.analyze("https://example.com", "");
        assert_eq!(result.aeo_score, 0);
        assert!(result.seo_score <= 100);
        assert!(!result.insights.is_empty());
        assert_eq!(result.grade, Grade::F);
    }

    #[test]
    fn overall_is_the_mean_of_the_three_axes() {
        let engine = AnalysisEngine::new();
        let result = engine.analyze("https://example.com", "<h1>t</h1><h2>s</h2>");
        let expected = ((result.seo_score as u16 + result.aeo_score as u16
            + result.geo_score as u16) as f64
            / 3.0)
            .round() as u8;
        assert_eq!(result.overall_score, expected);
    }

    #[test]
    fn blog_detection_selects_blog_mode_bonuses() {
        let html = r#"<body>
            <p>We measured a 45% gain. See <a href="https://a.org/x">source</a>
            <a href="https://b.org/y">two</a> <a href="https://c.org/z">three</a>.</p>
        </body>"#;
        let engine = AnalysisEngine::new();
        let blog = engine.analyze("https://blog.naver.com/someone/1", html);
        let site = engine.analyze("https://company.com/insights", html);
        assert!(blog.detection.is_blog);
        assert!(!site.detection.is_blog);
        // Same signals, same axis scores modulo the https/link host context;
        // website mode can only add bonus points
        assert!(site.aio_analysis.scores.perplexity >= blog.aio_analysis.scores.perplexity);
    }

    #[test]
    fn force_website_overrides_detection() {
        let engine = AnalysisEngine::new().with_options(ScoringOptions {
            force_website: Some(true),
            ..ScoringOptions::default()
        });
        let result = engine.analyze("https://blog.naver.com/a/1", "<p>x</p>");
        // Still detected as a blog, but scored in website mode
        assert!(result.detection.is_blog);
    }

    #[test]
    fn priorities_rank_weakest_axis_first() {
        let engine = AnalysisEngine::new();
        let result = engine.analyze("https://example.com", "");
        assert_eq!(result.improvement_priorities.len(), 3);
        assert_eq!(result.improvement_priorities[0].rank, 1);
        let scores: Vec<u8> = result
            .improvement_priorities
            .iter()
            .map(|p| match p.category.as_str() {
                "SEO" => result.seo_score,
                "AEO" => result.aeo_score,
                _ => result.geo_score,
            })
            .collect();
        assert!(scores.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn guidelines_reflect_failed_checks() {
        let engine = AnalysisEngine::new();
        let result = engine.analyze("https://example.com", "<p>short</p>");
        assert!(result
            .content_guidelines
            .iter()
            .any(|g| g.contains("300 words")));
    }

    #[test]
    fn aggregate_stats_for_empty_batch() {
        let stats = AnalysisEngine::aggregate_stats(&[]);
        assert_eq!(stats.documents_analyzed, 0);
        assert_eq!(stats.average_score, 0);
    }

    #[test]
    fn parallel_and_sequential_agree() {
        let inputs = vec![
            AnalysisInput {
                url: "https://example.com/a".into(),
                html: "<h1>a</h1>".into(),
            },
            AnalysisInput {
                url: "https://example.com/b".into(),
                html: "<h1>b</h1><h2>c</h2>".into(),
            },
        ];
        let engine = AnalysisEngine::new();
        let seq = engine.analyze_many(&inputs);
        let par = engine.analyze_parallel(&inputs);
        assert_eq!(seq.len(), par.len());
        for (a, b) in seq.iter().zip(par.iter()) {
            assert_eq!(a.overall_score, b.overall_score);
            assert_eq!(a.url, b.url);
        }
    }
}
