//! Geolens: content discoverability analyzer for search and AI answer engines
//!
//! This library scores HTML documents on three axes (SEO, AEO, GEO),
//! detects blog platforms, estimates per-model AI citation probability, and
//! builds prompts for AI-powered content revision.

pub mod aio;
pub mod analyzer;
pub mod config;
pub mod detector;
pub mod document;
pub mod reporter;
pub mod revision;
pub mod scoring;

use serde::{Deserialize, Serialize};

use aio::AioAnalysis;
use analyzer::{ContentStructureAnalysis, InteractionAnalysis, TrustSignalsAnalysis};
use config::ScoringOptions;
use detector::BlogDetectionResult;
use scoring::AxisScore;

/// The main result of analyzing a document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// The analyzed URL
    pub url: String,
    /// Blog-platform detection outcome
    pub detection: BlogDetectionResult,
    /// Normalized SEO score (0-100)
    pub seo_score: u8,
    /// Normalized AEO score (0-100)
    pub aeo_score: u8,
    /// Normalized GEO score (0-100)
    pub geo_score: u8,
    /// Mean of the three axis scores
    pub overall_score: u8,
    /// Letter grade (A-F)
    pub grade: Grade,
    /// Per-axis raw scores and checklists
    pub breakdown: ScoreBreakdown,
    /// Heading hierarchy and content-type analysis
    pub structure: ContentStructureAnalysis,
    /// E-E-A-T, business, and security signals
    pub trust: TrustSignalsAnalysis,
    /// Interaction affordances
    pub interactions: InteractionAnalysis,
    /// Severity-tagged findings
    pub insights: Vec<Insight>,
    /// Axes ranked weakest first with their top failed checks
    pub improvement_priorities: Vec<ImprovementPriority>,
    /// Per-AI-model citation estimates and recommendations
    pub aio_analysis: AioAnalysis,
    /// Writing guidelines derived from failed checks
    pub content_guidelines: Vec<String>,
}

/// Per-axis score breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub seo: AxisScore,
    pub aeo: AxisScore,
    pub geo: AxisScore,
}

/// Letter grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Convert a numeric score to a grade
    pub fn from_score(score: u8) -> Self {
        match score {
            90..=100 => Grade::A,
            80..=89 => Grade::B,
            70..=79 => Grade::C,
            60..=69 => Grade::D,
            _ => Grade::F,
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        write!(f, "{}", s)
    }
}

/// Severity of an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    /// Ordering key: High sorts first
    pub fn rank(&self) -> u8 {
        match self {
            Severity::High => 0,
            Severity::Medium => 1,
            Severity::Low => 2,
        }
    }
}

/// A single severity-tagged finding
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub severity: Severity,
    /// Which analysis produced it (Structure, Trust, Security, Interaction)
    pub category: String,
    pub message: String,
}

impl Insight {
    pub fn new(severity: Severity, category: &str, message: &str) -> Self {
        Self {
            severity,
            category: category.to_string(),
            message: message.to_string(),
        }
    }
}

/// One axis's improvement priority entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementPriority {
    /// 1 = weakest axis
    pub rank: u8,
    /// SEO, AEO, or GEO
    pub category: String,
    /// Highest-weight failed checks for the axis
    pub tips: Vec<String>,
}

/// Analyze an HTML document in one call
pub fn analyze_html(url: &str, html: &str, options: ScoringOptions) -> AnalysisResult {
    analyzer::AnalysisEngine::new()
        .with_options(options)
        .analyze(url, html)
}
