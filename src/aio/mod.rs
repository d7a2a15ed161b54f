//! Per-model AI citation-probability estimation
//!
//! Each model starts from a weighted blend of the three normalized axis
//! scores (weights reflect published model preferences) and adds bonus
//! points from document signals. Every bonus awards strictly more points in
//! website mode than in blog mode: generic-site trust and authority signals
//! matter more to citation likelihood than blog-style signals. The blend
//! weights and bonus values are tuning constants; the contract is their
//! relative ordering, not the specific numbers.

use crate::document::Document;
use crate::scoring::text;
use serde::{Deserialize, Serialize};

/// Generative-AI models we estimate citation probability for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiModel {
    Chatgpt,
    Perplexity,
    Gemini,
    Claude,
    Grok,
}

impl std::fmt::Display for AiModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AiModel::Chatgpt => write!(f, "ChatGPT"),
            AiModel::Perplexity => write!(f, "Perplexity"),
            AiModel::Gemini => write!(f, "Gemini"),
            AiModel::Claude => write!(f, "Claude"),
            AiModel::Grok => write!(f, "Grok"),
        }
    }
}

/// Per-model citation-probability scores, each in [0, 100]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AioCitationScores {
    pub chatgpt: u8,
    pub perplexity: u8,
    pub gemini: u8,
    pub claude: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grok: Option<u8>,
}

/// One model's score plus its recommendations, ordered by expected impact
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelAssessment {
    pub model: AiModel,
    pub score: u8,
    /// Unmet high-weight conditions first
    pub recommendations: Vec<String>,
}

/// Citation scores plus per-model recommendation lists
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AioAnalysis {
    pub scores: AioCitationScores,
    pub models: Vec<ModelAssessment>,
}

/// Document signals that feed model-specific bonuses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BonusSignal {
    /// Three or more outbound citation links
    CitationDensity,
    /// Certification / credential markers
    Certification,
    /// Statistics with units
    Statistics,
    /// Chart, canvas, or data-visual markup
    ChartPresence,
    /// Methodology language
    Methodology,
}

impl BonusSignal {
    fn holds(self, doc: &Document) -> bool {
        let body = &doc.text().text;
        match self {
            BonusSignal::CitationDensity => doc.external_links().len() >= 3,
            BonusSignal::Certification => text::has_certification_markers(body),
            BonusSignal::Statistics => text::has_statistics(body),
            BonusSignal::ChartPresence => {
                doc.exists("canvas")
                    || doc.exists(r#"[class*="chart"]"#)
                    || doc.exists("svg")
            }
            BonusSignal::Methodology => text::has_methodology_language(body),
        }
    }

    fn advice(self) -> &'static str {
        match self {
            BonusSignal::CitationDensity => {
                "Cite at least three outbound sources so answers can attribute claims"
            }
            BonusSignal::Certification => {
                "Mention certifications or credentials that back the content's claims"
            }
            BonusSignal::Statistics => {
                "Add concrete statistics with units; models prefer quantified claims"
            }
            BonusSignal::ChartPresence => {
                "Add a chart or data table; visual data markup signals original analysis"
            }
            BonusSignal::Methodology => {
                "Describe how results were measured or tested; methodology language earns citations"
            }
        }
    }
}

/// A bonus entry: blog-mode points and strictly larger website-mode points
#[derive(Debug, Clone, Copy)]
struct Bonus {
    signal: BonusSignal,
    blog: u8,
    website: u8,
}

const fn bonus(signal: BonusSignal, blog: u8, website: u8) -> Bonus {
    Bonus {
        signal,
        blog,
        website,
    }
}

/// Per-model blend weights (summing to 100) and bonus table
struct ModelProfile {
    model: AiModel,
    seo_weight: u16,
    aeo_weight: u16,
    geo_weight: u16,
    bonuses: &'static [Bonus],
}

/// Profiles are immutable static data, loaded once, never mutated.
/// Structure-sensitive models weight AEO higher; recency-sensitive models
/// weight GEO higher.
const PROFILES: &[ModelProfile] = &[
    ModelProfile {
        model: AiModel::Chatgpt,
        seo_weight: 30,
        aeo_weight: 45,
        geo_weight: 25,
        bonuses: &[
            bonus(BonusSignal::Statistics, 2, 4),
            bonus(BonusSignal::CitationDensity, 2, 4),
            bonus(BonusSignal::Methodology, 1, 3),
        ],
    },
    ModelProfile {
        model: AiModel::Perplexity,
        seo_weight: 25,
        aeo_weight: 35,
        geo_weight: 40,
        bonuses: &[
            bonus(BonusSignal::CitationDensity, 3, 6),
            bonus(BonusSignal::Statistics, 2, 4),
            bonus(BonusSignal::ChartPresence, 1, 3),
        ],
    },
    ModelProfile {
        model: AiModel::Gemini,
        seo_weight: 40,
        aeo_weight: 30,
        geo_weight: 30,
        bonuses: &[
            bonus(BonusSignal::ChartPresence, 2, 4),
            bonus(BonusSignal::Certification, 2, 4),
            bonus(BonusSignal::CitationDensity, 1, 3),
        ],
    },
    ModelProfile {
        model: AiModel::Claude,
        seo_weight: 25,
        aeo_weight: 40,
        geo_weight: 35,
        bonuses: &[
            bonus(BonusSignal::Methodology, 2, 5),
            bonus(BonusSignal::CitationDensity, 2, 4),
            bonus(BonusSignal::Statistics, 1, 3),
        ],
    },
    ModelProfile {
        model: AiModel::Grok,
        seo_weight: 30,
        aeo_weight: 30,
        geo_weight: 40,
        bonuses: &[
            bonus(BonusSignal::Statistics, 2, 4),
            bonus(BonusSignal::ChartPresence, 2, 4),
            bonus(BonusSignal::CitationDensity, 1, 3),
        ],
    },
];

/// Estimate per-model citation scores and recommendations.
///
/// `is_website` selects the larger website-mode bonus column; the blend of
/// the three axis scores is identical in both modes, so website-mode scores
/// are always >= blog-mode scores for the same document.
pub fn estimate_citation_scores(
    doc: &Document,
    seo: u8,
    aeo: u8,
    geo: u8,
    include_grok: bool,
    is_website: bool,
) -> AioAnalysis {
    let mut models = Vec::new();
    for profile in PROFILES {
        if profile.model == AiModel::Grok && !include_grok {
            continue;
        }
        models.push(assess(profile, doc, seo, aeo, geo, is_website));
    }

    let score_for = |model: AiModel| -> u8 {
        models
            .iter()
            .find(|m| m.model == model)
            .map(|m| m.score)
            .unwrap_or(0)
    };
    let scores = AioCitationScores {
        chatgpt: score_for(AiModel::Chatgpt),
        perplexity: score_for(AiModel::Perplexity),
        gemini: score_for(AiModel::Gemini),
        claude: score_for(AiModel::Claude),
        grok: models
            .iter()
            .find(|m| m.model == AiModel::Grok)
            .map(|m| m.score),
    };

    AioAnalysis { scores, models }
}

fn assess(
    profile: &ModelProfile,
    doc: &Document,
    seo: u8,
    aeo: u8,
    geo: u8,
    is_website: bool,
) -> ModelAssessment {
    let blend = (seo as u32 * profile.seo_weight as u32
        + aeo as u32 * profile.aeo_weight as u32
        + geo as u32 * profile.geo_weight as u32)
        / 100;

    let mut earned = 0u32;
    let mut failed: Vec<&Bonus> = Vec::new();
    for b in profile.bonuses {
        if b.signal.holds(doc) {
            earned += if is_website { b.website } else { b.blog } as u32;
        } else {
            failed.push(b);
        }
    }

    // Unmet high-weight conditions first
    failed.sort_by(|a, b| b.website.cmp(&a.website));
    let recommendations = failed.iter().map(|b| b.signal.advice().to_string()).collect();

    ModelAssessment {
        model: profile.model,
        score: (blend + earned).min(100) as u8,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;

    fn doc_with_signals() -> Document {
        Document::parse(
            "https://example.com",
            r#"<body>
                <p>We measured a 45% improvement; our methodology is documented.</p>
                <div class="chart-area"><canvas></canvas></div>
                <a href="https://a.org/1">1</a><a href="https://b.org/2">2</a><a href="https://c.edu/3">3</a>
            </body>"#,
        )
    }

    #[test]
    fn profile_weights_sum_to_100() {
        for p in PROFILES {
            assert_eq!(
                p.seo_weight + p.aeo_weight + p.geo_weight,
                100,
                "{} weights",
                p.model
            );
        }
    }

    #[test]
    fn website_bonuses_strictly_exceed_blog_bonuses() {
        for p in PROFILES {
            for b in p.bonuses {
                assert!(b.website > b.blog, "{} {:?}", p.model, b.signal);
            }
        }
    }

    #[test]
    fn website_mode_never_scores_below_blog_mode() {
        let doc = doc_with_signals();
        for (seo, aeo, geo) in [(80, 70, 60), (0, 0, 0), (100, 100, 100), (33, 66, 99)] {
            let blog = estimate_citation_scores(&doc, seo, aeo, geo, true, false);
            let web = estimate_citation_scores(&doc, seo, aeo, geo, true, true);
            assert!(web.scores.chatgpt >= blog.scores.chatgpt);
            assert!(web.scores.perplexity >= blog.scores.perplexity);
            assert!(web.scores.gemini >= blog.scores.gemini);
            assert!(web.scores.claude >= blog.scores.claude);
            assert!(web.scores.grok.unwrap() >= blog.scores.grok.unwrap());
        }
    }

    #[test]
    fn scores_clamp_to_100() {
        let doc = doc_with_signals();
        let analysis = estimate_citation_scores(&doc, 100, 100, 100, true, true);
        for m in &analysis.models {
            assert!(m.score <= 100);
        }
        assert_eq!(analysis.scores.perplexity, 100);
    }

    #[test]
    fn recommendations_come_from_failed_bonuses_highest_weight_first() {
        let doc = Document::parse("https://example.com", "<p>plain text</p>");
        let analysis = estimate_citation_scores(&doc, 50, 50, 50, true, false);
        let perplexity = analysis
            .models
            .iter()
            .find(|m| m.model == AiModel::Perplexity)
            .unwrap();
        assert_eq!(perplexity.recommendations.len(), 3);
        assert!(perplexity.recommendations[0].contains("outbound sources"));
    }

    #[test]
    fn grok_can_be_excluded() {
        let doc = doc_with_signals();
        let analysis = estimate_citation_scores(&doc, 50, 50, 50, false, false);
        assert!(analysis.scores.grok.is_none());
        assert_eq!(analysis.models.len(), 4);
    }
}
