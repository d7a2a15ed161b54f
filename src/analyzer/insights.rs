//! Insight generation
//!
//! Converts the three sub-analyses into severity-tagged findings. Exactly
//! one insight per failed condition, emitted in the fixed evaluation order
//! of the checklist; callers may re-sort by severity.

use super::interaction::InteractionAnalysis;
use super::structure::ContentStructureAnalysis;
use super::trust::TrustSignalsAnalysis;
use crate::{Insight, Severity};

/// Generate findings from structure, trust, and interaction analyses
pub fn generate_insights(
    structure: &ContentStructureAnalysis,
    trust: &TrustSignalsAnalysis,
    interactions: &InteractionAnalysis,
) -> Vec<Insight> {
    let mut insights = Vec::new();

    // Structure
    if structure.hierarchy_score < 60 {
        insights.push(Insight::new(
            Severity::Medium,
            "Structure",
            "Heading hierarchy is weak: aim for one H1, at least three H2 sections, and supporting H3 depth",
        ));
    }
    if structure.connectivity < 20 {
        insights.push(Insight::new(
            Severity::Low,
            "Structure",
            "Few internal links: connect related pages so crawlers and readers can navigate the content",
        ));
    }
    if !(structure.is_informational
        || structure.is_guide
        || structure.is_comparison
        || structure.is_news
        || structure.is_faq)
    {
        insights.push(Insight::new(
            Severity::Low,
            "Structure",
            "Content type is unclear: lead with a question, guide, or comparison framing readers can recognize",
        ));
    }

    // Trust and security
    if !trust.has_ssl {
        insights.push(Insight::new(
            Severity::High,
            "Security",
            "Page is not served over HTTPS: search and answer engines discount insecure content",
        ));
    }
    if !trust.has_contact_info {
        insights.push(Insight::new(
            Severity::High,
            "Trust",
            "No contact information found: add a contact link, email, or phone number",
        ));
    }
    if !trust.has_privacy_policy {
        insights.push(Insight::new(
            Severity::Medium,
            "Security",
            "No privacy policy link or text found",
        ));
    }
    if !trust.has_security_badge {
        insights.push(Insight::new(
            Severity::Low,
            "Security",
            "No security badge present: a visible trust mark reassures visitors on transactional pages",
        ));
    }
    let strong_dimensions = [
        trust.experience,
        trust.expertise,
        trust.authoritativeness,
        trust.trustworthiness,
    ]
    .iter()
    .filter(|&&v| v >= 50)
    .count();
    if strong_dimensions < 3 {
        insights.push(Insight::new(
            Severity::Medium,
            "Trust",
            "E-E-A-T coverage is narrow: strengthen first-hand experience, credentials, and cited sources",
        ));
    }
    if trust.overall < 50 {
        insights.push(Insight::new(
            Severity::Medium,
            "Trust",
            "Overall trust signals are thin: add author attribution, dates, and external references",
        ));
    }

    // Interaction
    if interactions.form_count == 0 {
        insights.push(Insight::new(
            Severity::Low,
            "Interaction",
            "No forms found: a contact or signup form gives readers a next step",
        ));
    }
    if !interactions.has_social_share {
        insights.push(Insight::new(
            Severity::Low,
            "Interaction",
            "No social sharing affordances found",
        ));
    }
    if !interactions.has_comments {
        insights.push(Insight::new(
            Severity::Low,
            "Interaction",
            "No comment section found: reader discussion is an engagement signal",
        ));
    }
    if !interactions.has_subscription {
        insights.push(Insight::new(
            Severity::Low,
            "Interaction",
            "No subscription affordance found: a newsletter signup retains returning readers",
        ));
    }

    insights
}

/// Re-sort insights by severity (High first), preserving emission order
/// within a severity class
pub fn sort_by_severity(insights: &mut [Insight]) {
    insights.sort_by_key(|i| i.severity.rank());
}
