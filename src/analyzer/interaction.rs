//! Interactive affordance detection
//!
//! Pure counts and presence checks over fixed class/id patterns. Consumed
//! only by the insight generator, never by the scoring engine.

use crate::document::Document;
use serde::{Deserialize, Serialize};

/// Interactive affordances found in the document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionAnalysis {
    pub form_count: usize,
    pub has_calculator: bool,
    pub has_comments: bool,
    pub has_social_share: bool,
    pub has_subscription: bool,
}

/// Detect forms, calculators, comments, sharing, and subscription hooks
pub fn analyze_interactions(doc: &Document) -> InteractionAnalysis {
    InteractionAnalysis {
        form_count: doc.count("form"),
        has_calculator: doc.exists(r#"[class*="calculator"]"#)
            || doc.exists(r#"[id*="calculator"]"#)
            || doc.exists(r#"[class*="calc-"]"#),
        has_comments: doc.exists("#comments")
            || doc.exists(r#"[class*="comment"]"#)
            || doc.exists("#disqus_thread"),
        has_social_share: doc.exists(r#"[class*="share"]"#)
            || doc.exists(r#"[class*="social"]"#),
        has_subscription: doc.exists(r#"[class*="subscribe"]"#)
            || doc.exists(r#"[class*="newsletter"]"#)
            || doc.exists(r#"input[type="email"]"#),
    }
}
