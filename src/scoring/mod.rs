//! Weighted checklist scoring
//!
//! Each axis (SEO/AEO/GEO) is an additive checklist over an extended point
//! scale, then normalized to 0-100. Every check is a named predicate with a
//! constant weight; weights sum exactly to the axis ceiling, so no score can
//! exceed it and no check interacts with another.

pub mod aeo;
pub mod geo;
pub mod seo;
pub mod text;

pub use aeo::score_aeo;
pub use geo::score_geo;
pub use seo::score_seo;

use serde::{Deserialize, Serialize};

/// Extended scale ceiling for SEO (100 baseline + 20 advanced)
pub const SEO_MAX: u16 = 120;
/// Extended scale ceiling for AEO (100 baseline + 30 advanced)
pub const AEO_MAX: u16 = 130;
/// Extended scale ceiling for GEO (100 baseline + 40 advanced)
pub const GEO_MAX: u16 = 140;

/// One checklist condition with its earned and maximum points
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Check {
    /// Stable identifier (used for revision diffing)
    pub id: String,
    /// Human-readable description of the condition
    pub label: String,
    /// Points earned (0 for a failed boolean check, a tier value otherwise)
    pub earned: u16,
    /// Maximum points this check can contribute
    pub max: u16,
}

impl Check {
    pub fn passed(&self) -> bool {
        self.earned > 0
    }
}

/// Score for one axis: raw points, scale ceiling, normalized 0-100 value,
/// and the full check list for explainability
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisScore {
    pub raw: u16,
    pub max: u16,
    pub normalized: u8,
    pub checks: Vec<Check>,
}

impl AxisScore {
    /// Labels of failed checks ordered by descending weight
    pub fn failed_by_weight(&self) -> Vec<&Check> {
        let mut failed: Vec<&Check> = self.checks.iter().filter(|c| !c.passed()).collect();
        failed.sort_by(|a, b| b.max.cmp(&a.max));
        failed
    }
}

/// Builder for an axis checklist
#[derive(Debug, Default)]
pub struct Checklist {
    checks: Vec<Check>,
}

impl Checklist {
    pub fn new() -> Self {
        Self::default()
    }

    /// A boolean check: full weight when the condition holds, 0 otherwise
    pub fn check(&mut self, id: &str, label: &str, weight: u16, condition: bool) {
        self.checks.push(Check {
            id: id.to_string(),
            label: label.to_string(),
            earned: if condition { weight } else { 0 },
            max: weight,
        });
    }

    /// A tiered check: earned points depend on which tier was reached
    pub fn tiered(&mut self, id: &str, label: &str, earned: u16, max: u16) {
        debug_assert!(earned <= max, "tier value exceeds tier ceiling");
        self.checks.push(Check {
            id: id.to_string(),
            label: label.to_string(),
            earned: earned.min(max),
            max,
        });
    }

    /// Finalize into an axis score against a declared ceiling
    pub fn into_axis(self, max: u16) -> AxisScore {
        debug_assert_eq!(
            self.checks.iter().map(|c| c.max).sum::<u16>(),
            max,
            "check weights must sum to the axis ceiling"
        );
        let raw: u16 = self.checks.iter().map(|c| c.earned).sum();
        AxisScore {
            raw,
            max,
            normalized: normalize_score(raw, max),
            checks: self.checks,
        }
    }
}

/// Normalize a raw checklist score to 0-100: round(raw / max * 100)
pub fn normalize_score(raw: u16, max: u16) -> u8 {
    if max == 0 {
        return 0;
    }
    ((raw as f64 / max as f64) * 100.0).round() as u8
}
