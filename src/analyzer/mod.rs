//! Content analyzers and the orchestrating engine

pub mod engine;
pub mod insights;
pub mod interaction;
pub mod structure;
pub mod trust;

pub use engine::{AggregateStats, AnalysisEngine, AnalysisInput};
pub use insights::{generate_insights, sort_by_severity};
pub use interaction::{analyze_interactions, InteractionAnalysis};
pub use structure::{analyze_structure, ContentStructureAnalysis};
pub use trust::{analyze_trust, TrustSignalsAnalysis};
