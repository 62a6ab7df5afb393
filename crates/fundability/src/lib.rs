//! Credit profile fundability engine.
//!
//! Loads the standard tradeline catalog once, normalizes caller supplied profile attributes,
//! compares them against fixed benchmarks, computes weighted fundability scores, and derives
//! the Good/Better/Best recommendation tiers handed to report renderers.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;

pub use workflows::catalog::{
    load_catalog, Catalog, DataError, RawCatalog, RawTradeline, Tradeline,
};
pub use workflows::fundability::{
    analyze_gaps, fundability_router, normalize_profile, recommend, score, FundabilityReport,
    FundabilityService, GapAnalysis, GapEntry, JsonProfileSource, Profile, ProfileKind,
    ProfileSourceError, RawAttributes, RawProfileSource, RecommendationSet, RecommendationTier,
    ScoreResult, TierLevel,
};
