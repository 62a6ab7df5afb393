//! Profile normalization, gap analysis, scoring, and tiered tradeline recommendations.
//!
//! Every per-request operation is a pure function of its inputs; the only shared state is the
//! read-only [`Catalog`](crate::workflows::catalog::Catalog) handed to the service.

pub mod domain;
pub mod gaps;
pub mod profile;
pub mod recommendation;
pub mod report;
pub mod router;
pub mod scoring;
pub mod service;
pub mod source;

#[cfg(test)]
mod tests;

pub use domain::{CreditCategory, ProfileKind};
pub use gaps::{analyze_gaps, GapAnalysis, GapEntry, Metric, MetricValue, LOW_RISK_NAICS_CODES};
pub use profile::{keys, normalize_profile, Profile, RawAttributes};
pub use recommendation::{
    recommend, RecommendationSet, RecommendationTier, TierLevel, AUTHORIZED_USER_RECOMMENDATIONS,
};
pub use report::{FundabilityReport, KindSummary, ReportSummary};
pub use router::{fundability_router, ScoreRequest};
pub use scoring::{
    score, ScoreComponent, ScoreFactor, ScoreResult, Weighting, BUSINESS_WEIGHTING,
    CONSUMER_WEIGHTING,
};
pub use service::FundabilityService;
pub use source::{JsonProfileSource, ProfileSourceError, RawProfileSource};
