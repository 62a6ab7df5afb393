pub mod views;

use super::domain::ProfileKind;
use super::gaps::{analyze_gaps, GapAnalysis};
use super::profile::Profile;
use super::recommendation::{recommend, RecommendationSet};
use crate::workflows::catalog::Catalog;
use chrono::NaiveDate;
use serde::Serialize;

pub use views::{KindSummary, ReportSummary};

/// Everything a renderer needs to present one profile's evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FundabilityReport {
    pub report_date: NaiveDate,
    pub profile: Profile,
    pub consumer_gap_analysis: GapAnalysis,
    pub business_gap_analysis: GapAnalysis,
    pub consumer_recommendations: RecommendationSet,
    pub business_recommendations: RecommendationSet,
    pub summary: ReportSummary,
}

impl FundabilityReport {
    /// Evaluate `profile` under both kinds against the shared catalog.
    pub fn build(profile: Profile, catalog: &Catalog, report_date: NaiveDate) -> Self {
        let consumer_gap_analysis = analyze_gaps(&profile, ProfileKind::Consumer);
        let business_gap_analysis = analyze_gaps(&profile, ProfileKind::Business);
        let consumer_recommendations = recommend(&profile, ProfileKind::Consumer, catalog, None);
        let business_recommendations = recommend(&profile, ProfileKind::Business, catalog, None);

        let summary = ReportSummary {
            consumer: KindSummary::from_parts(&consumer_gap_analysis, &consumer_recommendations),
            business: KindSummary::from_parts(&business_gap_analysis, &business_recommendations),
        };

        Self {
            report_date,
            profile,
            consumer_gap_analysis,
            business_gap_analysis,
            consumer_recommendations,
            business_recommendations,
            summary,
        }
    }

    pub fn gap_analysis(&self, kind: ProfileKind) -> &GapAnalysis {
        match kind {
            ProfileKind::Consumer => &self.consumer_gap_analysis,
            ProfileKind::Business => &self.business_gap_analysis,
        }
    }

    pub fn recommendations(&self, kind: ProfileKind) -> &RecommendationSet {
        match kind {
            ProfileKind::Consumer => &self.consumer_recommendations,
            ProfileKind::Business => &self.business_recommendations,
        }
    }
}
