use super::super::domain::ProfileKind;
use super::super::gaps::GapAnalysis;
use super::super::recommendation::{RecommendationSet, TierLevel};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KindSummary {
    pub kind: ProfileKind,
    pub kind_label: &'static str,
    pub rules_evaluated: usize,
    pub gap_count: usize,
    pub open_gaps: Vec<&'static str>,
    pub score: f64,
    pub funding_capacity: f64,
    pub best_funding_capacity: f64,
}

impl KindSummary {
    pub(crate) fn from_parts(analysis: &GapAnalysis, recommendations: &RecommendationSet) -> Self {
        let kind = analysis.kind;
        let base = recommendations.tier(TierLevel::Good);

        Self {
            kind,
            kind_label: kind.label(),
            rules_evaluated: analysis.len(),
            gap_count: analysis.gap_count(),
            open_gaps: analysis.gaps().map(|entry| entry.metric_label).collect(),
            score: base.score,
            funding_capacity: base.funding_capacity,
            best_funding_capacity: recommendations.tier(TierLevel::Best).funding_capacity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub consumer: KindSummary,
    pub business: KindSummary,
}

impl ReportSummary {
    pub fn for_kind(&self, kind: ProfileKind) -> &KindSummary {
        match kind {
            ProfileKind::Consumer => &self.consumer,
            ProfileKind::Business => &self.business,
        }
    }

    pub fn total_gaps(&self) -> usize {
        self.consumer.gap_count + self.business.gap_count
    }
}
