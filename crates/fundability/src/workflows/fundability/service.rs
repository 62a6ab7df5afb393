use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use super::domain::ProfileKind;
use super::profile::normalize_profile;
use super::report::FundabilityReport;
use super::scoring::{score, ScoreResult};
use super::source::{ProfileSourceError, RawProfileSource};
use crate::workflows::catalog::Catalog;

/// Service evaluating raw profiles against a shared, read-only catalog.
#[derive(Debug, Clone)]
pub struct FundabilityService {
    catalog: Arc<Catalog>,
}

impl FundabilityService {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Normalize the source's attributes and assemble the full report.
    pub fn evaluate<S>(
        &self,
        source: &S,
        report_date: NaiveDate,
    ) -> Result<FundabilityReport, ProfileSourceError>
    where
        S: RawProfileSource + ?Sized,
    {
        let raw = source.raw_attributes()?;
        let profile = normalize_profile(&raw);
        let report = FundabilityReport::build(profile, &self.catalog, report_date);

        debug!(
            %report_date,
            consumer_score = report.summary.consumer.score,
            business_score = report.summary.business.score,
            consumer_gaps = report.summary.consumer.gap_count,
            business_gaps = report.summary.business.gap_count,
            "fundability report assembled"
        );

        Ok(report)
    }

    /// Score a single kind without building recommendations.
    pub fn score<S>(&self, source: &S, kind: ProfileKind) -> Result<ScoreResult, ProfileSourceError>
    where
        S: RawProfileSource + ?Sized,
    {
        let raw = source.raw_attributes()?;
        let result = score(&normalize_profile(&raw), kind);

        debug!(
            kind = kind.label(),
            score = result.score,
            funding_capacity = result.funding_capacity,
            "profile scored"
        );

        Ok(result)
    }
}
