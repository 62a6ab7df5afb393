use super::domain::ProfileKind;
use super::profile::Profile;
use super::scoring::{score, ScoreResult};
use crate::workflows::catalog::{Catalog, Tradeline};
use serde::{Deserialize, Serialize};

/// Authorized-user candidates attached to every consumer tier.
pub const AUTHORIZED_USER_RECOMMENDATIONS: usize = 2;

/// Escalating recommendation bundles.
///
/// Tiers select catalog prefixes rather than ranking tradelines, and project score and
/// capacity with fixed multipliers instead of recomputing them for the selected accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TierLevel {
    Good,
    Better,
    Best,
}

impl TierLevel {
    pub const fn ordered() -> [Self; 3] {
        [Self::Good, Self::Better, Self::Best]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Better => "Better",
            Self::Best => "Best",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Good => "Good: Essential Improvements",
            Self::Better => "Better: Enhanced Improvements",
            Self::Best => "Best: Maximum Improvements",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Good => {
                "Basic improvements that address the most critical gaps with minimal investment."
            }
            Self::Better => "Building on essential improvements for a more robust profile.",
            Self::Best => "Comprehensive improvements for maximum funding potential.",
        }
    }

    pub const fn tradeline_count(self) -> usize {
        match self {
            Self::Good => 2,
            Self::Better => 4,
            Self::Best => 6,
        }
    }

    pub const fn projection_multiplier(self) -> f64 {
        match self {
            Self::Good => 1.0,
            Self::Better => 1.5,
            Self::Best => 1.75,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationTier {
    #[serde(skip)]
    pub level: TierLevel,
    pub title: &'static str,
    pub description: &'static str,
    pub tradelines: Vec<Tradeline>,
    pub authorized_users: Vec<Tradeline>,
    pub score: f64,
    pub funding_capacity: f64,
}

impl RecommendationTier {
    fn build(
        level: TierLevel,
        tradelines: &[Tradeline],
        authorized_users: &[Tradeline],
        base: &ScoreResult,
    ) -> Self {
        let multiplier = level.projection_multiplier();

        Self {
            level,
            title: level.title(),
            description: level.description(),
            tradelines: tradelines
                .iter()
                .take(level.tradeline_count())
                .cloned()
                .collect(),
            authorized_users: authorized_users.to_vec(),
            score: base.score * multiplier,
            funding_capacity: base.funding_capacity * multiplier,
        }
    }
}

/// The Good, Better, and Best tiers, serialized in that order under their labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationSet {
    #[serde(skip)]
    pub kind: ProfileKind,
    #[serde(rename = "Good")]
    pub good: RecommendationTier,
    #[serde(rename = "Better")]
    pub better: RecommendationTier,
    #[serde(rename = "Best")]
    pub best: RecommendationTier,
}

impl RecommendationSet {
    /// Assemble tiers from an already computed base score.
    ///
    /// Authorized-user candidates only apply to consumer profiles.
    pub fn build(
        kind: ProfileKind,
        tradelines: &[Tradeline],
        authorized_user_candidates: &[Tradeline],
        base: &ScoreResult,
    ) -> Self {
        let authorized_users: &[Tradeline] = match kind {
            ProfileKind::Consumer => {
                let count = authorized_user_candidates
                    .len()
                    .min(AUTHORIZED_USER_RECOMMENDATIONS);
                &authorized_user_candidates[..count]
            }
            ProfileKind::Business => &[],
        };

        Self {
            kind,
            good: RecommendationTier::build(TierLevel::Good, tradelines, authorized_users, base),
            better: RecommendationTier::build(
                TierLevel::Better,
                tradelines,
                authorized_users,
                base,
            ),
            best: RecommendationTier::build(TierLevel::Best, tradelines, authorized_users, base),
        }
    }

    pub fn tier(&self, level: TierLevel) -> &RecommendationTier {
        match level {
            TierLevel::Good => &self.good,
            TierLevel::Better => &self.better,
            TierLevel::Best => &self.best,
        }
    }

    pub fn tiers(&self) -> [&RecommendationTier; 3] {
        [&self.good, &self.better, &self.best]
    }
}

/// Score `profile` and build its recommendation tiers from the catalog.
///
/// `authorized_user_candidates` overrides the catalog's own candidate list when given.
pub fn recommend(
    profile: &Profile,
    kind: ProfileKind,
    catalog: &Catalog,
    authorized_user_candidates: Option<&[Tradeline]>,
) -> RecommendationSet {
    let base = score(profile, kind);
    let candidates = authorized_user_candidates.unwrap_or_else(|| catalog.authorized_users());

    RecommendationSet::build(kind, catalog.tradelines(kind), candidates, &base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::catalog::{load_catalog, RawCatalog, RawDatePart, RawTradeline};
    use chrono::NaiveDate;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).expect("valid date")
    }

    fn raw_list(prefix: &str, count: usize) -> Vec<RawTradeline> {
        (0..count)
            .map(|index| RawTradeline {
                name: format!("{prefix} {index}"),
                year: Some(RawDatePart::Number(2000 + index as i64)),
                ..RawTradeline::default()
            })
            .collect()
    }

    fn catalog(consumer: usize, business: usize, authorized_users: usize) -> Catalog {
        load_catalog(
            RawCatalog {
                business: raw_list("Business", business),
                consumer: raw_list("Consumer", consumer),
                authorized_users: raw_list("AU", authorized_users),
            },
            as_of(),
        )
        .expect("catalog loads")
    }

    fn profile() -> Profile {
        Profile {
            payment_history: 92.0,
            credit_utilization: 18.0,
            avg_account_age: 7.0,
            new_credit_inquiries: 1.0,
            naics_code: 541511,
            business_age: 3.0,
            consumer_average_fico_score: 690.0,
            ..Profile::default()
        }
    }

    #[test]
    fn tiers_take_fixed_catalog_prefixes() {
        let catalog = catalog(10, 10, 0);

        let set = recommend(&profile(), ProfileKind::Consumer, &catalog, None);

        assert_eq!(set.good.tradelines.len(), 2);
        assert_eq!(set.better.tradelines.len(), 4);
        assert_eq!(set.best.tradelines.len(), 6);
        assert_eq!(set.best.tradelines[..4], set.better.tradelines[..]);
        assert_eq!(set.good.tradelines[0].name, "Consumer 0");
    }

    #[test]
    fn short_catalogs_yield_shorter_prefixes() {
        for size in 0..8 {
            let catalog = catalog(size, size, 0);
            let set = recommend(&profile(), ProfileKind::Business, &catalog, None);

            assert_eq!(set.good.tradelines.len(), size.min(2));
            assert_eq!(set.better.tradelines.len(), size.min(4));
            assert_eq!(set.best.tradelines.len(), size.min(6));
        }
    }

    #[test]
    fn tier_projections_scale_the_base_score() {
        let catalog = catalog(6, 6, 0);

        for kind in ProfileKind::ordered() {
            let set = recommend(&profile(), kind, &catalog, None);
            let base = score(&profile(), kind);

            assert_eq!(set.good.score, base.score);
            assert_eq!(set.good.funding_capacity, base.funding_capacity);
            assert_eq!(set.better.score, set.good.score * 1.5);
            assert_eq!(set.better.funding_capacity, set.good.funding_capacity * 1.5);
            assert_eq!(set.best.score, set.good.score * 1.75);
            assert_eq!(set.best.funding_capacity, set.good.funding_capacity * 1.75);
        }
    }

    #[test]
    fn empty_catalog_still_produces_three_scored_tiers() {
        let catalog = Catalog::empty(as_of());

        let set = recommend(&profile(), ProfileKind::Consumer, &catalog, None);

        let levels: Vec<TierLevel> = set.tiers().iter().map(|tier| tier.level).collect();
        assert_eq!(levels, TierLevel::ordered().to_vec());
        assert!(set.tiers().iter().all(|tier| tier.tradelines.is_empty()));
        assert!(set.good.score > 0.0);
        assert!(set.best.funding_capacity > set.good.funding_capacity);
    }

    #[test]
    fn consumer_tiers_share_the_first_two_authorized_users() {
        let catalog = catalog(4, 4, 5);

        let set = recommend(&profile(), ProfileKind::Consumer, &catalog, None);

        for tier in set.tiers() {
            let names: Vec<&str> = tier
                .authorized_users
                .iter()
                .map(|tradeline| tradeline.name.as_str())
                .collect();
            assert_eq!(names, vec!["AU 0", "AU 1"]);
        }
    }

    #[test]
    fn explicit_candidates_override_the_catalog_list() {
        let catalog = catalog(4, 4, 5);
        let override_catalog = self::catalog(0, 0, 1);

        let set = recommend(
            &profile(),
            ProfileKind::Consumer,
            &catalog,
            Some(override_catalog.authorized_users()),
        );

        assert_eq!(set.good.authorized_users.len(), 1);
    }

    #[test]
    fn business_tiers_never_carry_authorized_users() {
        let catalog = catalog(4, 4, 5);

        let set = recommend(&profile(), ProfileKind::Business, &catalog, None);

        assert!(set.tiers().iter().all(|tier| tier.authorized_users.is_empty()));
    }

    #[test]
    fn serialized_set_is_keyed_by_tier_label_in_order() {
        let catalog = catalog(2, 2, 0);
        let set = recommend(&profile(), ProfileKind::Consumer, &catalog, None);

        let json = serde_json::to_string(&set).expect("serializes");

        let good = json.find("\"Good\"").expect("good key");
        let better = json.find("\"Better\"").expect("better key");
        let best = json.find("\"Best\"").expect("best key");
        assert!(good < better && better < best);
        assert!(json.contains("Good: Essential Improvements"));
    }
}
