use super::domain::ProfileKind;
use super::profile::Profile;
use serde::Serialize;

/// Profile inputs that contribute to a fundability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    PaymentHistory,
    CreditUtilization,
    AvgAccountAge,
    CreditMixCount,
    NewCreditInquiries,
    NaicsCode,
    BusinessAge,
    ConsumerAverageFicoScore,
}

impl ScoreFactor {
    pub const fn label(self) -> &'static str {
        match self {
            Self::PaymentHistory => "Payment History",
            Self::CreditUtilization => "Credit Utilization",
            Self::AvgAccountAge => "Average Account Age",
            Self::CreditMixCount => "Credit Mix",
            Self::NewCreditInquiries => "New Credit Inquiries",
            Self::NaicsCode => "NAICS Code",
            Self::BusinessAge => "Business Age",
            Self::ConsumerAverageFicoScore => "Consumer Average FICO Score",
        }
    }

    fn value(self, profile: &Profile) -> f64 {
        match self {
            Self::PaymentHistory => profile.payment_history,
            Self::CreditUtilization => profile.credit_utilization,
            Self::AvgAccountAge => profile.avg_account_age,
            Self::CreditMixCount => profile.credit_mix_count() as f64,
            Self::NewCreditInquiries => profile.new_credit_inquiries,
            Self::NaicsCode => f64::from(profile.naics_code),
            Self::BusinessAge => profile.business_age,
            Self::ConsumerAverageFicoScore => profile.consumer_average_fico_score,
        }
    }
}

/// Linear weighting and capacity multiplier for one profile kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weighting {
    pub factors: &'static [(ScoreFactor, f64)],
    pub capacity_multiplier: f64,
}

pub const CONSUMER_WEIGHTING: Weighting = Weighting {
    factors: &[
        (ScoreFactor::PaymentHistory, 0.35),
        (ScoreFactor::CreditUtilization, 0.30),
        (ScoreFactor::AvgAccountAge, 0.15),
        (ScoreFactor::CreditMixCount, 0.10),
        (ScoreFactor::NewCreditInquiries, 0.10),
    ],
    capacity_multiplier: 2000.0,
};

pub const BUSINESS_WEIGHTING: Weighting = Weighting {
    factors: &[
        (ScoreFactor::NaicsCode, 0.25),
        (ScoreFactor::CreditUtilization, 0.25),
        (ScoreFactor::BusinessAge, 0.20),
        (ScoreFactor::CreditMixCount, 0.10),
        (ScoreFactor::ConsumerAverageFicoScore, 0.20),
    ],
    capacity_multiplier: 5000.0,
};

impl Weighting {
    pub fn for_kind(kind: ProfileKind) -> &'static Weighting {
        match kind {
            ProfileKind::Consumer => &CONSUMER_WEIGHTING,
            ProfileKind::Business => &BUSINESS_WEIGHTING,
        }
    }

    pub fn total_weight(&self) -> f64 {
        self.factors.iter().map(|(_, weight)| weight).sum()
    }
}

/// A single weighted input, kept for audit trails.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub label: &'static str,
    pub value: f64,
    pub weight: f64,
    pub contribution: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub kind: ProfileKind,
    pub score: f64,
    pub funding_capacity: f64,
    pub components: Vec<ScoreComponent>,
}

/// Weighted fundability score and funding capacity. Inputs are not range checked.
pub fn score(profile: &Profile, kind: ProfileKind) -> ScoreResult {
    let weighting = Weighting::for_kind(kind);

    let components: Vec<ScoreComponent> = weighting
        .factors
        .iter()
        .map(|&(factor, weight)| {
            let value = factor.value(profile);
            ScoreComponent {
                factor,
                label: factor.label(),
                value,
                weight,
                contribution: weight * value,
            }
        })
        .collect();

    let score = components
        .iter()
        .fold(0.0, |total, component| total + component.contribution);

    ScoreResult {
        kind,
        score,
        funding_capacity: score * weighting.capacity_multiplier,
        components,
    }
}
