use super::domain::{CreditCategory, ProfileKind};
use super::profile::Profile;
use serde::Serialize;

/// NAICS codes treated as low risk by lenders.
pub const LOW_RISK_NAICS_CODES: [u32; 2] = [541511, 541512];

/// Profile attributes compared against a benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    CreditUtilization,
    PaymentHistory,
    AvgAccountAge,
    OldestAccountAge,
    PublicRecords,
    NewCreditInquiries,
    CreditMix,
    NaicsCode,
    BusinessAge,
    ConsumerAverageFicoScore,
}

impl Metric {
    pub const fn label(self) -> &'static str {
        match self {
            Self::CreditUtilization => "Credit Utilization",
            Self::PaymentHistory => "Payment History",
            Self::AvgAccountAge => "Average Account Age",
            Self::OldestAccountAge => "Oldest Account Age",
            Self::PublicRecords => "Public Records",
            Self::NewCreditInquiries => "New Credit Inquiries",
            Self::CreditMix => "Credit Mix",
            Self::NaicsCode => "NAICS Code",
            Self::BusinessAge => "Business Age",
            Self::ConsumerAverageFicoScore => "Consumer Average FICO Score",
        }
    }
}

/// Metrics measured as plain numbers.
#[derive(Debug, Clone, Copy)]
enum NumericMetric {
    CreditUtilization,
    PaymentHistory,
    AvgAccountAge,
    OldestAccountAge,
    PublicRecords,
    NewCreditInquiries,
    BusinessAge,
    ConsumerAverageFicoScore,
}

impl NumericMetric {
    const fn metric(self) -> Metric {
        match self {
            Self::CreditUtilization => Metric::CreditUtilization,
            Self::PaymentHistory => Metric::PaymentHistory,
            Self::AvgAccountAge => Metric::AvgAccountAge,
            Self::OldestAccountAge => Metric::OldestAccountAge,
            Self::PublicRecords => Metric::PublicRecords,
            Self::NewCreditInquiries => Metric::NewCreditInquiries,
            Self::BusinessAge => Metric::BusinessAge,
            Self::ConsumerAverageFicoScore => Metric::ConsumerAverageFicoScore,
        }
    }

    fn read(self, profile: &Profile) -> f64 {
        match self {
            Self::CreditUtilization => profile.credit_utilization,
            Self::PaymentHistory => profile.payment_history,
            Self::AvgAccountAge => profile.avg_account_age,
            Self::OldestAccountAge => profile.oldest_account_age,
            Self::PublicRecords => profile.public_records,
            Self::NewCreditInquiries => profile.new_credit_inquiries,
            Self::BusinessAge => profile.business_age,
            Self::ConsumerAverageFicoScore => profile.consumer_average_fico_score,
        }
    }
}

/// Observed value of a metric at evaluation time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Code(u32),
    Labels(Vec<String>),
}

/// One benchmark comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GapEntry {
    pub metric: Metric,
    pub metric_label: &'static str,
    pub current_value: MetricValue,
    pub target: &'static str,
    pub gap: bool,
}

/// Benchmark comparisons in declared rule order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GapAnalysis {
    pub kind: ProfileKind,
    pub entries: Vec<GapEntry>,
}

impl GapAnalysis {
    pub fn entries(&self) -> &[GapEntry] {
        &self.entries
    }

    pub fn gaps(&self) -> impl Iterator<Item = &GapEntry> {
        self.entries.iter().filter(|entry| entry.gap)
    }

    pub fn gap_count(&self) -> usize {
        self.gaps().count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
enum Threshold {
    /// Gap when the value reaches the limit.
    Below(f64),
    /// Gap when the value falls short of the minimum.
    AtLeast(f64),
    /// Gap when the value exceeds the maximum.
    AtMost(f64),
}

impl Threshold {
    fn is_gap(self, value: f64) -> bool {
        match self {
            Self::Below(limit) => value >= limit,
            Self::AtLeast(minimum) => value < minimum,
            Self::AtMost(maximum) => value > maximum,
        }
    }
}

/// What a rule reads from the profile and how it judges it.
#[derive(Debug, Clone, Copy)]
enum Benchmark {
    Numeric(NumericMetric, Threshold),
    /// Gap unless the NAICS code is listed.
    NaicsOneOf(&'static [u32]),
    /// Gap unless the credit mix holds every category.
    CreditMixCovers(&'static [CreditCategory]),
}

impl Benchmark {
    const fn metric(self) -> Metric {
        match self {
            Self::Numeric(metric, _) => metric.metric(),
            Self::NaicsOneOf(_) => Metric::NaicsCode,
            Self::CreditMixCovers(_) => Metric::CreditMix,
        }
    }

    fn measure(self, profile: &Profile) -> (MetricValue, bool) {
        match self {
            Self::Numeric(metric, threshold) => {
                let value = metric.read(profile);
                (MetricValue::Number(value), threshold.is_gap(value))
            }
            Self::NaicsOneOf(codes) => (
                MetricValue::Code(profile.naics_code),
                !codes.contains(&profile.naics_code),
            ),
            Self::CreditMixCovers(categories) => (
                MetricValue::Labels(profile.credit_mix.iter().cloned().collect()),
                categories
                    .iter()
                    .any(|category| !profile.credit_mix.contains(category.label())),
            ),
        }
    }
}

struct GapRule {
    benchmark: Benchmark,
    target: &'static str,
}

impl GapRule {
    fn evaluate(&self, profile: &Profile) -> GapEntry {
        let metric = self.benchmark.metric();
        let (current_value, gap) = self.benchmark.measure(profile);

        GapEntry {
            metric,
            metric_label: metric.label(),
            current_value,
            target: self.target,
            gap,
        }
    }
}

const CREDIT_MIX_TARGET: &str = "Revolving, Installment, Mortgage, and Auto accounts";
const UTILIZATION_TARGET: &str = "Below 10%";

const CONSUMER_RULES: [GapRule; 7] = [
    GapRule {
        benchmark: Benchmark::Numeric(NumericMetric::CreditUtilization, Threshold::Below(10.0)),
        target: UTILIZATION_TARGET,
    },
    GapRule {
        benchmark: Benchmark::Numeric(NumericMetric::PaymentHistory, Threshold::AtLeast(100.0)),
        target: "100% on-time payments",
    },
    GapRule {
        benchmark: Benchmark::Numeric(NumericMetric::AvgAccountAge, Threshold::AtLeast(10.0)),
        target: "10+ years",
    },
    GapRule {
        benchmark: Benchmark::Numeric(NumericMetric::OldestAccountAge, Threshold::AtLeast(15.0)),
        target: "15+ years",
    },
    GapRule {
        benchmark: Benchmark::Numeric(NumericMetric::PublicRecords, Threshold::AtMost(0.0)),
        target: "No public records",
    },
    GapRule {
        benchmark: Benchmark::Numeric(NumericMetric::NewCreditInquiries, Threshold::AtMost(2.0)),
        target: "2 or fewer in the last 12 months",
    },
    GapRule {
        benchmark: Benchmark::CreditMixCovers(&CreditCategory::ALL),
        target: CREDIT_MIX_TARGET,
    },
];

const BUSINESS_RULES: [GapRule; 5] = [
    GapRule {
        benchmark: Benchmark::NaicsOneOf(&LOW_RISK_NAICS_CODES),
        target: "Low-risk NAICS code (541511 or 541512)",
    },
    GapRule {
        benchmark: Benchmark::Numeric(NumericMetric::CreditUtilization, Threshold::Below(10.0)),
        target: UTILIZATION_TARGET,
    },
    GapRule {
        benchmark: Benchmark::Numeric(NumericMetric::BusinessAge, Threshold::AtLeast(5.0)),
        target: "5+ years in business",
    },
    GapRule {
        benchmark: Benchmark::CreditMixCovers(&CreditCategory::ALL),
        target: CREDIT_MIX_TARGET,
    },
    GapRule {
        benchmark: Benchmark::Numeric(
            NumericMetric::ConsumerAverageFicoScore,
            Threshold::AtLeast(700.0),
        ),
        target: "700+ average owner FICO score",
    },
];

/// Compare a profile against the fixed benchmarks for `kind`, one entry per rule.
pub fn analyze_gaps(profile: &Profile, kind: ProfileKind) -> GapAnalysis {
    let rules: &[GapRule] = match kind {
        ProfileKind::Consumer => &CONSUMER_RULES,
        ProfileKind::Business => &BUSINESS_RULES,
    };

    GapAnalysis {
        kind,
        entries: rules.iter().map(|rule| rule.evaluate(profile)).collect(),
    }
}
