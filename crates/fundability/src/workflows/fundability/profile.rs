use super::domain::CreditCategory;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use tracing::warn;

/// Attribute mapping handed in by the ingestion layer.
pub type RawAttributes = Map<String, Value>;

/// Attribute names recognized by [`normalize_profile`].
pub mod keys {
    pub const CREDIT_UTILIZATION: &str = "credit_utilization";
    pub const PAYMENT_HISTORY: &str = "payment_history";
    pub const AVG_ACCOUNT_AGE: &str = "avg_account_age";
    pub const OLDEST_ACCOUNT_AGE: &str = "oldest_account_age";
    pub const PUBLIC_RECORDS: &str = "public_records";
    pub const NEW_CREDIT_INQUIRIES: &str = "new_credit_inquiries";
    pub const CREDIT_MIX: &str = "credit_mix";
    pub const NAICS_CODE: &str = "naics_code";
    pub const BUSINESS_AGE: &str = "business_age";
    pub const CONSUMER_AVERAGE_FICO_SCORE: &str = "consumer_average_fico_score";
}

/// Canonical credit profile. Absent attributes are zero, or empty for `credit_mix`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub credit_utilization: f64,
    pub payment_history: f64,
    pub avg_account_age: f64,
    pub oldest_account_age: f64,
    pub public_records: f64,
    pub new_credit_inquiries: f64,
    pub credit_mix: BTreeSet<String>,
    pub naics_code: u32,
    pub business_age: f64,
    pub consumer_average_fico_score: f64,
}

impl Profile {
    pub fn credit_mix_count(&self) -> usize {
        self.credit_mix.len()
    }

    pub fn missing_credit_categories(&self) -> Vec<CreditCategory> {
        CreditCategory::ALL
            .into_iter()
            .filter(|category| !self.credit_mix.contains(category.label()))
            .collect()
    }

    /// Render the profile back into the raw attribute shape accepted by [`normalize_profile`].
    pub fn as_raw(&self) -> RawAttributes {
        let mut raw = RawAttributes::new();
        raw.insert(keys::CREDIT_UTILIZATION.into(), Value::from(self.credit_utilization));
        raw.insert(keys::PAYMENT_HISTORY.into(), Value::from(self.payment_history));
        raw.insert(keys::AVG_ACCOUNT_AGE.into(), Value::from(self.avg_account_age));
        raw.insert(keys::OLDEST_ACCOUNT_AGE.into(), Value::from(self.oldest_account_age));
        raw.insert(keys::PUBLIC_RECORDS.into(), Value::from(self.public_records));
        raw.insert(
            keys::NEW_CREDIT_INQUIRIES.into(),
            Value::from(self.new_credit_inquiries),
        );
        raw.insert(
            keys::CREDIT_MIX.into(),
            Value::Array(
                self.credit_mix
                    .iter()
                    .map(|label| Value::String(label.clone()))
                    .collect(),
            ),
        );
        raw.insert(keys::NAICS_CODE.into(), Value::from(self.naics_code));
        raw.insert(keys::BUSINESS_AGE.into(), Value::from(self.business_age));
        raw.insert(
            keys::CONSUMER_AVERAGE_FICO_SCORE.into(),
            Value::from(self.consumer_average_fico_score),
        );
        raw
    }
}

/// Build a [`Profile`] from raw attributes, substituting defaults for anything absent or
/// unusable. Never fails.
pub fn normalize_profile(raw: &RawAttributes) -> Profile {
    Profile {
        credit_utilization: numeric(raw, keys::CREDIT_UTILIZATION),
        payment_history: numeric(raw, keys::PAYMENT_HISTORY),
        avg_account_age: numeric(raw, keys::AVG_ACCOUNT_AGE),
        oldest_account_age: numeric(raw, keys::OLDEST_ACCOUNT_AGE),
        public_records: numeric(raw, keys::PUBLIC_RECORDS),
        new_credit_inquiries: numeric(raw, keys::NEW_CREDIT_INQUIRIES),
        credit_mix: credit_mix(raw),
        naics_code: naics_code(raw),
        business_age: numeric(raw, keys::BUSINESS_AGE),
        consumer_average_fico_score: numeric(raw, keys::CONSUMER_AVERAGE_FICO_SCORE),
    }
}

fn numeric(raw: &RawAttributes, key: &'static str) -> f64 {
    match raw.get(key) {
        None | Some(Value::Null) => 0.0,
        Some(value) => coerce_number(value).unwrap_or_else(|| {
            warn!(attribute = key, %value, "discarding non-numeric attribute");
            0.0
        }),
    }
}

fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => parse_numeric_text(text),
        _ => None,
    }
}

fn parse_numeric_text(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
    let cleaned: String = trimmed.chars().filter(|c| *c != ',').collect();

    cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn naics_code(raw: &RawAttributes) -> u32 {
    let code = match raw.get(keys::NAICS_CODE) {
        None | Some(Value::Null) => return 0,
        Some(Value::Number(number)) => number
            .as_u64()
            .and_then(|code| u32::try_from(code).ok())
            .or_else(|| number.as_f64().and_then(whole_code)),
        Some(Value::String(text)) => {
            let trimmed = text.trim();
            trimmed
                .parse::<u32>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().and_then(whole_code))
        }
        Some(_) => None,
    };

    code.unwrap_or_else(|| {
        warn!(attribute = keys::NAICS_CODE, "discarding malformed NAICS code");
        0
    })
}

/// Integral, non-negative values that fit a NAICS code. `541511.0` qualifies.
fn whole_code(value: f64) -> Option<u32> {
    (value.is_finite() && value.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&value))
        .then_some(value as u32)
}

fn credit_mix(raw: &RawAttributes) -> BTreeSet<String> {
    let labels: Vec<&str> = match raw.get(keys::CREDIT_MIX) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
        Some(Value::String(text)) => text.split(',').collect(),
        Some(other) => {
            warn!(attribute = keys::CREDIT_MIX, value = %other, "credit mix must list categories");
            Vec::new()
        }
    };

    labels.into_iter().filter_map(canonical_label).collect()
}

fn canonical_label(label: &str) -> Option<String> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return None;
    }

    Some(match CreditCategory::from_label(trimmed) {
        Some(category) => category.label().to_string(),
        None => trimmed.to_string(),
    })
}
