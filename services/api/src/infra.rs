use chrono::NaiveDate;
use fundability::ProfileKind;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_kind(raw: &str) -> Result<ProfileKind, String> {
    ProfileKind::parse(raw).ok_or_else(|| format!("'{raw}' is not one of consumer, business"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_reports_the_raw_value() {
        let error = parse_date("06/15/2024").expect_err("wrong format");

        assert!(error.contains("'06/15/2024'"));
        assert_eq!(
            parse_date(" 2024-06-15 ").expect("parses"),
            NaiveDate::from_ymd_opt(2024, 6, 15).expect("valid date")
        );
    }

    #[test]
    fn parse_kind_accepts_personal_as_consumer() {
        assert_eq!(parse_kind("Personal"), Ok(ProfileKind::Consumer));
        assert!(parse_kind("nonprofit").is_err());
    }
}
