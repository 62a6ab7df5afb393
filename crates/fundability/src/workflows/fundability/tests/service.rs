use super::common::*;
use crate::workflows::fundability::{
    JsonProfileSource, ProfileKind, ProfileSourceError, RawAttributes, RawProfileSource,
};
use serde_json::json;

struct UnreadableSource;

impl RawProfileSource for UnreadableSource {
    fn raw_attributes(&self) -> Result<RawAttributes, ProfileSourceError> {
        Err(ProfileSourceError::NotAnObject { field: "document" })
    }
}

#[test]
fn evaluate_reads_attributes_through_the_source() {
    let service = service();
    let source = JsonProfileSource::from_value(json!({ "user_data": consumer_document() }));

    let report = service.evaluate(&source, as_of()).expect("report builds");

    assert_eq!(report.profile.naics_code, 541511);
    assert_eq!(report.profile.credit_utilization, 12.0);
    assert_eq!(report.summary.business.gap_count, 3);
}

#[test]
fn evaluate_accepts_attribute_maps_directly() {
    let service = service();
    let attributes = consumer_attributes();

    let from_map = service.evaluate(&attributes, as_of()).expect("report builds");
    let from_json = service
        .evaluate(&JsonProfileSource::from_value(consumer_document()), as_of())
        .expect("report builds");

    assert_eq!(from_map, from_json);
}

#[test]
fn evaluate_propagates_source_errors() {
    let service = service();

    match service.evaluate(&UnreadableSource, as_of()) {
        Err(ProfileSourceError::NotAnObject { field }) => assert_eq!(field, "document"),
        other => panic!("expected source error, got {other:?}"),
    }
}

#[test]
fn score_selects_the_requested_weighting() {
    let service = service();
    let attributes = consumer_attributes();

    let consumer = service
        .score(&attributes, ProfileKind::Consumer)
        .expect("scores");
    let business = service
        .score(&attributes, ProfileKind::Business)
        .expect("scores");

    assert_eq!(consumer.kind, ProfileKind::Consumer);
    assert_eq!(consumer.components.len(), 5);
    assert!((consumer.score - 34.75).abs() < 1e-9);
    assert!(business.score > consumer.score);
}

#[test]
fn service_shares_one_catalog_across_clones() {
    let service = service();
    let clone = (*service).clone();

    assert!(std::ptr::eq(service.catalog(), clone.catalog()));
    assert_eq!(clone.catalog().consumer().len(), 7);
}

#[test]
fn decimal_naics_code_scores_like_its_integer_form() {
    let service = service();
    let mut decimal = consumer_attributes();
    decimal.insert("naics_code".to_string(), json!(541511.0));

    let from_decimal = service.evaluate(&decimal, as_of()).expect("report builds");
    let from_integer = service
        .evaluate(&consumer_attributes(), as_of())
        .expect("report builds");

    assert_eq!(from_decimal.profile.naics_code, 541511);
    assert!(!from_decimal.business_gap_analysis.entries()[0].gap);
    assert_eq!(from_decimal.summary.business, from_integer.summary.business);
}
