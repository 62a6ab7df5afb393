use std::sync::Arc;

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::{json, Value};

use crate::workflows::catalog::{load_catalog, Catalog, RawCatalog, RawDatePart, RawTradeline};
use crate::workflows::fundability::{FundabilityService, RawAttributes};

pub(super) fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).expect("valid date")
}

fn tradeline(name: &str, year: i64, category: &str, price: f64) -> RawTradeline {
    RawTradeline {
        name: name.to_string(),
        category: Some(category.to_string()),
        year: Some(RawDatePart::Number(year)),
        month: Some(RawDatePart::Number(3)),
        price: Some(price),
        ..RawTradeline::default()
    }
}

pub(super) fn catalog() -> Catalog {
    load_catalog(
        RawCatalog {
            business: vec![
                tradeline("Uline", 2004, "Net 30", 0.0),
                tradeline("Quill", 2009, "Net 30", 0.0),
                tradeline("Grainger", 1998, "Net 30", 0.0),
            ],
            consumer: vec![
                tradeline("Navy Federal Visa", 2008, "Revolving", 1_200.0),
                tradeline("Chase Freedom", 2011, "Revolving", 950.0),
                tradeline("Discover It", 2014, "Revolving", 700.0),
                tradeline("Capital One Quicksilver", 2016, "Revolving", 500.0),
                tradeline("Citi Double Cash", 2012, "Revolving", 850.0),
                tradeline("Amex Blue Cash", 2006, "Revolving", 1_400.0),
                tradeline("Bank of America Cash", 2019, "Revolving", 400.0),
            ],
            authorized_users: vec![
                tradeline("Amex Platinum AU", 2001, "Revolving", 1_800.0),
                tradeline("Chase Sapphire AU", 2005, "Revolving", 1_500.0),
                tradeline("US Bank AU", 2010, "Revolving", 600.0),
            ],
        },
        as_of(),
    )
    .expect("fixture catalog loads")
}

pub(super) fn service() -> Arc<FundabilityService> {
    Arc::new(FundabilityService::new(Arc::new(catalog())))
}

pub(super) fn consumer_document() -> Value {
    json!({
        "payment_history": 85,
        "credit_utilization": "12%",
        "avg_account_age": 6,
        "oldest_account_age": "11",
        "public_records": 0,
        "new_credit_inquiries": 3,
        "credit_mix": ["Revolving", "Installment"],
        "naics_code": "541511",
        "business_age": 2,
        "consumer_average_fico_score": 705,
    })
}

pub(super) fn consumer_attributes() -> RawAttributes {
    match consumer_document() {
        Value::Object(fields) => fields,
        other => panic!("expected object, got {other}"),
    }
}

pub(super) async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}
