use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use fundability::{fundability_router, FundabilityService};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_fundability_routes(service: Arc<FundabilityService>) -> axum::Router {
    fundability_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use chrono::NaiveDate;
    use fundability::{load_catalog, RawCatalog, RawTradeline};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::Value;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tower::ServiceExt;

    fn service() -> Arc<FundabilityService> {
        let as_of = NaiveDate::from_ymd_opt(2024, 6, 15).expect("valid date");
        let consumer = ["Navy Federal", "Chase Freedom", "Discover It"]
            .into_iter()
            .map(|name| RawTradeline {
                name: name.to_string(),
                ..RawTradeline::default()
            })
            .collect();
        let catalog = load_catalog(
            RawCatalog {
                consumer,
                ..RawCatalog::default()
            },
            as_of,
        )
        .expect("catalog loads");
        Arc::new(FundabilityService::new(Arc::new(catalog)))
    }

    fn app(ready: bool) -> axum::Router {
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };
        with_fundability_routes(service()).layer(Extension(state))
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body readable");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let response = app(false)
            .oneshot(Request::get("/health").body(Body::empty()).expect("request"))
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn readiness_tracks_the_startup_flag() {
        let pending = app(false)
            .oneshot(Request::get("/ready").body(Body::empty()).expect("request"))
            .await
            .expect("router responds");
        let ready = app(true)
            .oneshot(Request::get("/ready").body(Body::empty()).expect("request"))
            .await
            .expect("router responds");

        assert_eq!(pending.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(ready.status(), StatusCode::OK);
        assert_eq!(json_body(ready).await["status"], "ready");
    }

    #[tokio::test]
    async fn readiness_flag_is_shared_with_the_server() {
        let flag = Arc::new(AtomicBool::new(false));
        let state = AppState {
            readiness: flag.clone(),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };
        flag.store(true, Ordering::Release);

        let response = readiness_endpoint(Extension(state)).await.into_response();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn metrics_are_served_as_prometheus_text() {
        let response = app(true)
            .oneshot(Request::get("/metrics").body(Body::empty()).expect("request"))
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok()),
            Some("text/plain; version=0.0.4")
        );
    }

    #[tokio::test]
    async fn report_route_is_mounted_alongside_health_checks() {
        let body = json!({ "payment_history": 99, "report_date": "2024-06-15" });
        let response = app(true)
            .oneshot(
                Request::post("/api/v1/fundability/report")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(serde_json::to_vec(&body).expect("serializes")))
                    .expect("request"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let report = json_body(response).await;
        assert_eq!(
            report["consumer_recommendations"]["Best"]["tradelines"]
                .as_array()
                .expect("tradelines")
                .len(),
            3
        );
    }
}
