use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_fundability_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use chrono::Local;
use fundability::config::AppConfig;
use fundability::error::AppError;
use fundability::telemetry;
use fundability::{Catalog, FundabilityService};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    // Tradeline ages are fixed at startup for the life of the process.
    let catalog = Catalog::from_config(&config.catalog, Local::now().date_naive())?;
    let service = Arc::new(FundabilityService::new(Arc::new(catalog)));

    let app = with_fundability_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "fundability engine ready");

    axum::serve(listener, app).await?;
    Ok(())
}
