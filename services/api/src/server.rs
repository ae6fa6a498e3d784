use crate::cli::ServeArgs;
use crate::infra::{open_backend, AppState};
use crate::routes::with_candidate_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use take_me_hire::config::AppConfig;
use take_me_hire::error::AppError;
use take_me_hire::marketplace::{CandidatePersistence, CandidateStore};
use take_me_hire::telemetry;
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
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let backend = open_backend(&config.storage);
    let store = CandidateStore::open(CandidatePersistence::new(backend));
    info!(candidates = store.len(), "candidate store ready");
    let store = Arc::new(Mutex::new(store));

    let app = with_candidate_routes(store)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "take me hire listening");

    axum::serve(listener, app).await?;
    Ok(())
}
