use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::router;
use axum_prometheus::PrometheusMetricLayer;
use structural_summary::config::AppConfig;
use structural_summary::error::AppError;
use structural_summary::telemetry;
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
    let app_state = AppState::new(prometheus_handle, config.limits);
    let app = router(app_state.clone()).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    app_state.mark_ready();

    info!(
        ?config.environment,
        %addr,
        max_rows = config.limits.max_rows,
        "structural summary service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
