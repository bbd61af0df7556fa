use crate::infra::{export_filename, AppState, SummaryRequest};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::Local;
use serde_json::json;
use structural_summary::error::AppError;
use structural_summary::export::to_csv_string;
use structural_summary::{CalculationResult, FormSubmission};
use tracing::info;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/structural-summary", post(summary_endpoint))
        .route("/api/v1/structural-summary/form", post(form_endpoint))
        .route("/api/v1/structural-summary/csv", post(csv_endpoint))
        .layer(Extension(state))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    if state.is_ready() {
        (StatusCode::OK, Json(json!({ "status": "ready" })))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "initializing" })),
        )
    }
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn summary_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<SummaryRequest>,
) -> Result<(StatusCode, Json<CalculationResult>), AppError> {
    state.check_rows(payload.responses.len())?;
    let result = state.calculator.calculate(&payload.responses);
    Ok(respond(payload.responses.len(), result))
}

pub(crate) async fn form_endpoint(
    Extension(state): Extension<AppState>,
    Json(submission): Json<FormSubmission>,
) -> Result<(StatusCode, Json<CalculationResult>), AppError> {
    state.check_rows(submission.total_rows)?;
    let responses = submission.responses();
    let result = state.calculator.calculate(&responses);
    Ok(respond(responses.len(), result))
}

pub(crate) async fn csv_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<SummaryRequest>,
) -> Result<Response, AppError> {
    state.check_rows(payload.responses.len())?;
    match state.calculator.calculate(&payload.responses) {
        CalculationResult::Success { data } => {
            let body = to_csv_string(&data)?;
            let disposition = format!(
                "attachment; filename=\"{}\"",
                export_filename(Local::now().date_naive())
            );
            info!(responses = payload.responses.len(), "structural summary exported");
            Ok((
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                body,
            )
                .into_response())
        }
        failure => Ok(respond(payload.responses.len(), failure).into_response()),
    }
}

fn respond(rows: usize, result: CalculationResult) -> (StatusCode, Json<CalculationResult>) {
    let success = result.is_success();
    info!(responses = rows, success, "structural summary calculated");
    let status = if success {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };
    (status, Json(result))
}
