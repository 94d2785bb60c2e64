use crate::infra::{parse_form_data, AppState, TemplateDetail};
use axum::body::Bytes;
use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use contract_templates::error::AppError;
use contract_templates::templates::{Assembly, TemplateSummary};
use serde_json::json;

pub(crate) fn router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/templates", get(list_templates))
        .route("/api/v1/templates/:id", get(template_detail))
        .route("/api/v1/templates/:id/validate", post(validate_form))
        .route("/api/v1/templates/:id/render", post(render_form))
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

pub(crate) async fn list_templates(
    Extension(state): Extension<AppState>,
) -> Json<Vec<TemplateSummary>> {
    Json(state.registry.summaries())
}

pub(crate) async fn template_detail(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TemplateDetail>, AppError> {
    let template = state.registry.lookup(&id)?;
    Ok(Json(TemplateDetail::of(template, state.catalog.today())))
}

pub(crate) async fn validate_form(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<serde_json::Value>, AppError> {
    let template = state.registry.lookup(&id)?;
    let data = parse_form_data(&body)?;
    let diagnostics = template.validate(&data);
    Ok(Json(json!({ "diagnostics": diagnostics })))
}

/// Never fails on missing data: gaps come back as diagnostics and placeholders.
pub(crate) async fn render_form(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Assembly>, AppError> {
    state.registry.lookup(&id)?;
    let data = parse_form_data(&body)?;
    Ok(Json(state.registry.assemble(&id, &data)?))
}
