use crate::infra::AppState;
use appraisal::workflows::evaluation::{
    evaluation_router, resolve, ConfigurationKind, DirectoryProvider, EmployeeId, EmployeeSnapshot,
    EvaluationBackend, EvaluationService, EvaluationType,
};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct ConfigurationPreviewRequest {
    pub(crate) branch_name: String,
    pub(crate) branch_code: String,
    pub(crate) position_title: String,
    pub(crate) evaluation_type: EvaluationType,
    #[serde(default)]
    pub(crate) force_job_targets: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct ConfigurationPreviewResponse {
    pub(crate) configuration: ConfigurationKind,
    pub(crate) uses_target_breakdown: bool,
    pub(crate) total_weight: u32,
    pub(crate) steps: Vec<ConfigurationStepEntry>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ConfigurationStepEntry {
    pub(crate) category: &'static str,
    pub(crate) weight: u8,
    pub(crate) indicators: Vec<&'static str>,
}

pub(crate) fn with_portal_routes<D, B>(service: Arc<EvaluationService<D, B>>) -> axum::Router
where
    D: DirectoryProvider + 'static,
    B: EvaluationBackend + 'static,
{
    evaluation_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/configurations/preview",
            axum::routing::post(configuration_preview_endpoint),
        )
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

/// Resolve a configuration for an ad-hoc employee profile without starting a
/// session. Lets HR verify which form a role would receive.
pub(crate) async fn configuration_preview_endpoint(
    Json(payload): Json<ConfigurationPreviewRequest>,
) -> Json<ConfigurationPreviewResponse> {
    let ConfigurationPreviewRequest {
        branch_name,
        branch_code,
        position_title,
        evaluation_type,
        force_job_targets,
    } = payload;

    let employee = EmployeeSnapshot {
        id: EmployeeId("preview".to_string()),
        full_name: String::new(),
        branch_name,
        branch_code,
        position_title,
    };
    let configuration = resolve(&employee, evaluation_type, force_job_targets);

    let steps = configuration
        .steps
        .iter()
        .map(|step| ConfigurationStepEntry {
            category: step.category.title(),
            weight: step.weight,
            indicators: step.indicator_keys().collect(),
        })
        .collect();

    Json(ConfigurationPreviewResponse {
        configuration: configuration.kind,
        uses_target_breakdown: configuration.uses_target_breakdown,
        total_weight: configuration.total_weight(),
        steps,
    })
}
