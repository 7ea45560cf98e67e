use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::directory::DirectoryProvider;
use super::service::{
    AssessmentRequest, EvaluationService, ScoreEntryRequest, ServiceError, StartEvaluationRequest,
};
use super::submission::{EvaluationBackend, SubmissionError};

/// Router builder exposing the evaluation wizard over HTTP.
pub fn evaluation_router<D, B>(service: Arc<EvaluationService<D, B>>) -> Router
where
    D: DirectoryProvider + 'static,
    B: EvaluationBackend + 'static,
{
    Router::new()
        .route("/api/v1/evaluations", post(start_handler::<D, B>))
        .route("/api/v1/evaluations/:session_id", get(status_handler::<D, B>))
        .route(
            "/api/v1/evaluations/:session_id/scores",
            post(score_handler::<D, B>),
        )
        .route(
            "/api/v1/evaluations/:session_id/assessment",
            post(assessment_handler::<D, B>),
        )
        .route(
            "/api/v1/evaluations/:session_id/advance",
            post(advance_handler::<D, B>),
        )
        .route(
            "/api/v1/evaluations/:session_id/back",
            post(back_handler::<D, B>),
        )
        .route(
            "/api/v1/evaluations/:session_id/confirm",
            post(confirm_handler::<D, B>),
        )
        .route(
            "/api/v1/evaluations/:session_id/submit",
            post(submit_handler::<D, B>),
        )
        .with_state(service)
}

fn error_response(error: ServiceError) -> Response {
    let status = match &error {
        ServiceError::SessionNotFound(_)
        | ServiceError::UnknownEmployee(_)
        | ServiceError::UnknownEvaluator(_) => StatusCode::NOT_FOUND,
        ServiceError::Evaluation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ServiceError::Submission(SubmissionError::Backend(_)) => StatusCode::BAD_GATEWAY,
        ServiceError::Submission(SubmissionError::AlreadyInFlight)
        | ServiceError::Submission(SubmissionError::AlreadySubmitted) => StatusCode::CONFLICT,
        ServiceError::Submission(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ServiceError::Directory(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}

pub(crate) async fn start_handler<D, B>(
    State(service): State<Arc<EvaluationService<D, B>>>,
    axum::Json(request): axum::Json<StartEvaluationRequest>,
) -> Response
where
    D: DirectoryProvider + 'static,
    B: EvaluationBackend + 'static,
{
    match service.start(request) {
        Ok(view) => (StatusCode::CREATED, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn status_handler<D, B>(
    State(service): State<Arc<EvaluationService<D, B>>>,
    Path(session_id): Path<String>,
) -> Response
where
    D: DirectoryProvider + 'static,
    B: EvaluationBackend + 'static,
{
    match service.status(&session_id) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn score_handler<D, B>(
    State(service): State<Arc<EvaluationService<D, B>>>,
    Path(session_id): Path<String>,
    axum::Json(request): axum::Json<ScoreEntryRequest>,
) -> Response
where
    D: DirectoryProvider + 'static,
    B: EvaluationBackend + 'static,
{
    match service.record_score(&session_id, request) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn assessment_handler<D, B>(
    State(service): State<Arc<EvaluationService<D, B>>>,
    Path(session_id): Path<String>,
    axum::Json(request): axum::Json<AssessmentRequest>,
) -> Response
where
    D: DirectoryProvider + 'static,
    B: EvaluationBackend + 'static,
{
    match service.set_assessment(&session_id, request) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn advance_handler<D, B>(
    State(service): State<Arc<EvaluationService<D, B>>>,
    Path(session_id): Path<String>,
) -> Response
where
    D: DirectoryProvider + 'static,
    B: EvaluationBackend + 'static,
{
    match service.advance(&session_id) {
        Ok(step) => (StatusCode::OK, axum::Json(step)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn back_handler<D, B>(
    State(service): State<Arc<EvaluationService<D, B>>>,
    Path(session_id): Path<String>,
) -> Response
where
    D: DirectoryProvider + 'static,
    B: EvaluationBackend + 'static,
{
    match service.retreat(&session_id) {
        Ok(step) => (StatusCode::OK, axum::Json(step)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn confirm_handler<D, B>(
    State(service): State<Arc<EvaluationService<D, B>>>,
    Path(session_id): Path<String>,
) -> Response
where
    D: DirectoryProvider + 'static,
    B: EvaluationBackend + 'static,
{
    match service.confirm(&session_id) {
        Ok(summary) => (StatusCode::OK, axum::Json(summary)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn submit_handler<D, B>(
    State(service): State<Arc<EvaluationService<D, B>>>,
    Path(session_id): Path<String>,
) -> Response
where
    D: DirectoryProvider + 'static,
    B: EvaluationBackend + 'static,
{
    match service.submit(&session_id) {
        Ok(receipt) => (StatusCode::ACCEPTED, axum::Json(receipt)).into_response(),
        Err(error) => error_response(error),
    }
}
