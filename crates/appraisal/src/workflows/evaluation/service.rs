use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use super::directory::{DirectoryError, DirectoryProvider};
use super::domain::{
    CoveragePeriod, EmployeeId, EvaluationError, EvaluationType, EvaluatorId, ReviewType,
};
use super::session::EvaluationSession;
use super::submission::{
    ConfirmationSummary, EvaluationBackend, SubmissionError, SubmissionGuard, SubmissionReceipt,
};
use super::views::{self, SessionStatusView, StepView};

/// Identifier for one in-progress evaluation session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(pub String);

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("eval-{id:06}"))
}

/// Request payload to start a new evaluation instance.
#[derive(Debug, Clone, Deserialize)]
pub struct StartEvaluationRequest {
    pub employee_id: String,
    pub evaluator_id: String,
    pub evaluation_type: EvaluationType,
    #[serde(default)]
    pub force_job_targets: bool,
    pub review_type: ReviewType,
    pub coverage_start: NaiveDate,
    pub coverage_end: NaiveDate,
}

/// Score-entry payload for one indicator.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoreEntryRequest {
    pub indicator: String,
    #[serde(default)]
    pub score: Option<u8>,
    #[serde(default)]
    pub comment: Option<String>,
    /// Explicitly un-rate the indicator; distinct from leaving `score` out.
    #[serde(default)]
    pub clear: bool,
}

/// Overall-assessment payload: development priorities and remarks.
#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentRequest {
    pub priority_areas: Vec<String>,
    #[serde(default)]
    pub remarks: String,
}

/// Error raised by the evaluation service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("evaluation session '{0}' not found")]
    SessionNotFound(String),
    #[error("employee '{0}' not found in the directory")]
    UnknownEmployee(String),
    #[error("evaluator '{0}' not found in the directory")]
    UnknownEvaluator(String),
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

/// Service composing the directory, the session registry, and the submission
/// guard. Sessions live in memory only; abandoning one discards its scores,
/// which is the documented cancellation contract.
pub struct EvaluationService<D, B> {
    directory: Arc<D>,
    backend: Arc<B>,
    sessions: Mutex<HashMap<SessionId, EvaluationSession>>,
}

impl<D, B> EvaluationService<D, B>
where
    D: DirectoryProvider + 'static,
    B: EvaluationBackend + 'static,
{
    pub fn new(directory: Arc<D>, backend: Arc<B>) -> Self {
        Self {
            directory,
            backend,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Start a new evaluation instance, resolving its configuration once.
    pub fn start(&self, request: StartEvaluationRequest) -> Result<SessionStatusView, ServiceError> {
        let employee_id = EmployeeId(request.employee_id.clone());
        let evaluator_id = EvaluatorId(request.evaluator_id.clone());

        let employee = self
            .directory
            .employee(&employee_id)?
            .ok_or(ServiceError::UnknownEmployee(request.employee_id))?;
        let evaluator = self
            .directory
            .evaluator(&evaluator_id)?
            .ok_or(ServiceError::UnknownEvaluator(request.evaluator_id))?;

        let coverage = CoveragePeriod::new(request.coverage_start, request.coverage_end)?;
        let session = EvaluationSession::start(
            employee,
            evaluator,
            request.evaluation_type,
            request.force_job_targets,
            request.review_type,
            coverage,
        );

        let session_id = next_session_id();
        info!(
            session = %session_id.0,
            configuration = session.configuration().kind.label(),
            steps = session.wizard().len(),
            "evaluation session started"
        );

        let view = views::session_status_view(&session_id.0, &session);
        self.registry().insert(session_id, session);
        Ok(view)
    }

    pub fn status(&self, session_id: &str) -> Result<SessionStatusView, ServiceError> {
        self.with_session(session_id, |id, session| {
            Ok(views::session_status_view(id, session))
        })
    }

    /// Record, amend, or clear one indicator entry; the refreshed status view
    /// reflects the recomputed snapshot.
    pub fn record_score(
        &self,
        session_id: &str,
        request: ScoreEntryRequest,
    ) -> Result<SessionStatusView, ServiceError> {
        self.with_session(session_id, |id, session| {
            if request.clear {
                session.clear_score(&request.indicator)?;
            } else if let Some(score) = request.score {
                session.record_score(&request.indicator, score)?;
            }
            if request.comment.is_some() {
                session.record_comment(&request.indicator, request.comment.clone())?;
            }
            Ok(views::session_status_view(id, session))
        })
    }

    pub fn set_assessment(
        &self,
        session_id: &str,
        request: AssessmentRequest,
    ) -> Result<SessionStatusView, ServiceError> {
        self.with_session(session_id, |id, session| {
            session.set_assessment(request.priority_areas.clone(), request.remarks.clone())?;
            Ok(views::session_status_view(id, session))
        })
    }

    pub fn advance(&self, session_id: &str) -> Result<StepView, ServiceError> {
        self.with_session(session_id, |_, session| {
            session.advance();
            Ok(views::step_view(session))
        })
    }

    pub fn retreat(&self, session_id: &str) -> Result<StepView, ServiceError> {
        self.with_session(session_id, |_, session| {
            session.retreat();
            Ok(views::step_view(session))
        })
    }

    pub fn acknowledge_job_targets_notice(&self, session_id: &str) -> Result<(), ServiceError> {
        self.with_session(session_id, |_, session| {
            session.acknowledge_job_targets_notice();
            Ok(())
        })
    }

    /// Raise the confirmation dialog; the guard checks every precondition.
    pub fn confirm(&self, session_id: &str) -> Result<ConfirmationSummary, ServiceError> {
        self.with_session(session_id, |_, session| {
            Ok(SubmissionGuard::begin_confirmation(session)?)
        })
    }

    pub fn cancel_confirmation(&self, session_id: &str) -> Result<(), ServiceError> {
        self.with_session(session_id, |_, session| {
            SubmissionGuard::cancel_confirmation(session);
            Ok(())
        })
    }

    /// Send the confirmed instance to the backend.
    pub fn submit(&self, session_id: &str) -> Result<SubmissionReceipt, ServiceError> {
        let backend = Arc::clone(&self.backend);
        self.with_session(session_id, move |_, session| {
            Ok(SubmissionGuard::submit(session, backend.as_ref())?)
        })
    }

    fn registry(&self) -> std::sync::MutexGuard<'_, HashMap<SessionId, EvaluationSession>> {
        self.sessions.lock().expect("session registry mutex poisoned")
    }

    fn with_session<T>(
        &self,
        session_id: &str,
        operation: impl FnOnce(&str, &mut EvaluationSession) -> Result<T, ServiceError>,
    ) -> Result<T, ServiceError> {
        let mut registry = self.registry();
        let key = SessionId(session_id.to_owned());
        let session = registry
            .get_mut(&key)
            .ok_or_else(|| ServiceError::SessionNotFound(session_id.to_owned()))?;
        operation(session_id, session)
    }
}
