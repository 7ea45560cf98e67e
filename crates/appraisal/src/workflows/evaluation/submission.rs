use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::catalog::CategoryId;
use super::domain::{CoveragePeriod, EmployeeId, EvaluatorId, RatingLabel, ReviewType};
use super::session::EvaluationSession;

/// Where one evaluation instance stands on the road to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionPhase {
    Drafting,
    Confirming,
    Submitting,
    Submitted,
}

impl SubmissionPhase {
    pub const fn label(self) -> &'static str {
        match self {
            SubmissionPhase::Drafting => "drafting",
            SubmissionPhase::Confirming => "confirming",
            SubmissionPhase::Submitting => "submitting",
            SubmissionPhase::Submitted => "submitted",
        }
    }
}

/// Summary shown on the confirmation dialog before the irreversible submit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfirmationSummary {
    pub employee_name: String,
    pub weighted_total: f64,
    pub percentage: f64,
    pub rating: RatingLabel,
    pub pass: bool,
}

/// One scored indicator inside the outbound payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorScoreRecord {
    pub category: CategoryId,
    pub indicator: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Full instance payload handed to the external evaluation backend. There is
/// no partial submit; a failed attempt is retried as a full resubmission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationSubmission {
    pub employee: EmployeeId,
    pub evaluator: EvaluatorId,
    pub configuration: &'static str,
    pub review_type: ReviewType,
    pub coverage_period: CoveragePeriod,
    pub indicator_scores: Vec<IndicatorScoreRecord>,
    pub weighted_total: f64,
    pub percentage: f64,
    pub rating: RatingLabel,
    pub pass: bool,
    pub priority_areas: Vec<String>,
    pub remarks: String,
    pub created_at: DateTime<Utc>,
}

/// Acknowledgement returned by the backend on acceptance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub reference: String,
    pub accepted_at: DateTime<Utc>,
}

/// Structured error from the evaluation backend; the message is surfaced to
/// the evaluator verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    #[error("evaluation rejected: {0}")]
    Rejected(String),
    #[error("evaluation backend unavailable: {0}")]
    Unavailable(String),
}

/// The single outbound call this engine owns.
pub trait EvaluationBackend: Send + Sync {
    fn submit_evaluation(
        &self,
        submission: &EvaluationSubmission,
    ) -> Result<SubmissionReceipt, BackendError>;
}

/// Everything that can stop a submission before or at the backend call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("evaluator has no signature on file; add a signature before submitting")]
    SignatureRequired,
    #[error("the overall assessment step must be reached before submitting")]
    NotAtFinalStep,
    #[error("between one and three priority areas must be recorded before submitting")]
    PriorityAreasMissing,
    #[error("submission must be confirmed before it is sent")]
    NotConfirmed,
    #[error("a submission for this evaluation is already in flight")]
    AlreadyInFlight,
    #[error("this evaluation has already been submitted")]
    AlreadySubmitted,
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Enforces the submission protocol: signature precondition, explicit
/// confirmation, a single in-flight submit, and irreversibility on success.
pub struct SubmissionGuard;

impl SubmissionGuard {
    /// Whether the evaluator clears the signature precondition at all.
    pub fn can_submit(session: &EvaluationSession) -> bool {
        session.evaluator().has_signature()
    }

    /// Move the session into the confirmable state and produce the summary
    /// the evaluator must explicitly approve.
    pub fn begin_confirmation(
        session: &mut EvaluationSession,
    ) -> Result<ConfirmationSummary, SubmissionError> {
        match session.phase() {
            SubmissionPhase::Submitting => return Err(SubmissionError::AlreadyInFlight),
            SubmissionPhase::Submitted => return Err(SubmissionError::AlreadySubmitted),
            SubmissionPhase::Drafting | SubmissionPhase::Confirming => {}
        }
        if !session.wizard().at_terminal() {
            return Err(SubmissionError::NotAtFinalStep);
        }
        if !Self::can_submit(session) {
            return Err(SubmissionError::SignatureRequired);
        }
        if session.priority_areas().is_empty() {
            return Err(SubmissionError::PriorityAreasMissing);
        }

        session.set_phase(SubmissionPhase::Confirming);

        let snapshot = session.snapshot();
        Ok(ConfirmationSummary {
            employee_name: session.employee().full_name.clone(),
            weighted_total: snapshot.weighted_total,
            percentage: snapshot.percentage,
            rating: snapshot.rating,
            pass: snapshot.pass,
        })
    }

    /// Back out of the confirmation dialog without submitting.
    pub fn cancel_confirmation(session: &mut EvaluationSession) {
        if session.phase() == SubmissionPhase::Confirming {
            session.set_phase(SubmissionPhase::Drafting);
        }
    }

    /// Send the confirmed instance to the backend. Success freezes the
    /// session permanently; failure returns it to the confirmable state with
    /// the backend error passed through unchanged.
    pub fn submit<B: EvaluationBackend + ?Sized>(
        session: &mut EvaluationSession,
        backend: &B,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        match session.phase() {
            SubmissionPhase::Confirming => {}
            SubmissionPhase::Submitting => return Err(SubmissionError::AlreadyInFlight),
            SubmissionPhase::Submitted => return Err(SubmissionError::AlreadySubmitted),
            SubmissionPhase::Drafting => return Err(SubmissionError::NotConfirmed),
        }
        if !Self::can_submit(session) {
            return Err(SubmissionError::SignatureRequired);
        }

        session.set_phase(SubmissionPhase::Submitting);
        let payload = Self::payload(session);

        match backend.submit_evaluation(&payload) {
            Ok(receipt) => {
                session.set_phase(SubmissionPhase::Submitted);
                info!(
                    employee = %payload.employee.0,
                    reference = %receipt.reference,
                    weighted_total = payload.weighted_total,
                    "evaluation accepted by backend"
                );
                Ok(receipt)
            }
            Err(error) => {
                session.set_phase(SubmissionPhase::Confirming);
                Err(SubmissionError::Backend(error))
            }
        }
    }

    /// Assemble the full outbound payload from the session state.
    pub fn payload(session: &EvaluationSession) -> EvaluationSubmission {
        let snapshot = session.snapshot();
        let indicator_scores = session
            .scores()
            .iter()
            .map(|(key, category, entry)| IndicatorScoreRecord {
                category,
                indicator: key.to_owned(),
                score: entry.score,
                comment: entry.comment.clone(),
            })
            .collect();

        EvaluationSubmission {
            employee: session.employee().id.clone(),
            evaluator: session.evaluator().id.clone(),
            configuration: session.configuration().kind.label(),
            review_type: session.review_type().clone(),
            coverage_period: session.coverage_period(),
            indicator_scores,
            weighted_total: snapshot.weighted_total,
            percentage: snapshot.percentage,
            rating: snapshot.rating,
            pass: snapshot.pass,
            priority_areas: session.priority_areas().to_vec(),
            remarks: session.remarks().to_owned(),
            created_at: session.created_at(),
        }
    }
}
