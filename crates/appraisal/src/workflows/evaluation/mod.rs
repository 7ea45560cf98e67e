//! Evaluation scoring and step-wizard workflow engine.
//!
//! The resolver fixes the category set, indicator subsets, and weight table
//! once per evaluation instance from the employee's branch/position and the
//! chosen evaluation type. Indicator scores flow through the aggregate and
//! overall modules on every mutation, and the submission guard gates the one
//! outbound call to the evaluation backend.

pub mod aggregate;
pub mod catalog;
pub mod directory;
pub mod domain;
pub mod overall;
pub mod resolver;
pub mod router;
pub mod scores;
pub mod service;
pub mod session;
pub mod submission;
pub mod views;
pub mod wizard;

#[cfg(test)]
mod tests;

pub use catalog::{CategoryId, IndicatorTemplate};
pub use directory::{DirectoryError, DirectoryProvider};
pub use domain::{
    CoveragePeriod, EmployeeId, EmployeeSnapshot, EvaluationError, EvaluationType, EvaluatorId,
    EvaluatorSnapshot, Quarter, RatingLabel, ReviewType,
};
pub use overall::{CategoryContribution, OverallResult, MAX_TOTAL, PASSING_TOTAL};
pub use resolver::{resolve, CategoryStep, ConfigurationKind, EvaluationConfiguration};
pub use router::evaluation_router;
pub use scores::{IndicatorEntry, IndicatorScoreStore};
pub use service::{
    AssessmentRequest, EvaluationService, ScoreEntryRequest, ServiceError, SessionId,
    StartEvaluationRequest,
};
pub use session::EvaluationSession;
pub use submission::{
    BackendError, ConfirmationSummary, EvaluationBackend, EvaluationSubmission,
    IndicatorScoreRecord, SubmissionError, SubmissionGuard, SubmissionPhase, SubmissionReceipt,
};
pub use views::{OverallView, SessionStatusView, StepView};
pub use wizard::{SessionFlags, StepWizard, WizardStep};
