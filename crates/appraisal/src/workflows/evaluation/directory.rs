use super::domain::{EmployeeId, EmployeeSnapshot, EvaluatorId, EvaluatorSnapshot};

/// Read-only view onto the identity/profile subsystem: branch and position
/// strings for the resolver, signature presence for the submission guard.
pub trait DirectoryProvider: Send + Sync {
    fn employee(&self, id: &EmployeeId) -> Result<Option<EmployeeSnapshot>, DirectoryError>;
    fn evaluator(&self, id: &EvaluatorId) -> Result<Option<EvaluatorSnapshot>, DirectoryError>;
}

/// Directory lookup failure.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("directory unavailable: {0}")]
    Unavailable(String),
}
