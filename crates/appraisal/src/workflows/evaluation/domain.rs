use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for employees under review.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeId(pub String);

/// Identifier wrapper for the evaluator conducting the review.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EvaluatorId(pub String);

/// Read-only employee facts sourced from the identity/profile subsystem.
///
/// Branch and position are free-text labels maintained by HR; the resolver
/// derives all role classifications from them by substring matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSnapshot {
    pub id: EmployeeId,
    pub full_name: String,
    pub branch_name: String,
    pub branch_code: String,
    pub position_title: String,
}

/// Read-only evaluator facts, including whether a signature is on file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluatorSnapshot {
    pub id: EvaluatorId,
    pub full_name: String,
    pub branch_name: String,
    pub position_title: String,
    pub signature_url: Option<String>,
}

impl EvaluatorSnapshot {
    pub fn has_signature(&self) -> bool {
        self.signature_url
            .as_deref()
            .map(|url| !url.trim().is_empty())
            .unwrap_or(false)
    }
}

/// Evaluation-type flag chosen by the evaluator when the session starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationType {
    #[default]
    Default,
    RankAndFile,
    Basic,
}

impl EvaluationType {
    pub const fn label(self) -> &'static str {
        match self {
            EvaluationType::Default => "default",
            EvaluationType::RankAndFile => "rank_and_file",
            EvaluationType::Basic => "basic",
        }
    }
}

/// Calendar quarter for quarterly reviews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    pub const fn label(self) -> &'static str {
        match self {
            Quarter::Q1 => "Q1",
            Quarter::Q2 => "Q2",
            Quarter::Q3 => "Q3",
            Quarter::Q4 => "Q4",
        }
    }
}

/// Kind of review cycle the evaluation instance belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum ReviewType {
    ProbationaryThirdMonth,
    ProbationaryFifthMonth,
    Quarterly(Quarter),
    Improvement,
    Custom(String),
}

impl ReviewType {
    pub fn label(&self) -> String {
        match self {
            ReviewType::ProbationaryThirdMonth => "3rd month probationary".to_string(),
            ReviewType::ProbationaryFifthMonth => "5th month probationary".to_string(),
            ReviewType::Quarterly(quarter) => format!("quarterly {}", quarter.label()),
            ReviewType::Improvement => "performance improvement".to_string(),
            ReviewType::Custom(label) => label.clone(),
        }
    }
}

/// Inclusive date range the evaluation covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoveragePeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl CoveragePeriod {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, EvaluationError> {
        if end < start {
            return Err(EvaluationError::InvalidCoveragePeriod { start, end });
        }
        Ok(Self { start, end })
    }
}

/// Qualitative band for a numeric average, never stored independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingLabel {
    Outstanding,
    ExceedsExpectations,
    MeetsExpectations,
    NeedsImprovement,
    Unsatisfactory,
}

impl RatingLabel {
    /// Canonical band cutoffs. The 4.0 "Exceeds Expectations" cutoff is the
    /// pinned behavior where historical call sites disagreed.
    pub fn from_average(average: f64) -> Self {
        if average >= 4.5 {
            RatingLabel::Outstanding
        } else if average >= 4.0 {
            RatingLabel::ExceedsExpectations
        } else if average >= 3.5 {
            RatingLabel::MeetsExpectations
        } else if average >= 2.5 {
            RatingLabel::NeedsImprovement
        } else {
            RatingLabel::Unsatisfactory
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RatingLabel::Outstanding => "Outstanding",
            RatingLabel::ExceedsExpectations => "Exceeds Expectations",
            RatingLabel::MeetsExpectations => "Meets Expectations",
            RatingLabel::NeedsImprovement => "Needs Improvement",
            RatingLabel::Unsatisfactory => "Unsatisfactory",
        }
    }
}

/// Error enumeration for score-entry and session mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvaluationError {
    #[error("score {0} is out of range; indicator scores run from 1 to 5")]
    ScoreOutOfRange(u8),
    #[error("indicator '{0}' is not part of this evaluation configuration")]
    UnknownIndicator(String),
    #[error("evaluation has been submitted and can no longer be edited")]
    SessionLocked,
    #[error("between one and three priority areas are required, got {0}")]
    InvalidPriorityAreas(usize),
    #[error("coverage period ends ({end}) before it starts ({start})")]
    InvalidCoveragePeriod { start: NaiveDate, end: NaiveDate },
}
