use serde::Serialize;

use super::catalog::CategoryId;
use super::overall::OverallResult;
use super::session::EvaluationSession;
use super::wizard::WizardStep;

/// One indicator row of a category step, with whatever has been entered.
#[derive(Debug, Clone, Serialize)]
pub struct IndicatorView {
    pub key: &'static str,
    pub statement: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// The category payload of a rendered wizard step.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryStepView {
    pub category: CategoryId,
    pub title: &'static str,
    pub weight: u8,
    pub average: f64,
    pub rating: &'static str,
    pub indicators: Vec<IndicatorView>,
    pub job_targets_notice: bool,
}

/// The wizard position currently rendered.
#[derive(Debug, Clone, Serialize)]
pub struct StepView {
    pub position: usize,
    pub total: usize,
    pub title: String,
    pub terminal: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryStepView>,
}

/// One row of the overall-assessment table.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryRowView {
    pub category: CategoryId,
    pub title: &'static str,
    pub weight: u8,
    pub average: f64,
    pub weighted: f64,
    pub rating: &'static str,
    pub rated_indicators: usize,
    pub total_indicators: usize,
}

/// The computed overall result in display form.
#[derive(Debug, Clone, Serialize)]
pub struct OverallView {
    pub weighted_total: f64,
    pub percentage: f64,
    pub pass: bool,
    pub rating: &'static str,
    pub categories: Vec<CategoryRowView>,
}

impl OverallView {
    pub fn from_result(result: &OverallResult) -> Self {
        Self {
            weighted_total: result.weighted_total,
            percentage: result.percentage,
            pass: result.pass,
            rating: result.rating.label(),
            categories: result
                .contributions
                .iter()
                .map(|contribution| CategoryRowView {
                    category: contribution.category,
                    title: contribution.category.title(),
                    weight: contribution.weight,
                    average: contribution.average,
                    weighted: contribution.weighted,
                    rating: contribution.rating.label(),
                    rated_indicators: contribution.rated_indicators,
                    total_indicators: contribution.total_indicators,
                })
                .collect(),
        }
    }
}

/// Sanitized full-session projection for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct SessionStatusView {
    pub session_id: String,
    pub employee: String,
    pub evaluator: String,
    pub configuration: &'static str,
    pub review_type: String,
    pub phase: &'static str,
    pub step: StepView,
    pub overall: OverallView,
    pub priority_areas: Vec<String>,
    pub remarks: String,
}

pub fn step_view(session: &EvaluationSession) -> StepView {
    let wizard = session.wizard();
    let position = wizard.position();
    let total = wizard.len();

    match session.current_step() {
        WizardStep::OverallAssessment => StepView {
            position,
            total,
            title: "Overall Assessment".to_string(),
            terminal: true,
            category: None,
        },
        WizardStep::Category { category } => {
            let step = session
                .configuration()
                .step_for(category)
                .expect("wizard step always maps to a configured category");

            let contribution = session
                .snapshot()
                .contributions
                .iter()
                .find(|contribution| contribution.category == category);

            let indicators = step
                .indicators
                .iter()
                .map(|template| {
                    let entry = session.scores().entry(template.key);
                    IndicatorView {
                        key: template.key,
                        statement: template.statement,
                        score: entry.and_then(|entry| entry.score),
                        comment: entry.and_then(|entry| entry.comment.clone()),
                    }
                })
                .collect();

            StepView {
                position,
                total,
                title: category.title().to_string(),
                terminal: false,
                category: Some(CategoryStepView {
                    category,
                    title: category.title(),
                    weight: step.weight,
                    average: contribution.map(|c| c.average).unwrap_or(0.0),
                    rating: contribution
                        .map(|c| c.rating.label())
                        .unwrap_or("Unsatisfactory"),
                    indicators,
                    job_targets_notice: session.job_targets_notice_due(),
                }),
            }
        }
    }
}

pub fn session_status_view(session_id: &str, session: &EvaluationSession) -> SessionStatusView {
    SessionStatusView {
        session_id: session_id.to_owned(),
        employee: session.employee().full_name.clone(),
        evaluator: session.evaluator().full_name.clone(),
        configuration: session.configuration().kind.label(),
        review_type: session.review_type().label(),
        phase: session.phase().label(),
        step: step_view(session),
        overall: OverallView::from_result(session.snapshot()),
        priority_areas: session.priority_areas().to_vec(),
        remarks: session.remarks().to_owned(),
    }
}
