use chrono::{DateTime, Utc};

use super::domain::{
    CoveragePeriod, EmployeeSnapshot, EvaluationError, EvaluationType, EvaluatorSnapshot,
    ReviewType,
};
use super::overall::{self, OverallResult};
use super::resolver::{self, EvaluationConfiguration};
use super::scores::IndicatorScoreStore;
use super::submission::SubmissionPhase;
use super::wizard::{StepWizard, WizardStep};

/// One evaluation instance: the resolved configuration, the indicator score
/// store it owns exclusively, the step wizard, and the always-current score
/// snapshot.
///
/// The configuration is fixed for the lifetime of the instance; evaluating a
/// different employee or switching the evaluation type means starting a new
/// session. Every mutation re-runs the recompute pipeline (store → category
/// averages → overall result) before returning, so the snapshot is never
/// stale.
#[derive(Debug, Clone)]
pub struct EvaluationSession {
    employee: EmployeeSnapshot,
    evaluator: EvaluatorSnapshot,
    configuration: EvaluationConfiguration,
    review_type: ReviewType,
    coverage_period: CoveragePeriod,
    scores: IndicatorScoreStore,
    wizard: StepWizard,
    priority_areas: Vec<String>,
    remarks: String,
    snapshot: OverallResult,
    phase: SubmissionPhase,
    created_at: DateTime<Utc>,
}

impl EvaluationSession {
    pub fn start(
        employee: EmployeeSnapshot,
        evaluator: EvaluatorSnapshot,
        evaluation_type: EvaluationType,
        force_job_targets: bool,
        review_type: ReviewType,
        coverage_period: CoveragePeriod,
    ) -> Self {
        let configuration = resolver::resolve(&employee, evaluation_type, force_job_targets);
        let scores = IndicatorScoreStore::for_configuration(&configuration);
        let wizard = StepWizard::for_configuration(&configuration);
        let snapshot = overall::score(&configuration, &scores);

        Self {
            employee,
            evaluator,
            configuration,
            review_type,
            coverage_period,
            scores,
            wizard,
            priority_areas: Vec::new(),
            remarks: String::new(),
            snapshot,
            phase: SubmissionPhase::Drafting,
            created_at: Utc::now(),
        }
    }

    fn ensure_editable(&mut self) -> Result<(), EvaluationError> {
        match self.phase {
            SubmissionPhase::Drafting => Ok(()),
            // Editing while the confirmation dialog is up invalidates the
            // summary the evaluator was shown; drop back to drafting.
            SubmissionPhase::Confirming => {
                self.phase = SubmissionPhase::Drafting;
                Ok(())
            }
            SubmissionPhase::Submitting | SubmissionPhase::Submitted => {
                Err(EvaluationError::SessionLocked)
            }
        }
    }

    pub fn record_score(&mut self, key: &str, score: u8) -> Result<(), EvaluationError> {
        self.ensure_editable()?;
        self.scores.set_score(key, score)?;
        self.recompute();
        Ok(())
    }

    pub fn clear_score(&mut self, key: &str) -> Result<(), EvaluationError> {
        self.ensure_editable()?;
        self.scores.clear_score(key)?;
        self.recompute();
        Ok(())
    }

    pub fn record_comment(
        &mut self,
        key: &str,
        comment: Option<String>,
    ) -> Result<(), EvaluationError> {
        self.ensure_editable()?;
        self.scores.set_comment(key, comment)?;
        Ok(())
    }

    /// Record the overall-assessment fields: one to three priority areas for
    /// development plus free-text remarks.
    pub fn set_assessment(
        &mut self,
        priority_areas: Vec<String>,
        remarks: String,
    ) -> Result<(), EvaluationError> {
        self.ensure_editable()?;
        let areas: Vec<String> = priority_areas
            .into_iter()
            .map(|area| area.trim().to_owned())
            .filter(|area| !area.is_empty())
            .collect();
        if areas.is_empty() || areas.len() > 3 {
            return Err(EvaluationError::InvalidPriorityAreas(areas.len()));
        }
        self.priority_areas = areas;
        self.remarks = remarks;
        Ok(())
    }

    /// Explicit recompute pipeline: store → category averages → overall.
    fn recompute(&mut self) {
        self.snapshot = overall::score(&self.configuration, &self.scores);
    }

    pub fn advance(&mut self) -> bool {
        self.wizard.advance()
    }

    pub fn retreat(&mut self) -> bool {
        self.wizard.retreat()
    }

    pub fn current_step(&self) -> WizardStep {
        self.wizard.current()
    }

    pub fn job_targets_notice_due(&self) -> bool {
        self.wizard
            .job_targets_notice_due(self.configuration.uses_target_breakdown)
    }

    pub fn acknowledge_job_targets_notice(&mut self) {
        self.wizard.acknowledge_job_targets_notice();
    }

    pub fn employee(&self) -> &EmployeeSnapshot {
        &self.employee
    }

    pub fn evaluator(&self) -> &EvaluatorSnapshot {
        &self.evaluator
    }

    pub fn configuration(&self) -> &EvaluationConfiguration {
        &self.configuration
    }

    pub fn review_type(&self) -> &ReviewType {
        &self.review_type
    }

    pub fn coverage_period(&self) -> CoveragePeriod {
        self.coverage_period
    }

    pub fn scores(&self) -> &IndicatorScoreStore {
        &self.scores
    }

    pub fn wizard(&self) -> &StepWizard {
        &self.wizard
    }

    pub fn priority_areas(&self) -> &[String] {
        &self.priority_areas
    }

    pub fn remarks(&self) -> &str {
        &self.remarks
    }

    pub fn snapshot(&self) -> &OverallResult {
        &self.snapshot
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub(super) fn set_phase(&mut self, phase: SubmissionPhase) {
        self.phase = phase;
    }
}
