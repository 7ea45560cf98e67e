use serde::Serialize;

use super::catalog::CategoryId;
use super::resolver::EvaluationConfiguration;

/// One position in the ordered step sequence: a category step or the terminal
/// overall-assessment step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum WizardStep {
    Category { category: CategoryId },
    OverallAssessment,
}

/// Per-session flags backing one-time notices. Initialized at session start
/// and discarded with the session; never process-global.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionFlags {
    pub seen_job_targets_notice: bool,
}

/// Ordered step sequence with single-step navigation.
///
/// The terminal step is reachable only by sequential advance; there is no
/// jump navigation. Indicator data lives in the session's score store, so
/// revisiting a step always shows what was previously entered.
#[derive(Debug, Clone)]
pub struct StepWizard {
    steps: Vec<WizardStep>,
    index: usize,
    flags: SessionFlags,
}

impl StepWizard {
    pub fn for_configuration(configuration: &EvaluationConfiguration) -> Self {
        let mut steps: Vec<WizardStep> = configuration
            .steps
            .iter()
            .map(|step| WizardStep::Category {
                category: step.category,
            })
            .collect();
        steps.push(WizardStep::OverallAssessment);

        Self {
            steps,
            index: 0,
            flags: SessionFlags::default(),
        }
    }

    pub fn current(&self) -> WizardStep {
        self.steps[self.index]
    }

    /// One-based position for display.
    pub fn position(&self) -> usize {
        self.index + 1
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn at_terminal(&self) -> bool {
        matches!(self.current(), WizardStep::OverallAssessment)
    }

    /// Advance one step; a no-op at the terminal step. Returns whether the
    /// position moved.
    pub fn advance(&mut self) -> bool {
        if self.index + 1 < self.steps.len() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Retreat one step; a no-op at the first step.
    pub fn retreat(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    pub fn steps(&self) -> &[WizardStep] {
        &self.steps
    }

    /// Whether the Job Targets notice should be shown for the current step.
    /// Showing it once per session is enough.
    pub fn job_targets_notice_due(&self, uses_target_breakdown: bool) -> bool {
        uses_target_breakdown
            && !self.flags.seen_job_targets_notice
            && matches!(
                self.current(),
                WizardStep::Category {
                    category: CategoryId::QualityOfWork
                }
            )
    }

    pub fn acknowledge_job_targets_notice(&mut self) {
        self.flags.seen_job_targets_notice = true;
    }
}
