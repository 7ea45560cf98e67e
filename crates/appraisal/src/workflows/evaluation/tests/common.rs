use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, Utc};

use crate::workflows::evaluation::directory::{DirectoryError, DirectoryProvider};
use crate::workflows::evaluation::domain::{
    CoveragePeriod, EmployeeId, EmployeeSnapshot, EvaluationType, EvaluatorId, EvaluatorSnapshot,
    Quarter, ReviewType,
};
use crate::workflows::evaluation::session::EvaluationSession;
use crate::workflows::evaluation::submission::{
    BackendError, EvaluationBackend, EvaluationSubmission, SubmissionReceipt,
};

pub(super) fn coverage() -> CoveragePeriod {
    CoveragePeriod::new(
        NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid start"),
        NaiveDate::from_ymd_opt(2025, 3, 31).expect("valid end"),
    )
    .expect("valid coverage period")
}

pub(super) fn branch_employee(position_title: &str) -> EmployeeSnapshot {
    EmployeeSnapshot {
        id: EmployeeId("emp-1001".to_string()),
        full_name: "Marites Villanueva".to_string(),
        branch_name: "Cabanatuan Branch".to_string(),
        branch_code: "CAB".to_string(),
        position_title: position_title.to_string(),
    }
}

pub(super) fn head_office_employee(position_title: &str) -> EmployeeSnapshot {
    EmployeeSnapshot {
        id: EmployeeId("emp-2002".to_string()),
        full_name: "Ramon Dizon".to_string(),
        branch_name: "Head Office".to_string(),
        branch_code: "HO".to_string(),
        position_title: position_title.to_string(),
    }
}

pub(super) fn evaluator(signed: bool) -> EvaluatorSnapshot {
    EvaluatorSnapshot {
        id: EvaluatorId("eval-3003".to_string()),
        full_name: "Lucia Santos".to_string(),
        branch_name: "Cabanatuan Branch".to_string(),
        position_title: "Branch Manager".to_string(),
        signature_url: signed.then(|| "https://files.example/sig/lucia.png".to_string()),
    }
}

pub(super) fn start_session(
    employee: EmployeeSnapshot,
    evaluation_type: EvaluationType,
    force_job_targets: bool,
) -> EvaluationSession {
    EvaluationSession::start(
        employee,
        evaluator(true),
        evaluation_type,
        force_job_targets,
        ReviewType::Quarterly(Quarter::Q1),
        coverage(),
    )
}

pub(super) fn start_session_with_evaluator(
    employee: EmployeeSnapshot,
    evaluation_type: EvaluationType,
    evaluator: EvaluatorSnapshot,
) -> EvaluationSession {
    EvaluationSession::start(
        employee,
        evaluator,
        evaluation_type,
        false,
        ReviewType::Quarterly(Quarter::Q1),
        coverage(),
    )
}

pub(super) fn configured_keys(session: &EvaluationSession) -> Vec<&'static str> {
    session
        .configuration()
        .steps
        .iter()
        .flat_map(|step| step.indicators.iter().map(|template| template.key))
        .collect()
}

pub(super) fn fill_all_scores(session: &mut EvaluationSession, score: u8) {
    for key in configured_keys(session) {
        session.record_score(key, score).expect("score records");
    }
}

pub(super) fn walk_to_terminal(session: &mut EvaluationSession) {
    while session.advance() {}
}

/// Backend double that records every accepted payload and can be armed to
/// fail exactly one call.
#[derive(Default)]
pub(super) struct MemoryBackend {
    pub(super) submissions: Mutex<Vec<EvaluationSubmission>>,
    pub(super) fail_next: Mutex<Option<BackendError>>,
}

impl MemoryBackend {
    pub(super) fn failing_once(error: BackendError) -> Self {
        Self {
            submissions: Mutex::new(Vec::new()),
            fail_next: Mutex::new(Some(error)),
        }
    }

    pub(super) fn accepted(&self) -> Vec<EvaluationSubmission> {
        self.submissions.lock().expect("backend mutex poisoned").clone()
    }
}

impl EvaluationBackend for MemoryBackend {
    fn submit_evaluation(
        &self,
        submission: &EvaluationSubmission,
    ) -> Result<SubmissionReceipt, BackendError> {
        if let Some(error) = self.fail_next.lock().expect("backend mutex poisoned").take() {
            return Err(error);
        }
        let mut accepted = self.submissions.lock().expect("backend mutex poisoned");
        accepted.push(submission.clone());
        Ok(SubmissionReceipt {
            reference: format!("rcpt-{:04}", accepted.len()),
            accepted_at: Utc::now(),
        })
    }
}

/// Directory double backed by a pair of maps.
#[derive(Default)]
pub(super) struct MemoryDirectory {
    employees: HashMap<String, EmployeeSnapshot>,
    evaluators: HashMap<String, EvaluatorSnapshot>,
}

impl MemoryDirectory {
    pub(super) fn with(
        employees: Vec<EmployeeSnapshot>,
        evaluators: Vec<EvaluatorSnapshot>,
    ) -> Self {
        Self {
            employees: employees
                .into_iter()
                .map(|snapshot| (snapshot.id.0.clone(), snapshot))
                .collect(),
            evaluators: evaluators
                .into_iter()
                .map(|snapshot| (snapshot.id.0.clone(), snapshot))
                .collect(),
        }
    }
}

impl DirectoryProvider for MemoryDirectory {
    fn employee(&self, id: &EmployeeId) -> Result<Option<EmployeeSnapshot>, DirectoryError> {
        Ok(self.employees.get(&id.0).cloned())
    }

    fn evaluator(&self, id: &EvaluatorId) -> Result<Option<EvaluatorSnapshot>, DirectoryError> {
        Ok(self.evaluators.get(&id.0).cloned())
    }
}

pub(super) type TestService =
    crate::workflows::evaluation::service::EvaluationService<MemoryDirectory, MemoryBackend>;

pub(super) fn build_service() -> (Arc<TestService>, Arc<MemoryBackend>) {
    let directory = Arc::new(MemoryDirectory::with(
        vec![
            branch_employee("Branch Manager"),
            head_office_employee("Accounting Clerk"),
        ],
        vec![evaluator(true)],
    ));
    let backend = Arc::new(MemoryBackend::default());
    let service = Arc::new(TestService::new(directory, Arc::clone(&backend)));
    (service, backend)
}
