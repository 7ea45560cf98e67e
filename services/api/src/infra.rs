use appraisal::workflows::evaluation::{
    BackendError, DirectoryError, DirectoryProvider, EmployeeId, EmployeeSnapshot,
    EvaluationBackend, EvaluationSubmission, EvaluatorId, EvaluatorSnapshot, SubmissionReceipt,
};
use chrono::{NaiveDate, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Directory backed by a fixed in-memory roster. Production deployments swap
/// this for the HR master-data service behind the same trait.
#[derive(Default, Clone)]
pub(crate) struct InMemoryDirectory {
    employees: HashMap<String, EmployeeSnapshot>,
    evaluators: HashMap<String, EvaluatorSnapshot>,
}

impl InMemoryDirectory {
    pub(crate) fn with(
        employees: Vec<EmployeeSnapshot>,
        evaluators: Vec<EvaluatorSnapshot>,
    ) -> Self {
        Self {
            employees: employees
                .into_iter()
                .map(|employee| (employee.id.0.clone(), employee))
                .collect(),
            evaluators: evaluators
                .into_iter()
                .map(|evaluator| (evaluator.id.0.clone(), evaluator))
                .collect(),
        }
    }
}

impl DirectoryProvider for InMemoryDirectory {
    fn employee(&self, id: &EmployeeId) -> Result<Option<EmployeeSnapshot>, DirectoryError> {
        Ok(self.employees.get(&id.0).cloned())
    }

    fn evaluator(&self, id: &EvaluatorId) -> Result<Option<EvaluatorSnapshot>, DirectoryError> {
        Ok(self.evaluators.get(&id.0).cloned())
    }
}

/// Accepts every submission and issues sequential references. Stands in for
/// the HR system of record during demos and local runs.
#[derive(Default)]
pub(crate) struct InMemoryEvaluationBackend {
    sequence: AtomicU64,
    accepted: Mutex<Vec<EvaluationSubmission>>,
}

impl InMemoryEvaluationBackend {
    pub(crate) fn accepted(&self) -> Vec<EvaluationSubmission> {
        self.accepted.lock().expect("backend mutex poisoned").clone()
    }
}

impl EvaluationBackend for InMemoryEvaluationBackend {
    fn submit_evaluation(
        &self,
        submission: &EvaluationSubmission,
    ) -> Result<SubmissionReceipt, BackendError> {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        self.accepted
            .lock()
            .expect("backend mutex poisoned")
            .push(submission.clone());
        Ok(SubmissionReceipt {
            reference: format!("hr-{}-{id:04}", Utc::now().format("%Y")),
            accepted_at: Utc::now(),
        })
    }
}

/// Roster used by the demo command and the default serve wiring.
pub(crate) fn sample_directory() -> InMemoryDirectory {
    let employees = vec![
        EmployeeSnapshot {
            id: EmployeeId("emp-1001".to_string()),
            full_name: "Marites Villanueva".to_string(),
            branch_name: "Cabanatuan Branch".to_string(),
            branch_code: "CAB".to_string(),
            position_title: "Mechanic".to_string(),
        },
        EmployeeSnapshot {
            id: EmployeeId("emp-1002".to_string()),
            full_name: "Danilo Ocampo".to_string(),
            branch_name: "Cabanatuan Branch".to_string(),
            branch_code: "CAB".to_string(),
            position_title: "Branch Supervisor".to_string(),
        },
        EmployeeSnapshot {
            id: EmployeeId("emp-2002".to_string()),
            full_name: "Ramon Dizon".to_string(),
            branch_name: "Head Office".to_string(),
            branch_code: "HO".to_string(),
            position_title: "Accounting Clerk".to_string(),
        },
        EmployeeSnapshot {
            id: EmployeeId("emp-4410".to_string()),
            full_name: "Corazon Reyes".to_string(),
            branch_name: "Tarlac Branch".to_string(),
            branch_code: "TAR".to_string(),
            position_title: "Area Manager - Central Luzon".to_string(),
        },
    ];
    let evaluators = vec![
        EvaluatorSnapshot {
            id: EvaluatorId("eval-3003".to_string()),
            full_name: "Lucia Santos".to_string(),
            branch_name: "Head Office".to_string(),
            position_title: "HR Manager".to_string(),
            signature_url: Some("https://files.example/sig/lucia.png".to_string()),
        },
        EvaluatorSnapshot {
            id: EvaluatorId("eval-0007".to_string()),
            full_name: "Benigno Cruz".to_string(),
            branch_name: "Head Office".to_string(),
            position_title: "Operations Director".to_string(),
            signature_url: Some("https://files.example/sig/benigno.png".to_string()),
        },
    ];
    InMemoryDirectory::with(employees, evaluators)
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
