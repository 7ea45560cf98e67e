use serde::Serialize;

use super::catalog::{self, CategoryId, IndicatorTemplate};
use super::domain::{EmployeeSnapshot, EvaluationType};

/// Named shape of a resolved evaluation configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigurationKind {
    BranchManagerial,
    BranchRankAndFile,
    HeadOfficeManagerial,
    HeadOfficeRankAndFile,
}

impl ConfigurationKind {
    pub const fn label(self) -> &'static str {
        match self {
            ConfigurationKind::BranchManagerial => "branch_managerial",
            ConfigurationKind::BranchRankAndFile => "branch_rank_and_file",
            ConfigurationKind::HeadOfficeManagerial => "head_office_managerial",
            ConfigurationKind::HeadOfficeRankAndFile => "head_office_rank_and_file",
        }
    }
}

/// One category step of the resolved configuration: the weight it carries and
/// the exact indicator subset applicable to this evaluation instance.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryStep {
    pub category: CategoryId,
    pub weight: u8,
    pub indicators: Vec<&'static IndicatorTemplate>,
}

impl CategoryStep {
    pub fn indicator_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.indicators.iter().map(|template| template.key)
    }
}

/// The category set, indicator subsets, and weight table applicable to one
/// evaluation instance. Resolved once at session start and never changed for
/// the lifetime of the instance.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationConfiguration {
    pub kind: ConfigurationKind,
    pub steps: Vec<CategoryStep>,
    pub uses_target_breakdown: bool,
}

impl EvaluationConfiguration {
    pub fn step_for(&self, category: CategoryId) -> Option<&CategoryStep> {
        self.steps.iter().find(|step| step.category == category)
    }

    pub fn contains_category(&self, category: CategoryId) -> bool {
        self.step_for(category).is_some()
    }

    pub fn weight_for(&self, category: CategoryId) -> Option<u8> {
        self.step_for(category).map(|step| step.weight)
    }

    pub fn total_weight(&self) -> u32 {
        self.steps.iter().map(|step| u32::from(step.weight)).sum()
    }

    pub fn contains_indicator(&self, key: &str) -> bool {
        self.steps
            .iter()
            .any(|step| step.indicators.iter().any(|template| template.key == key))
    }

    pub fn category_of(&self, key: &str) -> Option<CategoryId> {
        self.steps.iter().find_map(|step| {
            step.indicators
                .iter()
                .find(|template| template.key == key)
                .map(|_| step.category)
        })
    }
}

pub(crate) fn is_head_office(branch_name: &str, branch_code: &str) -> bool {
    let name = branch_name.trim().to_ascii_uppercase();
    let code = branch_code.trim().to_ascii_uppercase();
    name == "HO" || code == "HO" || name.contains("HEAD OFFICE") || code.contains("HEAD OFFICE")
}

pub(crate) fn is_area_manager(position_title: &str) -> bool {
    position_title
        .trim()
        .to_ascii_uppercase()
        .contains("AREA MANAGER")
}

pub(crate) fn is_manager_or_supervisor(position_title: &str) -> bool {
    let title = position_title.trim().to_ascii_uppercase();
    (title.contains("MANAGER") && !title.contains("AREA MANAGER")) || title.contains("SUPERVISOR")
}

/// Weight tables, keyed by which optional categories the configuration
/// carries. Each table sums to exactly 100. The splits for the Managerial
/// Skills variants are fixed configuration data, not derived.
fn weight_table(customer_service: bool, managerial_skills: bool) -> &'static [(CategoryId, u8)] {
    match (customer_service, managerial_skills) {
        (true, false) => &[
            (CategoryId::JobKnowledge, 20),
            (CategoryId::QualityOfWork, 20),
            (CategoryId::Adaptability, 10),
            (CategoryId::Teamwork, 10),
            (CategoryId::Reliability, 5),
            (CategoryId::Ethics, 5),
            (CategoryId::CustomerService, 30),
        ],
        (true, true) => &[
            (CategoryId::JobKnowledge, 15),
            (CategoryId::QualityOfWork, 15),
            (CategoryId::Adaptability, 10),
            (CategoryId::Teamwork, 10),
            (CategoryId::Reliability, 5),
            (CategoryId::Ethics, 5),
            (CategoryId::CustomerService, 20),
            (CategoryId::ManagerialSkills, 20),
        ],
        (false, false) => &[
            (CategoryId::JobKnowledge, 30),
            (CategoryId::QualityOfWork, 30),
            (CategoryId::Adaptability, 15),
            (CategoryId::Teamwork, 10),
            (CategoryId::Reliability, 10),
            (CategoryId::Ethics, 5),
        ],
        (false, true) => &[
            (CategoryId::JobKnowledge, 20),
            (CategoryId::QualityOfWork, 20),
            (CategoryId::Adaptability, 10),
            (CategoryId::Teamwork, 10),
            (CategoryId::Reliability, 10),
            (CategoryId::Ethics, 5),
            (CategoryId::ManagerialSkills, 25),
        ],
    }
}

/// Resolve the applicable category set for one employee/evaluator pairing.
///
/// `force_job_targets` is the evaluator's explicit override that surfaces the
/// seven-way target breakdown for roles that would otherwise get the single
/// consolidated line.
pub fn resolve(
    employee: &EmployeeSnapshot,
    evaluation_type: EvaluationType,
    force_job_targets: bool,
) -> EvaluationConfiguration {
    let head_office = is_head_office(&employee.branch_name, &employee.branch_code);
    let area_manager = is_area_manager(&employee.position_title);
    let manager_or_supervisor = is_manager_or_supervisor(&employee.position_title);

    let target_breakdown =
        force_job_targets || area_manager || (manager_or_supervisor && !head_office);

    // Customer Service is hidden only for Head-Office rank-and-file/basic
    // evaluations, and never for Area Managers.
    let customer_service = !(head_office
        && matches!(
            evaluation_type,
            EvaluationType::RankAndFile | EvaluationType::Basic
        )
        && !area_manager);

    let managerial_skills = evaluation_type == EvaluationType::Basic;

    let kind = match (head_office, managerial_skills) {
        (false, true) => ConfigurationKind::BranchManagerial,
        (false, false) => ConfigurationKind::BranchRankAndFile,
        (true, true) => ConfigurationKind::HeadOfficeManagerial,
        (true, false) => ConfigurationKind::HeadOfficeRankAndFile,
    };

    let steps = weight_table(customer_service, managerial_skills)
        .iter()
        .map(|&(category, weight)| {
            let mut indicators: Vec<&'static IndicatorTemplate> =
                catalog::core_indicators(category).iter().collect();

            if category == CategoryId::QualityOfWork {
                if target_breakdown {
                    indicators.extend(catalog::job_target_lines().iter());
                } else {
                    indicators.push(catalog::legacy_job_targets());
                }
            }

            CategoryStep {
                category,
                weight,
                indicators,
            }
        })
        .collect();

    EvaluationConfiguration {
        kind,
        steps,
        uses_target_breakdown: target_breakdown,
    }
}
