use serde::{Deserialize, Serialize};

/// Competency group identifier. Job Target lines are catalogued separately
/// because they feed the Quality of Work average rather than carrying a
/// weight of their own.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CategoryId {
    JobKnowledge,
    QualityOfWork,
    Adaptability,
    Teamwork,
    Reliability,
    Ethics,
    CustomerService,
    ManagerialSkills,
}

impl CategoryId {
    pub const fn title(self) -> &'static str {
        match self {
            CategoryId::JobKnowledge => "Job Knowledge",
            CategoryId::QualityOfWork => "Quality of Work",
            CategoryId::Adaptability => "Adaptability",
            CategoryId::Teamwork => "Teamwork",
            CategoryId::Reliability => "Reliability",
            CategoryId::Ethics => "Ethics",
            CategoryId::CustomerService => "Customer Service",
            CategoryId::ManagerialSkills => "Managerial Skills",
        }
    }
}

/// A single behavioral statement scored 1-5 with an optional comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndicatorTemplate {
    pub key: &'static str,
    pub statement: &'static str,
    pub category: CategoryId,
}

const fn indicator(
    key: &'static str,
    statement: &'static str,
    category: CategoryId,
) -> IndicatorTemplate {
    IndicatorTemplate {
        key,
        statement,
        category,
    }
}

const JOB_KNOWLEDGE: &[IndicatorTemplate] = &[
    indicator(
        "jk_duties",
        "Demonstrates a thorough understanding of the duties and responsibilities of the position.",
        CategoryId::JobKnowledge,
    ),
    indicator(
        "jk_products",
        "Knows the product lines, unit specifications, and pricing relevant to the assignment.",
        CategoryId::JobKnowledge,
    ),
    indicator(
        "jk_procedures",
        "Applies company policies, processes, and documentation requirements correctly.",
        CategoryId::JobKnowledge,
    ),
    indicator(
        "jk_systems",
        "Operates the tools, equipment, and information systems the role requires.",
        CategoryId::JobKnowledge,
    ),
    indicator(
        "jk_problem_solving",
        "Uses job knowledge to resolve day-to-day problems without escalation.",
        CategoryId::JobKnowledge,
    ),
    indicator(
        "jk_learning",
        "Keeps job knowledge current and seeks out training for gaps.",
        CategoryId::JobKnowledge,
    ),
    indicator(
        "jk_cross_training",
        "Understands adjacent functions well enough to cover for absent colleagues.",
        CategoryId::JobKnowledge,
    ),
];

const QUALITY_OF_WORK: &[IndicatorTemplate] = &[
    indicator(
        "qow_accuracy",
        "Produces accurate work with minimal errors or rework.",
        CategoryId::QualityOfWork,
    ),
    indicator(
        "qow_thoroughness",
        "Completes assignments thoroughly, covering required detail and documentation.",
        CategoryId::QualityOfWork,
    ),
    indicator(
        "qow_timeliness",
        "Meets deadlines and turnaround commitments for routine and assigned work.",
        CategoryId::QualityOfWork,
    ),
    indicator(
        "qow_output",
        "Sustains an acceptable volume of output relative to the role's standards.",
        CategoryId::QualityOfWork,
    ),
    indicator(
        "qow_organization",
        "Organizes workload and records so that status is verifiable at any time.",
        CategoryId::QualityOfWork,
    ),
    indicator(
        "qow_supervision",
        "Delivers consistent results with minimal follow-up from the supervisor.",
        CategoryId::QualityOfWork,
    ),
];

const ADAPTABILITY: &[IndicatorTemplate] = &[
    indicator(
        "adapt_change",
        "Adjusts smoothly to changes in priorities, assignments, or procedures.",
        CategoryId::Adaptability,
    ),
    indicator(
        "adapt_methods",
        "Learns new methods and systems quickly when the operation changes.",
        CategoryId::Adaptability,
    ),
    indicator(
        "adapt_pressure",
        "Maintains output and composure during peak load or unexpected demands.",
        CategoryId::Adaptability,
    ),
    indicator(
        "adapt_feedback",
        "Accepts coaching and corrective feedback and applies it.",
        CategoryId::Adaptability,
    ),
    indicator(
        "adapt_assignments",
        "Accepts temporary assignments or relief duties outside the usual scope.",
        CategoryId::Adaptability,
    ),
];

const TEAMWORK: &[IndicatorTemplate] = &[
    indicator(
        "team_cooperation",
        "Works cooperatively with colleagues toward shared branch goals.",
        CategoryId::Teamwork,
    ),
    indicator(
        "team_information",
        "Shares information that other team members need to do their jobs.",
        CategoryId::Teamwork,
    ),
    indicator(
        "team_support",
        "Supports team decisions once made, even when holding a different view.",
        CategoryId::Teamwork,
    ),
    indicator(
        "team_assistance",
        "Volunteers help when colleagues are overloaded or behind.",
        CategoryId::Teamwork,
    ),
    indicator(
        "team_respect",
        "Treats co-workers with courtesy and respect regardless of rank.",
        CategoryId::Teamwork,
    ),
];

const RELIABILITY: &[IndicatorTemplate] = &[
    indicator(
        "rel_attendance",
        "Maintains dependable attendance within company standards.",
        CategoryId::Reliability,
    ),
    indicator(
        "rel_punctuality",
        "Reports for duty and for scheduled commitments on time.",
        CategoryId::Reliability,
    ),
    indicator(
        "rel_follow_through",
        "Follows through on commitments without reminders.",
        CategoryId::Reliability,
    ),
    indicator(
        "rel_property",
        "Exercises proper care over company property, stock, and funds.",
        CategoryId::Reliability,
    ),
    indicator(
        "rel_safety",
        "Observes safety and security procedures consistently.",
        CategoryId::Reliability,
    ),
];

const ETHICS: &[IndicatorTemplate] = &[
    indicator(
        "ethics_integrity",
        "Acts with honesty and integrity in all transactions.",
        CategoryId::Ethics,
    ),
    indicator(
        "ethics_confidentiality",
        "Protects confidential company, employee, and customer information.",
        CategoryId::Ethics,
    ),
    indicator(
        "ethics_policy",
        "Complies with the code of conduct and company policies.",
        CategoryId::Ethics,
    ),
    indicator(
        "ethics_reporting",
        "Reports figures, incidents, and records truthfully and completely.",
        CategoryId::Ethics,
    ),
    indicator(
        "ethics_conflicts",
        "Avoids conflicts of interest and discloses them when they arise.",
        CategoryId::Ethics,
    ),
];

const CUSTOMER_SERVICE: &[IndicatorTemplate] = &[
    indicator(
        "cs_courtesy",
        "Greets and attends to customers promptly and courteously.",
        CategoryId::CustomerService,
    ),
    indicator(
        "cs_needs",
        "Identifies customer needs and recommends suitable products or terms.",
        CategoryId::CustomerService,
    ),
    indicator(
        "cs_complaints",
        "Handles complaints calmly and resolves them within authority or escalates properly.",
        CategoryId::CustomerService,
    ),
    indicator(
        "cs_follow_up",
        "Follows up on promises made to customers, including after-sales concerns.",
        CategoryId::CustomerService,
    ),
    indicator(
        "cs_relationships",
        "Builds repeat-business relationships with customers and referrers.",
        CategoryId::CustomerService,
    ),
    indicator(
        "cs_image",
        "Presents the branch and the brand well in appearance and conduct.",
        CategoryId::CustomerService,
    ),
];

const MANAGERIAL_SKILLS: &[IndicatorTemplate] = &[
    indicator(
        "mgr_planning",
        "Plans and organizes branch or section activities against targets.",
        CategoryId::ManagerialSkills,
    ),
    indicator(
        "mgr_delegation",
        "Delegates work appropriately and holds staff accountable for it.",
        CategoryId::ManagerialSkills,
    ),
    indicator(
        "mgr_coaching",
        "Coaches and develops staff, addressing performance gaps early.",
        CategoryId::ManagerialSkills,
    ),
    indicator(
        "mgr_decisions",
        "Makes sound, timely decisions within delegated authority.",
        CategoryId::ManagerialSkills,
    ),
    indicator(
        "mgr_monitoring",
        "Monitors results and takes corrective action when performance drifts.",
        CategoryId::ManagerialSkills,
    ),
    indicator(
        "mgr_communication",
        "Communicates goals, standards, and changes clearly to the team.",
        CategoryId::ManagerialSkills,
    ),
    indicator(
        "mgr_fairness",
        "Administers discipline and recognition consistently and fairly.",
        CategoryId::ManagerialSkills,
    ),
];

/// The seven role-specific Job Target lines. Each is individually optional;
/// unset lines are excluded from the Quality of Work average.
const JOB_TARGET_LINES: &[IndicatorTemplate] = &[
    indicator(
        "target_motorcycles",
        "Achievement of motorcycle unit sales targets for the period.",
        CategoryId::QualityOfWork,
    ),
    indicator(
        "target_appliances",
        "Achievement of appliance sales targets for the period.",
        CategoryId::QualityOfWork,
    ),
    indicator(
        "target_cars",
        "Achievement of car sales targets for the period.",
        CategoryId::QualityOfWork,
    ),
    indicator(
        "target_tri_wheelers",
        "Achievement of tri-wheeler sales targets for the period.",
        CategoryId::QualityOfWork,
    ),
    indicator(
        "target_collection",
        "Collection efficiency against the assigned portfolio target.",
        CategoryId::QualityOfWork,
    ),
    indicator(
        "target_spareparts",
        "Achievement of spareparts and lubricants sales targets.",
        CategoryId::QualityOfWork,
    ),
    indicator(
        "target_shop_income",
        "Achievement of shop income targets for the period.",
        CategoryId::QualityOfWork,
    ),
];

/// Single consolidated Job Targets line used by rank-and-file configurations
/// in place of the seven-way breakdown.
const LEGACY_JOB_TARGETS: &IndicatorTemplate = &indicator(
    "target_overall",
    "Overall achievement of the job targets assigned for the period.",
    CategoryId::QualityOfWork,
);

/// Core (always-applicable) indicators of a category, excluding Job Target
/// lines.
pub fn core_indicators(category: CategoryId) -> &'static [IndicatorTemplate] {
    match category {
        CategoryId::JobKnowledge => JOB_KNOWLEDGE,
        CategoryId::QualityOfWork => QUALITY_OF_WORK,
        CategoryId::Adaptability => ADAPTABILITY,
        CategoryId::Teamwork => TEAMWORK,
        CategoryId::Reliability => RELIABILITY,
        CategoryId::Ethics => ETHICS,
        CategoryId::CustomerService => CUSTOMER_SERVICE,
        CategoryId::ManagerialSkills => MANAGERIAL_SKILLS,
    }
}

pub fn job_target_lines() -> &'static [IndicatorTemplate] {
    JOB_TARGET_LINES
}

pub fn legacy_job_targets() -> &'static IndicatorTemplate {
    LEGACY_JOB_TARGETS
}

/// Look up any catalogued indicator by key.
pub fn find_indicator(key: &str) -> Option<&'static IndicatorTemplate> {
    const GROUPS: &[&[IndicatorTemplate]] = &[
        JOB_KNOWLEDGE,
        QUALITY_OF_WORK,
        ADAPTABILITY,
        TEAMWORK,
        RELIABILITY,
        ETHICS,
        CUSTOMER_SERVICE,
        MANAGERIAL_SKILLS,
        JOB_TARGET_LINES,
    ];

    if LEGACY_JOB_TARGETS.key == key {
        return Some(LEGACY_JOB_TARGETS);
    }

    GROUPS
        .iter()
        .flat_map(|group| group.iter())
        .find(|template| template.key == key)
}
