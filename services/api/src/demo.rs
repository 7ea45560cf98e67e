use crate::infra::{sample_directory, InMemoryEvaluationBackend};
use appraisal::error::AppError;
use appraisal::workflows::evaluation::{
    resolve, AssessmentRequest, EmployeeId, EmployeeSnapshot, EvaluationService, EvaluationType,
    ScoreEntryRequest, SessionStatusView, StartEvaluationRequest,
};
use chrono::{Datelike, Local, NaiveDate};
use clap::Args;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Employee to evaluate, from the bundled sample roster.
    #[arg(long, default_value = "emp-4410")]
    pub(crate) employee: String,
    /// Evaluator on record, from the bundled sample roster.
    #[arg(long, default_value = "eval-0007")]
    pub(crate) evaluator: String,
    /// Evaluation type: default, rank_and_file, or basic.
    #[arg(long, default_value = "basic", value_parser = parse_evaluation_type)]
    pub(crate) evaluation_type: EvaluationType,
    /// Surface the seven-way Job Targets breakdown even for roles that
    /// would otherwise get the consolidated line.
    #[arg(long)]
    pub(crate) force_job_targets: bool,
    /// Coverage period start (YYYY-MM-DD). Defaults to the start of the quarter.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) coverage_start: Option<NaiveDate>,
    /// Coverage period end (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) coverage_end: Option<NaiveDate>,
    /// Score applied to every indicator during the scripted walkthrough.
    #[arg(long, default_value_t = 4)]
    pub(crate) score: u8,
}

#[derive(Args, Debug)]
pub(crate) struct ConfigurationPreviewArgs {
    /// Branch name as carried in the HR master data.
    #[arg(long)]
    pub(crate) branch_name: String,
    /// Branch code as carried in the HR master data.
    #[arg(long, default_value = "")]
    pub(crate) branch_code: String,
    /// Position title as carried in the HR master data.
    #[arg(long)]
    pub(crate) position_title: String,
    /// Evaluation type: default, rank_and_file, or basic.
    #[arg(long, default_value = "default", value_parser = parse_evaluation_type)]
    pub(crate) evaluation_type: EvaluationType,
    /// Surface the seven-way Job Targets breakdown regardless of role.
    #[arg(long)]
    pub(crate) force_job_targets: bool,
}

fn parse_evaluation_type(raw: &str) -> Result<EvaluationType, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "default" => Ok(EvaluationType::Default),
        "rank_and_file" | "rank-and-file" => Ok(EvaluationType::RankAndFile),
        "basic" => Ok(EvaluationType::Basic),
        other => Err(format!(
            "unknown evaluation type '{other}' (expected default, rank_and_file, or basic)"
        )),
    }
}

pub(crate) fn run_configuration_preview(args: ConfigurationPreviewArgs) -> Result<(), AppError> {
    let ConfigurationPreviewArgs {
        branch_name,
        branch_code,
        position_title,
        evaluation_type,
        force_job_targets,
    } = args;

    let employee = EmployeeSnapshot {
        id: EmployeeId("preview".to_string()),
        full_name: String::new(),
        branch_name: branch_name.clone(),
        branch_code,
        position_title: position_title.clone(),
    };
    let configuration = resolve(&employee, evaluation_type, force_job_targets);

    println!("Configuration preview");
    println!(
        "Profile: {} at {} | evaluation type {}",
        position_title,
        branch_name,
        evaluation_type.label()
    );
    println!(
        "Resolved: {} | job targets {}",
        configuration.kind.label(),
        if configuration.uses_target_breakdown {
            "seven-way breakdown"
        } else {
            "consolidated line"
        }
    );

    println!("\nCategory steps ({}% total)", configuration.total_weight());
    for step in &configuration.steps {
        println!(
            "- {} ({}%): {} indicators",
            step.category.title(),
            step.weight,
            step.indicators.len()
        );
        for template in &step.indicators {
            println!("    {} | {}", template.key, template.statement);
        }
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        employee,
        evaluator,
        evaluation_type,
        force_job_targets,
        coverage_start,
        coverage_end,
        score,
    } = args;

    let today = Local::now().date_naive();
    let coverage_end = coverage_end.unwrap_or(today);
    let coverage_start = coverage_start.unwrap_or_else(|| {
        let quarter_month = ((coverage_end.month0() / 3) * 3) + 1;
        NaiveDate::from_ymd_opt(coverage_end.year(), quarter_month, 1).unwrap_or(coverage_end)
    });

    println!("Performance appraisal demo");

    let directory = Arc::new(sample_directory());
    let backend = Arc::new(InMemoryEvaluationBackend::default());
    let service = Arc::new(EvaluationService::new(directory, Arc::clone(&backend)));

    let status = match service.start(StartEvaluationRequest {
        employee_id: employee,
        evaluator_id: evaluator,
        evaluation_type,
        force_job_targets,
        review_type: appraisal::workflows::evaluation::ReviewType::Custom(
            "CLI walkthrough".to_string(),
        ),
        coverage_start,
        coverage_end,
    }) {
        Ok(status) => status,
        Err(err) => {
            println!("  Could not start the evaluation: {err}");
            return Ok(());
        }
    };
    let session_id = status.session_id.clone();

    println!(
        "Started session {} for {} (evaluated by {})",
        session_id, status.employee, status.evaluator
    );
    println!(
        "Configuration: {} | coverage {} -> {}",
        status.configuration, coverage_start, coverage_end
    );

    // Walk every category step, scoring each indicator at the flat demo score.
    let mut current = status;
    loop {
        let Some(category) = current.step.category.as_ref() else {
            break;
        };
        println!(
            "\nStep {}/{}: {} ({}% weight)",
            current.step.position, current.step.total, category.title, category.weight
        );
        if category.job_targets_notice {
            println!("  [notice] Job target figures come from the branch scorecard.");
            service.acknowledge_job_targets_notice(&session_id)?;
        }
        let keys: Vec<String> = category
            .indicators
            .iter()
            .map(|indicator| indicator.key.to_string())
            .collect();
        for key in keys {
            service.record_score(
                &session_id,
                ScoreEntryRequest {
                    indicator: key.clone(),
                    score: Some(score),
                    comment: None,
                    clear: false,
                },
            )?;
            println!("  scored {key} = {score}");
        }
        service.advance(&session_id)?;
        current = service.status(&session_id)?;
    }

    service.set_assessment(
        &session_id,
        AssessmentRequest {
            priority_areas: vec![
                "Process discipline".to_string(),
                "Coaching cadence".to_string(),
            ],
            remarks: "Scripted walkthrough of one complete appraisal.".to_string(),
        },
    )?;

    let status = service.status(&session_id)?;
    render_overall(&status);

    let summary = service.confirm(&session_id)?;
    println!(
        "\nConfirmation: {} at {:.2} ({:.1}%) -> {}",
        summary.employee_name,
        summary.weighted_total,
        summary.percentage,
        summary.rating.label()
    );

    let receipt = service.submit(&session_id)?;
    println!(
        "Submitted: reference {} accepted at {}",
        receipt.reference, receipt.accepted_at
    );

    let accepted = backend.accepted();
    if let Some(payload) = accepted.first() {
        match serde_json::to_string_pretty(payload) {
            Ok(json) => println!("\nOutbound payload:\n{json}"),
            Err(err) => println!("\nOutbound payload unavailable: {err}"),
        }
    }

    Ok(())
}

fn render_overall(status: &SessionStatusView) {
    println!("\nOverall assessment");
    for row in &status.overall.categories {
        println!(
            "- {} ({}%): avg {:.2} -> weighted {:.2} [{}] ({}/{} rated)",
            row.title,
            row.weight,
            row.average,
            row.weighted,
            row.rating,
            row.rated_indicators,
            row.total_indicators
        );
    }
    println!(
        "Total: {:.2} of 5.00 | {:.1}% | {} | {}",
        status.overall.weighted_total,
        status.overall.percentage,
        status.overall.rating,
        if status.overall.pass {
            "passing"
        } else {
            "not passing"
        }
    );
}
