use super::common::*;
use crate::workflows::evaluation::domain::{EvaluationError, EvaluationType};
use crate::workflows::evaluation::submission::{
    BackendError, SubmissionError, SubmissionGuard, SubmissionPhase,
};

fn ready_session() -> crate::workflows::evaluation::session::EvaluationSession {
    let mut session = start_session(branch_employee("Mechanic"), EvaluationType::Default, false);
    fill_all_scores(&mut session, 4);
    session
        .set_assessment(
            vec!["Customer handling".to_string(), "Upselling".to_string()],
            "Solid quarter overall.".to_string(),
        )
        .expect("assessment records");
    walk_to_terminal(&mut session);
    session
}

#[test]
fn missing_signature_blocks_confirmation_and_never_reaches_the_backend() {
    let mut session = start_session_with_evaluator(
        branch_employee("Mechanic"),
        EvaluationType::Default,
        evaluator(false),
    );
    fill_all_scores(&mut session, 4);
    session
        .set_assessment(vec!["Paperwork".to_string()], String::new())
        .expect("assessment records");
    walk_to_terminal(&mut session);

    assert!(!SubmissionGuard::can_submit(&session));
    assert_eq!(
        SubmissionGuard::begin_confirmation(&mut session),
        Err(SubmissionError::SignatureRequired)
    );

    let backend = MemoryBackend::default();
    assert_eq!(
        SubmissionGuard::submit(&mut session, &backend),
        Err(SubmissionError::NotConfirmed)
    );
    assert!(backend.accepted().is_empty(), "backend was never invoked");
}

#[test]
fn blank_signature_url_counts_as_unsigned() {
    let mut unsigned = evaluator(true);
    unsigned.signature_url = Some("   ".to_string());
    let session = start_session_with_evaluator(
        branch_employee("Mechanic"),
        EvaluationType::Default,
        unsigned,
    );
    assert!(!SubmissionGuard::can_submit(&session));
}

#[test]
fn confirmation_requires_the_terminal_step() {
    let mut session = start_session(branch_employee("Mechanic"), EvaluationType::Default, false);
    fill_all_scores(&mut session, 4);
    session
        .set_assessment(vec!["Coaching".to_string()], String::new())
        .expect("assessment records");

    assert_eq!(
        SubmissionGuard::begin_confirmation(&mut session),
        Err(SubmissionError::NotAtFinalStep)
    );
}

#[test]
fn confirmation_requires_priority_areas() {
    let mut session = start_session(branch_employee("Mechanic"), EvaluationType::Default, false);
    fill_all_scores(&mut session, 4);
    walk_to_terminal(&mut session);

    assert_eq!(
        SubmissionGuard::begin_confirmation(&mut session),
        Err(SubmissionError::PriorityAreasMissing)
    );
}

#[test]
fn priority_areas_accept_one_to_three_entries() {
    let mut session = start_session(branch_employee("Mechanic"), EvaluationType::Default, false);

    assert_eq!(
        session.set_assessment(Vec::new(), String::new()),
        Err(EvaluationError::InvalidPriorityAreas(0))
    );
    assert_eq!(
        session.set_assessment(
            vec![
                "a".to_string(),
                "b".to_string(),
                "c".to_string(),
                "d".to_string()
            ],
            String::new()
        ),
        Err(EvaluationError::InvalidPriorityAreas(4))
    );
    assert!(session
        .set_assessment(vec!["  ".to_string(), "Coaching".to_string()], String::new())
        .is_ok());
    assert_eq!(session.priority_areas(), ["Coaching"]);
}

#[test]
fn confirmation_summary_reflects_the_snapshot() {
    let mut session = ready_session();
    let summary = SubmissionGuard::begin_confirmation(&mut session).expect("confirmable");

    assert_eq!(summary.employee_name, "Marites Villanueva");
    assert_eq!(summary.weighted_total, session.snapshot().weighted_total);
    assert_eq!(summary.percentage, session.snapshot().percentage);
    assert_eq!(session.phase(), SubmissionPhase::Confirming);
}

#[test]
fn backend_rejection_returns_to_the_confirmable_state_verbatim() {
    let mut session = ready_session();
    SubmissionGuard::begin_confirmation(&mut session).expect("confirmable");

    let backend =
        MemoryBackend::failing_once(BackendError::Rejected("coverage period overlaps".into()));
    let error = SubmissionGuard::submit(&mut session, &backend).expect_err("backend rejects");

    assert_eq!(
        error.to_string(),
        "evaluation rejected: coverage period overlaps"
    );
    assert_eq!(session.phase(), SubmissionPhase::Confirming);

    // A retry is a full resubmission of the same payload.
    let receipt = SubmissionGuard::submit(&mut session, &backend).expect("retry succeeds");
    assert!(!receipt.reference.is_empty());
    assert_eq!(session.phase(), SubmissionPhase::Submitted);
    assert_eq!(backend.accepted().len(), 1);
}

#[test]
fn successful_submission_freezes_the_session() {
    let mut session = ready_session();
    SubmissionGuard::begin_confirmation(&mut session).expect("confirmable");

    let backend = MemoryBackend::default();
    SubmissionGuard::submit(&mut session, &backend).expect("submission accepted");

    assert_eq!(session.phase(), SubmissionPhase::Submitted);
    assert_eq!(
        session.record_score("jk_duties", 5),
        Err(EvaluationError::SessionLocked)
    );
    assert_eq!(
        SubmissionGuard::submit(&mut session, &backend),
        Err(SubmissionError::AlreadySubmitted)
    );
    assert_eq!(backend.accepted().len(), 1, "no duplicate submissions");
}

#[test]
fn editing_during_confirmation_demands_a_fresh_confirmation() {
    let mut session = ready_session();
    SubmissionGuard::begin_confirmation(&mut session).expect("confirmable");

    session.record_score("jk_duties", 5).expect("still editable");
    assert_eq!(session.phase(), SubmissionPhase::Drafting);

    let backend = MemoryBackend::default();
    assert_eq!(
        SubmissionGuard::submit(&mut session, &backend),
        Err(SubmissionError::NotConfirmed)
    );
    assert!(backend.accepted().is_empty());
}

#[test]
fn cancel_returns_to_drafting_without_submitting() {
    let mut session = ready_session();
    SubmissionGuard::begin_confirmation(&mut session).expect("confirmable");
    SubmissionGuard::cancel_confirmation(&mut session);
    assert_eq!(session.phase(), SubmissionPhase::Drafting);
}

#[test]
fn payload_carries_every_indicator_and_the_computed_overall() {
    let mut session = ready_session();
    session.clear_score("adapt_change").expect("clear succeeds");
    let payload = SubmissionGuard::payload(&session);

    assert_eq!(payload.indicator_scores.len(), session.scores().len());
    assert_eq!(payload.configuration, "branch_rank_and_file");
    assert_eq!(payload.weighted_total, session.snapshot().weighted_total);
    assert_eq!(payload.priority_areas.len(), 2);

    let cleared = payload
        .indicator_scores
        .iter()
        .find(|record| record.indicator == "adapt_change")
        .expect("cleared indicator still present in payload");
    assert_eq!(cleared.score, None, "unset travels as unset, never as zero");
}
