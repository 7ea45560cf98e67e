use super::common::*;
use crate::workflows::evaluation::aggregate::category_average;
use crate::workflows::evaluation::catalog::CategoryId;
use crate::workflows::evaluation::domain::{EvaluationError, EvaluationType, RatingLabel};
use crate::workflows::evaluation::overall;

#[test]
fn unset_indicators_are_excluded_from_the_average() {
    let mut session = start_session(branch_employee("Mechanic"), EvaluationType::Default, false);

    assert_eq!(
        category_average(CategoryId::JobKnowledge, session.scores()),
        0.0,
        "a category with no rated indicator averages 0.00"
    );

    session.record_score("jk_duties", 5).expect("score records");
    session.record_score("jk_products", 3).expect("score records");

    assert_eq!(
        category_average(CategoryId::JobKnowledge, session.scores()),
        4.0
    );
}

#[test]
fn averages_round_to_two_decimals() {
    let mut session = start_session(branch_employee("Mechanic"), EvaluationType::Default, false);
    session.record_score("team_cooperation", 5).expect("score");
    session.record_score("team_information", 4).expect("score");
    session.record_score("team_support", 4).expect("score");

    assert_eq!(category_average(CategoryId::Teamwork, session.scores()), 4.33);
}

#[test]
fn out_of_range_and_unknown_scores_are_rejected() {
    let mut session = start_session(branch_employee("Mechanic"), EvaluationType::Default, false);

    assert_eq!(
        session.record_score("jk_duties", 0),
        Err(EvaluationError::ScoreOutOfRange(0))
    );
    assert_eq!(
        session.record_score("jk_duties", 6),
        Err(EvaluationError::ScoreOutOfRange(6))
    );
    // Managerial Skills is not part of a default branch configuration, so its
    // indicators are unknown to this session.
    assert_eq!(
        session.record_score("mgr_planning", 4),
        Err(EvaluationError::UnknownIndicator("mgr_planning".to_string()))
    );
}

#[test]
fn full_marks_quality_of_work_contributes_its_full_weight() {
    // Scenario C: weight 20, all indicators at 5 => contribution 1.00.
    let mut session = start_session(branch_employee("Mechanic"), EvaluationType::Default, false);
    let quality_keys: Vec<&'static str> = session
        .configuration()
        .step_for(CategoryId::QualityOfWork)
        .expect("quality step present")
        .indicator_keys()
        .collect();
    for key in quality_keys {
        session.record_score(key, 5).expect("score records");
    }

    let snapshot = session.snapshot();
    let contribution = snapshot
        .contributions
        .iter()
        .find(|contribution| contribution.category == CategoryId::QualityOfWork)
        .expect("quality contribution present");

    assert_eq!(contribution.average, 5.0);
    assert_eq!(contribution.weight, 20);
    assert_eq!(contribution.weighted, 1.0);
}

#[test]
fn unrated_category_still_drags_the_weighted_total() {
    let mut session = start_session(branch_employee("Mechanic"), EvaluationType::Default, false);
    for key in configured_keys(&session) {
        if session.configuration().category_of(key) != Some(CategoryId::Ethics) {
            session.record_score(key, 5).expect("score records");
        }
    }

    // Ethics carries 5% here; its 0.00 average costs 0.25 of the total.
    assert_eq!(session.snapshot().weighted_total, 4.75);
    assert!(session.snapshot().pass);
}

#[test]
fn pass_boundary_is_inclusive_at_three() {
    let mut session = start_session(branch_employee("Mechanic"), EvaluationType::Default, false);
    fill_all_scores(&mut session, 3);

    let snapshot = session.snapshot();
    assert_eq!(snapshot.weighted_total, 3.0);
    assert!(snapshot.pass, "exactly 3.0 passes");

    fill_all_scores(&mut session, 2);
    assert_eq!(session.snapshot().weighted_total, 2.0);
    assert!(!session.snapshot().pass);
}

#[test]
fn weighted_total_is_monotonic_in_each_category_average() {
    let mut session = start_session(branch_employee("Mechanic"), EvaluationType::Default, false);
    fill_all_scores(&mut session, 3);
    let baseline = session.snapshot().weighted_total;

    for key in configured_keys(&session) {
        let mut raised = session.clone();
        raised.record_score(key, 5).expect("score records");
        assert!(
            raised.snapshot().weighted_total >= baseline,
            "raising {key} must never lower the weighted total"
        );
    }
}

#[test]
fn scenario_d_totals_percentage_and_band() {
    // Head-office rank-and-file weights {30, 30, 15, 10, 10, 5}; JK at 3,
    // Ethics at 2, everything else at 4 lands exactly on 3.60.
    let mut session = start_session(
        head_office_employee("Accounting Clerk"),
        EvaluationType::RankAndFile,
        false,
    );
    for key in configured_keys(&session) {
        let score = match session.configuration().category_of(key) {
            Some(CategoryId::JobKnowledge) => 3,
            Some(CategoryId::Ethics) => 2,
            _ => 4,
        };
        session.record_score(key, score).expect("score records");
    }

    let snapshot = session.snapshot();
    assert_eq!(snapshot.weighted_total, 3.6);
    assert_eq!(snapshot.percentage, 72.0);
    assert!(snapshot.pass);
    assert_eq!(snapshot.rating, RatingLabel::MeetsExpectations);
}

#[test]
fn rating_bands_follow_the_canonical_cutoffs() {
    assert_eq!(RatingLabel::from_average(4.5), RatingLabel::Outstanding);
    assert_eq!(RatingLabel::from_average(4.49), RatingLabel::ExceedsExpectations);
    assert_eq!(RatingLabel::from_average(4.0), RatingLabel::ExceedsExpectations);
    assert_eq!(RatingLabel::from_average(3.99), RatingLabel::MeetsExpectations);
    assert_eq!(RatingLabel::from_average(3.5), RatingLabel::MeetsExpectations);
    assert_eq!(RatingLabel::from_average(3.49), RatingLabel::NeedsImprovement);
    assert_eq!(RatingLabel::from_average(2.5), RatingLabel::NeedsImprovement);
    assert_eq!(RatingLabel::from_average(2.49), RatingLabel::Unsatisfactory);
    assert_eq!(RatingLabel::from_average(0.0), RatingLabel::Unsatisfactory);
}

#[test]
fn snapshot_recomputes_on_every_mutation() {
    let mut session = start_session(branch_employee("Mechanic"), EvaluationType::Default, false);
    assert_eq!(session.snapshot().weighted_total, 0.0);

    fill_all_scores(&mut session, 5);
    assert_eq!(session.snapshot().weighted_total, 5.0);
    assert_eq!(session.snapshot().percentage, 100.0);

    session.clear_score("cs_courtesy").expect("clear succeeds");
    let snapshot = overall::score(session.configuration(), session.scores());
    assert_eq!(
        session.snapshot(),
        &snapshot,
        "stored snapshot matches a fresh recompute after clearing"
    );
}
