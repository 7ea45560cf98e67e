use serde::Serialize;

use super::aggregate::{category_average, round2};
use super::catalog::CategoryId;
use super::domain::RatingLabel;
use super::resolver::EvaluationConfiguration;
use super::scores::IndicatorScoreStore;

/// Weighted total at or above which an evaluation passes. Fixed by policy,
/// identical across configurations.
pub const PASSING_TOTAL: f64 = 3.0;

/// Maximum attainable weighted total; the percentage is expressed against it.
pub const MAX_TOTAL: f64 = 5.0;

/// Discrete category contribution to the overall result, kept for audits and
/// the overall-assessment step display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryContribution {
    pub category: CategoryId,
    pub average: f64,
    pub weight: u8,
    pub weighted: f64,
    pub rating: RatingLabel,
    pub rated_indicators: usize,
    pub total_indicators: usize,
}

/// Overall weighted result of one evaluation instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallResult {
    pub weighted_total: f64,
    pub percentage: f64,
    pub pass: bool,
    pub rating: RatingLabel,
    pub contributions: Vec<CategoryContribution>,
}

/// Combine category averages with the configuration's weight table.
///
/// `weighted_total = Σ(average_i × weight_i / 100)`, published to two
/// decimals; `percentage = weighted_total / 5 × 100`.
pub fn score(configuration: &EvaluationConfiguration, store: &IndicatorScoreStore) -> OverallResult {
    let mut contributions = Vec::with_capacity(configuration.steps.len());
    let mut total = 0.0f64;

    for step in &configuration.steps {
        let average = category_average(step.category, store);
        let weighted = average * f64::from(step.weight) / 100.0;
        total += weighted;

        contributions.push(CategoryContribution {
            category: step.category,
            average,
            weight: step.weight,
            weighted: round2(weighted),
            rating: RatingLabel::from_average(average),
            rated_indicators: store.rated_count(step.category),
            total_indicators: step.indicators.len(),
        });
    }

    let weighted_total = round2(total);
    let percentage = round2(weighted_total / MAX_TOTAL * 100.0);

    OverallResult {
        weighted_total,
        percentage,
        pass: weighted_total >= PASSING_TOTAL,
        rating: RatingLabel::from_average(weighted_total),
        contributions,
    }
}
