use super::catalog::CategoryId;
use super::scores::IndicatorScoreStore;

/// Round to the two-decimal precision every published figure uses.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Mean of the populated indicators of a category, to two decimals.
///
/// Unset indicators are skipped entirely. A category with no rated indicator
/// yields 0.00 and still participates in weighting; that degenerate value is
/// deliberate, not an error path.
pub fn category_average(category: CategoryId, store: &IndicatorScoreStore) -> f64 {
    let mut sum = 0u32;
    let mut count = 0u32;
    for score in store.category_scores(category) {
        sum += u32::from(score);
        count += 1;
    }

    if count == 0 {
        return 0.0;
    }

    round2(f64::from(sum) / f64::from(count))
}
