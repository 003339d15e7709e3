use super::config::ScoringConfig;
use crate::error::Error;

/// Compute a credit score from the three financial signals.
///
/// Range preconditions are enforced, not assumed: both percentage inputs
/// must lie in [0, 100] and the history age must be non-negative. The age
/// contribution is capped at `credit_age_cap_years`, so with the default
/// weights the attainable range is [0, 73], not [0, 100].
///
/// Rounding is half-to-even, so midpoints can land on the even neighbor
/// below (e.g. a raw 52.5 scores 52, a raw 55.5 scores 56).
pub fn calculate_score(
    payment_history: f64,
    credit_utilization: f64,
    age_of_credit_history: f64,
    config: &ScoringConfig,
) -> Result<u8, Error> {
    if !(0.0..=100.0).contains(&payment_history) {
        return Err(Error::invalid("paymentHistory out of range"));
    }
    if !(0.0..=100.0).contains(&credit_utilization) {
        return Err(Error::invalid("creditUtilization out of range"));
    }
    if !(age_of_credit_history >= 0.0) {
        return Err(Error::invalid("ageOfCreditHistory negative"));
    }

    let capped_age = age_of_credit_history.min(config.credit_age_cap_years);
    let raw_score = config.payment_history_weight * payment_history
        + config.credit_utilization_weight * (100.0 - credit_utilization)
        + config.credit_age_weight * capped_age;

    Ok(raw_score.round_ties_even() as u8)
}
