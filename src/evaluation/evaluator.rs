use super::types::EvaluationResult;
use crate::customer::{is_valid, CustomerProfile};
use crate::error::Error;
use crate::scoring::{calculate_score, classify, ScoringConfig};

/// Score and classify a single customer.
///
/// Fails with `InvalidArgument` if the profile does not pass validation.
/// Identifier and name are carried over verbatim; trimming is applied only
/// inside the validity check, never to the output.
pub fn evaluate_one(
    profile: &CustomerProfile,
    config: &ScoringConfig,
) -> Result<EvaluationResult, Error> {
    if !is_valid(profile) {
        return Err(Error::invalid("invalid customer data"));
    }

    let credit_score = calculate_score(
        profile.payment_history,
        profile.credit_utilization,
        profile.age_of_credit_history,
        config,
    )?;

    Ok(EvaluationResult {
        customer_id: profile.customer_id,
        name: profile.name.clone(),
        credit_score,
        risk_tier: classify(credit_score, config.risk_threshold),
    })
}

/// Score an entire batch, highest score first.
///
/// Evaluation is eager: the first invalid record aborts the whole batch and
/// partial results are discarded. The sort is stable, so customers with
/// equal scores keep their relative input order.
pub fn evaluate_all(
    profiles: &[CustomerProfile],
    config: &ScoringConfig,
) -> Result<Vec<EvaluationResult>, Error> {
    let mut results = profiles
        .iter()
        .map(|profile| evaluate_one(profile, config))
        .collect::<Result<Vec<_>, _>>()?;

    results.sort_by(|a, b| b.credit_score.cmp(&a.credit_score));
    Ok(results)
}

/// Score a batch without aborting on bad records.
///
/// Returns one outcome per input profile, in input order and unsorted, so a
/// caller can report on the bad records without losing the good ones.
pub fn evaluate_all_collecting(
    profiles: &[CustomerProfile],
    config: &ScoringConfig,
) -> Vec<Result<EvaluationResult, Error>> {
    profiles
        .iter()
        .map(|profile| evaluate_one(profile, config))
        .collect()
}
