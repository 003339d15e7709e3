use super::config::ScoringConfig;

/// Tolerance for the weight-sum check; the defaults are decimal fractions
/// that do not sum to exactly 1.0 in binary.
const WEIGHT_SUM_EPSILON: f64 = 1e-9;

/// Validate a scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for (field, weight) in [
        ("scoring.payment_history_weight", config.payment_history_weight),
        (
            "scoring.credit_utilization_weight",
            config.credit_utilization_weight,
        ),
        ("scoring.credit_age_weight", config.credit_age_weight),
    ] {
        if !(weight >= 0.0) {
            errors.push(format!("{}: must be non-negative", field));
        }
    }

    let weight_sum = config.payment_history_weight
        + config.credit_utilization_weight
        + config.credit_age_weight;
    if (weight_sum - 1.0).abs() > WEIGHT_SUM_EPSILON {
        errors.push(format!(
            "scoring weights must sum to 1.0, got {}",
            weight_sum
        ));
    }

    if !(config.credit_age_cap_years >= 0.0) {
        errors.push("scoring.credit_age_cap_years: must be non-negative".to_string());
    }

    if config.risk_threshold > 100 {
        errors.push("scoring.risk_threshold: must be at most 100".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
