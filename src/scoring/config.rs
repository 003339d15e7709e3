use serde::{Deserialize, Serialize};

/// Weight applied to the payment history signal.
pub const PAYMENT_HISTORY_WEIGHT: f64 = 0.4;
/// Weight applied to headroom left on available credit (100 - utilization).
pub const CREDIT_UTILIZATION_WEIGHT: f64 = 0.3;
/// Weight applied to the capped age of credit history.
pub const CREDIT_AGE_WEIGHT: f64 = 0.3;
/// Years of history beyond which age stops contributing.
pub const CREDIT_AGE_CAP_YEARS: f64 = 10.0;
/// Scores below this are classified High Risk.
pub const RISK_THRESHOLD: u8 = 50;

/// Scoring parameters.
///
/// The defaults are the production constants; the struct exists so library
/// consumers and tests can exercise alternative weightings without code
/// changes. The CLI always runs with the defaults.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct ScoringConfig {
    pub payment_history_weight: f64,
    pub credit_utilization_weight: f64,
    pub credit_age_weight: f64,
    /// Age contribution is capped at this many years
    pub credit_age_cap_years: f64,
    /// Inclusive lower bound of the Low Risk tier
    pub risk_threshold: u8,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            payment_history_weight: PAYMENT_HISTORY_WEIGHT,
            credit_utilization_weight: CREDIT_UTILIZATION_WEIGHT,
            credit_age_weight: CREDIT_AGE_WEIGHT,
            credit_age_cap_years: CREDIT_AGE_CAP_YEARS,
            risk_threshold: RISK_THRESHOLD,
        }
    }
}
