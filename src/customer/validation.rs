use super::types::CustomerProfile;

/// Check whether a profile is structurally fit for scoring.
///
/// A profile is valid when the name is non-empty after trimming, both
/// percentage fields lie in [0, 100], and the credit history age is
/// non-negative. Pure predicate; never raises. NaN fails every range
/// comparison and therefore yields an invalid profile.
pub fn is_valid(profile: &CustomerProfile) -> bool {
    !profile.name.trim().is_empty()
        && in_percent_range(profile.payment_history)
        && in_percent_range(profile.credit_utilization)
        && profile.age_of_credit_history >= 0.0
}

fn in_percent_range(value: f64) -> bool {
    (0.0..=100.0).contains(&value)
}
