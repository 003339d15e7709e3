use super::types::EvaluationResult;
use crate::scoring::RiskTier;

/// Keep only the high-risk results, preserving input order.
pub fn filter_high_risk(results: Vec<EvaluationResult>) -> Vec<EvaluationResult> {
    results
        .into_iter()
        .filter(|result| result.risk_tier == RiskTier::HighRisk)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result(id: i64, credit_score: u8, risk_tier: RiskTier) -> EvaluationResult {
        EvaluationResult {
            customer_id: id,
            name: format!("Customer {}", id),
            credit_score,
            risk_tier,
        }
    }

    #[test]
    fn test_keeps_only_high_risk_in_order() {
        let results = vec![
            sample_result(1, 62, RiskTier::LowRisk),
            sample_result(2, 31, RiskTier::HighRisk),
            sample_result(3, 55, RiskTier::LowRisk),
            sample_result(4, 12, RiskTier::HighRisk),
        ];

        let high_risk = filter_high_risk(results);
        let ids: Vec<i64> = high_risk.iter().map(|r| r.customer_id).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn test_empty_input_is_noop() {
        assert!(filter_high_risk(vec![]).is_empty());
    }

    #[test]
    fn test_all_low_risk_yields_empty() {
        let results = vec![
            sample_result(1, 60, RiskTier::LowRisk),
            sample_result(2, 70, RiskTier::LowRisk),
        ];
        assert!(filter_high_risk(results).is_empty());
    }
}
