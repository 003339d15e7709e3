use crate::evaluation::EvaluationResult;
use crate::scoring::RiskTier;

/// Aggregate statistics over a batch of results.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    pub total: usize,
    pub high_risk: usize,
    pub low_risk: usize,
    /// Full-precision mean; formatting to two decimals happens at display time
    pub average_score: f64,
}

/// Compute totals, per-tier counts, and the mean score.
///
/// The mean of an empty result set is defined as 0.0 rather than an error;
/// callers decide whether to display an empty batch as "no customers".
pub fn summarize(results: &[EvaluationResult]) -> ReportSummary {
    let high_risk = results
        .iter()
        .filter(|r| r.risk_tier == RiskTier::HighRisk)
        .count();

    let average_score = if results.is_empty() {
        0.0
    } else {
        let sum: u64 = results.iter().map(|r| u64::from(r.credit_score)).sum();
        sum as f64 / results.len() as f64
    };

    ReportSummary {
        total: results.len(),
        high_risk,
        low_risk: results.len() - high_risk,
        average_score,
    }
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
    fn test_summarize_mixed_batch() {
        let results = vec![
            sample_result(1, 60, RiskTier::LowRisk),
            sample_result(2, 30, RiskTier::HighRisk),
            sample_result(3, 54, RiskTier::LowRisk),
        ];

        let summary = summarize(&results);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.high_risk, 1);
        assert_eq!(summary.low_risk, 2);
        assert_eq!(summary.average_score, 48.0);
    }

    #[test]
    fn test_summarize_empty_batch() {
        let summary = summarize(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.high_risk, 0);
        assert_eq!(summary.low_risk, 0);
        assert_eq!(summary.average_score, 0.0);
    }

    #[test]
    fn test_mean_keeps_full_precision() {
        let results = vec![
            sample_result(1, 50, RiskTier::LowRisk),
            sample_result(2, 51, RiskTier::LowRisk),
            sample_result(3, 51, RiskTier::LowRisk),
        ];

        let summary = summarize(&results);
        assert!((summary.average_score - 152.0 / 3.0).abs() < 1e-12);
    }
}
