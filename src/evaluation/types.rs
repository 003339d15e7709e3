use serde::{Deserialize, Serialize};

use crate::scoring::RiskTier;

/// The scored outcome for one customer.
///
/// Identifier and name are copied verbatim from the profile, including
/// original casing and whitespace. Immutable once constructed; the caller
/// owns the result collection for aggregation and reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EvaluationResult {
    pub customer_id: i64,
    pub name: String,
    pub credit_score: u8,
    #[serde(rename = "RiskStatus")]
    pub risk_tier: RiskTier,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_storage_field_names() {
        let result = EvaluationResult {
            customer_id: 3,
            name: "Ada Brown".to_string(),
            credit_score: 56,
            risk_tier: RiskTier::LowRisk,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["CustomerId"], 3);
        assert_eq!(json["Name"], "Ada Brown");
        assert_eq!(json["CreditScore"], 56);
        assert_eq!(json["RiskStatus"], "Low Risk");
    }
}
