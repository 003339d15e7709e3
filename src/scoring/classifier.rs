use serde::{Deserialize, Serialize};

/// Risk tier assigned to a scored customer.
///
/// Serialized form uses the reporting literals `"High Risk"` / `"Low Risk"`;
/// those exact strings are also the grouping keys in persisted reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    #[serde(rename = "High Risk")]
    HighRisk,
    #[serde(rename = "Low Risk")]
    LowRisk,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::HighRisk => "High Risk",
            RiskTier::LowRisk => "Low Risk",
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a credit score to its risk tier. Scores below the threshold are
/// High Risk; the threshold itself is Low Risk.
pub fn classify(score: u8, threshold: u8) -> RiskTier {
    if score < threshold {
        RiskTier::HighRisk
    } else {
        RiskTier::LowRisk
    }
}
