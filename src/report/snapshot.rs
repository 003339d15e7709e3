use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::summary::ReportSummary;
use crate::evaluation::EvaluationResult;

/// A persisted evaluation report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReportSnapshot {
    pub generated_at: DateTime<Utc>,
    pub total_customers: usize,
    pub high_risk_count: usize,
    pub low_risk_count: usize,
    /// Stored at full precision; two-decimal rounding is display-only
    pub average_score: f64,
    pub results: Vec<EvaluationResult>,
}

impl ReportSnapshot {
    /// Build a snapshot from a computed summary and the results it covers,
    /// stamped with the current time.
    pub fn new(summary: &ReportSummary, results: Vec<EvaluationResult>) -> Self {
        Self {
            generated_at: Utc::now(),
            total_customers: summary.total,
            high_risk_count: summary.high_risk,
            low_risk_count: summary.low_risk,
            average_score: summary.average_score,
            results,
        }
    }
}

/// Save a report snapshot to a JSON file atomically
///
/// Uses atomic-write-file so the snapshot is never left half-written.
/// Creates the parent directory if it doesn't exist.
pub fn save_snapshot(path: &Path, snapshot: &ReportSnapshot) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create report directory at {}", parent.display())
            })?;
        }
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, snapshot).context("Failed to serialize report")?;

    file.commit().context("Failed to save report")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::summarize;
    use crate::scoring::RiskTier;
    use std::env;

    fn sample_results() -> Vec<EvaluationResult> {
        vec![
            EvaluationResult {
                customer_id: 1,
                name: "Ada Brown".to_string(),
                credit_score: 56,
                risk_tier: RiskTier::LowRisk,
            },
            EvaluationResult {
                customer_id: 2,
                name: "Ben Okafor".to_string(),
                credit_score: 34,
                risk_tier: RiskTier::HighRisk,
            },
        ]
    }

    #[test]
    fn test_snapshot_carries_summary_fields() {
        let results = sample_results();
        let summary = summarize(&results);
        let snapshot = ReportSnapshot::new(&summary, results);

        assert_eq!(snapshot.total_customers, 2);
        assert_eq!(snapshot.high_risk_count, 1);
        assert_eq!(snapshot.low_risk_count, 1);
        assert_eq!(snapshot.average_score, 45.0);
        assert_eq!(snapshot.results.len(), 2);
    }

    #[test]
    fn test_save_and_reload_roundtrip() {
        let temp_path = env::temp_dir().join("riskcheck_test_snapshot.json");
        let _ = std::fs::remove_file(&temp_path);

        let results = sample_results();
        let summary = summarize(&results);
        let snapshot = ReportSnapshot::new(&summary, results);

        save_snapshot(&temp_path, &snapshot).unwrap();

        let content = std::fs::read_to_string(&temp_path).unwrap();
        let loaded: ReportSnapshot = serde_json::from_str(&content).unwrap();
        assert_eq!(loaded.total_customers, 2);
        assert_eq!(loaded.results[0].name, "Ada Brown");

        // Field names follow the storage schema
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert!(value.get("GeneratedAt").is_some());
        assert!(value.get("AverageScore").is_some());
        assert_eq!(value["Results"][1]["RiskStatus"], "High Risk");

        let _ = std::fs::remove_file(&temp_path);
    }
}
