use serde::{Deserialize, Serialize};

/// A customer as supplied by the data source.
///
/// Field names in serialized form follow the storage schema
/// (`CustomerId`, `Name`, `PaymentHistory`, ...). The profile is immutable
/// for the duration of scoring; the core never mutates it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomerProfile {
    /// Unique within a batch, not otherwise constrained
    pub customer_id: i64,
    pub name: String,
    /// Percentage of payments made on time, 0-100
    pub payment_history: f64,
    /// Percentage of available credit in use, 0-100
    pub credit_utilization: f64,
    /// Years of credit history, non-negative
    pub age_of_credit_history: f64,
}
