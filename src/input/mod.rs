use anyhow::{Context, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::customer::CustomerProfile;

/// Load customer records from a flat file, dispatching on extension.
///
/// `.csv` files need a header row matching the storage schema
/// (`CustomerId,Name,PaymentHistory,CreditUtilization,AgeOfCreditHistory`);
/// `.json` files hold an array of record objects. An empty file or empty
/// array yields an empty batch, not an error.
///
/// # Errors
///
/// Returns an error if the file is missing or unreadable, the extension is
/// unsupported, or a record fails to parse. Range checking is not done
/// here; that is the evaluator's job.
pub fn load_customers(path: &Path) -> Result<Vec<CustomerProfile>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    let file = File::open(path)
        .with_context(|| format!("Failed to open customer file at {}", path.display()))?;

    match extension.as_deref() {
        Some("csv") => read_csv(file)
            .with_context(|| format!("Failed to parse CSV records in {}", path.display())),
        Some("json") => read_json(file)
            .with_context(|| format!("Failed to parse JSON records in {}", path.display())),
        _ => anyhow::bail!(
            "Unsupported customer file format: {} (expected .csv or .json)",
            path.display()
        ),
    }
}

fn read_csv<R: Read>(reader: R) -> Result<Vec<CustomerProfile>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .has_headers(true)
        .from_reader(reader);

    csv_reader.deserialize().collect()
}

fn read_json<R: Read>(reader: R) -> Result<Vec<CustomerProfile>, serde_json::Error> {
    serde_json::from_reader(reader)
}
