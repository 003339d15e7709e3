pub mod snapshot;
pub mod summary;

pub use snapshot::{save_snapshot, ReportSnapshot};
pub use summary::{summarize, ReportSummary};
