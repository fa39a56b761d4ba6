//! Report domain - result panel and CSV export

mod panel;
mod record;

pub use panel::{ResultPanel, RiskLevel};
pub use record::{PredictionRecord, CSV_COLUMNS, CSV_CONTENT_TYPE, CSV_FILENAME};
