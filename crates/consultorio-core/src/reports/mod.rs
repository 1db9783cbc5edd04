//! Text reports over currently assigned slots.

mod daily;
mod monthly;

pub use daily::DailyReport;
pub use monthly::{DayGroup, MonthlyReport};

use chrono::Local;

/// One assigned slot as it appears in a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub time: String,
    pub patient_name: String,
    pub patient_dni: String,
}

pub(crate) fn timestamp() -> String {
    Local::now().format("%d/%m/%Y %H:%M:%S").to_string()
}
