mod interface;
mod json_report;
mod text_report;

pub use interface::{AccountReport, ReportFormat};
pub use json_report::JsonReport;
pub use text_report::TextReport;
