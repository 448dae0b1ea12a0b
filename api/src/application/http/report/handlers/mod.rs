pub mod create_report;
pub mod get_report;
pub mod get_reports;
