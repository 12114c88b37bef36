// src/models.rs
pub mod scan_report;

pub use scan_report::{ScanReport, Totals};
