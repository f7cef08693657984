//! Report building and output.
//!
//! This module handles:
//! - The report schema and its text rendering
//! - JSON report files
//! - JSON-lines entry dumps

pub mod json;
pub mod report;

// Re-export main functions
pub use json::{read_report, write_entries_jsonl, write_report};
pub use report::{render_text, Report};
