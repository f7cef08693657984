//! Ping log parsing.
//!
//! This module handles:
//! - Reading CSV rows from a file or any reader
//! - Skipping the header row
//! - Converting fields into typed entries

pub mod csv_log;
pub mod entry;

// Re-export main types
pub use csv_log::{load_entries, parse_row, parse_rows, read_entries, ReaderOptions};
pub use entry::Entry;
