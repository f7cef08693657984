use crate::output::write_entries_jsonl;
use crate::parser::load_entries;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use super::analyze::reader_options;

/// Print every parsed entry as one JSON object per line
pub fn execute_entries<W: Write>(log_path: &Path, delimiter: &str, out: &mut W) -> Result<usize> {
    let options = reader_options(delimiter)?;

    let entries = load_entries(log_path, &options)
        .with_context(|| format!("Failed to parse {}", log_path.display()))?;

    write_entries_jsonl(&entries, out).context("Failed to write entries")?;

    Ok(entries.len())
}
