//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Reads and parses the ping log
//! 2. Builds the report (latency, loss rate, hop counts)
//! 3. Prints the five report sections
//! 4. Optionally writes the report as JSON

use crate::output::{render_text, write_report, Report};
use crate::parser::{read_entries, ReaderOptions};
use crate::utils::config::DEFAULT_LOG_PATH;
use crate::utils::error::ParseError;
use anyhow::{Context, Result};
use log::{debug, info};
use std::fs::File;
use std::io::{Read, Write};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// Ping log to read
    pub log_path: PathBuf,

    /// Field delimiter, as given on the command line
    pub delimiter: String,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            delimiter: ",".to_string(),
            output_json: None,
        }
    }
}

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Parsed command-line arguments
/// * `out` - Destination for the text report (stdout in main.rs)
///
/// # Errors
/// * Missing or unreadable log file
/// * Malformed rows
/// * Loss rate of a recipient whose last entry has no pings sent
/// * Report write errors (text or JSON)
pub fn execute_analyze<W: Write>(args: AnalyzeArgs, out: &mut W) -> Result<Report> {
    let start_time = Instant::now();
    let options = reader_options(&args.delimiter)?;

    info!("Step 1/2: Opening ping log {}...", args.log_path.display());
    let file = File::open(&args.log_path).map_err(|source| ParseError::MissingFile {
        path: args.log_path.clone(),
        source,
    })?;

    info!("Step 2/2: Analyzing...");
    let report = analyze_reader(file, out, &options)
        .with_context(|| format!("Failed to analyze {}", args.log_path.display()))?;

    if let Some(path) = &args.output_json {
        write_report(&report, path).context("Failed to write report JSON")?;
        info!("✓ Report written to: {}", path.display());
    }

    debug!("Analysis completed in {:.3}s", start_time.elapsed().as_secs_f64());

    Ok(report)
}

/// Run the pipeline over any reader and print the report to any writer
///
/// **Public** - file-free entry point for embedding and tests
pub fn analyze_reader<R: Read, W: Write>(
    input: R,
    out: &mut W,
    options: &ReaderOptions,
) -> Result<Report> {
    let entries = read_entries(input, options).context("Failed to parse ping log")?;
    info!("Parsed {} entries", entries.len());

    let report = Report::from_entries(&entries).context("Failed to aggregate entries")?;

    out.write_all(render_text(&report).as_bytes())
        .and_then(|()| out.flush())
        .context("Failed to write report")?;

    Ok(report)
}

/// Validate analyze arguments
///
/// **Public** - can be called before execute_analyze for early validation
pub fn validate_args(args: &AnalyzeArgs) -> Result<()> {
    if args.log_path.as_os_str().is_empty() {
        anyhow::bail!("Log path cannot be empty");
    }

    if let Some(path) = &args.output_json {
        if path.as_os_str().is_empty() {
            anyhow::bail!("JSON output path cannot be empty");
        }
        if path == &args.log_path {
            anyhow::bail!("JSON output would overwrite the input log");
        }
    }

    reader_options(&args.delimiter)?;

    Ok(())
}

/// Turn a command-line delimiter into reader options
///
/// Accepts a single ASCII character, or one of the names `tab`, `comma`,
/// `semicolon`, `\t`.
pub fn reader_options(delimiter: &str) -> Result<ReaderOptions> {
    let byte = match delimiter {
        "tab" | "\\t" | "\t" => b'\t',
        "comma" => b',',
        "semicolon" => b';',
        s if s.len() == 1 && s.is_ascii() => s.as_bytes()[0],
        other => anyhow::bail!("Unsupported delimiter {:?}: expected one ASCII character", other),
    };

    if byte == b'"' || byte == b'\n' || byte == b'\r' {
        anyhow::bail!("Delimiter {:?} conflicts with CSV quoting or line endings", delimiter);
    }

    Ok(ReaderOptions::new().with_delimiter(byte))
}
