//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod analyze;
pub mod entries;
pub mod utils;

// Re-export main command functions
pub use analyze::{analyze_reader, execute_analyze, reader_options, validate_args, AnalyzeArgs};
pub use entries::execute_entries;
pub use utils::display_version;
