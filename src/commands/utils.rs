use crate::utils::config::{DEFAULT_LOG_PATH, FIELD_NAMES, SCHEMA_VERSION};

/// Display version information
pub fn display_version() {
    println!("Ping Log Stats v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Latency and packet-loss statistics for mesh ping/ack logs.");
    println!("Default log: {} ({})", DEFAULT_LOG_PATH, FIELD_NAMES.join(", "));
}
