//! Configuration and constants for the CLI.

/// Log file read when no path is given
pub const DEFAULT_LOG_PATH: &str = "log.csv";

/// Environment variable that overrides the log path
pub const LOG_PATH_ENV: &str = "PING_LOG_PATH";

/// Current JSON report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

// Column order of every data row in the log
pub const FIELD_NAMES: [&str; 6] = [
    "recipient",
    "hops",
    "pings_sent",
    "acks",
    "avg_latency",
    "battery_level",
];
pub const FIELD_COUNT: usize = FIELD_NAMES.len();

pub const DEFAULT_DELIMITER: u8 = b',';
