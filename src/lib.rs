//! Ping Log Stats
//!
//! Latency and packet-loss statistics for mesh ping/ack logs.
//!
//! A log is a CSV file with a header row followed by rows of
//! `recipient, hops, pings_sent, acks, avg_latency, battery_level`.
//! The pipeline parses it into entries, groups them by hop count and by
//! recipient, and reports:
//!
//! - the latest average latency per recipient and a weighted latency per hop count
//! - the latest loss rate per recipient and a weighted loss rate per hop count
//! - the first-observed hop count per recipient
//!
//! ## Getting Started
//!
//! ```bash
//! ping-stats analyze --log log.csv
//! ping-stats --help
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
