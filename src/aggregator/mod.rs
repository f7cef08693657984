//! Aggregation of parsed entries into report statistics.
//!
//! This module transforms parsed log entries into:
//! - Groupings by hop count and by recipient
//! - Latency and loss-rate statistics per recipient and per hop count
//! - The first-observed hop count of each recipient

pub mod hops;
pub mod index;
pub mod metrics;

// Re-export main types and functions
pub use hops::get_hop_counts;
pub use index::{index_by_hop_count, index_by_recipient, Grouping};
pub use metrics::{aggregate, get_avg_latency, get_loss_rate, Metric, MetricSummary};
