//! Per-recipient and per-hop-count latency and loss statistics.
//!
//! For each hop count the entries are split by recipient. A recipient's
//! metric is taken from its most recent entry only. The hop-count figure is
//! the mean of those per-recipient values, weighted by how many entries each
//! recipient contributed at that hop count.

use super::index::{index_by_recipient, Grouping};
use crate::parser::Entry;
use crate::utils::error::AggregateError;
use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;

/// Statistic computed by [`aggregate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// The entry's average latency
    Latency,
    /// `1 - acks / pings_sent`
    LossRate,
}

impl Metric {
    /// Value of this metric for a single entry
    ///
    /// # Errors
    /// * `AggregateError::Division` - Loss rate of an entry with no pings sent
    pub fn of(&self, entry: &Entry) -> Result<f64, AggregateError> {
        match self {
            Metric::Latency => Ok(entry.avg_latency),
            Metric::LossRate => entry.loss_rate().ok_or_else(|| AggregateError::Division {
                recipient: entry.recipient.clone(),
                hops: entry.hops,
            }),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Metric::Latency => "latency",
            Metric::LossRate => "loss rate",
        }
    }
}

/// Result of aggregating one metric
///
/// **Public** - returned from aggregate and its two instantiations
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSummary {
    pub metric: Metric,

    /// Recipient -> metric of its last entry
    pub by_recipient: BTreeMap<String, f64>,

    /// Hop count -> entry-count-weighted mean of per-recipient values
    pub by_hop_count: BTreeMap<u32, f64>,
}

impl MetricSummary {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "{}: {} recipients | {} hop counts",
            self.metric.label(),
            self.by_recipient.len(),
            self.by_hop_count.len()
        )
    }
}

/// Aggregate a metric over a hop-count grouping
///
/// **Public** - main entry point for metrics calculation
///
/// # Arguments
/// * `metric` - Statistic to compute
/// * `hop_index` - Entries grouped by hop count
///
/// # Returns
/// Per-recipient and per-hop-count values. Hop groups are visited in
/// first-seen order; a recipient present at several hop counts keeps the
/// value from the last group visited.
///
/// # Errors
/// * `AggregateError::Division` - A recipient's last entry has no pings sent
///   and `metric` is [`Metric::LossRate`]
pub fn aggregate(
    metric: Metric,
    hop_index: &Grouping<'_, u32>,
) -> Result<MetricSummary, AggregateError> {
    let mut by_recipient = BTreeMap::new();
    let mut by_hop_count = BTreeMap::new();

    for (&hops, entries) in hop_index.iter() {
        let recipients = index_by_recipient(entries.iter().copied());
        let total = recipients.total_entries() as f64;

        let mut weighted = 0.0;
        for (recipient, recipient_entries) in recipients.iter() {
            // Groups are never empty.
            let Some(last) = recipient_entries.last() else {
                continue;
            };
            let value = metric.of(last)?;
            by_recipient.insert(recipient.clone(), value);
            weighted += value * recipient_entries.len() as f64 / total;
        }

        debug!(
            "{} at {} hops: {:.4} over {} recipients",
            metric.label(),
            hops,
            weighted,
            recipients.len()
        );
        by_hop_count.insert(hops, weighted);
    }

    Ok(MetricSummary {
        metric,
        by_recipient,
        by_hop_count,
    })
}

/// Latest latency per recipient and weighted latency per hop count
///
/// **Public** - latency instantiation of [`aggregate`]
pub fn get_avg_latency(hop_index: &Grouping<'_, u32>) -> Result<MetricSummary, AggregateError> {
    aggregate(Metric::Latency, hop_index)
}

/// Latest loss rate per recipient and weighted loss rate per hop count
///
/// **Public** - loss-rate instantiation of [`aggregate`]
pub fn get_loss_rate(hop_index: &Grouping<'_, u32>) -> Result<MetricSummary, AggregateError> {
    aggregate(Metric::LossRate, hop_index)
}
