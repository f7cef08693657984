//! Report schema and text rendering.
//!
//! A [`Report`] bundles the five results of one analysis run. It is printed
//! as text on stdout and can also be written as JSON.

use crate::aggregator::{get_avg_latency, get_hop_counts, get_loss_rate, index_by_hop_count};
use crate::parser::Entry;
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::AggregateError;
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;

/// All statistics for one log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Schema version for compatibility checking
    pub version: String,

    /// Timestamp when the report was generated
    pub generated_at: String,

    /// Number of data rows analysed
    pub entry_count: usize,

    pub user_to_avg_latency: BTreeMap<String, f64>,
    pub hop_to_avg_latency: BTreeMap<u32, f64>,
    pub user_to_loss_rate: BTreeMap<String, f64>,
    pub hop_to_loss_rate: BTreeMap<u32, f64>,

    /// Recipient -> hop count of its first entry
    pub recipient_hops: BTreeMap<String, u32>,
}

impl Report {
    /// Run the aggregation pipeline over parsed entries
    ///
    /// **Public** - indexes once by hop count, then computes latency, loss
    /// rate and hop counts
    ///
    /// # Errors
    /// * `AggregateError::Division` - See [`get_loss_rate`]
    pub fn from_entries(entries: &[Entry]) -> Result<Self, AggregateError> {
        let hop_index = index_by_hop_count(entries);

        let latency = get_avg_latency(&hop_index)?;
        info!("Computed {}", latency.summary());

        let loss = get_loss_rate(&hop_index)?;
        info!("Computed {}", loss.summary());

        Ok(Self {
            version: SCHEMA_VERSION.to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            entry_count: entries.len(),
            user_to_avg_latency: latency.by_recipient,
            hop_to_avg_latency: latency.by_hop_count,
            user_to_loss_rate: loss.by_recipient,
            hop_to_loss_rate: loss.by_hop_count,
            recipient_hops: get_hop_counts(entries),
        })
    }
}

/// Render the five report sections as text
///
/// **Public** - fixed section order: recipient latency, hop latency,
/// recipient loss rate, hop loss rate, recipient hop counts
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    push_section(&mut out, "user avg latency", &report.user_to_avg_latency);
    push_section(&mut out, "hop count avg latency", &report.hop_to_avg_latency);
    push_section(&mut out, "user loss rate", &report.user_to_loss_rate);
    push_section(&mut out, "hop loss rate", &report.hop_to_loss_rate);
    push_section(&mut out, "recipient hop counts", &report.recipient_hops);
    out
}

fn push_section<K: Display, V: Display>(out: &mut String, title: &str, map: &BTreeMap<K, V>) {
    out.push_str(&format!("{}:\n", title));
    if map.is_empty() {
        out.push_str("  (none)\n");
    }
    for (key, value) in map {
        out.push_str(&format!("  {} = {}\n", key, value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<Entry> {
        vec![
            Entry::new("A", 1, 10, 9, 5.0, 90.0),
            Entry::new("A", 1, 10, 5, 7.0, 85.0),
            Entry::new("B", 2, 10, 10, 3.0, 95.0),
        ]
    }

    #[test]
    fn test_from_entries() {
        let report = Report::from_entries(&sample()).unwrap();

        assert_eq!(report.version, SCHEMA_VERSION);
        assert_eq!(report.entry_count, 3);
        assert_eq!(
            report.user_to_avg_latency,
            BTreeMap::from([("A".to_string(), 7.0), ("B".to_string(), 3.0)])
        );
        assert_eq!(report.hop_to_avg_latency, BTreeMap::from([(1, 7.0), (2, 3.0)]));
        assert_eq!(
            report.user_to_loss_rate,
            BTreeMap::from([("A".to_string(), 0.5), ("B".to_string(), 0.0)])
        );
        assert_eq!(report.hop_to_loss_rate, BTreeMap::from([(1, 0.5), (2, 0.0)]));
        assert_eq!(
            report.recipient_hops,
            BTreeMap::from([("A".to_string(), 1), ("B".to_string(), 2)])
        );
    }

    #[test]
    fn test_from_entries_division_error() {
        let entries = vec![Entry::new("z", 1, 0, 0, 1.0, 50.0)];
        assert!(matches!(
            Report::from_entries(&entries),
            Err(AggregateError::Division { .. })
        ));
    }

    #[test]
    fn test_render_text_section_order() {
        let report = Report::from_entries(&sample()).unwrap();
        let text = render_text(&report);

        let expected = "\
user avg latency:
  A = 7
  B = 3
hop count avg latency:
  1 = 7
  2 = 3
user loss rate:
  A = 0.5
  B = 0
hop loss rate:
  1 = 0.5
  2 = 0
recipient hop counts:
  A = 1
  B = 2
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_text_empty_report() {
        let report = Report::from_entries(&[]).unwrap();
        let text = render_text(&report);
        assert_eq!(text.matches("(none)").count(), 5);
    }
}
