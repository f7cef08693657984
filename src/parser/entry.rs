//! Typed measurement record.

use serde::{Deserialize, Serialize};

/// One observed ping/ack measurement for a recipient
///
/// **Public** - produced by the parser, borrowed by every later stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Recipient identifier, taken verbatim from the log
    pub recipient: String,

    /// Network hops between origin and recipient
    pub hops: u32,

    /// Pings sent to the recipient
    pub pings_sent: u64,

    /// Acknowledgements received (normally <= pings_sent, not enforced)
    pub acks: u64,

    /// Average round-trip latency
    pub avg_latency: f64,

    /// Sender battery percentage at the time of the measurement
    pub battery_level: f64,
}

impl Entry {
    /// Create a new entry
    ///
    /// **Public** - constructor
    pub fn new(
        recipient: impl Into<String>,
        hops: u32,
        pings_sent: u64,
        acks: u64,
        avg_latency: f64,
        battery_level: f64,
    ) -> Self {
        Self {
            recipient: recipient.into(),
            hops,
            pings_sent,
            acks,
            avg_latency,
            battery_level,
        }
    }

    /// Fraction of pings that went unacknowledged
    ///
    /// Returns `None` when no pings were sent.
    pub fn loss_rate(&self) -> Option<f64> {
        if self.pings_sent == 0 {
            return None;
        }
        Some(1.0 - self.acks as f64 / self.pings_sent as f64)
    }
}
