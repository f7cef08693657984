//! Representative hop count per recipient.

use super::index::index_by_recipient;
use crate::parser::Entry;
use std::collections::BTreeMap;

/// Hop count of each recipient's first entry in the log
///
/// **Public** - the first observation is used here, while the metrics use
/// the last one.
pub fn get_hop_counts(entries: &[Entry]) -> BTreeMap<String, u32> {
    index_by_recipient(entries)
        .iter()
        .filter_map(|(recipient, group)| {
            group.first().map(|first| (recipient.clone(), first.hops))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_entry_wins() {
        let entries = vec![
            Entry::new("A", 1, 10, 9, 5.0, 90.0),
            Entry::new("B", 2, 10, 10, 3.0, 95.0),
            Entry::new("A", 3, 10, 5, 7.0, 85.0),
        ];

        let hops = get_hop_counts(&entries);

        assert_eq!(hops.len(), 2);
        assert_eq!(hops["A"], 1);
        assert_eq!(hops["B"], 2);
    }

    #[test]
    fn test_no_entries() {
        assert!(get_hop_counts(&[]).is_empty());
    }
}
