//! Deterministic record ordering shared by both report views

use boletin_domain::EnrichedRecord;
use std::collections::BTreeMap;

/// Records sorted ascending by `(partition, display_name)`, with absent
/// partitions after all present ones.
pub fn sorted_records(records: &BTreeMap<String, EnrichedRecord>) -> Vec<&EnrichedRecord> {
    let mut sorted: Vec<&EnrichedRecord> = records.values().collect();
    sorted.sort_by(|a, b| {
        let key_a = (a.partition.is_none(), &a.partition, &a.display_name);
        let key_b = (b.partition.is_none(), &b.partition, &b.display_name);
        key_a.cmp(&key_b)
    });
    sorted
}
