//! Ranking: composite sort key, descending sort and top-K selection.

pub mod key;
pub mod top_k;

pub use key::{ResultEntry, SortKey, ranking_order};
pub use top_k::{merge_top_k, select_top_k, top_k};

use crate::log::{AggregatedRecord, DeviceId};

/// Derive a key per device and sort all of them, greatest first.
pub fn rank<I>(aggregates: I) -> Vec<ResultEntry>
where
    I: IntoIterator<Item = (DeviceId, AggregatedRecord)>,
{
    let mut entries: Vec<ResultEntry> = aggregates
        .into_iter()
        .map(|(device, agg)| ResultEntry::from_aggregate(device, &agg))
        .collect();
    entries.sort_by(ranking_order);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ranks_by_up_traffic_first() {
        let ranked = rank(vec![
            (DeviceId::from("A"), AggregatedRecord::new(1000, 15, 12)),
            (DeviceId::from("B"), AggregatedRecord::new(1500, 100, 200)),
        ]);
        assert_eq!(
            ranked,
            vec![
                ResultEntry::new(SortKey::new(100, 200, 1500), DeviceId::from("B")),
                ResultEntry::new(SortKey::new(15, 12, 1000), DeviceId::from("A")),
            ]
        );
    }

    #[test]
    fn later_timestamp_ranks_higher_on_equal_traffic() {
        let ranked = rank(vec![
            (DeviceId::from("early"), AggregatedRecord::new(1, 10, 10)),
            (DeviceId::from("late"), AggregatedRecord::new(2, 10, 10)),
        ]);
        assert_eq!(ranked[0].device, DeviceId::from("late"));
    }
}
