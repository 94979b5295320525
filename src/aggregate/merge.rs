use crate::log::AggregatedRecord;
use serde::{Deserialize, Serialize};

/// How two aggregates for the same device are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MergeMode {
    /// Earliest timestamp, summed up-traffic, summed down-traffic.
    /// Associative and commutative.
    #[default]
    Sum,
    /// Same as `Sum` except `down = a.up + b.down`. Order-dependent: only
    /// valid for a single sequential fold.
    Legacy,
}

impl MergeMode {
    /// Whether partial aggregates may be combined in any grouping and order.
    pub fn is_partition_safe(self) -> bool {
        matches!(self, MergeMode::Sum)
    }
}

/// Combine two aggregates into a new one. Traffic totals wrap on overflow.
pub fn merge(a: AggregatedRecord, b: AggregatedRecord, mode: MergeMode) -> AggregatedRecord {
    let down_traffic = match mode {
        MergeMode::Sum => a.down_traffic.wrapping_add(b.down_traffic),
        MergeMode::Legacy => a.up_traffic.wrapping_add(b.down_traffic),
    };
    AggregatedRecord {
        timestamp: a.timestamp.min(b.timestamp),
        up_traffic: a.up_traffic.wrapping_add(b.up_traffic),
        down_traffic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rec(ts: i64, up: i64, down: i64) -> AggregatedRecord {
        AggregatedRecord::new(ts, up, down)
    }

    #[test]
    fn sum_takes_min_timestamp_and_adds_traffic() {
        assert_eq!(
            merge(rec(1000, 10, 5), rec(2000, 5, 7), MergeMode::Sum),
            rec(1000, 15, 12)
        );
        assert_eq!(
            merge(rec(2000, 5, 7), rec(1000, 10, 5), MergeMode::Sum),
            rec(1000, 15, 12)
        );
    }

    #[test]
    fn sum_is_associative_on_a_sample() {
        let (a, b, c) = (rec(3, 1, 2), rec(1, 10, 20), rec(2, 100, 200));
        let left = merge(merge(a, b, MergeMode::Sum), c, MergeMode::Sum);
        let right = merge(a, merge(b, c, MergeMode::Sum), MergeMode::Sum);
        assert_eq!(left, right);
        assert_eq!(left, rec(1, 111, 222));
    }

    #[test]
    fn legacy_uses_left_up_traffic_for_down() {
        assert_eq!(
            merge(rec(1000, 10, 5), rec(2000, 5, 7), MergeMode::Legacy),
            rec(1000, 15, 17)
        );
    }

    #[test]
    fn legacy_is_not_commutative() {
        let a = rec(1000, 10, 5);
        let b = rec(2000, 5, 7);
        assert_ne!(
            merge(a, b, MergeMode::Legacy),
            merge(b, a, MergeMode::Legacy)
        );
    }

    #[test]
    fn totals_wrap_instead_of_panicking() {
        let merged = merge(rec(0, i64::MAX, i64::MAX), rec(0, 1, 1), MergeMode::Sum);
        assert_eq!(merged.up_traffic, i64::MIN);
        assert_eq!(merged.down_traffic, i64::MIN);
    }

    #[test]
    fn only_sum_is_partition_safe() {
        assert!(MergeMode::Sum.is_partition_safe());
        assert!(!MergeMode::Legacy.is_partition_safe());
        assert_eq!(MergeMode::default(), MergeMode::Sum);
    }
}
