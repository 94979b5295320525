use crate::log::{AggregatedRecord, DeviceId};
use std::cmp::Ordering;
use std::fmt;

/// Ranking key derived from a device aggregate.
///
/// Ordered by up-traffic, then down-traffic, then timestamp; a larger value
/// ranks greater at each level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortKey {
    pub up_traffic: i64,
    pub down_traffic: i64,
    pub timestamp: i64,
}

impl SortKey {
    pub fn new(up_traffic: i64, down_traffic: i64, timestamp: i64) -> Self {
        Self {
            up_traffic,
            down_traffic,
            timestamp,
        }
    }
}

impl From<&AggregatedRecord> for SortKey {
    fn from(agg: &AggregatedRecord) -> Self {
        Self {
            up_traffic: agg.up_traffic,
            down_traffic: agg.down_traffic,
            timestamp: agg.timestamp,
        }
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.up_traffic
            .cmp(&other.up_traffic)
            .then_with(|| self.down_traffic.cmp(&other.down_traffic))
            .then_with(|| self.timestamp.cmp(&other.timestamp))
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Rendered as `(upTraffic, downTraffic, timestamp)`.
impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.up_traffic, self.down_traffic, self.timestamp
        )
    }
}

/// One ranked device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultEntry {
    pub key: SortKey,
    pub device: DeviceId,
}

impl ResultEntry {
    pub fn new(key: SortKey, device: DeviceId) -> Self {
        Self { key, device }
    }

    pub fn from_aggregate(device: DeviceId, agg: &AggregatedRecord) -> Self {
        Self {
            key: SortKey::from(agg),
            device,
        }
    }
}

/// Ranking order: greater key first, then device id ascending for equal keys.
///
/// `Ordering::Less` means `a` ranks ahead of `b`.
pub fn ranking_order(a: &ResultEntry, b: &ResultEntry) -> Ordering {
    b.key.cmp(&a.key).then_with(|| a.device.cmp(&b.device))
}
