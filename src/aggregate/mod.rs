//! Per-device aggregation: a keyed fold of log records with `merge`.

pub mod merge;

pub use merge::{MergeMode, merge};

use crate::log::{AggregatedRecord, DeviceId, LogRecord};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// Device -> aggregate mapping for one pipeline run (or one partition of it).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregator {
    mode: MergeMode,
    devices: BTreeMap<DeviceId, AggregatedRecord>,
    records_seen: usize,
}

impl Aggregator {
    pub fn new(mode: MergeMode) -> Self {
        Self {
            mode,
            devices: BTreeMap::new(),
            records_seen: 0,
        }
    }

    /// Fold one record into its device's aggregate (seeding it on first sight).
    pub fn push(&mut self, device: DeviceId, record: LogRecord) {
        self.records_seen += 1;
        self.fold(device, AggregatedRecord::from(record));
    }

    /// Fold another partial aggregator into this one.
    ///
    /// Devices present on both sides are combined with this aggregator's merge
    /// mode, with `self`'s aggregate as the left operand.
    pub fn merge_from(&mut self, other: Aggregator) {
        self.records_seen += other.records_seen;
        for (device, agg) in other.devices {
            self.fold(device, agg);
        }
    }

    fn fold(&mut self, device: DeviceId, agg: AggregatedRecord) {
        match self.devices.entry(device) {
            Entry::Vacant(slot) => {
                slot.insert(agg);
            }
            Entry::Occupied(mut slot) => {
                let merged = merge(*slot.get(), agg, self.mode);
                slot.insert(merged);
            }
        }
    }

    pub fn get(&self, device: &DeviceId) -> Option<&AggregatedRecord> {
        self.devices.get(device)
    }

    /// Number of distinct devices.
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Input records folded so far, including those of merged partials.
    pub fn records_seen(&self) -> usize {
        self.records_seen
    }

    /// One entry per device, ascending by device id.
    pub fn into_entries(self) -> Vec<(DeviceId, AggregatedRecord)> {
        self.devices.into_iter().collect()
    }
}

impl Extend<(DeviceId, LogRecord)> for Aggregator {
    fn extend<T: IntoIterator<Item = (DeviceId, LogRecord)>>(&mut self, iter: T) {
        for (device, record) in iter {
            self.push(device, record);
        }
    }
}

/// Aggregate a whole batch in one sequential pass.
pub fn aggregate<I>(records: I, mode: MergeMode) -> Aggregator
where
    I: IntoIterator<Item = (DeviceId, LogRecord)>,
{
    let mut agg = Aggregator::new(mode);
    agg.extend(records);
    agg
}
