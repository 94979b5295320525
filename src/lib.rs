//! Per-device traffic aggregation and top-N ranking over access logs.
//!
//! Lines of `<timestamp> <deviceID> <upTraffic> <downTraffic>` are parsed,
//! folded into one aggregate per device, keyed by (up, down, timestamp) and
//! the greatest N devices are returned, greatest first.

pub mod aggregate;
pub mod config;
pub mod log;
pub mod pipeline;
pub mod rank;
pub mod render;
pub mod source;

pub type Result<T> = anyhow::Result<T>;

pub use aggregate::{Aggregator, MergeMode};
pub use config::PipelineConfig;
pub use log::{AggregatedRecord, DeviceId, LogRecord, MalformedRecordError};
pub use pipeline::{RunOutput, run};
pub use rank::{ResultEntry, SortKey};
