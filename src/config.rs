//! Pipeline configuration shared by the library and the command line.

use crate::aggregate::MergeMode;
use serde::{Deserialize, Serialize};

/// Devices reported when no count is given.
pub const DEFAULT_TOP_N: usize = 10;

/// Upper bound on worker threads: the host's available parallelism.
pub fn max_workers() -> usize {
    std::thread::available_parallelism().map_or(1, |n| n.get())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// How many devices to keep after ranking.
    pub top_n: usize,
    /// Worker threads for parse + local aggregation. `1` runs sequentially.
    pub workers: usize,
    pub merge_mode: MergeMode,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            workers: 1,
            merge_mode: MergeMode::Sum,
        }
    }
}

impl PipelineConfig {
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_merge_mode(mut self, merge_mode: MergeMode) -> Self {
        self.merge_mode = merge_mode;
        self
    }

    /// Worker count actually used: between one and `max_workers()`, and
    /// sequential for merge modes that depend on arrival order.
    pub fn effective_workers(&self) -> usize {
        if self.merge_mode.is_partition_safe() {
            self.workers.clamp(1, max_workers())
        } else {
            1
        }
    }
}
