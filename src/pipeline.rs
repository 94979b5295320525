//! End-to-end run: parse -> aggregate -> key -> sort -> top-K.
//!
//! With one worker everything is a single sequential fold. With more, lines
//! are split into contiguous chunks that are parsed and aggregated on scoped
//! threads; the partial aggregators are then reduced on the calling thread.

use crate::aggregate::{Aggregator, aggregate};
use crate::config::{PipelineConfig, max_workers};
use crate::log::{MalformedRecordError, parse_lines};
use crate::rank::{self, ResultEntry, merge_top_k, select_top_k};
use std::thread;
use tracing::{debug, info, warn};

/// Ranked result of one run plus the counts needed to report on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutput {
    /// Records folded.
    pub records: usize,
    /// Distinct devices.
    pub devices: usize,
    /// At most `top_n` entries, greatest first.
    pub entries: Vec<ResultEntry>,
}

/// Run the pipeline over numbered lines (1-based numbers, used in errors).
pub fn run<I, S>(lines: I, config: &PipelineConfig) -> Result<RunOutput, MalformedRecordError>
where
    I: IntoIterator<Item = (usize, S)>,
    S: AsRef<str> + Sync,
{
    let workers = config.effective_workers();
    if !config.merge_mode.is_partition_safe() && config.workers > 1 {
        warn!(
            requested = config.workers,
            merge_mode = ?config.merge_mode,
            "merge mode is order-dependent; aggregating sequentially"
        );
    } else if workers < config.workers {
        debug!(requested = config.workers, workers, "worker count capped");
    }

    if workers <= 1 {
        run_sequential(lines, config)
    } else {
        let lines: Vec<(usize, S)> = lines.into_iter().collect();
        run_partitioned(&lines, workers, config)
    }
}

/// Convenience for unnumbered text: lines are numbered from 1.
pub fn run_text(text: &str, config: &PipelineConfig) -> Result<RunOutput, MalformedRecordError> {
    run(
        text.lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l)),
        config,
    )
}

fn run_sequential<I, S>(lines: I, config: &PipelineConfig) -> Result<RunOutput, MalformedRecordError>
where
    I: IntoIterator<Item = (usize, S)>,
    S: AsRef<str>,
{
    let records = parse_lines(lines)?;
    debug!(records = records.len(), "parsed log lines");

    let agg = aggregate(records, config.merge_mode);
    let records = agg.records_seen();
    let devices = agg.len();
    debug!(devices, "aggregated by device");

    let ranked = rank::rank(agg.into_entries());
    let entries = rank::top_k(ranked, config.top_n);
    info!(records, devices, kept = entries.len(), "ranking complete");

    Ok(RunOutput {
        records,
        devices,
        entries,
    })
}

/// Parse and aggregate `lines` in `workers` contiguous chunks, then reduce.
///
/// `workers` is capped by the host's parallelism and the line count.
/// Order-dependent merge modes are folded sequentially instead.
pub fn run_partitioned<S>(
    lines: &[(usize, S)],
    workers: usize,
    config: &PipelineConfig,
) -> Result<RunOutput, MalformedRecordError>
where
    S: AsRef<str> + Sync,
{
    let mode = config.merge_mode;
    if !mode.is_partition_safe() {
        return run_sequential(lines.iter().map(|(lno, l)| (*lno, l.as_ref())), config);
    }
    let workers = workers.clamp(1, max_workers()).min(lines.len().max(1));
    let chunk_len = lines.len().div_ceil(workers).max(1);

    let partials: Vec<Result<Aggregator, MalformedRecordError>> = thread::scope(|s| {
        let handles: Vec<_> = lines
            .chunks(chunk_len)
            .map(|chunk| {
                s.spawn(move || -> Result<Aggregator, MalformedRecordError> {
                    let parsed =
                        parse_lines(chunk.iter().map(|(lno, l)| (*lno, l.as_ref())))?;
                    Ok(aggregate(parsed, mode))
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
            .collect()
    });
    debug!(partitions = partials.len(), "partial aggregation finished");

    // Report the earliest bad line, whichever worker saw it.
    let mut merged = Aggregator::new(mode);
    let mut first_err: Option<MalformedRecordError> = None;
    for partial in partials {
        match partial {
            Ok(agg) => merged.merge_from(agg),
            Err(e) => {
                if first_err.as_ref().is_none_or(|f| e.line_no < f.line_no) {
                    first_err = Some(e);
                }
            }
        }
    }
    if let Some(e) = first_err {
        return Err(e);
    }

    let records = merged.records_seen();
    let devices = merged.len();
    debug!(records, devices, "partials reduced");

    // Devices are disjoint after the reduce, so per-slice top-N lists can be
    // merged into the global top-N.
    let aggregates = merged.into_entries();
    let slice_len = aggregates.len().div_ceil(workers).max(1);
    let top_n = config.top_n;
    let partial_tops: Vec<Vec<ResultEntry>> = thread::scope(|s| {
        let handles: Vec<_> = aggregates
            .chunks(slice_len)
            .map(|slice| {
                s.spawn(move || {
                    select_top_k(
                        slice
                            .iter()
                            .map(|(device, agg)| ResultEntry::from_aggregate(device.clone(), agg)),
                        top_n,
                    )
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
            .collect()
    });
    let entries = merge_top_k(partial_tops, top_n);
    info!(records, devices, kept = entries.len(), workers, "ranking complete");

    Ok(RunOutput {
        records,
        devices,
        entries,
    })
}
