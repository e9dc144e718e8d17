//! Schedule (solution) model.
//!
//! A schedule is the outcome of simulating one discipline over a process
//! set: one completion record per process, in the order processes finished,
//! plus the throughput of the run.

use serde::{Deserialize, Serialize};

use super::ProcessId;

/// Completion of a single process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRecord {
    /// Completed process.
    pub process_id: ProcessId,
    /// Clock value when the process finished.
    pub completion_time: i64,
    /// `completion_time - arrival_time`.
    pub turnaround_time: i64,
}

impl CompletionRecord {
    /// Creates a record for a process that arrived at `arrival_time` and
    /// finished at `completion_time`.
    pub fn new(process_id: ProcessId, arrival_time: i64, completion_time: i64) -> Self {
        Self {
            process_id,
            completion_time,
            turnaround_time: completion_time - arrival_time,
        }
    }

    /// Time spent in the system but not running.
    #[inline]
    pub fn waiting_time(&self, burst_time: i64) -> i64 {
        self.turnaround_time - burst_time
    }

    /// As a `(process_id, completion_time, turnaround_time)` tuple.
    #[inline]
    pub fn as_tuple(&self) -> (ProcessId, i64, i64) {
        (self.process_id, self.completion_time, self.turnaround_time)
    }
}

/// Result of running a scheduler over a process set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Records in completion order.
    pub records: Vec<CompletionRecord>,
    /// Processes completed per tick. `None` when nothing ran.
    pub throughput: Option<f64>,
}

impl ScheduleResult {
    /// Creates an empty result (no processes, undefined throughput).
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record.
    pub fn add_record(&mut self, record: CompletionRecord) {
        self.records.push(record);
    }

    /// Fixes throughput as `records / elapsed`.
    ///
    /// Leaves it undefined when there are no records or no elapsed time.
    pub fn finish(&mut self, elapsed: i64) {
        self.throughput = if self.records.is_empty() || elapsed <= 0 {
            None
        } else {
            Some(self.records.len() as f64 / elapsed as f64)
        };
    }

    /// Latest completion time (0 for an empty result).
    pub fn makespan(&self) -> i64 {
        self.records
            .iter()
            .map(|r| r.completion_time)
            .max()
            .unwrap_or(0)
    }

    /// Process ids in completion order.
    pub fn completion_order(&self) -> Vec<ProcessId> {
        self.records.iter().map(|r| r.process_id).collect()
    }

    /// Finds the record for a process.
    pub fn record_for(&self, process_id: ProcessId) -> Option<&CompletionRecord> {
        self.records.iter().find(|r| r.process_id == process_id)
    }

    /// Records as `(process_id, completion_time, turnaround_time)` tuples.
    pub fn tuples(&self) -> Vec<(ProcessId, i64, i64)> {
        self.records.iter().map(CompletionRecord::as_tuple).collect()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no process completed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
