//! First Come First Serve.
//!
//! Runs processes strictly in arrival order. Under the default
//! [`IdlePolicy::Accumulate`](crate::config::IdlePolicy::Accumulate) the final
//! clock equals the sum of all burst times.

use tracing::{debug, info};

use super::Scheduler;
use crate::config::SchedulerConfig;
use crate::models::{CompletionRecord, ProcessSet, ScheduleResult};

/// First Come First Serve scheduler.
#[derive(Debug, Clone, Default)]
pub struct FcfsScheduler {
    config: SchedulerConfig,
}

impl FcfsScheduler {
    /// Creates a scheduler with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scheduler with the given configuration.
    ///
    /// Only the idle policy applies; there are no ties to break.
    pub fn with_config(config: SchedulerConfig) -> Self {
        Self { config }
    }
}

impl Scheduler for FcfsScheduler {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn description(&self) -> &'static str {
        "First Come First Serve"
    }

    fn schedule(&self, processes: &ProcessSet) -> ScheduleResult {
        let mut result = ScheduleResult::new();
        let mut clock: i64 = 0;

        for process in processes {
            clock = self
                .config
                .idle_policy
                .start_time(clock, process.arrival_time)
                + process.burst_time;
            result.add_record(CompletionRecord::new(
                process.id,
                process.arrival_time,
                clock,
            ));
            debug!(pid = process.id, clock, "FCFS: completed");
        }

        result.finish(clock);
        info!(
            processes = processes.len(),
            makespan = clock,
            throughput = result.throughput.unwrap_or_default(),
            "FCFS schedule complete"
        );
        result
    }
}
