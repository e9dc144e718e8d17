//! Non-preemptive Shortest Job First.
//!
//! # Algorithm
//!
//! 1. Admit the earliest-arriving process alone, whatever its arrival time.
//!    Processes sharing its arrival time wait until it completes.
//! 2. Pop the shortest burst from the ready queue and run it to completion.
//! 3. Admit, in arrival order, every process that arrived by the new clock.
//! 4. If the queue drains while processes remain (the next arrival is later
//!    than the clock), admit the next arrival together with every process
//!    sharing its arrival time, then continue at step 2. Under
//!    [`IdlePolicy::WaitForArrival`](crate::config::IdlePolicy::WaitForArrival)
//!    the clock first idles to that arrival; under the default policy it
//!    does not move.
//!
//! Step 4 keeps one completion per process. Stopping as soon as the queue
//! drains would silently leave every later arrival unscheduled.
//!
//! # Complexity
//! O(n log n): each process is pushed and popped once.

use tracing::{debug, info};

use super::Scheduler;
use crate::config::SchedulerConfig;
use crate::dispatching::ReadyQueue;
use crate::models::{CompletionRecord, ProcessSet, ScheduleResult};

/// Shortest Job First scheduler.
///
/// # Example
///
/// ```
/// use u_procsched::models::ProcessSet;
/// use u_procsched::scheduler::{Scheduler, SjfScheduler};
///
/// let processes = ProcessSet::from_pairs(&[(0, 8), (1, 4), (2, 2), (3, 1)]).unwrap();
/// let result = SjfScheduler::new().schedule(&processes);
/// assert_eq!(result.completion_order(), vec![1, 4, 3, 2]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SjfScheduler {
    config: SchedulerConfig,
}

impl SjfScheduler {
    /// Creates a scheduler with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scheduler with the given configuration.
    pub fn with_config(config: SchedulerConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }
}

impl Scheduler for SjfScheduler {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn description(&self) -> &'static str {
        "Shortest Job First (non-preemptive)"
    }

    fn schedule(&self, processes: &ProcessSet) -> ScheduleResult {
        let mut result = ScheduleResult::new();
        let procs = processes.as_slice();
        let n = procs.len();
        if n == 0 {
            debug!("SJF: empty process set");
            return result;
        }

        let mut ready = ReadyQueue::with_capacity(self.config.tie_breaker, n);
        let mut clock: i64 = 0;
        let mut next = 0;

        while next < n || !ready.is_empty() {
            if ready.is_empty() {
                // Nothing waiting: take the next arrival unconditionally.
                let arrival_time = procs[next].arrival_time;
                clock = self.config.idle_policy.start_time(clock, arrival_time);
                debug!(pid = procs[next].id, clock, "SJF: seeding ready queue");
                if next == 0 {
                    ready.push(0, &procs[0]);
                    next = 1;
                } else {
                    while next < n && procs[next].arrival_time <= arrival_time {
                        ready.push(next, &procs[next]);
                        next += 1;
                    }
                }
            }

            let Some(index) = ready.pop() else { break };
            let process = &procs[index];
            clock += process.burst_time;
            result.add_record(CompletionRecord::new(
                process.id,
                process.arrival_time,
                clock,
            ));
            debug!(pid = process.id, clock, "SJF: completed");

            while next < n && procs[next].arrival_time <= clock {
                ready.push(next, &procs[next]);
                next += 1;
            }
        }

        result.finish(clock);
        info!(
            processes = n,
            makespan = clock,
            throughput = result.throughput.unwrap_or_default(),
            "SJF schedule complete"
        );
        result
    }
}
