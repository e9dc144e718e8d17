//! Schedule quality metrics (KPIs).
//!
//! Computes standard single-server performance indicators from a
//! completed schedule and its input processes.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest completion time |
//! | Throughput | Completed processes / makespan |
//! | Avg Turnaround | Mean(completion - arrival) |
//! | Avg Waiting | Mean(turnaround - burst) |
//! | Avg Weighted Turnaround | Mean(turnaround / burst) |
//! | Max Turnaround | Largest single turnaround |

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{ProcessId, ProcessSet, ScheduleResult};

/// Schedule performance indicators.
///
/// All time values are in clock ticks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleKpi {
    /// Number of records that matched an input process.
    pub completed: usize,
    /// Latest completion time.
    pub makespan: i64,
    /// Processes per tick; `None` for an empty schedule.
    pub throughput: Option<f64>,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean time spent waiting (turnaround minus burst).
    pub avg_waiting: f64,
    /// Mean of turnaround / burst.
    pub avg_weighted_turnaround: f64,
    /// Largest turnaround time (0 for an empty schedule).
    pub max_turnaround: i64,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule and the process set it was built from.
    ///
    /// Records whose process is missing from `processes` are ignored.
    pub fn calculate(result: &ScheduleResult, processes: &ProcessSet) -> Self {
        let bursts: HashMap<ProcessId, i64> =
            processes.iter().map(|p| (p.id, p.burst_time)).collect();

        let mut completed: usize = 0;
        let mut total_turnaround: f64 = 0.0;
        let mut total_waiting: f64 = 0.0;
        let mut total_weighted: f64 = 0.0;
        let mut max_turnaround: i64 = 0;

        for record in &result.records {
            let Some(&burst) = bursts.get(&record.process_id) else {
                continue;
            };
            completed += 1;
            total_turnaround += record.turnaround_time as f64;
            total_waiting += record.waiting_time(burst) as f64;
            total_weighted += record.turnaround_time as f64 / burst as f64;
            max_turnaround = max_turnaround.max(record.turnaround_time);
        }

        let mean = |total: f64| {
            if completed == 0 {
                0.0
            } else {
                total / completed as f64
            }
        };

        Self {
            completed,
            makespan: result.makespan(),
            throughput: result.throughput,
            avg_turnaround: mean(total_turnaround),
            avg_waiting: mean(total_waiting),
            avg_weighted_turnaround: mean(total_weighted),
            max_turnaround,
        }
    }
}
