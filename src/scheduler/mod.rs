//! Non-preemptive schedulers and KPI evaluation.
//!
//! Both schedulers simulate a single server over an arrival-sorted
//! [`ProcessSet`] and return a [`ScheduleResult`].
//!
//! # Algorithms
//!
//! | Scheduler | Next process to run |
//! |-----------|---------------------|
//! | `SjfScheduler` | Shortest burst among admitted processes |
//! | `FcfsScheduler` | Next in arrival order |
//!
//! # KPI
//!
//! `ScheduleKpi` summarizes a result: makespan, throughput, and average
//! turnaround, waiting, and weighted turnaround times.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Smith (1956), SPT is optimal for mean flow time on a single machine

mod fcfs;
mod kpi;
mod sjf;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::SchedulerConfig;
use crate::models::{ProcessSet, ScheduleResult};

pub use fcfs::FcfsScheduler;
pub use kpi::ScheduleKpi;
pub use sjf::SjfScheduler;

/// A single-server scheduling discipline.
///
/// Implementations must be pure: the same process set always yields the
/// same result, and the set itself is never modified.
pub trait Scheduler: fmt::Debug {
    /// Short name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Simulates the discipline over `processes`.
    fn schedule(&self, processes: &ProcessSet) -> ScheduleResult;

    /// Long-form name.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Built-in disciplines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Non-preemptive Shortest Job First.
    Sjf,
    /// First Come First Serve.
    Fcfs,
}

impl Algorithm {
    /// Every built-in discipline, in report order.
    pub const ALL: [Algorithm; 2] = [Algorithm::Sjf, Algorithm::Fcfs];

    /// Builds the scheduler for this discipline.
    pub fn scheduler(self, config: SchedulerConfig) -> Box<dyn Scheduler> {
        match self {
            Self::Sjf => Box::new(SjfScheduler::with_config(config)),
            Self::Fcfs => Box::new(FcfsScheduler::with_config(config)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sjf => f.write_str("SJF"),
            Self::Fcfs => f.write_str("FCFS"),
        }
    }
}
