//! Single-server CPU scheduling simulators.
//!
//! Simulates two non-preemptive disciplines over a set of processes, each
//! described by an arrival time and a burst (execution) time:
//!
//! - **Shortest Job First**: a min-burst ready queue picks the next process
//!   whenever the server frees up.
//! - **First Come First Serve**: processes run strictly in arrival order.
//!
//! Each simulator produces a [`ScheduleResult`](models::ScheduleResult):
//! per-process completion and turnaround times in completion order, plus
//! throughput.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `ProcessSet`, `CompletionRecord`,
//!   `ScheduleResult`
//! - **`validation`**: Input integrity checks (burst/arrival ranges, ids, ordering)
//! - **`dispatching`**: Ready queue with deterministic tie-breaking
//! - **`scheduler`**: SJF and FCFS simulators, KPI evaluation
//! - **`config`**: Tie-break and idle policies
//! - **`workload`**: Seeded random process sets
//! - **`io`**: Process sources and schedule reporters for host programs
//!
//! # Example
//!
//! ```
//! use u_procsched::models::ProcessSet;
//! use u_procsched::scheduler::{Scheduler, SjfScheduler};
//!
//! let processes = ProcessSet::from_pairs(&[(0, 5), (1, 3), (2, 8)]).unwrap();
//! let result = SjfScheduler::new().schedule(&processes);
//! assert_eq!(result.completion_order(), vec![1, 2, 3]);
//! assert_eq!(result.makespan(), 16);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod dispatching;
pub mod error;
pub mod io;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{Result, SchedError};
