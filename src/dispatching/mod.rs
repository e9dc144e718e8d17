//! Ready-queue dispatching for non-preemptive scheduling.
//!
//! Holds the processes that have arrived but not yet run, and hands back the
//! one with the shortest burst time. Ties between equal bursts are resolved
//! by a [`TieBreaker`] so that runs are reproducible.
//!
//! # Usage
//!
//! ```
//! use u_procsched::dispatching::{ReadyQueue, TieBreaker};
//! use u_procsched::models::Process;
//!
//! let processes = [Process::new(1, 0, 5), Process::new(2, 0, 3)];
//! let mut queue = ReadyQueue::new(TieBreaker::Admission);
//! queue.push(0, &processes[0]);
//! queue.push(1, &processes[1]);
//! assert_eq!(queue.pop(), Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

mod queue;

pub use queue::{ReadyQueue, TieBreaker};
