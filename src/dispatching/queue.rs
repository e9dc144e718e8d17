//! Min-burst ready queue.
//!
//! A binary heap alone does not order equal keys, so every entry carries a
//! secondary tie key chosen by the [`TieBreaker`].

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};

use crate::models::Process;

/// How equal burst times are ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreaker {
    /// First admitted, first served (FIFO among equals).
    ///
    /// Processes are admitted in arrival order, with input order breaking
    /// equal arrivals.
    #[default]
    Admission,
    /// Lowest process id first.
    ById,
}

// Field order is the comparison order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct ReadyEntry {
    burst_time: i64,
    tie_key: u64,
    index: usize,
}

/// Processes waiting for the server, keyed by burst time.
///
/// Stores positions into the caller's process slice rather than the
/// processes themselves.
#[derive(Debug, Clone)]
pub struct ReadyQueue {
    heap: BinaryHeap<Reverse<ReadyEntry>>,
    tie_breaker: TieBreaker,
    admitted: u64,
}

impl ReadyQueue {
    /// Creates an empty queue.
    pub fn new(tie_breaker: TieBreaker) -> Self {
        Self {
            heap: BinaryHeap::new(),
            tie_breaker,
            admitted: 0,
        }
    }

    /// Creates an empty queue with room for `capacity` processes.
    pub fn with_capacity(tie_breaker: TieBreaker, capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            tie_breaker,
            admitted: 0,
        }
    }

    /// Admits the process found at `index` in the caller's slice.
    pub fn push(&mut self, index: usize, process: &Process) {
        let tie_key = match self.tie_breaker {
            TieBreaker::Admission => self.admitted,
            TieBreaker::ById => u64::from(process.id),
        };
        self.admitted += 1;
        self.heap.push(Reverse(ReadyEntry {
            burst_time: process.burst_time,
            tie_key,
            index,
        }));
    }

    /// Removes the shortest-burst process and returns its index.
    pub fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|Reverse(entry)| entry.index)
    }

    /// Index of the process `pop` would return next.
    pub fn peek(&self) -> Option<usize> {
        self.heap.peek().map(|Reverse(entry)| entry.index)
    }

    /// Number of waiting processes.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether nothing is waiting.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Total processes admitted over the queue's lifetime.
    pub fn admitted(&self) -> u64 {
        self.admitted
    }

    /// Active tie-break policy.
    pub fn tie_breaker(&self) -> TieBreaker {
        self.tie_breaker
    }
}
