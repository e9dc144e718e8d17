//! Seeded random process sets.
//!
//! Arrival times are drawn uniformly from `0..=max_arrival` and burst times
//! from `1..=max_burst`. The same spec and seed always yield the same set.

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::{Process, ProcessSet};

/// Shape of a generated workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadSpec {
    /// Number of processes.
    pub count: u32,
    /// Latest possible arrival time.
    pub max_arrival: i64,
    /// Longest possible burst time (at least 1).
    pub max_burst: i64,
}

impl WorkloadSpec {
    /// Creates a spec for `count` processes with arrivals in `0..=20` and
    /// bursts in `1..=10`.
    pub fn new(count: u32) -> Self {
        Self {
            count,
            max_arrival: 20,
            max_burst: 10,
        }
    }

    /// Sets the latest arrival time (clamped to at least 0).
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival.max(0);
        self
    }

    /// Sets the longest burst time (clamped to at least 1).
    pub fn with_max_burst(mut self, max_burst: i64) -> Self {
        self.max_burst = max_burst.max(1);
        self
    }
}

impl Default for WorkloadSpec {
    fn default() -> Self {
        Self::new(10)
    }
}

/// Generates processes `1..=count` in input order.
pub fn random_processes(spec: &WorkloadSpec, seed: u64) -> Vec<Process> {
    let mut rng = StdRng::seed_from_u64(seed);
    let max_arrival = spec.max_arrival.max(0);
    let max_burst = spec.max_burst.max(1);

    (1..=spec.count)
        .map(|id| {
            let arrival = rng.random_range(0..=max_arrival);
            let burst = rng.random_range(1..=max_burst);
            Process::new(id, arrival, burst)
        })
        .collect()
}

/// Generates an arrival-sorted process set.
pub fn random_process_set(spec: &WorkloadSpec, seed: u64) -> ProcessSet {
    // Ranges above keep every process valid.
    ProcessSet::new(random_processes(spec, seed)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reproducible() {
        let spec = WorkloadSpec::new(15);
        assert_eq!(random_processes(&spec, 7), random_processes(&spec, 7));
        assert_ne!(random_processes(&spec, 7), random_processes(&spec, 8));
    }

    #[test]
    fn test_ranges_respected() {
        let spec = WorkloadSpec::new(200).with_max_arrival(5).with_max_burst(3);
        let processes = random_processes(&spec, 1);
        assert_eq!(processes.len(), 200);
        for (i, p) in processes.iter().enumerate() {
            assert_eq!(p.id as usize, i + 1);
            assert!((0..=5).contains(&p.arrival_time));
            assert!((1..=3).contains(&p.burst_time));
        }
    }

    #[test]
    fn test_degenerate_spec_clamped() {
        let spec = WorkloadSpec::new(5).with_max_arrival(-3).with_max_burst(0);
        let set = random_process_set(&spec, 0);
        assert_eq!(set.len(), 5);
        assert!(set.iter().all(|p| p.arrival_time == 0 && p.burst_time == 1));
    }

    #[test]
    fn test_set_is_sorted() {
        let set = random_process_set(&WorkloadSpec::new(50), 3);
        assert!(set
            .as_slice()
            .windows(2)
            .all(|w| w[0].arrival_time <= w[1].arrival_time));
    }

    #[test]
    fn test_zero_count() {
        assert!(random_process_set(&WorkloadSpec::new(0), 0).is_empty());
    }
}
