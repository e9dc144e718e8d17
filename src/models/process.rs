//! Process and process set models.
//!
//! A process is the unit of work handed to a scheduler: it becomes eligible
//! at its arrival time and occupies the single server for its burst time.
//!
//! # Time Representation
//! All times are integer ticks relative to a simulation epoch (t=0). The
//! consumer decides what a tick means.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Result, SchedError};
use crate::validation::{check_sorted, validate_lists, validate_processes};

/// Process identifier (1-based, assigned by input position).
pub type ProcessId = u32;

/// A process to be scheduled.
///
/// Immutable once constructed; schedulers only ever borrow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    /// Identifier, 1-based position in the original input.
    pub id: ProcessId,
    /// Instant the process becomes eligible to run.
    pub arrival_time: i64,
    /// Uninterrupted execution time once started.
    pub burst_time: i64,
}

impl Process {
    /// Creates a new process.
    pub fn new(id: ProcessId, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
        }
    }
}

/// An arrival-sorted collection of processes.
///
/// Sorting is stable: processes with equal arrival times keep their input
/// order. The order is established once at construction and never changes,
/// so every scheduler sees the same sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Process>", into = "Vec<Process>")]
pub struct ProcessSet {
    processes: Vec<Process>,
}

impl ProcessSet {
    /// Builds a set from processes in input order.
    ///
    /// Validates burst and arrival ranges and id uniqueness, then sorts by
    /// arrival time.
    pub fn new(mut processes: Vec<Process>) -> Result<Self> {
        if let Err(errors) = validate_processes(&processes) {
            warn!(count = errors.len(), "rejected process set");
            return Err(SchedError::Validation(errors));
        }
        processes.sort_by_key(|p| p.arrival_time);
        Ok(Self { processes })
    }

    /// Builds a set from `(arrival, burst)` pairs, numbering them `1..=n`.
    pub fn from_pairs(pairs: &[(i64, i64)]) -> Result<Self> {
        let processes = pairs
            .iter()
            .zip(1..)
            .map(|(&(arrival, burst), id)| Process::new(id, arrival, burst))
            .collect();
        Self::new(processes)
    }

    /// Builds a set from parallel arrival and burst lists.
    ///
    /// The lists must have equal length; index `i` becomes process `i + 1`.
    pub fn from_lists(arrivals: &[i64], bursts: &[i64]) -> Result<Self> {
        validate_lists(arrivals, bursts).map_err(SchedError::Validation)?;
        let pairs: Vec<(i64, i64)> = arrivals
            .iter()
            .copied()
            .zip(bursts.iter().copied())
            .collect();
        Self::from_pairs(&pairs)
    }

    /// Wraps processes that the caller guarantees are already arrival-sorted.
    ///
    /// Still validated; an out-of-order sequence is reported as
    /// [`UnsortedArrivals`](crate::validation::ValidationErrorKind::UnsortedArrivals)
    /// rather than silently re-sorted.
    pub fn presorted(processes: Vec<Process>) -> Result<Self> {
        let mut errors = validate_processes(&processes).err().unwrap_or_default();
        errors.extend(check_sorted(&processes));
        if !errors.is_empty() {
            warn!(count = errors.len(), "rejected presorted process set");
            return Err(SchedError::Validation(errors));
        }
        Ok(Self { processes })
    }

    /// Processes in arrival order.
    pub fn as_slice(&self) -> &[Process] {
        &self.processes
    }

    /// Iterates in arrival order.
    pub fn iter(&self) -> std::slice::Iter<'_, Process> {
        self.processes.iter()
    }

    /// Process at the given arrival-order position.
    pub fn get(&self, index: usize) -> Option<&Process> {
        self.processes.get(index)
    }

    /// Finds a process by id.
    pub fn find(&self, id: ProcessId) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the set has no processes.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Sum of all burst times.
    pub fn total_burst_time(&self) -> i64 {
        self.processes.iter().map(|p| p.burst_time).sum()
    }
}

impl<'a> IntoIterator for &'a ProcessSet {
    type Item = &'a Process;
    type IntoIter = std::slice::Iter<'a, Process>;

    fn into_iter(self) -> Self::IntoIter {
        self.processes.iter()
    }
}

impl TryFrom<Vec<Process>> for ProcessSet {
    type Error = SchedError;

    fn try_from(processes: Vec<Process>) -> Result<Self> {
        Self::new(processes)
    }
}

impl From<ProcessSet> for Vec<Process> {
    fn from(set: ProcessSet) -> Self {
        set.processes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    fn ids(set: &ProcessSet) -> Vec<ProcessId> {
        set.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_from_pairs_assigns_ids_and_sorts() {
        let set = ProcessSet::from_pairs(&[(4, 2), (0, 5), (2, 1)]).unwrap();
        assert_eq!(ids(&set), vec![2, 3, 1]);
        assert_eq!(set.len(), 3);
        assert_eq!(set.find(1), Some(&Process::new(1, 4, 2)));
        assert_eq!(set.get(0), Some(&Process::new(2, 0, 5)));
    }

    #[test]
    fn test_sort_is_stable_on_equal_arrivals() {
        let set = ProcessSet::from_pairs(&[(3, 1), (1, 9), (3, 4), (1, 2)]).unwrap();
        assert_eq!(ids(&set), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_from_lists() {
        let set = ProcessSet::from_lists(&[0, 1, 2], &[5, 3, 8]).unwrap();
        assert_eq!(set.total_burst_time(), 16);
        assert_eq!(ids(&set), vec![1, 2, 3]);
    }

    #[test]
    fn test_from_lists_length_mismatch() {
        let err = ProcessSet::from_lists(&[0, 1], &[5]).unwrap_err();
        assert!(err
            .validation_errors()
            .iter()
            .any(|e| e.kind == ValidationErrorKind::LengthMismatch));
    }

    #[test]
    fn test_zero_burst_rejected() {
        let err = ProcessSet::from_pairs(&[(0, 5), (1, 0)]).unwrap_err();
        assert!(err
            .validation_errors()
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveBurst));
    }

    #[test]
    fn test_presorted_rejects_out_of_order() {
        let err = ProcessSet::presorted(vec![Process::new(1, 5, 1), Process::new(2, 0, 1)])
            .unwrap_err();
        assert!(err
            .validation_errors()
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnsortedArrivals));
    }

    #[test]
    fn test_presorted_keeps_order() {
        let set =
            ProcessSet::presorted(vec![Process::new(7, 0, 1), Process::new(3, 0, 2)]).unwrap();
        assert_eq!(ids(&set), vec![7, 3]);
    }

    #[test]
    fn test_deserialize_validates_and_sorts() {
        let json = r#"[
            {"id": 1, "arrival_time": 3, "burst_time": 2},
            {"id": 2, "arrival_time": 0, "burst_time": 4}
        ]"#;
        let set: ProcessSet = serde_json::from_str(json).unwrap();
        assert_eq!(ids(&set), vec![2, 1]);

        let bad = r#"[{"id": 1, "arrival_time": 0, "burst_time": -3}]"#;
        assert!(serde_json::from_str::<ProcessSet>(bad).is_err());
    }

    #[test]
    fn test_empty_set() {
        let set = ProcessSet::from_pairs(&[]).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.total_burst_time(), 0);
    }
}
