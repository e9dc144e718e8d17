//! Input validation for process sets.
//!
//! Checks structural integrity of processes before simulating. Detects:
//! - Non-positive burst times
//! - Negative arrival times
//! - Duplicate process ids
//! - Arrival/burst lists of different lengths
//! - Out-of-order sequences claimed to be arrival-sorted
//! - Times too large for the simulation clock
//!
//! A zero burst would let the clock stand still, so the SJF admission loop
//! could no longer rely on the clock advancing past each arrival.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Burst time is zero or negative.
    NonPositiveBurst,
    /// Arrival time is before the epoch.
    NegativeArrival,
    /// Two processes share the same id.
    DuplicateId,
    /// Arrival and burst lists differ in length.
    LengthMismatch,
    /// A sequence expected to be arrival-sorted is not.
    UnsortedArrivals,
    /// The latest arrival plus all burst times exceeds `i64::MAX`.
    ClockOverflow,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates processes in input order.
///
/// Checks:
/// 1. Every burst time is positive
/// 2. Every arrival time is non-negative
/// 3. No two processes share an id
/// 4. The latest arrival plus the sum of bursts fits in an `i64`, which
///    bounds every clock value either idle policy can reach
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process P{} has non-positive burst time {}", p.id, p.burst_time),
            ));
        }
        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process P{} has negative arrival time {}", p.id, p.arrival_time),
            ));
        }
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: P{}", p.id),
            ));
        }
    }

    let latest_arrival = processes
        .iter()
        .map(|p| p.arrival_time.max(0))
        .max()
        .unwrap_or(0);
    let horizon = processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst_time.max(0)));
    if horizon.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::ClockOverflow,
            format!(
                "Arrival and burst times of {} processes overflow the simulation clock",
                processes.len()
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates that parallel arrival and burst lists line up.
pub fn validate_lists(arrivals: &[i64], bursts: &[i64]) -> ValidationResult {
    if arrivals.len() == bursts.len() {
        Ok(())
    } else {
        Err(vec![ValidationError::new(
            ValidationErrorKind::LengthMismatch,
            format!(
                "{} arrival times but {} burst times",
                arrivals.len(),
                bursts.len()
            ),
        )])
    }
}

/// Reports every position where arrival time decreases.
pub fn check_sorted(processes: &[Process]) -> Vec<ValidationError> {
    processes
        .windows(2)
        .filter(|w| w[1].arrival_time < w[0].arrival_time)
        .map(|w| {
            ValidationError::new(
                ValidationErrorKind::UnsortedArrivals,
                format!(
                    "Process P{} (arrival {}) follows P{} (arrival {})",
                    w[1].id, w[1].arrival_time, w[0].id, w[0].arrival_time
                ),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 8),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_processes(&sample_processes()).is_ok());
        assert!(validate_processes(&[]).is_ok());
    }

    #[test]
    fn test_non_positive_burst() {
        let processes = vec![Process::new(1, 0, 0), Process::new(2, 0, -4)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::NonPositiveBurst));
    }

    #[test]
    fn test_negative_arrival() {
        let processes = vec![Process::new(1, -1, 3)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NegativeArrival);
        assert!(errors[0].message.contains("P1"));
    }

    #[test]
    fn test_duplicate_id() {
        let processes = vec![Process::new(1, 0, 3), Process::new(1, 2, 3)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_multiple_errors() {
        // Zero burst + negative arrival on the same process, then a duplicate
        let processes = vec![Process::new(1, -2, 0), Process::new(1, 0, 1)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_clock_overflow() {
        let processes = vec![Process::new(1, 0, i64::MAX), Process::new(2, 0, 1)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::ClockOverflow);

        // Late arrival plus a single burst
        let processes = vec![Process::new(1, 0, 1), Process::new(2, i64::MAX, 1)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::ClockOverflow);

        let processes = vec![Process::new(1, i64::MAX - 2, 1), Process::new(2, 0, 1)];
        assert!(validate_processes(&processes).is_ok());
    }

    #[test]
    fn test_list_length_mismatch() {
        assert!(validate_lists(&[0, 1], &[2, 3]).is_ok());
        let errors = validate_lists(&[0, 1, 2], &[2]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::LengthMismatch);
        assert_eq!(errors[0].to_string(), "3 arrival times but 1 burst times");
    }

    #[test]
    fn test_check_sorted() {
        assert!(check_sorted(&sample_processes()).is_empty());

        let unsorted = vec![
            Process::new(1, 4, 1),
            Process::new(2, 2, 1),
            Process::new(3, 2, 1),
            Process::new(4, 0, 1),
        ];
        let errors = check_sorted(&unsorted);
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::UnsortedArrivals));
    }
}
