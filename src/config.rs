//! Scheduler configuration.
//!
//! The defaults reproduce the classic classroom accounting: the clock only
//! ever accumulates burst times, and equal bursts run in admission order.
//! Stricter semantics are opt-in.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dispatching::TieBreaker;
use crate::error::{Result, SchedError};

/// What the clock does when the next process has not arrived yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdlePolicy {
    /// Start the next process immediately; `clock += burst` unconditionally.
    ///
    /// A process that arrives after the accumulated clock can then finish
    /// "before" it arrived, giving a turnaround below its burst time.
    #[default]
    Accumulate,
    /// Idle forward to the process's arrival first:
    /// `clock = max(clock, arrival) + burst`.
    WaitForArrival,
}

impl IdlePolicy {
    /// Clock value at which a process arriving at `arrival_time` starts.
    #[inline]
    pub fn start_time(self, clock: i64, arrival_time: i64) -> i64 {
        match self {
            Self::Accumulate => clock,
            Self::WaitForArrival => clock.max(arrival_time),
        }
    }
}

/// Options shared by the schedulers.
///
/// # Example
/// ```
/// use u_procsched::config::{IdlePolicy, SchedulerConfig};
/// use u_procsched::dispatching::TieBreaker;
///
/// let config = SchedulerConfig::new()
///     .with_tie_breaker(TieBreaker::ById)
///     .with_idle_policy(IdlePolicy::WaitForArrival);
/// assert_eq!(config.idle_policy, IdlePolicy::WaitForArrival);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Ordering among equal burst times (SJF only).
    pub tie_breaker: TieBreaker,
    /// Clock behavior ahead of a late arrival.
    pub idle_policy: IdlePolicy,
}

impl SchedulerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tie-break policy.
    pub fn with_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Sets the idle policy.
    pub fn with_idle_policy(mut self, idle_policy: IdlePolicy) -> Self {
        self.idle_policy = idle_policy;
        self
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| SchedError::Config(e.to_string()))
    }

    /// Loads a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| SchedError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_accumulate_in_admission_order() {
        let config = SchedulerConfig::default();
        assert_eq!(config.tie_breaker, TieBreaker::Admission);
        assert_eq!(config.idle_policy, IdlePolicy::Accumulate);
    }

    #[test]
    fn test_start_time() {
        assert_eq!(IdlePolicy::Accumulate.start_time(3, 10), 3);
        assert_eq!(IdlePolicy::WaitForArrival.start_time(3, 10), 10);
        assert_eq!(IdlePolicy::WaitForArrival.start_time(12, 10), 12);
    }

    #[test]
    fn test_from_json() {
        let json = r#"{"tie_breaker": "by_id", "idle_policy": "wait_for_arrival"}"#;
        let config = SchedulerConfig::from_json(json).unwrap();
        assert_eq!(config.tie_breaker, TieBreaker::ById);
        assert_eq!(config.idle_policy, IdlePolicy::WaitForArrival);

        let partial =
            SchedulerConfig::from_json(r#"{"idle_policy": "wait_for_arrival"}"#).unwrap();
        assert_eq!(partial.tie_breaker, TieBreaker::Admission);
    }

    #[test]
    fn test_from_json_rejects_unknown_policy() {
        let err = SchedulerConfig::from_json(r#"{"idle_policy": "sometimes"}"#).unwrap_err();
        assert!(matches!(err, SchedError::Config(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = SchedulerConfig::load("/nonexistent/u-procsched.json").unwrap_err();
        assert!(err.to_string().contains("u-procsched.json"));
    }
}
