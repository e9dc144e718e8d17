//! Scheduling domain models.
//!
//! Value types shared by every scheduler: the input processes and the
//! resulting completion schedule.
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | Arrival and burst time of one unit of work |
//! | `ProcessSet` | Arrival-sorted input, shared read-only by schedulers |
//! | `CompletionRecord` | When one process finished and its turnaround |
//! | `ScheduleResult` | Records in completion order plus throughput |

mod process;
mod schedule;

pub use process::{Process, ProcessId, ProcessSet};
pub use schedule::{CompletionRecord, ScheduleResult};
