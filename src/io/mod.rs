//! Host-facing input and output.
//!
//! The schedulers are pure; these traits are how a host program feeds them
//! processes and shows their results.
//!
//! - [`ProcessSource`]: obtains a process set (e.g., [`TextSource`] over stdin)
//! - [`ScheduleReporter`]: renders a schedule (e.g., [`TableReporter`], [`JsonReporter`])

mod report;
mod source;

pub use report::{format_table, JsonReporter, ScheduleReporter, TableReporter};
pub use source::{parse_process_text, ParseError, ProcessSource, TextSource};
