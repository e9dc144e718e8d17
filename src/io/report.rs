//! Schedule reporters.

use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::models::ScheduleResult;

/// Anything that can render a schedule.
pub trait ScheduleReporter {
    /// Renders `result` under the heading `title` (e.g., "SJF").
    fn report(&mut self, title: &str, result: &ScheduleResult) -> Result<()>;
}

/// Formats a schedule as the classic console table.
///
/// ```text
/// SJF Algorithm
/// Throughput: 0.19
/// ProcessID | Completion Time | Turn Around Time
/// 1         | 5               | 5
/// ```
pub fn format_table(title: &str, result: &ScheduleResult) -> String {
    let throughput = match result.throughput {
        Some(throughput) => format!("{throughput:.2}"),
        None => "undefined".to_string(),
    };
    let mut out = format!(
        "{title} Algorithm\nThroughput: {throughput}\nProcessID | Completion Time | Turn Around Time\n"
    );
    for r in &result.records {
        out.push_str(&format!(
            "{:<9} | {:<15} | {}\n",
            r.process_id, r.completion_time, r.turnaround_time
        ));
    }
    out
}

/// Writes [`format_table`] output, one table per report.
#[derive(Debug)]
pub struct TableReporter<W> {
    out: W,
}

impl<W: Write> TableReporter<W> {
    /// Wraps a writer.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ScheduleReporter for TableReporter<W> {
    fn report(&mut self, title: &str, result: &ScheduleResult) -> Result<()> {
        self.out.write_all(format_table(title, result).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    algorithm: &'a str,
    #[serde(flatten)]
    result: &'a ScheduleResult,
}

/// Writes one JSON object per report, newline-delimited.
#[derive(Debug)]
pub struct JsonReporter<W> {
    out: W,
}

impl<W: Write> JsonReporter<W> {
    /// Wraps a writer.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ScheduleReporter for JsonReporter<W> {
    fn report(&mut self, title: &str, result: &ScheduleResult) -> Result<()> {
        serde_json::to_writer(
            &mut self.out,
            &JsonReport {
                algorithm: title,
                result,
            },
        )?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessSet;
    use crate::scheduler::{Scheduler, SjfScheduler};
    use pretty_assertions::assert_eq;

    fn sample() -> ScheduleResult {
        let set = ProcessSet::from_pairs(&[(0, 5), (1, 3), (2, 8)]).unwrap();
        SjfScheduler::new().schedule(&set)
    }

    #[test]
    fn test_format_table() {
        let expected = "\
SJF Algorithm
Throughput: 0.19
ProcessID | Completion Time | Turn Around Time
1         | 5               | 5
2         | 8               | 7
3         | 16              | 14
";
        assert_eq!(format_table("SJF", &sample()), expected);
    }

    #[test]
    fn test_format_table_empty() {
        let table = format_table("FCFS", &ScheduleResult::new());
        assert_eq!(
            table,
            "FCFS Algorithm\nThroughput: undefined\nProcessID | Completion Time | Turn Around Time\n"
        );
    }

    #[test]
    fn test_table_reporter_appends() {
        let mut reporter = TableReporter::new(Vec::new());
        reporter.report("SJF", &sample()).unwrap();
        reporter.report("FCFS", &ScheduleResult::new()).unwrap();
        let text = String::from_utf8(reporter.into_inner()).unwrap();
        assert!(text.starts_with("SJF Algorithm\n"));
        assert!(text.contains("FCFS Algorithm\n"));
    }

    #[test]
    fn test_json_reporter() {
        let mut reporter = JsonReporter::new(Vec::new());
        reporter.report("SJF", &sample()).unwrap();
        let text = String::from_utf8(reporter.into_inner()).unwrap();
        let value: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(value["algorithm"], "SJF");
        assert_eq!(value["records"][1]["process_id"], 2);
        assert_eq!(value["records"][2]["turnaround_time"], 14);
        assert_eq!(value["throughput"], 0.1875);
    }
}
