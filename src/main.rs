//! Console front end.
//!
//! Reads a process count, arrival times, and burst times from stdin, then
//! prints the SJF and FCFS schedules.
//!
//! ```text
//! u-procsched [--json] [CONFIG.json]
//! ```
//!
//! Set `RUST_LOG=debug` to trace admissions and completions on stderr.

use anyhow::{bail, Context};
use tracing_subscriber::EnvFilter;

use u_procsched::config::SchedulerConfig;
use u_procsched::io::{JsonReporter, ProcessSource, ScheduleReporter, TableReporter, TextSource};
use u_procsched::scheduler::Algorithm;

fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let mut json = false;
    let mut config_path = None;
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            json = true;
        } else if arg.starts_with('-') {
            bail!("unknown option '{arg}'");
        } else if config_path.is_none() {
            config_path = Some(arg);
        } else {
            bail!("unexpected argument '{arg}'");
        }
    }

    let config = match &config_path {
        Some(path) => SchedulerConfig::load(path)
            .with_context(|| format!("loading configuration from {path}"))?,
        None => SchedulerConfig::default(),
    };

    let processes = TextSource::new(std::io::stdin().lock())
        .load()
        .context("reading processes from stdin")?;

    let stdout = std::io::stdout().lock();
    let mut reporter: Box<dyn ScheduleReporter> = if json {
        Box::new(JsonReporter::new(stdout))
    } else {
        Box::new(TableReporter::new(stdout))
    };

    for algorithm in Algorithm::ALL {
        let result = algorithm.scheduler(config).schedule(&processes);
        reporter
            .report(&algorithm.to_string(), &result)
            .with_context(|| format!("writing {algorithm} report"))?;
    }

    Ok(())
}
