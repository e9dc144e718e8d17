//! Process sources.
//!
//! The text format is whitespace separated integers: a count `n`, then `n`
//! arrival times, then `n` burst times. Anything after the last burst time
//! is ignored.
//!
//! ```text
//! 3
//! 0 1 2
//! 5 3 8
//! ```

use std::io::Read;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::error::Result;
use crate::models::ProcessSet;

/// Anything that can supply a process set.
pub trait ProcessSource {
    /// Reads and validates the processes.
    fn load(&mut self) -> Result<ProcessSet>;
}

/// Failure to turn text into arrival/burst lists.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input ended before all expected values were read.
    #[error("unexpected end of input: expected {expected} (value {position})")]
    UnexpectedEnd {
        /// What was being read.
        expected: &'static str,
        /// 1-based index of the missing token.
        position: usize,
    },
    /// A token is not an integer.
    #[error("invalid {expected} '{token}' (value {position})")]
    InvalidNumber {
        /// What was being read.
        expected: &'static str,
        /// Offending token.
        token: String,
        /// 1-based index of the token.
        position: usize,
    },
}

struct Tokens<'a> {
    iter: std::str::SplitWhitespace<'a>,
    position: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            iter: text.split_whitespace(),
            position: 0,
        }
    }

    fn next_value<T: FromStr>(
        &mut self,
        expected: &'static str,
    ) -> std::result::Result<T, ParseError> {
        self.position += 1;
        let position = self.position;
        let token = self
            .iter
            .next()
            .ok_or(ParseError::UnexpectedEnd { expected, position })?;
        token.parse().map_err(|_| ParseError::InvalidNumber {
            expected,
            token: token.to_string(),
            position,
        })
    }

    fn next_list(
        &mut self,
        expected: &'static str,
        count: usize,
    ) -> std::result::Result<Vec<i64>, ParseError> {
        (0..count).map(|_| self.next_value(expected)).collect()
    }
}

/// Parses the count/arrivals/bursts text format into a process set.
pub fn parse_process_text(text: &str) -> Result<ProcessSet> {
    let mut tokens = Tokens::new(text);
    let count: usize = tokens.next_value("process count")?;
    let arrivals = tokens.next_list("arrival time", count)?;
    let bursts = tokens.next_list("burst time", count)?;
    debug!(count, "parsed process text");
    ProcessSet::from_lists(&arrivals, &bursts)
}

/// Reads the text format from any reader (e.g., stdin).
#[derive(Debug)]
pub struct TextSource<R> {
    reader: R,
}

impl<R: Read> TextSource<R> {
    /// Wraps a reader.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: Read> ProcessSource for TextSource<R> {
    fn load(&mut self) -> Result<ProcessSet> {
        let mut text = String::new();
        self.reader.read_to_string(&mut text)?;
        parse_process_text(&text)
    }
}
