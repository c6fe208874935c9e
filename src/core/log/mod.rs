use std::fmt::{Display, Formatter};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::command::Op;
use crate::core::error::Result;

/// Log entry recording one applied operation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub seq: u64,          // 1-based position in the session
    pub op: Op,
    pub item: Option<i64>, // enqueued, dequeued or peeked item
    pub moved: u64,        // items moved between stacks by this op
    pub len: usize,        // queue length afterwards
}

impl Display for LogEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogEntry {{ seq: {}, op: {:?}, item: {:?}, moved: {}, len: {} }}",
            self.seq, self.op, self.item, self.moved, self.len,
        )
    }
}

/// Logger storing all entries of a session
#[derive(Clone, Debug, Default)]
pub struct Logger {
    pub(crate) entries: Vec<LogEntry>,
}

impl Logger {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Log an operation
    pub fn log(&mut self, op: Op, item: Option<i64>, moved: u64, len: usize) {
        // --- Negative-space assertion: enqueue only touches `incoming` ---
        if op == Op::Enqueue {
            assert_eq!(moved, 0, "Enqueue never moves items between stacks");
        }

        let before = self.entries.len();
        self.entries.push(LogEntry {
            seq: before as u64 + 1,
            op,
            item,
            moved,
            len,
        });
        log::debug!("{}", self.entries[before]);

        // --- Negative-space assertion: log length increased exactly by 1 ---
        assert_eq!(
            self.entries.len(),
            before + 1,
            "Logger must increase by exactly one entry"
        );
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Sum of `moved` over all entries
    pub fn total_moves(&self) -> u64 {
        self.entries.iter().map(|e| e.moved).sum()
    }
}

/// Append entries to `path`, one JSON object per line
pub fn append_logs(log: &[LogEntry], path: impl AsRef<Path>) -> Result<()> {
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path.as_ref())?;

    for entry in log {
        let json = serde_json::to_string(entry)?;
        writeln!(file, "{}", json)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_numbers_start_at_one() {
        let mut logger = Logger::new();
        logger.log(Op::Enqueue, Some(5), 0, 1);
        logger.log(Op::Dequeue, Some(5), 1, 0);
        let seqs: Vec<_> = logger.entries().iter().map(|e| e.seq).collect();
        assert_eq!(seqs, vec![1, 2]);
        assert_eq!(logger.total_moves(), 1);
    }

    #[test]
    fn entry_serializes_with_lowercase_op() {
        let entry = LogEntry {
            seq: 1,
            op: Op::Peek,
            item: Some(3),
            moved: 2,
            len: 2,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"seq":1,"op":"peek","item":3,"moved":2,"len":2}"#);
    }
}
