use std::io::{Read, Write};

use crate::core::command::{Command, Tokens};
use crate::core::error::Result;
use crate::core::log::{LogEntry, Logger};
use crate::core::queue::TwoStackQueue;

/// Drives a queue from protocol commands and logs every applied operation
#[derive(Debug, Default)]
pub struct Session {
    queue: TwoStackQueue<i64>,
    logger: Logger,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one command. Returns the peeked item for `Peek`.
    pub fn apply(&mut self, command: Command) -> Result<Option<i64>> {
        let moves_before = self.queue.moves();
        let (item, output) = match command {
            Command::Enqueue(value) => {
                self.queue.enqueue(value);
                (Some(value), None)
            }
            // The protocol drops the dequeued item
            Command::Dequeue => (Some(self.queue.dequeue()?), None),
            Command::Peek => {
                let value = *self.queue.peek()?;
                (Some(value), Some(value))
            }
        };

        let moved = self.queue.moves() - moves_before;
        self.logger.log(command.op(), item, moved, self.queue.len());
        Ok(output)
    }

    /// Read the operation count and that many operations from `reader`,
    /// writing each peek result on its own line. Returns the number of
    /// operations read, skipped codes included.
    pub fn run<R: Read, W: Write>(&mut self, mut reader: R, mut writer: W) -> Result<usize> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;

        let mut tokens = Tokens::new(&input);
        let count = tokens.count()?;
        log::debug!("running {count} operations");

        for _ in 0..count {
            let Some(command) = tokens.command()? else {
                continue;
            };
            if let Some(value) = self.apply(command)? {
                writeln!(writer, "{value}")?;
            }
        }
        writer.flush()?;
        Ok(count)
    }

    pub fn queue(&self) -> &TwoStackQueue<i64> {
        &self.queue
    }

    /// Expose logs
    pub fn logs(&self) -> &[LogEntry] {
        self.logger.entries()
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }
}
