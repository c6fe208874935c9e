use std::str::SplitWhitespace;

use serde::{Deserialize, Serialize};

use crate::core::error::{Error, Result};

/// Operation kind, as recorded in the log
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Op {
    Enqueue,
    Dequeue,
    Peek,
}

/// One operation of the text protocol
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// `1 v`
    Enqueue(i64),
    /// `2`, result discarded
    Dequeue,
    /// `3`, result printed
    Peek,
}

impl Command {
    pub fn op(&self) -> Op {
        match self {
            Command::Enqueue(_) => Op::Enqueue,
            Command::Dequeue => Op::Dequeue,
            Command::Peek => Op::Peek,
        }
    }
}

/// Whitespace separated token reader over the whole input.
/// Line breaks carry no meaning.
pub struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: input.split_whitespace(),
        }
    }

    fn next_int<N: std::str::FromStr>(&mut self) -> Result<N> {
        let token = self.inner.next().ok_or(Error::UnexpectedEof)?;
        token.parse().map_err(|_| Error::Parse {
            token: token.to_string(),
        })
    }

    /// Read the leading operation count
    pub fn count(&mut self) -> Result<usize> {
        self.next_int()
    }

    /// Read one operation.
    /// `Ok(None)` means the code matched no operation and was skipped.
    pub fn command(&mut self) -> Result<Option<Command>> {
        let code: i64 = self.next_int()?;
        let command = match code {
            1 => Command::Enqueue(self.next_int()?),
            2 => Command::Dequeue,
            3 => Command::Peek,
            other => {
                log::warn!("skipping unknown operation code {other}");
                return Ok(None);
            }
        };
        Ok(Some(command))
    }
}
