use std::path::PathBuf;

use crate::core::error::{Error, Result};

/// Environment variable naming the trace file when `--trace` is absent
pub const TRACE_ENV: &str = "TWO_STACK_TRACE";

/// Runtime configuration
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Append the operation log here as NDJSON after the run
    pub trace: Option<PathBuf>,
}

impl Config {
    /// Build from the process arguments and environment
    pub fn from_env() -> Result<Self> {
        Self::from_args(std::env::args().skip(1), std::env::var_os(TRACE_ENV).map(PathBuf::from))
    }

    /// `args` excludes the program name. `--trace` wins over `env_trace`.
    pub fn from_args<I, S>(args: I, env_trace: Option<PathBuf>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut trace = None;
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--trace" => {
                    let path = args
                        .next()
                        .ok_or_else(|| Error::Config("--trace needs a path".into()))?;
                    trace = Some(PathBuf::from(path));
                }
                other => return Err(Error::Config(format!("unknown argument `{other}`"))),
            }
        }

        Ok(Self {
            trace: trace.or(env_trace),
        })
    }
}
