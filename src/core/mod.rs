pub mod command;
pub mod config;
pub mod error;
pub mod log;
pub mod queue;
pub mod session;
pub mod stack;
