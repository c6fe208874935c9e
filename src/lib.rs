//! A first-in-first-out queue built from two stacks, plus the
//! line-oriented command loop that drives it.

pub mod core;

pub use crate::core::error::{Error, QueueError, Result};
pub use crate::core::queue::{SafeQueue, TwoStackQueue};
