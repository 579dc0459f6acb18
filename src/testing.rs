//! Test-support helpers for asynchronous code.

pub mod wait;

pub use wait::{
    wait_for_condition, TimeoutError, WaitOptions, DEFAULT_DESCRIPTION, DEFAULT_INTERVAL,
    DEFAULT_TIMEOUT,
};
