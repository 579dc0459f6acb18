//! Condition polling for async tests.
//!
//! [`wait_for_condition`] replaces fixed sleeps when a test has to observe a
//! side effect of concurrent work (a subscriber being dropped, a queue
//! draining). It returns as soon as the condition holds and fails once the
//! timeout has elapsed.
//!
//! When the test controls both sides of a handoff, signal explicitly with
//! [`tokio::sync::Notify`] or a channel instead.
//!
//! # Example
//!
//! ```rust
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use svc_template::testing::{wait_for_condition, WaitOptions};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let drained = Arc::new(AtomicBool::new(false));
//! let flag = drained.clone();
//! tokio::spawn(async move {
//!     tokio::time::sleep(Duration::from_millis(10)).await;
//!     flag.store(true, Ordering::SeqCst);
//! });
//!
//! wait_for_condition(
//!     || drained.load(Ordering::SeqCst),
//!     &WaitOptions::default().with_description("queue drain"),
//! )
//! .await
//! .unwrap();
//! # }
//! ```

use std::time::Duration;

use thiserror::Error;
use tokio::time::Instant;
use tracing::{debug, trace};

/// Default upper bound on the wait.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// Default pause between evaluations.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(5);

/// Default label used in timeout messages.
pub const DEFAULT_DESCRIPTION: &str = "condition";

/// Parameters of a single wait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitOptions {
    /// Maximum time to keep polling.
    pub timeout: Duration,
    /// Pause between evaluations.
    pub interval: Duration,
    /// Label reported when the wait times out.
    pub description: String,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            interval: DEFAULT_INTERVAL,
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

impl WaitOptions {
    /// Sets the timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the polling interval.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Sets the description used in the timeout message.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// The condition did not hold before the timeout elapsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Timed out waiting for {description}")]
pub struct TimeoutError {
    /// Description supplied by the caller.
    pub description: String,
    /// Time spent waiting when the wait gave up.
    pub elapsed: Duration,
    /// Number of times the condition was evaluated.
    pub attempts: u32,
}

/// Polls `condition` until it returns true or `options.timeout` elapses.
///
/// The condition runs synchronously on the calling task and must not block.
/// Between evaluations the task sleeps for `options.interval`, which is the
/// only point where it yields and the only point where it can be cancelled.
/// Dropping the future there abandons the wait without producing an error.
///
/// The elapsed-time check always runs before a sleep, so a zero timeout
/// evaluates the condition exactly once.
pub async fn wait_for_condition<F>(
    mut condition: F,
    options: &WaitOptions,
) -> Result<(), TimeoutError>
where
    F: FnMut() -> bool,
{
    let start = Instant::now();
    let mut attempts: u32 = 0;

    loop {
        attempts = attempts.saturating_add(1);
        if condition() {
            debug!(
                description = %options.description,
                attempts,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Condition met"
            );
            return Ok(());
        }

        let elapsed = start.elapsed();
        if elapsed >= options.timeout {
            debug!(
                description = %options.description,
                attempts,
                elapsed_ms = elapsed.as_millis() as u64,
                "Timed out waiting for condition"
            );
            return Err(TimeoutError {
                description: options.description.clone(),
                elapsed,
                attempts,
            });
        }

        trace!(description = %options.description, attempts, "Condition not met yet");

        // A zero-length sleep can complete without yielding.
        if options.interval.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(options.interval).await;
        }
    }
}
