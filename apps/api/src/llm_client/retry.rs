//! Generic call-with-retry combinator.
//!
//! Attempts run strictly one after another. The only suspension point between
//! attempts is the policy delay; nothing is cancelled or raced.

use std::future::Future;
use std::time::Duration;

use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn fixed(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }
}

/// What a single attempt decided.
#[derive(Debug)]
pub enum Attempt<T, E> {
    /// Finished successfully.
    Done(T),
    /// Failed; another attempt may succeed.
    Retry(E),
    /// Failed in a way no retry can fix.
    Abort(E),
}

#[derive(Debug, PartialEq, Eq)]
pub enum RetryError<E> {
    Aborted(E),
    /// The budget ran out; carries the last attempt's error.
    Exhausted(E),
    /// The policy allowed zero attempts.
    NoAttempts,
}

/// Runs `op` until it returns `Done` or `Abort`, or `policy.max_attempts` is reached.
/// `op` receives the zero-based attempt index.
pub async fn run<T, E, F, Fut>(policy: &RetryPolicy, mut op: F) -> Result<T, RetryError<E>>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Attempt<T, E>>,
{
    let mut last_error = None;

    for attempt in 0..policy.max_attempts {
        if attempt > 0 {
            warn!(
                "Attempt {} failed, retrying after {}ms...",
                attempt,
                policy.delay.as_millis()
            );
            tokio::time::sleep(policy.delay).await;
        }

        match op(attempt).await {
            Attempt::Done(value) => return Ok(value),
            Attempt::Abort(e) => return Err(RetryError::Aborted(e)),
            Attempt::Retry(e) => last_error = Some(e),
        }
    }

    Err(last_error.map_or(RetryError::NoAttempts, RetryError::Exhausted))
}
