//! Bounded retry with linear backoff.

use log::{debug, warn};
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

/// Delay before the first retry; later retries wait a multiple of it.
pub const RETRY_DELAY_MS: u64 = 1000;

/// How many times a failed attempt may be reissued, and how long to wait in between.
///
/// The policy holds no per-request state: every call to [`RetryPolicy::run`]
/// starts counting from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_retries: u32,
    base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::disabled()
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            base_delay: Duration::from_millis(RETRY_DELAY_MS),
        }
    }

    /// Every request is attempted exactly once.
    pub fn disabled() -> Self {
        Self::new(0)
    }

    pub fn with_base_delay(mut self, base_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    pub fn is_enabled(&self) -> bool {
        self.max_retries > 0
    }

    /// Wait before reissuing after failed attempt `attempt` (zero-based).
    pub fn backoff(&self, attempt: u32) -> Duration {
        self.base_delay * (attempt + 1)
    }

    /// Runs `operation` until it succeeds, fails with an error `should_retry`
    /// rejects, or the retry budget is spent. The last error is returned as-is.
    pub async fn run<F, Fut, T, E, P>(
        &self,
        operation_name: &str,
        should_retry: P,
        operation: F,
    ) -> Result<T, E>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
        P: Fn(&E) -> bool,
    {
        let mut attempt = 0;

        loop {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(e) => {
                    if attempt >= self.max_retries {
                        if self.is_enabled() {
                            debug!(
                                "{}: giving up after {} attempts: {}",
                                operation_name,
                                attempt + 1,
                                e
                            );
                        }
                        return Err(e);
                    }

                    if !should_retry(&e) {
                        debug!("{}: non-retryable error: {}", operation_name, e);
                        return Err(e);
                    }

                    let delay = self.backoff(attempt);
                    warn!(
                        "{}: attempt {}/{} failed ({}), retrying in {}ms...",
                        operation_name,
                        attempt + 1,
                        self.max_retries + 1,
                        e,
                        delay.as_millis()
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};
    use tokio::time::Instant;

    #[derive(Debug, PartialEq)]
    enum TestError {
        Transient,
        Fatal,
    }

    impl Display for TestError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{:?}", self)
        }
    }

    fn is_transient(e: &TestError) -> bool {
        *e == TestError::Transient
    }

    #[test]
    fn test_linear_backoff() {
        let policy = RetryPolicy::new(3);
        assert_eq!(policy.backoff(0), Duration::from_millis(1000));
        assert_eq!(policy.backoff(1), Duration::from_millis(2000));
        assert_eq!(policy.backoff(2), Duration::from_millis(3000));

        let policy = RetryPolicy::new(3).with_base_delay(Duration::from_millis(10));
        assert_eq!(policy.backoff(4), Duration::from_millis(50));
    }

    #[test]
    fn test_default_is_disabled() {
        let policy = RetryPolicy::default();
        assert!(!policy.is_enabled());
        assert_eq!(policy.max_retries(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_succeeds_after_transient_failures() {
        let attempts = Arc::new(AtomicU32::new(0));
        let attempts_clone = Arc::clone(&attempts);
        let start = Instant::now();

        let result = RetryPolicy::new(3)
            .run("test", is_transient, || {
                let attempts = Arc::clone(&attempts_clone);
                async move {
                    if attempts.fetch_add(1, Ordering::SeqCst) < 2 {
                        Err(TestError::Transient)
                    } else {
                        Ok("done")
                    }
                }
            })
            .await;

        assert_eq!(result, Ok("done"));
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
        // 1s before the second attempt, 2s before the third.
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(3000));
        assert!(elapsed < Duration::from_millis(3100));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_stops_on_non_retryable() {
        let attempts = Arc::new(AtomicU32::new(0));
        let attempts_clone = Arc::clone(&attempts);
        let start = Instant::now();

        let result: Result<(), _> = RetryPolicy::new(3)
            .run("test", is_transient, || {
                let attempts = Arc::clone(&attempts_clone);
                async move {
                    attempts.fetch_add(1, Ordering::SeqCst);
                    Err(TestError::Fatal)
                }
            })
            .await;

        assert_eq!(result, Err(TestError::Fatal));
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_exhausts_budget() {
        let attempts = Arc::new(AtomicU32::new(0));
        let attempts_clone = Arc::clone(&attempts);
        let start = Instant::now();

        let result: Result<(), _> = RetryPolicy::new(2)
            .run("test", is_transient, || {
                let attempts = Arc::clone(&attempts_clone);
                async move {
                    attempts.fetch_add(1, Ordering::SeqCst);
                    Err(TestError::Transient)
                }
            })
            .await;

        assert_eq!(result, Err(TestError::Transient));
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
        assert!(start.elapsed() >= Duration::from_millis(3000));
    }

    #[tokio::test]
    async fn test_disabled_policy_attempts_once() {
        let attempts = Arc::new(AtomicU32::new(0));
        let attempts_clone = Arc::clone(&attempts);

        let result: Result<(), _> = RetryPolicy::disabled()
            .run("test", |_: &TestError| true, || {
                let attempts = Arc::clone(&attempts_clone);
                async move {
                    attempts.fetch_add(1, Ordering::SeqCst);
                    Err(TestError::Transient)
                }
            })
            .await;

        assert!(result.is_err());
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }
}
