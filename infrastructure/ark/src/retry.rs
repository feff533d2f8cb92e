use std::time::Duration;

/// Bounded exponential backoff for outbound model calls.
///
/// The n-th retry (0-based) waits `base_delay * 2^n`, so the defaults give 1s, 2s, 4s.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
    pub retryable_statuses: Vec<u16>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_secs(1),
            retryable_statuses: vec![429, 500, 502, 503, 504],
        }
    }
}

impl RetryPolicy {
    /// Total number of calls allowed, first attempt included.
    pub fn max_attempts(&self) -> u32 {
        self.max_retries + 1
    }

    pub fn should_retry_status(&self, status: u16) -> bool {
        self.retryable_statuses.contains(&status)
    }

    /// Delay before the retry numbered `retry` (0 for the first retry).
    pub fn delay_for(&self, retry: u32) -> Duration {
        self.base_delay.saturating_mul(2u32.saturating_pow(retry))
    }
}
