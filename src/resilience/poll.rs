use crate::{Error, Result};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Default number of status requests per job.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 15;
/// Default fixed delay between status requests.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(3);

/// How a failed poll attempt is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptClass {
    /// Logged, and the loop moves on to the next attempt.
    Transient,
    /// Aborts the loop and propagates the error.
    Fatal,
}

/// Result of a completed poll loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome<T> {
    Ready { value: T, attempts: u32 },
    Exhausted { attempts: u32, failures: u32 },
}

/// Fixed-interval, bounded poll policy.
///
/// - Attempts are strictly sequential; attempt N+1 starts only after attempt N
///   resolved and `interval` elapsed
/// - The delay also follows the last unsuccessful attempt
/// - Transient errors are swallowed, fatal errors abort the loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollPolicy {
    pub max_attempts: u32,
    pub interval: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            interval: DEFAULT_INTERVAL,
        }
    }
}

impl PollPolicy {
    pub fn new(max_attempts: u32, interval: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            interval,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Upper bound on time spent sleeping between attempts.
    pub fn worst_case(&self) -> Duration {
        self.interval.saturating_mul(self.max_attempts)
    }

    /// Classify an error raised by a single attempt.
    ///
    /// Anything that came back from the wire (or failed on the way) is transient.
    /// Local misconfiguration and internal faults will not improve by waiting.
    pub fn classify(&self, err: &Error) -> AttemptClass {
        match err {
            Error::Transport(_)
            | Error::Remote { .. }
            | Error::Serialization(_)
            | Error::Submission { .. } => AttemptClass::Transient,
            Error::Validation { .. } | Error::Configuration { .. } | Error::Runtime { .. } => {
                AttemptClass::Fatal
            }
        }
    }

    /// Drive `probe` until it yields a value or the attempt budget is spent.
    ///
    /// `probe` receives the 1-based attempt number and returns `Ok(None)` when
    /// the job is not ready yet.
    pub async fn run<T, F, Fut>(&self, mut probe: F) -> Result<PollOutcome<T>>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<Option<T>>>,
    {
        let mut failures = 0u32;
        for attempt in 1..=self.max_attempts {
            match probe(attempt).await {
                Ok(Some(value)) => return Ok(PollOutcome::Ready { value, attempts: attempt }),
                Ok(None) => debug!(attempt, "Attempt {}: document not ready yet", attempt),
                Err(e) => match self.classify(&e) {
                    AttemptClass::Transient => {
                        failures += 1;
                        warn!(attempt, error = %e, "Attempt {}: poll request failed", attempt);
                    }
                    AttemptClass::Fatal => return Err(e),
                },
            }
            tokio::time::sleep(self.interval).await;
        }
        Ok(PollOutcome::Exhausted {
            attempts: self.max_attempts,
            failures,
        })
    }
}
