/**
 * Active User Counter
 *
 * This module tracks how many browser sessions are currently editing the
 * diagram. The count is bounded below by zero and above by
 * `MAX_ACTIVE_USERS`.
 */

use crate::shared::config::DecrementPolicy;
use crate::shared::error::CounterError;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Upper bound enforced on increment
pub const MAX_ACTIVE_USERS: u32 = 1000;

/// Outcome of a best-effort leave signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanupOutcome {
    /// Count after the cleanup
    pub count: u32,
    /// Whether a user was actually removed
    pub cleaned: bool,
}

/// Shared active-user counter
///
/// Cloning yields another handle to the same count. Every read-modify-write
/// runs under a single mutex so concurrent updates are never lost.
#[derive(Debug, Clone, Default)]
pub struct UserCounter {
    count: Arc<Mutex<u32>>,
    policy: DecrementPolicy,
}

impl UserCounter {
    /// Create a counter at zero with the lenient decrement policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a counter at zero with the given decrement policy
    pub fn with_policy(policy: DecrementPolicy) -> Self {
        Self {
            count: Arc::new(Mutex::new(0)),
            policy,
        }
    }

    pub fn policy(&self) -> DecrementPolicy {
        self.policy
    }

    /// Current count
    pub async fn get(&self) -> u32 {
        *self.count.lock().await
    }

    /// Add one user
    ///
    /// # Errors
    ///
    /// `CounterError::LimitReached` when the count is already at
    /// `MAX_ACTIVE_USERS`; the count is not changed.
    pub async fn increment(&self) -> Result<u32, CounterError> {
        let mut count = self.count.lock().await;
        if *count >= MAX_ACTIVE_USERS {
            tracing::warn!("[Users] Limit of {} active users reached", MAX_ACTIVE_USERS);
            return Err(CounterError::LimitReached {
                limit: MAX_ACTIVE_USERS,
            });
        }
        *count += 1;
        tracing::info!("[Users] User added, {} active", *count);
        Ok(*count)
    }

    /// Remove one user
    ///
    /// At zero, the lenient policy returns 0 without error.
    ///
    /// # Errors
    ///
    /// `CounterError::Underflow` at zero under the strict policy.
    pub async fn decrement(&self) -> Result<u32, CounterError> {
        let mut count = self.count.lock().await;
        if *count == 0 {
            return match self.policy {
                DecrementPolicy::Lenient => {
                    tracing::debug!("[Users] Decrement at zero ignored");
                    Ok(0)
                }
                DecrementPolicy::Strict => {
                    tracing::warn!("[Users] Decrement at zero rejected");
                    Err(CounterError::Underflow)
                }
            };
        }
        *count -= 1;
        tracing::info!("[Users] User removed, {} active", *count);
        Ok(*count)
    }

    /// Remove one user if there is one; never fails
    ///
    /// Used for leave signals sent while a page unloads, which may arrive
    /// after the count already reached zero. Ignores the decrement policy.
    pub async fn cleanup(&self) -> CleanupOutcome {
        let mut count = self.count.lock().await;
        if *count == 0 {
            tracing::debug!("[Users] Cleanup at zero, nothing to remove");
            return CleanupOutcome {
                count: 0,
                cleaned: false,
            };
        }
        *count -= 1;
        tracing::info!("[Users] Cleanup removed a user, {} active", *count);
        CleanupOutcome {
            count: *count,
            cleaned: true,
        }
    }
}
