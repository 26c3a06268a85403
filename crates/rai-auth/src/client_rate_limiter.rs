use crate::{AuthError, RateLimitConfig, Result as AuthErrorResult};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use error_location::ErrorLocation;

/// Fixed-window request counter keyed by client network identity
///
/// Advisory abuse mitigation, not a hard quota: state lives in process
/// memory and does not survive restarts.
pub struct ClientRateLimiter {
    entries: Mutex<HashMap<String, WindowEntry>>,
    config: RateLimitConfig,
}

#[derive(Debug, Clone, Copy)]
struct WindowEntry {
    count: u32,
    window_reset_at: Instant,
}

impl ClientRateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            config,
        }
    }

    /// Admit or reject a request from the given identity
    #[track_caller]
    pub fn admit(&self, identity: &str) -> AuthErrorResult<()> {
        self.admit_at(identity, Instant::now())
    }

    /// Clock-injectable variant of [`admit`](Self::admit)
    ///
    /// The count never passes `max_requests`: the request that would
    /// exceed the ceiling is rejected before any increment.
    #[track_caller]
    pub fn admit_at(&self, identity: &str, now: Instant) -> AuthErrorResult<()> {
        let window = Duration::from_secs(self.config.window_secs);
        // Counter updates cannot be torn, so a poisoned lock is still
        // consistent and safe to reclaim.
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);

        let Some(entry) = entries.get_mut(identity) else {
            entries.insert(
                identity.to_string(),
                WindowEntry {
                    count: 1,
                    window_reset_at: now + window,
                },
            );
            return Ok(());
        };

        if now > entry.window_reset_at {
            entry.count = 1;
            entry.window_reset_at = now + window;
            return Ok(());
        }

        if entry.count >= self.config.max_requests {
            return Err(AuthError::RateLimitExceeded {
                limit: self.config.max_requests,
                window_secs: self.config.window_secs,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        entry.count += 1;
        Ok(())
    }
}
