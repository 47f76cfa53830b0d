//! Cache data structures with TTL support

use std::time::{Duration, Instant};

/// Cached HTTP response body with TTL support
#[derive(Debug, Clone)]
pub struct CachedHttpResponse {
    pub data: String,
    pub cached_at: Instant,
    pub ttl_seconds: u64,
}

impl CachedHttpResponse {
    pub fn new(data: String, ttl_seconds: u64) -> Self {
        Self {
            data,
            cached_at: Instant::now(),
            ttl_seconds,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.cached_at.elapsed() > Duration::from_secs(self.ttl_seconds)
    }

    /// Remaining lifetime, zero once expired
    pub fn time_until_expiry(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds).saturating_sub(self.cached_at.elapsed())
    }
}
