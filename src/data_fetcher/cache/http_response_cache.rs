use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::LazyLock;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use super::types::CachedHttpResponse;
use crate::constants::{HTTP_RESPONSE_CACHE_CAPACITY, cache_ttl};

// LRU cache for HTTP response bodies keyed by URL
pub static HTTP_RESPONSE_CACHE: LazyLock<RwLock<LruCache<String, CachedHttpResponse>>> =
    LazyLock::new(|| {
        let capacity = NonZeroUsize::new(HTTP_RESPONSE_CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN);
        RwLock::new(LruCache::new(capacity))
    });

/// Picks the cache lifetime for a hub endpoint URL.
pub fn ttl_for_url(url: &str) -> u64 {
    if url.contains("/playoff-entries") {
        cache_ttl::PLAYOFF_ENTRIES_SECONDS
    } else if url.contains("/teams") {
        cache_ttl::TEAMS_SECONDS
    } else if url.contains("/widget/") {
        cache_ttl::WIDGETS_SECONDS
    } else {
        cache_ttl::LEAGUES_SECONDS
    }
}

/// Caches HTTP response data with TTL
#[instrument(skip(url, data), fields(url = %url))]
pub async fn cache_http_response(url: String, data: String, ttl_seconds: u64) {
    debug!(
        "Caching HTTP response: url={}, data_size={}, ttl={}s",
        url,
        data.len(),
        ttl_seconds
    );

    let cached_data = CachedHttpResponse::new(data, ttl_seconds);
    HTTP_RESPONSE_CACHE.write().await.put(url, cached_data);
}

/// Retrieves cached HTTP response if it's not expired
#[instrument(skip(url), fields(url = %url))]
pub async fn get_cached_http_response(url: &str) -> Option<String> {
    let mut cache = HTTP_RESPONSE_CACHE.write().await;

    match cache.get(url) {
        Some(entry) if !entry.is_expired() => {
            debug!(
                "Cache hit for HTTP response: url={}, age={:?}, expires_in={:?}",
                url,
                entry.cached_at.elapsed(),
                entry.time_until_expiry()
            );
            Some(entry.data.clone())
        }
        Some(entry) => {
            warn!(
                "Removing expired HTTP response cache entry: url={}, age={:?}, ttl={:?}",
                url,
                entry.cached_at.elapsed(),
                Duration::from_secs(entry.ttl_seconds)
            );
            cache.pop(url);
            None
        }
        None => {
            debug!("Cache miss for HTTP response: url={}", url);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ttl_for_url() {
        assert_eq!(
            ttl_for_url("https://hub.example.com/api/playoff-entries/"),
            cache_ttl::PLAYOFF_ENTRIES_SECONDS
        );
        assert_eq!(
            ttl_for_url("https://hub.example.com/api/teams/?league=2"),
            cache_ttl::TEAMS_SECONDS
        );
        assert_eq!(
            ttl_for_url("https://hub.example.com/api/widget/power-rankings/"),
            cache_ttl::WIDGETS_SECONDS
        );
        assert_eq!(
            ttl_for_url("https://hub.example.com/api/leagues/"),
            cache_ttl::LEAGUES_SECONDS
        );
    }

    #[tokio::test]
    async fn test_cache_roundtrip_and_expiry() {
        let url = "https://cache-test.invalid/api/leagues/".to_string();
        cache_http_response(url.clone(), "[1]".to_string(), 60).await;
        assert_eq!(get_cached_http_response(&url).await.as_deref(), Some("[1]"));

        let expired = "https://cache-test.invalid/api/teams/?league=1".to_string();
        cache_http_response(expired.clone(), "[2]".to_string(), 0).await;
        tokio::time::sleep(Duration::from_millis(5)).await;
        assert_eq!(get_cached_http_response(&expired).await, None);
    }
}
