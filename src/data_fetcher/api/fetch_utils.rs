//! Generic HTTP fetching with caching, transport retries and error mapping

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use crate::constants::retry;
use crate::data_fetcher::cache::{cache_http_response, get_cached_http_response, ttl_for_url};
use crate::error::AppError;

/// Fetches and deserializes a JSON document.
///
/// - Serves a fresh cached body when available
/// - Retries timeouts, connection failures, 429 and 5xx with exponential
///   backoff, honoring `Retry-After`
/// - Maps HTTP status codes to typed [`AppError`] variants
/// - Caches only bodies that parsed successfully
#[instrument(skip(client))]
pub async fn fetch<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    if let Some(cached_response) = get_cached_http_response(url).await {
        match serde_json::from_str::<T>(&cached_response) {
            Ok(parsed) => return Ok(parsed),
            Err(e) => warn!("Failed to parse cached response for URL {}: {}", url, e),
        }
    }

    let mut attempt = 0u32;
    let mut backoff = Duration::from_millis(retry::BASE_DELAY_MS);
    let response = loop {
        let (err, retry_after) = match client.get(url).send().await {
            Ok(resp) if resp.status().is_success() => break resp,
            Ok(resp) => {
                let retry_after = resp
                    .headers()
                    .get(reqwest::header::RETRY_AFTER)
                    .and_then(|h| h.to_str().ok())
                    .and_then(|s| s.parse::<u64>().ok())
                    .map(Duration::from_secs);
                (status_error(resp.status(), url), retry_after)
            }
            Err(e) => (transport_error(e, url), None),
        };

        if !err.is_retryable() || attempt >= retry::MAX_RETRIES {
            error!("Request failed for URL {}: {}", url, err);
            return Err(err);
        }

        let wait = retry_after.unwrap_or(backoff);
        warn!(
            "Transient failure for {}: {}. Retrying in {:?} (attempt {}/{})",
            url,
            err,
            wait,
            attempt + 1,
            retry::MAX_RETRIES
        );
        tokio::time::sleep(wait).await;
        attempt += 1;
        backoff = backoff.saturating_mul(2);
    };

    debug!("Response status: {}", response.status());

    let response_text = response.text().await.map_err(|e| {
        error!("Failed to read response text from URL {}: {}", url, e);
        AppError::ApiFetch(e)
    })?;

    debug!("Response length: {} bytes", response_text.len());

    match serde_json::from_str::<T>(&response_text) {
        Ok(parsed) => {
            cache_http_response(url.to_string(), response_text, ttl_for_url(url)).await;
            Ok(parsed)
        }
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);
            let trimmed = response_text.trim_start();
            if trimmed.is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
                Err(AppError::api_malformed_json("Response is not valid JSON", url))
            } else {
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}

fn status_error(status: StatusCode, url: &str) -> AppError {
    let status_code = status.as_u16();
    let reason = status.canonical_reason().unwrap_or("Unknown error");
    match status_code {
        404 => AppError::api_not_found(url),
        429 => AppError::api_rate_limit(reason, url),
        400..=499 => AppError::api_client_error(status_code, reason, url),
        502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
        _ => AppError::api_server_error(status_code, reason, url),
    }
}

fn transport_error(e: reqwest::Error, url: &str) -> AppError {
    if e.is_timeout() {
        AppError::network_timeout(url)
    } else if e.is_connect() {
        AppError::network_connection(url, e.to_string())
    } else {
        AppError::ApiFetch(e)
    }
}
