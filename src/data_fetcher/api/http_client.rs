//! HTTP client creation and configuration utilities

use crate::config::Session;
use crate::error::AppError;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use std::time::Duration;

/// Creates a configured HTTP client with connection pooling and timeout handling.
///
/// When the session carries an access token, every request gets an
/// `Authorization: Bearer <token>` header. The header is marked sensitive so
/// it is not printed by reqwest's debug output.
///
/// # Errors
/// * `AppError::Config` - the token contains characters not allowed in a header
/// * `AppError::ApiFetch` - the underlying client could not be built
pub fn create_http_client(timeout_seconds: u64, session: &Session) -> Result<Client, AppError> {
    let mut headers = HeaderMap::new();
    if let Some(value) = session.authorization_header() {
        let mut value = HeaderValue::from_str(&value)
            .map_err(|e| AppError::config_error(format!("Invalid access token: {e}")))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .default_headers(headers)
        .build()?;
    Ok(client)
}

/// Creates an anonymous HTTP client with the default timeout for tests
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client(
        crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS,
        &Session::anonymous(),
    )
    .expect("Failed to create test HTTP client")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_client_with_and_without_token() {
        assert!(create_http_client(5, &Session::anonymous()).is_ok());
        assert!(create_http_client(5, &Session::new(Some("abc".to_string()))).is_ok());
    }

    #[test]
    fn test_token_with_newline_is_rejected() {
        let session = Session::new(Some("bad\ntoken".to_string()));
        let result = create_http_client(5, &session);
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
