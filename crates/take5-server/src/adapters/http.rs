//! Shared HTTP plumbing for provider adapters

use reqwest::{Client, StatusCode};
use std::time::Duration;

use take5::ProviderError;

/// Build the outbound client shared by every adapter.
///
/// One client per process; `reqwest::Client` is cheap to clone and safe to
/// use from concurrent requests.
pub fn build_client(timeout: Duration) -> Result<Client, ProviderError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|err| ProviderError::Request(err.to_string()))
}

pub fn map_transport_error(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout
    } else {
        ProviderError::Request(err.to_string())
    }
}

/// Map a non-success provider response to a ProviderError
pub fn map_http_error(status: StatusCode, body: &str) -> ProviderError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|err| err.get("message"))
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or_else(|| body.to_string());

    match status {
        StatusCode::TOO_MANY_REQUESTS => ProviderError::RateLimited,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ProviderError::Unauthorized(message),
        _ => ProviderError::Api {
            status: status.as_u16(),
            message,
        },
    }
}

/// Read the body of a failed response and map it
pub async fn error_from_response(response: reqwest::Response) -> ProviderError {
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Failed to read error body".to_string());
    map_http_error(status, &body)
}
