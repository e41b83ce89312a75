use thiserror::Error;

/// Failures surfaced by the community API client.
///
/// Status codes are not inspected, so a non-2xx response only becomes an
/// error when its body cannot be decoded as the expected resource list.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response from {endpoint}: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
