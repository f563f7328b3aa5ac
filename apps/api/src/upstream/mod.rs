/// Upstream client: the single point of entry for outbound HTTP calls.
///
/// Both the remote scope analyzer and the remote video-verification oracle go
/// through `UpstreamClient`, so retry and error mapping stay in one place.
use std::time::Duration;

use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

const MAX_RETRIES: u32 = 3;
const BACKOFF_BASE_MS: u64 = 500;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Upstream unavailable after {retries} retries")]
    Exhausted { retries: u32 },
}

/// Error payload shape used by the serverless handlers: `{"error": "..."}`.
#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    error: String,
}

/// Thin JSON-over-HTTP client with retry on 429 / 5xx and exponential backoff.
#[derive(Clone)]
pub struct UpstreamClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl UpstreamClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, UpstreamError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url: base_url.into(),
            api_key,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POSTs `body` as JSON to `path` (relative to the base URL) and decodes the JSON reply.
    /// An empty `path` posts to the base URL itself.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, UpstreamError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = join_url(&self.base_url, path);
        let mut last_error: Option<UpstreamError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                let delay = Duration::from_millis(BACKOFF_BASE_MS * (1 << (attempt - 1)));
                warn!(
                    "Upstream call to {} attempt {} failed, retrying after {}ms...",
                    url,
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let mut request = self.client.post(&url).json(body);
            if let Some(key) = &self.api_key {
                request = request
                    .header("apikey", key)
                    .header("authorization", format!("Bearer {key}"));
            }

            let response = match request.send().await {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(UpstreamError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Upstream {} returned {}: {}", url, status, body);
                last_error = Some(UpstreamError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            let text = response.text().await?;

            if !status.is_success() {
                return Err(UpstreamError::Api {
                    status: status.as_u16(),
                    message: extract_error_message(&text),
                });
            }

            debug!("Upstream call to {} succeeded ({} bytes)", url, text.len());
            return serde_json::from_str(&text).map_err(UpstreamError::Parse);
        }

        Err(last_error.unwrap_or(UpstreamError::Exhausted {
            retries: MAX_RETRIES,
        }))
    }
}

fn join_url(base: &str, path: &str) -> String {
    if path.is_empty() {
        return base.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Pulls the message out of an `{"error": "..."}` body, falling back to the raw text.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<UpstreamErrorBody>(body)
        .map(|e| e.error)
        .unwrap_or_else(|_| body.to_string())
}
