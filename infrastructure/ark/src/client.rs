use std::sync::Arc;
use std::time::Duration;

use business::domain::analysis::errors::AnalysisError;
use serde_json::Value;
use tracing::warn;

use crate::retry::RetryPolicy;
use crate::transport::{HttpTransport, TransportError};

pub const DEFAULT_ENDPOINT: &str = "https://ark.cn-beijing.volces.com/api/v3/chat/completions";
pub const DEFAULT_MODEL: &str = "doubao-seed-1-8-251228";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
}

impl ClientError {
    /// Maps into the domain taxonomy; `read_timeout` is echoed in timeout messages.
    pub fn into_analysis_error(self, read_timeout: Duration) -> AnalysisError {
        match self {
            ClientError::Transport(TransportError::Timeout(detail)) => AnalysisError::Timeout {
                read_timeout_secs: read_timeout.as_secs(),
                detail,
            },
            ClientError::Transport(TransportError::Connection(detail)) => {
                AnalysisError::Connection(detail)
            }
            ClientError::Transport(TransportError::Request(detail)) => {
                AnalysisError::Request(detail)
            }
            ClientError::Http { status, body } => AnalysisError::Http { status, body },
        }
    }
}

/// Shared Ark chat-completions client with bounded retries.
pub struct ArkClient {
    transport: Arc<dyn HttpTransport>,
    retry_policy: RetryPolicy,
    pub endpoint: String,
    pub model: String,
}

impl ArkClient {
    pub fn new(transport: Arc<dyn HttpTransport>, endpoint: String, model: String) -> Self {
        Self {
            transport,
            retry_policy: RetryPolicy::default(),
            endpoint,
            model,
        }
    }

    pub fn with_retry_policy(mut self, retry_policy: RetryPolicy) -> Self {
        self.retry_policy = retry_policy;
        self
    }

    /// Posts `payload` and returns the parsed JSON body of the first 2xx answer.
    ///
    /// Retryable statuses and connection failures are retried with backoff until the
    /// policy is exhausted. Read timeouts and other request failures surface at once.
    /// A 2xx body that is not JSON comes back as a JSON string holding the raw text.
    pub async fn post_chat(
        &self,
        api_key: &str,
        payload: &Value,
        read_timeout: Duration,
    ) -> Result<Value, ClientError> {
        let mut retry = 0;

        loop {
            let outcome = self
                .transport
                .post_json(&self.endpoint, api_key, payload, read_timeout)
                .await;
            let retries_left = retry < self.retry_policy.max_retries;

            let reason = match outcome {
                Ok(response) if response.is_success() => {
                    let body = response.body;
                    return Ok(serde_json::from_str(&body).unwrap_or(Value::String(body)));
                }
                Ok(response)
                    if retries_left && self.retry_policy.should_retry_status(response.status) =>
                {
                    format!("HTTP {}", response.status)
                }
                Ok(response) => {
                    return Err(ClientError::Http {
                        status: response.status,
                        body: response.body,
                    });
                }
                Err(TransportError::Connection(detail)) if retries_left => {
                    format!("connection error: {}", detail)
                }
                Err(err) => return Err(err.into()),
            };

            let delay = self.retry_policy.delay_for(retry);
            retry += 1;
            warn!(
                attempt = retry,
                max_attempts = self.retry_policy.max_attempts(),
                delay_ms = delay.as_millis() as u64,
                "Ark call failed ({}), retrying",
                reason
            );
            tokio::time::sleep(delay).await;
        }
    }
}
