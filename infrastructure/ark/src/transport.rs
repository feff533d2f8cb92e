use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

/// Status line and raw body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failure before any HTTP status was received.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransportError {
    #[error("{0}")]
    Timeout(String),
    #[error("{0}")]
    Connection(String),
    #[error("{0}")]
    Request(String),
}

/// Port for sending one authenticated JSON POST.
///
/// Implementations must be shareable across concurrent requests without locking
/// around the network call.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn post_json(
        &self,
        url: &str,
        api_key: &str,
        payload: &Value,
        read_timeout: Duration,
    ) -> Result<TransportResponse, TransportError>;
}

/// `reqwest`-backed transport with a fixed connect timeout and a per-call read timeout.
///
/// The read timeout bounds each wait for data from the server, not the whole
/// exchange, so a slow but steady answer is not cut off. reqwest only offers that
/// at client level, so one client is kept per distinct read timeout.
pub struct ReqwestTransport {
    connect_timeout: Duration,
    clients: Mutex<HashMap<Duration, Client>>,
}

impl ReqwestTransport {
    pub fn new(connect_timeout: Duration) -> Self {
        Self {
            connect_timeout,
            clients: Mutex::new(HashMap::new()),
        }
    }

    fn client_for(&self, read_timeout: Duration) -> Client {
        let mut clients = self.clients.lock().unwrap_or_else(PoisonError::into_inner);
        clients
            .entry(read_timeout)
            .or_insert_with(|| {
                Client::builder()
                    .connect_timeout(self.connect_timeout)
                    .read_timeout(read_timeout)
                    .build()
                    .unwrap_or_default()
            })
            .clone()
    }

    fn classify(err: reqwest::Error) -> TransportError {
        // connect timeouts report both flags; they belong to the connection bucket
        if err.is_connect() {
            TransportError::Connection(err.to_string())
        } else if err.is_timeout() {
            TransportError::Timeout(err.to_string())
        } else {
            TransportError::Request(err.to_string())
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_json(
        &self,
        url: &str,
        api_key: &str,
        payload: &Value,
        read_timeout: Duration,
    ) -> Result<TransportResponse, TransportError> {
        let response = self
            .client_for(read_timeout)
            .post(url)
            .header("Content-Type", "application/json")
            .bearer_auth(api_key)
            .json(payload)
            .send()
            .await
            .map_err(Self::classify)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(Self::classify)?;

        Ok(TransportResponse { status, body })
    }
}
