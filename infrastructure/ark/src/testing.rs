use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use mockall::{Sequence, mock};
use serde_json::Value;
use tokio::time::Instant;

use crate::transport::{HttpTransport, TransportError, TransportResponse};

pub type Reply = Result<TransportResponse, TransportError>;

mock! {
    pub Transport {}

    #[async_trait]
    impl HttpTransport for Transport {
        async fn post_json(
            &self,
            url: &str,
            api_key: &str,
            payload: &Value,
            read_timeout: Duration,
        ) -> Result<TransportResponse, TransportError>;
    }
}

pub fn status(status: u16, body: &str) -> Reply {
    Ok(TransportResponse {
        status,
        body: body.to_string(),
    })
}

pub fn json(body: Value) -> Reply {
    status(200, &body.to_string())
}

/// Expects exactly one call per reply, in order, and logs the instant each call arrives.
pub fn replying_in_order(replies: Vec<Reply>) -> (MockTransport, Arc<Mutex<Vec<Instant>>>) {
    let mut transport = MockTransport::new();
    let mut seq = Sequence::new();
    let calls = Arc::new(Mutex::new(Vec::new()));

    for reply in replies {
        let calls = calls.clone();
        transport
            .expect_post_json()
            .times(1)
            .in_sequence(&mut seq)
            .return_once(move |_, _, _, _| {
                calls.lock().unwrap().push(Instant::now());
                reply
            });
    }

    (transport, calls)
}
