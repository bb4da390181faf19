//! # Mock Framework
//!
//! Utilities for testing form controllers without a server.
//!
//! Use [`create_mock_transport`] to get a transport and a receiver of the
//! calls it makes. Then use [`expect_get`] or [`expect_post`] to inspect each
//! request and decide, from the test, when and how it is answered. Holding a
//! responder lets a test observe the controller while the request is in flight.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::{mpsc, oneshot};
use url::Url;

use crate::error::TransportError;
use crate::transport::{HttpTransport, Navigator};

pub type Responder = oneshot::Sender<Result<Value, TransportError>>;

#[derive(Debug)]
pub enum TransportCall {
    Get { url: Url, respond_to: Responder },
    Post { url: Url, body: Value, respond_to: Responder },
}

/// Transport whose every request is forwarded to the test.
#[derive(Clone)]
pub struct MockTransport {
    sender: mpsc::Sender<TransportCall>,
}

impl MockTransport {
    async fn forward(
        &self,
        call: TransportCall,
        response: oneshot::Receiver<Result<Value, TransportError>>,
    ) -> Result<Value, TransportError> {
        self.sender
            .send(call)
            .await
            .map_err(|_| TransportError::Network("Mock closed".to_string()))?;
        response
            .await
            .map_err(|_| TransportError::Network("Mock dropped".to_string()))?
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn get_json(&self, url: Url) -> Result<Value, TransportError> {
        let (respond_to, response) = oneshot::channel();
        self.forward(TransportCall::Get { url, respond_to }, response).await
    }

    async fn post_json(&self, url: Url, body: Value) -> Result<Value, TransportError> {
        let (respond_to, response) = oneshot::channel();
        self.forward(TransportCall::Post { url, body, respond_to }, response)
            .await
    }
}

pub fn create_mock_transport(buffer_size: usize) -> (MockTransport, mpsc::Receiver<TransportCall>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (MockTransport { sender }, receiver)
}

/// Helper to verify that the next call is a GET
pub async fn expect_get(receiver: &mut mpsc::Receiver<TransportCall>) -> Option<(Url, Responder)> {
    match receiver.recv().await {
        Some(TransportCall::Get { url, respond_to }) => Some((url, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next call is a POST
pub async fn expect_post(
    receiver: &mut mpsc::Receiver<TransportCall>,
) -> Option<(Url, Value, Responder)> {
    match receiver.recv().await {
        Some(TransportCall::Post { url, body, respond_to }) => Some((url, body, respond_to)),
        _ => None,
    }
}

/// HTTP failure as the transport reports it.
pub fn status(code: u16, body: &str) -> Result<Value, TransportError> {
    Err(TransportError::Status {
        status: code,
        body: body.to_string(),
    })
}

/// Navigator that remembers where it was sent.
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    visits: Arc<Mutex<Vec<Url>>>,
}

impl RecordingNavigator {
    pub fn visits(&self) -> Vec<Url> {
        self.visits.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn replace(&self, location: &Url) {
        self.visits.lock().unwrap().push(location.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_mock_transport() {
        let (transport, mut receiver) = create_mock_transport(10);

        let post_task = tokio::spawn(async move {
            let url = Url::parse("https://example.com/recovery.json").unwrap();
            transport.post_json(url, json!({"Email": "a@example.com"})).await
        });

        let (url, body, responder) = expect_post(&mut receiver).await.expect("Expected POST");
        assert_eq!(url.path(), "/recovery.json");
        assert_eq!(body["Email"], "a@example.com");
        responder.send(Ok(json!({"Ok": true}))).unwrap();

        let result = post_task.await.unwrap();
        assert_eq!(result, Ok(json!({"Ok": true})));
    }
}
