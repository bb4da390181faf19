use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use tracing::{debug, instrument, warn};
use url::Url;

use super::HttpTransport;
use crate::error::TransportError;

/// Production transport backed by a shared `reqwest` client with a cookie
/// jar, so session cookies set by one page are sent by the next.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(user_agent: &str) -> Result<Self, TransportError> {
        let client = Client::builder()
            .cookie_store(true)
            .user_agent(user_agent)
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Ok(Self { client })
    }

    async fn exchange(&self, request: RequestBuilder) -> Result<Value, TransportError> {
        let response = request
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = body_or_diagnostic(response.text().await);
            warn!(status = status.as_u16(), "Endpoint answered with failure status");
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!(status = status.as_u16(), "Response received");
        response
            .json::<Value>()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))
    }
}

/// Body of a failure response; a body that cannot be read is replaced by a
/// note saying so, so the diagnostic never comes out empty by accident.
fn body_or_diagnostic<E: std::fmt::Display>(read: Result<String, E>) -> String {
    match read {
        Ok(body) => body,
        Err(e) => {
            warn!(error = %e, "Failure response body unreadable");
            format!("<unreadable body: {e}>")
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[instrument(skip_all, fields(url = %url))]
    async fn get_json(&self, url: Url) -> Result<Value, TransportError> {
        self.exchange(self.client.get(url)).await
    }

    #[instrument(skip_all, fields(url = %url))]
    async fn post_json(&self, url: Url, body: Value) -> Result<Value, TransportError> {
        self.exchange(self.client.post(url).json(&body)).await
    }
}
