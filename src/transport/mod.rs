//! Seams between a controller and the outside world: JSON over HTTP, and the
//! browser location.

mod navigation;
mod reqwest_transport;

pub use navigation::*;
pub use reqwest_transport::*;

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use crate::error::TransportError;

/// JSON exchange with the page's endpoints.
///
/// Implementations return `Err(TransportError::Status { .. })` for any
/// non-2xx answer, carrying the raw body.
#[async_trait]
pub trait HttpTransport: Send + Sync + 'static {
    async fn get_json(&self, url: Url) -> Result<Value, TransportError>;
    async fn post_json(&self, url: Url, body: Value) -> Result<Value, TransportError>;
}
