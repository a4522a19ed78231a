use anyhow::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

/// Status and raw body of an HTTP exchange
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Posts JSON to the registration endpoint.
///
/// An `Err` means no response arrived (DNS, connection, timeout); any HTTP
/// status, including errors, comes back as `Ok`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(&self, url: &str, body: &Value) -> Result<TransportResponse>;
}
