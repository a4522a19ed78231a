use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::config::settings::SubmissionSettings;
use crate::submission::transport::{Transport, TransportResponse};

/// reqwest-backed transport for registration submissions
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(user_agent: &str, timeout_secs: Option<u64>) -> Result<Self> {
        let client = Self::build_client(user_agent, timeout_secs)?;
        Ok(Self { client })
    }

    pub fn from_settings(settings: &SubmissionSettings) -> Result<Self> {
        Self::new(&settings.user_agent, settings.timeout_secs)
    }

    fn build_client(user_agent: &str, timeout_secs: Option<u64>) -> Result<Client> {
        let builder = Client::builder().user_agent(user_agent);
        let builder = match timeout_secs {
            Some(secs) => builder.timeout(Duration::from_secs(secs)),
            None => builder,
        };
        builder.build().context("Failed to build HTTP client")
    }

    async fn send_post_request(&self, url: &str, body: &Value) -> Result<reqwest::Response> {
        self.client
            .post(url)
            .json(body)
            .send()
            .await
            .context("Failed to send POST request")
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<TransportResponse> {
        let response = self.send_post_request(url, body).await?;
        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read response body")?;
        Ok(TransportResponse { status, body })
    }
}
