use std::time::Duration;

use anyhow::{Error, Result, anyhow};
use reqwest::{Client, StatusCode, Url, header::CONTENT_TYPE};
use tracing::{debug, info};

use crate::{config::Config, models::validation::validate_webhook_url};

pub struct ChatWebhookClient {
    http_client: Client,
    webhook_url: Url,
}

impl ChatWebhookClient {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let webhook_url = config
            .webhook_url
            .as_deref()
            .ok_or_else(|| anyhow!("webhook URL not set, pass --webhook-url or set WEBHOOK_URL"))?;
        let webhook_url = validate_webhook_url(webhook_url)?;

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| anyhow!("Failed to create HTTP client: {}", e))?;

        // The query string carries the webhook key and token.
        info!(
            host = webhook_url.host_str().unwrap_or_default(),
            path = webhook_url.path(),
            "Google Chat webhook client initialized"
        );

        Ok(Self {
            http_client,
            webhook_url,
        })
    }

    /// Posts a serialized card. Anything but `200 OK` is an error carrying
    /// the response body.
    pub async fn send_message(&self, payload: Vec<u8>) -> Result<(), Error> {
        debug!(payload_bytes = payload.len(), "Sending Google Chat message");

        let response = self
            .http_client
            .post(self.webhook_url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(|e| anyhow!("sending http request failed: {}", e))?;

        let status = response.status();
        if status == StatusCode::OK {
            info!("Google Chat message sent successfully");
            return Ok(());
        }

        let body = response
            .text()
            .await
            .map_err(|e| anyhow!("failed to read response body: {}", e))?;

        Err(anyhow!(
            "unexpected HTTP status code {} ({})\n got body: {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("unknown"),
            body
        ))
    }
}
