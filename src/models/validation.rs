use anyhow::{Result, anyhow};
use reqwest::Url;

pub fn validate_webhook_url(webhook_url: &str) -> Result<Url> {
    if webhook_url.is_empty() {
        return Err(anyhow!("Webhook URL cannot be empty"));
    }

    let url = Url::parse(webhook_url).map_err(|e| anyhow!("Webhook URL is not valid: {}", e))?;

    if url.scheme() != "https" && url.scheme() != "http" {
        return Err(anyhow!(
            "Webhook URL must use http or https, got '{}'",
            url.scheme()
        ));
    }

    if url.host_str().is_none() {
        return Err(anyhow!("Webhook URL has no host"));
    }

    Ok(url)
}
