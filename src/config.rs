use anyhow::{Error, Result, anyhow};
use dotenvy::dotenv;
use serde::Deserialize;

pub const GITHUB_CONTEXT_ENV_KEY: &str = "GITHUB_CONTEXT";
pub const JOB_CONTEXT_ENV_KEY: &str = "JOB_CONTEXT";

#[derive(Clone, Copy, Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    pub github_context: Option<String>,
    pub job_context: Option<String>,

    pub webhook_url: Option<String>,

    #[serde(default = "default_request_timeout_seconds")]
    pub request_timeout_seconds: u64,

    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_request_timeout_seconds() -> u64 {
    10
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        dotenv().ok();

        let config = envy::from_env::<Self>()
            .map_err(|e| anyhow!("Invalid environmental variable: {}", e))?;
        Ok(config)
    }

    /// Replaces `WEBHOOK_URL` with the command line value when one was given.
    pub fn with_webhook_url(mut self, webhook_url: Option<String>) -> Self {
        if let Some(url) = webhook_url {
            self.webhook_url = Some(url);
        }
        self
    }

    pub fn github_context(&self) -> Result<&str, Error> {
        non_empty(self.github_context.as_deref(), GITHUB_CONTEXT_ENV_KEY)
    }

    pub fn job_context(&self) -> Result<&str, Error> {
        non_empty(self.job_context.as_deref(), JOB_CONTEXT_ENV_KEY)
    }
}

fn non_empty<'a>(value: Option<&'a str>, env_key: &str) -> Result<&'a str, Error> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(anyhow!("environment var {} not set", env_key)),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github_context: None,
            job_context: None,
            webhook_url: None,
            request_timeout_seconds: default_request_timeout_seconds(),
            log_format: LogFormat::default(),
        }
    }
}
