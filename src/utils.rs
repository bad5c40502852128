use anyhow::{Error, Result};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::{
    clients::chat::ChatWebhookClient,
    config::{Config, GITHUB_CONTEXT_ENV_KEY, JOB_CONTEXT_ENV_KEY},
    models::{
        card,
        content::NotificationContent,
        context::{
            EventContext, JOB_NAME_KEY, JOB_STATUS_KEY, JobContext, REPOSITORY_KEY, parse_context,
        },
        status::{JobStatus, NotificationStatus},
    },
};

/// Content selection followed by card serialization.
pub fn build_payload(
    event: &EventContext,
    job: &JobContext,
    now: DateTime<Utc>,
) -> Result<Vec<u8>, Error> {
    let content = NotificationContent::select(event, job, now);

    debug!(
        event_kind = %content.event_kind,
        title = %content.title,
        repo = %content.repo,
        "Notification content selected"
    );

    card::serialize(&content)
}

pub async fn process_notification(
    config: &Config,
    now: DateTime<Utc>,
) -> Result<NotificationStatus, Error> {
    let event: EventContext = parse_context(GITHUB_CONTEXT_ENV_KEY, config.github_context()?)?;
    let job: JobContext = parse_context(JOB_CONTEXT_ENV_KEY, config.job_context()?)?;

    let status = JobStatus::from_string(&job.get(JOB_STATUS_KEY));
    if !status.is_failure() {
        info!(job_status = %status, "Job did not fail, skipping notification");
        return Ok(NotificationStatus::Skipped);
    }

    let payload = build_payload(&event, &job, now)?;

    let client = ChatWebhookClient::new(config)?;
    client.send_message(payload).await?;

    info!(
        repository = %event.get(REPOSITORY_KEY),
        job = %job.get(JOB_NAME_KEY),
        "Workflow failure notification delivered"
    );

    Ok(NotificationStatus::Sent)
}
