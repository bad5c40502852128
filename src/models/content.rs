use std::fmt::{Display, Formatter};

use chrono::{DateTime, SecondsFormat, Utc};

use crate::models::{
    context::{
        EVENT_ACTION_KEY, EVENT_CREATED_AT_KEY, EVENT_KEY, EVENT_NAME_KEY, EVENT_URL_KEY,
        EventContext, JOB_ERROR_MESSAGE_KEY, JOB_NAME_KEY, JOB_STATUS_KEY, JobContext, REF_KEY,
        REPOSITORY_KEY, RUN_ID_KEY, TRIGGERING_ACTOR_KEY, WORKFLOW_KEY,
    },
    status::JobStatus,
};

pub const SUCCESS_HEADER_ICON_URL: &str = "https://github.githubassets.com/favicons/favicon.png";
pub const FAILURE_HEADER_ICON_URL: &str =
    "https://github.githubassets.com/favicons/favicon-failure.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Issue,
    Release,
    Workflow,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Issue => "issue",
            EventKind::Release => "release",
            EventKind::Workflow => "workflow",
        }
    }
}

impl Display for EventKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The event-specific part of a notification, read out of the contexts once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventTemplate {
    Issue {
        action: String,
        title: String,
        created_at: String,
        html_url: String,
    },
    Release {
        action: String,
        name: String,
        created_at: String,
        html_url: String,
    },
    Workflow {
        workflow: String,
        repository: String,
        run_id: String,
        status: JobStatus,
        job: String,
        error_message: Option<String>,
    },
}

impl EventTemplate {
    pub fn from_contexts(event: &EventContext, job: &JobContext) -> Self {
        match event.get(EVENT_NAME_KEY).as_str() {
            "issues" => EventTemplate::Issue {
                action: event.get_at(&[EVENT_KEY, EVENT_ACTION_KEY]),
                title: event.get_at(&[EVENT_KEY, "issue", "title"]),
                created_at: event.get_at(&[EVENT_KEY, "issue", EVENT_CREATED_AT_KEY]),
                html_url: event.get_at(&[EVENT_KEY, "issue", EVENT_URL_KEY]),
            },
            "release" => EventTemplate::Release {
                action: event.get_at(&[EVENT_KEY, EVENT_ACTION_KEY]),
                name: event.get_at(&[EVENT_KEY, "release", "name"]),
                created_at: event.get_at(&[EVENT_KEY, "release", EVENT_CREATED_AT_KEY]),
                html_url: event.get_at(&[EVENT_KEY, "release", EVENT_URL_KEY]),
            },
            _ => {
                let error_message = job.get(JOB_ERROR_MESSAGE_KEY);
                EventTemplate::Workflow {
                    workflow: event.get(WORKFLOW_KEY),
                    repository: event.get(REPOSITORY_KEY),
                    run_id: event.get(RUN_ID_KEY),
                    status: JobStatus::from_string(&job.get(JOB_STATUS_KEY)),
                    job: job.get(JOB_NAME_KEY),
                    error_message: (!error_message.is_empty()).then_some(error_message),
                }
            }
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            EventTemplate::Issue { .. } => EventKind::Issue,
            EventTemplate::Release { .. } => EventKind::Release,
            EventTemplate::Workflow { .. } => EventKind::Workflow,
        }
    }
}

/// Flat content of one notification card. Every field is always present,
/// missing input degrades to an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationContent {
    pub title: String,
    pub subtitle: String,
    pub git_ref: String,
    pub triggering_actor: String,
    pub timestamp: String,
    pub click_url: String,
    pub header_icon_url: String,
    pub event_kind: EventKind,
    pub repo: String,
}

impl NotificationContent {
    /// Builds the card content for one run. `now` is only used as the
    /// timestamp of workflow notifications.
    pub fn select(event: &EventContext, job: &JobContext, now: DateTime<Utc>) -> Self {
        let template = EventTemplate::from_contexts(event, job);
        let event_kind = template.kind();

        let (title, subtitle, timestamp, click_url, header_icon_url) = match template {
            EventTemplate::Issue {
                action,
                title,
                created_at,
                html_url,
            } => (
                format!("A issue is {}", action),
                format!("Issue title: <b>{}</b>", title),
                created_at,
                html_url,
                SUCCESS_HEADER_ICON_URL,
            ),
            EventTemplate::Release {
                action,
                name,
                created_at,
                html_url,
            } => (
                format!("A release is {}", action),
                format!("Release name: <b>{}</b>", name),
                created_at,
                html_url,
                SUCCESS_HEADER_ICON_URL,
            ),
            EventTemplate::Workflow {
                workflow,
                repository,
                run_id,
                status,
                job,
                error_message,
            } => {
                let click_url = format!(
                    "https://github.com/{}/actions/runs/{}",
                    repository, run_id
                );
                let timestamp = now.to_rfc3339_opts(SecondsFormat::Secs, true);

                if status.is_failure() {
                    let mut subtitle =
                        format!("Workflow: <b>{}</b> - Job: <b>{}</b>", workflow, job);
                    if let Some(error_message) = error_message {
                        subtitle.push_str(&format!("<br>Error: {}", error_message));
                    }
                    (
                        "GitHub workflow failed".to_string(),
                        subtitle,
                        timestamp,
                        click_url,
                        FAILURE_HEADER_ICON_URL,
                    )
                } else {
                    (
                        format!("GitHub workflow {}", status),
                        format!("Workflow: <b>{}</b>", workflow),
                        timestamp,
                        click_url,
                        SUCCESS_HEADER_ICON_URL,
                    )
                }
            }
        };

        Self {
            title,
            subtitle,
            git_ref: event.get(REF_KEY),
            triggering_actor: event.get(TRIGGERING_ACTOR_KEY),
            timestamp,
            click_url,
            header_icon_url: header_icon_url.to_string(),
            event_kind,
            repo: event.get(REPOSITORY_KEY),
        }
    }
}
