use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    Sent,
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobStatus {
    Failure,
    Other(String),
}

impl JobStatus {
    pub fn from_string(s: &str) -> Self {
        match s {
            "failure" => JobStatus::Failure,
            other => JobStatus::Other(other.to_string()),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, JobStatus::Failure)
    }

    pub fn as_str(&self) -> &str {
        match self {
            JobStatus::Failure => "failure",
            JobStatus::Other(s) => s,
        }
    }
}

impl Display for NotificationStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            NotificationStatus::Sent => write!(f, "sent"),
            NotificationStatus::Skipped => write!(f, "skipped"),
        }
    }
}

impl Display for JobStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.as_str())
    }
}
