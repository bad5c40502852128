mod process_tests;

use chat_notifier::models::context::{EventContext, JobContext};
use chrono::{DateTime, TimeZone, Utc};
use serde_json::{Value, json};

pub fn event_context(value: Value) -> EventContext {
    EventContext::new(value.as_object().cloned().expect("event context must be a JSON object"))
}

pub fn job_context(value: Value) -> JobContext {
    JobContext::new(value.as_object().cloned().expect("job context must be a JSON object"))
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 15).unwrap()
}

pub fn issue_event() -> Value {
    json!({
        "event_name": "issues",
        "ref": "refs/heads/main",
        "repository": "o/r",
        "triggering_actor": "alice",
        "event": {
            "action": "opened",
            "issue": {
                "title": "Bug X",
                "created_at": "2024-01-01T00:00:00Z",
                "html_url": "https://x/1"
            }
        }
    })
}

pub fn workflow_event() -> Value {
    json!({
        "event_name": "push",
        "ref": "refs/heads/main",
        "repository": "octo/app",
        "triggering_actor": "bob",
        "workflow": "ci",
        "run_id": "4242"
    })
}
