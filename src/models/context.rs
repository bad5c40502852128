use anyhow::{Error, Result, anyhow};
use serde_json::{Map, Value};

pub const REF_KEY: &str = "ref";
pub const REPOSITORY_KEY: &str = "repository";
pub const TRIGGERING_ACTOR_KEY: &str = "triggering_actor";
pub const EVENT_NAME_KEY: &str = "event_name";
pub const EVENT_KEY: &str = "event";
pub const EVENT_ACTION_KEY: &str = "action";
pub const EVENT_URL_KEY: &str = "html_url";
pub const EVENT_CREATED_AT_KEY: &str = "created_at";
pub const WORKFLOW_KEY: &str = "workflow";
pub const RUN_ID_KEY: &str = "run_id";

pub const JOB_STATUS_KEY: &str = "status";
pub const JOB_NAME_KEY: &str = "job";
pub const JOB_ERROR_MESSAGE_KEY: &str = "error_message";

/// Snapshot of the `github` context of the triggering workflow run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventContext(Map<String, Value>);

/// Snapshot of the `job` context of the job being reported on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobContext(Map<String, Value>);

impl EventContext {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn get(&self, key: &str) -> String {
        get_string(&self.0, key)
    }

    pub fn get_at(&self, path: &[&str]) -> String {
        get_string_at(&self.0, path)
    }
}

impl JobContext {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn get(&self, key: &str) -> String {
        get_string(&self.0, key)
    }
}

impl From<Map<String, Value>> for EventContext {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

impl From<Map<String, Value>> for JobContext {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

/// Parses a context blob. The blob has to be a JSON object or `null`, which
/// reads as an empty context.
pub fn parse_context<T>(name: &str, raw: &str) -> Result<T, Error>
where
    T: From<Map<String, Value>>,
{
    let value = serde_json::from_str::<Value>(raw)
        .map_err(|e| anyhow!("failed unmarshaling {}: {}", name, e))?;

    match value {
        Value::Object(fields) => Ok(T::from(fields)),
        Value::Null => Ok(T::from(Map::new())),
        other => Err(anyhow!(
            "failed unmarshaling {}: expected a JSON object, got {}",
            name,
            json_type_name(&other)
        )),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Returns the string stored under `key`, or an empty string when the key is
/// absent or holds anything other than a string.
pub fn get_string(fields: &Map<String, Value>, key: &str) -> String {
    fields
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_default()
}

/// Walks nested objects along `path` and reads the last key as a string.
/// Any missing or non-object step yields an empty string.
pub fn get_string_at(fields: &Map<String, Value>, path: &[&str]) -> String {
    let Some((last, parents)) = path.split_last() else {
        return String::new();
    };

    let mut current = fields;
    for key in parents {
        match current.get(*key).and_then(Value::as_object) {
            Some(nested) => current = nested,
            None => return String::new(),
        }
    }

    get_string(current, last)
}
