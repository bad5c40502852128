use anyhow::Result;
use chat_notifier::{
    config::Config, models::status::NotificationStatus, utils::process_notification,
};
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, Request, ResponseTemplate,
    matchers::{method, path},
};

use crate::{fixed_now, issue_event, workflow_event};

fn config_with(github_context: &Value, job_context: &Value, webhook_url: Option<String>) -> Config {
    Config {
        github_context: Some(github_context.to_string()),
        job_context: Some(job_context.to_string()),
        webhook_url,
        ..Config::default()
    }
}

/// Test: Failed jobs are rendered and posted to the webhook
#[tokio::test]
async fn test_failed_job_is_delivered() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/spaces/AAA/messages"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_with(
        &workflow_event(),
        &json!({ "status": "failure", "job": "test", "error_message": "boom" }),
        Some(format!("{}/v1/spaces/AAA/messages", server.uri())),
    );

    let status = process_notification(&config, fixed_now()).await?;
    assert_eq!(status, NotificationStatus::Sent);

    let requests: Vec<Request> = server.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 1);

    let body: Value = serde_json::from_slice(&requests[0].body)?;
    let header = &body["cardsV2"]["card"]["header"];
    assert_eq!(header["title"], "GitHub workflow failed");
    assert_eq!(
        header["subtitle"],
        "Workflow: <b>ci</b> - Job: <b>test</b><br>Error: boom"
    );

    Ok(())
}

/// Test: Non-failure statuses are a silent no-op
#[tokio::test]
async fn test_non_failure_status_is_skipped() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    for job in [
        json!({ "status": "success", "job": "test" }),
        json!({ "status": "cancelled" }),
        json!({ "status": 1 }),
        json!({}),
    ] {
        let config = config_with(&workflow_event(), &job, Some(server.uri()));
        let status = process_notification(&config, fixed_now()).await?;
        assert_eq!(status, NotificationStatus::Skipped);
    }

    Ok(())
}

/// Test: Skipped runs do not need a webhook URL
#[tokio::test]
async fn test_skipped_run_without_webhook_url() -> Result<()> {
    let config = config_with(&issue_event(), &json!({ "status": "success" }), None);

    let status = process_notification(&config, fixed_now()).await?;
    assert_eq!(status, NotificationStatus::Skipped);

    Ok(())
}

/// Test: Missing context variables abort the run
#[tokio::test]
async fn test_missing_contexts_fail() -> Result<()> {
    let err = process_notification(&Config::default(), fixed_now())
        .await
        .expect_err("missing GITHUB_CONTEXT should fail");
    assert_eq!(err.to_string(), "environment var GITHUB_CONTEXT not set");

    let config = Config {
        github_context: Some(workflow_event().to_string()),
        job_context: Some(String::new()),
        ..Config::default()
    };
    let err = process_notification(&config, fixed_now())
        .await
        .expect_err("empty JOB_CONTEXT should fail");
    assert_eq!(err.to_string(), "environment var JOB_CONTEXT not set");

    Ok(())
}

/// Test: Unparsable context blobs abort the run
#[tokio::test]
async fn test_invalid_context_json_fails() -> Result<()> {
    let config = Config {
        github_context: Some("{ invalid json }".to_string()),
        job_context: Some(r#"{"status":"failure"}"#.to_string()),
        ..Config::default()
    };

    let err = process_notification(&config, fixed_now())
        .await
        .expect_err("invalid JSON should fail");
    assert!(err.to_string().starts_with("failed unmarshaling GITHUB_CONTEXT"));

    Ok(())
}

/// Test: Delivery failures propagate to the caller
#[tokio::test]
async fn test_delivery_failure_propagates() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_with(
        &workflow_event(),
        &json!({ "status": "failure", "job": "test" }),
        Some(format!("{}/hook", server.uri())),
    );

    let err = process_notification(&config, fixed_now())
        .await
        .expect_err("500 should fail");
    assert!(err.to_string().contains("unexpected HTTP status code 500"));

    Ok(())
}

/// Test: A `null` job context is a silent skip
#[tokio::test]
async fn test_null_job_context_is_skipped() -> Result<()> {
    let config = Config {
        github_context: Some(workflow_event().to_string()),
        job_context: Some("null".to_string()),
        ..Config::default()
    };

    let status = process_notification(&config, fixed_now()).await?;
    assert_eq!(status, NotificationStatus::Skipped);

    Ok(())
}

/// Test: A `null` github context still sends a notification with empty fields
#[tokio::test]
async fn test_null_github_context_is_delivered() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let config = Config {
        github_context: Some("null".to_string()),
        job_context: Some(json!({ "status": "failure", "job": "test" }).to_string()),
        webhook_url: Some(format!("{}/hook", server.uri())),
        ..Config::default()
    };

    let status = process_notification(&config, fixed_now()).await?;
    assert_eq!(status, NotificationStatus::Sent);

    let requests: Vec<Request> = server.received_requests().await.unwrap_or_default();
    let body: Value = serde_json::from_slice(&requests[0].body)?;
    let widgets = &body["cardsV2"]["card"]["sections"][0]["widgets"];
    assert_eq!(widgets[0]["decoratedText"]["text"], "<b>Repo: </b> ");
    assert_eq!(
        widgets[4]["buttonList"]["buttons"][0]["onClick"]["openLink"]["url"],
        "https://github.com//actions/runs/"
    );

    Ok(())
}
