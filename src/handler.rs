//! Entry point for event-driven hosts (serverless triggers, webhooks).
//!
//! Instead of exiting the process, a successful run is reported as a
//! `{statusCode, body}` document the host hands back to its caller.

use crate::alert::{Alert, AlertEvent};
use crate::config::PublisherConfig;
use crate::publisher::{PublishError, publish};
use log::info;
use serde::Serialize;

pub const SUCCESS_MESSAGE: &str = "Issue created successfully";

/// Response document returned to the event host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResponse {
    pub status_code: u16,
    /// JSON-encoded payload.
    pub body: String,
}

impl HandlerResponse {
    fn ok(message: &str) -> Self {
        Self {
            status_code: 200,
            body: serde_json::Value::from(message).to_string(),
        }
    }
}

/// Publish the alert carried by `event`. Failures are returned, not encoded.
pub async fn handle(
    config: PublisherConfig,
    event: AlertEvent,
) -> Result<HandlerResponse, PublishError> {
    let alert = Alert::from(event);
    let outcome = publish(config, &alert).await?;
    info!("handled alert from {}: issue #{}", alert.app_name, outcome.issue.number);
    Ok(HandlerResponse::ok(SUCCESS_MESSAGE))
}
