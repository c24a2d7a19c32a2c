use std::sync::Arc;

use chrono::Utc;
use email_relay::EmailRelay;
use serde_json::Value;
use shared::{
    domain::{Acknowledgement, SubmissionId},
    error::{SubmissionError, ValidationFailure},
    protocol::ContactPayload,
};

pub mod log;
pub mod notification;

use log::{FallbackReason, SubmissionLog, SubmissionRecord};
use notification::NotificationRoute;

#[derive(Clone)]
pub struct ApiContext {
    pub relay: Option<Arc<dyn EmailRelay>>,
    pub log: Arc<dyn SubmissionLog>,
    pub route: NotificationRoute,
}

/// Parses a raw request body. The body is treated as JSON whatever the
/// declared content type; anything unparseable is an unexpected fault.
/// Only an object can carry the fields: any other non-null value has none
/// of them, and `null` is a fault like malformed JSON.
pub fn parse_payload(body: &[u8]) -> Result<ContactPayload, SubmissionError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|err| SubmissionError::delivery(err.to_string()))?;
    match value {
        Value::Object(_) => serde_json::from_value(value)
            .map_err(|err| SubmissionError::delivery(err.to_string())),
        Value::Null => Err(SubmissionError::delivery("request body is null")),
        Value::Bool(_) | Value::Number(_) | Value::String(_) | Value::Array(_) => {
            Err(ValidationFailure::MissingField.into())
        }
    }
}

/// Validates one payload and attempts at most one relay send. Relay failures
/// are logged and reported as a recorded acknowledgement.
pub async fn submit_contact(
    ctx: &ApiContext,
    payload: ContactPayload,
) -> Result<Acknowledgement, SubmissionError> {
    let message = payload.validate()?;
    let submission_id = SubmissionId::new();

    let reason = match &ctx.relay {
        Some(relay) => {
            let email = notification::compose(&ctx.route, &message);
            match relay.send(&email).await {
                Ok(receipt) => {
                    tracing::info!(
                        %submission_id,
                        relay_id = ?receipt.id,
                        "contact message relayed"
                    );
                    return Ok(Acknowledgement::Relayed);
                }
                Err(err) => {
                    ctx.log.relay_failed(submission_id, &err);
                    FallbackReason::RelayFailed
                }
            }
        }
        None => FallbackReason::RelayNotConfigured,
    };

    let rendered_body = notification::render_body(&message);
    ctx.log.record(&SubmissionRecord {
        submission_id,
        received_at: Utc::now(),
        message,
        rendered_body,
        reason,
    });
    Ok(Acknowledgement::Recorded)
}

pub async fn submit_contact_body(
    ctx: &ApiContext,
    body: &[u8],
) -> Result<Acknowledgement, SubmissionError> {
    let payload = parse_payload(body)?;
    submit_contact(ctx, payload).await
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
