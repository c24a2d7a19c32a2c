use chrono::{DateTime, Utc};
use email_relay::RelayError;
use shared::domain::{ContactMessage, SubmissionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    RelayNotConfigured,
    RelayFailed,
}

#[derive(Debug, Clone)]
pub struct SubmissionRecord {
    pub submission_id: SubmissionId,
    pub received_at: DateTime<Utc>,
    pub message: ContactMessage,
    pub rendered_body: String,
    pub reason: FallbackReason,
}

/// Sink for submissions that were accepted without being relayed.
pub trait SubmissionLog: Send + Sync {
    fn record(&self, record: &SubmissionRecord);

    fn relay_failed(&self, submission_id: SubmissionId, error: &RelayError);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSubmissionLog;

impl SubmissionLog for TracingSubmissionLog {
    fn record(&self, record: &SubmissionRecord) {
        tracing::info!(
            submission_id = %record.submission_id,
            received_at = %record.received_at,
            name = record.message.name(),
            email = record.message.email(),
            message = record.message.message(),
            "contact form submission"
        );
        tracing::info!(
            submission_id = %record.submission_id,
            body = %record.rendered_body,
            "email body"
        );
        tracing::warn!(
            submission_id = %record.submission_id,
            reason = ?record.reason,
            "email service not configured; set RESEND_API_KEY to enable email sending"
        );
    }

    fn relay_failed(&self, submission_id: SubmissionId, error: &RelayError) {
        tracing::error!(%submission_id, %error, "email relay failed; falling back to log");
    }
}
