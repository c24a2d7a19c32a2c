use async_trait::async_trait;
use reqwest::Client;
pub use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

pub const RESEND_API_URL: &str = "https://api.resend.com";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
    pub reply_to: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RelayReceipt {
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("invalid relay url '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("relay request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("relay rejected email with status {status}: {body}")]
    Rejected { status: StatusCode, body: String },
}

#[async_trait]
pub trait EmailRelay: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<RelayReceipt, RelayError>;
}

/// Resend REST client: one `POST /emails` per call, no retries.
#[derive(Debug, Clone)]
pub struct ResendRelay {
    http: Client,
    api_key: String,
    endpoint: Url,
}

impl ResendRelay {
    pub fn new(api_key: impl Into<String>, base_url: &str) -> Result<Self, RelayError> {
        let invalid = |source| RelayError::InvalidUrl {
            url: base_url.to_string(),
            source,
        };
        let base = Url::parse(&format!("{}/", base_url.trim_end_matches('/'))).map_err(invalid)?;
        let endpoint = base.join("emails").map_err(invalid)?;
        Ok(Self {
            http: Client::new(),
            api_key: api_key.into(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl EmailRelay for ResendRelay {
    async fn send(&self, email: &OutboundEmail) -> Result<RelayReceipt, RelayError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::Rejected { status, body });
        }

        // Any 2xx means the email was accepted; the receipt id is optional.
        let receipt = response
            .json::<RelayReceipt>()
            .await
            .unwrap_or_else(|err| {
                tracing::debug!(%err, "relay receipt unreadable");
                RelayReceipt::default()
            });
        tracing::debug!(relay_id = ?receipt.id, "relay accepted email");
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        extract::State,
        http::{HeaderMap, StatusCode as AxumStatus},
        routing::post,
        Json, Router,
    };
    use tokio::{net::TcpListener, sync::Mutex};

    use super::*;

    #[derive(Clone, Default)]
    struct RelayServerState {
        received: Arc<Mutex<Vec<(Option<String>, OutboundEmail)>>>,
        reject: bool,
    }

    async fn handle_emails(
        State(state): State<RelayServerState>,
        headers: HeaderMap,
        Json(email): Json<OutboundEmail>,
    ) -> (AxumStatus, Json<serde_json::Value>) {
        let auth = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        state.received.lock().await.push((auth, email));
        if state.reject {
            (
                AxumStatus::UNPROCESSABLE_ENTITY,
                Json(serde_json::json!({ "message": "domain not verified" })),
            )
        } else {
            (AxumStatus::OK, Json(serde_json::json!({ "id": "email-1" })))
        }
    }

    async fn spawn_relay_server(reject: bool) -> std::io::Result<(String, RelayServerState)> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = RelayServerState {
            reject,
            ..Default::default()
        };
        let app = Router::new()
            .route("/emails", post(handle_emails))
            .with_state(state.clone());
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        Ok((format!("http://{addr}"), state))
    }

    fn sample_email() -> OutboundEmail {
        OutboundEmail {
            from: "contact@agentex.com".into(),
            to: "owner@example.com".into(),
            subject: "New Domain Inquiry from A".into(),
            text: "hi".into(),
            reply_to: "a@b.com".into(),
        }
    }

    #[test]
    fn endpoint_appends_emails_path() {
        let relay = ResendRelay::new("key", "https://api.resend.com/").expect("relay");
        assert_eq!(relay.endpoint().as_str(), "https://api.resend.com/emails");
        assert!(matches!(
            ResendRelay::new("key", "not a url"),
            Err(RelayError::InvalidUrl { .. })
        ));
    }

    #[tokio::test]
    async fn send_posts_bearer_authorized_json() {
        let (url, state) = spawn_relay_server(false).await.expect("spawn server");
        let relay = ResendRelay::new("re_test", &url).expect("relay");

        let receipt = relay.send(&sample_email()).await.expect("send");
        assert_eq!(receipt.id.as_deref(), Some("email-1"));

        let received = state.received.lock().await;
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].0.as_deref(), Some("Bearer re_test"));
        assert_eq!(received[0].1, sample_email());
    }

    #[tokio::test]
    async fn non_success_status_is_rejected_error() {
        let (url, state) = spawn_relay_server(true).await.expect("spawn server");
        let relay = ResendRelay::new("re_test", &url).expect("relay");

        let err = relay.send(&sample_email()).await.expect_err("should fail");
        match err {
            RelayError::Rejected { status, body } => {
                assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
                assert!(body.contains("domain not verified"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(state.received.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn success_status_with_plain_body_is_accepted() {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        let app = Router::new().route("/emails", post(|| async { "queued" }));
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        let relay = ResendRelay::new("re_test", &format!("http://{addr}")).expect("relay");
        let receipt = relay.send(&sample_email()).await.expect("accepted");
        assert_eq!(receipt, RelayReceipt::default());
    }

    #[tokio::test]
    async fn unreachable_relay_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        drop(listener);

        let relay = ResendRelay::new("re_test", &format!("http://{addr}")).expect("relay");
        let err = relay.send(&sample_email()).await.expect_err("should fail");
        assert!(matches!(err, RelayError::Transport(_)));
    }
}
