use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use shared::protocol::{AcceptedResponse, ErrorResponse, CONTACT_ROUTE};
use thiserror::Error;
use url::Url;

use crate::form::ContactDraft;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    pub status: StatusCode,
    pub message: Option<String>,
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid server url '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("server rejected submission with status {status}")]
    Rejected {
        status: StatusCode,
        error: Option<String>,
    },
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),
}

#[async_trait]
pub trait ContactTransport: Send + Sync {
    async fn submit(&self, draft: &ContactDraft) -> Result<Accepted, TransportError>;
}

/// Posts drafts to the contact endpoint. Only the status class decides
/// success; response bodies are informational.
#[derive(Debug, Clone)]
pub struct HttpContactClient {
    http: Client,
    endpoint: Url,
}

impl HttpContactClient {
    pub fn new(server_url: &str) -> Result<Self, TransportError> {
        let endpoint = Url::parse(server_url)
            .and_then(|base| base.join(CONTACT_ROUTE))
            .map_err(|source| TransportError::InvalidUrl {
                url: server_url.to_string(),
                source,
            })?;
        Ok(Self {
            http: Client::new(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ContactTransport for HttpContactClient {
    async fn submit(&self, draft: &ContactDraft) -> Result<Accepted, TransportError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&draft.to_payload())
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let message = response
                .json::<AcceptedResponse>()
                .await
                .ok()
                .map(|body| body.message);
            Ok(Accepted { status, message })
        } else {
            let error = response
                .json::<ErrorResponse>()
                .await
                .ok()
                .map(|body| body.error);
            Err(TransportError::Rejected { status, error })
        }
    }
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
