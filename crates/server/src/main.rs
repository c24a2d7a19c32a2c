use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use email_relay::{EmailRelay, ResendRelay};
use server_api::{
    log::TracingSubmissionLog, notification::NotificationRoute, submit_contact_body, ApiContext,
};
use shared::{
    error::{ErrorCode, SubmissionError},
    protocol::{AcceptedResponse, ErrorResponse, CONTACT_ROUTE},
};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::{error, info, warn};

mod config;

use config::{load_settings, Settings};

#[derive(Clone)]
struct AppState {
    api: ApiContext,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = load_settings()?;
    let api = build_context(&settings)?;
    if api.relay.is_none() {
        warn!("RESEND_API_KEY not set; contact submissions will only be logged");
    }

    let app = build_router(Arc::new(AppState { api }), settings.max_body_bytes);

    let addr: SocketAddr = settings
        .server_bind
        .parse()
        .with_context(|| format!("invalid bind address '{}'", settings.server_bind))?;
    info!(%addr, "server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_context(settings: &Settings) -> anyhow::Result<ApiContext> {
    let relay = match &settings.resend_api_key {
        Some(api_key) => {
            let relay = ResendRelay::new(api_key.clone(), &settings.relay_url)
                .context("failed to configure email relay")?;
            Some(Arc::new(relay) as Arc<dyn EmailRelay>)
        }
        None => None,
    };

    Ok(ApiContext {
        relay,
        log: Arc::new(TracingSubmissionLog),
        route: NotificationRoute {
            sender: settings.sender_address.clone(),
            operator: settings.operator_address.clone(),
        },
    })
}

fn build_router(state: Arc<AppState>, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route(CONTACT_ROUTE, post(http_submit_contact))
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn http_submit_contact(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<AcceptedResponse>, (StatusCode, Json<ErrorResponse>)> {
    let ack = submit_contact_body(&state.api, &body)
        .await
        .map_err(reject)?;
    Ok(Json(ack.into()))
}

fn reject(err: SubmissionError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match err.code() {
        ErrorCode::Validation => StatusCode::BAD_REQUEST,
        ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        error!(error = %err, "error processing contact form");
    } else {
        info!(error = %err, "rejected contact submission");
    }
    (status, Json(ErrorResponse::from(&err)))
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
