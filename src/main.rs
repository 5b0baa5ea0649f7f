//! WordGate webhook receiver.
//!
//! Verifies inbound deliveries and logs each accepted event. Applications
//! embedding the library register their own `WebhookEventHandler`s instead.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::routing::get;
use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use wordgate::adapters::http::{webhook_router, WebhookAppState};
use wordgate::application::{HandleWebhookHandler, WebhookRouter};
use wordgate::config::AppConfig;
use wordgate::domain::webhook::{EventEnvelope, EventType, WebhookError};
use wordgate::ports::WebhookEventHandler;

/// Logs every known event type it receives.
struct LoggingHandler;

#[async_trait]
impl WebhookEventHandler for LoggingHandler {
    fn handles(&self) -> Vec<EventType> {
        EventType::KNOWN.iter().copied().map(EventType::from).collect()
    }

    async fn handle(&self, event: &EventEnvelope) -> Result<(), WebhookError> {
        tracing::info!(
            event_type = %event.event_type,
            app_id = event.app_id,
            data = %event.data,
            "Received event"
        );
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.server.log_level))?;
    if config.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    config.validate()?;
    let verifier = config.webhook.verifier()?;
    tracing::info!(
        max_age_secs = verifier.max_age_secs(),
        max_future_skew_secs = verifier.max_future_skew_secs(),
        "Webhook verifier configured"
    );

    let router = WebhookRouter::new().register(Arc::new(LoggingHandler));
    let state = WebhookAppState::new(HandleWebhookHandler::new(
        Arc::new(verifier),
        Arc::new(router),
    ));

    let app = Router::new()
        .route("/health", get(|| async { "OK" }))
        .merge(webhook_router().with_state(state))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    tracing::info!(%addr, "Webhook receiver listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
