pub mod config;

pub mod handlers {
    mod post_webhook;
    pub use post_webhook::webhook_handler;
    mod ping;
    pub use ping::ping_handler;
}

pub mod models {
    pub mod error;
    pub use error::RelibotError;

    pub mod payload;
    pub use payload::InboundMessage;

    pub mod failure_report;
    pub use failure_report::FailureReport;

    pub mod response;
    pub use response::WebhookResponse;
}

pub mod services {
    pub mod failure_report;
    pub mod supabase;
}

use axum::http::StatusCode;
use axum::routing::{get, post, Router};
use color_eyre::eyre::Result;
use handlers::{ping_handler, webhook_handler};
use secrecy::SecretString;
use std::time::Duration;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_error::ErrorLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};
use tracing_tree::HierarchicalLayer;

/// Upper bound on one insert attempt. The webhook caller is waiting on us,
/// so a hung downstream store must not hang the inbound request forever.
const OUTBOUND_TIMEOUT: Duration = Duration::from_secs(10);

#[tracing::instrument]
#[allow(clippy::expect_used, clippy::redundant_pub_crate)]
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
        info!("Ctrl-C received");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        info!("Signal is received");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Starting graceful shutdown");
}

#[tracing::instrument]
async fn fallback(uri: axum::http::Uri) -> impl axum::response::IntoResponse {
    let status = StatusCode::NOT_FOUND;
    warn!(
        %status,
        %uri,
        "Failed to serve",
    );
    (status, format!("No route {uri}"))
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub supabase_url: String,
    pub anon_key: SecretString,
    pub service_role_key: SecretString,
    pub reqwest_client: reqwest::Client,
}

#[allow(clippy::missing_errors_doc)]
pub fn setup_tracing() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .map_or_else(|_| EnvFilter::new("info"), |env_filter| env_filter);

    Registry::default()
        .with(env_filter)
        .with(
            HierarchicalLayer::new(2)
                .with_targets(true)
                .with_bracketed_fields(true),
        )
        .with(ErrorLayer::default())
        .init();

    info!("Initialized tracing and logging systems");

    Ok(())
}

#[tracing::instrument]
pub fn setup_app(settings: &config::Application) -> Result<Router> {
    let reqwest_client = reqwest::Client::builder()
        .timeout(OUTBOUND_TIMEOUT)
        .build()?;
    info!("Created reqwest client");

    let state = AppState {
        supabase_url: settings.base.supabase_url.clone(),
        anon_key: settings.anon_key.clone(),
        service_role_key: settings.service_role_key.clone(),
        reqwest_client,
    };

    Ok(Router::new()
        .fallback(fallback)
        .route("/webhook", post(webhook_handler))
        .route("/ping", get(ping_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}
