//! Waypoint HTTP server
//!
//! Main entry point for the travel-planner frontend service.

use std::{sync::Arc, time::Duration};

use application::{EmailService, PlannerSession, TripService};
use infrastructure::{
    AppConfig, MarkdownDocumentStore, PlannerAdapter, SendGridEmailAdapter,
};
use parking_lot::RwLock;
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "waypoint_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Waypoint v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load().unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    info!(
        host = %config.server.host,
        port = config.server.port,
        planner_url = %config.planner.base_url,
        "Configuration loaded"
    );

    // Planning backend and document store
    let planner = PlannerAdapter::new(config.planner.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize planner client: {e}"))?;
    let documents = MarkdownDocumentStore::new(config.documents.directory.clone());

    let trip_service = TripService::new(Arc::new(planner), Arc::new(documents));

    // Email capability is optional: without a sendgrid section the service
    // runs with sending disabled
    let email_service = match config.sendgrid.clone() {
        Some(sendgrid) => {
            let adapter = SendGridEmailAdapter::new(sendgrid)
                .map_err(|e| anyhow::anyhow!("Failed to initialize email client: {e}"))?;
            Some(Arc::new(EmailService::new(Arc::new(adapter))))
        },
        None => {
            warn!("No sendgrid configuration found; email sending is disabled");
            None
        },
    };

    let state = AppState {
        trip_service: Arc::new(trip_service),
        email_service,
        session: Arc::new(RwLock::new(PlannerSession::new())),
        config: Arc::new(config.clone()),
    };

    let app = routes::create_router(state);

    // CORS: open in development, restricted when origins are configured
    let cors_layer = if config.server.allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use axum::http::{HeaderValue, Method};
        let origins: Vec<HeaderValue> = config
            .server
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any)
    };

    let app = app.layer(TraceLayer::new_for_http()).layer(cors_layer);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    let shutdown_timeout =
        Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM) and handle graceful shutdown
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("Waiting up to {:?} for connections to close...", timeout);
    // The actual connection draining is handled by axum's graceful_shutdown
}
