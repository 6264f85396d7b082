use time::UtcOffset;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use evaluate_server::{
    app::App,
    config::ServerConfig,
    layers::{http::with_http_layers, sink::PayloadSinkLayer},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Use UTC timestamps
    let offset = UtcOffset::UTC;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json()
                .flatten_event(true)
                .with_timer(fmt::time::OffsetTime::new(
                    offset,
                    time::format_description::well_known::Rfc3339,
                ))
                .with_level(true)
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false),
        )
        .with(EnvFilter::from_default_env())
        .try_init()?;

    // Load configuration
    let settings = ServerConfig::load()?;
    info!(
        msg = "Loaded configuration",
        addr = %settings.server.addr(),
        body_limit_bytes = ?settings.server.body_limit_bytes,
        sink = ?settings.sink.kind,
        allowed_origins = ?settings.cors.allowed_origins
    );

    let router = App::new()
        .with_body_limit(settings.server.body_limit_bytes)
        .router()
        .layer(PayloadSinkLayer::from_kind(settings.sink.kind));
    let app = with_http_layers(router, &settings.cors)?;

    let addr = settings.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(msg = "Starting server", %addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!(msg = "Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            info!(msg = "Failed to listen for Ctrl+C", error = %e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                info!(msg = "Failed to install SIGTERM handler", error = %e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!(msg = "Received Ctrl+C, shutting down"),
        _ = terminate => info!(msg = "Received SIGTERM, shutting down"),
    }
}
