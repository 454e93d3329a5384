pub mod app;
pub mod config;
pub mod routes;

#[cfg(test)]
mod test_util;

use anyhow::Context;
use axum::Extension;
use entrait::Impl;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub async fn serve(app: app::App) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], app.config.port));
    let images_dir = app.config.images_dir.clone();

    let router = routes::router(&images_dir).layer(
        ServiceBuilder::new()
            // Enables logging. Use `RUST_LOG=tower_http=debug`
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .layer(Extension(Impl::new(app))),
    );

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("could not bind to {addr}"))?;
    tracing::info!("Server is running on port: {}", addr.port());

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("error running HTTP server")
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                tracing::error!("Failed to listen for Ctrl+C: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install terminate handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
