//! Service entry point: configuration, wiring, and the axum server.

use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use learnpath::adapters::http::{api_routes, AppHandlers, SessionRegistry};
use learnpath::adapters::mail::SmtpMailRelay;
use learnpath::adapters::report::PdfReportRenderer;
use learnpath::adapters::storage::JsonSnapshotStore;
use learnpath::application::handlers::{
    ApplyActionHandler, ExportReportHandler, SendReviewHandler,
};
use learnpath::config::AppConfig;
use learnpath::domain::catalog::Catalog;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    let catalog = Catalog::builtin();
    let registry = SessionRegistry::new();

    let snapshot_store = Arc::new(JsonSnapshotStore::new(&config.storage.snapshot_path));
    let mail_relay = Arc::new(SmtpMailRelay::new(config.email.clone()));
    let report_renderer = Arc::new(PdfReportRenderer::new());

    let handlers = AppHandlers::new(
        catalog,
        registry,
        Arc::new(ApplyActionHandler::new(catalog, snapshot_store)),
        Arc::new(ExportReportHandler::new(report_renderer)),
        Arc::new(SendReviewHandler::new(mail_relay)),
    );

    let cors = if config.is_production() {
        CorsLayer::new()
    } else {
        CorsLayer::permissive()
    };

    let app = api_routes(handlers)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr = config.server.socket_addr()?;
    info!(%addr, mail_configured = config.email.is_configured(), "starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
